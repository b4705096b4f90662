use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{BackendError, BookingBackend};
use crate::constants::api::UPSTREAM_TIMEOUT_MS;

pub struct GraphqlBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl GraphqlBackend {
    pub fn new(endpoint: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(UPSTREAM_TIMEOUT_MS))
            .build()
            .unwrap_or_default();

        Self { endpoint, client }
    }
}

#[async_trait]
impl BookingBackend for GraphqlBackend {
    async fn execute(
        &self,
        query: &str,
        variables: Value,
        token: Option<&str>,
    ) -> Result<Value, BackendError> {
        if self.endpoint.is_empty() {
            return Err(BackendError::MissingEndpoint);
        }

        let body = json!({
            "query": query,
            "variables": variables,
        });

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        let status = resp.status();
        let data: Value = resp
            .json()
            .await
            .map_err(|e| BackendError::Unreachable(format!("invalid backend response: {e}")))?;

        if let Some(errors) = data.get("errors").and_then(|v| v.as_array()) {
            if let Some(first) = errors.first() {
                let message = first["message"]
                    .as_str()
                    .unwrap_or("GraphQL error")
                    .to_string();
                let code = first["extensions"]["code"]
                    .as_str()
                    .map(|s| s.to_string());
                return Err(BackendError::Graphql { message, code });
            }
        }

        if !status.is_success() {
            return Err(BackendError::Unreachable(format!(
                "backend returned {status}"
            )));
        }

        Ok(data.get("data").cloned().unwrap_or(Value::Null))
    }
}
