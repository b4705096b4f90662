use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};

use crate::constants::auth::TOKEN_COOKIE_NAME;
use crate::errors::AppError;
use crate::state::AppState;

use super::auth::get_cookie;

/// POST /api/graphql — authenticated passthrough to the backend. The
/// session token rides along when present; error mapping is shared with
/// every other bridge endpoint.
pub async fn graphql(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let Some(query) = body["query"].as_str() else {
        return Err(AppError::Validation("query is required".to_string()));
    };
    let variables = body.get("variables").cloned().unwrap_or(Value::Null);

    let token = get_cookie(&headers, TOKEN_COOKIE_NAME);

    let data = state
        .backend
        .execute(query, variables, token.as_deref())
        .await?;

    Ok(Json(json!({ "data": data })))
}
