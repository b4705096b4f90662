pub mod graphql;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("GraphQL endpoint is not configured")]
    MissingEndpoint,

    /// The backend answered with a non-empty `errors` array; `code` is
    /// the first error's extension code when present.
    #[error("{message}")]
    Graphql {
        message: String,
        code: Option<String>,
    },

    #[error("booking service unreachable: {0}")]
    Unreachable(String),
}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::MissingEndpoint => {
                AppError::Config("missing GQL_HTTP_ENDPOINT".to_string())
            }
            BackendError::Unreachable(msg) => AppError::Unreachable(msg),
            BackendError::Graphql { message, code } => match code.as_deref() {
                Some("UNAUTHENTICATED") => AppError::Unauthorized,
                Some("FORBIDDEN") => AppError::Forbidden,
                _ => {
                    // A uniqueness violation on the slot table is the
                    // expected loser of the check-then-create race.
                    if message.contains("Unique constraint failed")
                        && message.contains("BookingDetail")
                    {
                        AppError::SlotConflict(message)
                    } else {
                        AppError::Upstream(message)
                    }
                }
            },
        }
    }
}

/// The upstream GraphQL boundary. One method so tests can script
/// responses per call.
#[async_trait]
pub trait BookingBackend: Send + Sync {
    /// Execute a GraphQL document and return the `data` value.
    async fn execute(
        &self,
        query: &str,
        variables: Value,
        token: Option<&str>,
    ) -> Result<Value, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_maps_to_unauthorized() {
        let err: AppError = BackendError::Graphql {
            message: "Invalid token".to_string(),
            code: Some("UNAUTHENTICATED".to_string()),
        }
        .into();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[test]
    fn test_slot_unique_violation_maps_to_conflict() {
        let err: AppError = BackendError::Graphql {
            message: "Unique constraint failed on the constraint: `BookingDetail_key`".to_string(),
            code: None,
        }
        .into();
        assert!(matches!(err, AppError::SlotConflict(_)));
    }

    #[test]
    fn test_other_graphql_error_maps_to_upstream() {
        let err: AppError = BackendError::Graphql {
            message: "Field is under maintenance".to_string(),
            code: None,
        }
        .into();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[test]
    fn test_unreachable_maps_to_bad_gateway() {
        let err: AppError = BackendError::Unreachable("connection refused".to_string()).into();
        assert!(matches!(err, AppError::Unreachable(_)));
    }
}
