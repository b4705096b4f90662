pub mod auth;
pub mod bookings;
pub mod cart;
pub mod dashboard;
pub mod fields;
pub mod health;
pub mod operating_hours;
pub mod proxy;
pub mod venues;

use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Parse a list field out of a GraphQL `data` value. A null or missing
/// list is an empty one; anything else malformed is an upstream fault.
pub(crate) fn parse_list<T: DeserializeOwned>(
    value: &serde_json::Value,
    what: &str,
) -> Result<Vec<T>, AppError> {
    if value.is_null() {
        return Ok(vec![]);
    }

    serde_json::from_value(value.clone())
        .map_err(|e| AppError::Upstream(format!("unexpected {what} payload: {e}")))
}
