use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::constants::operating_hours::MAX_HOUR;
use crate::errors::AppError;
use crate::gql;
use crate::state::AppState;

use super::auth::require_admin;

fn validate_hours(open_hour: u32, close_hour: u32) -> Result<(), AppError> {
    if open_hour > MAX_HOUR || close_hour > MAX_HOUR + 1 {
        return Err(AppError::Validation(format!(
            "hours out of range: {open_hour}-{close_hour}"
        )));
    }
    if close_hour <= open_hour {
        return Err(AppError::Validation(format!(
            "closeHour must be after openHour: {open_hour}-{close_hour}"
        )));
    }
    Ok(())
}

// GET /api/operating-hours
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursQuery {
    pub venue_id: Option<i64>,
}

pub async fn list_hours(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HoursQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let data = state
        .backend
        .execute(
            gql::QUERY_GET_OPERATING_HOURS,
            json!({ "venueId": query.venue_id }),
            state.service_token(),
        )
        .await?;

    Ok(Json(data["operatingHours"].clone()))
}

// POST /api/operating-hours
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHoursRequest {
    pub venue_id: i64,
    pub open_hour: u32,
    pub close_hour: u32,
}

pub async fn create_hours(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<CreateHoursRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let session = require_admin(&headers, &state.config)?;
    validate_hours(body.open_hour, body.close_hour)?;

    let data = state
        .backend
        .execute(
            gql::MUTATION_CREATE_OPERATING_HOUR,
            json!({
                "venueId": body.venue_id,
                "openHour": body.open_hour,
                "closeHour": body.close_hour,
            }),
            Some(&session.token),
        )
        .await?;

    Ok(Json(data["createOperatingHour"].clone()))
}

// POST /api/operating-hours/update
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHoursRequest {
    pub id: i64,
    pub open_hour: u32,
    pub close_hour: u32,
}

pub async fn update_hours(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<UpdateHoursRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let session = require_admin(&headers, &state.config)?;
    validate_hours(body.open_hour, body.close_hour)?;

    let data = state
        .backend
        .execute(
            gql::MUTATION_UPDATE_OPERATING_HOUR,
            json!({
                "id": body.id,
                "openHour": body.open_hour,
                "closeHour": body.close_hour,
            }),
            Some(&session.token),
        )
        .await?;

    Ok(Json(data["updateOperatingHour"].clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_hours() {
        assert!(validate_hours(6, 22).is_ok());
        assert!(validate_hours(0, 24).is_ok());
        assert!(validate_hours(22, 6).is_err());
        assert!(validate_hours(10, 10).is_err());
        assert!(validate_hours(25, 26).is_err());
    }
}
