use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::dates;
use crate::errors::AppError;
use crate::gql;
use crate::models::{Field, OperatingHours};
use crate::services::availability::{occupied_hours, slot_grid, SlotOption};
use crate::state::AppState;

use super::auth::require_admin;

// GET /api/fields
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldsQuery {
    pub venue_id: Option<i64>,
}

pub async fn list_fields(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FieldsQuery>,
) -> Result<Json<Vec<Field>>, AppError> {
    let data = state
        .backend
        .execute(
            gql::QUERY_GET_FIELDS,
            json!({ "venueId": query.venue_id }),
            state.service_token(),
        )
        .await?;

    let fields: Vec<Field> = super::parse_list(&data["fields"], "fields")?;

    Ok(Json(fields))
}

// GET /api/fields/:id
pub async fn get_field(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Field>, AppError> {
    let field = fetch_field(&state, id).await?;
    Ok(Json(field))
}

async fn fetch_field(state: &AppState, id: i64) -> Result<Field, AppError> {
    let data = state
        .backend
        .execute(
            gql::QUERY_GET_FIELD_BY_ID,
            json!({ "id": id }),
            state.service_token(),
        )
        .await?;

    if data["field"].is_null() {
        return Err(AppError::NotFound(format!("field {id}")));
    }

    serde_json::from_value(data["field"].clone())
        .map_err(|e| AppError::Upstream(format!("unexpected field payload: {e}")))
}

// GET /api/fields/:id/slots
#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotGridResponse {
    pub field_id: i64,
    pub date: String,
    pub open_hour: u32,
    pub close_hour: u32,
    pub slots: Vec<SlotOption>,
}

/// The public slot picker: operating hours overlaid with the hours
/// already taken on that date.
pub async fn field_slots(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotGridResponse>, AppError> {
    let date_key = dates::to_date_key(&query.date)
        .ok_or_else(|| AppError::Validation(format!("invalid date: {}", query.date)))?;

    let field = fetch_field(&state, id).await?;
    let token = state.service_token();

    let (hours_data, bookings_data) = tokio::try_join!(
        state.backend.execute(
            gql::QUERY_GET_OPERATING_HOURS,
            json!({ "venueId": field.venue_id }),
            token,
        ),
        state.backend.execute(
            gql::QUERY_CHECK_AVAILABILITY,
            json!({ "fieldId": id, "date": date_key }),
            token,
        ),
    )?;

    let hours: Vec<OperatingHours> =
        serde_json::from_value(hours_data["operatingHours"].clone()).unwrap_or_default();
    let hours = hours.first().copied().unwrap_or_default();

    let bookings: Vec<crate::models::Booking> =
        super::parse_list(&bookings_data["bookings"], "bookings")?;
    let booked = occupied_hours(&bookings, id, &date_key, None);

    Ok(Json(SlotGridResponse {
        field_id: id,
        date: date_key,
        open_hour: hours.open_hour,
        close_hour: hours.close_hour,
        slots: slot_grid(hours.open_hour, hours.close_hour, &booked),
    }))
}

// POST /api/fields
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFieldRequest {
    pub name: String,
    pub venue_id: i64,
    pub status: Option<String>,
}

pub async fn create_field(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<CreateFieldRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let session = require_admin(&headers, &state.config)?;

    if body.name.trim().is_empty() {
        return Err(AppError::Validation("field name is required".to_string()));
    }

    let data = state
        .backend
        .execute(
            gql::MUTATION_CREATE_FIELD,
            json!({ "name": body.name.trim(), "venueId": body.venue_id, "status": body.status }),
            Some(&session.token),
        )
        .await?;

    Ok(Json(data["createField"].clone()))
}

// POST /api/fields/update
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFieldRequest {
    pub id: i64,
    pub name: Option<String>,
    pub venue_id: Option<i64>,
    pub status: Option<String>,
}

pub async fn update_field(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<UpdateFieldRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let session = require_admin(&headers, &state.config)?;

    let data = state
        .backend
        .execute(
            gql::MUTATION_UPDATE_FIELD,
            json!({
                "id": body.id,
                "name": body.name,
                "venueId": body.venue_id,
                "status": body.status,
            }),
            Some(&session.token),
        )
        .await?;

    Ok(Json(data["updateField"].clone()))
}
