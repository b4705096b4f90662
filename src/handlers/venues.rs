use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::errors::AppError;
use crate::gql;
use crate::models::Venue;
use crate::state::AppState;

use super::auth::require_admin;

// GET /api/venues
pub async fn list_venues(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Venue>>, AppError> {
    let data = state
        .backend
        .execute(gql::QUERY_GET_VENUES, json!({}), state.service_token())
        .await?;

    let venues: Vec<Venue> = super::parse_list(&data["venues"], "venues")?;

    Ok(Json(venues))
}

// GET /api/venues/:id
pub async fn get_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Venue>, AppError> {
    let data = state
        .backend
        .execute(
            gql::QUERY_GET_VENUE_BY_ID,
            json!({ "id": id }),
            state.service_token(),
        )
        .await?;

    if data["venue"].is_null() {
        return Err(AppError::NotFound(format!("venue {id}")));
    }

    let venue: Venue = serde_json::from_value(data["venue"].clone())
        .map_err(|e| AppError::Upstream(format!("unexpected venue payload: {e}")))?;

    Ok(Json(venue))
}

// POST /api/venues
#[derive(Deserialize)]
pub struct CreateVenueRequest {
    pub name: String,
}

pub async fn create_venue(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<CreateVenueRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let session = require_admin(&headers, &state.config)?;

    if body.name.trim().is_empty() {
        return Err(AppError::Validation("venue name is required".to_string()));
    }

    let data = state
        .backend
        .execute(
            gql::MUTATION_CREATE_VENUE,
            json!({ "name": body.name.trim() }),
            Some(&session.token),
        )
        .await?;

    Ok(Json(data["createVenue"].clone()))
}

// POST /api/venues/update
#[derive(Deserialize)]
pub struct UpdateVenueRequest {
    pub id: i64,
    pub name: String,
}

pub async fn update_venue(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<UpdateVenueRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let session = require_admin(&headers, &state.config)?;

    if body.name.trim().is_empty() {
        return Err(AppError::Validation("venue name is required".to_string()));
    }

    let data = state
        .backend
        .execute(
            gql::MUTATION_UPDATE_VENUE,
            json!({ "id": body.id, "name": body.name.trim() }),
            Some(&session.token),
        )
        .await?;

    Ok(Json(data["updateVenue"].clone()))
}
