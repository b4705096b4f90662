use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::dates;
use crate::errors::AppError;
use crate::gql;
use crate::models::{Booking, Field, OperatingHours};
use crate::services::dashboard::{calculate_daily_stats, calculate_range_stats, FieldOccupancy};
use crate::state::AppState;

use super::auth::require_admin;

// GET /api/dashboard/occupancy
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyQuery {
    /// `daily` (default) or `range`.
    pub mode: Option<String>,
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub venue_id: Option<i64>,
}

pub async fn occupancy(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<OccupancyQuery>,
) -> Result<Json<Vec<FieldOccupancy>>, AppError> {
    let session = require_admin(&headers, &state.config)?;
    let token = Some(session.token.as_str());

    let mode = query.mode.as_deref().unwrap_or("daily");

    // Resolve the window up front so bad input fails before any fetch.
    let (start, end) = match mode {
        "daily" => {
            let date = query
                .date
                .as_deref()
                .and_then(dates::parse_date_key)
                .ok_or_else(|| AppError::Validation("date is required for daily mode".to_string()))?;
            (date, date)
        }
        "range" => {
            let start = query
                .start_date
                .as_deref()
                .and_then(dates::parse_date_key)
                .ok_or_else(|| AppError::Validation("startDate is required for range mode".to_string()))?;
            let end = query
                .end_date
                .as_deref()
                .and_then(dates::parse_date_key)
                .ok_or_else(|| AppError::Validation("endDate is required for range mode".to_string()))?;
            if end < start {
                return Err(AppError::Validation(
                    "endDate must not be before startDate".to_string(),
                ));
            }
            (start, end)
        }
        other => {
            return Err(AppError::Validation(format!("unknown mode: {other}")));
        }
    };

    let (fields_data, bookings_data, hours_data) = tokio::try_join!(
        state.backend.execute(
            gql::QUERY_GET_FIELDS,
            json!({ "venueId": query.venue_id }),
            token,
        ),
        state.backend.execute(
            gql::QUERY_GET_BOOKINGS,
            json!({
                "venueId": query.venue_id,
                "startDate": format!("{}T00:00:00.000Z", start.format("%Y-%m-%d")),
                "endDate": format!("{}T00:00:00.000Z", end.format("%Y-%m-%d")),
            }),
            token,
        ),
        state.backend.execute(
            gql::QUERY_GET_OPERATING_HOURS,
            json!({ "venueId": query.venue_id }),
            token,
        ),
    )?;

    let fields: Vec<Field> = super::parse_list(&fields_data["fields"], "fields")?;
    let bookings: Vec<Booking> = super::parse_list(&bookings_data["bookings"], "bookings")?;
    let hours: Vec<OperatingHours> =
        serde_json::from_value(hours_data["operatingHours"].clone()).unwrap_or_default();
    let hours = hours.first().copied().unwrap_or_default();

    let stats = match mode {
        "daily" => calculate_daily_stats(&fields, &bookings, hours, start),
        _ => calculate_range_stats(&fields, &bookings, hours, start, end),
    };

    Ok(Json(stats))
}
