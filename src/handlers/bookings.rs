use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::constants::booking::MAX_ADVANCE_BOOKING_DAYS;
use crate::dates;
use crate::errors::AppError;
use crate::gql;
use crate::models::{Booking, BookingStatus, PaymentStatus};
use crate::pagination::{paginate, Page, PageParams};
use crate::services::availability::{self, AvailabilityOutcome, AvailabilityRequest};
use crate::services::submission::{self, StatusUpdateOutcome, SubmissionOutcome, SubmissionRequest};
use crate::state::AppState;

use super::auth::require_admin;

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SubmissionRequest>,
) -> Result<Json<SubmissionOutcome>, AppError> {
    let outcome = submission::submit(state.backend.as_ref(), state.service_token(), &body).await?;

    tracing::info!(
        booking_code = %outcome.booking.booking_code,
        is_academic = body.is_academic,
        approved = outcome.approve.is_completed(),
        "booking created"
    );

    Ok(Json(outcome))
}

// POST /api/bookings/check-availability
pub async fn check_availability(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<AvailabilityRequest>,
) -> Result<Json<AvailabilityOutcome>, AppError> {
    let session = require_admin(&headers, &state.config)?;

    if body.date.is_empty() || body.time_slots.is_empty() {
        return Err(AppError::Validation(
            "missing required fields: fieldId, date, timeSlots".to_string(),
        ));
    }

    let outcome =
        availability::check(state.backend.as_ref(), Some(&session.token), &body).await?;
    Ok(Json(outcome))
}

// GET /api/bookings
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsQuery {
    pub venue_id: Option<i64>,
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

fn sort_newest_first(bookings: &mut [Booking]) {
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Page<Booking>>, AppError> {
    let session = require_admin(&headers, &state.config)?;

    let data = state
        .backend
        .execute(
            gql::QUERY_GET_BOOKINGS,
            json!({
                "venueId": query.venue_id,
                "date": query.date.as_deref().and_then(dates::to_utc_midnight_iso),
                "startDate": query.start_date.as_deref().and_then(dates::to_utc_midnight_iso),
                "endDate": query.end_date.as_deref().and_then(dates::to_utc_midnight_iso),
            }),
            Some(&session.token),
        )
        .await?;

    let mut bookings: Vec<Booking> = super::parse_list(&data["bookings"], "bookings")?;
    sort_newest_first(&mut bookings);

    let params = PageParams {
        page: query.page,
        per_page: query.per_page,
    };
    Ok(Json(paginate(bookings, &params)))
}

// GET /api/bookings/history
pub async fn booking_history(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Booking>>, AppError> {
    let session = require_admin(&headers, &state.config)?;

    let data = state
        .backend
        .execute(gql::QUERY_GET_BOOKINGS, json!({}), Some(&session.token))
        .await?;

    let mut bookings: Vec<Booking> = super::parse_list(&data["bookings"], "bookings")?;
    sort_newest_first(&mut bookings);

    Ok(Json(bookings))
}

// GET /api/public-bookings
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicBookingsQuery {
    pub venue_id: Option<i64>,
    pub date: Option<String>,
}

pub async fn public_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PublicBookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let data = state
        .backend
        .execute(
            gql::QUERY_GET_BOOKINGS,
            json!({
                "venueId": query.venue_id,
                "date": query.date.as_deref().and_then(dates::to_utc_midnight_iso),
            }),
            state.service_token(),
        )
        .await?;

    let bookings: Vec<Booking> = super::parse_list(&data["bookings"], "bookings")?;

    Ok(Json(bookings))
}

// GET /api/bookings/:bookingCode
pub async fn booking_by_code(
    State(state): State<Arc<AppState>>,
    Path(booking_code): Path<String>,
) -> Result<Json<Booking>, AppError> {
    let data = state
        .backend
        .execute(
            gql::QUERY_GET_BOOKING_BY_CODE,
            json!({ "bookingCode": booking_code }),
            state.service_token(),
        )
        .await?;

    if data["booking"].is_null() {
        return Err(AppError::NotFound(format!("booking {booking_code}")));
    }

    let booking: Booking = serde_json::from_value(data["booking"].clone())
        .map_err(|e| AppError::Upstream(format!("unexpected booking payload: {e}")))?;

    Ok(Json(booking))
}

// POST /api/bookings/:bookingCode/status
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub booking_status: Option<String>,
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(booking_code): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<StatusUpdateOutcome>, AppError> {
    let session = require_admin(&headers, &state.config)?;

    let Some(raw) = body.booking_status.filter(|s| !s.is_empty()) else {
        return Err(AppError::Validation("bookingStatus is required".to_string()));
    };

    let status = BookingStatus::parse(&raw);
    if status.as_str() != raw {
        return Err(AppError::Validation(format!("unknown bookingStatus: {raw}")));
    }

    let outcome = submission::update_status(
        state.backend.as_ref(),
        Some(&session.token),
        &booking_code,
        status,
    )
    .await?;

    Ok(Json(outcome))
}

// POST /api/bookings/:bookingCode/payment
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentRequest {
    pub payment_status: Option<String>,
}

pub async fn update_payment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(booking_code): Path<String>,
    Json(body): Json<UpdatePaymentRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let session = require_admin(&headers, &state.config)?;

    let Some(raw) = body.payment_status.filter(|s| !s.is_empty()) else {
        return Err(AppError::Validation("paymentStatus is required".to_string()));
    };

    let known = [
        PaymentStatus::Unpaid,
        PaymentStatus::Paid,
        PaymentStatus::Refunded,
    ];
    if !known.iter().any(|s| s.as_str() == raw) {
        return Err(AppError::Validation(format!("unknown paymentStatus: {raw}")));
    }

    let data = state
        .backend
        .execute(
            gql::MUTATION_UPDATE_PAYMENT,
            json!({ "bookingCode": booking_code, "paymentStatus": raw }),
            Some(&session.token),
        )
        .await?;

    Ok(Json(data["updatePaymentStatus"].clone()))
}

// GET /api/booking-days
#[derive(Deserialize)]
pub struct BookingDaysQuery {
    pub n: Option<i64>,
}

/// Selectable days for the public slot picker, starting tomorrow.
pub async fn booking_days(Query(query): Query<BookingDaysQuery>) -> Json<Vec<dates::DayOption>> {
    let n = query.n.unwrap_or(7).clamp(1, MAX_ADVANCE_BOOKING_DAYS) as usize;
    Json(dates::next_n_days(Utc::now().date_naive(), n, true))
}
