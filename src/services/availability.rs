//! Slot availability checking. Advisory only: the backend's uniqueness
//! constraint is the source of truth, and the create path surfaces a
//! conflict there as its own error. This check exists so users see the
//! collision before submitting.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::constants::messages;
use crate::dates;
use crate::errors::AppError;
use crate::gql;
use crate::models::Booking;
use crate::services::backend::BookingBackend;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    #[serde(deserialize_with = "crate::models::de_id")]
    pub field_id: i64,
    pub date: String,
    #[serde(default)]
    pub time_slots: Vec<u32>,
    /// Set on edit flows so a booking doesn't conflict with itself.
    pub exclude_booking_code: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityOutcome {
    pub available: bool,
    pub conflicting_slots: Vec<u32>,
    pub message: String,
}

/// Hours already taken on `date_key` for `field_id`, across the given
/// bookings, minus the one being edited.
pub fn occupied_hours(
    bookings: &[Booking],
    field_id: i64,
    date_key: &str,
    exclude_booking_code: Option<&str>,
) -> HashSet<u32> {
    bookings
        .iter()
        .filter(|b| b.status.blocks_slots())
        .filter(|b| exclude_booking_code != Some(b.booking_code.as_str()))
        .flat_map(|b| b.details.iter())
        .filter(|d| {
            d.field_id == field_id && d.booking_date.format("%Y-%m-%d").to_string() == date_key
        })
        .map(|d| d.start_hour)
        .collect()
}

/// Requested hours that collide with occupied ones, in request order.
pub fn find_conflicts(occupied: &HashSet<u32>, requested: &[u32]) -> Vec<u32> {
    requested
        .iter()
        .copied()
        .filter(|hour| occupied.contains(hour))
        .collect()
}

fn outcome(conflicting_slots: Vec<u32>) -> AvailabilityOutcome {
    if conflicting_slots.is_empty() {
        AvailabilityOutcome {
            available: true,
            conflicting_slots,
            message: messages::ALL_SLOTS_AVAILABLE.to_string(),
        }
    } else {
        let hours = conflicting_slots
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        AvailabilityOutcome {
            available: false,
            conflicting_slots,
            message: format!("Slot waktu {hours} sudah dibooking. Silakan pilih slot lain."),
        }
    }
}

pub async fn check(
    backend: &dyn BookingBackend,
    token: Option<&str>,
    req: &AvailabilityRequest,
) -> Result<AvailabilityOutcome, AppError> {
    let date_key = dates::to_date_key(&req.date)
        .ok_or_else(|| AppError::Validation(format!("invalid date: {}", req.date)))?;

    let data = backend
        .execute(
            gql::QUERY_CHECK_AVAILABILITY,
            json!({ "fieldId": req.field_id, "date": date_key }),
            token,
        )
        .await?;

    let bookings: Vec<Booking> = if data["bookings"].is_null() {
        vec![]
    } else {
        serde_json::from_value(data["bookings"].clone())
            .map_err(|e| AppError::Upstream(format!("unexpected bookings payload: {e}")))?
    };

    let occupied = occupied_hours(
        &bookings,
        req.field_id,
        &date_key,
        req.exclude_booking_code.as_deref(),
    );

    Ok(outcome(find_conflicts(&occupied, &req.time_slots)))
}

// ── Slot grid ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlotStatus {
    Available,
    Booked,
}

#[derive(Debug, Serialize)]
pub struct SlotOption {
    pub start: String,
    pub end: String,
    pub hour: u32,
    pub status: SlotStatus,
    pub price: i64,
}

/// Hour-by-hour grid for a field's day, with booked hours marked.
pub fn slot_grid(open_hour: u32, close_hour: u32, booked: &HashSet<u32>) -> Vec<SlotOption> {
    (open_hour..close_hour)
        .map(|hour| SlotOption {
            start: format!("{}:00", dates::pad(hour)),
            end: format!("{}:00", dates::pad(hour + 1)),
            hour,
            status: if booked.contains(&hour) {
                SlotStatus::Booked
            } else {
                SlotStatus::Available
            },
            price: 0,
        })
        .collect()
}
