//! Occupancy aggregation for the admin dashboard. Pure functions of
//! (fields, bookings, operating hours, date range); handlers fetch the
//! inputs and render the result.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Booking, Field, OperatingHours};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsMode {
    Daily,
    Range,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOccupancy {
    pub id: i64,
    pub name: String,
    pub venue_name: String,
    pub mode: StatsMode,
    pub total_capacity: u32,
    pub total_booked: u32,
    pub remaining: u32,
    pub occupancy_rate: f64,
    pub status_label: String,
}

fn occupancy_rate(booked: u32, capacity: u32) -> f64 {
    if capacity == 0 {
        0.0
    } else {
        f64::from(booked) / f64::from(capacity) * 100.0
    }
}

/// Booked hours for one field on one date, across non-cancelled bookings.
fn booked_hours_on(bookings: &[Booking], field_id: i64, date: NaiveDate) -> u32 {
    bookings
        .iter()
        .filter(|b| b.status.blocks_slots())
        .flat_map(|b| b.details.iter())
        .filter(|d| d.field_id == field_id && d.booking_date == date)
        .count() as u32
}

fn booked_hours_between(
    bookings: &[Booking],
    field_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> u32 {
    bookings
        .iter()
        .filter(|b| b.status.blocks_slots())
        .flat_map(|b| b.details.iter())
        .filter(|d| d.field_id == field_id && d.booking_date >= start && d.booking_date <= end)
        .count() as u32
}

pub fn calculate_daily_stats(
    fields: &[Field],
    bookings: &[Booking],
    op_hours: OperatingHours,
    target_date: NaiveDate,
) -> Vec<FieldOccupancy> {
    let daily_capacity = op_hours.daily_hours();

    fields
        .iter()
        .map(|field| {
            let booked = booked_hours_on(bookings, field.id, target_date);
            let remaining = daily_capacity.saturating_sub(booked);
            let rate = occupancy_rate(booked, daily_capacity);

            let status_label = if booked >= daily_capacity {
                "Full Booked".to_string()
            } else if rate > 75.0 {
                "Hampir Penuh".to_string()
            } else {
                "Tersedia".to_string()
            };

            FieldOccupancy {
                id: field.id,
                name: field.name.clone(),
                venue_name: field.venue_name().to_string(),
                mode: StatsMode::Daily,
                total_capacity: daily_capacity,
                total_booked: booked,
                remaining,
                occupancy_rate: rate,
                status_label,
            }
        })
        .collect()
}

pub fn calculate_range_stats(
    fields: &[Field],
    bookings: &[Booking],
    op_hours: OperatingHours,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Vec<FieldOccupancy> {
    // Inclusive on both ends.
    let total_days = (end_date - start_date).num_days().max(0) as u32 + 1;
    let total_capacity = op_hours.daily_hours() * total_days;

    fields
        .iter()
        .map(|field| {
            let booked = booked_hours_between(bookings, field.id, start_date, end_date);
            let remaining = total_capacity.saturating_sub(booked);
            let rate = occupancy_rate(booked, total_capacity);

            let status_label = if booked == 0 {
                "Kosong (0 Jam)".to_string()
            } else if rate > 80.0 {
                "Sangat Sibuk".to_string()
            } else {
                format!("{booked} Jam Terpakai")
            };

            FieldOccupancy {
                id: field.id,
                name: field.name.clone(),
                venue_name: field.venue_name().to_string(),
                mode: StatsMode::Range,
                total_capacity,
                total_booked: booked,
                remaining,
                occupancy_rate: rate,
                status_label,
            }
        })
        .collect()
}
