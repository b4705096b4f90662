use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dates;

/// One bookable hour of one field on one date. Uniqueness of
/// (fieldId, bookingDate, startHour) across non-cancelled bookings is
/// enforced by the backend; this service treats a violation as an
/// expected conflict, not a fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetail {
    #[serde(deserialize_with = "super::de_id")]
    pub field_id: i64,
    #[serde(
        serialize_with = "ser_booking_date",
        deserialize_with = "de_booking_date"
    )]
    pub booking_date: NaiveDate,
    pub start_hour: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<i64>,
}

/// Dates travel as UTC-midnight ISO timestamps on the wire.
fn ser_booking_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{}T00:00:00.000Z", date.format("%Y-%m-%d")))
}

fn de_booking_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    dates::parse_date_key(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid booking date: {raw}")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Pending,
    Approved,
    Cancelled,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "APPROVED" => BookingStatus::Approved,
            "CANCELLED" => BookingStatus::Cancelled,
            "REJECTED" => BookingStatus::Rejected,
            _ => BookingStatus::Pending,
        }
    }

    /// Whether a booking in this status still occupies its slots.
    pub fn blocks_slots(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled | BookingStatus::Rejected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "UNPAID",
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Refunded => "REFUNDED",
        }
    }
}

/// A booking as returned by the backend. Status and payment status are
/// independent axes; cancelling forces the payment status back to UNPAID
/// as a compensating step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, deserialize_with = "super::de_opt_id")]
    pub id: Option<i64>,
    pub booking_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_academic: bool,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub total_price: i64,
    #[serde(default)]
    pub details: Vec<BookingDetail>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Approved,
            BookingStatus::Cancelled,
            BookingStatus::Rejected,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), status);
        }
        assert_eq!(BookingStatus::parse("garbage"), BookingStatus::Pending);
    }

    #[test]
    fn test_blocks_slots() {
        assert!(BookingStatus::Pending.blocks_slots());
        assert!(BookingStatus::Approved.blocks_slots());
        assert!(!BookingStatus::Cancelled.blocks_slots());
        assert!(!BookingStatus::Rejected.blocks_slots());
    }

    #[test]
    fn test_deserialize_backend_booking() {
        let raw = serde_json::json!({
            "id": "42",
            "bookingCode": "BK-2025-0001",
            "name": "Budi",
            "contact": "08123456789",
            "email": "budi@example.com",
            "isAcademic": true,
            "status": "APPROVED",
            "paymentStatus": "UNPAID",
            "totalPrice": 300000,
            "createdAt": "2025-08-01T03:00:00.000Z",
            "details": [
                { "fieldId": "7", "bookingDate": "2025-08-09T00:00:00.000Z", "startHour": 9, "subtotal": 150000 },
                { "fieldId": 7, "bookingDate": "2025-08-09T00:00:00.000Z", "startHour": 10 }
            ]
        });

        let booking: Booking = serde_json::from_value(raw).unwrap();
        assert_eq!(booking.id, Some(42));
        assert_eq!(booking.status, BookingStatus::Approved);
        assert_eq!(booking.payment_status, PaymentStatus::Unpaid);
        assert_eq!(booking.details.len(), 2);
        assert_eq!(booking.details[0].field_id, 7);
        assert_eq!(
            booking.details[0].booking_date.format("%Y-%m-%d").to_string(),
            "2025-08-09"
        );
    }

    #[test]
    fn test_detail_serializes_utc_midnight() {
        let detail = BookingDetail {
            field_id: 3,
            booking_date: NaiveDate::from_ymd_opt(2025, 8, 9).unwrap(),
            start_hour: 14,
            price_per_hour: Some(100000),
            subtotal: None,
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["bookingDate"], "2025-08-09T00:00:00.000Z");
        assert_eq!(value["pricePerHour"], 100000);
        assert!(value.get("subtotal").is_none());
    }

    #[test]
    fn test_create_response_with_minimal_fields() {
        let raw = serde_json::json!({
            "bookingCode": "BK-2025-0002",
            "status": "PENDING",
            "totalPrice": 0,
            "details": []
        });
        let booking: Booking = serde_json::from_value(raw).unwrap();
        assert_eq!(booking.booking_code, "BK-2025-0002");
        assert_eq!(booking.payment_status, PaymentStatus::Unpaid);
        assert!(!booking.is_academic);
    }
}
