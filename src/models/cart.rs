//! Booking cart: an expiring selection of time slots for one venue,
//! assembled before submission. All mutations take `now` explicitly so
//! expiry is a pure function of the cart's own timestamps.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::booking::{CART_EXPIRY_MINUTES, MAX_SLOTS_PER_BOOKING};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSlot {
    /// Composite `{fieldId}:{dateKey}:{hour}` key, unique within a cart.
    pub key: String,
    pub field_id: i64,
    pub court_name: String,
    /// `YYYY-MM-DD`
    pub date_key: String,
    /// Display string, e.g. `09:00 - 10:00`.
    pub range: String,
    pub price: i64,
}

/// Build the composite slot key.
pub fn slot_key(field_id: i64, date_key: &str, hour: u32) -> String {
    format!("{field_id}:{date_key}:{hour}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCart {
    pub venue_id: Option<i64>,
    #[serde(default)]
    pub venue_name: String,
    #[serde(default)]
    pub slots: Vec<BookingSlot>,
    pub created_at: Option<DateTime<Utc>>,
}

impl BookingCart {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            venue_id: None,
            venue_name: String::new(),
            slots: Vec::new(),
            created_at: Some(now),
        }
    }

    fn expiry_window() -> Duration {
        Duration::minutes(CART_EXPIRY_MINUTES)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn total_slots(&self) -> usize {
        self.slots.len()
    }

    pub fn total_price(&self) -> i64 {
        self.slots.iter().map(|s| s.price).sum()
    }

    pub fn can_add_more(&self) -> bool {
        self.slots.len() < MAX_SLOTS_PER_BOOKING
    }

    pub fn has_slot(&self, key: &str) -> bool {
        self.slots.iter().any(|s| s.key == key)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.created_at {
            Some(created_at) => now - created_at > Self::expiry_window(),
            None => false,
        }
    }

    /// Seconds until expiry, floored at zero.
    pub fn time_remaining(&self, now: DateTime<Utc>) -> i64 {
        match self.created_at {
            Some(created_at) => {
                let remaining = Self::expiry_window() - (now - created_at);
                remaining.num_seconds().max(0)
            }
            None => 0,
        }
    }

    /// Bind the cart to a venue. Slots are venue-exclusive: binding a
    /// different venue discards the current selection.
    pub fn set_venue(&mut self, now: DateTime<Utc>, id: i64, name: &str) {
        if self.venue_id.is_some_and(|current| current != id) {
            self.slots.clear();
        }

        self.venue_id = Some(id);
        self.venue_name = name.to_string();
        self.created_at = Some(now);
    }

    /// Returns false without touching the cart for duplicates and
    /// capacity; an expired cart is cleared first.
    pub fn add_slot(&mut self, now: DateTime<Utc>, slot: BookingSlot) -> bool {
        if self.is_expired(now) {
            self.clear(now);
            return false;
        }

        if self.has_slot(&slot.key) {
            return false;
        }

        if !self.can_add_more() {
            return false;
        }

        self.slots.push(slot);

        if self.created_at.is_none() {
            self.created_at = Some(now);
        }

        true
    }

    pub fn remove_slot(&mut self, now: DateTime<Utc>, key: &str) {
        self.slots.retain(|s| s.key != key);

        if self.slots.is_empty() {
            self.venue_id = None;
            self.venue_name.clear();
            self.created_at = Some(now);
        }
    }

    pub fn clear(&mut self, now: DateTime<Utc>) {
        *self = Self::new(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        "2025-08-07T10:00:00Z".parse().unwrap()
    }

    fn slot(n: u32) -> BookingSlot {
        BookingSlot {
            key: slot_key(1, "2025-08-09", n),
            field_id: 1,
            court_name: "Lapangan A".to_string(),
            date_key: "2025-08-09".to_string(),
            range: format!("{n:02}:00 - {:02}:00", n + 1),
            price: 100000,
        }
    }

    #[test]
    fn test_add_slot() {
        let mut cart = BookingCart::new(now());
        assert!(cart.add_slot(now(), slot(9)));
        assert_eq!(cart.total_slots(), 1);
        assert_eq!(cart.total_price(), 100000);
    }

    #[test]
    fn test_duplicate_slot_is_noop() {
        let mut cart = BookingCart::new(now());
        assert!(cart.add_slot(now(), slot(9)));
        let before = cart.clone();
        assert!(!cart.add_slot(now(), slot(9)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_slot_count_never_exceeds_max() {
        let mut cart = BookingCart::new(now());
        for hour in 0..20 {
            cart.add_slot(now(), slot(hour));
        }
        assert_eq!(cart.total_slots(), MAX_SLOTS_PER_BOOKING);
        assert!(!cart.can_add_more());
        assert!(!cart.add_slot(now(), slot(23)));
    }

    #[test]
    fn test_binding_new_venue_empties_cart() {
        let mut cart = BookingCart::new(now());
        cart.set_venue(now(), 1, "GOR Merdeka");
        cart.add_slot(now(), slot(9));
        cart.add_slot(now(), slot(10));

        cart.set_venue(now(), 2, "GOR Senayan");
        assert!(cart.is_empty());
        assert_eq!(cart.venue_id, Some(2));
        assert_eq!(cart.venue_name, "GOR Senayan");
    }

    #[test]
    fn test_rebinding_same_venue_keeps_slots() {
        let mut cart = BookingCart::new(now());
        cart.set_venue(now(), 1, "GOR Merdeka");
        cart.add_slot(now(), slot(9));

        cart.set_venue(now(), 1, "GOR Merdeka");
        assert_eq!(cart.total_slots(), 1);
    }

    #[test]
    fn test_expired_cart_rejects_add_and_clears() {
        let mut cart = BookingCart::new(now());
        cart.set_venue(now(), 1, "GOR Merdeka");
        cart.add_slot(now(), slot(9));

        let later = now() + Duration::minutes(CART_EXPIRY_MINUTES) + Duration::seconds(1);
        assert!(cart.is_expired(later));
        assert!(!cart.add_slot(later, slot(10)));
        assert!(cart.is_empty());
        assert_eq!(cart.venue_id, None);
        assert!(!cart.is_expired(later));
    }

    #[test]
    fn test_not_expired_at_exact_window() {
        let cart = BookingCart::new(now());
        let at_window = now() + Duration::minutes(CART_EXPIRY_MINUTES);
        assert!(!cart.is_expired(at_window));
    }

    #[test]
    fn test_remove_last_slot_unbinds_venue() {
        let mut cart = BookingCart::new(now());
        cart.set_venue(now(), 1, "GOR Merdeka");
        cart.add_slot(now(), slot(9));

        cart.remove_slot(now(), &slot_key(1, "2025-08-09", 9));
        assert!(cart.is_empty());
        assert_eq!(cart.venue_id, None);
        assert_eq!(cart.venue_name, "");
    }

    #[test]
    fn test_remove_keeps_other_slots() {
        let mut cart = BookingCart::new(now());
        cart.set_venue(now(), 1, "GOR Merdeka");
        cart.add_slot(now(), slot(9));
        cart.add_slot(now(), slot(10));

        cart.remove_slot(now(), &slot_key(1, "2025-08-09", 9));
        assert_eq!(cart.total_slots(), 1);
        assert_eq!(cart.venue_id, Some(1));
    }

    #[test]
    fn test_time_remaining() {
        let cart = BookingCart::new(now());
        let later = now() + Duration::minutes(5);
        assert_eq!(cart.time_remaining(later), (CART_EXPIRY_MINUTES - 5) * 60);

        let way_later = now() + Duration::minutes(CART_EXPIRY_MINUTES + 10);
        assert_eq!(cart.time_remaining(way_later), 0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut cart = BookingCart::new(now());
        cart.set_venue(now(), 1, "GOR Merdeka");
        cart.add_slot(now(), slot(9));

        let json = serde_json::to_string(&cart).unwrap();
        let back: BookingCart = serde_json::from_str(&json).unwrap();
        assert_eq!(cart, back);
    }
}
