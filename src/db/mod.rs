pub mod queries;

use std::sync::{Arc, Mutex};

use anyhow::Context;
use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::models::BookingCart;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS carts (
        cart_key TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        expires_at TEXT NOT NULL
    );
";

pub fn init_db(path: &str) -> anyhow::Result<Connection> {
    let conn = Connection::open(path).context("failed to open database")?;

    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
        .context("failed to set database pragmas")?;

    conn.execute_batch(SCHEMA)
        .context("failed to create cart store schema")?;

    Ok(conn)
}

/// Durable cart storage. The service-side stand-in for the browser's
/// local storage: one serialized cart per opaque client key, re-validated
/// for expiry on every load.
#[derive(Clone)]
pub struct CartStore {
    conn: Arc<Mutex<Connection>>,
}

impl CartStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Load the cart for `key`, sweeping expired rows first. A missing or
    /// expired cart comes back as a fresh empty one.
    pub fn load(&self, key: &str, now: DateTime<Utc>) -> anyhow::Result<BookingCart> {
        let conn = self.conn.lock().unwrap();
        queries::expire_old_carts(&conn, now)?;

        match queries::get_cart(&conn, key)? {
            Some(cart) if !cart.is_expired(now) => Ok(cart),
            Some(_) => {
                queries::delete_cart(&conn, key)?;
                Ok(BookingCart::new(now))
            }
            None => Ok(BookingCart::new(now)),
        }
    }

    pub fn save(&self, key: &str, cart: &BookingCart) -> anyhow::Result<()> {
        let conn = self.conn.lock().unwrap();
        queries::save_cart(&conn, key, cart)
    }

    pub fn clear(&self, key: &str) -> anyhow::Result<()> {
        let conn = self.conn.lock().unwrap();
        queries::delete_cart(&conn, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cart::{slot_key, BookingSlot};
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2025-08-07T10:00:00Z".parse().unwrap()
    }

    fn store() -> CartStore {
        CartStore::new(init_db(":memory:").unwrap())
    }

    fn sample_cart() -> BookingCart {
        let mut cart = BookingCart::new(now());
        cart.set_venue(now(), 1, "GOR Merdeka");
        cart.add_slot(
            now(),
            BookingSlot {
                key: slot_key(1, "2025-08-09", 9),
                field_id: 1,
                court_name: "Lapangan A".to_string(),
                date_key: "2025-08-09".to_string(),
                range: "09:00 - 10:00".to_string(),
                price: 100000,
            },
        );
        cart
    }

    #[test]
    fn test_load_missing_returns_fresh() {
        let store = store();
        let cart = store.load("nobody", now()).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = store();
        let cart = sample_cart();
        store.save("abc", &cart).unwrap();

        let loaded = store.load("abc", now()).unwrap();
        assert_eq!(loaded, cart);
    }

    #[test]
    fn test_expired_cart_cleared_on_load() {
        let store = store();
        store.save("abc", &sample_cart()).unwrap();

        let later = now() + Duration::minutes(20);
        let loaded = store.load("abc", later).unwrap();
        assert!(loaded.is_empty());
        assert_eq!(loaded.venue_id, None);
    }

    #[test]
    fn test_clear() {
        let store = store();
        store.save("abc", &sample_cart()).unwrap();
        store.clear("abc").unwrap();

        let loaded = store.load("abc", now()).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_keys_are_isolated() {
        let store = store();
        store.save("abc", &sample_cart()).unwrap();

        let other = store.load("def", now()).unwrap();
        assert!(other.is_empty());
        let original = store.load("abc", now()).unwrap();
        assert_eq!(original.total_slots(), 1);
    }
}
