use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection};

use crate::constants::booking::CART_EXPIRY_MINUTES;
use crate::models::BookingCart;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn get_cart(conn: &Connection, key: &str) -> anyhow::Result<Option<BookingCart>> {
    let mut stmt = conn.prepare("SELECT data FROM carts WHERE cart_key = ?1")?;

    let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));

    match result {
        Ok(data) => {
            // A row that no longer parses is treated as absent rather
            // than failing the request.
            match serde_json::from_str(&data) {
                Ok(cart) => Ok(Some(cart)),
                Err(e) => {
                    tracing::warn!(key, error = %e, "discarding unreadable cart row");
                    delete_cart(conn, key)?;
                    Ok(None)
                }
            }
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn save_cart(conn: &Connection, key: &str, cart: &BookingCart) -> anyhow::Result<()> {
    let data = serde_json::to_string(cart)?;
    let expires_at = cart
        .created_at
        .unwrap_or_else(Utc::now)
        .checked_add_signed(Duration::minutes(CART_EXPIRY_MINUTES))
        .unwrap_or_else(Utc::now)
        .naive_utc()
        .format(TIME_FORMAT)
        .to_string();

    conn.execute(
        "INSERT INTO carts (cart_key, data, expires_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(cart_key) DO UPDATE SET
           data = excluded.data,
           expires_at = excluded.expires_at",
        params![key, data, expires_at],
    )?;
    Ok(())
}

pub fn delete_cart(conn: &Connection, key: &str) -> anyhow::Result<()> {
    conn.execute("DELETE FROM carts WHERE cart_key = ?1", params![key])?;
    Ok(())
}

pub fn expire_old_carts(conn: &Connection, now: DateTime<Utc>) -> anyhow::Result<usize> {
    let now = now.naive_utc().format(TIME_FORMAT).to_string();
    let count = conn.execute("DELETE FROM carts WHERE expires_at <= ?1", params![now])?;
    if count > 0 {
        tracing::debug!(count, "expired stale carts");
    }
    Ok(count)
}
