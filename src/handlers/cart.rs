use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::booking::CART_STORAGE_KEY;
use crate::errors::AppError;
use crate::models::{BookingCart, BookingSlot};
use crate::state::AppState;

use super::auth::get_cookie;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartView {
    cart: BookingCart,
    total_slots: usize,
    total_price: i64,
    time_remaining: i64,
}

fn view(cart: BookingCart, now: DateTime<Utc>) -> CartView {
    CartView {
        total_slots: cart.total_slots(),
        total_price: cart.total_price(),
        time_remaining: cart.time_remaining(now),
        cart,
    }
}

fn cart_cookie(key: &str) -> String {
    format!("{CART_STORAGE_KEY}={key}; Path=/; SameSite=Lax")
}

/// Existing key from the cookie, or a freshly minted one that must be
/// sent back via Set-Cookie.
fn ensure_key(headers: &HeaderMap) -> (String, bool) {
    match get_cookie(headers, CART_STORAGE_KEY) {
        Some(key) => (key, false),
        None => (uuid::Uuid::new_v4().to_string(), true),
    }
}

fn respond(view: CartView, key: &str, minted: bool) -> Response {
    if minted {
        ([(header::SET_COOKIE, cart_cookie(key))], Json(view)).into_response()
    } else {
        Json(view).into_response()
    }
}

// GET /api/cart
pub async fn get_cart(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<impl Serialize>, AppError> {
    let now = Utc::now();

    let cart = match get_cookie(&headers, CART_STORAGE_KEY) {
        Some(key) => state.carts.load(&key, now)?,
        None => BookingCart::new(now),
    };

    Ok(Json(view(cart, now)))
}

// POST /api/cart/venue
#[derive(Deserialize)]
pub struct SetVenueRequest {
    pub id: i64,
    pub name: String,
}

pub async fn set_venue(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<SetVenueRequest>,
) -> Result<Response, AppError> {
    let now = Utc::now();
    let (key, minted) = ensure_key(&headers);

    let mut cart = state.carts.load(&key, now)?;
    cart.set_venue(now, body.id, &body.name);
    state.carts.save(&key, &cart)?;

    Ok(respond(view(cart, now), &key, minted))
}

// POST /api/cart/slots
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddSlotView {
    added: bool,
    #[serde(flatten)]
    view: CartView,
}

pub async fn add_slot(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(slot): Json<BookingSlot>,
) -> Result<Response, AppError> {
    let now = Utc::now();
    let (key, minted) = ensure_key(&headers);

    let mut cart = state.carts.load(&key, now)?;
    let added = cart.add_slot(now, slot);
    // Persist either way: a rejected add may still have cleared an
    // expired cart.
    state.carts.save(&key, &cart)?;

    let body = AddSlotView {
        added,
        view: view(cart, now),
    };
    Ok(respond_add(body, &key, minted))
}

fn respond_add(body: AddSlotView, key: &str, minted: bool) -> Response {
    if minted {
        ([(header::SET_COOKIE, cart_cookie(key))], Json(body)).into_response()
    } else {
        Json(body).into_response()
    }
}

// POST /api/cart/slots/remove
#[derive(Deserialize)]
pub struct RemoveSlotRequest {
    pub key: String,
}

pub async fn remove_slot(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<RemoveSlotRequest>,
) -> Result<Json<impl Serialize>, AppError> {
    let now = Utc::now();

    let Some(key) = get_cookie(&headers, CART_STORAGE_KEY) else {
        return Ok(Json(view(BookingCart::new(now), now)));
    };

    let mut cart = state.carts.load(&key, now)?;
    cart.remove_slot(now, &body.key);
    state.carts.save(&key, &cart)?;

    Ok(Json(view(cart, now)))
}

// DELETE /api/cart
pub async fn clear_cart(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<impl Serialize>, AppError> {
    let now = Utc::now();

    if let Some(key) = get_cookie(&headers, CART_STORAGE_KEY) {
        state.carts.clear(&key)?;
    }

    Ok(Json(view(BookingCart::new(now), now)))
}
