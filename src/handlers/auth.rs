use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::AppConfig;
use crate::constants::auth::{TOKEN_COOKIE_NAME, TOKEN_MAX_AGE};
use crate::errors::AppError;
use crate::gql;
use crate::state::AppState;

/// Claims of the backend-issued admin JWT. Only verified here, never
/// minted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub iat: i64,
    pub exp: i64,
}

pub struct AdminSession {
    pub token: String,
    pub claims: Claims,
}

pub fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

pub fn verify_token(token: &str, secret: &str) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|data| data.claims)
}

/// Admin routes require a valid session cookie; the raw token is kept
/// for forwarding upstream.
pub fn require_admin(headers: &HeaderMap, config: &AppConfig) -> Result<AdminSession, AppError> {
    let token = get_cookie(headers, TOKEN_COOKIE_NAME).ok_or(AppError::Unauthorized)?;

    if config.jwt_secret.is_empty() {
        return Err(AppError::Config("missing JWT_SECRET".to_string()));
    }

    let claims = verify_token(&token, &config.jwt_secret).ok_or(AppError::Unauthorized)?;

    Ok(AdminSession { token, claims })
}

fn session_cookie(token: &str, max_age: i64) -> String {
    format!("{TOKEN_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}")
}

// POST /api/auth/login
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if body.email.is_empty() || body.password.is_empty() {
        return Err(AppError::Validation(
            "email & password required".to_string(),
        ));
    }

    let data = state
        .backend
        .execute(
            gql::MUTATION_LOGIN,
            json!({ "email": body.email, "password": body.password }),
            None,
        )
        .await?;

    let login = &data["login"];
    let Some(token) = login["token"].as_str() else {
        return Err(AppError::Unauthorized);
    };

    tracing::info!(email = %body.email, "admin logged in");

    // Informational countdown only, not a capability.
    let expires_at = match verify_token(token, &state.config.jwt_secret) {
        Some(claims) => claims.exp * 1000,
        None => Utc::now().timestamp_millis() + TOKEN_MAX_AGE * 1000,
    };

    Ok((
        [(header::SET_COOKIE, session_cookie(token, TOKEN_MAX_AGE))],
        Json(json!({
            "ok": true,
            "admin": login["admin"],
            "expiresAt": expires_at,
        })),
    ))
}

// GET /api/auth/me
pub async fn me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let Some(token) = get_cookie(&headers, TOKEN_COOKIE_NAME) else {
        return Ok(Json(json!({ "authenticated": false })));
    };

    if state.config.jwt_secret.is_empty() {
        return Err(AppError::Config("missing JWT_SECRET".to_string()));
    }

    match verify_token(&token, &state.config.jwt_secret) {
        Some(claims) => Ok(Json(json!({
            "authenticated": true,
            "email": claims.email,
            "expiresAt": claims.exp * 1000,
        }))),
        None => Ok(Json(json!({ "authenticated": false }))),
    }
}

// POST /api/auth/logout
pub async fn logout() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, session_cookie("", 0))],
        Json(json!({ "ok": true })),
    )
}
