use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use fieldbook::config::AppConfig;
use fieldbook::db::{self, CartStore};
use fieldbook::handlers;
use fieldbook::services::backend::graphql::GraphqlBackend;
use fieldbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;

    if config.graphql_endpoint.is_empty() {
        tracing::warn!("GQL_HTTP_ENDPOINT not set, upstream calls will fail");
    } else {
        tracing::info!(endpoint = %config.graphql_endpoint, "using GraphQL backend");
    }
    let backend = GraphqlBackend::new(config.graphql_endpoint.clone());

    let state = Arc::new(AppState {
        carts: CartStore::new(conn),
        config: config.clone(),
        backend: Box::new(backend),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/auth/me", get(handlers::auth::me))
        .route("/api/cart", get(handlers::cart::get_cart))
        .route("/api/cart", delete(handlers::cart::clear_cart))
        .route("/api/cart/venue", post(handlers::cart::set_venue))
        .route("/api/cart/slots", post(handlers::cart::add_slot))
        .route("/api/cart/slots/remove", post(handlers::cart::remove_slot))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route("/api/bookings", get(handlers::bookings::list_bookings))
        .route(
            "/api/bookings/check-availability",
            post(handlers::bookings::check_availability),
        )
        .route(
            "/api/bookings/history",
            get(handlers::bookings::booking_history),
        )
        .route(
            "/api/bookings/:bookingCode",
            get(handlers::bookings::booking_by_code),
        )
        .route(
            "/api/bookings/:bookingCode/status",
            post(handlers::bookings::update_status),
        )
        .route(
            "/api/bookings/:bookingCode/payment",
            post(handlers::bookings::update_payment),
        )
        .route(
            "/api/public-bookings",
            get(handlers::bookings::public_bookings),
        )
        .route("/api/booking-days", get(handlers::bookings::booking_days))
        .route("/api/venues", get(handlers::venues::list_venues))
        .route("/api/venues", post(handlers::venues::create_venue))
        .route("/api/venues/update", post(handlers::venues::update_venue))
        .route("/api/venues/:id", get(handlers::venues::get_venue))
        .route("/api/fields", get(handlers::fields::list_fields))
        .route("/api/fields", post(handlers::fields::create_field))
        .route("/api/fields/update", post(handlers::fields::update_field))
        .route("/api/fields/:id", get(handlers::fields::get_field))
        .route("/api/fields/:id/slots", get(handlers::fields::field_slots))
        .route(
            "/api/operating-hours",
            get(handlers::operating_hours::list_hours),
        )
        .route(
            "/api/operating-hours",
            post(handlers::operating_hours::create_hours),
        )
        .route(
            "/api/operating-hours/update",
            post(handlers::operating_hours::update_hours),
        )
        .route(
            "/api/dashboard/occupancy",
            get(handlers::dashboard::occupancy),
        )
        .route("/api/graphql", post(handlers::proxy::graphql))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
