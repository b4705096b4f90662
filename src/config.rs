use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    /// Upstream GraphQL endpoint. Empty means unconfigured; requests that
    /// need it fail with a configuration error instead of at startup.
    pub graphql_endpoint: String,
    /// Secret used to verify the backend-issued admin JWT.
    pub jwt_secret: String,
    /// Token attached to public (unauthenticated) upstream calls.
    pub service_token: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "fieldbook.db".to_string()),
            graphql_endpoint: env::var("GQL_HTTP_ENDPOINT").unwrap_or_default(),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_default(),
            service_token: env::var("GQL_SERVICE_TOKEN").unwrap_or_default(),
        }
    }
}
