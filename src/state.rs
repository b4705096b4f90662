use crate::config::AppConfig;
use crate::db::CartStore;
use crate::services::backend::BookingBackend;

pub struct AppState {
    pub carts: CartStore,
    pub config: AppConfig,
    pub backend: Box<dyn BookingBackend>,
}

impl AppState {
    /// Token attached to public upstream calls, when one is configured.
    pub fn service_token(&self) -> Option<&str> {
        if self.config.service_token.is_empty() {
            None
        } else {
            Some(self.config.service_token.as_str())
        }
    }
}
