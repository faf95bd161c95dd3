pub mod auth;
pub mod config;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod session;

use dcfm_service::ContactFormService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: ContactFormService,
    /// Bearer token required by the insert endpoint; `None` leaves it open.
    pub api_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(service: ContactFormService, api_token: Option<String>) -> Self {
        Self {
            service,
            api_token: api_token.map(Arc::from),
        }
    }
}
