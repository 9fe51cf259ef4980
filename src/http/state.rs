//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::PresenceService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Query facade over the cached presence dataset
    pub service: Arc<PresenceService>,
}

impl AppState {
    /// Create a new application state with the given service.
    pub fn new(service: Arc<PresenceService>) -> Self {
        Self { service }
    }
}
