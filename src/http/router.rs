//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        .route("/users", get(handlers::list_users))
        .route(
            "/mean_time_weekday/{user_id}",
            get(handlers::mean_time_weekday),
        )
        .route(
            "/presence_weekday/{user_id}",
            get(handlers::presence_weekday),
        )
        .route(
            "/presence_start_end/{user_id}",
            get(handlers::presence_start_end),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CsvPresenceSource;
    use crate::services::PresenceService;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_router_creation() {
        let source = Arc::new(CsvPresenceSource::new("runtime/data/sample_data.csv"));
        let service = Arc::new(PresenceService::new(source, Duration::from_secs(600)));
        let state = AppState::new(service);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
