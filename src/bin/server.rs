//! Presence HTTP Server Binary
//!
//! This is the main entry point for the presence REST API server.
//! It loads the configuration, wires the CSV source into the expiring cache,
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin presence-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (overrides presence.toml)
//! - `PORT`: Server port (overrides presence.toml)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use presence_rust::config::{AppConfig, ConfigError};
use presence_rust::data::{CsvPresenceSource, UserDirectory, XmlUserDirectory};
use presence_rust::http::{create_router, AppState};
use presence_rust::services::PresenceService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Presence HTTP Server");

    let config = match AppConfig::from_default_location() {
        Ok(config) => config,
        Err(ConfigError::NotFound) => {
            info!("No presence.toml found, using defaults");
            AppConfig::default()
        }
        Err(e) => return Err(e.into()),
    };
    info!(
        "Presence data: {} (cache TTL {}s)",
        config.data.csv_path.display(),
        config.data.cache_ttl_secs
    );

    // The directory is best-effort: without it, listings fall back to
    // placeholder names.
    let directory: Option<Arc<dyn UserDirectory>> = match &config.data.users_xml_path {
        Some(path) => match XmlUserDirectory::from_file(path) {
            Ok(directory) => {
                info!("User directory loaded ({} users)", directory.len());
                Some(Arc::new(directory))
            }
            Err(e) => {
                warn!("User directory unavailable: {}", e);
                None
            }
        },
        None => None,
    };

    let source = Arc::new(CsvPresenceSource::new(config.data.csv_path.clone()));
    let service = Arc::new(PresenceService::with_directory(
        source,
        config.cache_ttl(),
        directory,
    ));

    // Create application state
    let state = AppState::new(service);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or(config.server.host);
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
