//! # Presence Rust Backend
//!
//! Office-presence statistics engine.
//!
//! This crate loads raw presence records (user, date, start, end) from a CSV
//! backing file, keeps them behind a time-expiring in-memory cache, and turns
//! them into weekday-grouped statistics. The backend exposes a REST API via
//! Axum for the dashboard frontend.
//!
//! ## Features
//!
//! - **Data Loading**: Parse presence records from CSV, user profiles from XML
//! - **Caching**: TTL-guarded, single-flight refresh of the presence dataset
//! - **Aggregation**: Per-weekday interval, mean and start/end statistics
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: Presence domain model (records, datasets)
//! - [`data`]: Data-source layer (CSV presence file, XML user directory)
//! - [`cache`]: Expiring single-flight cache guarding dataset reloads
//! - [`services`]: Aggregation primitives and the query facade
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod cache;
pub mod config;
pub mod data;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
