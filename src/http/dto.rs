//! Request/response types specific to the HTTP layer.
//!
//! The per-user statistics endpoints reuse the row types from [`crate::api`]
//! directly; only the health check has its own shape.

use serde::{Deserialize, Serialize};

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Dataset state: `"loaded (N users)"` or the load error text.
    pub dataset: String,
}
