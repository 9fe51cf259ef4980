//! Presence source trait and error types.

use async_trait::async_trait;

use crate::models::PresenceDataset;

/// Result type for data-source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Error type for data-source operations.
///
/// Only whole-source failures surface here (unreadable file, corrupt format).
/// Individual malformed rows are dropped by the loader with a debug log and
/// never abort a load.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Backing file could not be read.
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader failed at the file level.
    #[error("failed to read presence CSV: {0}")]
    Csv(#[from] ::csv::Error),

    /// Users XML file could not be parsed.
    #[error("failed to parse users XML: {0}")]
    Xml(String),
}

/// A source of the full presence dataset.
///
/// `load` is the expensive operation the [`crate::cache::ExpiringCache`]
/// guards: it reads the whole backing store and builds a fresh
/// [`PresenceDataset`], a pure function of the store's current content.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait PresenceSource: Send + Sync {
    /// Load the full presence dataset from the backing store.
    ///
    /// # Returns
    /// * `Ok(PresenceDataset)` - Freshly built dataset
    /// * `Err(SourceError)` - If the backing store is unreadable or corrupt
    async fn load(&self) -> SourceResult<PresenceDataset>;
}
