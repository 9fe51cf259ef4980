//! Expiring single-flight cache for the presence dataset.
//!
//! Loading the presence CSV is the one expensive operation in this crate, so
//! the dataset is memoized here and revalidated lazily: a load happens on the
//! first access and then at most once per TTL window, no matter how many
//! request handlers hit the cache concurrently.
//!
//! The mutex region spans the whole check-staleness → load → publish
//! sequence. Callers that arrive during an in-flight refresh block on the
//! mutex and then observe the freshly published entry instead of triggering a
//! redundant load of their own. The entry is replaced wholesale under the
//! lock, so a value and its timestamp are never observed torn.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::data::{PresenceSource, SourceResult};
use crate::models::PresenceDataset;

struct CacheEntry {
    dataset: Arc<PresenceDataset>,
    produced_at: Instant,
}

/// TTL-guarded memoization of [`PresenceSource::load`].
///
/// Constructed once per process and shared by reference among request
/// handlers.
pub struct ExpiringCache {
    ttl: Duration,
    source: Arc<dyn PresenceSource>,
    slot: Mutex<Option<CacheEntry>>,
}

impl ExpiringCache {
    /// Create a cache around `source` with the given time-to-live.
    pub fn new(source: Arc<dyn PresenceSource>, ttl: Duration) -> Self {
        Self {
            ttl,
            source,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached dataset, reloading it if the entry is absent or
    /// older than the TTL.
    ///
    /// A failed load propagates to the caller and leaves the slot untouched:
    /// an expired entry stays in place and the next caller retries, and a
    /// cold cache simply stays cold.
    pub async fn get(&self) -> SourceResult<Arc<PresenceDataset>> {
        let mut slot = self.slot.lock().await;

        if let Some(entry) = slot.as_ref() {
            if entry.produced_at.elapsed() < self.ttl {
                return Ok(Arc::clone(&entry.dataset));
            }
        }

        // Stale or cold. The lock is held across the load so that concurrent
        // callers racing past expiry collapse into this single refresh.
        let dataset = Arc::new(self.source.load().await?);
        *slot = Some(CacheEntry {
            dataset: Arc::clone(&dataset),
            produced_at: Instant::now(),
        });

        Ok(dataset)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
