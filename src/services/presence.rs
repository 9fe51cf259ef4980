//! Query facade over the cached presence dataset.
//!
//! Binds a [`PresenceSource`] into the [`ExpiringCache`] and answers the
//! per-user weekday queries the HTTP layer exposes. An unknown user id is a
//! deliberate "no data" signal: every query returns an empty vector for it
//! instead of an error.

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use super::stats;
use crate::api::{MeanTimeRow, PresenceCell, StartEndRow, TotalTimeRow, UserId, UserInfo};
use crate::cache::ExpiringCache;
use crate::data::{PresenceSource, SourceResult, UserDirectory};
use crate::models::PresenceDataset;

/// Facade composing the expiring cache with the aggregation primitives.
///
/// Constructed once per process and shared by reference (an `Arc` in the
/// HTTP state) among request handlers.
pub struct PresenceService {
    cache: ExpiringCache,
    directory: Option<Arc<dyn UserDirectory>>,
}

impl PresenceService {
    pub fn new(source: Arc<dyn PresenceSource>, ttl: Duration) -> Self {
        Self::with_directory(source, ttl, None)
    }

    /// Create the service with an optional user-directory collaborator for
    /// name/avatar enrichment.
    pub fn with_directory(
        source: Arc<dyn PresenceSource>,
        ttl: Duration,
        directory: Option<Arc<dyn UserDirectory>>,
    ) -> Self {
        Self {
            cache: ExpiringCache::new(source, ttl),
            directory,
        }
    }

    /// Current dataset snapshot (cached, refreshed at most once per TTL).
    pub async fn dataset(&self) -> SourceResult<Arc<PresenceDataset>> {
        self.cache.get().await
    }

    /// Users present in the dataset, ascending by id.
    ///
    /// Enrichment is best-effort: a directory miss (or no directory at all)
    /// degrades to a placeholder name and an empty avatar.
    pub async fn users_list(&self) -> SourceResult<Vec<UserInfo>> {
        let dataset = self.cache.get().await?;

        let users = dataset
            .user_ids()
            .into_iter()
            .map(|user_id| {
                let profile = self
                    .directory
                    .as_deref()
                    .and_then(|directory| directory.lookup(user_id));
                match profile {
                    Some(profile) => UserInfo {
                        user_id,
                        name: profile.name,
                        avatar: profile.avatar,
                    },
                    None => UserInfo {
                        user_id,
                        name: format!("User {}", user_id),
                        avatar: String::new(),
                    },
                }
            })
            .collect();

        Ok(users)
    }

    /// Mean presence time of the given user grouped by weekday.
    pub async fn mean_time_by_weekday(&self, user_id: UserId) -> SourceResult<Vec<MeanTimeRow>> {
        let dataset = self.cache.get().await?;
        let Some(days) = dataset.days(user_id) else {
            debug!("user {} not found", user_id);
            return Ok(Vec::new());
        };

        let buckets = stats::group_by_weekday(days);
        Ok(buckets
            .iter()
            .enumerate()
            .map(|(weekday, intervals)| {
                (stats::WEEKDAY_ABBR[weekday].to_string(), stats::mean(intervals))
            })
            .collect())
    }

    /// Total presence time of the given user grouped by weekday, prefixed
    /// with the `("Weekday", "Presence (s)")` header row.
    pub async fn total_time_by_weekday(&self, user_id: UserId) -> SourceResult<Vec<TotalTimeRow>> {
        let dataset = self.cache.get().await?;
        let Some(days) = dataset.days(user_id) else {
            debug!("user {} not found", user_id);
            return Ok(Vec::new());
        };

        let buckets = stats::group_by_weekday(days);
        let mut rows = Vec::with_capacity(8);
        rows.push((
            "Weekday".to_string(),
            PresenceCell::label("Presence (s)"),
        ));
        rows.extend(buckets.iter().enumerate().map(|(weekday, intervals)| {
            (
                stats::WEEKDAY_ABBR[weekday].to_string(),
                PresenceCell::Seconds(intervals.iter().sum()),
            )
        }));

        Ok(rows)
    }

    /// Mean arrival and departure seconds of the given user per weekday.
    pub async fn mean_start_end_by_weekday(
        &self,
        user_id: UserId,
    ) -> SourceResult<Vec<StartEndRow>> {
        let dataset = self.cache.get().await?;
        let Some(days) = dataset.days(user_id) else {
            debug!("user {} not found", user_id);
            return Ok(Vec::new());
        };

        let buckets = stats::group_by_weekday_with_seconds(days);
        Ok(buckets
            .iter()
            .enumerate()
            .map(|(weekday, bucket)| {
                (
                    stats::WEEKDAY_ABBR[weekday].to_string(),
                    stats::mean(&bucket.start),
                    stats::mean(&bucket.end),
                )
            })
            .collect())
    }
}
