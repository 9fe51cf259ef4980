//! Service layer for business logic and orchestration.
//!
//! This module sits between the data layer and the HTTP handlers:
//! [`stats`] holds the aggregation primitives and [`presence`] the query
//! facade that binds the expiring cache to them.

pub mod presence;
pub mod stats;


pub use presence::PresenceService;
pub use stats::{
    group_by_weekday, group_by_weekday_with_seconds, interval_seconds, mean,
    seconds_since_midnight, StartEndSeconds, WEEKDAY_ABBR,
};
