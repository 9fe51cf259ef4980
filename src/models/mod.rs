//! Presence domain model.
//!
//! Raw records as they come out of the backing file, and the dataset shape
//! the rest of the crate works with: `user_id -> (date -> {start, end})`.

pub mod presence;

pub use presence::{DayPresence, PresenceDataset, PresenceRecord};
