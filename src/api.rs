//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization. Row types
//! are tuples on purpose: the dashboard charts consume plain JSON arrays like
//! `["Tue", 30047.0]`, and serde serializes tuples exactly that way.

use serde::{Deserialize, Serialize};

/// User identifier (key of the presence dataset).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        UserId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User listing entry for the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub user_id: UserId,
    pub name: String,
    pub avatar: String,
}

/// `(weekday abbreviation, mean presence seconds)`.
pub type MeanTimeRow = (String, f64);

/// `(weekday abbreviation, mean start seconds, mean end seconds)`.
pub type StartEndRow = (String, f64, f64);

/// `(weekday abbreviation or column header, presence cell)`.
///
/// The total-time table carries a header row `("Weekday", "Presence (s)")`
/// ahead of the numeric rows, so the second column is either a label or a
/// seconds total.
pub type TotalTimeRow = (String, PresenceCell);

/// Second column of a [`TotalTimeRow`]: the header label or a seconds total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PresenceCell {
    Seconds(i64),
    Label(String),
}

impl PresenceCell {
    pub fn label(text: impl Into<String>) -> Self {
        PresenceCell::Label(text.into())
    }
}

impl PartialEq<&str> for PresenceCell {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, PresenceCell::Label(s) if s == other)
    }
}

impl PartialEq<i64> for PresenceCell {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, PresenceCell::Seconds(s) if s == other)
    }
}
