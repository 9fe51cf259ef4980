//! Data-source layer for presence data.
//!
//! This module provides the abstractions the rest of the crate loads data
//! through, allowing different backing stores to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Service Layer (services/) - Query Facade               │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  ExpiringCache (cache.rs) - TTL + single-flight         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  PresenceSource Trait (source.rs)                       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │           CsvPresenceSource                   │
//!     │          (CSV backing file)                   │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The optional user directory (`directory.rs`, `users_xml.rs`) sits next to
//! the presence source: it enriches user listings with names and avatars and
//! a lookup miss is never an error.

pub mod csv;
pub mod directory;
pub mod source;
pub mod users_xml;

pub use self::csv::CsvPresenceSource;
pub use directory::{UserDirectory, UserProfile};
pub use source::{PresenceSource, SourceError, SourceResult};
pub use users_xml::XmlUserDirectory;
