//! CSV-backed presence source.
//!
//! The backing file is the intranet presence export, one row per user per
//! date:
//!
//! ```text
//! 10,2013-09-10,09:39:05,17:59:52
//! ```
//!
//! The export carries header and footer junk lines with a different field
//! count; those are skipped, as are rows whose fields fail to parse. Only an
//! unreadable file aborts the load.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use csv::StringRecord;
use log::debug;

use super::source::{PresenceSource, SourceResult};
use crate::api::UserId;
use crate::models::{PresenceDataset, PresenceRecord};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Presence source reading the intranet CSV export.
#[derive(Debug, Clone)]
pub struct CsvPresenceSource {
    path: PathBuf,
}

impl CsvPresenceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PresenceSource for CsvPresenceSource {
    async fn load(&self) -> SourceResult<PresenceDataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut dataset = PresenceDataset::new();
        for (line, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(err) => {
                    debug!("problem with line {}: {}", line, err);
                    continue;
                }
            };

            // Ignore header and footer lines.
            if record.len() != 4 {
                continue;
            }

            match parse_record(&record) {
                Some(parsed) => dataset.insert(parsed),
                None => debug!("problem with line {}: {:?}", line, record),
            }
        }

        Ok(dataset)
    }
}

fn parse_record(record: &StringRecord) -> Option<PresenceRecord> {
    let user_id: i64 = record[0].trim().parse().ok()?;
    let date = NaiveDate::parse_from_str(record[1].trim(), DATE_FORMAT).ok()?;
    let start = NaiveTime::parse_from_str(record[2].trim(), TIME_FORMAT).ok()?;
    let end = NaiveTime::parse_from_str(record[3].trim(), TIME_FORMAT).ok()?;

    Some(PresenceRecord {
        user_id: UserId::new(user_id),
        date,
        start,
        end,
    })
}
