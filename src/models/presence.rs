use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::api::UserId;

/// A single row of the presence file: one user's arrival and departure on one
/// date.
///
/// `start <= end` is not guaranteed by the input; a record spanning midnight
/// (or simply a corrupt one) yields a negative interval downstream and must be
/// carried through, not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceRecord {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Arrival and departure times for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPresence {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// The full presence dataset: `user_id -> (date -> {start, end})`.
///
/// Built fresh on every cache refresh and published behind an `Arc`; it is
/// never mutated after publication. One entry per user per date, a later
/// record for the same user+date overwrites the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresenceDataset {
    users: HashMap<UserId, BTreeMap<NaiveDate, DayPresence>>,
}

impl PresenceDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any earlier record for the same user+date.
    pub fn insert(&mut self, record: PresenceRecord) {
        self.users.entry(record.user_id).or_default().insert(
            record.date,
            DayPresence {
                start: record.start,
                end: record.end,
            },
        );
    }

    /// Per-date presence for one user, or `None` if the user has no records.
    pub fn days(&self, user_id: UserId) -> Option<&BTreeMap<NaiveDate, DayPresence>> {
        self.users.get(&user_id)
    }

    pub fn contains(&self, user_id: UserId) -> bool {
        self.users.contains_key(&user_id)
    }

    /// All user ids present in the dataset, ascending.
    pub fn user_ids(&self) -> Vec<UserId> {
        let mut ids: Vec<UserId> = self.users.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Number of users with at least one record.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user: i64, date: (i32, u32, u32), start: (u32, u32, u32), end: (u32, u32, u32)) -> PresenceRecord {
        PresenceRecord {
            user_id: UserId::new(user),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            start: NaiveTime::from_hms_opt(start.0, start.1, start.2).unwrap(),
            end: NaiveTime::from_hms_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut dataset = PresenceDataset::new();
        dataset.insert(record(10, (2013, 9, 10), (9, 39, 5), (17, 59, 52)));

        assert!(dataset.contains(UserId::new(10)));
        assert!(!dataset.contains(UserId::new(11)));

        let days = dataset.days(UserId::new(10)).unwrap();
        assert_eq!(days.len(), 1);
        let day = days[&NaiveDate::from_ymd_opt(2013, 9, 10).unwrap()];
        assert_eq!(day.start, NaiveTime::from_hms_opt(9, 39, 5).unwrap());
    }

    #[test]
    fn test_later_record_overwrites_same_user_and_date() {
        let mut dataset = PresenceDataset::new();
        dataset.insert(record(10, (2013, 9, 10), (9, 0, 0), (17, 0, 0)));
        dataset.insert(record(10, (2013, 9, 10), (8, 30, 0), (16, 45, 0)));

        let days = dataset.days(UserId::new(10)).unwrap();
        assert_eq!(days.len(), 1);
        let day = days[&NaiveDate::from_ymd_opt(2013, 9, 10).unwrap()];
        assert_eq!(day.start, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(day.end, NaiveTime::from_hms_opt(16, 45, 0).unwrap());
    }

    #[test]
    fn test_user_ids_sorted() {
        let mut dataset = PresenceDataset::new();
        dataset.insert(record(11, (2013, 9, 10), (9, 0, 0), (17, 0, 0)));
        dataset.insert(record(10, (2013, 9, 11), (9, 0, 0), (17, 0, 0)));
        dataset.insert(record(141, (2013, 9, 12), (9, 0, 0), (17, 0, 0)));

        let ids = dataset.user_ids();
        assert_eq!(ids, vec![UserId::new(10), UserId::new(11), UserId::new(141)]);
        assert_eq!(dataset.user_count(), 3);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = PresenceDataset::new();
        assert!(dataset.is_empty());
        assert_eq!(dataset.user_count(), 0);
        assert!(dataset.days(UserId::new(1)).is_none());
        assert!(dataset.user_ids().is_empty());
    }
}
