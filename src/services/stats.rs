//! Aggregation primitives for weekday-grouped presence statistics.
//!
//! Weekday buckets are indexed 0..=6 with Monday at 0. Grouping is
//! commutative (everything downstream is a sum or a mean), so the iteration
//! order of the input date map never affects results.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::models::DayPresence;

/// Three-letter English weekday abbreviations, Monday first.
pub const WEEKDAY_ABBR: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Seconds elapsed since midnight for a time of day.
pub fn seconds_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 3600 + i64::from(time.minute()) * 60 + i64::from(time.second())
}

/// Interval in seconds between two times of day.
///
/// Negative when `end` precedes `start`; the input does not guarantee
/// ordering and the value is deliberately not clamped.
pub fn interval_seconds(start: NaiveTime, end: NaiveTime) -> i64 {
    seconds_since_midnight(end) - seconds_since_midnight(start)
}

/// Arithmetic mean. Returns zero for empty input.
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

/// Parallel per-date lists of start and end seconds for one weekday bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartEndSeconds {
    pub start: Vec<i64>,
    pub end: Vec<i64>,
}

fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// Group presence intervals by weekday.
///
/// Every date lands in exactly one of the 7 buckets; buckets without a
/// matching date are empty vectors, never absent.
pub fn group_by_weekday(days: &BTreeMap<NaiveDate, DayPresence>) -> [Vec<i64>; 7] {
    let mut buckets: [Vec<i64>; 7] = Default::default();
    for (date, day) in days {
        buckets[weekday_index(*date)].push(interval_seconds(day.start, day.end));
    }
    buckets
}

/// Group start and end seconds by weekday.
pub fn group_by_weekday_with_seconds(
    days: &BTreeMap<NaiveDate, DayPresence>,
) -> [StartEndSeconds; 7] {
    let mut buckets: [StartEndSeconds; 7] = Default::default();
    for (date, day) in days {
        let bucket = &mut buckets[weekday_index(*date)];
        bucket.start.push(seconds_since_midnight(day.start));
        bucket.end.push(seconds_since_midnight(day.end));
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn day(start: NaiveTime, end: NaiveTime) -> DayPresence {
        DayPresence { start, end }
    }

    #[test]
    fn test_seconds_since_midnight() {
        assert_eq!(seconds_since_midnight(time(10, 5, 35)), 36335);
        assert_eq!(seconds_since_midnight(time(18, 49, 7)), 67747);
        assert_eq!(seconds_since_midnight(time(0, 0, 0)), 0);
        assert_eq!(seconds_since_midnight(time(23, 59, 59)), 86399);
    }

    #[test]
    fn test_interval_seconds() {
        assert_eq!(interval_seconds(time(9, 39, 5), time(17, 59, 52)), 30047);
        assert_eq!(interval_seconds(time(3, 15, 41), time(20, 55, 22)), 63581);
    }

    #[test]
    fn test_interval_seconds_negative_not_clamped() {
        assert_eq!(interval_seconds(time(17, 0, 0), time(9, 0, 0)), -28800);
    }

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_single_and_reordering() {
        assert_eq!(mean(&[30047]), 30047.0);
        assert_eq!(mean(&[1, 2, 3, 4]), mean(&[4, 2, 3, 1]));
        assert_eq!(mean(&[1, 2, 3, 4]), 2.5);
    }

    #[test]
    fn test_mean_negative_values() {
        assert_eq!(mean(&[-100, 100]), 0.0);
    }

    #[test]
    fn test_group_by_weekday_partitions_all_dates() {
        let mut days = BTreeMap::new();
        // 2013-09-09 was a Monday.
        for offset in 0..10u32 {
            let date = NaiveDate::from_ymd_opt(2013, 9, 9 + offset).unwrap();
            days.insert(date, day(time(9, 0, 0), time(17, 0, 0)));
        }

        let buckets = group_by_weekday(&days);
        let total: usize = buckets.iter().map(|b| b.len()).sum();
        assert_eq!(total, days.len());

        // Mon..Wed saw two dates each, the rest one.
        assert_eq!(buckets[0].len(), 2);
        assert_eq!(buckets[1].len(), 2);
        assert_eq!(buckets[2].len(), 2);
        for bucket in &buckets[3..] {
            assert_eq!(bucket.len(), 1);
        }
    }

    #[test]
    fn test_group_by_weekday_empty_buckets_are_empty_vecs() {
        let mut days = BTreeMap::new();
        // A single Tuesday.
        days.insert(
            NaiveDate::from_ymd_opt(2013, 9, 10).unwrap(),
            day(time(9, 39, 5), time(17, 59, 52)),
        );

        let buckets = group_by_weekday(&days);
        assert_eq!(buckets[1], vec![30047]);
        for (index, bucket) in buckets.iter().enumerate() {
            if index != 1 {
                assert!(bucket.is_empty());
            }
        }
    }

    #[test]
    fn test_group_by_weekday_with_seconds_parallel_lists() {
        let mut days = BTreeMap::new();
        days.insert(
            NaiveDate::from_ymd_opt(2013, 9, 10).unwrap(),
            day(time(9, 39, 5), time(17, 59, 52)),
        );
        days.insert(
            NaiveDate::from_ymd_opt(2013, 9, 17).unwrap(),
            day(time(10, 5, 35), time(18, 49, 7)),
        );

        let buckets = group_by_weekday_with_seconds(&days);
        assert_eq!(buckets[1].start, vec![34745, 36335]);
        assert_eq!(buckets[1].end, vec![64792, 67747]);
        for (index, bucket) in buckets.iter().enumerate() {
            if index != 1 {
                assert!(bucket.start.is_empty());
                assert!(bucket.end.is_empty());
            }
        }
    }

    #[test]
    fn test_weekday_abbreviations() {
        assert_eq!(WEEKDAY_ABBR[0], "Mon");
        assert_eq!(WEEKDAY_ABBR[6], "Sun");
    }
}
