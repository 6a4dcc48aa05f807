//! Date and hour helpers used by pricing and by fixtures.

use crate::error::{Result, TheaterError};
use chrono::{Datelike, NaiveDate};

const LAST_HOUR: u32 = 23;

/// Checks whether `hour` falls within `[lower, upper]`, inclusive on both ends.
///
/// # Errors
///
/// Returns [`TheaterError::InvalidHourRange`] if any value is outside `0..=23`
/// or `upper < lower`.
pub const fn hour_within_range(hour: u32, lower: u32, upper: u32) -> Result<bool> {
    if hour > LAST_HOUR || lower > LAST_HOUR || upper > LAST_HOUR || upper < lower {
        return Err(TheaterError::InvalidHourRange { hour, lower, upper });
    }
    Ok(hour >= lower && hour <= upper)
}

/// Returns the first date on or after `start` whose day of month is `day`.
///
/// Months shorter than `day` are skipped, so day 31 starting in April lands
/// on May 31.
///
/// # Errors
///
/// Returns [`TheaterError::InvalidDay`] if `day` is outside `1..=31`, or if
/// the calendar runs out before a match.
pub fn next_date_for_day(start: NaiveDate, day: u32) -> Result<NaiveDate> {
    if !(1..=31).contains(&day) {
        return Err(TheaterError::InvalidDay { day });
    }
    start
        .iter_days()
        .find(|date| date.day() == day)
        .ok_or(TheaterError::InvalidDay { day })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_hour_range_is_inclusive() {
        assert!(hour_within_range(11, 11, 16).unwrap());
        assert!(hour_within_range(16, 11, 16).unwrap());
        assert!(!hour_within_range(10, 11, 16).unwrap());
        assert!(!hour_within_range(17, 11, 16).unwrap());
    }

    #[test]
    fn test_hour_range_rejects_bad_input() {
        assert_eq!(
            hour_within_range(24, 11, 16),
            Err(TheaterError::InvalidHourRange {
                hour: 24,
                lower: 11,
                upper: 16
            })
        );
        assert!(hour_within_range(12, 16, 11).is_err());
        assert!(hour_within_range(12, 0, 24).is_err());
    }

    #[test]
    fn test_next_date_for_day() {
        assert_eq!(next_date_for_day(date(2025, 3, 4), 7).unwrap(), date(2025, 3, 7));
        assert_eq!(next_date_for_day(date(2025, 3, 7), 7).unwrap(), date(2025, 3, 7));
        assert_eq!(next_date_for_day(date(2025, 3, 8), 7).unwrap(), date(2025, 4, 7));
        assert_eq!(next_date_for_day(date(2025, 4, 1), 31).unwrap(), date(2025, 5, 31));
    }

    #[test]
    fn test_next_date_for_day_rejects_out_of_range() {
        assert_eq!(
            next_date_for_day(date(2025, 3, 4), 0),
            Err(TheaterError::InvalidDay { day: 0 })
        );
        assert!(next_date_for_day(date(2025, 3, 4), 32).is_err());
    }
}
