//! Calendar instants for listing dates.
//!
//! Listings record when they were added as `{ month, day, year }` with the month
//! spelled out. Range comparisons need a concrete point in time, so the month
//! name is resolved through a fixed table and the triple becomes a naive
//! (timezone-free) midnight.

use crate::error::{Result, SearchError};
use crate::model::AddedDate;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Resolve a full English month name to its zero-based index.
///
/// Unlike criteria normalization this is strict: an unknown name means the
/// listing data is malformed.
pub fn month_name_to_index(name: &str) -> Result<u32> {
    let lower = name.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|m| *m == lower)
        .map(|i| i as u32)
        .ok_or_else(|| SearchError::InvalidMonthName(name.to_string()))
}

/// The instant a listing was added: midnight of its `added` date.
///
/// Days outside the month roll over into the neighbouring months, so
/// `30 February` lands in March and day `0` is the last day of the previous
/// month.
pub fn added_instant(added: &AddedDate) -> Result<NaiveDateTime> {
    let month = month_name_to_index(&added.month)?;
    let out_of_range = || SearchError::DateOutOfRange {
        year: added.year,
        month: added.month.clone(),
        day: added.day,
    };

    let first = NaiveDate::from_ymd_opt(added.year, month + 1, 1).ok_or_else(out_of_range)?;
    let date = first
        .checked_add_signed(TimeDelta::days(i64::from(added.day) - 1))
        .ok_or_else(out_of_range)?;
    Ok(date.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn month_names_map_to_zero_based_index() {
        assert_eq!(month_name_to_index("January").unwrap(), 0);
        assert_eq!(month_name_to_index("may").unwrap(), 4);
        assert_eq!(month_name_to_index("DECEMBER").unwrap(), 11);
        for (i, name) in MONTH_NAMES.iter().enumerate() {
            assert_eq!(month_name_to_index(name).unwrap(), i as u32);
        }
    }

    #[test]
    fn unknown_month_is_an_error() {
        for bad in ["Jan", "Sept", "", "Smarch", " March"] {
            match month_name_to_index(bad) {
                Err(SearchError::InvalidMonthName(name)) => assert_eq!(name, bad),
                other => panic!("expected InvalidMonthName for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn added_instant_is_midnight() {
        let added = AddedDate::new(20, "November", 2024);
        assert_eq!(added_instant(&added).unwrap(), ymd(2024, 11, 20));
    }

    #[test]
    fn overflowing_day_rolls_into_next_month() {
        let added = AddedDate::new(30, "February", 2024);
        assert_eq!(added_instant(&added).unwrap(), ymd(2024, 3, 1));

        let added = AddedDate::new(31, "April", 2025);
        assert_eq!(added_instant(&added).unwrap(), ymd(2025, 5, 1));
    }

    #[test]
    fn day_zero_is_last_day_of_previous_month() {
        let added = AddedDate::new(0, "March", 2025);
        assert_eq!(added_instant(&added).unwrap(), ymd(2025, 2, 28));
    }

    #[test]
    fn bad_month_propagates() {
        let added = AddedDate::new(1, "Brumaire", 2024);
        assert!(matches!(
            added_instant(&added),
            Err(SearchError::InvalidMonthName(_))
        ));
    }

    #[test]
    fn unrepresentable_year_is_out_of_range() {
        let added = AddedDate::new(1, "June", i32::MAX);
        let err = added_instant(&added).unwrap_err();
        assert!(matches!(err, SearchError::DateOutOfRange { .. }));
        assert!(err.is_data_integrity());
    }
}
