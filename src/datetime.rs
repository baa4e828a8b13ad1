//! Combining ABAP `DATS` / `TIMS` column pairs into one timestamp.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::error::{Error, Result};
use crate::value::char_range;

/// Combine a `YYYYMMDD` date and an `HHMMSS` time into a timestamp
///
/// Components are not range checked: they roll over into the next larger
/// unit, so day `00` is the last day of the previous month and hour `24`
/// is midnight of the next day.
///
/// **Known quirk:** the two month digits are used as a zero-based month
/// index without subtracting one, so `"20230115"` yields February 15th.
/// Existing callers rely on this and compensate for it themselves; do not
/// correct it here without auditing them.
///
/// Years are taken literally: `"0099"` is year 99, not 1999.
pub fn date_time_union(dats: &str, tims: &str) -> Result<NaiveDateTime> {
    if dats.chars().count() != 8 {
        return Err(Error::InvalidDateTime(format!(
            "date {dats:?} must have exactly 8 digits"
        )));
    }
    if tims.chars().count() < 6 {
        return Err(Error::InvalidDateTime(format!(
            "time {tims:?} must have at least 6 digits"
        )));
    }

    let year = component(dats, 0, 4)?;
    let month = component(dats, 4, 6)?;
    let day = component(dats, 6, 8)?;
    let hour = component(tims, 0, 2)?;
    let minute = component(tims, 2, 4)?;
    let second = component(tims, 4, 6)?;

    let out_of_range = || Error::InvalidDateTime(format!("{dats} {tims} is out of range"));

    let months = year * 12 + month;
    let first_of_month = i32::try_from(months.div_euclid(12))
        .ok()
        .zip(u32::try_from(months.rem_euclid(12) + 1).ok())
        .and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(out_of_range)?;

    let offset = (day - 1) * 86_400 + hour * 3_600 + minute * 60 + second;
    TimeDelta::try_seconds(offset)
        .and_then(|delta| first_of_month.checked_add_signed(delta))
        .ok_or_else(out_of_range)
}

fn component(text: &str, start: usize, end: usize) -> Result<i64> {
    let digits = char_range(text, start, end);
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidDateTime(format!(
            "{text:?} has non-digit characters at {start}..{end}"
        )));
    }
    digits
        .parse()
        .map_err(|e| Error::InvalidDateTime(format!("{text:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn month_is_not_shifted() {
        let ts = date_time_union("20230115", "103000").unwrap();
        assert_eq!(ts.year(), 2023);
        // zero-based month index 1, i.e. February
        assert_eq!(ts.month0(), 1);
        assert_eq!(ts.day(), 15);
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.minute(), 30);
        assert_eq!(ts.second(), 0);
    }

    #[test]
    fn month_twelve_rolls_into_next_year() {
        let ts = date_time_union("20231215", "000000").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 1, 15));
    }

    #[test]
    fn day_overflow_rolls_over() {
        // month index 1 (February) has 28 days in 2023
        let ts = date_time_union("20230131", "000000").unwrap();
        assert_eq!((ts.month(), ts.day()), (3, 3));

        let ts = date_time_union("20230100", "000000").unwrap();
        assert_eq!((ts.month(), ts.day()), (1, 31));
    }

    #[test]
    fn time_overflow_rolls_over() {
        let ts = date_time_union("20230014", "246061").unwrap();
        assert_eq!((ts.month(), ts.day()), (1, 15));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (1, 1, 1));
    }

    #[test]
    fn extra_time_digits_are_ignored() {
        let ts = date_time_union("20230000", "12345699").unwrap();
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (12, 34, 56));
    }

    #[test]
    fn two_digit_years_are_literal() {
        let ts = date_time_union("00990000", "000000").unwrap();
        assert_eq!(ts.year(), 98);
        let ts = date_time_union("00990515", "000000").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (99, 6, 15));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            date_time_union("2023011", "103000"),
            Err(Error::InvalidDateTime(_))
        ));
        assert!(matches!(
            date_time_union("20230115", "1030"),
            Err(Error::InvalidDateTime(_))
        ));
        assert!(matches!(
            date_time_union("2023AB15", "103000"),
            Err(Error::InvalidDateTime(_))
        ));
        assert!(matches!(
            date_time_union("20230115", "10:300"),
            Err(Error::InvalidDateTime(_))
        ));
    }
}
