//! date.rs
//!
//! Date strings used to seed the daily pick.
//!
//! The daily pick is keyed on a `YYYY-MM-DD` string rather than on a parsed
//! date. When no date is given, today is taken in UTC so every machine
//! agrees on the verse of the day regardless of its local time zone.

use chrono::{NaiveDate, Utc};

use crate::error::{BibliomancyError, Result};

/// Format of the date strings accepted and produced by this module.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's UTC date as `YYYY-MM-DD`.
pub fn today() -> String {
    Utc::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Checks that `date` is a real calendar date in `YYYY-MM-DD` form and
/// returns it normalized (zero padded).
///
/// ```
/// # use bibliomancy::date::check_date;
/// assert_eq!(check_date("2026-02-23").unwrap(), "2026-02-23");
/// assert!(check_date("2026-02-30").is_err());
/// ```
pub fn check_date(date: &str) -> Result<String> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| BibliomancyError::InvalidDate {
            date: date.to_string(),
        })
}

/// String hash over UTF-16 code units: `hash = hash * 31 + unit`, wrapping
/// to a signed 32-bit integer after every step.
pub fn date_hash(date: &str) -> i32 {
    date.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Maps `date` to an index in `0..len`. `len` must be non-zero.
pub fn daily_index(date: &str, len: usize) -> usize {
    // i64 so that the absolute value of i32::MIN does not overflow.
    let hash = (date_hash(date) as i64).unsigned_abs();
    (hash % len as u64) as usize
}
