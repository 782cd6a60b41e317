//! runtime_options.rs
//!
//! Runtime option checks for the command line front end:
//!
//! - `text_path(flag)` – where to read the scripture text from,
//! - `check_spread(name)` – validate a spread name,
//! - `check_daily(flag, date)` – decide whether and for which day a daily
//!   pick is requested.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::date;
use crate::error::{BibliomancyError, Result};
use crate::selectors::spread_labels;

/// Environment variable naming the scripture text file.
pub const TEXT_ENV: &str = "BIBLIOMANCY_TEXT";

/// Text file used when neither a flag nor the environment names one.
pub const DEFAULT_TEXT: &str = "kjv.txt";

/// Resolves the text path: explicit flag, then `$BIBLIOMANCY_TEXT`, then
/// `kjv.txt` in the working directory.
pub fn text_path(flag: Option<PathBuf>) -> PathBuf {
    resolve_text_path(flag, env::var_os(TEXT_ENV))
}

/// Same resolution as [`text_path`] with the environment value passed in.
/// An empty variable counts as unset.
pub fn resolve_text_path(flag: Option<PathBuf>, env_value: Option<OsString>) -> PathBuf {
    flag.or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TEXT))
}

/// Returns the canonical (lowercase) spread name if it is known.
pub fn check_spread(name: &str) -> Result<String> {
    match spread_labels(name) {
        Some(_) => Ok(name.to_lowercase()),
        None => Err(BibliomancyError::UnknownSpread {
            name: name.to_string(),
        }),
    }
}

/// `None` when no daily pick is wanted. A date implies a daily pick; the
/// bare flag means today.
pub fn check_daily(daily: bool, day: Option<&str>) -> Result<Option<String>> {
    match day {
        Some(d) => date::check_date(d).map(Some),
        None if daily => Ok(Some(date::today())),
        None => Ok(None),
    }
}
