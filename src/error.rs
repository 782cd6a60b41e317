//! Error types for loading and consulting the scripture text.
//!
//! Malformed lines and unresolved filters are not errors: the parser skips
//! such lines and filtering degrades to an empty collection. Only the
//! conditions below cross the library boundary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BibliomancyError>;

#[derive(Error, Debug)]
pub enum BibliomancyError {
    /// The scripture text could not be read at all.
    #[error("cannot read scripture text {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Filtering (and searching, if requested) left nothing to choose from.
    #[error("{}", no_match_message(filter, search.as_deref()))]
    NoVersesMatched {
        filter: String,
        search: Option<String>,
    },

    /// A selector was asked to choose from an empty collection.
    #[error("cannot choose a verse from an empty collection")]
    EmptyCollection,

    #[error("unknown spread: \"{name}\"")]
    UnknownSpread { name: String },

    #[error("invalid date \"{date}\", expected YYYY-MM-DD")]
    InvalidDate { date: String },
}

impl BibliomancyError {
    /// True for failures caused by the scripture source rather than by the
    /// user's query.
    pub fn is_unreadable(&self) -> bool {
        matches!(self, BibliomancyError::Unreadable { .. })
    }
}

fn no_match_message(filter: &str, search: Option<&str>) -> String {
    match search {
        Some(term) => format!(
            "No verses found for filter \"{}\" containing \"{}\".",
            filter, term
        ),
        None => format!("No verses found for filter: \"{}\"", filter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_messages() {
        let plain = BibliomancyError::NoVersesMatched {
            filter: "Hezekiah".to_string(),
            search: None,
        };
        assert_eq!(plain.to_string(), "No verses found for filter: \"Hezekiah\"");

        let searched = BibliomancyError::NoVersesMatched {
            filter: "gospels".to_string(),
            search: Some("leviathan".to_string()),
        };
        assert_eq!(
            searched.to_string(),
            "No verses found for filter \"gospels\" containing \"leviathan\"."
        );
    }

    #[test]
    fn test_unreadable_is_distinct() {
        let err = BibliomancyError::Unreadable {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.is_unreadable());
        assert!(err.to_string().starts_with("cannot read scripture text missing.txt"));
        assert!(!BibliomancyError::EmptyCollection.is_unreadable());
    }
}
