//! reading.rs
//!
//! The full query pipeline the command line front end runs against a loaded
//! text: filter, optionally search, then select.
//!
//! Unlike the individual filter and search functions, the pipeline treats an
//! empty selection as a failure ([`BibliomancyError::NoVersesMatched`]) so
//! callers can report it differently from an unreadable text.

use rand::Rng;
use tracing::debug;

use crate::books::{books_report, BooksReport};
use crate::error::{BibliomancyError, Result};
use crate::filter::{filter_verses, search_verses};
use crate::selectors::{self, SpreadResult};
use crate::verse::Verse;

/// Filter expression selecting listing mode instead of a reading.
pub const BOOKS_KEYWORD: &str = "books";

/// How to choose among the selected verses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// One uniformly random verse.
    #[default]
    Random,
    /// The verse of the given `YYYY-MM-DD` day.
    Daily(String),
    /// One verse per position of the named spread.
    Spread(String),
}

/// A request against the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub filter: String,
    pub search: Option<String>,
    pub selection: Selection,
}

impl Default for Query {
    fn default() -> Self {
        Query {
            filter: "all".to_string(),
            search: None,
            selection: Selection::Random,
        }
    }
}

impl Query {
    /// Whether the filter asks for the books listing rather than a verse.
    pub fn is_listing(&self) -> bool {
        self.filter.eq_ignore_ascii_case(BOOKS_KEYWORD)
    }
}

/// What a query produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reading {
    Verse(Verse),
    Spread(Vec<SpreadResult>),
    Books(BooksReport),
}

/// Filters and searches `verses` per `query`, failing if nothing is left.
pub fn select_verses(verses: &[Verse], query: &Query) -> Result<Vec<Verse>> {
    let mut selected = filter_verses(verses, &query.filter);
    debug!(filter = %query.filter, selected = selected.len(), "filtered verses");
    if let Some(keyword) = &query.search {
        selected = search_verses(&selected, keyword);
    }
    if selected.is_empty() {
        return Err(BibliomancyError::NoVersesMatched {
            filter: query.filter.clone(),
            search: query.search.clone(),
        });
    }
    Ok(selected)
}

/// Runs `query` using the thread RNG for random choices.
pub fn consult(verses: &[Verse], query: &Query) -> Result<Reading> {
    consult_with(verses, query, &mut rand::thread_rng())
}

pub fn consult_with<R: Rng + ?Sized>(
    verses: &[Verse],
    query: &Query,
    rng: &mut R,
) -> Result<Reading> {
    if query.is_listing() {
        return Ok(Reading::Books(books_report(verses)));
    }

    let selected = select_verses(verses, query)?;
    match &query.selection {
        Selection::Random => {
            selectors::pick_random_with(&selected, rng).map(|v| Reading::Verse(v.clone()))
        }
        Selection::Daily(day) => selectors::pick_daily(&selected, Some(day.as_str()))
            .map(|v| Reading::Verse(v.clone())),
        Selection::Spread(name) => {
            let drawn = selectors::draw_spread_with(&selected, name, rng);
            if drawn.is_empty() {
                return Err(BibliomancyError::UnknownSpread { name: name.clone() });
            }
            Ok(Reading::Spread(drawn))
        }
    }
}
