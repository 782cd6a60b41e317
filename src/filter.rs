//! filter.rs
//!
//! Turns a user supplied filter expression into a subset of verses, and
//! narrows a collection by keyword.
//!
//! A filter expression is one of, checked in this order (case-insensitive):
//!
//! 1. `all`
//! 2. `ot` / `nt`
//! 3. a cluster name (`gospels`, `torah`, ...)
//! 4. a comma list of books (`Isaiah, Jeremiah, Amos`)
//! 5. a range in canonical order (`Isaiah-Amos`)
//! 6. a single book name (`1 Samuel`)
//!
//! Unknown expressions produce an empty result rather than an error.

use regex::{Regex, RegexBuilder};
use tracing::{debug, trace};

use crate::canon::{self, Testament, ALL_BOOKS};
use crate::verse::Verse;

/// Resolves a cluster, comma list or range to the books it names.
///
/// Returns `None` when the expression is none of those shapes, when any
/// entry of a comma list is unknown, or when no hyphen split yields a
/// forward range. Single book names are *not* handled here; see
/// [`filter_verses`].
///
/// The result is free of duplicates. Clusters and ranges come back in
/// canonical order; comma lists in the order given.
pub fn resolve_book_names(filter: &str) -> Option<Vec<&'static str>> {
    if let Some(books) = canon::cluster(filter) {
        return Some(books.to_vec());
    }

    if filter.contains(',') {
        return resolve_list(filter);
    }

    if filter.contains('-') {
        return resolve_range(filter);
    }

    None
}

/// All or nothing: a single unknown entry fails the whole list.
fn resolve_list(filter: &str) -> Option<Vec<&'static str>> {
    let mut matched: Vec<&'static str> = Vec::new();
    for name in filter.split(',') {
        let Some(book) = canon::canonical_name(name) else {
            debug!(filter, entry = name.trim(), "unknown book in list");
            return None;
        };
        if !matched.contains(&book) {
            matched.push(book);
        }
    }
    Some(matched)
}

/// Tries every hyphen as the split point and keeps the first one where both
/// sides are books and the start does not come after the end.
fn resolve_range(filter: &str) -> Option<Vec<&'static str>> {
    for (pos, _) in filter.match_indices('-') {
        let (left, right) = (&filter[..pos], &filter[pos + 1..]);
        let start = canon::canonical_index(left);
        let end = canon::canonical_index(right);
        trace!(filter, pos, ?start, ?end, "range split");
        if let (Some(start), Some(end)) = (start, end) {
            if start <= end {
                return Some(ALL_BOOKS[start..=end].to_vec());
            }
        }
    }
    debug!(filter, "no forward range found");
    None
}

/// Keeps the verses selected by `filter`, in their original order.
///
/// ```
/// use bibliomancy::{filter_verses, Verse};
///
/// let verses = vec![
///     Verse::new("Genesis 1:1", "In the beginning").unwrap(),
///     Verse::new("John 1:1", "In the beginning was the Word").unwrap(),
/// ];
/// assert_eq!(filter_verses(&verses, "nt").len(), 1);
/// assert_eq!(filter_verses(&verses, "GENESIS")[0].book, "Genesis");
/// ```
pub fn filter_verses(verses: &[Verse], filter: &str) -> Vec<Verse> {
    let f = filter.to_lowercase();

    if f == "all" {
        return verses.to_vec();
    }
    if let Some(testament) = Testament::from_keyword(&f) {
        return keep(verses, |v| testament.contains(&v.book));
    }

    if let Some(books) = resolve_book_names(filter) {
        return keep(verses, |v| books.iter().any(|b| *b == v.book));
    }

    // Single book, matched directly against the verse's own book name.
    keep(verses, |v| v.book.to_lowercase() == f)
}

fn keep<F>(verses: &[Verse], pred: F) -> Vec<Verse>
where
    F: Fn(&Verse) -> bool,
{
    verses.iter().filter(|v| pred(v)).cloned().collect()
}

/// Builds a case-insensitive regex matching `keyword` as a whole word, with
/// all of its characters taken literally. Word boundaries are ASCII: only
/// `[0-9A-Za-z_]` counts as a word character, so accented letters end a word.
pub fn whole_word_regex(keyword: &str) -> Result<Regex, regex::Error> {
    let pattern = format!(r"(?-u:\b){}(?-u:\b)", regex::escape(keyword));
    RegexBuilder::new(&pattern).case_insensitive(true).build()
}

/// Keeps the verses whose text contains `keyword` as a whole word.
pub fn search_verses(verses: &[Verse], keyword: &str) -> Vec<Verse> {
    let re = match whole_word_regex(keyword) {
        Ok(re) => re,
        Err(err) => {
            // Only reachable for keywords too large to compile.
            debug!(keyword, %err, "search pattern rejected");
            return Vec::new();
        }
    };
    let found = keep(verses, |v| re.is_match(&v.text));
    debug!(keyword, matches = found.len(), "searched verses");
    found
}
