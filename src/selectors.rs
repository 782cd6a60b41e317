//! selectors.rs
//!
//! Choosing verses out of a (usually already filtered) collection:
//!
//! - [`pick_daily`]: the same verse for everyone on a given date,
//! - [`pick_random`]: a single uniformly random verse,
//! - [`draw_spread`]: one verse per position of a named spread, e.g.
//!   Past / Present / Future.
//!
//! The randomized selectors take the thread RNG by default; the `_with`
//! variants accept any [`Rng`] so draws can be reproduced.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::date;
use crate::error::{BibliomancyError, Result};
use crate::verse::Verse;

/// Known spreads and their position labels, in display order.
pub const SPREADS: &[(&str, &[&str])] = &[
    ("past-present-future", &["Past", "Present", "Future"]),
    (
        "thesis-antithesis-synthesis",
        &["Thesis", "Antithesis", "Synthesis"],
    ),
    ("warning-counsel-promise", &["Warning", "Counsel", "Promise"]),
    ("head-heart-hands", &["Head", "Heart", "Hands"]),
];

/// One drawn position of a spread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadResult {
    pub label: &'static str,
    pub verse: Verse,
}

/// Position labels of the spread called `name` (any case).
pub fn spread_labels(name: &str) -> Option<&'static [&'static str]> {
    let key = name.to_lowercase();
    SPREADS
        .iter()
        .find(|(spread, _)| *spread == key)
        .map(|(_, labels)| *labels)
}

/// Picks the verse for `day` (`YYYY-MM-DD`, default today).
///
/// Deterministic: the same collection and date always give the same verse.
///
/// # Errors
///
/// [`BibliomancyError::EmptyCollection`] if `verses` is empty.
pub fn pick_daily<'a>(verses: &'a [Verse], day: Option<&str>) -> Result<&'a Verse> {
    if verses.is_empty() {
        return Err(BibliomancyError::EmptyCollection);
    }
    let day = day.map_or_else(date::today, str::to_string);
    let index = date::daily_index(&day, verses.len());
    debug!(date = %day, index, of = verses.len(), "daily pick");
    Ok(&verses[index])
}

/// Picks one verse uniformly at random.
pub fn pick_random(verses: &[Verse]) -> Result<&Verse> {
    pick_random_with(verses, &mut rand::thread_rng())
}

pub fn pick_random_with<'a, R: Rng + ?Sized>(
    verses: &'a [Verse],
    rng: &mut R,
) -> Result<&'a Verse> {
    if verses.is_empty() {
        return Err(BibliomancyError::EmptyCollection);
    }
    Ok(&verses[rng.gen_range(0..verses.len())])
}

/// Draws one verse per position of the spread `name`.
///
/// An unknown spread, or an empty collection, yields an empty result.
/// Verses are distinct for as long as unused verses remain; once every
/// verse has been drawn, repeats are allowed.
pub fn draw_spread(verses: &[Verse], name: &str) -> Vec<SpreadResult> {
    draw_spread_with(verses, name, &mut rand::thread_rng())
}

pub fn draw_spread_with<R: Rng + ?Sized>(
    verses: &[Verse],
    name: &str,
    rng: &mut R,
) -> Vec<SpreadResult> {
    let Some(labels) = spread_labels(name) else {
        debug!(spread = name, "unknown spread");
        return Vec::new();
    };
    if verses.is_empty() {
        return Vec::new();
    }

    let mut used: HashSet<usize> = HashSet::with_capacity(labels.len());
    let mut results = Vec::with_capacity(labels.len());
    for &label in labels {
        let mut index = rng.gen_range(0..verses.len());
        while used.contains(&index) && used.len() < verses.len() {
            index = rng.gen_range(0..verses.len());
        }
        used.insert(index);
        results.push(SpreadResult {
            label,
            verse: verses[index].clone(),
        });
    }
    results
}
