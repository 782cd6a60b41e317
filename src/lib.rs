//! Bibliomancy: draw verses from a line oriented scripture text.
//!
//! The crate parses a text of `<reference><TAB><verse>` lines into
//! [`Verse`] records and selects among them:
//!
//! 1. **Filtering** by testament (`"ot"`, `"nt"`), book (`"1 Samuel"`),
//!    cluster (`"gospels"`), comma list (`"Isaiah, Amos"`) or canonical
//!    range (`"Isaiah-Amos"`); see [`filter_verses`].
//! 2. **Searching** for a whole word, case-insensitively; see
//!    [`search_verses`].
//! 3. **Selecting** a daily verse ([`pick_daily`]), a random verse, or a
//!    multi-position spread ([`draw_spread`]).
//!
//! # Usage
//!
//! ```ignore
//! use bibliomancy::{load_verses, filter_verses, search_verses, pick_daily};
//!
//! fn example() -> bibliomancy::Result<()> {
//!     let verses = load_verses("kjv.txt")?;
//!     let gospels = filter_verses(&verses, "gospels");
//!     let light = search_verses(&gospels, "light");
//!     let verse = pick_daily(&light, Some("2026-02-23"))?;
//!     println!("{}\n{}", verse.reference, verse.text);
//!     Ok(())
//! }
//! ```

pub mod books;
pub mod canon;
pub mod date;
pub mod display;
pub mod error;
pub mod fileio;
pub mod filter;
pub mod reading;
pub mod runtime_options;
pub mod selectors;
pub mod verse;

pub use books::list_books;
pub use canon::{Testament, ALL_BOOKS, CLUSTERS, NT_BOOKS, OT_BOOKS};
pub use error::{BibliomancyError, Result};
pub use fileio::load_verses;
pub use filter::{filter_verses, resolve_book_names, search_verses};
pub use reading::{consult, Query, Reading, Selection};
pub use selectors::{draw_spread, pick_daily, pick_random, SpreadResult, SPREADS};
pub use verse::{parse_verses, Verse};
