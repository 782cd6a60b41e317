//! verse.rs
//!
//! The `Verse` record and the parser that turns a scripture text into an
//! ordered list of verses.
//!
//! The text format is line oriented:
//!
//! ```text
//! King James Bible            <- header, ignored
//! https://...                 <- header, ignored
//! Genesis 1:1<TAB>In the beginning God created the heaven and the earth.
//! 1 Samuel 3:10<TAB>And the LORD came, and stood, ...
//! ```
//!
//! Lines without a tab, or whose reference does not end in
//! `<space><chapter>:<verse>`, are skipped silently.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

/// Number of leading lines in the text that carry no verses.
const HEADER_LINES: usize = 2;

/// Book name is everything before the trailing ` <chapter>:<verse>`, where
/// chapter and verse are ASCII decimal integers.
static REFERENCE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s+[0-9]+:[0-9]+$").unwrap());

/// A single verse of the text. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Verse {
    /// Citation such as "Genesis 1:1".
    pub reference: String,
    pub text: String,
    /// Canonically cased book name taken from `reference`, e.g. "1 Samuel".
    pub book: String,
}

impl Verse {
    /// Builds a verse from a reference and body, deriving the book name.
    /// Returns `None` if the reference lacks a `chapter:verse` suffix.
    pub fn new(reference: &str, text: &str) -> Option<Verse> {
        let book = book_of(reference)?;
        Some(Verse {
            reference: reference.to_string(),
            text: text.to_string(),
            book: book.to_string(),
        })
    }
}

/// Extracts the book name from a reference like `"1 Corinthians 13:4"`.
pub fn book_of(reference: &str) -> Option<&str> {
    REFERENCE_REGEX
        .captures(reference)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parses the whole text, discarding the two header lines. Input order is
/// preserved and malformed lines are dropped.
pub fn parse_verses(content: &str) -> Vec<Verse> {
    let mut verses = Vec::new();
    let mut skipped = 0usize;

    for (lineno, line) in content.lines().enumerate().skip(HEADER_LINES) {
        let Some((reference, text)) = line.split_once('\t') else {
            trace!(line = lineno + 1, "no tab, skipping");
            skipped += 1;
            continue;
        };
        match Verse::new(reference, text) {
            Some(verse) => verses.push(verse),
            None => {
                trace!(line = lineno + 1, reference, "malformed reference, skipping");
                skipped += 1;
            }
        }
    }

    debug!(verses = verses.len(), skipped, "parsed scripture text");
    verses
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "King James Bible\nsource: test\n";

    #[test]
    fn test_numbered_books() {
        let content = format!(
            "{}Genesis 1:1\tIn the beginning...\n1 Samuel 3:10\tSpeak...\n",
            HEADER
        );
        let verses = parse_verses(&content);
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].book, "Genesis");
        assert_eq!(verses[0].reference, "Genesis 1:1");
        assert_eq!(verses[0].text, "In the beginning...");
        assert_eq!(verses[1].book, "1 Samuel");
        assert_eq!(verses[1].text, "Speak...");
    }

    #[test]
    fn test_headers_are_discarded_unconditionally() {
        // Even header lines that look like verses are ignored.
        let content = "Genesis 1:1\tfirst\nGenesis 1:2\tsecond\nGenesis 1:3\tthird\n";
        let verses = parse_verses(content);
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].reference, "Genesis 1:3");
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let content = format!(
            "{}no tab here\nGenesis\tmissing chapter\nPsalm 23:1\tThe LORD is my shepherd\n\nJohn 3:16\tFor God so loved\n",
            HEADER
        );
        let verses = parse_verses(&content);
        let refs: Vec<&str> = verses.iter().map(|v| v.reference.as_str()).collect();
        assert_eq!(refs, vec!["Psalm 23:1", "John 3:16"]);
    }

    #[test]
    fn test_split_at_first_tab() {
        let content = format!("{}Job 1:21\tThe LORD gave,\tand taketh\n", HEADER);
        let verses = parse_verses(&content);
        assert_eq!(verses[0].text, "The LORD gave,\tand taketh");
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "h1\r\nh2\r\nSong of Solomon 2:1\tI am the rose of Sharon\r\n";
        let verses = parse_verses(content);
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].book, "Song of Solomon");
        assert_eq!(verses[0].text, "I am the rose of Sharon");
    }

    #[test]
    fn test_book_of() {
        assert_eq!(book_of("1 Corinthians 13:4"), Some("1 Corinthians"));
        assert_eq!(book_of("3 John 1:4"), Some("3 John"));
        assert_eq!(book_of("Revelation 21"), None);
        assert_eq!(book_of("13:4"), None);
    }

    #[test]
    fn test_non_ascii_digits_are_not_chapter_verse() {
        // ARABIC-INDIC DIGIT ONE is a Unicode decimal digit, not a 0-9 digit.
        assert_eq!(book_of("Genesis \u{0661}:\u{0661}"), None);
        assert_eq!(book_of("Genesis 1:\u{0661}"), None);
        let content = format!("{}Genesis \u{0661}:\u{0661}\tIn the beginning\n", HEADER);
        assert!(parse_verses(&content).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_verses("").is_empty());
        assert!(parse_verses("only one header").is_empty());
    }
}
