//! canon.rs
//!
//! The canon registry: the books of the Old and New Testament in their
//! traditional order, and the named clusters of books that can be used as
//! filters (e.g. `"gospels"`, `"wisdom"`).
//!
//! The concatenation of both testaments, [`ALL_BOOKS`], is the canonical
//! order used when resolving ranges such as `"Isaiah-Amos"`. It is *not*
//! alphabetical.
//!
//! Stored names use their canonical casing ("1 Samuel", "Song of Solomon").
//! The lookup helpers in this module are case-insensitive.

use lazy_static::lazy_static;
use std::collections::HashSet;
use std::fmt;

/// Books of the Old Testament, Genesis through Malachi.
pub const OT_BOOKS: [&str; 39] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalm",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
];

/// Books of the New Testament, Matthew through Revelation.
pub const NT_BOOKS: [&str; 27] = [
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

const TORAH: &[&str] = &["Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy"];

/// Named clusters, in the order they are reported. "pentateuch" is an
/// alias of "torah" and shares its book list.
pub const CLUSTERS: &[(&str, &[&str])] = &[
    ("torah", TORAH),
    ("pentateuch", TORAH),
    ("gospels", &["Matthew", "Mark", "Luke", "John"]),
    (
        "pauline",
        &[
            "Romans",
            "1 Corinthians",
            "2 Corinthians",
            "Galatians",
            "Ephesians",
            "Philippians",
            "Colossians",
            "1 Thessalonians",
            "2 Thessalonians",
            "1 Timothy",
            "2 Timothy",
            "Titus",
            "Philemon",
        ],
    ),
    (
        "wisdom",
        &["Job", "Psalm", "Proverbs", "Ecclesiastes", "Song of Solomon"],
    ),
    (
        "historical",
        &[
            "Joshua",
            "Judges",
            "Ruth",
            "1 Samuel",
            "2 Samuel",
            "1 Kings",
            "2 Kings",
            "1 Chronicles",
            "2 Chronicles",
            "Ezra",
            "Nehemiah",
            "Esther",
        ],
    ),
    (
        "prophets",
        &[
            "Isaiah",
            "Jeremiah",
            "Lamentations",
            "Ezekiel",
            "Daniel",
            "Hosea",
            "Joel",
            "Amos",
            "Obadiah",
            "Jonah",
            "Micah",
            "Nahum",
            "Habakkuk",
            "Zephaniah",
            "Haggai",
            "Zechariah",
            "Malachi",
        ],
    ),
];

lazy_static! {
    /// Both testaments in canonical order.
    pub static ref ALL_BOOKS: Vec<&'static str> =
        OT_BOOKS.iter().chain(NT_BOOKS.iter()).copied().collect();

    /// Lowercased copy of [`ALL_BOOKS`], index-aligned with it.
    static ref ALL_BOOKS_LOWER: Vec<String> =
        ALL_BOOKS.iter().map(|b| b.to_lowercase()).collect();

    pub static ref OT_SET: HashSet<&'static str> = OT_BOOKS.iter().copied().collect();
    pub static ref NT_SET: HashSet<&'static str> = NT_BOOKS.iter().copied().collect();
}

/// One of the two canonical divisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    /// Returns the testament a (canonically cased) book belongs to.
    pub fn of(book: &str) -> Option<Testament> {
        if OT_SET.contains(book) {
            Some(Testament::Old)
        } else if NT_SET.contains(book) {
            Some(Testament::New)
        } else {
            None
        }
    }

    /// Parses the `"ot"` / `"nt"` filter keywords (any case).
    pub fn from_keyword(keyword: &str) -> Option<Testament> {
        match keyword.to_lowercase().as_str() {
            "ot" => Some(Testament::Old),
            "nt" => Some(Testament::New),
            _ => None,
        }
    }

    /// Whether `book` (exact casing) belongs to this testament.
    pub fn contains(self, book: &str) -> bool {
        match self {
            Testament::Old => OT_SET.contains(book),
            Testament::New => NT_SET.contains(book),
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Testament::Old => f.write_str("OT"),
            Testament::New => f.write_str("NT"),
        }
    }
}

/// Position of `name` in canonical order, ignoring case and surrounding
/// whitespace.
pub fn canonical_index(name: &str) -> Option<usize> {
    let needle = name.trim().to_lowercase();
    ALL_BOOKS_LOWER.iter().position(|b| *b == needle)
}

/// Canonically cased name for `name`, if it is a known book.
pub fn canonical_name(name: &str) -> Option<&'static str> {
    canonical_index(name).map(|i| ALL_BOOKS[i])
}

/// Looks up a cluster by name (case-insensitive).
pub fn cluster(name: &str) -> Option<&'static [&'static str]> {
    let key = name.to_lowercase();
    CLUSTERS
        .iter()
        .find(|(cluster_name, _)| *cluster_name == key)
        .map(|(_, books)| *books)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_books_order() {
        assert_eq!(ALL_BOOKS.len(), 66);
        assert_eq!(ALL_BOOKS[0], "Genesis");
        assert_eq!(ALL_BOOKS[38], "Malachi");
        assert_eq!(ALL_BOOKS[39], "Matthew");
        assert_eq!(ALL_BOOKS[65], "Revelation");
    }

    #[test]
    fn test_every_cluster_book_is_canonical() {
        for (name, books) in CLUSTERS {
            for book in *books {
                assert!(
                    ALL_BOOKS.contains(book),
                    "cluster {} names unknown book {}",
                    name,
                    book
                );
            }
        }
    }

    #[test]
    fn test_testaments_are_disjoint() {
        assert!(OT_SET.is_disjoint(&NT_SET));
        assert_eq!(Testament::of("Genesis"), Some(Testament::Old));
        assert_eq!(Testament::of("1 John"), Some(Testament::New));
        assert_eq!(Testament::of("genesis"), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(canonical_name("song of solomon"), Some("Song of Solomon"));
        assert_eq!(canonical_name("  1 SAMUEL "), Some("1 Samuel"));
        assert_eq!(canonical_name("Hezekiah"), None);
        assert_eq!(cluster("GOSPELS"), Some(&["Matthew", "Mark", "Luke", "John"][..]));
        assert_eq!(cluster("pentateuch"), cluster("torah"));
        assert!(cluster("apocrypha").is_none());
    }

    #[test]
    fn test_testament_keywords() {
        assert_eq!(Testament::from_keyword("OT"), Some(Testament::Old));
        assert_eq!(Testament::from_keyword("nt"), Some(Testament::New));
        assert_eq!(Testament::from_keyword("all"), None);
        assert_eq!(Testament::New.to_string(), "NT");
    }
}
