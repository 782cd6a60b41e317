//! Listing the books present in a verse collection, and the clusters that
//! can be used as filters.

use std::collections::HashSet;

use crate::canon::{Testament, CLUSTERS};
use crate::verse::Verse;

/// Distinct book names in order of first appearance.
pub fn list_books(verses: &[Verse]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut books = Vec::new();
    for verse in verses {
        if seen.insert(verse.book.as_str()) {
            books.push(verse.book.clone());
        }
    }
    books
}

/// A book of the text together with its testament. `testament` is `None`
/// for book names the canon registry does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    pub name: String,
    pub testament: Option<Testament>,
}

/// A cluster reported by its first and last book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSummary {
    pub name: &'static str,
    pub first: &'static str,
    pub last: &'static str,
}

/// Books present in `verses` (first-seen order) and every known cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooksReport {
    pub books: Vec<BookEntry>,
    pub clusters: Vec<ClusterSummary>,
}

pub fn books_report(verses: &[Verse]) -> BooksReport {
    let books = list_books(verses)
        .into_iter()
        .map(|name| BookEntry {
            testament: Testament::of(&name),
            name,
        })
        .collect();
    BooksReport {
        books,
        clusters: cluster_summaries(),
    }
}

pub fn cluster_summaries() -> Vec<ClusterSummary> {
    CLUSTERS
        .iter()
        .filter_map(|&(name, books)| {
            Some(ClusterSummary {
                name,
                first: books.first().copied()?,
                last: books.last().copied()?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(reference: &str) -> Verse {
        Verse::new(reference, "text").unwrap()
    }

    #[test]
    fn test_first_seen_order_without_duplicates() {
        let verses = vec![
            verse("Genesis 1:1"),
            verse("John 3:16"),
            verse("Genesis 2:3"),
            verse("1 Samuel 3:10"),
            verse("John 1:1"),
        ];
        assert_eq!(list_books(&verses), vec!["Genesis", "John", "1 Samuel"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(list_books(&[]).is_empty());
        assert!(books_report(&[]).books.is_empty());
    }

    #[test]
    fn test_report_tags_testaments() {
        let verses = vec![verse("Psalm 23:1"), verse("Acts 2:1"), verse("Tobit 1:1")];
        let report = books_report(&verses);
        let tags: Vec<Option<Testament>> = report.books.iter().map(|b| b.testament).collect();
        assert_eq!(tags, vec![Some(Testament::Old), Some(Testament::New), None]);
    }

    #[test]
    fn test_cluster_summaries() {
        let clusters = cluster_summaries();
        assert_eq!(clusters.len(), CLUSTERS.len());
        assert_eq!(
            clusters[0],
            ClusterSummary {
                name: "torah",
                first: "Genesis",
                last: "Deuteronomy"
            }
        );
        let prophets = clusters.iter().find(|c| c.name == "prophets").unwrap();
        assert_eq!((prophets.first, prophets.last), ("Isaiah", "Malachi"));
    }
}
