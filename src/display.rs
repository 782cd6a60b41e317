//! Plain text rendering of readings for the terminal.

use std::fmt::Write;

use crate::books::BooksReport;
use crate::reading::Reading;
use crate::selectors::{SpreadResult, SPREADS};
use crate::verse::Verse;

/// Describes the accepted filter shapes, shown after a failed query.
pub const FILTER_HINT: &str = "Use \"all\", \"ot\", \"nt\", a book name, a cluster (e.g., \"gospels\"), comma-separated books, or a range (e.g., \"Isaiah-Amos\").\nUse \"books\" to list all available book names and clusters.";

pub fn render_verse(verse: &Verse) -> String {
    format!("{}\n{}\n", verse.reference, verse.text)
}

/// Each position as `Label:` followed by the verse, separated by blank lines.
pub fn render_spread(results: &[SpreadResult]) -> String {
    results
        .iter()
        .map(|r| format!("{}:\n{}", r.label, render_verse(&r.verse)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_books(report: &BooksReport) -> String {
    let mut out = String::from("Available books:\n");
    for book in &report.books {
        match book.testament {
            Some(testament) => {
                let _ = writeln!(out, "  {} ({})", book.name, testament);
            }
            None => {
                let _ = writeln!(out, "  {}", book.name);
            }
        }
    }
    out.push_str("\nAvailable clusters:\n");
    for cluster in &report.clusters {
        let _ = writeln!(out, "  {}: {}\u{2013}{}", cluster.name, cluster.first, cluster.last);
    }
    out
}

/// The spread table, for the unknown-spread message.
pub fn render_spreads() -> String {
    let mut out = String::from("Available spreads:\n");
    for (name, labels) in SPREADS {
        let _ = writeln!(out, "  {}: {}", name, labels.join(", "));
    }
    out
}

pub fn render_reading(reading: &Reading) -> String {
    match reading {
        Reading::Verse(verse) => render_verse(verse),
        Reading::Spread(results) => render_spread(results),
        Reading::Books(report) => render_books(report),
    }
}
