//! `bibliomancy` command line entry point.
//!
//! ```text
//! bibliomancy                       random verse from the whole text
//! bibliomancy gospels --daily       today's verse from the gospels
//! bibliomancy Isaiah-Amos --search justice
//! bibliomancy nt --spread past-present-future
//! bibliomancy books                 list books and clusters
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bibliomancy::display::{render_reading, render_spreads, FILTER_HINT};
use bibliomancy::runtime_options::{check_daily, check_spread, text_path};
use bibliomancy::{consult, load_verses, BibliomancyError, Query, Selection};

/// Draw a verse, or a spread of verses, from a scripture text.
#[derive(Parser, Debug)]
#[command(name = "bibliomancy", version, about)]
struct Cli {
    /// "all", "ot", "nt", a book, a cluster, comma-separated books, a range
    /// such as "Isaiah-Amos", or "books" to list what is available
    #[arg(default_value = "all")]
    filter: String,

    /// Only consider verses containing this whole word
    #[arg(long, value_name = "KEYWORD")]
    search: Option<String>,

    /// Draw one verse per position of a spread, e.g. past-present-future
    #[arg(long, value_name = "NAME", conflicts_with_all = ["daily", "date"])]
    spread: Option<String>,

    /// Pick the verse of the day
    #[arg(long)]
    daily: bool,

    /// Day for the daily pick (implies --daily)
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<String>,

    /// Scripture text (defaults to $BIBLIOMANCY_TEXT, then ./kjv.txt)
    #[arg(long, value_name = "PATH")]
    text: Option<PathBuf>,
}

const EXIT_NO_MATCH: u8 = 1;
const EXIT_UNREADABLE: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => report(&err),
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let selection = match &cli.spread {
        Some(name) => Selection::Spread(check_spread(name)?),
        None => match check_daily(cli.daily, cli.date.as_deref())? {
            Some(day) => Selection::Daily(day),
            None => Selection::Random,
        },
    };
    let query = Query {
        filter: cli.filter,
        search: cli.search,
        selection,
    };

    let path = text_path(cli.text);
    tracing::debug!(path = %path.display(), ?query, "consulting");
    let verses = load_verses(&path)?;
    let reading = consult(&verses, &query)?;
    Ok(render_reading(&reading))
}

fn report(err: &anyhow::Error) -> ExitCode {
    let Some(err) = err.downcast_ref::<BibliomancyError>() else {
        eprintln!("{:#}", err);
        return ExitCode::FAILURE;
    };
    eprintln!("{}", err);
    match err {
        BibliomancyError::Unreadable { .. } => ExitCode::from(EXIT_UNREADABLE),
        BibliomancyError::NoVersesMatched { .. } => {
            eprintln!("{}", FILTER_HINT);
            ExitCode::from(EXIT_NO_MATCH)
        }
        BibliomancyError::UnknownSpread { .. } => {
            eprint!("{}", render_spreads());
            ExitCode::from(EXIT_NO_MATCH)
        }
        BibliomancyError::EmptyCollection | BibliomancyError::InvalidDate { .. } => {
            ExitCode::from(EXIT_NO_MATCH)
        }
    }
}
