//! Loading the scripture text from disk.
//!
//! This is the only place the library touches the filesystem. Everything
//! downstream works on the in-memory verse list.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{BibliomancyError, Result};
use crate::verse::{parse_verses, Verse};

/// Reads a UTF‑8 text file into a string, removing a leading byte order
/// mark if present.
///
/// # Errors
///
/// Returns [`BibliomancyError::Unreadable`] if the file cannot be opened
/// or is not valid UTF‑8.
pub fn do_read<P: AsRef<Path>>(filename: P) -> Result<String> {
    let path = filename.as_ref();
    let content = fs::read_to_string(path).map_err(|source| BibliomancyError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let content = match content.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => content,
    };
    debug!(path = %path.display(), bytes = content.len(), "read scripture text");
    Ok(content)
}

/// Reads and parses the scripture text at `filename`.
///
/// ```no_run
/// use bibliomancy::fileio::load_verses;
///
/// # fn main() -> bibliomancy::Result<()> {
/// let verses = load_verses("kjv.txt")?;
/// println!("{} verses", verses.len());
/// # Ok(())
/// # }
/// ```
pub fn load_verses<P: AsRef<Path>>(filename: P) -> Result<Vec<Verse>> {
    let content = do_read(filename)?;
    Ok(parse_verses(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_unreadable() {
        let err = load_verses("/nonexistent/bibliomancy/kjv.txt").unwrap_err();
        assert!(err.is_unreadable());
    }

    #[test]
    fn test_bom_is_stripped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("\u{FEFF}header\nheader\nRuth 1:16\tWhither thou goest\n".as_bytes())
            .unwrap();
        let content = do_read(file.path()).unwrap();
        assert!(content.starts_with("header"));

        let verses = load_verses(file.path()).unwrap();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].book, "Ruth");
    }
}
