//! IndexWriter trait and entry types.

use std::path::PathBuf;
use thiserror::Error;

/// Type recorded for every rendered page.
pub const ENTRY_TYPE: &str = "Entry";

/// Errors that can occur while writing the search index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// One row of the docset search index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchIndexEntry {
    pub name: String,
    pub entry_type: String,
    pub path: String,
}

impl SearchIndexEntry {
    /// Creates an `Entry` row for a rendered page.
    ///
    /// The name is the page file name up to its first `.`; the path is the
    /// file name itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use notes::index::SearchIndexEntry;
    ///
    /// let entry = SearchIndexEntry::for_page("2024-01-05.md.html");
    /// assert_eq!(entry.name, "2024-01-05");
    /// assert_eq!(entry.entry_type, "Entry");
    /// assert_eq!(entry.path, "2024-01-05.md.html");
    /// ```
    pub fn for_page(page_file_name: &str) -> Self {
        Self {
            name: crate::domain::strip_extensions(page_file_name).to_string(),
            entry_type: ENTRY_TYPE.to_string(),
            path: page_file_name.to_string(),
        }
    }
}

/// A sink that turns search entries into an on-disk docset index.
///
/// Writers must tolerate duplicate `(name, type, path)` triples: a
/// duplicate is skipped, never an error.
pub trait IndexWriter {
    /// Inserts entries, returning how many new rows were written.
    fn insert_entries(&mut self, entries: &[SearchIndexEntry]) -> IndexResult<usize>;

    /// Returns every stored entry ordered by name, then path.
    fn entries(&self) -> IndexResult<Vec<SearchIndexEntry>>;

    /// Returns the number of stored rows.
    fn entry_count(&self) -> IndexResult<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_page_strips_every_extension() {
        let entry = SearchIndexEntry::for_page("2024-01-05.md.html");
        assert_eq!(entry.name, "2024-01-05");
        assert_eq!(entry.path, "2024-01-05.md.html");
    }

    #[test]
    fn for_page_without_extension() {
        let entry = SearchIndexEntry::for_page("README");
        assert_eq!(entry.name, "README");
        assert_eq!(entry.entry_type, ENTRY_TYPE);
    }

    #[test]
    fn index_error_display_includes_path() {
        let err = IndexError::Io {
            path: PathBuf::from("/tmp/docSet.dsidx"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/docSet.dsidx"));
    }
}
