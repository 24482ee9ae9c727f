//! Dated note files and the names derived from them.

use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::infra::{FsError, file_name_str, read_text_lines};

/// Length of the `yyyy-MM-dd` prefix a dated note name starts with.
const DATE_PREFIX_LEN: usize = 10;

/// Length of the `yyyy-MM` month key.
const MONTH_KEY_LEN: usize = 7;

/// Prefix marking a level-1 headline line.
const HEADLINE_PREFIX: &str = "# ";

/// A markdown note in the notes directory.
///
/// Notes are read-only input: the pipeline never modifies them. A note is
/// identified by its file name, which is expected to start with an ISO
/// date (`2024-01-05.md`).
///
/// # Examples
///
/// ```
/// use notes::domain::Note;
///
/// let note = Note::from_path("/notes/2024-01-05.md").unwrap();
/// assert_eq!(note.name(), "2024-01-05");
/// assert_eq!(note.page_file_name(), "2024-01-05.md.html");
/// assert_eq!(note.month_key(), Some("2024-01"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Note {
    path: PathBuf,
    file_name: String,
}

impl Note {
    /// Creates a note from its path.
    ///
    /// Returns `None` when the path has no UTF-8 file name.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let file_name = file_name_str(&path)?.to_string();
        Some(Self { path, file_name })
    }

    /// Returns the path to the source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file name including its extension.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the file name with every extension removed.
    pub fn name(&self) -> &str {
        strip_extensions(&self.file_name)
    }

    /// Returns the file name of the page rendered from this note.
    pub fn page_file_name(&self) -> String {
        page_file_name(&self.file_name)
    }

    /// Returns the date encoded in the file name, if it starts with one.
    pub fn date(&self) -> Option<NaiveDate> {
        parse_date_prefix(&self.file_name)
    }

    /// Returns the `yyyy-MM` key of the month this note belongs to.
    ///
    /// Only dated notes have a month.
    pub fn month_key(&self) -> Option<&str> {
        month_key(&self.file_name)
    }

    /// Returns true if this is the reserved todo file (or a variant of it).
    ///
    /// Any note whose file name starts with the reserved name, minus its
    /// extension, matches.
    pub fn is_reserved(&self, reserved_file_name: &str) -> bool {
        let reserved = strip_extensions(reserved_file_name);
        !reserved.is_empty() && self.file_name.starts_with(reserved)
    }

    /// Reads the note's text with lines joined by `\n`.
    pub fn read_text(&self) -> Result<String, FsError> {
        read_text_lines(&self.path)
    }

    /// Reads the note's level-1 headlines.
    ///
    /// A note that cannot be read yields no headlines.
    pub fn read_headlines(&self) -> Vec<String> {
        match self.read_text() {
            Ok(text) => extract_headlines(&text),
            Err(e) => {
                warn!(note = %self.file_name, error = %e, "could not read headlines");
                Vec::new()
            }
        }
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Note(\"{}\")", self.file_name)
    }
}

/// Removes every extension from a file name.
///
/// Everything from the first `.` on is dropped, so `2024-01-05.md.html`
/// becomes `2024-01-05`.
pub fn strip_extensions(file_name: &str) -> &str {
    match file_name.find('.') {
        Some(pos) => &file_name[..pos],
        None => file_name,
    }
}

/// Returns the rendered page's file name for a note file name.
pub fn page_file_name(note_file_name: &str) -> String {
    format!("{}.html", note_file_name)
}

/// Parses the `yyyy-MM-dd` date a file name starts with.
///
/// The date must be zero padded and valid on the calendar.
pub fn parse_date_prefix(file_name: &str) -> Option<NaiveDate> {
    let prefix = file_name.get(..DATE_PREFIX_LEN)?;
    let well_formed = prefix.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Returns the `yyyy-MM` month key of a dated file name.
pub fn month_key(file_name: &str) -> Option<&str> {
    parse_date_prefix(file_name)?;
    file_name.get(..MONTH_KEY_LEN)
}

/// Extracts the level-1 headlines (`# ` lines) from note text.
pub fn extract_headlines(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.strip_prefix(HEADLINE_PREFIX))
        .map(String::from)
        .collect()
}
