//! Error type for docset rendering.

use std::path::PathBuf;
use thiserror::Error;

use crate::index::IndexError;
use crate::infra::FsError;

/// Errors that abort a docset render.
///
/// Best-effort stages (headline reads, asset copies) never produce these;
/// they log a warning and carry on.
#[derive(Debug, Error)]
pub enum DocsetError {
    /// The notes directory does not exist.
    #[error("notes directory not found: {0}")]
    NotesDirMissing(PathBuf),

    /// The output root would delete the notes themselves.
    #[error("refusing to clear output {output}: it contains the notes directory {notes}")]
    UnsafeOutput { output: PathBuf, notes: PathBuf },

    /// A filesystem operation failed.
    #[error(transparent)]
    Fs(#[from] FsError),

    /// A template failed to compile or render.
    #[error("template {name} failed: {source}")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// The search index could not be written.
    #[error("search index failed: {0}")]
    Index(#[from] IndexError),
}

impl DocsetError {
    pub(crate) fn template(name: &str, source: minijinja::Error) -> Self {
        Self::Template {
            name: name.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsafe_output_names_both_paths() {
        let err = DocsetError::UnsafeOutput {
            output: PathBuf::from("/home/me"),
            notes: PathBuf::from("/home/me/notes"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/home/me"));
        assert!(msg.contains("/home/me/notes"));
    }

    #[test]
    fn fs_error_is_transparent() {
        let err = DocsetError::from(FsError::NotFound {
            path: PathBuf::from("/missing"),
        });
        assert_eq!(err.to_string(), "path not found: /missing");
    }
}
