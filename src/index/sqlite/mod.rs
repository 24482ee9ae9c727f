//! SQLite-backed docset search index.

mod writer;


use rusqlite::Connection;
use std::fs;
use std::path::Path;

use crate::index::{IndexError, IndexResult, create_schema};

/// SQLite-backed docset search index.
///
/// Owns the connection to a `docSet.dsidx` file (or an in-memory database).
pub struct SqliteIndex {
    conn: Connection,
}

impl SqliteIndex {
    /// Opens an in-memory index, mostly useful for tests.
    pub fn open_in_memory() -> IndexResult<Self> {
        Self::with_schema(Connection::open_in_memory()?)
    }

    /// Opens or creates the index file at `path`, creating missing parent
    /// directories.
    pub fn open(path: &Path) -> IndexResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| IndexError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Self::with_schema(Connection::open(path)?)
    }

    fn with_schema(conn: Connection) -> IndexResult<Self> {
        create_schema(&conn)?;
        Ok(Self { conn })
    }
}
