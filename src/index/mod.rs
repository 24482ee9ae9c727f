//! Docset search index.

mod repository;
mod schema;
pub mod sqlite;

pub use repository::{ENTRY_TYPE, IndexError, IndexResult, IndexWriter, SearchIndexEntry};
pub use schema::{SEARCH_INDEX_TABLE, create_schema};
pub use sqlite::SqliteIndex;
