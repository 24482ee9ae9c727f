//! IndexWriter implementation for SqliteIndex.

use super::SqliteIndex;
use crate::index::{IndexResult, IndexWriter, SearchIndexEntry};
use rusqlite::params;
use tracing::debug;

const INSERT_ENTRY: &str =
    "INSERT OR IGNORE INTO searchIndex(name, type, path) VALUES (?1, ?2, ?3)";

impl IndexWriter for SqliteIndex {
    /// Inserts the whole batch in one transaction; any error rolls it back.
    fn insert_entries(&mut self, entries: &[SearchIndexEntry]) -> IndexResult<usize> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare_cached(INSERT_ENTRY)?;
            for entry in entries {
                let changed = stmt.execute(params![entry.name, entry.entry_type, entry.path])?;
                if changed == 0 {
                    debug!(name = %entry.name, path = %entry.path, "duplicate search entry skipped");
                }
                inserted += changed;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    fn entries(&self) -> IndexResult<Vec<SearchIndexEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, type, path FROM searchIndex ORDER BY name, path")?;
        let rows = stmt.query_map([], |row| {
            Ok(SearchIndexEntry {
                name: row.get(0)?,
                entry_type: row.get(1)?,
                path: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn entry_count(&self) -> IndexResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM searchIndex", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
