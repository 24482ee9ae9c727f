//! SQLite schema for the docset search index.

use rusqlite::Connection;

/// Name of the search index table docset browsers query.
pub const SEARCH_INDEX_TABLE: &str = "searchIndex";

/// Creates the docset search index schema.
///
/// The DDL is fixed by the docset format: one `searchIndex` table and a
/// unique `anchor` index over `(name, type, path)`. Does nothing when the
/// table already exists.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    if table_exists(conn, SEARCH_INDEX_TABLE)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE TABLE searchIndex(id INTEGER PRIMARY KEY, name TEXT, type TEXT, path TEXT);
         CREATE UNIQUE INDEX anchor ON searchIndex (name, type, path);",
    )
}

fn table_exists(conn: &Connection, name: &str) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?",
        [name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
