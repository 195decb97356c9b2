//! Database Connection and Setup
//!
//! Opens the SQLite database and runs migrations.

use std::path::Path;

use rusqlite::Connection;

use crate::domain::{DomainError, DomainResult};

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

/// Open the database at `db_path` and bring the schema up to date
pub fn init_db(db_path: &Path) -> DomainResult<Connection> {
    let conn = Connection::open(db_path)?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Run database migrations. All statements are idempotent.
pub(crate) fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            body TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending'
        )",
        [],
    )?;

    // Index for the status-filtered list query
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_todos_status ON todos(status)",
        [],
    )?;

    Ok(())
}
