//! Database operations for journal entries and settings.
//!
//! This module owns the SQLite file that backs the journal. `Database` only holds
//! the file path; every operation opens its own connection and drops it when done,
//! so no state is cached between calls and every read sees the file as it is.
//!
//! # Module Structure
//!
//! - `schema`: Table definitions and schema initialization
//! - `entries`: Entry CRUD operations
//! - `settings`: Singleton settings row
//!
//! # Example
//!
//! ```no_run
//! use daybook::db::Database;
//! use std::path::Path;
//!
//! let db = Database::open(Path::new("/tmp/daybook/journal.db"))?;
//! db.initialize_schema()?;
//! let conn = db.connect()?;
//! let entries = daybook::db::entries::get_all_entries(&conn)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod entries;
pub mod schema;
pub mod settings;

use crate::errors::{AppResult, DatabaseError};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Handle to the journal database file.
///
/// Cloning is cheap; clones point at the same file.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Opens or creates the SQLite database at `db_path`.
    ///
    /// Missing parent directories are created. A connection is opened once to make
    /// sure the file is usable, then closed again.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The file exists but is not a SQLite database
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let db = Database {
            path: db_path.to_path_buf(),
        };

        let conn = db.connect()?;
        conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(DatabaseError::Sqlite)?;
        drop(conn);

        info!("Database opened successfully");
        Ok(db)
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh connection for a single operation.
    ///
    /// # Errors
    ///
    /// Returns an error if SQLite cannot open the file.
    pub fn connect(&self) -> AppResult<Connection> {
        Connection::open(&self.path).map_err(|e| DatabaseError::Sqlite(e).into())
    }

    /// Initializes the database schema.
    ///
    /// Creates all necessary tables and indexes if they don't exist.
    /// This is idempotent and safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails.
    pub fn initialize_schema(&self) -> AppResult<()> {
        let conn = self.connect()?;
        schema::create_tables(&conn)?;
        info!("Database schema initialized");
        Ok(())
    }
}
