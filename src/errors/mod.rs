//! Error handling utilities for the daybook application.
//!
//! This module provides the central error type `AppError`, which represents every
//! failure the library can surface, along with focused error types for storage and
//! export failures and the convenience alias `AppResult`.
//!
//! Nothing in the service layer catches or translates these errors: an operation
//! either completes or fails, and the caller decides how to report it. Queries that
//! legitimately find nothing return `Ok(None)` rather than an error.

use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur during database operations.
///
/// # Examples
///
/// ```
/// use daybook::errors::DatabaseError;
///
/// let error = DatabaseError::InvalidRow {
///     column: "created_at".to_string(),
///     message: "not a timestamp".to_string(),
/// };
/// assert!(format!("{}", error).contains("created_at"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error.
    #[error("Database error: {0}\n\nIf you're seeing 'file is not a database' or locking errors, this may indicate:\n- Corrupted database file\n- Another daybook process writing at the same time")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored row could not be turned back into a model.
    #[error("Invalid value in column '{column}': {message}")]
    InvalidRow {
        /// Column holding the bad value
        column: String,
        /// What was wrong with it
        message: String,
    },
}

/// Represents specific error cases that can occur while exporting entries.
///
/// # Examples
///
/// ```
/// use daybook::errors::ExportError;
///
/// let error = ExportError::Render("font not loaded".to_string());
/// assert!(format!("{}", error).contains("font not loaded"));
/// ```
#[derive(Debug, Error)]
pub enum ExportError {
    /// The PDF engine rejected the document.
    #[error("Failed to render PDF: {0}")]
    Render(String),

    /// The background rendering task panicked or was cancelled.
    #[error("Export task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The finished file could not be moved into place.
    #[error("Failed to write export to {path}: {source}. Please check that the export directory exists and is writable.")]
    Persist {
        /// Destination path of the export
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Represents all possible errors that can occur in the daybook application.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use daybook::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use daybook::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in journal logic (e.g. invalid date input).
    #[error("Journal logic error: {0}")]
    Journal(String),

    /// Errors related to database operations.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Errors related to Markdown or PDF export.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Database(DatabaseError::Sqlite(err))
    }
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// ```
/// use daybook::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Journal("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
