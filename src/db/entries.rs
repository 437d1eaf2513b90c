//! Entry CRUD operations.
//!
//! This module provides functions for creating, reading, updating and deleting
//! journal entries. Secondary moods and tags are flattened to comma-joined text on
//! the way in and split back into lists on the way out; nothing outside this module
//! ever sees the joined form.

use crate::constants::{DATE_FORMAT_ISO, LIST_FIELD_SEPARATOR, TIMESTAMP_FORMAT_DB};
use crate::errors::{AppResult, DatabaseError};
use crate::models::Entry;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, warn};

const ENTRY_COLUMNS: &str =
    "id, title, content, primary_mood, secondary_moods, tags, created_at";

/// Joins a list field into its stored text form.
///
/// ```
/// use daybook::db::entries::encode_list;
///
/// assert_eq!(encode_list(&["a".to_string(), "b".to_string()]), "a,b");
/// assert_eq!(encode_list(&[]), "");
/// ```
pub fn encode_list(items: &[String]) -> String {
    let separator = LIST_FIELD_SEPARATOR.to_string();
    items.join(&separator)
}

/// Splits a stored list field back into its items.
///
/// Blank input yields an empty list. Each token is trimmed and tokens that are
/// empty after trimming are dropped.
///
/// ```
/// use daybook::db::entries::decode_list;
///
/// assert_eq!(decode_list(" work , travel,"), vec!["work", "travel"]);
/// assert!(decode_list("   ").is_empty());
/// ```
pub fn decode_list(stored: &str) -> Vec<String> {
    if stored.trim().is_empty() {
        return Vec::new();
    }

    stored
        .split(LIST_FIELD_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT_DB).to_string()
}

fn parse_timestamp(stored: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(stored, TIMESTAMP_FORMAT_DB)
        .or_else(|_| NaiveDateTime::parse_from_str(stored, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| {
            NaiveDate::parse_from_str(stored, DATE_FORMAT_ISO)
                .map(|date| date.and_time(chrono::NaiveTime::MIN))
        })
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    let created_at_raw: String = row.get(6)?;
    let created_at = parse_timestamp(&created_at_raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Entry {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        primary_mood: row.get(3)?,
        secondary_moods: decode_list(&row.get::<_, String>(4)?),
        tags: decode_list(&row.get::<_, String>(5)?),
        created_at,
    })
}

fn map_row_error(e: rusqlite::Error) -> DatabaseError {
    match e {
        rusqlite::Error::FromSqlConversionFailure(idx, _, source) => DatabaseError::InvalidRow {
            column: ENTRY_COLUMNS
                .split(", ")
                .nth(idx)
                .unwrap_or("unknown")
                .to_string(),
            message: source.to_string(),
        },
        other => DatabaseError::Sqlite(other),
    }
}

/// Retrieves every entry, newest first.
///
/// Timestamps are compared through SQLite's `datetime()`, so rows stored as
/// bare dates or with a `T` separator sort alongside the regular format.
/// Entries with identical timestamps are ordered by descending id so the most
/// recently inserted one comes first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored timestamp is unreadable.
pub fn get_all_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    debug!("Loading all entries");

    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM entries ORDER BY datetime(created_at) DESC, id DESC",
            ENTRY_COLUMNS
        ))
        .map_err(DatabaseError::Sqlite)?;

    let entries = stmt
        .query_map([], entry_from_row)
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(map_row_error)?;

    debug!("Loaded {} entries", entries.len());
    Ok(entries)
}

/// Retrieves the first entry written on `date`.
///
/// Several entries may share a day; the earliest inserted one (lowest id) is
/// returned.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if no entry exists for the given date.
pub fn get_entry_by_date(conn: &Connection, date: NaiveDate) -> AppResult<Option<Entry>> {
    debug!("Getting entry for date {}", date);

    conn.query_row(
        &format!(
            "SELECT {} FROM entries WHERE date(created_at) = ?1 ORDER BY id ASC LIMIT 1",
            ENTRY_COLUMNS
        ),
        params![date.format(DATE_FORMAT_ISO).to_string()],
        entry_from_row,
    )
    .optional()
    .map_err(|e| map_row_error(e).into())
}

/// Retrieves an entry by id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if no entry has the given id.
pub fn get_entry_by_id(conn: &Connection, entry_id: i64) -> AppResult<Option<Entry>> {
    debug!("Getting entry with id {}", entry_id);

    conn.query_row(
        &format!("SELECT {} FROM entries WHERE id = ?1", ENTRY_COLUMNS),
        params![entry_id],
        entry_from_row,
    )
    .optional()
    .map_err(|e| map_row_error(e).into())
}

/// Inserts a new entry or updates an existing one.
///
/// An entry with `id == 0` is inserted and the id assigned by SQLite is returned.
/// Any other id updates title, content, moods and tags of that row in place;
/// `created_at` is never changed by an update. Updating an id that has no row
/// changes nothing.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn save_entry(conn: &Connection, entry: &Entry) -> AppResult<i64> {
    let secondary_moods = encode_list(&entry.secondary_moods);
    let tags = encode_list(&entry.tags);

    if !entry.is_persisted() {
        debug!("Inserting entry dated {}", entry.entry_date());

        conn.execute(
            r#"
            INSERT INTO entries (title, content, primary_mood, secondary_moods, tags, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                entry.title,
                entry.content,
                entry.primary_mood,
                secondary_moods,
                tags,
                format_timestamp(&entry.created_at),
            ],
        )
        .map_err(DatabaseError::Sqlite)?;

        let entry_id = conn.last_insert_rowid();
        debug!("Entry inserted with id {}", entry_id);
        return Ok(entry_id);
    }

    debug!("Updating entry {}", entry.id);

    let rows_affected = conn
        .execute(
            r#"
            UPDATE entries SET
                title = ?1,
                content = ?2,
                primary_mood = ?3,
                secondary_moods = ?4,
                tags = ?5
            WHERE id = ?6
            "#,
            params![
                entry.title,
                entry.content,
                entry.primary_mood,
                secondary_moods,
                tags,
                entry.id,
            ],
        )
        .map_err(DatabaseError::Sqlite)?;

    if rows_affected == 0 {
        warn!("No entry with id {} to update", entry.id);
    }

    Ok(entry.id)
}

/// Deletes an entry by id.
///
/// Deleting an id that does not exist is a no-op.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn delete_entry(conn: &Connection, entry_id: i64) -> AppResult<()> {
    debug!("Deleting entry {}", entry_id);

    let rows_affected = conn
        .execute("DELETE FROM entries WHERE id = ?1", params![entry_id])
        .map_err(DatabaseError::Sqlite)?;

    debug!("Deleted {} row(s) for entry {}", rows_affected, entry_id);
    Ok(())
}
