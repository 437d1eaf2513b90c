//! Singleton settings row.
//!
//! The row always lives under `SETTINGS_ROW_ID`; the schema rejects any other key,
//! so writes are plain upserts on that key.

use crate::constants::SETTINGS_ROW_ID;
use crate::errors::{AppResult, DatabaseError};
use crate::models::Settings;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

/// Returns the settings row, creating it with defaults on first use.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn get_settings(conn: &Connection) -> AppResult<Settings> {
    debug!("Loading settings");

    let existing = conn
        .query_row(
            "SELECT theme, is_password_enabled, password_hash FROM settings WHERE id = ?1",
            params![SETTINGS_ROW_ID],
            |row| {
                Ok(Settings {
                    theme: row.get(0)?,
                    is_password_enabled: row.get(1)?,
                    password_hash: row.get(2)?,
                })
            },
        )
        .optional()
        .map_err(DatabaseError::Sqlite)?;

    match existing {
        Some(settings) => Ok(settings),
        None => {
            let defaults = Settings::default();
            update_settings(conn, &defaults)?;
            info!("Created default settings");
            Ok(defaults)
        }
    }
}

/// Writes the whole settings row, inserting it if it does not exist yet.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn update_settings(conn: &Connection, settings: &Settings) -> AppResult<()> {
    debug!("Saving settings (theme {})", settings.theme);

    conn.execute(
        r#"
        INSERT INTO settings (id, theme, is_password_enabled, password_hash)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(id) DO UPDATE SET
            theme = excluded.theme,
            is_password_enabled = excluded.is_password_enabled,
            password_hash = excluded.password_hash
        "#,
        params![
            SETTINGS_ROW_ID,
            settings.theme,
            settings.is_password_enabled,
            settings.password_hash,
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    Ok(())
}
