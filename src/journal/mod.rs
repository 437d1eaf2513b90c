//! Journal service: the single entry point the rest of the application uses.
//!
//! `JournalService` wraps a [`Database`] handle. Each call opens a connection,
//! runs one storage operation and closes it again; filtering and Markdown export
//! work on a fresh `get_all_entries` result every time. Errors from storage are
//! passed through untouched.

pub mod filter;

#[cfg(test)]
mod tests;

use crate::db::{self, Database};
use crate::errors::AppResult;
use crate::export::markdown;
use crate::models::{Entry, Settings};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, info};

/// Service for reading, writing, searching and exporting journal entries.
///
/// # Examples
///
/// ```no_run
/// use daybook::journal::JournalService;
/// use daybook::models::Entry;
/// use std::path::Path;
///
/// let journal = JournalService::open(Path::new("/tmp/daybook/journal.db"))?;
///
/// let mut entry = Entry::default();
/// entry.title = "Morning pages".to_string();
/// entry.tags = vec!["writing".to_string()];
/// journal.save_entry(&entry)?;
///
/// let hits = journal.filter_by_text("morning")?;
/// assert!(!hits.is_empty());
/// # Ok::<(), daybook::AppError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JournalService {
    db: Database,
}

impl JournalService {
    /// Wraps an already opened database. The schema is not touched.
    pub fn new(db: Database) -> Self {
        JournalService { db }
    }

    /// Opens the database at `db_path` and makes sure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open(db_path: &Path) -> AppResult<Self> {
        let service = JournalService::new(Database::open(db_path)?);
        service.initialize()?;
        Ok(service)
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Creates the tables if they are missing. Safe to call on every startup.
    pub fn initialize(&self) -> AppResult<()> {
        self.db.initialize_schema()
    }

    /// All entries, newest first.
    pub fn get_all_entries(&self) -> AppResult<Vec<Entry>> {
        let conn = self.db.connect()?;
        db::entries::get_all_entries(&conn)
    }

    /// The first entry written on `date`, if any.
    pub fn get_entry_by_date(&self, date: NaiveDate) -> AppResult<Option<Entry>> {
        let conn = self.db.connect()?;
        db::entries::get_entry_by_date(&conn, date)
    }

    /// The entry with `id`, if any.
    pub fn get_entry_by_id(&self, id: i64) -> AppResult<Option<Entry>> {
        let conn = self.db.connect()?;
        db::entries::get_entry_by_id(&conn, id)
    }

    /// Inserts a new entry (`id == 0`) or updates an existing one, returning its id.
    pub fn save_entry(&self, entry: &Entry) -> AppResult<i64> {
        let conn = self.db.connect()?;
        let id = db::entries::save_entry(&conn, entry)?;
        info!(entry_id = id, "Entry saved");
        Ok(id)
    }

    /// Removes an entry. Unknown ids are ignored.
    pub fn delete_entry(&self, id: i64) -> AppResult<()> {
        let conn = self.db.connect()?;
        db::entries::delete_entry(&conn, id)?;
        info!(entry_id = id, "Entry deleted");
        Ok(())
    }

    /// Entries whose title, content or tags contain `term`, ignoring case.
    ///
    /// A blank term returns every entry.
    pub fn filter_by_text(&self, term: &str) -> AppResult<Vec<Entry>> {
        let all = self.get_all_entries()?;
        let matched = filter::filter_by_text(all, term);
        debug!("Text filter matched {} entries", matched.len());
        Ok(matched)
    }

    /// Entries dated within the inclusive range; missing bounds are open.
    pub fn filter_by_date_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> AppResult<Vec<Entry>> {
        let all = self.get_all_entries()?;
        let matched = filter::filter_by_date_range(all, start, end);
        debug!(
            "Date filter {:?}..{:?} matched {} entries",
            start,
            end,
            matched.len()
        );
        Ok(matched)
    }

    /// Renders every entry as Markdown, newest first.
    pub fn export_to_markdown(&self) -> AppResult<String> {
        let all = self.get_all_entries()?;
        Ok(markdown::render(&all))
    }

    /// Writes the Markdown export of every entry to `path`.
    ///
    /// The file is written to a temporary sibling first and renamed into place,
    /// so a failed export never leaves a partial file behind.
    pub fn write_markdown(&self, path: &Path) -> AppResult<()> {
        let rendered = self.export_to_markdown()?;
        crate::export::write_atomically(path, rendered.as_bytes())?;
        info!("Markdown export written to {:?}", path);
        Ok(())
    }

    /// Current settings, created with defaults on first access.
    pub fn get_settings(&self) -> AppResult<Settings> {
        let conn = self.db.connect()?;
        db::settings::get_settings(&conn)
    }

    /// Replaces the stored settings.
    pub fn update_settings(&self, settings: &Settings) -> AppResult<()> {
        let conn = self.db.connect()?;
        db::settings::update_settings(&conn, settings)
    }
}
