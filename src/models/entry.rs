//! The journal entry record.

use crate::constants::DEFAULT_PRIMARY_MOOD;
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A single journal entry.
///
/// `id == 0` marks an entry that has not been persisted yet; the database assigns
/// the real id on insert. List fields are real collections here and are only
/// flattened to text at the storage boundary.
///
/// # Examples
///
/// ```
/// use daybook::models::Entry;
///
/// let mut entry = Entry::default();
/// entry.title = "First day".to_string();
/// entry.content = "Slept well,  went for a run.".to_string();
///
/// assert!(!entry.is_persisted());
/// assert_eq!(entry.primary_mood, "Neutral");
/// assert_eq!(entry.word_count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub created_at: NaiveDateTime,
    pub title: String,
    pub content: String,
    pub primary_mood: String,
    pub secondary_moods: Vec<String>,
    pub tags: Vec<String>,
}

impl Default for Entry {
    fn default() -> Self {
        Entry::new(Local::now().naive_local())
    }
}

impl Entry {
    /// Creates an unsaved, empty entry stamped with `created_at`.
    ///
    /// The timestamp is truncated to whole seconds, the precision it is stored at.
    pub fn new(created_at: NaiveDateTime) -> Self {
        Entry {
            id: 0,
            created_at: created_at.with_nanosecond(0).unwrap_or(created_at),
            title: String::new(),
            content: String::new(),
            primary_mood: DEFAULT_PRIMARY_MOOD.to_string(),
            secondary_moods: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Calendar day the entry belongs to.
    pub fn entry_date(&self) -> NaiveDate {
        self.created_at.date()
    }

    /// Whether the entry has been assigned an id by the database.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Number of whitespace-separated, non-empty tokens in the content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}
