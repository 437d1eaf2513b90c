//! In-memory views over an entry list.
//!
//! Both filters keep the order of their input, which callers load newest first.

use crate::models::Entry;
use chrono::NaiveDate;

/// Keeps entries whose title, content or any tag contains `term`, ignoring case.
///
/// A blank term keeps everything.
///
/// ```
/// use daybook::journal::filter::filter_by_text;
/// use daybook::models::Entry;
///
/// let mut entry = Entry::default();
/// entry.title = "Hiking Day".to_string();
///
/// assert_eq!(filter_by_text(vec![entry.clone()], "hiking").len(), 1);
/// assert!(filter_by_text(vec![entry], "zz-no-match").is_empty());
/// ```
pub fn filter_by_text(entries: Vec<Entry>, term: &str) -> Vec<Entry> {
    if term.trim().is_empty() {
        return entries;
    }

    let needle = term.to_lowercase();
    entries
        .into_iter()
        .filter(|entry| matches_text(entry, &needle))
        .collect()
}

fn matches_text(entry: &Entry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle)
        || entry.content.to_lowercase().contains(needle)
        || entry
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Keeps entries dated within `[start, end]`, comparing calendar days only.
///
/// Either bound may be omitted to leave that side open.
pub fn filter_by_date_range(
    entries: Vec<Entry>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<Entry> {
    if start.is_none() && end.is_none() {
        return entries;
    }

    entries
        .into_iter()
        .filter(|entry| {
            let day = entry.entry_date();
            start.map_or(true, |s| day >= s) && end.map_or(true, |e| day <= e)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(day: &str, title: &str, content: &str, tags: &[&str]) -> Entry {
        let mut entry = Entry::new(date(day).and_hms_opt(21, 45, 0).unwrap());
        entry.title = title.to_string();
        entry.content = content.to_string();
        entry.tags = tags.iter().map(|t| t.to_string()).collect();
        entry
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry("2024-02-01", "February", "Snow again", &["weather"]),
            entry("2024-01-15", "Mid January", "Started a new BOOK", &[]),
            entry("2024-01-01", "New Year", "Resolutions", &["Goals", "family"]),
        ]
    }

    fn titles(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_blank_term_returns_everything_in_order() {
        let result = filter_by_text(sample(), "");
        assert_eq!(titles(&result), vec!["February", "Mid January", "New Year"]);

        let result = filter_by_text(sample(), "   ");
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter_by_text(sample(), "zz-no-match").is_empty());
    }

    #[test]
    fn test_text_match_is_case_insensitive_across_fields() {
        assert_eq!(titles(&filter_by_text(sample(), "book")), vec!["Mid January"]);
        assert_eq!(titles(&filter_by_text(sample(), "JANUARY")), vec!["Mid January"]);
        assert_eq!(titles(&filter_by_text(sample(), "goal")), vec!["New Year"]);
        assert_eq!(
            titles(&filter_by_text(sample(), "a")),
            vec!["February", "Mid January", "New Year"]
        );
    }

    #[test]
    fn test_date_range_inclusive_bounds() {
        let result = filter_by_date_range(
            sample(),
            Some(date("2024-01-01")),
            Some(date("2024-01-31")),
        );
        assert_eq!(titles(&result), vec!["Mid January", "New Year"]);
    }

    #[test]
    fn test_date_range_open_ended() {
        let from_only = filter_by_date_range(sample(), Some(date("2024-01-15")), None);
        assert_eq!(titles(&from_only), vec!["February", "Mid January"]);

        let until_only = filter_by_date_range(sample(), None, Some(date("2024-01-15")));
        assert_eq!(titles(&until_only), vec!["Mid January", "New Year"]);

        assert_eq!(filter_by_date_range(sample(), None, None).len(), 3);
    }

    #[test]
    fn test_date_range_single_day_ignores_time() {
        let result = filter_by_date_range(
            sample(),
            Some(date("2024-02-01")),
            Some(date("2024-02-01")),
        );
        assert_eq!(titles(&result), vec!["February"]);
    }
}
