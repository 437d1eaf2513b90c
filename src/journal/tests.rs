use crate::journal::JournalService;
use crate::models::{Entry, Settings};
use chrono::NaiveDate;
use tempfile::TempDir;

fn open_service() -> (TempDir, JournalService) {
    let temp_dir = TempDir::new().unwrap();
    let service = JournalService::open(&temp_dir.path().join("journal.db")).unwrap();
    (temp_dir, service)
}

fn entry_on(day: &str, title: &str) -> Entry {
    let created_at = NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let mut entry = Entry::new(created_at);
    entry.title = title.to_string();
    entry
}

#[test]
fn test_open_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("journal.db");

    let first = JournalService::open(&db_path).unwrap();
    first.save_entry(&entry_on("2024-01-01", "kept")).unwrap();

    let second = JournalService::open(&db_path).unwrap();
    second.initialize().unwrap();

    assert_eq!(second.get_all_entries().unwrap().len(), 1);
}

#[test]
fn test_save_and_reload_by_date() {
    let (_dir, service) = open_service();
    let mut entry = entry_on("2024-01-15", "Trip");
    entry.tags = vec!["a".to_string(), "b".to_string()];

    let id = service.save_entry(&entry).unwrap();

    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let loaded = service.get_entry_by_date(date).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.tags, vec!["a", "b"]);
}

#[test]
fn test_same_day_entries_are_kept_separately() {
    let (_dir, service) = open_service();
    let first = service.save_entry(&entry_on("2024-01-15", "one")).unwrap();
    service.save_entry(&entry_on("2024-01-15", "two")).unwrap();

    assert_eq!(service.get_all_entries().unwrap().len(), 2);

    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    assert_eq!(service.get_entry_by_date(date).unwrap().unwrap().id, first);
}

#[test]
fn test_filters_read_current_state() {
    let (_dir, service) = open_service();
    service.save_entry(&entry_on("2024-01-01", "Alpha")).unwrap();
    assert_eq!(service.filter_by_text("alpha").unwrap().len(), 1);

    service.save_entry(&entry_on("2024-01-02", "alphabet")).unwrap();
    assert_eq!(service.filter_by_text("ALPHA").unwrap().len(), 2);
    assert_eq!(service.filter_by_text("").unwrap().len(), 2);
    assert!(service.filter_by_text("zz-no-match").unwrap().is_empty());
}

#[test]
fn test_date_range_through_service() {
    let (_dir, service) = open_service();
    service.save_entry(&entry_on("2024-01-01", "first")).unwrap();
    service.save_entry(&entry_on("2024-01-15", "second")).unwrap();
    service.save_entry(&entry_on("2024-02-01", "third")).unwrap();

    let january = service
        .filter_by_date_range(
            NaiveDate::from_ymd_opt(2024, 1, 1),
            NaiveDate::from_ymd_opt(2024, 1, 31),
        )
        .unwrap();

    let titles: Vec<&str> = january.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["second", "first"]);
}

#[test]
fn test_markdown_export_through_service() {
    let (_dir, service) = open_service();
    let mut entry = entry_on("2024-01-01", "T");
    entry.primary_mood = "Happy".to_string();
    entry.content = "hi".to_string();
    service.save_entry(&entry).unwrap();

    let markdown = service.export_to_markdown().unwrap();

    assert!(markdown.lines().any(|line| line == "# T"));
    assert!(markdown.lines().any(|line| line == "*Mood:* Happy"));
    assert!(markdown.lines().any(|line| line == "hi"));
    assert!(!markdown.contains("Secondary:"));
}

#[test]
fn test_write_markdown_creates_file() {
    let (dir, service) = open_service();
    service.save_entry(&entry_on("2024-01-01", "On disk")).unwrap();

    let path = dir.path().join("export.md");
    service.write_markdown(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# On disk\n"));
}

#[test]
fn test_settings_through_service() {
    let (_dir, service) = open_service();
    assert_eq!(service.get_settings().unwrap(), Settings::default());

    let dark = Settings {
        theme: "Dark".to_string(),
        ..Settings::default()
    };
    service.update_settings(&dark).unwrap();

    assert_eq!(service.get_settings().unwrap(), dark);
}

#[test]
fn test_delete_through_service() {
    let (_dir, service) = open_service();
    let id = service.save_entry(&entry_on("2024-01-01", "gone")).unwrap();

    service.delete_entry(id).unwrap();
    service.delete_entry(id).unwrap();

    assert!(service.get_entry_by_id(id).unwrap().is_none());
}
