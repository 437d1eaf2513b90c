//! Constants used throughout the application.
//!
//! Grouped by concern so defaults, formats and names live in one place.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "daybook";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A personal journal with mood tracking and export";

// Logging
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "daybook";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

// Configuration Keys & Environment Variables
/// Environment variable for the data directory holding the database.
pub const ENV_VAR_DAYBOOK_DIR: &str = "DAYBOOK_DIR";
/// Environment variable for the directory PDF exports are written to.
pub const ENV_VAR_DAYBOOK_EXPORT_DIR: &str = "DAYBOOK_EXPORT_DIR";
/// Environment variable selecting the log output format.
pub const ENV_VAR_DAYBOOK_LOG_FORMAT: &str = "DAYBOOK_LOG_FORMAT";
/// Standard log filter variable.
pub const ENV_VAR_RUST_LOG: &str = "RUST_LOG";
/// Default data directory, expanded with `shellexpand`.
pub const DEFAULT_DATA_DIR: &str = "~/.local/share/daybook";
/// File name of the SQLite database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "journal.db";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Entry & Settings Defaults
/// Primary mood assigned to entries that do not specify one.
pub const DEFAULT_PRIMARY_MOOD: &str = "Neutral";
/// Theme stored in a freshly created settings row.
pub const DEFAULT_THEME: &str = "Light";
/// Fixed primary key of the singleton settings row.
pub const SETTINGS_ROW_ID: i64 = 1;
/// Separator used when persisting list fields as text.
pub const LIST_FIELD_SEPARATOR: char = ',';

// Date/Time Formats
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Storage format for entry timestamps.
pub const TIMESTAMP_FORMAT_DB: &str = "%Y-%m-%d %H:%M:%S";
/// Long date format used in PDF headers ("January 05, 2024").
pub const DATE_FORMAT_LONG: &str = "%B %d, %Y";
/// Timestamp suffix of default bulk export file names.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// Export
/// Prefix of exported PDF file names.
pub const PDF_FILE_PREFIX: &str = "Journal_";
/// Prefix of default bulk export file names.
pub const PDF_BULK_FILE_PREFIX: &str = "Journal_Export_";
/// Extension of exported PDF files.
pub const PDF_FILE_EXTENSION: &str = ".pdf";
/// Header text of a bulk PDF export.
pub const PDF_BULK_HEADER: &str = "My Journal";
/// Title shown for entries without one.
pub const UNTITLED_PLACEHOLDER: &str = "Untitled";
/// Body shown for entries without content.
pub const NO_CONTENT_PLACEHOLDER: &str = "No content";
/// Mood shown when the primary mood is empty.
pub const NO_MOOD_PLACEHOLDER: &str = "Not specified";
