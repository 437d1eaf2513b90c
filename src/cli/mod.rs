use crate::constants::{APP_DESCRIPTION, APP_NAME, DATE_FORMAT_COMPACT, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// A personal journal with mood tracking and export
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Print debug logging (overridden by RUST_LOG)
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[clap(long, global = true, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Create the database and its tables
    Init,

    /// Write a new entry
    Add {
        #[clap(short = 't', long, default_value = "")]
        title: String,

        /// Entry text; read from stdin when omitted
        #[clap(short = 'c', long)]
        content: Option<String>,

        /// Primary mood
        #[clap(short = 'm', long)]
        mood: Option<String>,

        /// Secondary moods, comma separated
        #[clap(long, value_delimiter = ',')]
        secondary: Vec<String>,

        /// Tags, comma separated
        #[clap(long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Date of the entry (YYYY-MM-DD or YYYYMMDD), defaults to today
        #[clap(short = 'd', long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// Change an existing entry; fields not given are kept
    Edit {
        id: i64,

        #[clap(short = 't', long)]
        title: Option<String>,

        #[clap(short = 'c', long)]
        content: Option<String>,

        #[clap(short = 'm', long)]
        mood: Option<String>,

        #[clap(long, value_delimiter = ',')]
        secondary: Option<Vec<String>>,

        #[clap(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },

    /// Remove an entry
    Delete { id: i64 },

    /// List all entries, newest first
    List {
        #[clap(long)]
        json: bool,
    },

    /// Show the entry written on a date
    Show {
        #[clap(value_parser = parse_date)]
        date: NaiveDate,
    },

    /// Find entries whose title, content or tags contain a term
    Search {
        term: String,

        #[clap(long)]
        json: bool,
    },

    /// List entries between two dates, both inclusive
    Range {
        #[clap(long, value_parser = parse_date)]
        from: Option<NaiveDate>,

        #[clap(long, value_parser = parse_date)]
        to: Option<NaiveDate>,

        #[clap(long)]
        json: bool,
    },

    /// Export entries to Markdown or PDF
    #[clap(subcommand)]
    Export(ExportCommand),

    /// Show or change application settings
    #[clap(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ExportCommand {
    /// Write every entry as Markdown to a file or stdout
    Markdown {
        #[clap(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Write one entry or the whole journal as a PDF
    Pdf {
        /// Export the entry written on this date
        #[clap(short = 'd', long, value_parser = parse_date, conflicts_with = "all", required_unless_present = "all")]
        date: Option<NaiveDate>,

        /// Export every entry into one document
        #[clap(long)]
        all: bool,

        /// File name for a full export
        #[clap(long, requires = "all")]
        file_name: Option<String>,
    },
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum SettingsCommand {
    Show,

    Set {
        #[clap(long)]
        theme: Option<String>,

        #[clap(long)]
        password_enabled: Option<bool>,
    },
}

/// Parses a date in `YYYY-MM-DD` or `YYYYMMDD` form.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::from_str(date_str).or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_add_with_lists() {
        let args = parse(&[
            "daybook", "add", "--title", "Walk", "--content", "Sunny", "--mood", "Happy",
            "--secondary", "Calm,Tired", "--tags", "outdoors,dog",
        ]);

        assert_eq!(
            args.command,
            Commands::Add {
                title: "Walk".to_string(),
                content: Some("Sunny".to_string()),
                mood: Some("Happy".to_string()),
                secondary: vec!["Calm".to_string(), "Tired".to_string()],
                tags: vec!["outdoors".to_string(), "dog".to_string()],
                date: None,
            }
        );
        assert!(!args.verbose);
        assert!(args.log_format.is_none());
    }

    #[test]
    fn test_add_defaults() {
        let args = parse(&["daybook", "add"]);
        match args.command {
            Commands::Add {
                title,
                content,
                mood,
                secondary,
                tags,
                date,
            } => {
                assert_eq!(title, "");
                assert!(content.is_none());
                assert!(mood.is_none());
                assert!(secondary.is_empty());
                assert!(tags.is_empty());
                assert!(date.is_none());
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_keeps_unset_fields_none() {
        let args = parse(&["daybook", "edit", "7", "--tags", "a,b"]);
        assert_eq!(
            args.command,
            Commands::Edit {
                id: 7,
                title: None,
                content: None,
                mood: None,
                secondary: None,
                tags: Some(vec!["a".to_string(), "b".to_string()]),
            }
        );
    }

    #[test]
    fn test_show_accepts_both_date_formats() {
        let iso = parse(&["daybook", "show", "2023-01-15"]);
        let compact = parse(&["daybook", "show", "20230115"]);
        assert_eq!(iso.command, compact.command);
    }

    #[test]
    fn test_invalid_date_rejected() {
        assert!(CliArgs::try_parse_from(["daybook", "show", "invalid-date"]).is_err());
    }

    #[test]
    fn test_range_bounds_optional() {
        let args = parse(&["daybook", "range", "--from", "2024-01-01"]);
        match args.command {
            Commands::Range { from, to, json } => {
                assert_eq!(from, NaiveDate::from_ymd_opt(2024, 1, 1));
                assert!(to.is_none());
                assert!(!json);
            }
            other => panic!("Expected Range, got {:?}", other),
        }
    }

    #[test]
    fn test_export_pdf_requires_date_or_all() {
        assert!(CliArgs::try_parse_from(["daybook", "export", "pdf"]).is_err());
        assert!(CliArgs::try_parse_from([
            "daybook", "export", "pdf", "--all", "--date", "2024-01-01"
        ])
        .is_err());
        assert!(CliArgs::try_parse_from([
            "daybook", "export", "pdf", "--date", "2024-01-01", "--file-name", "x.pdf"
        ])
        .is_err());

        let args = parse(&["daybook", "export", "pdf", "--all", "--file-name", "all.pdf"]);
        assert_eq!(
            args.command,
            Commands::Export(ExportCommand::Pdf {
                date: None,
                all: true,
                file_name: Some("all.pdf".to_string()),
            })
        );
    }

    #[test]
    fn test_settings_set() {
        let args = parse(&[
            "daybook", "settings", "set", "--theme", "Dark", "--password-enabled", "true",
        ]);
        assert_eq!(
            args.command,
            Commands::Settings(SettingsCommand::Set {
                theme: Some("Dark".to_string()),
                password_enabled: Some(true),
            })
        );
    }

    #[test]
    fn test_global_flags() {
        let args = parse(&["daybook", "list", "--json", "-v", "--log-format", "json"]);
        assert!(args.verbose);
        assert_eq!(args.log_format.as_deref(), Some("json"));
        assert_eq!(args.command, Commands::List { json: true });

        assert!(CliArgs::try_parse_from(["daybook", "list", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn test_parse_date() {
        let parsed = parse_date("2023-01-15").unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2023, 1, 15));

        let parsed = parse_date("20230115").unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2023, 1, 15));

        assert!(parse_date("2023-02-30").is_err());
        assert!(parse_date("").is_err());
    }
}
