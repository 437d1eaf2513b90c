/*!
# Daybook command-line interface

```text
daybook [OPTIONS] <COMMAND>

Commands:
  init      Create the database and its tables
  add       Write a new entry
  edit      Change an existing entry; fields not given are kept
  delete    Remove an entry
  list      List all entries, newest first
  show      Show the entry written on a date
  search    Find entries whose title, content or tags contain a term
  range     List entries between two dates, both inclusive
  export    Export entries to Markdown or PDF
  settings  Show or change application settings

Options:
  -v, --verbose              Print debug logging (overridden by RUST_LOG)
      --log-format <FORMAT>  Log output format [possible values: text, json]
```

Configuration comes from `DAYBOOK_DIR`, `DAYBOOK_EXPORT_DIR`,
`DAYBOOK_LOG_FORMAT` and `RUST_LOG`; see the `config` module.
*/

use chrono::{Local, NaiveDateTime};
use clap::Parser;
use daybook::cli::{CliArgs, Commands, ExportCommand, SettingsCommand};
use daybook::constants::{
    DATE_FORMAT_ISO, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
};
use daybook::errors::{AppError, AppResult};
use daybook::export::markdown;
use daybook::{logging, Config, Entry, JournalService, PdfExporter};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;
use tracing::{debug, error, info, info_span, Instrument};
use uuid::Uuid;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match Config::load().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_format = args
        .log_format
        .clone()
        .unwrap_or_else(|| config.log_format.clone());
    let log_level = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    if let Err(e) = logging::init(&log_format, &log_level) {
        eprintln!("Warning: {}", e);
    }

    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        correlation_id = %Uuid::new_v4()
    );

    match run(args, config).instrument(span).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: CliArgs, config: Config) -> AppResult<()> {
    debug!("CLI arguments: {:?}", args);
    debug!("Configuration: {:?}", config);

    let journal = JournalService::open(&config.db_path())?;

    match args.command {
        Commands::Init => {
            info!("Database ready");
            println!("Initialized journal at {}", config.db_path().display());
        }

        Commands::Add {
            title,
            content,
            mood,
            secondary,
            tags,
            date,
        } => {
            let now = Local::now().naive_local();
            let created_at = date.map_or(now, |day| NaiveDateTime::new(day, now.time()));

            let mut entry = Entry::new(created_at);
            entry.title = title;
            entry.content = match content {
                Some(content) => content,
                None => read_stdin()?,
            };
            if let Some(mood) = mood {
                entry.primary_mood = mood;
            }
            entry.secondary_moods = clean_list(secondary);
            entry.tags = clean_list(tags);

            let id = journal.save_entry(&entry)?;
            println!("Saved entry {}", id);
        }

        Commands::Edit {
            id,
            title,
            content,
            mood,
            secondary,
            tags,
        } => {
            let mut entry = journal
                .get_entry_by_id(id)?
                .ok_or_else(|| AppError::Journal(format!("No entry with id {}", id)))?;

            if let Some(title) = title {
                entry.title = title;
            }
            if let Some(content) = content {
                entry.content = content;
            }
            if let Some(mood) = mood {
                entry.primary_mood = mood;
            }
            if let Some(secondary) = secondary {
                entry.secondary_moods = clean_list(secondary);
            }
            if let Some(tags) = tags {
                entry.tags = clean_list(tags);
            }

            journal.save_entry(&entry)?;
            println!("Updated entry {}", id);
        }

        Commands::Delete { id } => {
            journal.delete_entry(id)?;
            println!("Deleted entry {}", id);
        }

        Commands::List { json } => print_entries(&journal.get_all_entries()?, json)?,

        Commands::Show { date } => match journal.get_entry_by_date(date)? {
            Some(entry) => print!("{}", markdown::render(&[entry])),
            None => println!("No entry for {}", date.format(DATE_FORMAT_ISO)),
        },

        Commands::Search { term, json } => print_entries(&journal.filter_by_text(&term)?, json)?,

        Commands::Range { from, to, json } => {
            print_entries(&journal.filter_by_date_range(from, to)?, json)?
        }

        Commands::Export(ExportCommand::Markdown { output }) => match output {
            Some(path) => {
                journal.write_markdown(&path)?;
                println!("Exported to {}", path.display());
            }
            None => print!("{}", journal.export_to_markdown()?),
        },

        Commands::Export(ExportCommand::Pdf {
            date,
            all,
            file_name,
        }) => {
            fs::create_dir_all(&config.export_dir)?;
            let exporter = PdfExporter::new(&config.export_dir);

            let path = match date {
                Some(date) if !all => {
                    let entry = journal.get_entry_by_date(date)?.ok_or_else(|| {
                        AppError::Journal(format!(
                            "No entry for {}",
                            date.format(DATE_FORMAT_ISO)
                        ))
                    })?;
                    exporter.export_single(&entry).await?
                }
                _ => {
                    let entries = journal.get_all_entries()?;
                    exporter
                        .export_multiple(&entries, file_name.as_deref())
                        .await?
                }
            };
            println!("Exported to {}", path.display());
        }

        Commands::Settings(SettingsCommand::Show) => {
            let settings = journal.get_settings()?;
            println!("theme: {}", settings.theme);
            println!("password enabled: {}", settings.is_password_enabled);
        }

        Commands::Settings(SettingsCommand::Set {
            theme,
            password_enabled,
        }) => {
            let mut settings = journal.get_settings()?;
            if let Some(theme) = theme {
                settings.theme = theme;
            }
            if let Some(enabled) = password_enabled {
                settings.is_password_enabled = enabled;
            }
            journal.update_settings(&settings)?;
            println!("Settings updated");
        }
    }

    Ok(())
}

/// Reads entry content piped on stdin. An interactive terminal yields nothing.
fn read_stdin() -> AppResult<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut content = String::new();
    stdin.lock().read_to_string(&mut content)?;
    Ok(content.trim_end().to_string())
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn print_entries(entries: &[Entry], json: bool) -> AppResult<()> {
    if json {
        let rendered = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::Journal(format!("Failed to serialize entries: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No entries");
    }
    for entry in entries {
        println!(
            "{}\t{}\t{}\t{}",
            entry.id,
            entry.created_at.format(DATE_FORMAT_ISO),
            entry.primary_mood,
            entry.title
        );
    }
    Ok(())
}
