/*!
# Daybook

Daybook is a personal journal: dated entries with a title, free text, a primary
mood, secondary moods and tags, stored in a local SQLite database. Entries can
be searched by text, filtered by date range, and exported to Markdown or PDF.

## Architecture

- `models`: Plain data types (`Entry`, `Settings`)
- `db`: SQLite persistence, one connection per operation
- `journal`: `JournalService`, the single entry point over storage, filtering and Markdown export
- `export`: Markdown rendering and the PDF pipeline (document, layout, rendering)
- `config`: Environment-based configuration
- `logging`: `tracing` subscriber setup
- `cli`: Command-line argument definitions
- `errors`: Error types shared by every module

## Usage Example

```rust,no_run
use daybook::{Config, Entry, JournalService};

fn main() -> daybook::AppResult<()> {
    let config = Config::load()?;
    let journal = JournalService::open(&config.db_path())?;

    let mut entry = Entry::default();
    entry.title = "First day".to_string();
    entry.content = "Started a journal.".to_string();
    journal.save_entry(&entry)?;

    print!("{}", journal.export_to_markdown()?);
    Ok(())
}
```
*/

pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod errors;
pub mod export;
pub mod journal;
pub mod logging;
pub mod models;

pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use export::PdfExporter;
pub use journal::JournalService;
pub use models::{Entry, Settings};
