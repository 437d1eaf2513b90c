//! Export of journal entries to Markdown and PDF.
//!
//! # Module Structure
//!
//! - `markdown`: Plain-text Markdown rendering
//! - `document`: Flat description of a PDF document (header, styled blocks, footer)
//! - `metrics`: Static Helvetica width tables used for line wrapping
//! - `layout`: Line wrapping and pagination of a document into pages
//! - `pdf`: Rendering laid-out pages through `printpdf` and writing the file

pub mod document;
pub mod layout;
pub mod markdown;
pub mod metrics;
pub mod pdf;

pub use pdf::PdfExporter;

use crate::errors::{AppResult, ExportError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes `bytes` to `path` through a temporary file in the same directory.
///
/// The destination either receives the complete content or is left untouched.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created or written, or if it
/// cannot be renamed onto `path`.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> AppResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.flush()?;
    temp.persist(path).map_err(|e| ExportError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!("Wrote {} bytes to {:?}", bytes.len(), path);
    Ok(())
}
