//! PDF rendering and file output.
//!
//! Pages come from `layout`; this module only draws them with `printpdf` using
//! the three built-in Helvetica faces and writes the result to the export
//! directory. Rendering is CPU-bound, so it runs on the blocking thread pool.

use crate::constants::{
    DATE_FORMAT_COMPACT, EXPORT_TIMESTAMP_FORMAT, PDF_BULK_FILE_PREFIX, PDF_FILE_EXTENSION,
    PDF_FILE_PREFIX,
};
use crate::errors::{AppError, AppResult, ExportError};
use crate::export::document::{self, Color, Document, FontStyle};
use crate::export::layout::{layout, Element, Page, PageGeometry};
use crate::export::write_atomically;
use crate::models::Entry;
use chrono::Local;
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes entries as PDF files into a fixed output directory.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    output_dir: PathBuf,
    geometry: PageGeometry,
}

impl PdfExporter {
    /// Creates an exporter writing A4 pages into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        PdfExporter {
            output_dir: output_dir.into(),
            geometry: PageGeometry::a4(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File name used for a single-entry export: `Journal_<YYYYMMDD>.pdf`.
    pub fn single_file_name(entry: &Entry) -> String {
        format!(
            "{}{}{}",
            PDF_FILE_PREFIX,
            entry.created_at.format(DATE_FORMAT_COMPACT),
            PDF_FILE_EXTENSION
        )
    }

    /// Default file name for a bulk export, stamped with the local time.
    pub fn bulk_file_name() -> String {
        format!(
            "{}{}{}",
            PDF_BULK_FILE_PREFIX,
            Local::now().format(EXPORT_TIMESTAMP_FORMAT),
            PDF_FILE_EXTENSION
        )
    }

    /// Exports one entry and returns the path of the written file.
    ///
    /// An existing file of the same name is replaced.
    pub async fn export_single(&self, entry: &Entry) -> AppResult<PathBuf> {
        let path = self.output_dir.join(Self::single_file_name(entry));
        debug!("Exporting entry {} to {:?}", entry.id, path);
        self.render_to(document::single_entry(entry), path).await
    }

    /// Exports all `entries` into one document and returns its path.
    ///
    /// `file_name` defaults to [`PdfExporter::bulk_file_name`]. An empty slice
    /// still yields a one-page document with only the header and footer.
    pub async fn export_multiple(
        &self,
        entries: &[Entry],
        file_name: Option<&str>,
    ) -> AppResult<PathBuf> {
        let name = match file_name {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => Self::bulk_file_name(),
        };
        let path = self.output_dir.join(name);
        debug!("Exporting {} entries to {:?}", entries.len(), path);
        self.render_to(document::journal(entries), path).await
    }

    async fn render_to(&self, document: Document, path: PathBuf) -> AppResult<PathBuf> {
        let geometry = self.geometry;
        let written = tokio::task::spawn_blocking(move || -> AppResult<PathBuf> {
            let pages = layout(&document, &geometry);
            let bytes = render_pdf(&pages, &geometry, &document.title)?;
            write_atomically(&path, &bytes)?;
            Ok(path)
        })
        .await
        .map_err(ExportError::Task)??;

        info!("PDF exported to {:?}", written);
        Ok(written)
    }
}

/// Replaces characters the built-in fonts cannot encode with `?`.
///
/// Printable ASCII and the Latin-1 supplement pass through.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| match c as u32 {
            32..=126 | 160..=255 => c,
            _ => '?',
        })
        .collect()
}

fn pt_to_mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

fn pdf_color(color: Color) -> printpdf::Color {
    printpdf::Color::Rgb(Rgb::new(color.r, color.g, color.b, None))
}

fn render_error(e: impl std::fmt::Display) -> AppError {
    ExportError::Render(e.to_string()).into()
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }
}

fn draw(layer: &PdfLayerReference, elements: &[Element], fonts: &Fonts) {
    for element in elements {
        match element {
            Element::Text(run) => {
                layer.set_fill_color(pdf_color(run.color));
                layer.use_text(
                    sanitize(&run.text),
                    run.font_size,
                    pt_to_mm(run.x),
                    pt_to_mm(run.y),
                    fonts.get(run.style),
                );
            }
            Element::Rule { x1, x2, y, color } => {
                layer.set_outline_color(pdf_color(*color));
                layer.set_outline_thickness(1.0);
                layer.add_line(Line {
                    points: vec![
                        (Point::new(pt_to_mm(*x1), pt_to_mm(*y)), false),
                        (Point::new(pt_to_mm(*x2), pt_to_mm(*y)), false),
                    ],
                    is_closed: false,
                });
            }
        }
    }
}

/// Draws laid-out pages into an in-memory PDF.
///
/// # Errors
///
/// Returns `ExportError::Render` if a font cannot be registered or the
/// document cannot be serialized.
pub fn render_pdf(pages: &[Page], geometry: &PageGeometry, title: &str) -> AppResult<Vec<u8>> {
    let width = pt_to_mm(geometry.width);
    let height = pt_to_mm(geometry.height);
    let (doc, first_page, first_layer) =
        PdfDocument::new(sanitize(title), width, height, "Layer 1");

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(render_error)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(render_error)?,
        italic: doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(render_error)?,
    };

    for (idx, page) in pages.iter().enumerate() {
        let layer = if idx == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) = doc.add_page(width, height, "Layer 1");
            doc.get_page(page_idx).get_layer(layer_idx)
        };
        draw(&layer, &page.elements, &fonts);
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer).map_err(render_error)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))?;

    debug!("Rendered {} pages ({} bytes)", pages.len(), bytes.len());
    Ok(bytes)
}
