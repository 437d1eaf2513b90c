//! Flat description of a PDF document.
//!
//! A [`Document`] is a page header, a list of content blocks and a footer
//! template. It carries no positions: `layout` decides line breaks and pages,
//! and only then is the total page count known for the footer.

use crate::constants::{
    DATE_FORMAT_ISO, DATE_FORMAT_LONG, NO_CONTENT_PLACEHOLDER, NO_MOOD_PLACEHOLDER,
    PDF_BULK_HEADER, UNTITLED_PLACEHOLDER,
};
use crate::models::Entry;

/// Font face of a span. All faces are Helvetica variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

/// RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Header blue (#1565C0).
    pub const HEADER_BLUE: Color = Color::rgb(0.082, 0.396, 0.753);
    /// Secondary text grey (#757575).
    pub const GREY_DARK: Color = Color::rgb(0.459, 0.459, 0.459);
    /// Divider grey (#E0E0E0).
    pub const GREY_LIGHT: Color = Color::rgb(0.878, 0.878, 0.878);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b }
    }
}

/// A run of text in a single face.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: FontStyle,
}

impl Span {
    pub fn regular(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            style: FontStyle::Regular,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            style: FontStyle::Bold,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            style: FontStyle::Italic,
        }
    }
}

/// Wrapped text made of one or more spans.
///
/// `line_height` is a multiple of `font_size`; `space_before` is in points.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub spans: Vec<Span>,
    pub font_size: f32,
    pub line_height: f32,
    pub color: Color,
    pub space_before: f32,
}

impl Paragraph {
    pub fn new(spans: Vec<Span>, font_size: f32) -> Self {
        Paragraph {
            spans,
            font_size,
            line_height: 1.2,
            color: Color::BLACK,
            space_before: 0.0,
        }
    }

    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn space_before(mut self, points: f32) -> Self {
        self.space_before = points;
        self
    }

    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// One unit of page content.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    /// Full-width horizontal line.
    Rule {
        color: Color,
        space_before: f32,
        space_after: f32,
    },
    /// Vertical gap in points. Dropped at the top of a page.
    Spacer(f32),
}

/// Everything needed to lay out and render a PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Document metadata title.
    pub title: String,
    /// Repeated at the top of every page.
    pub header: Paragraph,
    pub blocks: Vec<Block>,
    /// Footer font size; the footer text is produced by [`footer_text`].
    pub footer_font_size: f32,
}

/// Footer shown centred at the bottom of each page.
pub fn footer_text(page: usize, total: usize) -> String {
    format!("Page {} of {}", page, total)
}

const BODY_FONT_SIZE: f32 = 11.0;
const BODY_LINE_HEIGHT: f32 = 1.5;
const META_FONT_SIZE: f32 = 12.0;
const TITLE_FONT_SIZE: f32 = 16.0;

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

fn labelled(label: &str, value: impl Into<String>) -> Paragraph {
    Paragraph::new(
        vec![Span::bold(format!("{}: ", label)), Span::regular(value)],
        META_FONT_SIZE,
    )
}

fn body(entry: &Entry) -> Paragraph {
    Paragraph::new(
        vec![Span::regular(or_placeholder(
            &entry.content,
            NO_CONTENT_PLACEHOLDER,
        ))],
        BODY_FONT_SIZE,
    )
    .line_height(BODY_LINE_HEIGHT)
}

fn title(entry: &Entry) -> Paragraph {
    Paragraph::new(
        vec![Span::bold(or_placeholder(&entry.title, UNTITLED_PLACEHOLDER))],
        TITLE_FONT_SIZE,
    )
}

/// Layout of a single-entry export: dated header, title, metadata block,
/// divider, then the body text.
pub fn single_entry(entry: &Entry) -> Document {
    let header_date = entry.created_at.format(DATE_FORMAT_LONG).to_string();
    let header = Paragraph::new(
        vec![Span::bold(format!("Journal Entry - {}", header_date))],
        20.0,
    )
    .color(Color::HEADER_BLUE);

    let mut blocks = vec![Block::Paragraph(title(entry))];

    blocks.push(Block::Paragraph(
        labelled(
            "Date",
            entry.created_at.format(DATE_FORMAT_ISO).to_string(),
        )
        .space_before(10.0),
    ));
    blocks.push(Block::Paragraph(labelled(
        "Mood",
        or_placeholder(&entry.primary_mood, NO_MOOD_PLACEHOLDER),
    )));
    if !entry.secondary_moods.is_empty() {
        blocks.push(Block::Paragraph(labelled(
            "Secondary Moods",
            entry.secondary_moods.join(", "),
        )));
    }
    if !entry.tags.is_empty() {
        blocks.push(Block::Paragraph(labelled("Tags", entry.tags.join(", "))));
    }
    blocks.push(Block::Paragraph(labelled(
        "Word Count",
        entry.word_count().to_string(),
    )));

    blocks.push(Block::Rule {
        color: Color::GREY_LIGHT,
        space_before: 10.0,
        space_after: 10.0,
    });
    blocks.push(Block::Paragraph(body(entry)));

    Document {
        title: or_placeholder(&entry.title, UNTITLED_PLACEHOLDER).to_string(),
        header,
        blocks,
        footer_font_size: META_FONT_SIZE,
    }
}

/// Layout of a bulk export: one "My Journal" document with every entry,
/// newest first, each closed by a divider.
pub fn journal(entries: &[Entry]) -> Document {
    let header = Paragraph::new(vec![Span::bold(PDF_BULK_HEADER)], 24.0).color(Color::HEADER_BLUE);

    let mut ordered: Vec<&Entry> = entries.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut blocks = Vec::new();
    for entry in ordered {
        blocks.push(Block::Paragraph(title(entry)));
        blocks.push(Block::Paragraph(
            Paragraph::new(
                vec![Span::italic(
                    entry.created_at.format(DATE_FORMAT_LONG).to_string(),
                )],
                10.0,
            )
            .color(Color::GREY_DARK),
        ));
        blocks.push(Block::Paragraph(
            labelled(
                "Mood",
                or_placeholder(&entry.primary_mood, NO_MOOD_PLACEHOLDER),
            )
            .space_before(5.0),
        ));
        if !entry.tags.is_empty() {
            blocks.push(Block::Paragraph(labelled("Tags", entry.tags.join(", "))));
        }
        blocks.push(Block::Paragraph(body(entry).space_before(10.0)));
        blocks.push(Block::Rule {
            color: Color::GREY_LIGHT,
            space_before: 15.0,
            space_after: 0.0,
        });
        blocks.push(Block::Spacer(20.0));
    }

    Document {
        title: PDF_BULK_HEADER.to_string(),
        header,
        blocks,
        footer_font_size: META_FONT_SIZE,
    }
}
