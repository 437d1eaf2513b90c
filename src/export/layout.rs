//! Line wrapping and pagination of a [`Document`].
//!
//! Layout is a single top-to-bottom pass. Paragraphs are broken into words,
//! words are packed greedily into lines using the static width tables in
//! `metrics`, and a new page starts whenever the next line or rule would cross
//! into the footer area. Once all pages exist, every page receives the header
//! and a `Page X of Y` footer.
//!
//! All coordinates are PDF points with the origin at the bottom-left corner.

use crate::export::document::{footer_text, Block, Color, Document, FontStyle, Paragraph};
use crate::export::metrics::measure;

/// Points per millimetre.
const PT_PER_MM: f32 = 72.0 / 25.4;

/// Physical page size and margins, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    /// Gap between the header line and the first content line.
    pub header_gap: f32,
    /// Gap between the last content line and the footer line.
    pub footer_gap: f32,
}

impl PageGeometry {
    /// A4 portrait with 2 cm margins.
    pub fn a4() -> Self {
        PageGeometry {
            width: 210.0 * PT_PER_MM,
            height: 297.0 * PT_PER_MM,
            margin: 20.0 * PT_PER_MM,
            header_gap: 10.0 * PT_PER_MM,
            footer_gap: 10.0 * PT_PER_MM,
        }
    }

    /// Usable width between the side margins.
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::a4()
    }
}

/// A positioned piece of single-style text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub style: FontStyle,
    pub font_size: f32,
    pub color: Color,
    /// Left edge of the run.
    pub x: f32,
    /// Baseline.
    pub y: f32,
}

/// Something drawn on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextRun),
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        color: Color,
    },
}

/// A finished page, numbered from 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub number: usize,
    pub elements: Vec<Element>,
}

impl Page {
    /// Text of every run on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|element| match element {
            Element::Text(run) => Some(run.text.as_str()),
            Element::Rule { .. } => None,
        })
    }
}

#[derive(Debug, Clone)]
enum Piece {
    Word {
        text: String,
        style: FontStyle,
        space_before: bool,
    },
    Break,
}

/// Splits spans into words and hard line breaks, remembering where a space
/// separated a word from its predecessor (also across span boundaries).
fn pieces(paragraph: &Paragraph) -> Vec<Piece> {
    let mut out = Vec::new();
    let mut pending_space = false;

    for span in &paragraph.spans {
        for (line_idx, line) in span.text.split('\n').enumerate() {
            if line_idx > 0 {
                out.push(Piece::Break);
                pending_space = false;
            }
            let mut rest = line;
            while !rest.is_empty() {
                let trimmed = rest.trim_start();
                if trimmed.len() < rest.len() {
                    pending_space = true;
                }
                if trimmed.is_empty() {
                    break;
                }
                let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                out.push(Piece::Word {
                    text: trimmed[..end].to_string(),
                    style: span.style,
                    space_before: pending_space,
                });
                pending_space = false;
                rest = &trimmed[end..];
            }
        }
    }
    out
}

/// A line being filled: runs with x offsets relative to the left margin.
#[derive(Debug, Default)]
struct LineBuilder {
    runs: Vec<(String, FontStyle, f32)>,
    width: f32,
}

impl LineBuilder {
    fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    fn push(&mut self, word: &str, style: FontStyle, space: bool, font_size: f32) {
        let space_width = if space && !self.is_empty() {
            measure(" ", style, font_size)
        } else {
            0.0
        };
        let word_width = measure(word, style, font_size);

        match self.runs.last_mut() {
            Some((text, last_style, _)) if *last_style == style => {
                if space_width > 0.0 {
                    text.push(' ');
                }
                text.push_str(word);
            }
            _ => {
                self.runs
                    .push((word.to_string(), style, self.width + space_width));
            }
        }
        self.width += space_width + word_width;
    }

    fn fits(&self, word: &str, style: FontStyle, space: bool, font_size: f32, max: f32) -> bool {
        let space_width = if space && !self.is_empty() {
            measure(" ", style, font_size)
        } else {
            0.0
        };
        self.width + space_width + measure(word, style, font_size) <= max
    }
}

/// Splits a word wider than `max` into chunks that each fit on a line.
fn split_long_word(word: &str, style: FontStyle, font_size: f32, max: f32) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    for c in word.chars() {
        let mut candidate = current.clone();
        candidate.push(c);
        if !current.is_empty() && measure(&candidate, style, font_size) > max {
            chunks.push(std::mem::take(&mut current));
            current.push(c);
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Wraps a paragraph into lines of runs no wider than `max_width`.
fn wrap(paragraph: &Paragraph, max_width: f32) -> Vec<LineBuilder> {
    let size = paragraph.font_size;
    let mut lines = Vec::new();
    let mut line = LineBuilder::default();

    for piece in pieces(paragraph) {
        match piece {
            Piece::Break => lines.push(std::mem::take(&mut line)),
            Piece::Word {
                text,
                style,
                space_before,
            } => {
                if line.fits(&text, style, space_before, size, max_width) {
                    line.push(&text, style, space_before, size);
                    continue;
                }
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                if measure(&text, style, size) <= max_width {
                    line.push(&text, style, false, size);
                } else {
                    let chunks = split_long_word(&text, style, size, max_width);
                    let last = chunks.len().saturating_sub(1);
                    for (idx, chunk) in chunks.into_iter().enumerate() {
                        line.push(&chunk, style, false, size);
                        if idx < last {
                            lines.push(std::mem::take(&mut line));
                        }
                    }
                }
            }
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

struct Cursor<'a> {
    geometry: &'a PageGeometry,
    top: f32,
    bottom: f32,
    y: f32,
    pages: Vec<Vec<Element>>,
}

impl<'a> Cursor<'a> {
    fn new(geometry: &'a PageGeometry, header_height: f32, footer_height: f32) -> Self {
        let top = geometry.height - geometry.margin - header_height - geometry.header_gap;
        let bottom = geometry.margin + footer_height + geometry.footer_gap;
        Cursor {
            geometry,
            top,
            bottom,
            y: top,
            pages: vec![Vec::new()],
        }
    }

    fn at_page_top(&self) -> bool {
        (self.y - self.top).abs() < f32::EPSILON
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
        self.y = self.top;
    }

    /// Reserves `height` points, starting a new page if they do not fit.
    fn reserve(&mut self, height: f32) {
        if self.y - height < self.bottom && !self.at_page_top() {
            self.new_page();
        }
    }

    fn skip(&mut self, gap: f32) {
        if !self.at_page_top() {
            self.y -= gap;
        }
    }

    fn place(&mut self, element: Element) {
        if let Some(page) = self.pages.last_mut() {
            page.push(element);
        }
    }

    fn paragraph(&mut self, paragraph: &Paragraph) {
        self.skip(paragraph.space_before);
        let line_height = paragraph.font_size * paragraph.line_height;

        for line in wrap(paragraph, self.geometry.content_width()) {
            self.reserve(line_height);
            let baseline = self.y - line_height + (line_height - paragraph.font_size) / 2.0
                + paragraph.font_size * 0.2;
            for (text, style, offset) in line.runs {
                self.place(Element::Text(TextRun {
                    text,
                    style,
                    font_size: paragraph.font_size,
                    color: paragraph.color,
                    x: self.geometry.margin + offset,
                    y: baseline,
                }));
            }
            self.y -= line_height;
        }
    }

    fn rule(&mut self, color: Color, space_before: f32, space_after: f32) {
        self.skip(space_before);
        self.reserve(space_after);
        let y = self.y;
        self.place(Element::Rule {
            x1: self.geometry.margin,
            x2: self.geometry.width - self.geometry.margin,
            y,
            color,
        });
        self.y -= space_after;
    }
}

fn header_height(header: &Paragraph) -> f32 {
    header.font_size * header.line_height
}

/// Lays out `document` onto pages of the given geometry.
///
/// Always returns at least one page. Every page carries the header at the top
/// and a centred `Page X of Y` footer at the bottom.
pub fn layout(document: &Document, geometry: &PageGeometry) -> Vec<Page> {
    let footer_height = document.footer_font_size * 1.2;
    let mut cursor = Cursor::new(geometry, header_height(&document.header), footer_height);

    for block in &document.blocks {
        match block {
            Block::Paragraph(paragraph) => cursor.paragraph(paragraph),
            Block::Rule {
                color,
                space_before,
                space_after,
            } => cursor.rule(*color, *space_before, *space_after),
            Block::Spacer(gap) => cursor.skip(*gap),
        }
    }

    let total = cursor.pages.len();
    cursor
        .pages
        .into_iter()
        .enumerate()
        .map(|(idx, body)| {
            let number = idx + 1;
            let mut elements = header_elements(&document.header, geometry);
            elements.extend(body);
            elements.push(footer_element(
                number,
                total,
                document.footer_font_size,
                geometry,
            ));
            Page { number, elements }
        })
        .collect()
}

fn header_elements(header: &Paragraph, geometry: &PageGeometry) -> Vec<Element> {
    let baseline = geometry.height - geometry.margin - header.font_size;
    let mut x = geometry.margin;
    header
        .spans
        .iter()
        .map(|span| {
            let run = TextRun {
                text: span.text.clone(),
                style: span.style,
                font_size: header.font_size,
                color: header.color,
                x,
                y: baseline,
            };
            x += measure(&span.text, span.style, header.font_size);
            Element::Text(run)
        })
        .collect()
}

fn footer_element(number: usize, total: usize, font_size: f32, geometry: &PageGeometry) -> Element {
    let text = footer_text(number, total);
    let width = measure(&text, FontStyle::Regular, font_size);
    Element::Text(TextRun {
        x: (geometry.width - width) / 2.0,
        y: geometry.margin,
        text,
        style: FontStyle::Regular,
        font_size,
        color: Color::BLACK,
    })
}
