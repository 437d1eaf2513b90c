//! Static font-metric tables for the PDF built-in Helvetica family.
//!
//! Widths are in thousandths of an em, taken from the Helvetica and
//! Helvetica-Bold AFM files (WinAnsi code points). Each table covers ASCII
//! 0x20..=0x7E; index = (char as usize) - 32. Oblique shares the regular widths.

use crate::export::document::FontStyle;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // {    |    }    ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    333, 333, 584, 584, 584, 611, 975,
    // A-Z
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    333, 278, 333, 584, 556, 333,
    // a-z
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // {    |    }    ~
    389, 280, 389, 584,
];

/// Widths used for characters outside the tables.
const FALLBACK_WIDTH: u16 = 556;
const FALLBACK_WIDTH_BOLD: u16 = 611;

fn char_width(c: char, style: FontStyle) -> u16 {
    let (table, fallback) = match style {
        FontStyle::Bold => (&HELVETICA_BOLD_WIDTHS, FALLBACK_WIDTH_BOLD),
        FontStyle::Regular | FontStyle::Italic => (&HELVETICA_WIDTHS, FALLBACK_WIDTH),
    };
    let code = c as usize;
    if (32..=126).contains(&code) {
        table[code - 32]
    } else {
        fallback
    }
}

/// Rendered width of `text` in points at `font_size`.
pub fn measure(text: &str, style: FontStyle, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, style))).sum();
    units as f32 / 1000.0 * font_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_all_printable_ascii() {
        assert_eq!(HELVETICA_WIDTHS.len(), 126 - 32 + 1);
        assert_eq!(char_width(' ', FontStyle::Regular), 278);
        assert_eq!(char_width('~', FontStyle::Regular), 584);
        assert_eq!(char_width('W', FontStyle::Regular), 944);
        assert_eq!(char_width('i', FontStyle::Regular), 222);
    }

    #[test]
    fn test_bold_table_matches_afm() {
        assert_eq!(HELVETICA_BOLD_WIDTHS.len(), 126 - 32 + 1);
        assert_eq!(char_width('i', FontStyle::Bold), 278);
        assert_eq!(char_width('l', FontStyle::Bold), 278);
        assert_eq!(char_width('t', FontStyle::Bold), 333);
        assert_eq!(char_width('r', FontStyle::Bold), 389);
        assert_eq!(char_width('@', FontStyle::Bold), 975);
        assert_eq!(char_width('z', FontStyle::Bold), 500);
    }

    #[test]
    fn test_measure_bold_label() {
        // W(944) o(611) r(389) d(611) sp(278) C(722) o(611) u(611) n(611) t(333) :(333) sp(278)
        let width = measure("Word Count: ", FontStyle::Bold, 10.0);
        assert!((width - 63.32).abs() < 1e-3);
    }

    #[test]
    fn test_measure_scales_with_font_size() {
        let at_10 = measure("Hello", FontStyle::Regular, 10.0);
        let at_20 = measure("Hello", FontStyle::Regular, 20.0);
        assert!((at_20 - 2.0 * at_10).abs() < 1e-3);
    }

    #[test]
    fn test_measure_known_word() {
        // H(722) e(556) l(222) l(222) o(556) = 2278 units
        let width = measure("Hello", FontStyle::Regular, 10.0);
        assert!((width - 22.78).abs() < 1e-3);
    }

    #[test]
    fn test_bold_is_wider_and_italic_matches_regular() {
        let regular = measure("Journal", FontStyle::Regular, 12.0);
        assert!(measure("Journal", FontStyle::Bold, 12.0) > regular);
        assert!((measure("Journal", FontStyle::Italic, 12.0) - regular).abs() < 1e-6);
    }

    #[test]
    fn test_non_ascii_uses_fallback() {
        let width = measure("é", FontStyle::Regular, 1000.0);
        assert!((width - 556.0).abs() < 1e-3);
        let width = measure("é", FontStyle::Bold, 1000.0);
        assert!((width - 611.0).abs() < 1e-3);
    }
}
