//! Static Helvetica metric table and the report page geometry.
//!
//! Widths come from the standard Helvetica AFM, in 1/1000 em, covering the two
//! printable Latin-1 ranges the document encoding can carry: 0x20..=0x7E and
//! 0xA0..=0xFF. Anything else has already been dropped by the transcoder by the
//! time text is measured; it falls back to `MISSING_WIDTH`.

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Advance width used for characters outside the table.
pub const MISSING_WIDTH: u16 = 556;

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Geometry of a report page, in points.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    /// Left, right and top margin.
    pub margin_pt: f32,
    /// Body text breaks onto a new page when the next line would cross this margin.
    pub bottom_margin_pt: f32,
    pub font_size_pt: f32,
    pub line_height_pt: f32,
    /// Horizontal padding inside the text cell on each side.
    pub cell_padding_pt: f32,
}

impl PageConfig {
    /// Width available to a line of body text.
    pub fn text_width_pt(&self) -> f32 {
        self.page_width_pt - 2.0 * self.margin_pt - 2.0 * self.cell_padding_pt
    }

    /// Y offset (from the page top) past which no line may extend.
    pub fn break_at_pt(&self) -> f32 {
        self.page_height_pt - self.bottom_margin_pt
    }
}

/// A4 portrait, 10mm margins, 20mm bottom break, Helvetica 12pt on 10mm lines.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width_pt: 210.0 * PT_PER_MM,
        page_height_pt: 297.0 * PT_PER_MM,
        margin_pt: 10.0 * PT_PER_MM,
        bottom_margin_pt: 20.0 * PT_PER_MM,
        font_size_pt: 12.0,
        line_height_pt: 10.0 * PT_PER_MM,
        cell_padding_pt: 1.0 * PT_PER_MM,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helvetica widths
// ────────────────────────────────────────────────────────────────────────────

/// `ASCII_WIDTHS[i]` = width of `(i + 0x20) as char`, through 0x7E (~).
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, // sp ! " # $ % & '
    333, 333, 389, 584, 278, 333, 278, 278, // ( ) * + , - . /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    278, 278, 584, 584, 584, 556, 1015, // : ; < = > ? @
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N-Z
    278, 278, 278, 469, 556, 333, // [ \ ] ^ _ `
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a-m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n-z
    334, 260, 334, 584, // { | } ~
];

/// `LATIN1_WIDTHS[i]` = width of `(i + 0xA0) as char`, through 0xFF (ÿ).
const LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // A0-AF
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // B0-BF
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // C0-CF
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // D0-DF
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // E0-EF
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // F0-FF
];

/// Advance width of `c` in 1/1000 em.
pub fn char_width(c: char) -> u16 {
    let code = c as usize;
    match code {
        0x20..=0x7E => ASCII_WIDTHS[code - 0x20],
        0xA0..=0xFF => LATIN1_WIDTHS[code - 0xA0],
        _ => MISSING_WIDTH,
    }
}

/// Rendered width of `s` in points at `font_size_pt`.
pub fn measure_str(s: &str, font_size_pt: f32) -> f32 {
    let units: u32 = s.chars().map(|c| u32::from(char_width(c))).sum();
    units as f32 * font_size_pt / 1000.0
}

/// Widths for codes `first..=last`, as written into the PDF font dictionary.
/// Codes the encoding does not carry get 0.
pub fn widths_array(first: u8, last: u8) -> Vec<u16> {
    (first..=last)
        .map(|code| match code {
            0x20..=0x7E | 0xA0..=0xFF => char_width(char::from(code)),
            _ => 0,
        })
        .collect()
}
