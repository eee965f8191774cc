#![forbid(unsafe_code)]

//! Text measurement boundary.
//!
//! The widget never talks to a font engine directly; it measures labels
//! through [`FontMetrics`], a black box returning a [`Size`] per string.
//! Two implementations ship here: [`CellMetrics`] for cell-grid hosts and
//! [`MonospaceMetrics`] for hosts laying out on a fixed-advance pixel grid.
//! Hosts with a real shaping engine implement the trait themselves.

use crate::geometry::Size;
use unicode_display_width::width as unicode_display_width;
use unicode_segmentation::UnicodeSegmentation;

/// Black-box text measurement supplied by the host.
pub trait FontMetrics {
    /// Measure the rendered extent of `text` in layout units.
    fn measure(&self, text: &str) -> Size;
}

/// Terminal-cell measurement: width in display cells, one row of height.
///
/// Labels are single-line; embedded control characters count one cell each,
/// the same policy a terminal renderer applies when it sanitizes them to
/// replacement glyphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellMetrics;

#[inline]
fn ascii_display_width(text: &str) -> usize {
    text.bytes()
        .filter(|&b| matches!(b, b'\t' | b'\n' | b'\r' | 0x20..=0x7E))
        .count()
}

#[inline]
fn is_zero_width_codepoint(c: char) -> bool {
    let u = c as u32;
    matches!(u, 0x0000..=0x001F | 0x007F..=0x009F)
        || matches!(u, 0x0300..=0x036F | 0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF | 0x20D0..=0x20FF)
        || matches!(u, 0xFE20..=0xFE2F)
        || matches!(u, 0xFE00..=0xFE0F | 0xE0100..=0xE01EF)
        || matches!(u, 0x00AD | 0x200B..=0x200F | 0x2060 | 0xFEFF)
        || matches!(u, 0x202A..=0x202E | 0x2066..=0x2069)
}

/// Width of a single grapheme cluster in display cells.
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_ascii() {
        return ascii_display_width(grapheme);
    }
    if grapheme.chars().all(is_zero_width_codepoint) {
        return 0;
    }
    unicode_display_width(grapheme) as usize
}

/// Width of a string in display cells.
///
/// Pure printable ASCII takes the byte-length fast path; everything else
/// goes through grapheme segmentation so combining marks and wide glyphs
/// measure correctly.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() {
        return ascii_display_width(text);
    }
    if !text.chars().any(is_zero_width_codepoint) {
        return unicode_display_width(text) as usize;
    }
    text.graphemes(true).map(grapheme_width).sum()
}

impl FontMetrics for CellMetrics {
    fn measure(&self, text: &str) -> Size {
        let width = display_width(text).min(u16::MAX as usize) as u16;
        Size::new(width, 1)
    }
}

/// Fixed-advance measurement for pixel-grid hosts: every grapheme advances
/// `glyph_width` pixels, every line is `line_height` pixels tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMetrics {
    /// Horizontal advance per grapheme cluster.
    pub glyph_width: u16,
    /// Height of one text row.
    pub line_height: u16,
}

impl MonospaceMetrics {
    /// Create metrics with the given advance and row height.
    #[must_use]
    pub const fn new(glyph_width: u16, line_height: u16) -> Self {
        Self {
            glyph_width,
            line_height,
        }
    }
}

impl FontMetrics for MonospaceMetrics {
    fn measure(&self, text: &str) -> Size {
        let count = text.graphemes(true).count().min(u16::MAX as usize) as u16;
        Size::new(count.saturating_mul(self.glyph_width), self.line_height)
    }
}
