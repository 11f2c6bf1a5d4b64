//! Font metrics providers.
//!
//! Layout never measures glyphs itself. Every width and height comes from a
//! [`FontMetrics`] implementation, which is expected to be deterministic and
//! free of side effects for a given `(character, font)` pair.
//!
//! [`MonospaceMetrics`] is a self-contained provider that derives sizes from
//! the font's pixel size and the character's Unicode display width. It is
//! what the tests and benchmarks use, and it is a reasonable stand-in for
//! monospace faces or terminal cells.
//!
//! # Examples
//!
//! ```
//! use richtext::{Font, FontMetrics, MonospaceMetrics};
//!
//! let metrics = MonospaceMetrics::default();
//! let font = Font::new("Mono", 20);
//!
//! // Half the pixel size per column, one pixel size per line
//! assert_eq!(metrics.char_size('a', &font).width, 10);
//! assert_eq!(metrics.char_size('漢', &font).width, 20);
//! assert_eq!(metrics.char_size('a', &font).height, 20);
//! assert_eq!(metrics.text_width("abc", &font), 30);
//! ```

mod width;

pub use width::{WidthMethod, display_columns};

use crate::font::Font;
use crate::geometry::Size;

/// Reports glyph sizes in pixels.
pub trait FontMetrics {
    /// Advance width and line height of `ch` rendered in `font`.
    ///
    /// Both extents must be non-negative.
    fn char_size(&self, ch: char, font: &Font) -> Size;

    /// Total advance width of `text` rendered in `font`.
    fn text_width(&self, text: &str, font: &Font) -> i32 {
        text.chars()
            .fold(0i32, |width, ch| width.saturating_add(self.char_size(ch, font).width))
    }
}

/// Monospace metrics derived from font pixel size.
///
/// - width = display columns × round(pixel size × advance ratio)
/// - height = round(pixel size × line height ratio)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMetrics {
    advance_ratio: f32,
    line_height_ratio: f32,
    width_method: WidthMethod,
}

impl MonospaceMetrics {
    /// Create metrics with explicit ratios.
    ///
    /// Negative ratios are clamped to zero.
    #[must_use]
    pub fn new(advance_ratio: f32, line_height_ratio: f32) -> Self {
        Self {
            advance_ratio: advance_ratio.max(0.0),
            line_height_ratio: line_height_ratio.max(0.0),
            width_method: WidthMethod::default(),
        }
    }

    /// One pixel of font size per column and per line.
    ///
    /// With a 1px font every narrow character is a 1x1 cell, which makes
    /// canvas output read like a terminal grid.
    #[must_use]
    pub fn cells() -> Self {
        Self::new(1.0, 1.0)
    }

    #[must_use]
    pub fn with_width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }

    #[must_use]
    pub fn width_method(&self) -> WidthMethod {
        self.width_method
    }

    /// Pixel advance of a single column in `font`.
    #[must_use]
    pub fn column_advance(&self, font: &Font) -> i32 {
        scale(font.pixel_size(), self.advance_ratio)
    }

    /// Line height in `font`.
    #[must_use]
    pub fn line_height(&self, font: &Font) -> i32 {
        scale(font.pixel_size(), self.line_height_ratio)
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(0.5, 1.0)
    }
}

impl FontMetrics for MonospaceMetrics {
    fn char_size(&self, ch: char, font: &Font) -> Size {
        let columns = display_columns(ch, self.width_method) as i32;
        Size::new(
            columns.saturating_mul(self.column_advance(font)),
            self.line_height(font),
        )
    }
}

fn scale(pixel_size: u16, ratio: f32) -> i32 {
    (f32::from(pixel_size) * ratio).round().max(0.0) as i32
}
