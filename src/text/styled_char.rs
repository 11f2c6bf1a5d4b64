//! A single character with its own color and font.

use crate::color::Rgba;
use crate::font::Font;
use crate::geometry::Size;
use crate::metrics::FontMetrics;

/// One character plus color, font, and its measured pixel size.
///
/// The size is computed eagerly whenever the character or the font changes,
/// so [`width`](Self::width) and [`height`](Self::height) always describe the
/// current `(char, font)` pair. Every mutator that can invalidate the size
/// takes the metrics provider to recompute it.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledChar {
    ch: char,
    color: Rgba,
    font: Font,
    width: i32,
    height: i32,
}

impl StyledChar {
    /// Create a styled character, measuring it with `metrics`.
    #[must_use]
    pub fn new(ch: char, color: Rgba, font: Font, metrics: &dyn FontMetrics) -> Self {
        let mut styled = Self {
            ch,
            color,
            font,
            width: 0,
            height: 0,
        };
        styled.refresh(metrics);
        styled
    }

    /// The character.
    #[must_use]
    pub fn ch(&self) -> char {
        self.ch
    }

    /// The foreground color.
    #[must_use]
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// The font.
    #[must_use]
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Advance width in pixels.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Line height in pixels.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Replace the character and re-measure.
    pub fn set_char(&mut self, ch: char, metrics: &dyn FontMetrics) {
        self.ch = ch;
        self.refresh(metrics);
    }

    /// Replace the font and re-measure.
    pub fn set_font(&mut self, font: Font, metrics: &dyn FontMetrics) {
        self.font = font;
        self.refresh(metrics);
    }

    /// Replace the color. Color does not affect size.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Copy character, color and font from `other`, then re-measure.
    ///
    /// The source's cached size is never copied; it may have been measured by
    /// a different provider.
    pub fn assign(&mut self, other: &Self, metrics: &dyn FontMetrics) {
        self.ch = other.ch;
        self.color = other.color;
        self.font.clone_from(&other.font);
        self.refresh(metrics);
    }

    /// Re-measure against `metrics`.
    pub fn refresh(&mut self, metrics: &dyn FontMetrics) {
        let size = metrics.char_size(self.ch, &self.font);
        self.width = size.width.max(0);
        self.height = size.height.max(0);
    }
}
