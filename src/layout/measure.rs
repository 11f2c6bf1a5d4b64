//! Bounding size of wrapped lines.

use crate::geometry::Size;
use crate::layout::split_by_width;
use crate::text::StyledText;

/// Measure the bounding box of `lines` stacked top to bottom.
///
/// The width is the widest line. The height is the sum of each line's
/// tallest character plus `line_spacing` between consecutive lines (none
/// after the last). No lines measure `(0, 0)`.
#[must_use]
pub fn measure_lines(lines: &[StyledText], line_spacing: i32) -> Size {
    let width = lines.iter().map(StyledText::text_width).max().unwrap_or(0);
    let heights = lines
        .iter()
        .map(StyledText::max_text_height)
        .fold(0i32, i32::saturating_add);
    Size::new(width, heights.saturating_add(total_spacing(lines.len(), line_spacing)))
}

fn total_spacing(line_count: usize, line_spacing: i32) -> i32 {
    let gaps = i32::try_from(line_count.saturating_sub(1)).unwrap_or(i32::MAX);
    gaps.saturating_mul(line_spacing)
}

/// Wrapped lines together with their vertical placement.
///
/// This is the shared layout pass behind [`draw_styled_text`]: it wraps the
/// text to a width, records the height of every line and where each line
/// starts, and measures the whole block.
///
/// [`draw_styled_text`]: crate::render::draw_styled_text
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLayout {
    lines: Vec<StyledText>,
    line_heights: Vec<i32>,
    line_offsets: Vec<i32>,
    size: Size,
}

impl TextLayout {
    /// Wrap `text` to `width` pixels and place the lines with `line_spacing`
    /// pixels between them.
    #[must_use]
    pub fn new(text: &StyledText, width: i32, line_spacing: i32) -> Self {
        Self::from_lines(split_by_width(text, width), line_spacing)
    }

    /// Place already-wrapped lines.
    #[must_use]
    pub fn from_lines(lines: Vec<StyledText>, line_spacing: i32) -> Self {
        let line_heights: Vec<i32> = lines.iter().map(StyledText::max_text_height).collect();
        let mut line_offsets = Vec::with_capacity(lines.len());
        let mut y = 0i32;
        for (index, height) in line_heights.iter().enumerate() {
            if index > 0 {
                y = y.saturating_add(line_spacing);
            }
            line_offsets.push(y);
            y = y.saturating_add(*height);
        }
        let size = measure_lines(&lines, line_spacing);
        Self {
            lines,
            line_heights,
            line_offsets,
            size,
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[StyledText] {
        &self.lines
    }

    /// Tallest character height of each line.
    #[must_use]
    pub fn line_heights(&self) -> &[i32] {
        &self.line_heights
    }

    /// Top edge of each line relative to the top of the block.
    #[must_use]
    pub fn line_offsets(&self) -> &[i32] {
        &self.line_offsets
    }

    /// Bounding size of the block.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate `(line, top, height)`.
    pub fn placed_lines(&self) -> impl Iterator<Item = (&StyledText, i32, i32)> + '_ {
        self.lines
            .iter()
            .zip(&self.line_offsets)
            .zip(&self.line_heights)
            .map(|((line, &top), &height)| (line, top, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::font::Font;
    use crate::metrics::MonospaceMetrics;

    fn text(s: &str, px: u16) -> StyledText {
        StyledText::with_text(s, Rgba::BLACK, &Font::new("Mono", px), &MonospaceMetrics::default())
    }

    #[test]
    fn test_no_lines() {
        assert_eq!(measure_lines(&[], 4), Size::ZERO);
    }

    #[test]
    fn test_single_line_has_no_spacing() {
        assert_eq!(measure_lines(&[text("abc", 20)], 7), Size::new(30, 20));
    }

    #[test]
    fn test_width_is_widest_line_not_last() {
        let lines = [text("abcd", 20), text("ab", 20)];
        assert_eq!(measure_lines(&lines, 4), Size::new(40, 44));
    }

    #[test]
    fn test_height_sums_per_line_maxima() {
        let metrics = MonospaceMetrics::default();
        let mut mixed = text("a", 10);
        mixed.append(&StyledText::with_text("B", Rgba::RED, &Font::new("Mono", 30), &metrics));
        let lines = [mixed, text("c", 10)];
        assert_eq!(measure_lines(&lines, 2), Size::new(20, 30 + 2 + 10));
    }

    #[test]
    fn test_layout_offsets() {
        let layout = TextLayout::new(&text("abcdefg", 20), 30, 5);
        assert_eq!(layout.lines().len(), 3);
        assert_eq!(layout.line_heights(), &[20, 20, 20]);
        assert_eq!(layout.line_offsets(), &[0, 25, 50]);
        assert_eq!(layout.size(), Size::new(30, 70));

        let tops: Vec<i32> = layout.placed_lines().map(|(_, top, _)| top).collect();
        assert_eq!(tops, [0, 25, 50]);
    }

    #[test]
    fn test_layout_of_empty_text() {
        let layout = TextLayout::new(&StyledText::new(), 100, 3);
        assert!(layout.is_empty());
        assert_eq!(layout.size(), Size::ZERO);
    }

    #[test]
    fn test_tall_lines_saturate() {
        struct Tall;

        impl crate::metrics::FontMetrics for Tall {
            fn char_size(&self, _ch: char, _font: &Font) -> Size {
                Size::new(10, 1 << 30)
            }
        }

        let tall = StyledText::with_text("abc", Rgba::BLACK, &Font::default(), &Tall);
        let layout = TextLayout::new(&tall, 10, 1 << 30);
        assert_eq!(layout.line_offsets(), &[0, i32::MAX, i32::MAX]);
        assert_eq!(layout.size(), Size::new(10, i32::MAX));
    }

    #[test]
    fn test_negative_spacing_overlaps_lines() {
        let layout = TextLayout::new(&text("abcd", 20), 20, -5);
        assert_eq!(layout.line_offsets(), &[0, 15]);
        assert_eq!(layout.size().height, 35);
    }
}
