//! Painting styled text into a rectangle.
//!
//! [`draw_styled_text`] wraps the text to the rectangle width, paints every
//! character into a transparent offscreen layer sized to the wrapped block,
//! then composites the layer into the rectangle so the block can be aligned
//! vertically as a unit.
//!
//! # Examples
//!
//! ```
//! use richtext::canvas::Canvas;
//! use richtext::render::{RenderOptions, draw_styled_text};
//! use richtext::{Font, MonospaceMetrics, Rect, Rgba, StyledText};
//!
//! let metrics = MonospaceMetrics::cells();
//! let text = StyledText::with_text("Hello World", Rgba::WHITE, &Font::new("Mono", 1), &metrics);
//!
//! let mut canvas = Canvas::new(6, 4);
//! let painted = draw_styled_text(&mut canvas, Rect::new(0, 0, 6, 4), &text, &RenderOptions::default());
//!
//! assert_eq!(painted, Some(Rect::new(0, 0, 6, 2)));
//! assert_eq!(canvas.glyph_map(), "Hello \nWorld.\n......\n......");
//! ```

mod alignment;
mod surface;

pub use alignment::Alignment;
pub use surface::{PaintSurface, SavedState};

use crate::geometry::Rect;
use crate::layout::TextLayout;
use crate::text::StyledText;

/// Options for [`draw_styled_text`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Placement of the text block inside the destination rectangle.
    /// Only the vertical flags move the block.
    pub alignment: Alignment,
    /// Pixels between consecutive lines.
    pub line_spacing: i32,
}

impl RenderOptions {
    #[must_use]
    pub fn new(alignment: Alignment, line_spacing: i32) -> Self {
        Self {
            alignment,
            line_spacing,
        }
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_line_spacing(mut self, line_spacing: i32) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    /// Top-aligned block.
    #[must_use]
    pub fn top() -> Self {
        Self::default().with_alignment(Alignment::TOP)
    }

    /// Vertically centered block.
    #[must_use]
    pub fn vcenter() -> Self {
        Self::default().with_alignment(Alignment::VCENTER)
    }

    /// Bottom-aligned block.
    #[must_use]
    pub fn bottom() -> Self {
        Self::default().with_alignment(Alignment::BOTTOM)
    }
}

/// Wrap `text` to `rect` and paint it onto `surface`.
///
/// Returns the destination region the text block was composited into, or
/// `None` when nothing was drawn. Nothing is drawn when the surface is not
/// attached, `rect` has no area, the text is empty, or the wrapped block has
/// no height. The block may extend past `rect` when it is taller than the
/// rectangle.
///
/// Painter state is saved on entry and restored on every exit path.
pub fn draw_styled_text<S>(
    surface: &mut S,
    rect: Rect,
    text: &StyledText,
    options: &RenderOptions,
) -> Option<Rect>
where
    S: PaintSurface + ?Sized,
{
    let mut surface = SavedState::new(surface);
    if !surface.is_attached() || !rect.is_valid() {
        tracing::debug!(?rect, attached = surface.is_attached(), "skipping styled text draw");
        return None;
    }

    let layout = TextLayout::new(text, rect.width, options.line_spacing);
    if layout.is_empty() {
        return None;
    }
    let block_height = layout.size().height;
    if block_height <= 0 {
        tracing::debug!(lines = layout.lines().len(), "styled text block has no height");
        return None;
    }

    let mut layer = surface.create_layer(rect.width, block_height);
    paint_layout(&mut layer, &layout);

    let dy = options.alignment.vertical_offset(rect.height, block_height);
    let target = Rect::new(rect.x, rect.y.saturating_add(dy), rect.width, block_height);
    tracing::trace!(?target, lines = layout.lines().len(), "compositing styled text layer");
    surface.draw_layer(target.x, target.y, &layer);
    Some(target)
}

/// Paint every character of `layout` with the block's top-left at `(0, 0)`.
///
/// Each glyph is centered in a cell as wide as the character and as tall as
/// its line.
fn paint_layout<L: PaintSurface + ?Sized>(layer: &mut L, layout: &TextLayout) {
    for (line, top, height) in layout.placed_lines() {
        let mut x = 0i32;
        for ch in line {
            let cell = Rect::new(x, top, ch.width(), height);
            layer.draw_glyph(cell, Alignment::CENTER, ch.ch(), ch.color(), ch.font());
            x = x.saturating_add(ch.width());
        }
    }
}
