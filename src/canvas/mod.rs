//! In-memory raster surface.
//!
//! [`Canvas`] is a grid of [`Texel`]s that implements
//! [`PaintSurface`](crate::render::PaintSurface). It does not rasterize glyph
//! outlines: drawing a glyph stamps the character, its color and its font
//! attributes onto the anchor texel that the alignment selects inside the
//! glyph cell. That is enough to check placement, color and compositing, and
//! with [`MonospaceMetrics::cells`](crate::MonospaceMetrics::cells) the
//! output reads like a terminal grid.
//!
//! Canvases support:
//!
//! - **Scissor clipping**: Restrict drawing to rectangular regions
//! - **Opacity stacking**: Apply transparency to groups of operations
//! - **Alpha blending**: Composite texels using Porter-Duff "over"
//! - **Canvas compositing**: Draw one canvas onto another
//! - **Save/restore**: Snapshot and reinstate clipping and opacity
//!
//! # Examples
//!
//! ```
//! use richtext::canvas::Canvas;
//! use richtext::{Rect, Rgba};
//!
//! let mut canvas = Canvas::new(8, 2);
//! canvas.clear(Rgba::BLACK);
//!
//! canvas.push_scissor(Rect::new(0, 0, 4, 2));
//! canvas.fill_rect(Rect::new(0, 0, 8, 2), Rgba::RED);
//! canvas.pop_scissor();
//!
//! assert_eq!(canvas.color_at(3, 0), Some(Rgba::RED));
//! assert_eq!(canvas.color_at(4, 0), Some(Rgba::BLACK));
//! ```

mod state;

pub use state::{OpacityStack, ScissorStack};

use state::PaintState;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::font::{Font, FontAttributes};
use crate::geometry::{Rect, Size};
use crate::render::{Alignment, PaintSurface};

/// Marker used by [`Canvas::glyph_map`] for texels without a glyph.
pub const EMPTY_GLYPH: char = '.';

/// One raster position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Texel {
    /// Glyph anchored here, if any.
    pub glyph: Option<char>,
    /// Glyph color, or fill color when there is no glyph.
    pub color: Rgba,
    /// Attributes of the glyph's font.
    pub attributes: FontAttributes,
}

impl Texel {
    /// Transparent, glyph-free texel.
    pub const EMPTY: Self = Self {
        glyph: None,
        color: Rgba::TRANSPARENT,
        attributes: FontAttributes::empty(),
    };

    /// A texel holding a glyph.
    #[must_use]
    pub const fn glyph(ch: char, color: Rgba, attributes: FontAttributes) -> Self {
        Self {
            glyph: Some(ch),
            color,
            attributes,
        }
    }

    /// A glyph-free texel of a solid color.
    #[must_use]
    pub const fn fill(color: Rgba) -> Self {
        Self {
            glyph: None,
            color,
            attributes: FontAttributes::empty(),
        }
    }

    /// Check if the texel is transparent and holds no glyph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyph.is_none() && self.color.is_transparent()
    }

    /// Composite this texel over `below`.
    ///
    /// Colors blend Porter-Duff "over". A visible glyph replaces the glyph
    /// underneath; a glyph-free texel keeps it.
    #[must_use]
    pub fn blend_over(self, below: Self) -> Self {
        if self.color.is_transparent() {
            return below;
        }
        let color = self.color.blend_over(below.color);
        match self.glyph {
            Some(_) => Self { color, ..self },
            None => Self { color, ..below },
        }
    }

    /// Scale the texel's alpha.
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            color: self.color.multiply_alpha(opacity),
            ..self
        }
    }
}

/// Texel grid with clipping, opacity and save/restore.
///
/// # Coordinate System
///
/// Coordinates are (x, y) where (0, 0) is the top-left corner. X increases
/// to the right, Y increases downward. Signed coordinates are accepted and
/// anything outside the grid is silently dropped.
///
/// # Drawing Behavior
///
/// All drawing respects the current scissor stack (clipping) and opacity
/// stack (transparency), and blends over existing content.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    texels: Vec<Texel>,
    state: PaintState,
    saved: Vec<PaintState>,
}

impl Canvas {
    /// Create a transparent canvas.
    ///
    /// A canvas with zero area has no backing store and reports
    /// [`is_attached`](PaintSurface::is_attached) as `false`.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            texels: vec![Texel::EMPTY; size],
            state: PaintState::default(),
            saved: Vec::new(),
        }
    }

    /// Create a canvas from existing texels in row-major order.
    pub fn from_texels(width: u32, height: u32, texels: Vec<Texel>) -> Result<Self> {
        let expected = (width as usize).checked_mul(height as usize);
        if expected != Some(texels.len()) {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            texels,
            state: PaintState::default(),
            saved: Vec::new(),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(to_i32(self.width), to_i32(self.height))
    }

    /// Full canvas bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size())
    }

    /// All texels in row-major order.
    #[must_use]
    pub fn texels(&self) -> &[Texel] {
        &self.texels
    }

    /// Compute texel index, `None` outside the grid.
    #[inline]
    fn texel_index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)?;
        (idx < self.texels.len()).then_some(idx)
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<&Texel> {
        self.texel_index(x, y).map(|idx| &self.texels[idx])
    }

    /// Glyph anchored at `(x, y)`.
    #[must_use]
    pub fn glyph_at(&self, x: i32, y: i32) -> Option<char> {
        self.get(x, y).and_then(|texel| texel.glyph)
    }

    /// Color at `(x, y)`, `None` outside the grid.
    #[must_use]
    pub fn color_at(&self, x: i32, y: i32) -> Option<Rgba> {
        self.get(x, y).map(|texel| texel.color)
    }

    /// Check if no texel has been painted.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.texels.iter().all(Texel::is_empty)
    }

    /// Reset every texel to a glyph-free fill, ignoring clip and opacity.
    pub fn clear(&mut self, color: Rgba) {
        self.texels.fill(Texel::fill(color));
    }

    /// Blend `texel` over `(x, y)`, respecting clip and opacity.
    pub fn set_blended(&mut self, x: i32, y: i32, texel: Texel) {
        if !self.state.scissor.contains(x, y) {
            return;
        }
        let Some(idx) = self.texel_index(x, y) else {
            return;
        };
        let opacity = self.state.opacity.current();
        let texel = if opacity < 1.0 {
            texel.with_opacity(opacity)
        } else {
            texel
        };
        self.texels[idx] = texel.blend_over(self.texels[idx]);
    }

    /// Blend a solid color over `rect`.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let Some(area) = rect.intersect(&self.bounds()) else {
            return;
        };
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.set_blended(x, y, Texel::fill(color));
            }
        }
    }

    /// Composite `src` with its top-left corner at `(x, y)`.
    ///
    /// Empty source texels leave the destination untouched.
    pub fn draw_canvas(&mut self, x: i32, y: i32, src: &Canvas) {
        let placed = Rect::new(x, y, src.size().width, src.size().height);
        let Some(area) = placed.intersect(&self.bounds()) else {
            return;
        };
        for dest_y in area.y..area.bottom() {
            for dest_x in area.x..area.right() {
                let Some(texel) = src.get(dest_x - x, dest_y - y) else {
                    continue;
                };
                if !texel.is_empty() {
                    self.set_blended(dest_x, dest_y, *texel);
                }
            }
        }
    }

    /// Push a clipping rectangle.
    pub fn push_scissor(&mut self, rect: Rect) {
        self.state.scissor.push(rect);
    }

    /// Pop the top clipping rectangle.
    pub fn pop_scissor(&mut self) {
        self.state.scissor.pop();
    }

    /// Push an opacity multiplier.
    pub fn push_opacity(&mut self, opacity: f32) {
        self.state.opacity.push(opacity);
    }

    /// Pop the top opacity multiplier.
    pub fn pop_opacity(&mut self) {
        self.state.opacity.pop();
    }

    #[must_use]
    pub fn current_opacity(&self) -> f32 {
        self.state.opacity.current()
    }

    /// Current clip, `None` when unclipped.
    #[must_use]
    pub fn current_scissor(&self) -> Option<Rect> {
        self.state.scissor.current()
    }

    /// Number of outstanding `save` calls.
    #[must_use]
    pub fn saved_depth(&self) -> usize {
        self.saved.len()
    }

    /// Render glyphs as text, one line per row, [`EMPTY_GLYPH`] where there
    /// is none.
    #[must_use]
    pub fn glyph_map(&self) -> String {
        if self.width == 0 {
            return String::new();
        }
        self.texels
            .chunks(self.width as usize)
            .map(|row| {
                row.iter()
                    .map(|texel| texel.glyph.unwrap_or(EMPTY_GLYPH))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl PaintSurface for Canvas {
    type Layer = Canvas;

    fn is_attached(&self) -> bool {
        !self.texels.is_empty()
    }

    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn create_layer(&self, width: i32, height: i32) -> Canvas {
        Canvas::new(clamp_extent(width), clamp_extent(height))
    }

    /// Stamp `ch` on the anchor texel of `cell`.
    ///
    /// A texel holds a single glyph, so zero-area cells draw nothing. This
    /// drops zero-advance characters such as combining marks; the layout
    /// still keeps them.
    fn draw_glyph(&mut self, cell: Rect, alignment: Alignment, ch: char, color: Rgba, font: &Font) {
        if !cell.is_valid() {
            return;
        }
        let x = cell.x + alignment.horizontal_offset(cell.width, 1);
        let y = cell.y + alignment.vertical_offset(cell.height, 1);
        self.set_blended(x, y, Texel::glyph(ch, color, font.attributes()));
    }

    fn draw_layer(&mut self, x: i32, y: i32, layer: &Canvas) {
        self.draw_canvas(x, y, layer);
    }
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn clamp_extent(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
