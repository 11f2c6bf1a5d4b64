//! The paint surface the renderer draws onto.

use std::ops::{Deref, DerefMut};

use crate::color::Rgba;
use crate::font::Font;
use crate::geometry::Rect;
use crate::render::Alignment;

/// A 2D raster target.
///
/// The renderer only needs glyph drawing, transparent offscreen layers,
/// compositing a layer at an offset, and a save/restore pair for painter
/// state. [`Canvas`](crate::canvas::Canvas) is the in-crate implementation.
pub trait PaintSurface {
    /// Offscreen buffer type created by [`create_layer`](Self::create_layer).
    type Layer: PaintSurface;

    /// Whether the surface has a backing device to paint on.
    fn is_attached(&self) -> bool {
        true
    }

    /// Push the current painter state (clipping, opacity, pen, font).
    fn save(&mut self);

    /// Pop the state pushed by the matching [`save`](Self::save).
    fn restore(&mut self);

    /// Create a transparent offscreen layer of the given size.
    fn create_layer(&self, width: i32, height: i32) -> Self::Layer;

    /// Draw `ch` inside `cell`, positioned by `alignment`.
    fn draw_glyph(&mut self, cell: Rect, alignment: Alignment, ch: char, color: Rgba, font: &Font);

    /// Composite `layer` with its top-left corner at `(x, y)`.
    fn draw_layer(&mut self, x: i32, y: i32, layer: &Self::Layer);
}

/// Saved painter state, restored when dropped.
///
/// Derefs to the surface so drawing can continue through the guard.
///
/// ```
/// use richtext::canvas::Canvas;
/// use richtext::render::SavedState;
///
/// let mut canvas = Canvas::new(4, 4);
/// {
///     let mut state = SavedState::new(&mut canvas);
///     state.push_opacity(0.5);
/// }
/// assert!((canvas.current_opacity() - 1.0).abs() < f32::EPSILON);
/// ```
#[derive(Debug)]
pub struct SavedState<'a, S: PaintSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: PaintSurface + ?Sized> SavedState<'a, S> {
    /// Save `surface`'s state. It is restored when the guard drops.
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: PaintSurface + ?Sized> Deref for SavedState<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: PaintSurface + ?Sized> DerefMut for SavedState<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: PaintSurface + ?Sized> Drop for SavedState<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
