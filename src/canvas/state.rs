//! Clipping and opacity stacks.

use crate::geometry::Rect;

/// Stack of clipping rectangles; each push intersects with the current clip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScissorStack {
    stack: Vec<Option<Rect>>,
    /// `None` means unclipped.
    current: Option<Rect>,
}

impl ScissorStack {
    /// Create a stack with no clipping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a clipping rectangle, intersecting with the current one.
    ///
    /// Disjoint rectangles leave an empty clip that rejects every point.
    pub fn push(&mut self, rect: Rect) {
        self.stack.push(self.current);
        let clipped = match self.current {
            Some(current) => current.intersect(&rect),
            None => Some(rect),
        };
        self.current = Some(clipped.unwrap_or_default());
    }

    /// Pop the top clipping rectangle.
    pub fn pop(&mut self) {
        if let Some(previous) = self.stack.pop() {
            self.current = previous;
        }
    }

    /// Check if a point is within the current clip.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.current.is_none_or(|rect| rect.contains(x, y))
    }

    /// Current effective clip, `None` when unclipped.
    #[must_use]
    pub fn current(&self) -> Option<Rect> {
        self.current
    }

    /// Depth of pushed clips.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Stack of opacity values that multiply together.
#[derive(Clone, Debug, PartialEq)]
pub struct OpacityStack {
    stack: Vec<f32>,
    current: f32,
}

impl OpacityStack {
    /// Create a stack at full opacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            current: 1.0,
        }
    }

    /// Push an opacity value, clamped to [0, 1].
    pub fn push(&mut self, opacity: f32) {
        self.stack.push(self.current);
        self.current *= opacity.clamp(0.0, 1.0);
    }

    /// Pop the top opacity value.
    pub fn pop(&mut self) {
        if let Some(previous) = self.stack.pop() {
            self.current = previous;
        }
    }

    /// Product of all pushed values.
    #[must_use]
    pub fn current(&self) -> f32 {
        self.current
    }
}

impl Default for OpacityStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Painter state captured by `save` and reinstated by `restore`.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct PaintState {
    pub(crate) scissor: ScissorStack,
    pub(crate) opacity: OpacityStack,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scissor_default_unclipped() {
        let stack = ScissorStack::new();
        assert!(stack.contains(-1000, 1000));
        assert_eq!(stack.current(), None);
    }

    #[test]
    fn test_scissor_nested_intersection() {
        let mut stack = ScissorStack::new();
        stack.push(Rect::new(0, 0, 20, 20));
        stack.push(Rect::new(10, 10, 20, 20));
        assert_eq!(stack.current(), Some(Rect::new(10, 10, 10, 10)));
        assert!(!stack.contains(5, 5));

        stack.pop();
        assert!(stack.contains(5, 5));
        stack.pop();
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.current(), None);
    }

    #[test]
    fn test_scissor_disjoint_rejects_everything() {
        let mut stack = ScissorStack::new();
        stack.push(Rect::new(0, 0, 5, 5));
        stack.push(Rect::new(10, 10, 5, 5));
        assert!(!stack.contains(0, 0));
        assert!(!stack.contains(12, 12));
    }

    #[test]
    fn test_scissor_pop_empty_is_harmless() {
        let mut stack = ScissorStack::new();
        stack.pop();
        assert_eq!(stack.current(), None);
    }

    #[test]
    fn test_opacity_multiply() {
        let mut stack = OpacityStack::new();
        stack.push(0.5);
        stack.push(0.5);
        assert!((stack.current() - 0.25).abs() < f32::EPSILON);
        stack.pop();
        assert!((stack.current() - 0.5).abs() < f32::EPSILON);
        stack.pop();
        stack.pop();
        assert!((stack.current() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_opacity_clamp() {
        let mut stack = OpacityStack::new();
        stack.push(2.0);
        assert!((stack.current() - 1.0).abs() < f32::EPSILON);
        stack.push(-0.5);
        assert!(stack.current() <= 0.0);
    }
}
