//! Ordered sequences of styled characters.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut};

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::font::Font;
use crate::metrics::FontMetrics;
use crate::text::StyledChar;

/// The character used for elision.
pub const ELLIPSIS: char = '\u{2026}';

/// Color and font of the ellipsis appended by elision.
#[derive(Clone, Debug, PartialEq)]
pub struct EllipsisStyle {
    pub color: Rgba,
    pub font: Font,
}

impl EllipsisStyle {
    #[must_use]
    pub fn new(color: Rgba, font: Font) -> Self {
        Self { color, font }
    }

    /// Build the styled ellipsis character.
    #[must_use]
    pub fn to_char(&self, metrics: &dyn FontMetrics) -> StyledChar {
        StyledChar::new(ELLIPSIS, self.color, self.font.clone(), metrics)
    }

    /// Width of the ellipsis, measured as a string in the ellipsis font.
    #[must_use]
    pub fn width(&self, metrics: &dyn FontMetrics) -> i32 {
        let mut buf = [0u8; 4];
        metrics.text_width(ELLIPSIS.encode_utf8(&mut buf), &self.font)
    }
}

impl Default for EllipsisStyle {
    fn default() -> Self {
        Self::new(Rgba::BLACK, Font::default())
    }
}

/// A string whose characters each carry their own color and font.
///
/// Insertion order is display order. The empty sequence is a valid value.
/// Characters are held by value, so clones and concatenations never share
/// state.
///
/// # Examples
///
/// ```
/// use richtext::{Font, MonospaceMetrics, Rgba, StyledText};
///
/// let metrics = MonospaceMetrics::default();
/// let font = Font::new("Mono", 20);
///
/// let mut text = StyledText::with_text("match", Rgba::RED, &font, &metrics);
/// text.append(&StyledText::with_text("ing", Rgba::BLACK, &font, &metrics));
///
/// assert_eq!(text.plain_text(), "matching");
/// assert_eq!(text.text_width(), 80);
/// assert_eq!(text[0].color(), Rgba::RED);
/// assert_eq!(text[5].color(), Rgba::BLACK);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledText {
    chars: Vec<StyledChar>,
}

impl StyledText {
    /// Create an empty styled text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a styled text with one uniformly styled character per `char`
    /// of `text`.
    #[must_use]
    pub fn with_text(text: &str, color: Rgba, font: &Font, metrics: &dyn FontMetrics) -> Self {
        text.chars()
            .map(|ch| StyledChar::new(ch, color, font.clone(), metrics))
            .collect()
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[StyledChar] {
        &self.chars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyledChar> {
        self.chars.iter()
    }

    /// Character at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn at(&self, index: usize) -> &StyledChar {
        assert!(
            index < self.chars.len(),
            "styled text index {index} out of range for length {}",
            self.chars.len()
        );
        &self.chars[index]
    }

    /// Character at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StyledChar> {
        self.chars.get(index)
    }

    /// Character at `index`, or [`Error::IndexOutOfBounds`] past the end.
    pub fn try_at(&self, index: usize) -> Result<&StyledChar> {
        self.chars.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.chars.len(),
        })
    }

    /// Concatenate the characters into a plain string.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut text = String::with_capacity(self.chars.len());
        text.extend(self.chars.iter().map(StyledChar::ch));
        text
    }

    /// Tallest character height, using each character's own font.
    ///
    /// Returns 0 for empty text.
    #[must_use]
    pub fn max_text_height(&self) -> i32 {
        self.chars.iter().map(StyledChar::height).max().unwrap_or(0)
    }

    /// Sum of character widths, saturating at `i32::MAX`.
    #[must_use]
    pub fn text_width(&self) -> i32 {
        i32::try_from(self.wide_width()).unwrap_or(i32::MAX)
    }

    /// Sum of character widths without overflow.
    fn wide_width(&self) -> i64 {
        self.chars.iter().map(|ch| i64::from(ch.width())).sum()
    }

    /// Append one character.
    pub fn push(&mut self, ch: StyledChar) -> &mut Self {
        self.chars.push(ch);
        self
    }

    /// Append copies of every character of `other`.
    pub fn append(&mut self, other: &Self) -> &mut Self {
        self.chars.extend_from_slice(&other.chars);
        self
    }

    /// Remove and return the last character.
    pub fn pop(&mut self) -> Option<StyledChar> {
        self.chars.pop()
    }

    /// Remove the last `n` characters.
    ///
    /// `chop(0)` is a no-op; chopping `len()` or more leaves the text empty.
    pub fn chop(&mut self, n: usize) {
        let keep = self.chars.len().saturating_sub(n);
        self.chars.truncate(keep);
    }

    /// Return a copy that fits in `width` pixels, ending in an ellipsis if
    /// anything had to be cut.
    ///
    /// - `width <= 0` yields empty text.
    /// - Text that already fits is returned unchanged, without an ellipsis.
    /// - Otherwise trailing characters are dropped until the remainder plus
    ///   the ellipsis fits, then one ellipsis is appended. If every character
    ///   had to go, the result is empty and carries no ellipsis.
    #[must_use]
    pub fn elided_text(
        &self,
        width: i32,
        ellipsis: &EllipsisStyle,
        metrics: &dyn FontMetrics,
    ) -> Self {
        if width <= 0 {
            return Self::new();
        }
        let width = i64::from(width);
        let mut remaining_width = self.wide_width();
        if remaining_width <= width {
            return self.clone();
        }

        let ellipsis_width = i64::from(ellipsis.width(metrics));
        let mut elided = self.clone();
        while !elided.is_empty() {
            if remaining_width + ellipsis_width <= width {
                elided.push(ellipsis.to_char(metrics));
                break;
            }
            if let Some(removed) = elided.pop() {
                remaining_width -= i64::from(removed.width());
            }
        }

        tracing::trace!(width, len = self.len(), elided_len = elided.len(), "elided styled text");
        elided
    }

    /// Append an ellipsis in place, checking feasibility against a trimmed
    /// scratch copy.
    ///
    /// The scratch copy loses one trailing character at a time. As soon as
    /// the scratch width plus the ellipsis width fits in the original width,
    /// the ellipsis is appended to `self` (the untrimmed text) and the call
    /// returns. If the scratch copy runs out first, `self` is replaced by the
    /// empty scratch copy. Empty text is left untouched.
    pub fn replace_rear_with_ellipsis(&mut self, ellipsis: &EllipsisStyle, metrics: &dyn FontMetrics) {
        if self.is_empty() {
            return;
        }

        let ellipsis_width = i64::from(ellipsis.width(metrics));
        let original_width = self.wide_width();
        let mut scratch = self.clone();
        let mut scratch_width = original_width;

        while let Some(removed) = scratch.pop() {
            scratch_width -= i64::from(removed.width());
            if scratch_width + ellipsis_width <= original_width {
                self.push(ellipsis.to_char(metrics));
                return;
            }
        }

        tracing::trace!(
            original_width,
            ellipsis_width,
            "ellipsis wider than text, clearing"
        );
        *self = scratch;
    }
}

impl Index<usize> for StyledText {
    type Output = StyledChar;

    fn index(&self, index: usize) -> &StyledChar {
        self.at(index)
    }
}

impl IndexMut<usize> for StyledText {
    fn index_mut(&mut self, index: usize) -> &mut StyledChar {
        let len = self.chars.len();
        assert!(
            index < len,
            "styled text index {index} out of range for length {len}"
        );
        &mut self.chars[index]
    }
}

impl From<StyledChar> for StyledText {
    fn from(ch: StyledChar) -> Self {
        Self { chars: vec![ch] }
    }
}

impl FromIterator<StyledChar> for StyledText {
    fn from_iter<I: IntoIterator<Item = StyledChar>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl Extend<StyledChar> for StyledText {
    fn extend<I: IntoIterator<Item = StyledChar>>(&mut self, iter: I) {
        self.chars.extend(iter);
    }
}

impl<'a> IntoIterator for &'a StyledText {
    type Item = &'a StyledChar;
    type IntoIter = std::slice::Iter<'a, StyledChar>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.iter()
    }
}

impl IntoIterator for StyledText {
    type Item = StyledChar;
    type IntoIter = std::vec::IntoIter<StyledChar>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.into_iter()
    }
}

impl AddAssign<StyledChar> for StyledText {
    fn add_assign(&mut self, ch: StyledChar) {
        self.push(ch);
    }
}

impl AddAssign<&StyledText> for StyledText {
    fn add_assign(&mut self, other: &StyledText) {
        self.append(other);
    }
}

impl Add<&StyledText> for StyledText {
    type Output = StyledText;

    fn add(mut self, other: &StyledText) -> StyledText {
        self.append(other);
        self
    }
}

impl Add<&StyledText> for &StyledText {
    type Output = StyledText;

    fn add(self, other: &StyledText) -> StyledText {
        self.clone() + other
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain_text())
    }
}
