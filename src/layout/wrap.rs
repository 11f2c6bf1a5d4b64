//! Greedy per-character line wrapping.

use crate::text::StyledText;

/// Split `text` into lines no wider than `width` pixels.
///
/// Characters are placed first-fit in order. A character that would push the
/// current line past `width` starts a new line, even when it is wider than
/// `width` on its own, so no character is ever dropped and every returned
/// line holds at least one character. There is no word-boundary awareness.
///
/// Empty input yields no lines. A non-positive `width` is not special-cased:
/// every character with a positive width ends up on a line of its own.
///
/// # Examples
///
/// ```
/// use richtext::layout::split_by_width;
/// use richtext::{Font, MonospaceMetrics, Rgba, StyledText};
///
/// let metrics = MonospaceMetrics::default();
/// let text = StyledText::with_text("Hello World", Rgba::BLACK, &Font::new("Mono", 20), &metrics);
///
/// let lines: Vec<String> = split_by_width(&text, 40)
///     .iter()
///     .map(StyledText::plain_text)
///     .collect();
/// assert_eq!(lines, ["Hell", "o Wo", "rld"]);
/// ```
#[must_use]
pub fn split_by_width(text: &StyledText, width: i32) -> Vec<StyledText> {
    let mut lines = Vec::new();
    let mut line = StyledText::new();
    let budget = i64::from(width);
    let mut line_width = 0i64;

    for ch in text {
        let advance = i64::from(ch.width());
        if line_width + advance > budget && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        line_width += advance;
        line.push(ch.clone());
    }
    if !line.is_empty() {
        lines.push(line);
    }

    tracing::trace!(width, chars = text.len(), lines = lines.len(), "split styled text");
    lines
}
