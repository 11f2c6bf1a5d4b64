//! Property-based tests for styled text layout.
//!
//! Uses proptest to check the invariants of chopping, elision, greedy
//! wrapping and multi-line measurement over text with mixed font sizes.

use proptest::prelude::*;
use richtext::layout::{TextLayout, measure_lines, split_by_width};
use richtext::{EllipsisStyle, Font, MonospaceMetrics, Rgba, StyledChar, StyledText};

// ============================================================================
// Strategies
// ============================================================================

fn metrics() -> MonospaceMetrics {
    MonospaceMetrics::default()
}

/// Narrow, wide and zero-width characters.
fn char_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        'a', 'b', 'W', 'i', '0', ' ', '-', '漢', '字', 'か', '\u{0301}', '…',
    ])
}

/// Styled text where every character picks its own pixel size.
fn styled_text_strategy() -> impl Strategy<Value = StyledText> {
    prop::collection::vec((char_strategy(), 1u16..=40), 0..40).prop_map(|chars| {
        let m = metrics();
        chars
            .into_iter()
            .map(|(ch, size)| StyledChar::new(ch, Rgba::BLACK, Font::new("Mono", size), &m))
            .collect()
    })
}

fn ellipsis_strategy() -> impl Strategy<Value = EllipsisStyle> {
    (1u16..=60).prop_map(|size| EllipsisStyle::new(Rgba::GRAY, Font::new("Mono", size)))
}

fn is_prefix(prefix: &StyledText, of: &StyledText) -> bool {
    prefix.len() <= of.len() && prefix.iter().zip(of.iter()).all(|(a, b)| a == b)
}

// ============================================================================
// Editing
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Chopping removes exactly `min(n, len)` trailing characters.
    #[test]
    fn chop_removes_trailing(text in styled_text_strategy(), n in 0usize..60) {
        let mut chopped = text.clone();
        chopped.chop(n);
        prop_assert_eq!(chopped.len(), text.len().saturating_sub(n));
        prop_assert!(is_prefix(&chopped, &text));
    }

    /// Width is additive under concatenation.
    #[test]
    fn width_is_additive(a in styled_text_strategy(), b in styled_text_strategy()) {
        let joined = &a + &b;
        prop_assert_eq!(joined.text_width(), a.text_width() + b.text_width());
        prop_assert_eq!(joined.len(), a.len() + b.len());
        prop_assert_eq!(joined.max_text_height(), a.max_text_height().max(b.max_text_height()));
    }
}

// ============================================================================
// Elision
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Elided text never exceeds a positive budget.
    #[test]
    fn elided_fits_budget(
        text in styled_text_strategy(),
        ellipsis in ellipsis_strategy(),
        width in 1i32..400,
    ) {
        let elided = text.elided_text(width, &ellipsis, &metrics());
        prop_assert!(elided.text_width() <= width);
    }

    /// Elision keeps a prefix of the original, plus at most one ellipsis.
    #[test]
    fn elided_is_prefix_plus_ellipsis(
        text in styled_text_strategy(),
        ellipsis in ellipsis_strategy(),
        width in 1i32..400,
    ) {
        let m = metrics();
        let elided = text.elided_text(width, &ellipsis, &m);

        if text.text_width() <= width {
            prop_assert_eq!(&elided, &text);
        } else if !elided.is_empty() {
            let mut body = elided.clone();
            let mark = body.pop();
            prop_assert_eq!(mark, Some(ellipsis.to_char(&m)));
            prop_assert!(is_prefix(&body, &text));
            prop_assert!(body.len() < text.len());
        }
    }

    /// A non-positive budget always elides to nothing.
    #[test]
    fn non_positive_budget_is_empty(text in styled_text_strategy(), width in -100i32..=0) {
        let elided = text.elided_text(width, &EllipsisStyle::default(), &metrics());
        prop_assert!(elided.is_empty());
    }

    /// In-place replacement either appends one ellipsis or clears.
    #[test]
    fn replace_rear_appends_or_clears(text in styled_text_strategy(), ellipsis in ellipsis_strategy()) {
        let m = metrics();
        let mut replaced = text.clone();
        replaced.replace_rear_with_ellipsis(&ellipsis, &m);

        if text.is_empty() {
            prop_assert!(replaced.is_empty());
        } else if !replaced.is_empty() {
            prop_assert_eq!(replaced.len(), text.len() + 1);
            prop_assert!(is_prefix(&text, &replaced));
            prop_assert_eq!(replaced.at(text.len()), &ellipsis.to_char(&m));
        }
    }
}

// ============================================================================
// Wrapping and measurement
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Wrapping only inserts line breaks: the characters are unchanged.
    #[test]
    fn wrap_preserves_characters(text in styled_text_strategy(), width in -10i32..300) {
        let lines = split_by_width(&text, width);
        let rejoined: StyledText = lines.iter().flat_map(|line| line.iter().cloned()).collect();
        prop_assert_eq!(rejoined, text);
    }

    /// Lines are never empty and only exceed the budget when a single
    /// character is wider than it.
    #[test]
    fn wrap_respects_budget(text in styled_text_strategy(), width in 1i32..300) {
        let lines = split_by_width(&text, width);
        prop_assert_eq!(lines.is_empty(), text.is_empty());
        for line in &lines {
            prop_assert!(!line.is_empty());
            if line.text_width() > width {
                prop_assert_eq!(line.len(), 1);
            }
        }
    }

    /// Greedy wrapping: the next line's first character would not have fit.
    #[test]
    fn wrap_is_greedy(text in styled_text_strategy(), width in 1i32..300) {
        let lines = split_by_width(&text, width);
        for pair in lines.windows(2) {
            let first_next = pair[1].at(0).width();
            prop_assert!(pair[0].text_width() + first_next > width);
        }
    }

    /// Measured size is the widest line by the stacked heights plus spacing.
    #[test]
    fn measure_matches_lines(
        text in styled_text_strategy(),
        width in 1i32..300,
        spacing in 0i32..10,
    ) {
        let lines = split_by_width(&text, width);
        let size = measure_lines(&lines, spacing);

        let widest = lines.iter().map(StyledText::text_width).max().unwrap_or(0);
        let heights: i32 = lines.iter().map(StyledText::max_text_height).sum();
        let gaps = lines.len().saturating_sub(1) as i32;
        prop_assert_eq!(size.width, widest);
        prop_assert_eq!(size.height, heights + gaps * spacing);

        let layout = TextLayout::new(&text, width, spacing);
        prop_assert_eq!(layout.size(), size);
        prop_assert_eq!(layout.lines(), lines.as_slice());
    }
}
