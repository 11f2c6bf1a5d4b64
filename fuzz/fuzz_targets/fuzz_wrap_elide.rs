//! Fuzz target for wrapping, elision and rendering.
//!
//! Arbitrary text, font sizes and budgets must never panic, wrapping must
//! keep every character, and elision must respect positive budgets.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use richtext::canvas::Canvas;
use richtext::layout::split_by_width;
use richtext::render::{Alignment, RenderOptions, draw_styled_text};
use richtext::{EllipsisStyle, Font, MonospaceMetrics, Rect, Rgba, StyledText};

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    pixel_size: u8,
    ellipsis_size: u8,
    width: i16,
    height: i16,
    spacing: i8,
    alignment: u16,
}

fuzz_target!(|input: Input| {
    let metrics = MonospaceMetrics::cells();
    let font = Font::new("Mono", u16::from(input.pixel_size % 8));
    let text = StyledText::with_text(&input.text, Rgba::WHITE, &font, &metrics);
    let width = i32::from(input.width);

    let lines = split_by_width(&text, width);
    let rejoined: usize = lines.iter().map(StyledText::len).sum();
    assert_eq!(rejoined, text.len());

    let ellipsis = EllipsisStyle::new(Rgba::GRAY, Font::new("Mono", u16::from(input.ellipsis_size % 8)));
    let elided = text.elided_text(width, &ellipsis, &metrics);
    if width > 0 {
        assert!(elided.text_width() <= width);
    } else {
        assert!(elided.is_empty());
    }

    let mut replaced = text.clone();
    replaced.replace_rear_with_ellipsis(&ellipsis, &metrics);

    let mut canvas = Canvas::new(16, 8);
    let options = RenderOptions::new(
        Alignment::from_bits_truncate(input.alignment),
        i32::from(input.spacing),
    );
    let rect = Rect::new(0, 0, width.clamp(-4, 32), i32::from(input.height).clamp(-4, 32));
    let _ = draw_styled_text(&mut canvas, rect, &text, &options);
    assert_eq!(canvas.saved_depth(), 0);
});
