//! Styled characters and styled text.
//!
//! Key types:
//!
//! - [`StyledChar`]: one character with color, font and measured size
//! - [`StyledText`]: an ordered sequence of styled characters
//! - [`EllipsisStyle`]: how elision marks removed content
//!
//! # Examples
//!
//! ## Highlighting a match
//!
//! ```
//! use richtext::{Font, MonospaceMetrics, Rgba, StyledText};
//!
//! let metrics = MonospaceMetrics::default();
//! let font = Font::new("Mono", 14);
//! let bold = font.clone().bold();
//!
//! let text = StyledText::with_text("open ", Rgba::BLACK, &font, &metrics)
//!     + &StyledText::with_text("file", Rgba::RED, &bold, &metrics)
//!     + &StyledText::with_text(".txt", Rgba::BLACK, &font, &metrics);
//!
//! assert_eq!(text.plain_text(), "open file.txt");
//! ```
//!
//! ## Eliding to a width
//!
//! ```
//! use richtext::{EllipsisStyle, Font, MonospaceMetrics, Rgba, StyledText};
//!
//! let metrics = MonospaceMetrics::default();
//! let font = Font::new("Mono", 20);
//! let text = StyledText::with_text("LongFileName.txt", Rgba::BLACK, &font, &metrics);
//!
//! let elided = text.elided_text(50, &EllipsisStyle::new(Rgba::GRAY, font), &metrics);
//! assert_eq!(elided.plain_text(), "Long…");
//! assert!(elided.text_width() <= 50);
//! ```

mod styled_char;
mod styled_text;

pub use styled_char::StyledChar;
pub use styled_text::{ELLIPSIS, EllipsisStyle, StyledText};
