//! `richtext` - per-character styled text
//!
//! Every character carries its own color and font. Text is measured through
//! a pluggable [`FontMetrics`] provider, wrapped greedily to a pixel width,
//! elided with an ellipsis, and painted onto any [`PaintSurface`] through an
//! offscreen layer that is aligned vertically as a block.

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional pixel casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Intentional for color math
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow StyledText in text module etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod canvas;
pub mod color;
pub mod error;
pub mod font;
pub mod geometry;
pub mod layout;
pub mod metrics;
pub mod render;
pub mod text;

// Re-export core types at crate root
pub use color::Rgba;
pub use error::{Error, Result};
pub use font::{Font, FontAttributes};
pub use geometry::{Rect, Size};
pub use metrics::{FontMetrics, MonospaceMetrics, WidthMethod};
pub use text::{ELLIPSIS, EllipsisStyle, StyledChar, StyledText};

// Re-export layout and rendering entry points
pub use canvas::Canvas;
pub use layout::{TextLayout, measure_lines, split_by_width};
pub use render::{Alignment, PaintSurface, RenderOptions, SavedState, draw_styled_text};
