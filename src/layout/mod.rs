//! Line wrapping and multi-line measurement.
//!
//! - [`split_by_width`]: greedy per-character wrapping to a pixel budget
//! - [`measure_lines`]: bounding size of stacked lines
//! - [`TextLayout`]: wrapped lines with their vertical placement

mod measure;
mod wrap;

pub use measure::{TextLayout, measure_lines};
pub use wrap::split_by_width;
