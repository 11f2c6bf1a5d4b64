//! Error types for richtext.

use std::fmt;

/// Result type alias for richtext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for richtext operations.
///
/// Layout and rendering never fail; these variants cover the few fallible
/// constructors and checked lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// Texel storage does not match the requested canvas dimensions.
    InvalidDimensions { width: u32, height: u32 },
    /// Character index past the end of a styled text.
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions: {width}x{height}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for styled text of length {len}")
            }
        }
    }
}

impl std::error::Error for Error {}
