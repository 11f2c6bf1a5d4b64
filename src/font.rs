//! Font value type.
//!
//! A [`Font`] only describes a face: family name, pixel size and
//! [`FontAttributes`]. Turning a font into glyph sizes is the job of a
//! [`FontMetrics`](crate::metrics::FontMetrics) provider.
//!
//! # Examples
//!
//! ```
//! use richtext::{Font, FontAttributes};
//!
//! let body = Font::new("Inter", 14);
//! let heading = body.clone().with_pixel_size(20).bold();
//!
//! assert!(heading.attributes().contains(FontAttributes::BOLD));
//! assert_eq!(body.pixel_size(), 14);
//! ```

use bitflags::bitflags;
use std::fmt;
use std::sync::Arc;

bitflags! {
    /// Face attributes (bold, italic, underline, etc.).
    ///
    /// Attributes are represented as bitflags and can be combined using
    /// bitwise OR. Metrics providers may ignore attributes they cannot honour.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct FontAttributes: u8 {
        /// Bold weight.
        const BOLD          = 0x01;
        /// Italic/oblique style.
        const ITALIC        = 0x02;
        /// Underlined.
        const UNDERLINE     = 0x04;
        /// Strikethrough.
        const STRIKETHROUGH = 0x08;
    }
}

/// Family used by [`Font::default`].
pub const DEFAULT_FAMILY: &str = "sans-serif";

/// Pixel size used by [`Font::default`].
pub const DEFAULT_PIXEL_SIZE: u16 = 12;

/// An immutable font description.
///
/// Cloning is cheap: the family name is reference counted. Because a font
/// can never change behind a [`StyledChar`](crate::StyledChar)'s back, the
/// character's cached metrics stay valid for as long as it holds the font.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Font {
    family: Arc<str>,
    pixel_size: u16,
    attributes: FontAttributes,
}

impl Font {
    /// Create a font with no attributes.
    #[must_use]
    pub fn new(family: impl Into<Arc<str>>, pixel_size: u16) -> Self {
        Self {
            family: family.into(),
            pixel_size,
            attributes: FontAttributes::empty(),
        }
    }

    /// Family name.
    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Nominal size in pixels.
    #[must_use]
    pub fn pixel_size(&self) -> u16 {
        self.pixel_size
    }

    /// Face attributes.
    #[must_use]
    pub fn attributes(&self) -> FontAttributes {
        self.attributes
    }

    #[must_use]
    pub fn with_family(mut self, family: impl Into<Arc<str>>) -> Self {
        self.family = family.into();
        self
    }

    #[must_use]
    pub fn with_pixel_size(mut self, pixel_size: u16) -> Self {
        self.pixel_size = pixel_size;
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: FontAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Add bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.attributes |= FontAttributes::BOLD;
        self
    }

    /// Add italic.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.attributes |= FontAttributes::ITALIC;
        self
    }

    /// Add underline.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.attributes |= FontAttributes::UNDERLINE;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(DEFAULT_FAMILY, DEFAULT_PIXEL_SIZE)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}px", self.family, self.pixel_size)?;
        if self.attributes.contains(FontAttributes::BOLD) {
            f.write_str(" bold")?;
        }
        if self.attributes.contains(FontAttributes::ITALIC) {
            f.write_str(" italic")?;
        }
        Ok(())
    }
}
