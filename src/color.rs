//! RGBA color type with alpha blending operations.
//!
//! This module provides the [`Rgba`] type used for per-character text colors
//! and for canvas texels. It supports:
//!
//! - **Color creation**: From f32/u8 components or hex strings
//! - **Alpha blending**: Porter-Duff "over" compositing for layered rendering
//!
//! # Examples
//!
//! ```
//! use richtext::Rgba;
//!
//! let red = Rgba::RED;
//! let custom: Rgba = "#1a1a2e".parse().unwrap();
//! let semi_transparent = Rgba::BLUE.with_alpha(0.5);
//!
//! // Blend colors using Porter-Duff "over"
//! let result = semi_transparent.blend_over(Rgba::WHITE);
//! assert!(result.is_opaque());
//! # let _ = (red, custom);
//! ```

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// RGBA color with f32 components in range [0.0, 1.0].
///
/// Colors are stored as floating-point values for precision during blending
/// operations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Mid gray, a common ellipsis color.
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);

    /// Create a new RGBA color from f32 components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from f32 RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from u8 RGB components.
    #[must_use]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, u8::MAX)
    }

    /// Create a color from u8 RGBA components.
    #[must_use]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let unit = |value: u8| f32::from(value) / 255.0;
        Self::new(unit(r), unit(g), unit(b), unit(a))
    }

    /// Parse a hex color string (e.g., "#FF0000" or "FF0000").
    ///
    /// Supports 3-char (#RGB), 6-char (#RRGGBB), and 8-char (#RRGGBBAA) formats.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = channel(0..1)?;
                let g = channel(1..2)?;
                let b = channel(2..3)?;
                Some(Self::from_rgb_u8(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::from_rgb_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self::from_rgba_u8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// Blend this color over another using standard alpha compositing (Porter-Duff "over").
    ///
    /// `self` is the foreground (on top), `other` is the background.
    #[must_use]
    pub fn blend_over(self, other: Self) -> Self {
        // Below this the output alpha is treated as zero to avoid dividing by noise
        const ALPHA_EPSILON: f32 = 1e-6;

        if self.a >= 1.0 {
            return self;
        }
        if self.a <= 0.0 {
            return other;
        }

        let inv_alpha = 1.0 - self.a;
        let out_a = other.a.mul_add(inv_alpha, self.a);

        if out_a <= ALPHA_EPSILON {
            return Self::TRANSPARENT;
        }

        Self {
            r: (other.r * other.a).mul_add(inv_alpha, self.r * self.a) / out_a,
            g: (other.g * other.a).mul_add(inv_alpha, self.g * self.a) / out_a,
            b: (other.b * other.a).mul_add(inv_alpha, self.b * self.a) / out_a,
            a: out_a,
        }
    }

    /// Return a new color with the specified alpha value.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha,
        }
    }

    /// Multiply this color's alpha by the given factor.
    #[must_use]
    pub fn multiply_alpha(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor)
    }

    /// Convert to u8 RGB tuple, clamping values to [0, 255].
    #[must_use]
    pub fn to_rgb_u8(self) -> (u8, u8, u8) {
        let to_u8 = |value: f32| (value * 255.0).round().clamp(0.0, 255.0) as u8;
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Convert to u8 RGBA tuple, clamping values to [0, 255].
    #[must_use]
    pub fn to_rgba_u8(self) -> (u8, u8, u8, u8) {
        let (r, g, b) = self.to_rgb_u8();
        let a = (self.a * 255.0).round().clamp(0.0, 255.0) as u8;
        (r, g, b, a)
    }

    /// Check if this color is fully transparent.
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    /// Check if this color is fully opaque.
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim()).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.to_rgba_u8();
        if self.is_opaque() {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgba::from_hex("#FF0000"), Some(Rgba::RED));
        assert_eq!(Rgba::from_hex("00FF00"), Some(Rgba::GREEN));
        assert_eq!(Rgba::from_hex("#00F"), Some(Rgba::BLUE));
        assert_eq!(Rgba::from_hex("#000000FF"), Some(Rgba::BLACK));
        assert_eq!(Rgba::from_hex("#12345"), None);
        assert_eq!(Rgba::from_hex("#ééé"), None);
    }

    #[test]
    fn test_from_str() {
        let parsed: Rgba = " #FFFFFF ".parse().unwrap();
        assert_eq!(parsed, Rgba::WHITE);

        let err = "#zz".parse::<Rgba>().unwrap_err();
        assert_eq!(err, Error::InvalidColor("#zz".to_string()));
    }

    #[test]
    fn test_blend_over() {
        // Opaque over anything = opaque
        let result = Rgba::RED.blend_over(Rgba::BLUE);
        assert_eq!(result, Rgba::RED);

        // Transparent over anything = that thing
        let result = Rgba::TRANSPARENT.blend_over(Rgba::GREEN);
        assert_eq!(result, Rgba::GREEN);

        // out_a = 0.5 + 1.0*0.5 = 1.0, r = 0.5, b = 0.5
        let half_red = Rgba::RED.with_alpha(0.5);
        let result = half_red.blend_over(Rgba::BLUE);
        assert!((result.r - 0.5).abs() < 0.01);
        assert!((result.b - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_blend_both_transparent() {
        let result = Rgba::RED.with_alpha(0.0).blend_over(Rgba::TRANSPARENT);
        assert!(result.is_transparent());
    }

    #[test]
    fn test_multiply_alpha() {
        let c = Rgba::WHITE.multiply_alpha(0.25);
        assert!((c.a - 0.25).abs() < f32::EPSILON);
        assert!((c.r - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_to_rgb_u8() {
        assert_eq!(Rgba::RED.to_rgb_u8(), (255, 0, 0));
        assert_eq!(Rgba::WHITE.to_rgb_u8(), (255, 255, 255));
        assert_eq!(Rgba::BLACK.to_rgba_u8(), (0, 0, 0, 255));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Rgba::RED), "#FF0000");
        assert_eq!(format!("{}", Rgba::BLACK.with_alpha(0.5)), "#00000080");
    }
}
