//! Alignment flags.

use bitflags::bitflags;

bitflags! {
    /// Horizontal and vertical alignment within a rectangle.
    ///
    /// Flags combine with bitwise OR. An empty set means left/top.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Alignment: u16 {
        const LEFT    = 0x0001;
        const RIGHT   = 0x0002;
        const HCENTER = 0x0004;
        const TOP     = 0x0020;
        const BOTTOM  = 0x0040;
        const VCENTER = 0x0080;
        /// Centered on both axes.
        const CENTER  = Self::HCENTER.bits() | Self::VCENTER.bits();
    }
}

impl Alignment {
    /// Offset that places `inner` within `outer` along the vertical axis.
    ///
    /// `VCENTER` wins over `BOTTOM` when both are set. The offset is negative
    /// when `inner` is taller than `outer`.
    #[must_use]
    pub const fn vertical_offset(self, outer: i32, inner: i32) -> i32 {
        if self.contains(Self::VCENTER) {
            (outer - inner) / 2
        } else if self.contains(Self::BOTTOM) {
            outer - inner
        } else {
            0
        }
    }

    /// Offset that places `inner` within `outer` along the horizontal axis.
    ///
    /// `HCENTER` wins over `RIGHT` when both are set.
    #[must_use]
    pub const fn horizontal_offset(self, outer: i32, inner: i32) -> i32 {
        if self.contains(Self::HCENTER) {
            (outer - inner) / 2
        } else if self.contains(Self::RIGHT) {
            outer - inner
        } else {
            0
        }
    }
}
