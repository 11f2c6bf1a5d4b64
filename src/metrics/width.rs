//! Display width of characters in monospace columns.

use unicode_width::UnicodeWidthChar;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Get the number of monospace columns a character occupies.
///
/// ASCII printable characters take a fast path. Control characters and
/// combining marks occupy zero columns.
#[inline]
#[must_use]
pub fn display_columns(c: char, method: WidthMethod) -> usize {
    if c.is_ascii() && (' '..='~').contains(&c) {
        return 1;
    }
    if c < ' ' {
        return 0;
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c).unwrap_or(0),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c).unwrap_or(0),
    }
}
