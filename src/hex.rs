//! Hex normalization.
//!
//! [`smart_hex`] is the single entry point every stored value passes through:
//! it accepts either an already-built [`Color`] or a hex-like string and
//! returns the canonical `#rrggbb` form.

use crate::color::{Color, ColorParseError};

/// Stored when a write supplies no value.
pub const DEFAULT_COLOR: &str = "#000000";

/// Input to [`smart_hex`]: a color instance or a raw hex-like string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOrHex<'a> {
    Color(Color),
    Hex(&'a str),
}

impl ColorOrHex<'_> {
    /// True for an empty hex string. A `Color` is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Hex(s) if s.is_empty())
    }
}

impl From<Color> for ColorOrHex<'_> {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<&Color> for ColorOrHex<'_> {
    fn from(color: &Color) -> Self {
        Self::Color(*color)
    }
}

impl<'a> From<&'a str> for ColorOrHex<'a> {
    fn from(hex: &'a str) -> Self {
        Self::Hex(hex)
    }
}

impl<'a> From<&'a String> for ColorOrHex<'a> {
    fn from(hex: &'a String) -> Self {
        Self::Hex(hex.as_str())
    }
}

/// Normalize a color or hex-like string to canonical `#rrggbb`.
///
/// A `Color` is returned as its hex string unchanged; a string is parsed
/// first.
///
/// # Errors
///
/// Returns the `ColorParseError` from [`Color::from_hex`] when the string is
/// not a hex color.
///
/// ```
/// use colorful::hex::smart_hex;
///
/// assert_eq!(smart_hex("#FFAA00").unwrap(), "#ffaa00");
/// assert!(smart_hex("not a color").is_err());
/// ```
pub fn smart_hex<'a>(input: impl Into<ColorOrHex<'a>>) -> Result<String, ColorParseError> {
    match input.into() {
        ColorOrHex::Color(color) => Ok(color.hex()),
        ColorOrHex::Hex(hex) => {
            let normalized = Color::from_hex(hex)?.hex();
            log::debug!(target: "colorful::hex", "normalized {hex:?} to {normalized}");
            Ok(normalized)
        }
    }
}

/// [`smart_hex`] with a missing or empty input replaced by [`DEFAULT_COLOR`].
///
/// # Errors
///
/// Same as [`smart_hex`].
pub fn smart_hex_or_default(input: Option<ColorOrHex<'_>>) -> Result<String, ColorParseError> {
    match input {
        Some(value) if !value.is_empty() => smart_hex(value),
        _ => smart_hex(DEFAULT_COLOR),
    }
}
