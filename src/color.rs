//! Color representation for hex-valued color fields.
//!
//! A [`Color`] wraps an RGB triple and is the value handed out by
//! [`ColorDescriptor`](crate::descriptor::ColorDescriptor) reads. It can be
//! built from a hex-like string and always renders back to the canonical
//! lowercase `#rrggbb` form.
//!
//! # Examples
//!
//! ## Parsing Colors
//!
//! ```
//! use colorful::color::Color;
//!
//! let red = Color::from_hex("#FF0000").unwrap();
//! assert_eq!(red.hex(), "#ff0000");
//!
//! // Leading '#' is optional and 3-digit shorthand is expanded
//! let orange = Color::from_hex("f80").unwrap();
//! assert_eq!(orange.hex(), "#ff8800");
//! ```
//!
//! ## Rendering for Templates
//!
//! ```
//! use colorful::color::Color;
//!
//! let red = Color::from_rgb(255, 0, 0);
//! assert_eq!(red.as_css_color(), "rgb(255, 0, 0)");
//! ```

use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::LazyLock;
use std::sync::Mutex;

use crate::sync::lock_recover;

/// RGB color triplet with values 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorTriplet {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorTriplet {
    /// Create a new color triplet from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns CSS-style hex format `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Returns compact rgb format `rgb(r,g,b)`.
    #[must_use]
    pub fn rgb(&self) -> String {
        format!("rgb({},{},{})", self.red, self.green, self.blue)
    }

    /// Components as a tuple.
    #[must_use]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}

impl From<(u8, u8, u8)> for ColorTriplet {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for ColorTriplet {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for ColorTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// An RGB color value.
///
/// Construction is the only place input is checked; once built, a `Color`
/// always has a valid canonical hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    triplet: ColorTriplet,
}

impl Color {
    /// Create a color from an RGB triplet.
    #[must_use]
    pub const fn from_triplet(triplet: ColorTriplet) -> Self {
        Self { triplet }
    }

    /// Create a color from RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_triplet(ColorTriplet::new(red, green, blue))
    }

    /// Parse a hex-like color string (cached).
    ///
    /// Accepted forms, case-insensitive, surrounding whitespace ignored:
    /// - `#RRGGBB` / `RRGGBB`
    /// - `#RGB` / `RGB` (shorthand, each digit doubled)
    ///
    /// # Errors
    ///
    /// Returns `ColorParseError`:
    /// - `Empty` if the string is empty
    /// - `InvalidHex` if the string is not one of the forms above
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        static CACHE: LazyLock<Mutex<LruCache<String, Color>>> =
            LazyLock::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(512).expect("non-zero"))));

        let normalized = hex.trim().to_lowercase();

        if let Some(cached) = lock_recover(&*CACHE).get(&normalized) {
            log::trace!(target: "colorful::color", "parse cache hit for {normalized:?}");
            return Ok(*cached);
        }

        let result = Self::parse_uncached(&normalized)?;
        lock_recover(&*CACHE).put(normalized, result);

        Ok(result)
    }

    fn parse_uncached(hex: &str) -> Result<Self, ColorParseError> {
        if hex.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(hex.to_string()));
        }

        let channel = |pair: &str| u8::from_str_radix(pair, 16);
        let parsed = match digits.len() {
            6 => (
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
            ),
            // #RGB -> #RRGGBB
            3 => {
                let doubled: Vec<String> = digits.chars().map(|c| format!("{c}{c}")).collect();
                (
                    channel(&doubled[0]),
                    channel(&doubled[1]),
                    channel(&doubled[2]),
                )
            }
            _ => return Err(ColorParseError::InvalidHex(hex.to_string())),
        };

        match parsed {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::from_rgb(r, g, b)),
            _ => Err(ColorParseError::InvalidHex(hex.to_string())),
        }
    }

    /// The underlying RGB triplet.
    #[must_use]
    pub const fn triplet(&self) -> ColorTriplet {
        self.triplet
    }

    /// RGB components as a tuple.
    #[must_use]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        self.triplet.as_tuple()
    }

    #[must_use]
    pub const fn red(&self) -> u8 {
        self.triplet.red
    }

    #[must_use]
    pub const fn green(&self) -> u8 {
        self.triplet.green
    }

    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.triplet.blue
    }

    /// Canonical lowercase `#rrggbb` form.
    #[must_use]
    pub fn hex(&self) -> String {
        self.triplet.hex()
    }

    /// CSS color string for templates, e.g. `rgb(255, 0, 0)`.
    #[must_use]
    pub fn as_css_color(&self) -> String {
        self.triplet.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<ColorTriplet> for Color {
    fn from(triplet: ColorTriplet) -> Self {
        Self::from_triplet(triplet)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::from_rgb(red, green, blue)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(value.as_str())
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    InvalidHex(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty color string"),
            Self::InvalidHex(s) => write!(f, "Invalid hex color: {s}"),
        }
    }
}

impl std::error::Error for ColorParseError {}
