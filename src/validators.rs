//! Format validation for stored color values.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Pattern every stored color must match.
pub const RGB_REGEX: &str = r"^#[A-Fa-f0-9]{6}$";

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(RGB_REGEX).expect("valid regex"));

/// A failed validation, carrying a human-readable message and a stable code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub code: &'static str,
}

impl ValidationError {
    #[must_use]
    pub fn new(message: impl Into<String>, code: &'static str) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    /// The value is not a `#RRGGBB` string.
    #[must_use]
    pub fn invalid() -> Self {
        Self::new("Enter a valid value.", "invalid")
    }

    /// A required value was empty.
    #[must_use]
    pub fn required() -> Self {
        Self::new("This field is required.", "required")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.message, self.code)
    }
}

impl std::error::Error for ValidationError {}

/// Returns true if `value` is a `#RRGGBB` string (any case).
#[must_use]
pub fn is_rgb_hex(value: &str) -> bool {
    RGB_RE.is_match(value)
}

/// Validate that `value` is a `#RRGGBB` string.
///
/// # Errors
///
/// Returns a `ValidationError` with code `invalid` when it is not.
pub fn validate_rgb_hex(value: &str) -> Result<(), ValidationError> {
    if is_rgb_hex(value) {
        Ok(())
    } else {
        Err(ValidationError::invalid())
    }
}
