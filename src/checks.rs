//! Structured configuration diagnostics.
//!
//! Field configuration problems are not raised; they are collected as
//! [`CheckMessage`] values with stable identifiers so a host can report them
//! alongside its own checks.

use std::fmt;

/// `colors` was provided but is not an ordered sequence.
pub const E001: &str = "colorful.E001";
/// An entry in `colors` fails format validation.
pub const E002: &str = "colorful.E002";
/// `colors` was provided as an empty sequence.
pub const E003: &str = "colorful.E003";

/// Severity of a check message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl CheckLevel {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

/// A single check diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckMessage {
    pub level: CheckLevel,
    pub msg: String,
    pub hint: Option<String>,
    /// Label of the object the message is about, e.g. `colorful.RGBColorField: color`.
    pub obj: Option<String>,
    pub id: &'static str,
}

impl CheckMessage {
    /// Create an `Error`-level message.
    #[must_use]
    pub fn error(msg: impl Into<String>, id: &'static str) -> Self {
        Self {
            level: CheckLevel::Error,
            msg: msg.into(),
            hint: None,
            obj: None,
            id,
        }
    }

    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn obj(mut self, obj: impl Into<String>) -> Self {
        self.obj = Some(obj.into());
        self
    }

    /// Errors and criticals block the host from starting.
    #[must_use]
    pub fn is_serious(&self) -> bool {
        self.level >= CheckLevel::Error
    }
}

impl fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let obj = self.obj.as_deref().unwrap_or("?");
        write!(f, "{obj}: ({}) {}", self.id, self.msg)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n\tHINT: {hint}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_hint() {
        let msg = CheckMessage::error("colors is not iterable", E001)
            .hint("Define the colors param as list of strings.")
            .obj("colorful.RGBColorField: color");
        assert_eq!(
            msg.to_string(),
            "colorful.RGBColorField: color: (colorful.E001) colors is not iterable\n\tHINT: Define the colors param as list of strings."
        );
    }

    #[test]
    fn test_display_without_obj_or_hint() {
        let msg = CheckMessage::error("boom", E002);
        assert_eq!(msg.to_string(), "?: (colorful.E002) boom");
    }

    #[test]
    fn test_seriousness() {
        let mut msg = CheckMessage::error("x", E001);
        assert!(msg.is_serious());
        msg.level = CheckLevel::Warning;
        assert!(!msg.is_serious());
        msg.level = CheckLevel::Critical;
        assert!(msg.is_serious());
    }
}
