//! The RGB color field.
//!
//! [`RgbColorField`] holds a field's configuration (name, allowed `colors`,
//! declared `default`) and exposes the capabilities a host framework needs:
//! [`check`](RgbColorField::check) for configuration diagnostics,
//! [`clean`](RgbColorField::clean) for value validation,
//! [`deconstruct`](RgbColorField::deconstruct) for reconstructing the field
//! elsewhere, [`formfield`](RgbColorField::formfield) for input handling and
//! [`descriptor`](RgbColorField::descriptor) for typed attribute access.
//!
//! ```
//! use colorful::field::RgbColorField;
//!
//! let field = RgbColorField::new("color").colors(["#ff0000", "#00ff00"]);
//! assert!(field.check().is_empty());
//! assert_eq!(field.resolve_default(), "#ff0000");
//! ```

use std::collections::BTreeMap;

use crate::checks::{CheckMessage, E001, E002, E003};
use crate::descriptor::ColorDescriptor;
use crate::forms::RgbColorFormField;
use crate::hex::DEFAULT_COLOR;
use crate::validators::{ValidationError, validate_rgb_hex};
use crate::widgets::ColorFieldWidget;

/// Import path recorded by [`RgbColorField::deconstruct`].
pub const FIELD_PATH: &str = "colorful.fields.RGBColorField";

/// Stored values are always `#rrggbb`.
pub const MAX_LENGTH: usize = 7;

/// The `colors` parameter of a field.
///
/// Only [`Colors::Sequence`] is a valid configuration. [`Colors::Scalar`]
/// exists so a host can hand over a non-sequence value and have
/// [`RgbColorField::check`] report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Colors {
    Sequence(Vec<String>),
    Scalar(String),
}

impl Colors {
    /// The palette, if this is a sequence.
    #[must_use]
    pub fn as_slice(&self) -> Option<&[String]> {
        match self {
            Self::Sequence(colors) => Some(colors),
            Self::Scalar(_) => None,
        }
    }
}

impl From<Vec<String>> for Colors {
    fn from(colors: Vec<String>) -> Self {
        Self::Sequence(colors)
    }
}

impl From<Vec<&str>> for Colors {
    fn from(colors: Vec<&str>) -> Self {
        Self::Sequence(colors.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Colors {
    fn from(colors: &[&str]) -> Self {
        Self::Sequence(colors.iter().map(|c| (*c).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Colors {
    fn from(colors: [&str; N]) -> Self {
        Self::Sequence(colors.iter().map(|c| (*c).to_string()).collect())
    }
}

impl From<&str> for Colors {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for Colors {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

/// A keyword argument value in a [`Deconstruction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KwargValue {
    Str(String),
    Bool(bool),
    List(Vec<String>),
}

/// Everything needed to rebuild a field: its name, import path and the
/// non-default keyword arguments it was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deconstruction {
    pub name: String,
    pub path: &'static str,
    pub kwargs: BTreeMap<&'static str, KwargValue>,
}

#[cfg(feature = "json")]
impl Deconstruction {
    /// Render as a JSON object `{"name", "path", "kwargs"}`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let kwargs: serde_json::Map<String, serde_json::Value> = self
            .kwargs
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    KwargValue::Str(s) => serde_json::Value::from(s.as_str()),
                    KwargValue::Bool(b) => serde_json::Value::from(*b),
                    KwargValue::List(items) => serde_json::Value::from(items.clone()),
                };
                ((*key).to_string(), value)
            })
            .collect();
        serde_json::json!({
            "name": self.name,
            "path": self.path,
            "kwargs": kwargs,
        })
    }
}

/// Field storing an RGB color as a `#rrggbb` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbColorField {
    name: String,
    verbose_name: Option<String>,
    colors: Option<Colors>,
    default: Option<String>,
    blank: bool,
}

impl RgbColorField {
    /// Create a field with no palette, no default, and blank values rejected.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            verbose_name: None,
            colors: None,
            default: None,
            blank: false,
        }
    }

    /// Restrict the field to a palette of allowed colors.
    #[must_use]
    pub fn colors(mut self, colors: impl Into<Colors>) -> Self {
        self.colors = Some(colors.into());
        self
    }

    /// Declare a default color.
    #[must_use]
    pub fn default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Allow empty values.
    #[must_use]
    pub fn blank(mut self, blank: bool) -> Self {
        self.blank = blank;
        self
    }

    #[must_use]
    pub fn verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
        self.verbose_name = Some(verbose_name.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn colors_param(&self) -> Option<&Colors> {
        self.colors.as_ref()
    }

    /// The palette, when `colors` is a sequence.
    #[must_use]
    pub fn palette(&self) -> Option<&[String]> {
        self.colors.as_ref().and_then(Colors::as_slice)
    }

    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// Always 7; not configurable.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        MAX_LENGTH
    }

    /// Label used as the `obj` of check messages.
    #[must_use]
    pub fn label(&self) -> String {
        format!("colorful.RGBColorField: {}", self.name)
    }

    /// Color used when a record has no stored value.
    ///
    /// First palette entry, then the declared default, then `#000000`.
    /// Empty entries are skipped.
    #[must_use]
    pub fn resolve_default(&self) -> &str {
        let resolved = self
            .palette()
            .and_then(<[String]>::first)
            .map(String::as_str)
            .filter(|c| !c.is_empty())
            .or_else(|| self.default.as_deref().filter(|d| !d.is_empty()))
            .unwrap_or(DEFAULT_COLOR);
        log::debug!(target: "colorful::field", "field {:?} resolved default {resolved}", self.name);
        resolved
    }

    /// Validate a value for storage and return it.
    ///
    /// # Errors
    ///
    /// `required` for an empty value on a non-blank field, `invalid` for a
    /// value that is not `#RRGGBB`.
    pub fn clean(&self, value: &str) -> Result<String, ValidationError> {
        if value.is_empty() {
            return if self.blank {
                Ok(String::new())
            } else {
                Err(ValidationError::required())
            };
        }
        validate_rgb_hex(value)?;
        Ok(value.to_string())
    }

    /// Report configuration problems.
    #[must_use]
    pub fn check(&self) -> Vec<CheckMessage> {
        let mut errors = Vec::new();
        match &self.colors {
            None => {}
            Some(Colors::Scalar(_)) => errors.push(
                CheckMessage::error("colors is not iterable", E001)
                    .hint("Define the colors param as list of strings.")
                    .obj(self.label()),
            ),
            Some(Colors::Sequence(colors)) if colors.is_empty() => errors.push(
                CheckMessage::error("colors is empty", E003)
                    .hint("Define at least one color or leave the colors param unset.")
                    .obj(self.label()),
            ),
            Some(Colors::Sequence(colors)) => {
                if let Some(bad) = colors.iter().find(|c| self.clean(c).is_err()) {
                    log::debug!(target: "colorful::field", "field {:?} has invalid color {bad:?}", self.name);
                    errors.push(
                        CheckMessage::error("colors item validation error", E002)
                            .hint("Each item of the colors param must be a valid color string itself.")
                            .obj(self.label()),
                    );
                }
            }
        }
        errors
    }

    /// Name, import path and non-default keyword arguments of this field.
    #[must_use]
    pub fn deconstruct(&self) -> Deconstruction {
        let mut kwargs = BTreeMap::new();
        match &self.colors {
            Some(Colors::Sequence(colors)) => {
                kwargs.insert("colors", KwargValue::List(colors.clone()));
            }
            Some(Colors::Scalar(value)) => {
                kwargs.insert("colors", KwargValue::Str(value.clone()));
            }
            None => {}
        }
        if let Some(default) = &self.default {
            kwargs.insert("default", KwargValue::Str(default.clone()));
        }
        if self.blank {
            kwargs.insert("blank", KwargValue::Bool(true));
        }
        if let Some(verbose_name) = &self.verbose_name {
            kwargs.insert("verbose_name", KwargValue::Str(verbose_name.clone()));
        }
        Deconstruction {
            name: self.name.clone(),
            path: FIELD_PATH,
            kwargs,
        }
    }

    /// Form field for editing this field's values.
    #[must_use]
    pub fn formfield(&self) -> RgbColorFormField {
        let widget = ColorFieldWidget::new().colors(self.palette().map(<[String]>::to_vec));
        let mut form_field = RgbColorFormField::new().required(!self.blank).widget(widget);
        if let Some(default) = &self.default {
            form_field = form_field.initial(default.clone());
        }
        if let Some(label) = &self.verbose_name {
            form_field = form_field.label(label.clone());
        }
        form_field
    }

    /// Attribute accessor that normalizes writes and resolves defaults on read.
    #[must_use]
    pub fn descriptor(&self) -> ColorDescriptor<'_> {
        ColorDescriptor::new(self)
    }

    /// Accessor with the older pass-through semantics; see [`ColorDescriptor::legacy`].
    #[must_use]
    pub fn legacy_descriptor(&self) -> ColorDescriptor<'_> {
        ColorDescriptor::legacy(self)
    }
}
