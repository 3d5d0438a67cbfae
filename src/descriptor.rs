//! Typed attribute access for color fields.
//!
//! A [`ColorDescriptor`] sits between a host record's raw attribute storage
//! and its users: reads always produce a fresh [`Color`], writes always go
//! through normalization. Two historical behaviors are kept as explicit
//! configurations rather than merged:
//!
//! | Mode | Write | Read of an unset slot |
//! |------|-------|-----------------------|
//! | [`ColorDescriptor::new`] | normalize, empty becomes `#000000` | resolve default |
//! | [`ColorDescriptor::legacy`] | store as given | error |
//!
//! ```
//! use colorful::descriptor::AttributeDict;
//! use colorful::field::RgbColorField;
//!
//! let field = RgbColorField::new("color").colors(["#ff0000", "#00ff00"]);
//! let color = field.descriptor();
//! let mut record = AttributeDict::new();
//!
//! assert_eq!(color.read(&record).unwrap().hex(), "#ff0000");
//!
//! color.set(&mut record, Some("#00F".into())).unwrap();
//! assert_eq!(record.get("color"), Some("#0000ff"));
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::color::{Color, ColorParseError};
use crate::field::RgbColorField;
use crate::hex::{ColorOrHex, smart_hex_or_default};
use crate::validators::is_rgb_hex;

/// Named raw attribute storage on a record.
pub trait HostRecord {
    /// Raw stored string for `name`, if any.
    fn raw_value(&self, name: &str) -> Option<&str>;

    /// Replace the raw stored string for `name`. `None` clears it.
    fn set_raw_value(&mut self, name: &str, value: Option<String>);

    /// Name of the record type, used in class-level access errors.
    #[must_use]
    fn type_name() -> &'static str
    where
        Self: Sized,
    {
        short_type_name::<Self>()
    }
}

/// Unqualified type name, without generic parameters.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// A `HashMap`-backed record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeDict {
    values: HashMap<String, String>,
}

impl AttributeDict {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }
}

impl HostRecord for AttributeDict {
    fn raw_value(&self, name: &str) -> Option<&str> {
        self.get(name)
    }

    fn set_raw_value(&mut self, name: &str, value: Option<String>) {
        match value {
            Some(value) => {
                self.values.insert(name.to_string(), value);
            }
            None => {
                self.values.remove(name);
            }
        }
    }
}

/// How writes are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WriteMode {
    /// Normalize through `smart_hex`; a missing or empty value stores `#000000`.
    #[default]
    Normalize,
    /// A `Color` stores its hex string, anything else is stored unmodified.
    PassThrough,
}

/// What a read does when the slot is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MissingValue {
    /// Use the field's palette head, then its default, then `#000000`.
    #[default]
    ResolveDefault,
    /// Fail with [`DescriptorError::Unset`].
    Error,
}

/// Error from a descriptor read or write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// Read without a record instance.
    ClassAccess { field: String, owner: &'static str },
    /// Read of an empty slot under [`MissingValue::Error`].
    Unset { field: String },
    /// The value could not be interpreted as a hex color.
    Parse {
        field: String,
        source: ColorParseError,
    },
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassAccess { field, owner } => write!(
                f,
                "The '{field}' attribute can only be accessed from {owner} instances."
            ),
            Self::Unset { field } => write!(f, "The '{field}' attribute has no value."),
            Self::Parse { field, source } => {
                write!(f, "Invalid value for the '{field}' attribute: {source}")
            }
        }
    }
}

impl std::error::Error for DescriptorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Coercing accessor for one color field.
#[derive(Debug, Clone, Copy)]
pub struct ColorDescriptor<'f> {
    field: &'f RgbColorField,
    write_mode: WriteMode,
    missing: MissingValue,
}

impl<'f> ColorDescriptor<'f> {
    /// Normalizing writes, defaults resolved on read.
    #[must_use]
    pub fn new(field: &'f RgbColorField) -> Self {
        Self {
            field,
            write_mode: WriteMode::Normalize,
            missing: MissingValue::ResolveDefault,
        }
    }

    /// Pass-through writes, unset reads fail.
    #[must_use]
    pub fn legacy(field: &'f RgbColorField) -> Self {
        Self {
            field,
            write_mode: WriteMode::PassThrough,
            missing: MissingValue::Error,
        }
    }

    #[must_use]
    pub fn write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    #[must_use]
    pub fn missing_value(mut self, missing: MissingValue) -> Self {
        self.missing = missing;
        self
    }

    #[must_use]
    pub fn field(&self) -> &'f RgbColorField {
        self.field
    }

    /// Read the attribute.
    ///
    /// `None` stands for access on the record type itself and always fails.
    ///
    /// # Errors
    ///
    /// - `ClassAccess` when `instance` is `None`
    /// - `Unset` for an empty slot under [`MissingValue::Error`]
    /// - `Parse` when the stored value is not a hex color
    pub fn get<R: HostRecord>(&self, instance: Option<&R>) -> Result<Color, DescriptorError> {
        let Some(instance) = instance else {
            return Err(DescriptorError::ClassAccess {
                field: self.field.name().to_string(),
                owner: R::type_name(),
            });
        };

        let hex = match instance.raw_value(self.field.name()).filter(|v| !v.is_empty()) {
            Some(raw) => raw,
            None => match self.missing {
                MissingValue::ResolveDefault => self.field.resolve_default(),
                MissingValue::Error => {
                    return Err(DescriptorError::Unset {
                        field: self.field.name().to_string(),
                    });
                }
            },
        };

        Color::from_hex(hex).map_err(|source| self.parse_error(source))
    }

    /// Read the attribute from a record instance.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get), minus `ClassAccess`.
    pub fn read<R: HostRecord>(&self, instance: &R) -> Result<Color, DescriptorError> {
        self.get(Some(instance))
    }

    /// Write the attribute.
    ///
    /// Nothing is stored when an error is returned.
    ///
    /// # Errors
    ///
    /// `Parse` when normalizing writes receive a string that is not a hex color.
    pub fn set<R: HostRecord>(
        &self,
        instance: &mut R,
        value: Option<ColorOrHex<'_>>,
    ) -> Result<(), DescriptorError> {
        let name = self.field.name();
        let stored = match self.write_mode {
            WriteMode::Normalize => {
                Some(smart_hex_or_default(value).map_err(|source| self.parse_error(source))?)
            }
            WriteMode::PassThrough => {
                let raw = value.map(|v| match v {
                    ColorOrHex::Color(color) => color.hex(),
                    ColorOrHex::Hex(hex) => hex.to_string(),
                });
                if let Some(raw) = raw.as_deref().filter(|r| !is_rgb_hex(r)) {
                    log::warn!(target: "colorful::descriptor", "storing unnormalized value {raw:?} in {name:?}");
                }
                raw
            }
        };
        instance.set_raw_value(name, stored);
        Ok(())
    }

    /// Write a missing value.
    ///
    /// # Errors
    ///
    /// Same as [`set`](Self::set).
    pub fn clear<R: HostRecord>(&self, instance: &mut R) -> Result<(), DescriptorError> {
        self.set(instance, None)
    }

    fn parse_error(&self, source: ColorParseError) -> DescriptorError {
        DescriptorError::Parse {
            field: self.field.name().to_string(),
            source,
        }
    }
}
