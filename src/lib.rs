//! # colorful
//!
//! An RGB color field: stores colors as `#rrggbb` strings, normalizes input,
//! validates format, reports configuration problems, and renders a
//! color-picker widget.
//!
//! ## Quick Start
//!
//! ```rust
//! use colorful::prelude::*;
//!
//! let field = RgbColorField::new("color").colors(["#ff0000", "#00ff00"]);
//! assert!(field.check().is_empty());
//!
//! let mut record = AttributeDict::new();
//! let color = field.descriptor();
//! assert_eq!(color.read(&record).unwrap().as_css_color(), "rgb(255, 0, 0)");
//!
//! color.set(&mut record, Some("#00FF00".into())).unwrap();
//! assert_eq!(record.get("color"), Some("#00ff00"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Color**: RGB value object, parsed from and rendered to hex
//! - **smart_hex**: normalization of a color or hex-like string
//! - **RgbColorField**: field configuration, checks and cleaning
//! - **ColorDescriptor**: typed attribute access over a `HostRecord`
//! - **ColorFieldWidget**: `<input type="color">` rendering

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod hex;
pub mod validators;
pub mod checks;
pub mod field;
pub mod descriptor;
pub mod forms;
pub mod widgets;
pub mod logging;
pub mod sync;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::checks::{CheckLevel, CheckMessage};
    pub use crate::color::{Color, ColorParseError, ColorTriplet};
    pub use crate::descriptor::{
        AttributeDict, ColorDescriptor, DescriptorError, HostRecord, MissingValue, WriteMode,
    };
    pub use crate::field::{Colors, Deconstruction, KwargValue, RgbColorField};
    pub use crate::forms::RgbColorFormField;
    pub use crate::hex::{ColorOrHex, DEFAULT_COLOR, smart_hex, smart_hex_or_default};
    pub use crate::validators::ValidationError;
    pub use crate::widgets::ColorFieldWidget;
}

// Re-export key types at crate root
pub use color::{Color, ColorParseError, ColorTriplet};
pub use descriptor::{ColorDescriptor, HostRecord};
pub use field::RgbColorField;
pub use hex::smart_hex;
