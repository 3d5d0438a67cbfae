//! Form field for color input.
//!
//! [`RgbColorFormField::clean`] is the input-cleaning step: it trims the
//! submitted value, enforces `required`, validates the `#RRGGBB` format and
//! returns the canonical lowercase form.

use crate::hex::smart_hex;
use crate::validators::{ValidationError, validate_rgb_hex};
use crate::widgets::ColorFieldWidget;

pub use crate::validators::RGB_REGEX;

/// Form field accepting `#RRGGBB` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbColorFormField {
    required: bool,
    initial: Option<String>,
    label: Option<String>,
    widget: ColorFieldWidget,
}

impl Default for RgbColorFormField {
    fn default() -> Self {
        Self::new()
    }
}

impl RgbColorFormField {
    /// A required field with a palette-less widget.
    #[must_use]
    pub fn new() -> Self {
        Self {
            required: true,
            initial: None,
            label: None,
            widget: ColorFieldWidget::new(),
        }
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Value rendered when no data was submitted.
    #[must_use]
    pub fn initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = Some(initial.into());
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn widget(mut self, widget: ColorFieldWidget) -> Self {
        self.widget = widget;
        self
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub fn initial_value(&self) -> Option<&str> {
        self.initial.as_deref()
    }

    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn widget_ref(&self) -> &ColorFieldWidget {
        &self.widget
    }

    /// Clean submitted input.
    ///
    /// # Errors
    ///
    /// `required` for empty input on a required field, `invalid` for input
    /// that is not `#RRGGBB`.
    pub fn clean(&self, value: Option<&str>) -> Result<String, ValidationError> {
        let value = value.unwrap_or_default().trim();
        if value.is_empty() {
            return if self.required {
                Err(ValidationError::required())
            } else {
                Ok(String::new())
            };
        }
        validate_rgb_hex(value)?;
        smart_hex(value).map_err(|_| ValidationError::invalid())
    }

    /// Render the widget for `name` with the conventional `id_<name>` id.
    ///
    /// Falls back to the initial value when `value` is `None`.
    #[must_use]
    pub fn render(&self, name: &str, value: Option<&str>) -> String {
        let id = format!("id_{name}");
        let value = value.or(self.initial.as_deref());
        self.widget.render(name, value, &[("id", id.as_str())])
    }
}
