//! Color-picker form widget.
//!
//! Renders an HTML `<input type="color">`. When the widget is configured with
//! a palette and the input has an `id`, a `<datalist>` of the allowed colors
//! is emitted after the input and linked through the `list` attribute.
//!
//! ```
//! use colorful::widgets::ColorFieldWidget;
//!
//! let widget = ColorFieldWidget::new().colors(vec!["#ff0000".to_string()]);
//! let html = widget.render("color", Some("#ff0000"), &[("id", "id_color")]);
//! assert!(html.contains(r#"list="datalist_for_id_color""#));
//! assert!(html.ends_with("</datalist>"));
//! ```

use std::fmt::Write as _;

/// Color-picker widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorFieldWidget {
    colors: Option<Vec<String>>,
    attrs: Vec<(String, String)>,
}

impl ColorFieldWidget {
    /// Create a widget with no palette and no extra attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the palette offered through the datalist.
    #[must_use]
    pub fn colors(mut self, colors: impl Into<Option<Vec<String>>>) -> Self {
        self.colors = colors.into();
        self
    }

    /// Add a default HTML attribute, rendered on every call.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_attr(&mut self.attrs, name.into(), value.into());
        self
    }

    /// The configured palette, if any.
    #[must_use]
    pub fn palette(&self) -> Option<&[String]> {
        self.colors.as_deref()
    }

    /// Render the widget as HTML.
    ///
    /// `attrs` override the widget's default attributes with the same name.
    #[must_use]
    pub fn render(&self, name: &str, value: Option<&str>, attrs: &[(&str, &str)]) -> String {
        let mut merged = self.attrs.clone();
        for (key, val) in attrs {
            set_attr(&mut merged, (*key).to_string(), (*val).to_string());
        }

        let datalist_id = match (&self.colors, lookup(&merged, "id")) {
            (Some(colors), Some(id)) if !colors.is_empty() => Some(format!("datalist_for_{id}")),
            _ => None,
        };

        let mut html = String::from(r#"<input type="color""#);
        push_attr(&mut html, "name", name);
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            push_attr(&mut html, "value", value);
        }
        for (key, val) in &merged {
            push_attr(&mut html, key, val);
        }
        if let Some(list_id) = &datalist_id {
            push_attr(&mut html, "list", list_id);
        }
        html.push('>');

        if let (Some(list_id), Some(colors)) = (&datalist_id, &self.colors) {
            let _ = write!(html, r#"<datalist id="{}">"#, escape(list_id));
            for color in colors {
                let _ = write!(html, r#"<option value="{}"></option>"#, escape(color));
            }
            html.push_str("</datalist>");
        }

        html
    }
}

fn set_attr(attrs: &mut Vec<(String, String)>, name: String, value: String) {
    if let Some(slot) = attrs.iter_mut().find(|(k, _)| *k == name) {
        slot.1 = value;
    } else {
        attrs.push((name, value));
    }
}

fn lookup<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

fn push_attr(html: &mut String, name: &str, value: &str) {
    let _ = write!(html, r#" {}="{}""#, escape(name), escape(value));
}

/// Escape text for use inside an HTML attribute value.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
