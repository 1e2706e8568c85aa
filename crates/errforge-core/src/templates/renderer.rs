//! Handlebars-based renderer for the preamble scaffolds.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled:
//! any `{{variable}}` referenced in a scaffold must be present in the data
//! context, otherwise rendering returns an error. A silently missing
//! variable would generate code that fails to compile with confusing errors
//! far from the actual cause.
//!
//! HTML escaping is disabled — the output is Rust source, and the default
//! escape function would mangle `&`, `<`, and quote characters.

use handlebars::{no_escape, Handlebars};
use serde_json::Value;

use crate::error::{ErrforgeError, Result};

/// Scaffold renderer used by the preamble synthesizer.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(no_escape);
        Self { hbs }
    }

    /// Render a scaffold string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| ErrforgeError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
