//! Declaration synthesis: turns specifications into Rust source text.
//!
//! [`Generator`] owns the run configuration and the output buffer. A full
//! run is `generate`: the preamble first, then one declaration group set per
//! spec, in input order. Output is deterministic — for fixed inputs the text
//! is byte-identical across runs.

mod declarations;
mod preamble;
pub mod verbs;

use crate::error::Result;
use crate::spec::{ErrorSpec, GeneratorConfig};
use crate::templates::renderer::TemplateRenderer;

/// Synthesizes the output text for one run.
pub struct Generator {
    config: GeneratorConfig,
    renderer: TemplateRenderer,
    buf: String,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            renderer: TemplateRenderer::new(),
            buf: String::new(),
        }
    }

    /// Generate the complete output for `specs` under `config`.
    pub fn generate(config: GeneratorConfig, specs: &[ErrorSpec]) -> Result<String> {
        let mut g = Generator::new(config);
        g.preamble(specs)?;
        for spec in specs {
            g.emit_spec(spec)?;
        }
        Ok(g.finish())
    }

    /// Emit the shared preamble: header, cause holder, and either the
    /// chain-search declarations or the compatibility stub.
    pub fn preamble(&mut self, specs: &[ErrorSpec]) -> Result<()> {
        preamble::emit(self, specs)
    }

    /// Emit the declaration groups for a single spec.
    pub fn emit_spec(&mut self, spec: &ErrorSpec) -> Result<()> {
        declarations::emit(self, spec)
    }

    /// Consume the generator, returning the synthesized text.
    pub fn finish(self) -> String {
        self.buf
    }

    pub(crate) fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub(crate) fn renderer(&self) -> &TemplateRenderer {
        &self.renderer
    }

    /// Append one blank-line-separated section to the buffer.
    pub(crate) fn section(&mut self, text: &str) {
        if !self.buf.is_empty() {
            self.buf.push('\n');
        }
        self.buf.push_str(text);
        if !text.ends_with('\n') {
            self.buf.push('\n');
        }
    }
}
