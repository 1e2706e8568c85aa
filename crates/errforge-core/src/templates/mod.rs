//! Embedded scaffolds for the generated-file preamble.
//!
//! Scaffolds are embedded into the binary at compile-time via
//! [`include_str!`] in the [`embedded`] module, then rendered at runtime
//! with Handlebars via the [`renderer::TemplateRenderer`].
//!
//! These are *output* scaffolds — fixed Rust declarations with a few
//! substitution points — and have nothing to do with the `{{accessor type
//! verb}}` placeholder language interpreted by [`crate::template`].

pub mod embedded;
pub mod renderer;
