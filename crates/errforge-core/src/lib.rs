//! Core library for the errforge code synthesizer.
//!
//! Turns error *specifications* — `(name, template)` pairs scanned out of
//! source by the `errforge` binary — into Rust declarations implementing
//! message formatting, optional cause-wrapping, and sentinel identity
//! testing.
//!
//! The pipeline: [`template`] interprets placeholder templates, [`naming`]
//! derives declaration names, [`synth::Generator`] emits the preamble and
//! one declaration group set per spec, and [`format`] pipes the result
//! through `rustfmt` on a best-effort basis.
//!
//! Source scanning and output delivery are external collaborators; this
//! crate consumes a plain ordered sequence of [`spec::ErrorSpec`]s plus one
//! [`spec::GeneratorConfig`] and produces a single text buffer.

pub mod error;
pub mod format;
pub mod naming;
pub mod spec;
pub mod synth;
pub mod template;
pub mod templates;
