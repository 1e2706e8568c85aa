//! Unified error types for the errforge toolkit.

use thiserror::Error;

/// All errors that can occur during an errforge run.
#[derive(Error, Debug)]
pub enum ErrforgeError {
    // --- Template parsing ---

    /// A placeholder accessor superficially matched the token shape but is
    /// not a valid accessor expression.
    #[error("malformed placeholder accessor `{expr}`: {reason}")]
    MalformedAccessor { expr: String, reason: String },

    /// Two placeholders share a root identifier but declare different types.
    #[error("conflicting types for field `{name}`: `{first}` vs `{second}`")]
    FieldTypeConflict {
        name: String,
        first: String,
        second: String,
    },

    // --- Synthesis ---

    /// Preamble scaffold rendering failed (invalid template or missing variable).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Formatting ---

    /// The synthesized buffer is empty; there is nothing to format or write.
    #[error("generated output is empty")]
    EmptyOutput,

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, ErrforgeError>`.
pub type Result<T> = std::result::Result<T, ErrforgeError>;
