//! Best-effort formatting of synthesized text through `rustfmt`.
//!
//! Formatting quality is not the engine's responsibility. A missing or
//! failing formatter downgrades to the unformatted text with a warning; only
//! an empty buffer is fatal, since there is nothing to fall back to.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{ErrforgeError, Result};

/// Outcome of a formatting attempt.
#[derive(Debug, Clone)]
pub struct Formatted {
    /// Formatted text, or the original text when formatting failed.
    pub text: String,
    /// Present when formatting was skipped or failed.
    pub warning: Option<String>,
}

/// Pipe `src` through `rustfmt`, falling back to the unformatted text.
pub fn rustfmt(src: &str) -> Result<Formatted> {
    if src.is_empty() {
        return Err(ErrforgeError::EmptyOutput);
    }

    let binary = match which::which("rustfmt") {
        Ok(path) => path,
        Err(_) => {
            tracing::warn!("rustfmt not found in PATH; emitting unformatted output");
            return Ok(Formatted {
                text: src.to_string(),
                warning: Some("rustfmt not found in PATH".to_string()),
            });
        }
    };

    match run_rustfmt(&binary, src) {
        Ok(text) if !text.is_empty() => Ok(Formatted {
            text,
            warning: None,
        }),
        Ok(_) => {
            tracing::warn!("rustfmt produced empty output; emitting unformatted text");
            Ok(Formatted {
                text: src.to_string(),
                warning: Some("rustfmt produced empty output".to_string()),
            })
        }
        Err(reason) => {
            tracing::warn!("rustfmt failed: {reason}; emitting unformatted text");
            Ok(Formatted {
                text: src.to_string(),
                warning: Some(reason),
            })
        }
    }
}

fn run_rustfmt(binary: &Path, src: &str) -> std::result::Result<String, String> {
    let mut child = Command::new(binary)
        .args(["--edition", "2021"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| format!("failed to spawn rustfmt: {e}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(src.as_bytes())
            .map_err(|e| format!("failed to write to rustfmt: {e}"))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| format!("failed to wait for rustfmt: {e}"))?;

    if !output.status.success() {
        return Err(format!(
            "rustfmt exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_fatal() {
        assert!(matches!(rustfmt(""), Err(ErrforgeError::EmptyOutput)));
    }

    #[test]
    fn test_invalid_source_falls_back_with_warning() {
        // Whether rustfmt is installed or not, unparseable input must come
        // back unformatted with a warning attached.
        let src = "this is ] not rust [";
        let out = rustfmt(src).unwrap();
        assert_eq!(out.text, src);
        assert!(out.warning.is_some());
    }

    #[test]
    fn test_valid_source_is_never_empty() {
        let src = "fn main() {}\n";
        let out = rustfmt(src).unwrap();
        assert!(!out.text.is_empty());
    }
}
