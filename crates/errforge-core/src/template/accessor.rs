//! Strict parsing of placeholder accessor expressions.
//!
//! The grammar is `ident ('.' ident | '[' digits ']')*`. The scanner only
//! checks a loose character class, so text that reaches this parser can
//! still be malformed; that is a fatal condition for the whole run.

use std::fmt;

use crate::error::{ErrforgeError, Result};

/// One step in an accessor chain beyond the root identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `.name` member access.
    Member(String),
    /// `[index]` element access.
    Index(u64),
}

/// A parsed accessor expression: the root identifier plus its steps.
///
/// Only the root names a declared member; the full chain is used when
/// reading the value for formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub root: String,
    pub steps: Vec<Step>,
}

impl Accessor {
    /// Parse the full accessor grammar; any deviation is fatal.
    pub fn parse(expr: &str) -> Result<Self> {
        let malformed = |reason: &str| ErrforgeError::MalformedAccessor {
            expr: expr.to_string(),
            reason: reason.to_string(),
        };

        let root_len = ident_len(expr);
        if root_len == 0 {
            return Err(malformed("expected identifier"));
        }
        let root = expr[..root_len].to_string();

        let mut steps = Vec::new();
        let bytes = expr.as_bytes();
        let mut i = root_len;
        while i < bytes.len() {
            match bytes[i] {
                b'.' => {
                    let len = ident_len(&expr[i + 1..]);
                    if len == 0 {
                        return Err(malformed("expected identifier after `.`"));
                    }
                    steps.push(Step::Member(expr[i + 1..i + 1 + len].to_string()));
                    i += 1 + len;
                }
                b'[' => {
                    let rest = &expr[i + 1..];
                    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
                    if digits == 0 {
                        return Err(malformed("expected digits after `[`"));
                    }
                    if rest.as_bytes().get(digits) != Some(&b']') {
                        return Err(malformed("unclosed index"));
                    }
                    let index = rest[..digits]
                        .parse::<u64>()
                        .map_err(|_| malformed("index out of range"))?;
                    steps.push(Step::Index(index));
                    i += 1 + digits + 1;
                }
                _ => return Err(malformed("unexpected character")),
            }
        }

        Ok(Accessor { root, steps })
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)?;
        for step in &self.steps {
            match step {
                Step::Member(name) => write!(f, ".{name}")?,
                Step::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Length of the leading identifier (`[A-Za-z_][A-Za-z0-9_]*`), 0 if none.
fn ident_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return 0,
    }
    bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count()
}
