//! Template interpretation: wrap-mode prefixes, placeholder fields, and the
//! residual format string.
//!
//! A raw template optionally starts with a wrap-mode prefix (`wrap:` or
//! `nowrap:`), followed by free text containing `{{accessor type verb}}`
//! placeholders. Interpretation normalizes this into a [`ParsedTemplate`]:
//! the wrap mode, the ordered field list, and the text with every
//! placeholder token replaced in-place by its bare verb.

pub mod accessor;
pub mod placeholder;

use crate::error::{ErrforgeError, Result};

use accessor::Accessor;
use placeholder::PlaceholderScanner;

/// Whether a generated type may, must, or must not carry an underlying cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// A cause may be attached after construction (the default).
    Optional,
    /// No cause holder at all (`nowrap:` prefix).
    Forbidden,
    /// A cause is a mandatory constructor argument (`wrap:` prefix).
    Required,
}

/// A field extracted from one placeholder occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Root identifier of the accessor; names the declared member.
    pub name: String,
    /// Type expression as written in the template.
    pub ty: String,
    /// Format verb, including the leading `%`.
    pub verb: String,
    /// Full accessor chain used when reading the value for formatting.
    pub accessor: Accessor,
}

/// A declared struct member: one per distinct accessor root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub ty: String,
}

/// Literal/verb alternation of the message text, in template order.
///
/// The synthesizer works from this rather than re-scanning the residual
/// format string, which may contain literal `%` signs of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Bytes copied verbatim from the template.
    Literal(String),
    /// The bare verb standing in for a placeholder occurrence.
    Verb(String),
}

/// A normalized template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemplate {
    pub wrap: WrapMode,
    /// One entry per placeholder occurrence, in first-occurrence order.
    pub fields: Vec<Field>,
    /// Template text with each placeholder token replaced by its bare verb;
    /// every other byte is preserved.
    pub format: String,
    segments: Vec<Segment>,
}

impl ParsedTemplate {
    /// Interpret a raw template string.
    pub fn parse(template: &str) -> Result<Self> {
        let (wrap, rest) = match template {
            t if t.starts_with("wrap:") => (WrapMode::Required, &t["wrap:".len()..]),
            t if t.starts_with("nowrap:") => (WrapMode::Forbidden, &t["nowrap:".len()..]),
            t => (WrapMode::Optional, t),
        };

        let mut fields = Vec::new();
        let mut segments = Vec::new();
        let mut last = 0;
        for m in PlaceholderScanner::new(rest) {
            if m.span.start > last {
                segments.push(Segment::Literal(rest[last..m.span.start].to_string()));
            }
            let accessor = Accessor::parse(m.accessor)?;
            fields.push(Field {
                name: accessor.root.clone(),
                ty: m.ty.to_string(),
                verb: m.verb.to_string(),
                accessor,
            });
            segments.push(Segment::Verb(m.verb.to_string()));
            last = m.span.end;
        }
        if last < rest.len() {
            segments.push(Segment::Literal(rest[last..].to_string()));
        }

        let mut format = String::with_capacity(rest.len());
        for segment in &segments {
            match segment {
                Segment::Literal(s) | Segment::Verb(s) => format.push_str(s),
            }
        }

        Ok(Self {
            wrap,
            fields,
            format,
            segments,
        })
    }

    /// Declared members: one per distinct accessor root, in first-occurrence
    /// order. A root redeclared with a different type expression is fatal.
    pub fn members(&self) -> Result<Vec<Member>> {
        let mut members: Vec<Member> = Vec::new();
        for field in &self.fields {
            match members.iter().find(|m| m.name == field.name) {
                Some(m) if m.ty != field.ty => {
                    return Err(ErrforgeError::FieldTypeConflict {
                        name: field.name.clone(),
                        first: m.ty.clone(),
                        second: field.ty.clone(),
                    });
                }
                Some(_) => {}
                None => members.push(Member {
                    name: field.name.clone(),
                    ty: field.ty.clone(),
                }),
            }
        }
        Ok(members)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the generated type embeds the shared cause holder.
    pub fn wraps(&self) -> bool {
        self.wrap != WrapMode::Forbidden
    }
}
