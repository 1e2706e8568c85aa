//! Hand-written scanner for `{{accessor type verb}}` placeholder tokens.
//!
//! Matching is textual, not full-syntax parsing: each captured field only has
//! to fit a loose character class, so a superficially well-formed accessor
//! like `a..b` is still matched here and rejected later by the strict parser
//! in [`super::accessor`]. Non-matching text is left untouched.

use std::ops::Range;

/// One recognized placeholder token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMatch<'a> {
    /// Accessor expression text (first field).
    pub accessor: &'a str,
    /// Type expression text (second field).
    pub ty: &'a str,
    /// Format verb, including the leading `%` (third field).
    pub verb: &'a str,
    /// Byte range of the whole `{{...}}` token in the scanned text.
    pub span: Range<usize>,
}

/// Cursor-based scanner producing placeholder matches in text order.
///
/// A candidate that fails mid-token is not a placeholder; scanning resumes
/// one byte after the candidate's opening brace, so overlapping candidates
/// behave like leftmost textual matching.
pub struct PlaceholderScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> PlaceholderScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Try to match a complete placeholder token starting at `start`.
    fn match_at(&self, start: usize) -> Option<PlaceholderMatch<'a>> {
        let bytes = self.text.as_bytes();
        debug_assert!(self.text[start..].starts_with("{{"));
        let mut i = start + 2;

        let accessor_start = i;
        while i < bytes.len() && is_accessor_byte(bytes[i]) {
            i += 1;
        }
        if i == accessor_start || bytes.get(i) != Some(&b' ') {
            return None;
        }
        let accessor = &self.text[accessor_start..i];
        i += 1;

        let ty_start = i;
        if bytes.get(i) == Some(&b'*') {
            i += 1;
        }
        let ty_body = i;
        while i < bytes.len() && is_type_byte(bytes[i]) {
            i += 1;
        }
        if i == ty_body || bytes.get(i) != Some(&b' ') {
            return None;
        }
        let ty = &self.text[ty_start..i];
        i += 1;

        let verb_start = i;
        if bytes.get(i) != Some(&b'%') {
            return None;
        }
        i += 1;
        let verb_body = i;
        while i < bytes.len() && is_verb_byte(bytes[i]) {
            i += 1;
        }
        if i == verb_body || !self.text[i..].starts_with("}}") {
            return None;
        }
        let verb = &self.text[verb_start..i];

        Some(PlaceholderMatch {
            accessor,
            ty,
            verb,
            span: start..i + 2,
        })
    }
}

impl<'a> Iterator for PlaceholderScanner<'a> {
    type Item = PlaceholderMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(off) = self.text[self.pos..].find("{{") {
            let start = self.pos + off;
            match self.match_at(start) {
                Some(m) => {
                    self.pos = m.span.end;
                    return Some(m);
                }
                None => self.pos = start + 1,
            }
        }
        self.pos = self.text.len();
        None
    }
}

fn is_accessor_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'[' | b']')
}

fn is_type_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.')
}

fn is_verb_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'#' | b'.' | b'+')
}
