//! Naming policy: derive declaration names from a spec name.
//!
//! Pure functions of `(spec_name, make_public, suffix)`; no hidden state.

/// Derive the declared type name for a spec.
///
/// The first character's case follows `make_public`; if `suffix` is
/// non-empty and the remainder after the first character ends with it, that
/// tail is removed once.
pub fn type_name(spec_name: &str, make_public: bool, suffix: &str) -> String {
    let mut chars = spec_name.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };

    let mut out = String::with_capacity(spec_name.len());
    if make_public {
        out.extend(first.to_uppercase());
    } else {
        out.extend(first.to_lowercase());
    }

    let mut rest = chars.as_str();
    if !suffix.is_empty() {
        rest = rest.strip_suffix(suffix).unwrap_or(rest);
    }
    out.push_str(rest);
    out
}

/// Derive the constructor name: a `new`/`New` prefix plus the declared type
/// name rendered in title case.
pub fn constructor_name(type_name: &str, make_public: bool) -> String {
    let mut out = String::from(if make_public { "New" } else { "new" });
    let mut chars = type_name.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
    out
}
