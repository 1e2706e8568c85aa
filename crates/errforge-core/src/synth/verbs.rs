//! Mapping from `%` format verbs to Rust format specs, and assembly of the
//! emitted message format string.

use crate::template::Segment;

/// Translate one `%` verb into a Rust `{}` format spec.
///
/// The verb body is `[#+]*[0-9]*('.'digits)?letters`; the final character
/// selects the presentation and the flags carry over where Rust has an
/// equivalent. Anything unrecognized falls back to plain display.
pub fn rust_spec(verb: &str) -> String {
    let mut rest = verb.strip_prefix('%').unwrap_or(verb);

    let mut alternate = false;
    let mut sign = false;
    loop {
        if let Some(r) = rest.strip_prefix('#') {
            alternate = true;
            rest = r;
        } else if let Some(r) = rest.strip_prefix('+') {
            sign = true;
            rest = r;
        } else {
            break;
        }
    }

    let width_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let (width, rest) = rest.split_at(width_len);

    let (precision, rest) = match rest.strip_prefix('.') {
        Some(r) => {
            let n = r.bytes().take_while(u8::is_ascii_digit).count();
            (&r[..n], &r[n..])
        }
        None => ("", rest),
    };

    let letter = rest.chars().next_back().unwrap_or('v');
    let ty = match letter {
        'q' => "?",
        'x' => "x",
        'X' => "X",
        'o' => "o",
        'b' => "b",
        'e' => "e",
        'E' => "E",
        'p' => "p",
        'v' if alternate => "?",
        _ => "",
    };

    let mut inner = String::new();
    if sign {
        inner.push('+');
    }
    if alternate && !ty.is_empty() {
        inner.push('#');
    }
    inner.push_str(width);
    if !precision.is_empty() {
        inner.push('.');
        inner.push_str(precision);
    }
    inner.push_str(ty);

    if inner.is_empty() {
        "{}".to_string()
    } else {
        format!("{{:{inner}}}")
    }
}

/// Build the Rust format-string body for a message: literal segments with
/// braces doubled, verbs mapped to format specs.
pub fn display_format(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(s) => {
                for c in s.chars() {
                    match c {
                        '{' => out.push_str("{{"),
                        '}' => out.push_str("}}"),
                        _ => out.push(c),
                    }
                }
            }
            Segment::Verb(v) => out.push_str(&rust_spec(v)),
        }
    }
    out
}

/// Quote a string as a Rust string literal.
pub fn quote_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{{{:x}}}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_verbs() {
        assert_eq!(rust_spec("%v"), "{}");
        assert_eq!(rust_spec("%s"), "{}");
        assert_eq!(rust_spec("%d"), "{}");
        assert_eq!(rust_spec("%f"), "{}");
        assert_eq!(rust_spec("%t"), "{}");
    }

    #[test]
    fn test_quoted_verb_maps_to_debug() {
        assert_eq!(rust_spec("%q"), "{:?}");
    }

    #[test]
    fn test_radix_verbs() {
        assert_eq!(rust_spec("%x"), "{:x}");
        assert_eq!(rust_spec("%X"), "{:X}");
        assert_eq!(rust_spec("%o"), "{:o}");
        assert_eq!(rust_spec("%b"), "{:b}");
    }

    #[test]
    fn test_alternate_flag() {
        assert_eq!(rust_spec("%#x"), "{:#x}");
        assert_eq!(rust_spec("%#v"), "{:#?}");
        // No Rust alternate form for plain display.
        assert_eq!(rust_spec("%#d"), "{}");
    }

    #[test]
    fn test_sign_width_and_precision() {
        assert_eq!(rust_spec("%+d"), "{:+}");
        assert_eq!(rust_spec("%.2f"), "{:.2}");
        assert_eq!(rust_spec("%6.2f"), "{:6.2}");
    }

    #[test]
    fn test_unknown_verb_falls_back_to_display() {
        assert_eq!(rust_spec("%z"), "{}");
    }

    #[test]
    fn test_display_format_doubles_literal_braces() {
        let segments = [
            Segment::Literal("map {".to_string()),
            Segment::Verb("%d".to_string()),
            Segment::Literal("}".to_string()),
        ];
        assert_eq!(display_format(&segments), "map {{{}}}");
    }

    #[test]
    fn test_display_format_keeps_literal_percent() {
        let segments = [
            Segment::Literal("100% of ".to_string()),
            Segment::Verb("%d".to_string()),
        ];
        assert_eq!(display_format(&segments), "100% of {}");
    }

    #[test]
    fn test_quote_str_escapes() {
        assert_eq!(quote_str("plain"), "\"plain\"");
        assert_eq!(quote_str("a \"b\""), "\"a \\\"b\\\"\"");
        assert_eq!(quote_str("a\nb\tc"), "\"a\\nb\\tc\"");
        assert_eq!(quote_str("back\\slash"), "\"back\\\\slash\"");
    }
}
