//! Name normalization for generated identifiers.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Characters in variable names that cannot appear in an identifier.
const REPLACED_CHARS: [char; 6] = ['.', ',', '[', ']', '(', ')'];

/// Normalize a scalar variable name into an accessor-name fragment.
///
/// Each of `. , [ ] ( )` becomes `_`. Idempotent.
pub fn normalize_variable_name(name: &str) -> String {
    name.chars()
        .map(|c| if REPLACED_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Strip every `.` from a model name.
pub fn sanitize_model_name(name: &str) -> String {
    name.chars().filter(|c| *c != '.').collect()
}

/// Whether `name` is a valid C/C++ identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_RE.is_match(name)
}

/// Escape a value for use inside a C++ string literal.
///
/// `\`, `"`, newline, carriage return and tab get their short escapes; any
/// other control character becomes a three-digit octal escape.
pub fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            _ => out.push(c),
        }
    }
    out
}
