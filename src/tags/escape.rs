/// Escape sequences used in field values, in escaping order.
///
/// The backslash must be escaped first and unescaped last. Given a backslash followed by a
/// tab, escaping in any other order yields `\\\\t` instead of `\\\t`.
const ESCAPES: [(&str, &str); 4] = [("\\", "\\\\"), ("\n", "\\n"), ("\r", "\\r"), ("\t", "\\t")];

/// Escape a field value for writing
pub fn escape(value: &str) -> String {
    ESCAPES.iter().fold(value.to_string(), |acc, (raw, escaped)| acc.replace(raw, escaped))
}

/// Unescape a field value read from a tag line
pub fn unescape(value: &str) -> String {
    ESCAPES.iter().rev().fold(value.to_string(), |acc, (raw, escaped)| acc.replace(escaped, raw))
}
