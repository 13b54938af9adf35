//! Whitespace rules for form input.
//!
//! Form fields count U+FEFF (byte order mark) as whitespace and treat U+0085
//! (next line) as an ordinary character. Both `str::trim` and the regex `\s`
//! class use Unicode White_Space, which has it the other way round, so input
//! goes through these helpers instead.

/// Whether `c` is whitespace for form input.
pub fn is_input_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Trim leading and trailing form whitespace.
pub fn trim_input(s: &str) -> &str {
    s.trim_matches(is_input_whitespace)
}

/// Whether `s` is empty once trimmed.
pub fn is_blank(s: &str) -> bool {
    trim_input(s).is_empty()
}
