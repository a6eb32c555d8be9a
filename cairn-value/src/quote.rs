// cairn-value - Identifier quoting
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Quoting of names and strings into literal syntax.
//!
//! A name that is a valid bareword is written as-is. Anything else is
//! single-quoted, with embedded `'` doubled. Names containing control
//! characters cannot survive single quotes, so they are double-quoted with
//! backslash escapes instead.

/// Quote `s` so that it reads back as the same string.
pub fn quote(s: &str) -> String {
    if is_bareword(s) {
        s.to_string()
    } else if s.chars().any(char::is_control) {
        double_quote(s)
    } else {
        single_quote(s)
    }
}

/// Check if a whole string can be written without quotes.
fn is_bareword(s: &str) -> bool {
    !s.is_empty() && !s.starts_with('~') && s.chars().all(is_bareword_char)
}

/// Check if a character can appear in a bareword.
fn is_bareword_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || (!c.is_ascii() && c.is_alphabetic())
        || matches!(
            c,
            '-' | '_' | '.' | '/' | ':' | '@' | '%' | '+' | ',' | '!' | '~'
        )
}

fn single_quote(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('\'');
    for c in s.chars() {
        if c == '\'' {
            result.push('\'');
        }
        result.push(c);
    }
    result.push('\'');
    result
}

fn double_quote(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            c if c.is_control() && c.is_ascii() => {
                result.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_control() => result.push_str(&format!("\\u{:04x}", c as u32)),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}
