//! String-literal helpers shared by the parser and the emitter.
//!
//! The frontend keeps every literal as its raw source spelling (quotes and escapes included). Only
//! a few places need the decoded value, e.g. the import path `"fmt"` that becomes `#include <fmt.h>`.
//!
//! ## Examples
//! ```rust
//! use goc_core::strings::unquote;
//!
//! assert_eq!(unquote("\"fmt\"").unwrap(), "fmt");
//! assert_eq!(unquote("`C:\\path`").unwrap(), "C:\\path");
//! ```

use thiserror::Error;

/// Why a quoted literal could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnquoteError {
    #[error("literal is not a quoted string")]
    NotQuoted,

    #[error("newline in interpreted string literal")]
    Newline,

    #[error("unknown escape sequence `\\{0}`")]
    UnknownEscape(char),

    #[error("malformed escape sequence")]
    MalformedEscape,

    #[error("escape sequence is not a valid Unicode code point")]
    InvalidCodePoint,

    #[error("decoded literal is not valid UTF-8")]
    InvalidUtf8,
}

/// Decode an interpreted (`"..."`) or raw (`` `...` ``) string literal.
///
/// ## Notes
/// - Raw literals drop carriage returns and keep backslashes verbatim.
/// - Byte escapes (`\x`, octal) are collected as bytes and must form valid UTF-8 as a whole.
pub fn unquote(raw: &str) -> Result<String, UnquoteError> {
    if raw.len() >= 2 && raw.starts_with('`') && raw.ends_with('`') {
        return Ok(raw[1..raw.len() - 1].chars().filter(|&c| c != '\r').collect());
    }
    if raw.len() < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return Err(UnquoteError::NotQuoted);
    }

    let body = &raw[1..raw.len() - 1];
    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '\n' => return Err(UnquoteError::Newline),
            '"' => return Err(UnquoteError::NotQuoted),
            '\\' => {
                let esc = chars.next().ok_or(UnquoteError::MalformedEscape)?;
                match esc {
                    'a' => out.push(0x07),
                    'b' => out.push(0x08),
                    'f' => out.push(0x0c),
                    'n' => out.push(b'\n'),
                    'r' => out.push(b'\r'),
                    't' => out.push(b'\t'),
                    'v' => out.push(0x0b),
                    '\\' => out.push(b'\\'),
                    '"' => out.push(b'"'),
                    'x' => {
                        let value = take_digits(&mut chars, 2, 16)?;
                        out.push(value as u8);
                    }
                    '0'..='7' => {
                        let rest = take_digits(&mut chars, 2, 8)?;
                        let value = (esc as u32 - '0' as u32) * 64 + rest;
                        if value > 0xff {
                            return Err(UnquoteError::MalformedEscape);
                        }
                        out.push(value as u8);
                    }
                    'u' | 'U' => {
                        let width = if esc == 'u' { 4 } else { 8 };
                        let value = take_digits(&mut chars, width, 16)?;
                        let decoded = char::from_u32(value).ok_or(UnquoteError::InvalidCodePoint)?;
                        let mut buf = [0u8; 4];
                        out.extend_from_slice(decoded.encode_utf8(&mut buf).as_bytes());
                    }
                    other => return Err(UnquoteError::UnknownEscape(other)),
                }
            }
            _ => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    String::from_utf8(out).map_err(|_| UnquoteError::InvalidUtf8)
}

/// Consume exactly `count` digits in `radix` and return their value.
fn take_digits(chars: &mut std::str::Chars<'_>, count: usize, radix: u32) -> Result<u32, UnquoteError> {
    let mut value = 0u32;
    for _ in 0..count {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(radix))
            .ok_or(UnquoteError::MalformedEscape)?;
        value = value * radix + digit;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquote_plain() {
        assert_eq!(unquote("\"os\"").unwrap(), "os");
        assert_eq!(unquote("\"net/http\"").unwrap(), "net/http");
    }

    #[test]
    fn test_unquote_empty() {
        assert_eq!(unquote("\"\"").unwrap(), "");
        assert_eq!(unquote("``").unwrap(), "");
    }

    #[test]
    fn test_unquote_escapes() {
        assert_eq!(unquote(r#""a\tb\n""#).unwrap(), "a\tb\n");
        assert_eq!(unquote(r#""\x41\101\u00e9""#).unwrap(), "AAé");
        assert_eq!(unquote(r#""say \"hi\"""#).unwrap(), "say \"hi\"");
    }

    #[test]
    fn test_unquote_raw_keeps_backslashes() {
        assert_eq!(unquote("`a\\nb`").unwrap(), "a\\nb");
        assert_eq!(unquote("`line\r\n`").unwrap(), "line\n");
    }

    #[test]
    fn test_unquote_rejects_unquoted() {
        assert_eq!(unquote("fmt"), Err(UnquoteError::NotQuoted));
        assert_eq!(unquote("\""), Err(UnquoteError::NotQuoted));
        assert_eq!(unquote("'a'"), Err(UnquoteError::NotQuoted));
    }

    #[test]
    fn test_unquote_rejects_bad_escapes() {
        assert_eq!(unquote(r#""\q""#), Err(UnquoteError::UnknownEscape('q')));
        assert_eq!(unquote(r#""\x4""#), Err(UnquoteError::MalformedEscape));
        assert_eq!(unquote(r#""\uD800""#), Err(UnquoteError::InvalidCodePoint));
        assert_eq!(unquote(r#""\xff""#), Err(UnquoteError::InvalidUtf8));
    }

    #[test]
    fn test_unquote_rejects_newline() {
        assert_eq!(unquote("\"a\nb\""), Err(UnquoteError::Newline));
    }
}
