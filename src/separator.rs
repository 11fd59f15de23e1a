//! Decoding of the `--separator` flag.
//!
//! The value is read as the body of a double-quoted string literal, so users
//! can pass `\n`, `\t`, `\x1e` and friends from a shell that does not expand
//! them itself.

use std::str::Chars;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeparatorError {
    #[error("unescaped '\"' in separator")]
    UnescapedQuote,
    #[error("literal newline in separator, use '\\n'")]
    Newline,
    #[error("separator ends with an incomplete escape sequence")]
    Truncated,
    #[error("unknown escape sequence '\\{0}'")]
    UnknownEscape(char),
    #[error("invalid digit '{0}' in escape sequence")]
    InvalidDigit(char),
    #[error("escape value {0:#x} is out of range")]
    OutOfRange(u32),
}

/// Decodes escape sequences in `raw` into the bytes written between tokens.
///
/// A lone newline, the default separator, is taken as is.
pub fn unescape(raw: &str) -> Result<Vec<u8>, SeparatorError> {
    if raw == "\n" {
        return Ok(b"\n".to_vec());
    }

    let mut out = Vec::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Err(SeparatorError::UnescapedQuote),
            '\n' => return Err(SeparatorError::Newline),
            '\\' => decode_escape(&mut chars, &mut out)?,
            c => push_char(&mut out, c),
        }
    }
    Ok(out)
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

fn decode_escape(chars: &mut Chars<'_>, out: &mut Vec<u8>) -> Result<(), SeparatorError> {
    let c = chars.next().ok_or(SeparatorError::Truncated)?;
    match c {
        'a' => out.push(0x07),
        'b' => out.push(0x08),
        'f' => out.push(0x0c),
        'n' => out.push(b'\n'),
        'r' => out.push(b'\r'),
        't' => out.push(b'\t'),
        'v' => out.push(0x0b),
        '\\' => out.push(b'\\'),
        '"' => out.push(b'"'),
        'x' => out.push(byte(read_digits(chars, 2, 16, 0)?)?),
        '0'..='7' => {
            let first = c.to_digit(8).unwrap_or_default();
            out.push(byte(read_digits(chars, 2, 8, first)?)?);
        }
        'u' => push_char(out, code_point(read_digits(chars, 4, 16, 0)?)?),
        'U' => push_char(out, code_point(read_digits(chars, 8, 16, 0)?)?),
        other => return Err(SeparatorError::UnknownEscape(other)),
    }
    Ok(())
}

/// Reads exactly `count` digits in `radix`, continuing from `value`.
fn read_digits(
    chars: &mut Chars<'_>,
    count: usize,
    radix: u32,
    mut value: u32,
) -> Result<u32, SeparatorError> {
    for _ in 0..count {
        let c = chars.next().ok_or(SeparatorError::Truncated)?;
        let digit = c.to_digit(radix).ok_or(SeparatorError::InvalidDigit(c))?;
        value = value * radix + digit;
    }
    Ok(value)
}

fn byte(value: u32) -> Result<u8, SeparatorError> {
    u8::try_from(value).map_err(|_| SeparatorError::OutOfRange(value))
}

fn code_point(value: u32) -> Result<char, SeparatorError> {
    char::from_u32(value).ok_or(SeparatorError::OutOfRange(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_newline() {
        assert_eq!(unescape("\n").unwrap(), b"\n");
    }

    #[test]
    fn test_plain_separators() {
        assert_eq!(unescape(",").unwrap(), b",");
        assert_eq!(unescape("").unwrap(), b"");
        assert_eq!(unescape(" | ").unwrap(), b" | ");
        assert_eq!(unescape("é").unwrap(), "é".as_bytes());
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(unescape(r"\n").unwrap(), b"\n");
        assert_eq!(unescape(r"\t").unwrap(), b"\t");
        assert_eq!(unescape(r"\r\n").unwrap(), b"\r\n");
        assert_eq!(unescape(r"a\\b").unwrap(), b"a\\b");
        assert_eq!(unescape(r#"\""#).unwrap(), b"\"");
        assert_eq!(unescape(r"\a\b\f\v").unwrap(), [0x07, 0x08, 0x0c, 0x0b]);
    }

    #[test]
    fn test_numeric_escapes() {
        assert_eq!(unescape(r"\x41").unwrap(), b"A");
        assert_eq!(unescape(r"\xff").unwrap(), [0xff]);
        assert_eq!(unescape(r"\101").unwrap(), b"A");
        assert_eq!(unescape(r"\000").unwrap(), [0]);
        assert_eq!(unescape(r"\u00e9").unwrap(), "é".as_bytes());
        assert_eq!(unescape(r"\U0001F3B2").unwrap(), "🎲".as_bytes());
    }

    #[test]
    fn test_malformed_separators() {
        assert_eq!(unescape(r"\"), Err(SeparatorError::Truncated));
        assert_eq!(unescape(r"\x4"), Err(SeparatorError::Truncated));
        assert_eq!(unescape(r"\q"), Err(SeparatorError::UnknownEscape('q')));
        assert_eq!(unescape(r"\'"), Err(SeparatorError::UnknownEscape('\'')));
        assert_eq!(unescape(r"\xzz"), Err(SeparatorError::InvalidDigit('z')));
        assert_eq!(unescape(r"\18"), Err(SeparatorError::InvalidDigit('8')));
        assert_eq!(unescape(r"\777"), Err(SeparatorError::OutOfRange(0o777)));
        assert_eq!(unescape(r"\ud800"), Err(SeparatorError::OutOfRange(0xd800)));
        assert_eq!(unescape("a\"b"), Err(SeparatorError::UnescapedQuote));
        assert_eq!(unescape("a\nb"), Err(SeparatorError::Newline));
    }
}
