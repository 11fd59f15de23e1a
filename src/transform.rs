use base64::{engine::general_purpose, Engine as _};
use strum::{Display, EnumString};

use crate::token::Token;

/// Line width used by `--block` unless `--blocksize` says otherwise.
pub const DEFAULT_BLOCK_SIZE: usize = 65;

/// Case transform selected with `--mangle`.
///
/// Matched case-insensitively; values that do not parse disable mangling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum Mangle {
    #[strum(to_string = "UC")]
    Upper,
    #[strum(to_string = "LC")]
    Lower,
}

impl Mangle {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Maps each symbol to exactly one symbol, so token length is kept.
    ///
    /// Characters whose case mapping expands (`ß` to `SS`) stay as they are.
    /// Raw bytes have no code points, so they are mapped as ASCII.
    #[must_use]
    pub fn apply(self, token: Token) -> Token {
        match (self, token) {
            (Self::Upper, Token::Text(text)) => {
                Token::Text(text.chars().map(|c| single(c, c.to_uppercase())).collect())
            }
            (Self::Lower, Token::Text(text)) => {
                Token::Text(text.chars().map(|c| single(c, c.to_lowercase())).collect())
            }
            (Self::Upper, Token::Raw(bytes)) => Token::Raw(bytes.to_ascii_uppercase()),
            (Self::Lower, Token::Raw(bytes)) => Token::Raw(bytes.to_ascii_lowercase()),
        }
    }
}

fn single(c: char, mut mapped: impl Iterator<Item = char>) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(m), None) => m,
        _ => c,
    }
}

/// Standard padded base64 of the token's bytes.
#[must_use]
pub fn encode_base64(token: &Token) -> Token {
    Token::Text(general_purpose::STANDARD.encode(token.as_bytes()))
}

/// Re-flows `s` into lines of `width` characters.
///
/// A line break follows every `width`-th character except the last one, so
/// the result never ends in a newline. A width of zero leaves `s` untouched.
#[must_use]
pub fn blockstring(s: &str, width: usize) -> String {
    if width == 0 {
        return s.to_owned();
    }
    let last = s.chars().count().saturating_sub(1);
    let mut buffer = String::with_capacity(s.len() + s.len() / width);
    for (i, c) in s.chars().enumerate() {
        buffer.push(c);
        if i % width == width - 1 && i != last {
            buffer.push('\n');
        }
    }
    buffer
}

fn block_bytes(bytes: &[u8], width: usize) -> Vec<u8> {
    if width == 0 {
        return bytes.to_vec();
    }
    let mut buffer = Vec::with_capacity(bytes.len() + bytes.len() / width);
    for (i, line) in bytes.chunks(width).enumerate() {
        if i > 0 {
            buffer.push(b'\n');
        }
        buffer.extend_from_slice(line);
    }
    buffer
}

/// The per-token output chain: base64, then mangle, then block.
///
/// The order is fixed; each stage passes the token through when disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputTransformer {
    pub base64: bool,
    pub mangle: Option<Mangle>,
    /// Line width, `None` when blocking is off.
    pub block: Option<usize>,
}

impl OutputTransformer {
    #[must_use]
    pub fn apply(&self, mut token: Token) -> Token {
        if self.base64 {
            token = encode_base64(&token);
        }
        if let Some(mangle) = self.mangle {
            token = mangle.apply(token);
        }
        if let Some(width) = self.block {
            token = match token {
                Token::Text(text) => Token::Text(blockstring(&text, width)),
                Token::Raw(bytes) => Token::Raw(block_bytes(&bytes, width)),
            };
        }
        token
    }
}
