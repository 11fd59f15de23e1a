/// A sampled value moving through the output transforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Symbols drawn from an alphabet, or any transformed text.
    Text(String),
    /// Raw random bytes, not necessarily valid UTF-8.
    Raw(Vec<u8>),
}

impl Token {
    /// Length in symbols for text, in bytes for raw tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(text) => text.chars().count(),
            Self::Raw(bytes) => bytes.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Raw(bytes) => bytes,
        }
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.into_bytes(),
            Self::Raw(bytes) => bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_length_counts_symbols() {
        let token = Token::Text("é€a".to_owned());
        assert_eq!(token.len(), 3);
        assert_eq!(token.as_bytes().len(), 6);
    }

    #[test]
    fn test_raw_length_counts_bytes() {
        let token = Token::Raw(vec![0xff, 0x00, 0x80]);
        assert_eq!(token.len(), 3);
        assert_eq!(token.into_bytes(), vec![0xff, 0x00, 0x80]);
    }

    #[test]
    fn test_empty() {
        assert!(Token::Text(String::new()).is_empty());
        assert!(Token::Raw(Vec::new()).is_empty());
    }
}
