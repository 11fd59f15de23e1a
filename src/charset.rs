use std::collections::HashSet;

use strum::{Display, EnumString};
use thiserror::Error;
use tracing::{debug, warn};

const DIGITS: &str = "0123456789";
const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const PUNCTUATION: &str = "_-!$%^&();:.,<>/?";
/// Letters without the look-alikes `I`, `O` and `l`.
const LETTERS_NOSIM: &str = "ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnopqrstuvwxyz";
/// Digits without the look-alikes `0` and `1`.
const DIGITS_NOSIM: &str = "23456789";
const HEX: &str = "0123456789ABCDEF";
const BINARY: &str = "01";

/// Largest alphabet a single random byte can index.
pub const MAX_ALPHABET_LEN: usize = 256;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("Alphabet must contain at least one symbol")]
    Empty,
}

/// Named character sets selectable with `--chars`.
///
/// Names are matched exactly. `list` is accepted as an alias of `all`, and
/// any name that does not parse falls back to [`Charset::All`] through
/// [`Charset::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
pub enum Charset {
    #[default]
    #[strum(to_string = "all", serialize = "list")]
    All,
    /// Raw-byte sampling, not a symbol alphabet.
    #[strum(to_string = "bytes")]
    Bytes,
    #[strum(to_string = "alphanumeric", serialize = "alpha")]
    Alphanumeric,
    #[strum(to_string = "alphanumeric-nosim", serialize = "alpha-nosim")]
    AlphanumericNosim,
    #[strum(to_string = "alphabet")]
    Alphabet,
    #[strum(to_string = "numeric")]
    Numeric,
    #[strum(to_string = "binary", serialize = "bin")]
    Binary,
    #[strum(to_string = "hexadecimal", serialize = "hex")]
    Hexadecimal,
}

impl Charset {
    /// Parses a charset name, degrading unknown names to [`Charset::All`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            debug!("Unknown charset '{}', using '{}'", name, Self::All);
            Self::All
        })
    }

    /// The symbols of this set, or `None` for [`Charset::Bytes`].
    #[must_use]
    pub fn symbols(self) -> Option<String> {
        let symbols = match self {
            Self::All => [DIGITS, LETTERS, PUNCTUATION].concat(),
            Self::Bytes => return None,
            Self::Alphanumeric => [DIGITS, LETTERS].concat(),
            Self::AlphanumericNosim => [DIGITS_NOSIM, LETTERS_NOSIM].concat(),
            Self::Alphabet => LETTERS_NOSIM.to_owned(),
            Self::Numeric => DIGITS.to_owned(),
            Self::Binary => BINARY.to_owned(),
            Self::Hexadecimal => HEX.to_owned(),
        };
        Some(symbols)
    }
}

/// An ordered, non-empty set of at most 256 symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    /// Builds an alphabet from a literal list of symbols.
    ///
    /// Repeated symbols are kept, which raises their probability. Symbols
    /// past the 256th can never be drawn and are dropped with a warning.
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let mut symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(AlphabetError::Empty);
        }
        if symbols.len() > MAX_ALPHABET_LEN {
            warn!(
                symbols = symbols.len(),
                "Alphabet truncated to its first {} symbols", MAX_ALPHABET_LEN
            );
            symbols.truncate(MAX_ALPHABET_LEN);
        }
        Ok(Self(symbols))
    }

    /// Number of different symbols, ignoring repeats.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.0.iter().collect::<HashSet<_>>().len()
    }

    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.0.contains(&symbol)
    }

    /// Maps a random byte to a symbol by `byte mod len`.
    ///
    /// Uniform only when the length divides 256; otherwise lower indices are
    /// slightly favoured. Kept as is so output distribution stays stable.
    #[must_use]
    pub fn symbol(&self, byte: u8) -> char {
        self.0[usize::from(byte) % self.0.len()]
    }
}

/// What the sampler draws tokens from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SamplingMode {
    Symbols(Alphabet),
    Raw,
}

impl SamplingMode {
    /// Resolves the charset selection once per run.
    ///
    /// `Bytes` always selects raw mode. Otherwise a non-empty custom symbol
    /// list replaces the named set.
    #[must_use]
    pub fn resolve(charset: Charset, custom: Option<&str>) -> Self {
        let Some(symbols) = charset.symbols() else {
            return Self::Raw;
        };
        let alphabet = custom
            .and_then(|custom| Alphabet::new(custom).ok())
            .unwrap_or_else(|| Alphabet(symbols.chars().collect()));
        Self::Symbols(alphabet)
    }

    /// Number of distinct tokens of `length` this mode can produce, saturating.
    #[must_use]
    pub fn symbol_space(&self, length: usize) -> u128 {
        let base = match self {
            Self::Symbols(alphabet) => alphabet.distinct() as u128,
            Self::Raw => 256,
        };
        u32::try_from(length)
            .ok()
            .and_then(|exp| base.checked_pow(exp))
            .unwrap_or(u128::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols_of(name: &str) -> String {
        Charset::from_name(name).symbols().unwrap()
    }

    #[test]
    fn test_all_charset() {
        assert_eq!(
            symbols_of("all"),
            "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_-!$%^&();:.,<>/?"
        );
    }

    #[test]
    fn test_list_and_unknown_fall_back_to_all() {
        assert_eq!(Charset::from_name("list"), Charset::All);
        assert_eq!(Charset::from_name("klingon"), Charset::All);
        assert_eq!(Charset::from_name(""), Charset::All);
        // Names are case-sensitive.
        assert_eq!(Charset::from_name("NUMERIC"), Charset::All);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Charset::from_name("alpha"), Charset::Alphanumeric);
        assert_eq!(Charset::from_name("alpha-nosim"), Charset::AlphanumericNosim);
        assert_eq!(Charset::from_name("bin"), Charset::Binary);
        assert_eq!(Charset::from_name("hex"), Charset::Hexadecimal);
    }

    #[test]
    fn test_display_uses_canonical_name() {
        assert_eq!(Charset::Alphanumeric.to_string(), "alphanumeric");
        assert_eq!(Charset::All.to_string(), "all");
    }

    #[test]
    fn test_named_sets() {
        assert_eq!(symbols_of("numeric"), "0123456789");
        assert_eq!(symbols_of("binary"), "01");
        assert_eq!(symbols_of("hexadecimal"), "0123456789ABCDEF");
        assert_eq!(symbols_of("alphanumeric").len(), 62);
        assert_eq!(
            symbols_of("alphanumeric-nosim"),
            "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnopqrstuvwxyz"
        );
        assert_eq!(
            symbols_of("alphabet"),
            "ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnopqrstuvwxyz"
        );
    }

    #[test]
    fn test_nosim_excludes_lookalikes() {
        let symbols = symbols_of("alphanumeric-nosim");
        for c in ['0', '1', 'I', 'O', 'l'] {
            assert!(!symbols.contains(c), "{c} should be excluded");
        }
    }

    #[test]
    fn test_bytes_has_no_alphabet() {
        assert_eq!(Charset::Bytes.symbols(), None);
        assert_eq!(
            SamplingMode::resolve(Charset::Bytes, Some("AB")),
            SamplingMode::Raw
        );
    }

    #[test]
    fn test_custom_overrides_named_set() {
        let mode = SamplingMode::resolve(Charset::Numeric, Some("AB"));
        assert_eq!(mode, SamplingMode::Symbols(Alphabet::new("AB").unwrap()));
        // An empty list is no list.
        assert_eq!(
            SamplingMode::resolve(Charset::Binary, Some("")),
            SamplingMode::Symbols(Alphabet::new("01").unwrap())
        );
    }

    #[test]
    fn test_custom_alphabet_limits() {
        assert_eq!(Alphabet::new(""), Err(AlphabetError::Empty));
        assert_eq!(Alphabet::new(&"x".repeat(256)).unwrap().0.len(), 256);
        // Length counts symbols, not bytes.
        assert_eq!(Alphabet::new("é€").unwrap().0.len(), 2);
    }

    #[test]
    fn test_long_custom_alphabet_is_truncated() {
        let symbols: String = ('a'..='z').cycle().take(300).collect();
        let SamplingMode::Symbols(alphabet) = SamplingMode::resolve(Charset::All, Some(&symbols))
        else {
            panic!("custom symbols must resolve to an alphabet");
        };
        assert_eq!(alphabet.0.len(), 256);
        assert_eq!(alphabet.0, symbols.chars().take(256).collect::<Vec<_>>());
        assert_eq!(alphabet.symbol(255), symbols.chars().nth(255).unwrap());
    }

    #[test]
    fn test_symbol_uses_modulo() {
        let alphabet = Alphabet::new("ABC").unwrap();
        assert_eq!(alphabet.symbol(0), 'A');
        assert_eq!(alphabet.symbol(4), 'B');
        assert_eq!(alphabet.symbol(255), 'A');
    }

    #[test]
    fn test_symbol_space() {
        let binary = SamplingMode::resolve(Charset::Binary, None);
        assert_eq!(binary.symbol_space(4), 16);
        assert_eq!(binary.symbol_space(0), 1);
        assert_eq!(SamplingMode::Raw.symbol_space(2), 65536);
        assert_eq!(SamplingMode::Raw.symbol_space(741), u128::MAX);
    }

    #[test]
    fn test_symbol_space_ignores_repeated_symbols() {
        let weighted = SamplingMode::resolve(Charset::All, Some("AAB"));
        assert_eq!(weighted.symbol_space(1), 2);
        assert_eq!(weighted.symbol_space(3), 8);
    }
}
