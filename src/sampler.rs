use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::{
    charset::SamplingMode,
    random::{EntropyError, RandomSource},
    token::Token,
};

/// Draws fixed-length tokens, one random byte per symbol or byte.
#[derive(Debug)]
pub struct TokenSampler<R = OsRng> {
    mode: SamplingMode,
    length: usize,
    source: RandomSource<R>,
}

impl<R: RngCore + CryptoRng> TokenSampler<R> {
    pub const fn new(mode: SamplingMode, length: usize, source: RandomSource<R>) -> Self {
        Self {
            mode,
            length,
            source,
        }
    }

    pub fn sample(&mut self) -> Result<Token, EntropyError> {
        let bytes = self.source.bytes(self.length)?;
        let token = match &self.mode {
            SamplingMode::Symbols(alphabet) => {
                Token::Text(bytes.into_iter().map(|b| alphabet.symbol(b)).collect())
            }
            SamplingMode::Raw => Token::Raw(bytes),
        };
        Ok(token)
    }
}
