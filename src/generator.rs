use std::io::{self, Write};

use rand::{rngs::OsRng, CryptoRng, RngCore};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{
    config::Config,
    random::{EntropyError, RandomSource},
    sampler::TokenSampler,
    transform::OutputTransformer,
    unique::UniquenessFilter,
};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Entropy(#[from] EntropyError),
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Runs the sample, transform, dedupe loop and writes accepted tokens.
#[derive(Debug)]
pub struct Generator<R = OsRng> {
    sampler: TokenSampler<R>,
    transformer: OutputTransformer,
    filter: UniquenessFilter,
    count: usize,
    separator: Vec<u8>,
}

impl<R: RngCore + CryptoRng> Generator<R> {
    pub fn new(config: Config, source: RandomSource<R>) -> Self {
        let space = config.symbol_space();
        if config.unique && space < config.count as u128 {
            warn!(
                space = %space,
                count = config.count,
                "Fewer distinct tokens exist than requested, generation will not finish"
            );
        }

        Self {
            sampler: TokenSampler::new(config.mode, config.length, source),
            transformer: config.transform,
            filter: UniquenessFilter::new(config.unique),
            count: config.count,
            separator: config.separator,
        }
    }

    /// Writes `count` accepted tokens to `out`, each followed by the separator.
    ///
    /// Duplicates rejected by the uniqueness filter do not count and the loop
    /// keeps drawing until enough tokens were accepted. Returns the number of
    /// tokens written.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<usize, GenerateError> {
        let mut accepted = 0;
        let mut duplicates = 0u64;

        while accepted < self.count {
            let token = self.sampler.sample()?;
            let output = self.transformer.apply(token).into_bytes();

            if !self.filter.accept(&output) {
                duplicates += 1;
                trace!(duplicates, "Skipping duplicate token");
                continue;
            }

            out.write_all(&output)?;
            out.write_all(&self.separator)?;
            accepted += 1;
        }
        out.flush()?;

        debug!(accepted, duplicates, "Generation complete");
        Ok(accepted)
    }
}
