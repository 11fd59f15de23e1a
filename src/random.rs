use rand::{rngs::OsRng, CryptoRng, RngCore};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Entropy source failure: {0}")]
pub struct EntropyError(#[from] rand::Error);

/// Source of cryptographically strong random bytes.
///
/// Backed by the operating system generator in production. There is no
/// fallback: a failed read is returned as [`EntropyError`] and must end the
/// run.
#[derive(Debug, Clone)]
pub struct RandomSource<R = OsRng> {
    rng: R,
}

impl RandomSource<OsRng> {
    #[must_use]
    pub const fn os() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> RandomSource<R> {
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Reads exactly `n` random bytes.
    pub fn bytes(&mut self, n: usize) -> Result<Vec<u8>, EntropyError> {
        let mut bytes = vec![0u8; n];
        self.rng.try_fill_bytes(&mut bytes)?;
        Ok(bytes)
    }
}
