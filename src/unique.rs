use std::collections::HashSet;

/// Rejects outputs already emitted during this run.
///
/// The cache is unbounded and lives as long as the run. When disabled every
/// candidate is accepted and nothing is stored.
#[derive(Debug)]
pub struct UniquenessFilter {
    seen: Option<HashSet<Vec<u8>>>,
}

impl UniquenessFilter {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            seen: enabled.then(HashSet::new),
        }
    }

    /// Records `output` and returns `true` unless it was seen before.
    pub fn accept(&mut self, output: &[u8]) -> bool {
        match &mut self.seen {
            Some(seen) if seen.contains(output) => false,
            Some(seen) => seen.insert(output.to_vec()),
            None => true,
        }
    }
}
