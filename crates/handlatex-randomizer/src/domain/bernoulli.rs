//! Bernoulli trials selecting which words get rotated.

use handlatex_core::rng::DeterministicRng;

/// Independent true/false draws with a fixed success probability.
///
/// The frequency is not validated: at or below `0.0` no trial succeeds, at
/// or above `1.0` every trial succeeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BernoulliTrials {
    frequency: f64,
}

impl BernoulliTrials {
    /// Creates trials that succeed with probability `frequency`.
    #[must_use]
    pub fn new(frequency: f64) -> Self {
        Self { frequency }
    }

    /// Draws one trial.
    pub fn next_trial(&self, rng: &mut dyn DeterministicRng) -> bool {
        rng.next_f64() < self.frequency
    }
}
