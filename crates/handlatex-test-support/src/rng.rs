//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use std::collections::VecDeque;

use handlatex_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` for `next_i32_range` and `0.0` for
/// `next_f64`. Suitable for tests that do not depend on specific random values.
///
/// Under this RNG the paragraph walk starts at its lower bound and stays
/// there, every scale is the lower bound and every Bernoulli trial with a
/// positive frequency succeeds.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_i32_range(&mut self, min: i32, _max: i32) -> i32 {
        min
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that returns values from predetermined sequences. Panics if the
/// integer sequence is exhausted; the float sequence falls back to `0.0`.
/// Used in tests that need specific, repeatable random outcomes (e.g. walk
/// steps and word angles).
#[derive(Debug, Default)]
pub struct SequenceRng {
    integers: VecDeque<i32>,
    floats: VecDeque<f64>,
}

impl SequenceRng {
    /// Create a new `SequenceRng` returning `integers` from `next_i32_range`.
    #[must_use]
    pub fn new(integers: Vec<i32>) -> Self {
        Self {
            integers: integers.into(),
            floats: VecDeque::new(),
        }
    }

    /// Scripts the values returned by `next_f64`.
    #[must_use]
    pub fn with_floats(mut self, floats: Vec<f64>) -> Self {
        self.floats = floats.into();
        self
    }

    /// Number of scripted integers not yet consumed.
    #[must_use]
    pub fn remaining_integers(&self) -> usize {
        self.integers.len()
    }
}

impl DeterministicRng for SequenceRng {
    fn next_i32_range(&mut self, _min: i32, _max: i32) -> i32 {
        self.integers
            .pop_front()
            .expect("SequenceRng integer sequence exhausted")
    }

    fn next_f64(&mut self) -> f64 {
        self.floats.pop_front().unwrap_or(0.0)
    }
}
