//! Bounded random walk driving paragraph tilt.

use handlatex_core::rng::DeterministicRng;

/// An integer random walk confined to `[low, high]`.
///
/// Each step adds `-1`, `0` or `+1` with equal probability. A step that
/// would leave the range is rejected and the walk stays put for that draw;
/// it is not clamped to the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedRandomWalk {
    low: i32,
    high: i32,
    position: i32,
}

impl BoundedRandomWalk {
    /// Starts a walk at a position drawn uniformly from `[low, high]`.
    ///
    /// Callers guarantee `low <= high`.
    pub fn start(low: i32, high: i32, rng: &mut dyn DeterministicRng) -> Self {
        debug_assert!(low <= high, "walk bounds inverted: {low} > {high}");
        Self {
            low,
            high,
            position: rng.next_i32_range(low, high),
        }
    }

    /// Current position, without drawing.
    #[must_use]
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Inclusive bounds of the walk.
    #[must_use]
    pub fn bounds(&self) -> (i32, i32) {
        (self.low, self.high)
    }

    /// Takes one step and returns the resulting position.
    pub fn next_position(&mut self, rng: &mut dyn DeterministicRng) -> i32 {
        let step = rng.next_i32_range(-1, 1);
        if let Some(candidate) = self
            .position
            .checked_add(step)
            .filter(|candidate| (self.low..=self.high).contains(candidate))
        {
            self.position = candidate;
        }
        self.position
    }
}
