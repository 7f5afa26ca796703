//! Randomizer domain: random processes, text fill and output markup.

pub mod bernoulli;
pub mod counters;
pub mod fill;
pub mod markup;
pub mod randomizer;
pub mod walk;
