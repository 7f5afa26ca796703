//! Shared test mocks and utilities for the handLaTeX driver.

mod rng;
mod typesetter;

pub use rng::{MockRng, SequenceRng};
pub use typesetter::{FailingTypesetter, RecordingTypesetter};
