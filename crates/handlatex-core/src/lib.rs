//! handLaTeX Core — shared abstractions.
//!
//! This crate defines the option set and its layered resolution, the error
//! types every other crate reports through, and the two seams the driver
//! depends on at runtime: random number generation and the external
//! typesetter. It contains no file or process handling.

pub mod error;
pub mod options;
pub mod resolver;
pub mod rng;
pub mod typesetter;
