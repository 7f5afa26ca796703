//! handLaTeX — Document processing.
//!
//! Responsible for everything around the randomizer: reading and decoding
//! the input, locating the hand package declaration and hand paragraphs,
//! writing the transformed document and its batch driver file, and running
//! the external typesetter.

pub mod application;
pub mod domain;
pub mod encoding;
pub mod process_typesetter;

/// Revision stamped into generated batch files.
pub const REVISION: &str = env!("CARGO_PKG_VERSION");
