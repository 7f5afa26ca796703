//! Document domain: marker syntax, output naming and batch files.

pub mod batch;
pub mod paths;
pub mod scanner;
