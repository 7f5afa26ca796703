//! handLaTeX — Paragraph Randomizer.
//!
//! Rewrites the body of each hand paragraph into `handparfull` markup: one
//! tilt angle per paragraph drawn from a bounded random walk (so successive
//! paragraphs drift rather than jump), one uniform scale per paragraph, and
//! a random subset of words individually rotated.

pub mod domain;
