//! Application layer for document processing.

pub mod process;
