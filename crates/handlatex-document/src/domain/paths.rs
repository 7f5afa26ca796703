//! Names of the files produced for one input document.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Output files derived from the input path by replacing its extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    /// Transformed document (`.htex`).
    pub document: PathBuf,
    /// Batch driver file (`.hand`).
    pub batch: PathBuf,
    /// High-level transcript (`.hlog`).
    pub transcript: PathBuf,
}

impl OutputPaths {
    /// Derives the `.htex`, `.hand` and `.hlog` paths next to `input`.
    #[must_use]
    pub fn for_input(input: &Path) -> Self {
        Self {
            document: input.with_extension("htex"),
            batch: input.with_extension("hand"),
            transcript: input.with_extension("hlog"),
        }
    }
}
