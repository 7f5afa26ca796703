//! External typesetter abstraction.

use std::path::Path;

use crate::error::HandError;

/// Runs the configured typesetting command over a batch file.
pub trait Typesetter {
    /// Invokes `driver` on `batch_file` and blocks until it exits.
    ///
    /// # Errors
    ///
    /// Returns `HandError::DriverLaunch` if the command cannot be started and
    /// `HandError::DriverFailed` if it exits unsuccessfully.
    fn typeset(&self, driver: &str, batch_file: &Path) -> Result<(), HandError>;
}
