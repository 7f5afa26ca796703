//! Test typesetters — mock `Typesetter` implementations for tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use handlatex_core::error::HandError;
use handlatex_core::typesetter::Typesetter;

/// A typesetter that records every invocation and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingTypesetter {
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl RecordingTypesetter {
    /// Create a new recording typesetter with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all `(driver, batch_file)` invocations.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Typesetter for RecordingTypesetter {
    fn typeset(&self, driver: &str, batch_file: &Path) -> Result<(), HandError> {
        self.calls
            .lock()
            .unwrap()
            .push((driver.to_owned(), batch_file.to_path_buf()));
        Ok(())
    }
}

/// A typesetter whose driver always exits with status 1.
#[derive(Debug)]
pub struct FailingTypesetter;

impl Typesetter for FailingTypesetter {
    fn typeset(&self, driver: &str, batch_file: &Path) -> Result<(), HandError> {
        Err(HandError::DriverFailed {
            command: format!("{driver} {}", batch_file.display()),
            status: "exit status: 1".to_owned(),
        })
    }
}
