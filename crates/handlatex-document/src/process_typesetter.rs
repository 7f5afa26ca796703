//! Typesetter backed by an external process.

use std::io;
use std::path::Path;
use std::process::Command;

use handlatex_core::error::HandError;
use handlatex_core::typesetter::Typesetter;
use tracing::debug;

/// Runs the driver as a child process with inherited standard streams.
///
/// The driver string is split on whitespace into a program and its leading
/// arguments; the batch file is appended as the last argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessTypesetter;

impl Typesetter for ProcessTypesetter {
    fn typeset(&self, driver: &str, batch_file: &Path) -> Result<(), HandError> {
        let command = format!("{driver} {}", batch_file.display());
        let mut words = driver.split_whitespace();

        let Some(program) = words.next() else {
            return Err(HandError::DriverLaunch {
                command,
                source: io::Error::new(io::ErrorKind::InvalidInput, "empty driver command"),
            });
        };

        debug!("invoking driver as \"{command}\"...");
        let status = Command::new(program)
            .args(words)
            .arg(batch_file)
            .status()
            .map_err(|source| HandError::DriverLaunch {
                command: command.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(HandError::DriverFailed {
                command,
                status: status.to_string(),
            })
        }
    }
}
