//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// A problem with the option set, raised while merging or validating it.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The option name is not one the hand package recognizes.
    #[error("unknown option \"{key}\"")]
    UnknownOption {
        /// The key as written in the declaration or on the command line.
        key: String,
    },

    /// The raw value could not be coerced to the option's type.
    #[error("malformed value \"{value}\" for option \"{key}\": expected {expected}")]
    MalformedValue {
        /// The option name.
        key: String,
        /// The offending raw value.
        value: String,
        /// Human-readable name of the expected type.
        expected: &'static str,
    },

    /// A lower bound is greater than its upper bound.
    #[error("option {low_key}={low} must not exceed {high_key}={high}")]
    InvertedBounds {
        /// Name of the lower-bound option.
        low_key: &'static str,
        /// Name of the upper-bound option.
        high_key: &'static str,
        /// Rendered lower-bound value.
        low: String,
        /// Rendered upper-bound value.
        high: String,
    },

    /// The scale range is infinite, so no scale can be drawn from it.
    #[error("scale bounds minparscale={low} and maxparscale={high} must be finite")]
    UnboundedScale {
        /// Rendered lower bound.
        low: String,
        /// Rendered upper bound.
        high: String,
    },
}

/// Top-level fatal error for one document processing run.
#[derive(Debug, Error)]
pub enum HandError {
    /// The input document does not load the hand package.
    #[error("input file does not use the hand package")]
    MissingDeclaration,

    /// The option set could not be built.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The configured encoding label is not known.
    #[error("decoding the document failed: unknown encoding \"{encoding}\"")]
    UnknownEncoding {
        /// The label that failed to resolve.
        encoding: String,
    },

    /// The document bytes are not valid in the configured encoding.
    #[error("decoding the document failed (bad encoding parameter?), {encoding}: {reason}")]
    Decoding {
        /// The encoding used for decoding.
        encoding: String,
        /// What went wrong.
        reason: String,
    },

    /// The transformed document contains characters the configured encoding
    /// cannot represent.
    #[error("encoding the output failed: text is not representable in {encoding}")]
    Unencodable {
        /// The encoding used for writing.
        encoding: String,
    },

    /// Reading or writing a file failed.
    #[error("cannot access \"{}\": {source}", path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The typesetting driver could not be started.
    #[error("cannot launch driver \"{command}\": {source}")]
    DriverLaunch {
        /// The full command line.
        command: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The typesetting driver exited unsuccessfully.
    #[error("driver \"{command}\" failed ({status})")]
    DriverFailed {
        /// The full command line.
        command: String,
        /// Rendered exit status.
        status: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_value_names_key_and_value() {
        let err = ConfigError::MalformedValue {
            key: "freqword".to_owned(),
            value: "often".to_owned(),
            expected: "a decimal number",
        };

        assert_eq!(
            err.to_string(),
            "malformed value \"often\" for option \"freqword\": expected a decimal number"
        );
    }

    #[test]
    fn test_config_error_converts_into_hand_error() {
        let err: HandError = ConfigError::UnknownOption {
            key: "colour".to_owned(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "configuration error: unknown option \"colour\""
        );
    }

    #[test]
    fn test_driver_failure_reports_command_line() {
        let err = HandError::DriverFailed {
            command: "latex doc.hand".to_owned(),
            status: "exit status: 1".to_owned(),
        };

        assert!(err.to_string().contains("latex doc.hand"));
    }
}
