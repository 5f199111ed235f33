//! Error types for the lox driver.
//!
//! Lexical faults are not errors here: they are diagnostics in the session's
//! handler and only change the exit status. These are the failures that stop
//! the driver itself.

use std::path::PathBuf;

use lox_util::DiagnosticError;
use thiserror::Error;

use crate::ExitStatus;

/// Failures of the driver outside of scanning.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Wrong number of command-line arguments.
    #[error("Usage: lox [script]")]
    Usage,

    /// The script could not be read.
    #[error("Could not read '{}': {source}", path.display())]
    ReadScript {
        /// Path that was given on the command line
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing tokens or reading the prompt failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Token serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Diagnostics could not be written.
    #[error(transparent)]
    Report(#[from] DiagnosticError),
}

impl DriverError {
    /// Exit status the process ends with for this error.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            DriverError::Usage => ExitStatus::Usage,
            DriverError::Config(_) => ExitStatus::Config,
            DriverError::ReadScript { .. }
            | DriverError::Io(_)
            | DriverError::Json(_)
            | DriverError::Report(_) => ExitStatus::IoError,
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_display() {
        assert_eq!(DriverError::Usage.to_string(), "Usage: lox [script]");
        assert_eq!(DriverError::Usage.exit_status(), ExitStatus::Usage);
    }

    #[test]
    fn test_read_script_error_display() {
        let err = DriverError::ReadScript {
            path: PathBuf::from("missing.lox"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Could not read 'missing.lox': not found");
        assert_eq!(err.exit_status(), ExitStatus::IoError);
    }

    #[test]
    fn test_config_error_display() {
        let err = DriverError::Config("bad emit".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad emit");
        assert_eq!(err.exit_status(), ExitStatus::Config);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: DriverError = io_err.into();
        assert!(matches!(err, DriverError::Io(_)));
        assert_eq!(err.exit_status(), ExitStatus::IoError);
    }

    #[test]
    fn test_report_error_is_transparent() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: DriverError = DiagnosticError::from(io_err).into();
        assert_eq!(err.to_string(), "Failed to report diagnostics: pipe closed");
    }
}
