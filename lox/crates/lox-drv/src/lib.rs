//! lox-drv - Scanner Driver
//!
//! The driver runs the Lox scanner over a script file or an interactive
//! prompt, prints the resulting tokens and reports lexical diagnostics.
//!
//! # Exit Status
//!
//! The `lox` binary follows the BSD `sysexits` convention:
//!
//! | Status | Meaning                                 |
//! |--------|-----------------------------------------|
//! | 0      | Success                                 |
//! | 64     | Wrong command-line usage                |
//! | 65     | The script had lexical errors           |
//! | 70     | Internal failure                        |
//! | 74     | The script could not be read or written |
//! | 78     | Bad configuration file                  |
//!
//! # Example
//!
//! ```
//! use lox_drv::{Config, Session};
//!
//! let session = Session::new(Config::default());
//! let mut out = Vec::new();
//! session.run_source("print 1;", &mut out).unwrap();
//!
//! let out = String::from_utf8(out).unwrap();
//! assert!(out.starts_with("PRINT print null"));
//! assert!(!session.diagnostics().has_errors());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod session;

use std::path::PathBuf;

use lox_lex::ScanConfig;
use serde::Deserialize;

pub use config::ConfigFile;
pub use error::{DriverError, Result};
pub use session::Session;

/// How scanned tokens are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmitFormat {
    /// One `KIND lexeme literal` line per token
    #[default]
    Tokens,
    /// A JSON array of token objects
    Json,
    /// Nothing; only diagnostics are printed
    None,
}

/// Process exit status of the `lox` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Everything went fine.
    Success,
    /// Command-line usage error (`EX_USAGE`).
    Usage,
    /// The input had lexical errors (`EX_DATAERR`).
    DataError,
    /// Internal failure (`EX_SOFTWARE`).
    Software,
    /// Input or output failed (`EX_IOERR`).
    IoError,
    /// Configuration error (`EX_CONFIG`).
    Config,
}

impl ExitStatus {
    /// Numeric process exit code.
    pub const fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Usage => 64,
            ExitStatus::DataError => 65,
            ExitStatus::Software => 70,
            ExitStatus::IoError => 74,
            ExitStatus::Config => 78,
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}

/// Configuration for one driver run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Script to scan; `None` starts the interactive prompt.
    pub script: Option<PathBuf>,
    /// Token output format.
    pub emit: EmitFormat,
    /// Scanner options.
    pub scan: ScanConfig,
    /// Verbose logging was requested.
    pub verbose: bool,
}

impl Config {
    /// Builds a run configuration from the values in a config file.
    pub fn from_file(file: &ConfigFile) -> Self {
        Self {
            script: None,
            emit: file.output.emit,
            scan: file.scanner.scan_config(),
            verbose: false,
        }
    }
}
