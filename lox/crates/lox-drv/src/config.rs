//! Configuration file support.
//!
//! A `lox.toml` file sets defaults for the scanner options and the output
//! format. Command-line flags override whatever the file says.
//!
//! ```toml
//! [scanner]
//! unicode_identifiers = false
//! nested_comments = false
//!
//! [output]
//! emit = "tokens"
//! ```

use dirs::config_dir;
use lox_lex::{IdentifierPolicy, ScanConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{DriverError, Result};
use crate::EmitFormat;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lox.toml";

/// Contents of a `lox.toml` file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Scanner options.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Output options.
    #[serde(default)]
    pub output: OutputConfig,
}

/// The `[scanner]` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Accept Unicode letters in identifiers.
    #[serde(default)]
    pub unicode_identifiers: bool,

    /// Let block comments nest.
    #[serde(default)]
    pub nested_comments: bool,
}

/// The `[output]` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Token output format.
    #[serde(default)]
    pub emit: EmitFormat,
}

impl ScannerConfig {
    /// Scanner options described by this table.
    pub fn scan_config(&self) -> ScanConfig {
        let identifiers = if self.unicode_identifiers {
            IdentifierPolicy::Unicode
        } else {
            IdentifierPolicy::Ascii
        };
        ScanConfig::default()
            .with_identifiers(identifiers)
            .with_nested_comments(self.nested_comments)
    }
}

impl ConfigFile {
    /// Load configuration from the default location.
    ///
    /// Searches the current directory, then the user configuration directory
    /// (`<config dir>/lox/lox.toml`). Returns the defaults when neither has
    /// a file.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in the user configuration directory.
    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lox").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}
