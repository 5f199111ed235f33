//! Core error types for lox-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// Writing diagnostics to their destination failed
    #[error("Failed to report diagnostics: {0}")]
    Report(#[from] std::io::Error),
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
