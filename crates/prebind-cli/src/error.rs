//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and the mapping
//! from `ResolveError` to exit codes.

use prebind_core::ResolveError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Resolution failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Argument error not caught by the parser.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Options file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error writing command output.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: Binding not found
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Resolve(err) => match err {
                ResolveError::NotFound { .. } | ResolveError::Load { .. } => 1,
                ResolveError::InvalidArgument(_) | ResolveError::UnsupportedMode => 2,
                ResolveError::InternalInvariantViolation(_) => 70, // EX_SOFTWARE
            },
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}

/// Result type for CLI handlers
pub type CliResult<T> = Result<T, CliError>;
