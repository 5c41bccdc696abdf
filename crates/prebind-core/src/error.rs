//! Resolution error types.
//!
//! Every failure is returned to the immediate caller. Nothing in this crate
//! logs or swallows a `ResolveError`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving or loading a native binding.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The base path or descriptor was malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The descriptor does not declare any Node-API versions.
    #[error("legacy native-binding naming is not supported")]
    UnsupportedMode,

    /// No candidate existed as a regular file.
    #[error("{}", not_found_message(.name, .candidates))]
    NotFound {
        /// Binding name from the descriptor
        name: String,
        /// Every candidate that was probed, in probe order
        candidates: Vec<PathBuf>,
    },

    /// The loader saw a missing path from a resolve that must not return one.
    #[error("Internal invariant violated: {0}")]
    InternalInvariantViolation(String),

    /// The dynamic-loading primitive rejected a resolved path.
    #[error("Failed to load binding {path}: {reason}")]
    Load { path: PathBuf, reason: String },
}

impl ResolveError {
    /// Create an `InvalidArgument` error with a message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether retrying can succeed without changing the call site.
    ///
    /// Only a missing artifact qualifies, and only once something installs it.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn not_found_message(name: &str, candidates: &[PathBuf]) -> String {
    let tried = candidates
        .iter()
        .map(|c| format!("\n - {}", c.display()))
        .collect::<String>();
    format!("Failed to find binding for {name}\nTried paths:{tried}")
}

/// Result type alias for resolution operations
pub type ResolveResult<T> = Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_each_candidate_on_its_own_line() {
        let err = ResolveError::NotFound {
            name: "foo".to_string(),
            candidates: vec![
                PathBuf::from("/pkg/build/Debug/foo.node"),
                PathBuf::from("/pkg/build/Release/foo.node"),
            ],
        };

        assert_eq!(
            err.to_string(),
            "Failed to find binding for foo\nTried paths:\n - /pkg/build/Debug/foo.node\n - /pkg/build/Release/foo.node"
        );
    }

    #[test]
    fn not_found_without_candidates_has_no_trailing_lines() {
        let err = ResolveError::NotFound {
            name: "foo".to_string(),
            candidates: Vec::new(),
        };
        assert_eq!(err.to_string(), "Failed to find binding for foo\nTried paths:");
    }

    #[test]
    fn only_not_found_is_retryable() {
        let not_found = ResolveError::NotFound {
            name: "foo".to_string(),
            candidates: Vec::new(),
        };
        assert!(not_found.is_retryable());
        assert!(!ResolveError::UnsupportedMode.is_retryable());
        assert!(!ResolveError::invalid_argument("empty name").is_retryable());
        assert!(!ResolveError::InternalInvariantViolation("x".into()).is_retryable());
    }

    #[test]
    fn unsupported_mode_message() {
        assert_eq!(
            ResolveError::UnsupportedMode.to_string(),
            "legacy native-binding naming is not supported"
        );
    }
}
