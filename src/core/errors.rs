//! Shared error types for scanner operations

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gci operations
#[derive(Debug, Error)]
pub enum ScanError {
    /// The parser could not build a syntax tree for the input
    #[error("Parse error: {message}")]
    ParseFailure { message: String },

    /// Canonical source text could not be obtained for a named target
    #[error("Source unavailable for '{target}': {message}")]
    SourceUnavailable { target: String, message: String },

    /// The scan target is neither source text nor a resolvable reference
    #[error("Invalid scan target: {message}")]
    InvalidTarget { message: String },

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl ScanError {
    pub fn parse_failure(message: impl Into<String>) -> Self {
        ScanError::ParseFailure {
            message: message.into(),
        }
    }

    pub fn source_unavailable(target: impl Into<String>, message: impl Into<String>) -> Self {
        ScanError::SourceUnavailable {
            target: target.into(),
            message: message.into(),
        }
    }

    pub fn invalid_target(message: impl Into<String>) -> Self {
        ScanError::InvalidTarget {
            message: message.into(),
        }
    }

    pub fn file_system(message: impl Into<String>, path: PathBuf, source: std::io::Error) -> Self {
        ScanError::FileSystem {
            message: message.into(),
            path: Some(path),
            source: Some(source),
        }
    }

    /// Whether the user can fix the failure by editing their input
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            ScanError::ParseFailure { .. } | ScanError::InvalidTarget { .. }
        )
    }
}
