//! Typed error handling for macrolint.
//!
//! Classification itself is infallible; the fallible surface is limited to
//! configuration resolution and reading recorded event dumps. Errors are
//! structured so library consumers can match on them.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for macrolint operations.
#[derive(Error, Debug)]
pub enum MacrolintError {
    /// The configured allow-list pattern does not compile
    #[error("Invalid allowed pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// I/O error when reading configuration or event dumps
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Malformed event dump
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl MacrolintError {
    /// Create a pattern error from the offending pattern text.
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a parse error for an event dump.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Parse { path, .. } => Some(path),
            Self::Pattern { .. } => None,
        }
    }
}

/// Convenience type alias for macrolint results.
pub type MacrolintResult<T> = Result<T, MacrolintError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> MacrolintResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> MacrolintResult<T> {
        self.map_err(|e| MacrolintError::io(path, e))
    }
}
