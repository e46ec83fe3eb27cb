//! Error types for Splinter
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::OutputTarget;

/// Result type alias for Splinter operations
pub type SplinterResult<T> = Result<T, SplinterError>;

/// Main error type for Splinter operations
#[derive(Error, Debug)]
pub enum SplinterError {
    /// Nothing exists at the input path
    #[error("input not found: {path}")]
    NotFound { path: PathBuf },

    /// Input exists but cannot be split (directory, non-UTF-8 text, ...)
    #[error("invalid input {path}: {reason}")]
    InvalidInput { path: PathBuf, reason: String },

    /// Input passed validation but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file (or the output directory) could not be written
    #[error("failed to write {target} ({path}): {source}")]
    Write {
        target: OutputTarget,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Archive creation failed or had nothing to archive
    #[error("packaging failed for {path}: {reason}")]
    Packaging { path: PathBuf, reason: String },

    /// Invalid configuration file
    #[error("invalid config in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl SplinterError {
    /// Stable, machine-readable error class used in reports.
    pub fn code(&self) -> &'static str {
        match self {
            SplinterError::NotFound { .. } => "not_found",
            SplinterError::InvalidInput { .. } => "invalid_input",
            SplinterError::Read { .. } => "read",
            SplinterError::Write { .. } => "write",
            SplinterError::Packaging { .. } => "packaging",
            SplinterError::Config { .. } => "config",
        }
    }

    /// The file or directory the error is about.
    pub fn path(&self) -> &Path {
        match self {
            SplinterError::NotFound { path }
            | SplinterError::InvalidInput { path, .. }
            | SplinterError::Read { path, .. }
            | SplinterError::Write { path, .. }
            | SplinterError::Packaging { path, .. }
            | SplinterError::Config { path, .. } => path,
        }
    }

    pub(crate) fn write(target: OutputTarget, path: &Path, source: std::io::Error) -> Self {
        SplinterError::Write {
            target,
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn packaging(path: &Path, reason: impl Into<String>) -> Self {
        SplinterError::Packaging {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}
