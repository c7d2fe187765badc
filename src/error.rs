//! Error types for sass-guard
//!
//! Uses `thiserror` for library errors. Per-file compile failures are not
//! errors at this level: they travel as `CompileOutcome::SyntaxFailure` and
//! are reported, never propagated.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sass-guard operations
pub type SassGuardResult<T> = Result<T, SassGuardError>;

/// Main error type for sass-guard operations
#[derive(Error, Debug)]
pub enum SassGuardError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Source directory does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Corpus walk failed
    #[error("failed to scan {path}: {message}")]
    Walk { path: PathBuf, message: String },

    /// Unknown output style name
    #[error("unknown output style '{0}' (expected nested, expanded, compact or compressed)")]
    UnknownStyle(String),
}
