//! FileSystem port - abstraction over the writes the runner performs
//!
//! This trait lets the application layer create directories and write
//! artifacts without depending on a concrete implementation (local, mock).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach the path an I/O error happened on
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::at(Path::new(""), err)
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - in-memory fakes for testing
pub trait FileSystem {
    /// Write content to a file (parent directory must exist)
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Create a directory and its parents; succeeds if it already exists
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        (**self).remove(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }
}
