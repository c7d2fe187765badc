//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temporary file in the destination directory that is
/// renamed into place, so a reader never sees a half-written stylesheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| FsError::at(dir, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| FsError::at(path, e))?;
        tmp.persist(path).map_err(|e| FsError::at(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::at(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }
}
