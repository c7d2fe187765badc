//! Stylesheet corpus discovery
//!
//! Walks a source directory with the `ignore` walker, so `.gitignore`d
//! directories (vendored builds, `node_modules`) never enter owner resolution.

use std::path::{Path, PathBuf};

use ignore::{overrides::OverrideBuilder, WalkBuilder};

use crate::domain::ports::Corpus;
use crate::domain::services::normalize;
use crate::domain::value_objects::is_stylesheet;
use crate::error::{SassGuardError, SassGuardResult};

/// Directories that never contain sources worth compiling
const DEFAULT_EXCLUDES: [&str; 3] = ["!**/node_modules/**", "!**/.git/**", "!**/.sass-cache/**"];

/// Corpus of every `.sass`/`.scss` file under a directory
#[derive(Debug, Clone)]
pub struct WalkCorpus {
    root: PathBuf,
    exclude: Vec<PathBuf>,
}

impl WalkCorpus {
    /// Create a corpus rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude: Vec::new(),
        }
    }

    /// Skip everything under `dir` (typically the output directory)
    pub fn excluding(mut self, dir: impl Into<PathBuf>) -> Self {
        self.exclude.push(normalize(&dir.into()));
        self
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let path = normalize(path);
        self.exclude
            .iter()
            .any(|dir| !dir.as_os_str().is_empty() && path.starts_with(dir))
    }
}

impl Corpus for WalkCorpus {
    fn stylesheets(&self) -> SassGuardResult<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(SassGuardError::DirectoryNotFound {
                path: self.root.clone(),
            });
        }

        let mut overrides = OverrideBuilder::new(&self.root);
        for pattern in DEFAULT_EXCLUDES {
            overrides.add(pattern).map_err(|e| SassGuardError::Walk {
                path: self.root.clone(),
                message: e.to_string(),
            })?;
        }
        let overrides = overrides.build().map_err(|e| SassGuardError::Walk {
            path: self.root.clone(),
            message: e.to_string(),
        })?;

        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .git_exclude(true)
            .ignore(true)
            .require_git(false)
            .overrides(overrides)
            .build();

        let mut stylesheets = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| SassGuardError::Walk {
                path: self.root.clone(),
                message: e.to_string(),
            })?;
            let path = entry.path();
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if is_file && is_stylesheet(path) && !self.is_excluded(path) {
                stylesheets.push(normalize(path));
            }
        }

        stylesheets.sort();
        Ok(stylesheets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn finds_both_syntaxes_sorted() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "sass/b.scss");
        touch(dir.path(), "sass/_a.sass");
        touch(dir.path(), "sass/notes.md");
        touch(dir.path(), "main.scss");

        let files = WalkCorpus::new(dir.path()).stylesheets().unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            names,
            vec![
                PathBuf::from("main.scss"),
                PathBuf::from("sass/_a.sass"),
                PathBuf::from("sass/b.scss"),
            ]
        );
    }

    #[test]
    fn skips_node_modules_and_excluded_dirs() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "node_modules/lib/x.scss");
        touch(dir.path(), "css/generated.scss");
        touch(dir.path(), "site.scss");

        let files = WalkCorpus::new(dir.path())
            .excluding(dir.path().join("css"))
            .stylesheets()
            .unwrap();

        assert_eq!(files, vec![normalize(&dir.path().join("site.scss"))]);
    }

    #[test]
    fn respects_gitignore_without_a_repository() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "vendor/\n").unwrap();
        touch(dir.path(), "vendor/bootstrap.scss");
        touch(dir.path(), "app.scss");

        let files = WalkCorpus::new(dir.path()).stylesheets().unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.scss"));
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let err = WalkCorpus::new(dir.path().join("nope"))
            .stylesheets()
            .unwrap_err();
        assert!(matches!(err, SassGuardError::DirectoryNotFound { .. }));
    }
}
