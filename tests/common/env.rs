//! Test environment for running the sass-guard binary in isolation.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running a sass-guard command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated project directory with its own HOME, so no user config leaks in
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project root, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.project_path(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
        self
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.project_path(relative).exists()
    }

    /// Run sass-guard from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_sass-guard"))
            .current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("SASS_GUARD_OUTPUT")
            .env_remove("SASS_GUARD_EXTENSION")
            .env_remove("SASS_GUARD_STYLE")
            .env_remove("SASS_GUARD_LOAD_PATHS")
            .env_remove("SASS_GUARD_SHALLOW")
            .env_remove("SASS_GUARD_NOOP")
            .env_remove("SASS_GUARD_HIDE_SUCCESS")
            .output()
            .expect("failed to execute sass-guard");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
