//! Batch results

use std::path::{Path, PathBuf};

/// An input file paired with the output it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl FileTask {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Directory the output will be written into, if it has one
    pub fn output_dir(&self) -> Option<&Path> {
        self.output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

/// Result of `Runner::run`: outputs in input order, plus overall success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    outputs: Vec<PathBuf>,
    all_succeeded: bool,
}

impl Default for RunReport {
    fn default() -> Self {
        Self {
            outputs: Vec::new(),
            all_succeeded: true,
        }
    }
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file that compiled (and was written, unless noop)
    pub fn record_success(&mut self, output: PathBuf) {
        self.outputs.push(output);
    }

    /// Record a file that failed
    pub fn record_failure(&mut self) {
        self.all_succeeded = false;
    }

    pub fn outputs(&self) -> &[PathBuf] {
        &self.outputs
    }

    pub fn all_succeeded(&self) -> bool {
        self.all_succeeded
    }

    pub fn into_parts(self) -> (Vec<PathBuf>, bool) {
        (self.outputs, self.all_succeeded)
    }
}
