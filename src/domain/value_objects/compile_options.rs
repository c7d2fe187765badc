//! Compile options value objects
//!
//! `CompileOptions` is built once per invocation from configuration and passed
//! explicitly to the runner. The engine only ever sees the narrower
//! `EngineOptions` derived from it.

use std::path::{Path, PathBuf};

use super::OutputStyle;

/// Options the engine needs to compile or resolve a single file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineOptions {
    /// Extra directories searched when resolving imports
    pub load_paths: Vec<PathBuf>,
    /// Output style
    pub style: OutputStyle,
    /// Emit debug info for browser tooling
    pub debug_info: bool,
    /// Emit source line comments
    pub line_numbers: bool,
}

/// Options for a batch of compilations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Base output directory
    pub output_dir: PathBuf,
    /// Output file suffix (leading dot optional)
    pub extension: String,
    /// Directory stripped from inputs before mirroring them under `output_dir`
    pub input_root: Option<PathBuf>,
    /// Import search paths
    pub load_paths: Vec<PathBuf>,
    /// Output style
    pub style: OutputStyle,
    /// Emit debug info
    pub debug_info: bool,
    /// Emit source line comments
    pub line_numbers: bool,
    /// Flatten the output tree
    pub shallow: bool,
    /// Compile for validation only, never touch the filesystem
    pub noop: bool,
    /// Compile everything when a session starts
    pub all_on_start: bool,
    /// Suppress success reporting
    pub hide_success: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("css"),
            extension: ".css".to_string(),
            input_root: None,
            load_paths: Vec::new(),
            style: OutputStyle::default(),
            debug_info: false,
            line_numbers: false,
            shallow: false,
            noop: false,
            all_on_start: false,
            hide_success: false,
        }
    }
}

impl CompileOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_input_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.input_root = Some(root.into());
        self
    }

    pub fn with_load_paths(mut self, load_paths: Vec<PathBuf>) -> Self {
        self.load_paths = load_paths;
        self
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_shallow(mut self, shallow: bool) -> Self {
        self.shallow = shallow;
        self
    }

    pub fn with_noop(mut self, noop: bool) -> Self {
        self.noop = noop;
        self
    }

    pub fn with_all_on_start(mut self, all_on_start: bool) -> Self {
        self.all_on_start = all_on_start;
        self
    }

    pub fn with_hide_success(mut self, hide_success: bool) -> Self {
        self.hide_success = hide_success;
        self
    }

    /// Extension with exactly one leading dot (empty stays empty)
    pub fn normalized_extension(&self) -> String {
        let trimmed = self.extension.trim_start_matches('.');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!(".{}", trimmed)
        }
    }

    /// Input root, if one is configured and non-empty
    pub fn input_root(&self) -> Option<&Path> {
        self.input_root
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Derive the subset of options the engine cares about
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            load_paths: self.load_paths.clone(),
            style: self.style,
            debug_info: self.debug_info,
            line_numbers: self.line_numbers,
        }
    }
}
