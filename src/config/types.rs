//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CompileOptions, ConfigWarning, OutputStyle};
use crate::error::SassGuardResult;

use super::loader;

/// Compiled output configuration (`[output]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default)]
    pub shallow: bool,

    #[serde(default)]
    pub noop: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            extension: default_extension(),
            shallow: false,
            noop: false,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("css")
}

fn default_extension() -> String {
    ".css".to_string()
}

/// Engine configuration (`[compile]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileConfig {
    #[serde(default)]
    pub load_paths: Vec<PathBuf>,

    #[serde(default)]
    pub style: OutputStyle,

    #[serde(default)]
    pub debug_info: bool,

    #[serde(default)]
    pub line_numbers: bool,

    /// Sass executable to run
    #[serde(default = "default_executable")]
    pub executable: PathBuf,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            load_paths: Vec::new(),
            style: OutputStyle::default(),
            debug_info: false,
            line_numbers: false,
            executable: default_executable(),
        }
    }
}

fn default_executable() -> PathBuf {
    PathBuf::from("sass")
}

/// Source tree configuration (`[watch]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Directory scanned for stylesheets; also stripped from output paths
    #[serde(default = "default_source")]
    pub source: PathBuf,

    #[serde(default)]
    pub all_on_start: bool,

    #[serde(default)]
    pub hide_success: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            all_on_start: false,
            hide_success: false,
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Console configuration (`[ui]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub compile: CompileConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load the explicit file, else project config, user config, or defaults
    pub fn load_layered(
        explicit: Option<&Path>,
        project_root: &Path,
    ) -> SassGuardResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(explicit, project_root)
    }

    /// Apply environment variable overrides (SASS_GUARD_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Build the options for one batch of compilations
    pub fn to_compile_options(&self) -> CompileOptions {
        CompileOptions {
            output_dir: self.output.dir.clone(),
            extension: self.output.extension.clone(),
            input_root: Some(self.watch.source.clone()),
            load_paths: self.compile.load_paths.clone(),
            style: self.compile.style,
            debug_info: self.compile.debug_info,
            line_numbers: self.compile.line_numbers,
            shallow: self.output.shallow,
            noop: self.output.noop,
            all_on_start: self.watch.all_on_start,
            hide_success: self.watch.hide_success,
        }
    }
}
