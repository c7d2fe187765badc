//! CLI Argument Parsing
//!
//! Global flags override configuration for every subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use sass_guard::config::{ColorMode, Config};
use sass_guard::OutputStyle;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// sass-guard - incremental Sass compile runner
#[derive(Parser, Debug)]
#[command(name = "sass-guard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Configuration file (default: ./sass-guard.toml, then the user config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory scanned for stylesheets
    #[arg(short, long, global = true)]
    pub source: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Output file extension
    #[arg(long, global = true)]
    pub extension: Option<String>,

    /// CSS output style
    #[arg(long, global = true, value_enum)]
    pub style: Option<OutputStyle>,

    /// Extra import search path (repeatable)
    #[arg(short = 'I', long = "load-path", global = true)]
    pub load_paths: Vec<PathBuf>,

    /// Write every output directly into the output directory
    #[arg(long, global = true)]
    pub shallow: bool,

    /// Compile without writing anything
    #[arg(long, global = true)]
    pub noop: bool,

    /// Only report failures
    #[arg(long, global = true)]
    pub hide_success: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile every stylesheet under the source directory
    Build,

    /// Compile every stylesheet without writing outputs
    Check,

    /// Compile changed stylesheets and the owners of changed partials
    Changed {
        /// Changed files
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// List the stylesheets that import the given partials
    Owners {
        /// Partials to look up
        #[arg(required = true)]
        partials: Vec<PathBuf>,
    },

    /// Remove the outputs of deleted stylesheets
    Clean {
        /// Removed source files
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Build => "build",
            Commands::Check => "check",
            Commands::Changed { .. } => "changed",
            Commands::Owners { .. } => "owners",
            Commands::Clean { .. } => "clean",
        }
    }
}

impl Cli {
    /// Apply flags on top of file and environment configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(source) = &self.source {
            config.watch.source = source.clone();
        }
        if let Some(output) = &self.output {
            config.output.dir = output.clone();
        }
        if let Some(extension) = &self.extension {
            config.output.extension = extension.clone();
        }
        if let Some(style) = self.style {
            config.compile.style = style;
        }
        if !self.load_paths.is_empty() {
            config.compile.load_paths = self.load_paths.clone();
        }
        if let Some(color) = self.color {
            config.ui.color = color.into();
        }
        config.output.shallow |= self.shallow;
        config.output.noop |= self.noop;
        config.watch.hide_success |= self.hide_success;
    }
}
