//! sass-guard - incremental Sass compile runner
//!
//! Given a batch of changed stylesheets, sass-guard compiles each one to its
//! mapped output path and, for changed partials, works out which other
//! stylesheets import them so those can be recompiled instead.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Runner, Session};
pub use config::Config;
pub use domain::entities::{Artifact, CompileOutcome, RunReport, SyntaxError};
pub use domain::ports::{CompileEngine, Corpus, FileSystem, Notification, Reporter};
pub use domain::services::{map_output_path, normalize, relative_to};
pub use domain::value_objects::{CompileOptions, EngineOptions, OutputStyle};
pub use error::{SassGuardError, SassGuardResult};
