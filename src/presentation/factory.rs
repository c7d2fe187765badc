//! Session Factory
//!
//! Wires the application layer to concrete infrastructure. This is the
//! dependency injection point for the CLI.

use std::path::Path;

use crate::application::{Runner, Session};
use crate::config::Config;
use crate::domain::services::relative_to;
use crate::infrastructure::{LocalFs, SassCliEngine, WalkCorpus};

use super::formatter::Formatter;

/// Session with all production dependencies
pub type CliSession = Session<SassCliEngine, LocalFs, Formatter, WalkCorpus>;

/// Create a session for `config`, reporting through `formatter`
///
/// Paths are resolved against `base_dir`, the working directory of the
/// invocation. The corpus is the configured source directory minus the
/// output directory, so compiled artifacts never feed back into owner lookup.
pub fn create_session(config: &Config, formatter: Formatter, base_dir: &Path) -> CliSession {
    let source = relative_to(&config.watch.source, base_dir);
    let output_dir = relative_to(&config.output.dir, base_dir);

    let mut options = config.to_compile_options();
    options.input_root = Some(source.clone());
    options.output_dir = output_dir.clone();

    let engine = SassCliEngine::new(&config.compile.executable);
    let runner = Runner::new(engine, LocalFs::new(), formatter, options);
    let corpus = WalkCorpus::new(source).excluding(output_dir);

    Session::new(runner, corpus).with_base_dir(base_dir)
}
