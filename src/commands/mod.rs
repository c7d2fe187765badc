//! Command handlers
//!
//! Each handler returns whether the batch succeeded; `main` turns a failed
//! batch into exit status 1.

pub mod build;
pub mod changed;
pub mod clean;
pub mod owners;

use anyhow::{Context, Result};

use sass_guard::config::Config;
use sass_guard::presentation::{create_session, CliSession, ConsoleStyle, Formatter, OutputMode};

use crate::cli::Cli;

/// Resolve configuration for this invocation and wire up a session
///
/// Configuration warnings are reported before anything is compiled.
pub fn prepare(cli: &Cli, force_noop: bool) -> Result<CliSession> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let (mut config, warnings) = Config::load_layered(cli.config.as_deref(), &cwd)?;
    cli.apply_overrides(&mut config);
    config.output.noop |= force_noop;

    let formatter = formatter_for(cli, &config);
    for warning in &warnings {
        formatter.config_warning(warning);
    }

    Ok(create_session(&config, formatter, &cwd))
}

fn formatter_for(cli: &Cli, config: &Config) -> Formatter {
    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Console(ConsoleStyle::detect(config.ui.color, config.ui.unicode))
    };
    Formatter::new(cli.command.name(), mode, config.watch.hide_success)
}
