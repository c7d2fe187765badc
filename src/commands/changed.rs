//! Changed command handler
//!
//! Entry point for editors and external watchers that already know which
//! files changed.

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::Cli;

pub fn cmd_changed(cli: &Cli, paths: &[PathBuf]) -> Result<bool> {
    let session = super::prepare(cli, false)?;
    let report = session.run_on_changes(paths)?;

    session.runner().reporter().complete(&report);
    Ok(report.all_succeeded())
}
