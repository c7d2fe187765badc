//! Clean command handler
//!
//! Removes the compiled outputs of deleted stylesheets.

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::Cli;

pub fn cmd_clean(cli: &Cli, paths: &[PathBuf]) -> Result<bool> {
    let session = super::prepare(cli, false)?;
    let report = session.run_on_removals(paths);

    session.runner().reporter().complete(&report);
    Ok(report.all_succeeded())
}
