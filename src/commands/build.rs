//! Build and check command handlers

use anyhow::Result;

use crate::cli::Cli;

/// Compile every non-partial stylesheet; `check` only verifies them
pub fn cmd_build(cli: &Cli, check: bool) -> Result<bool> {
    let session = super::prepare(cli, check)?;
    let report = session.run_all()?;

    session.runner().reporter().complete(&report);
    Ok(report.all_succeeded())
}
