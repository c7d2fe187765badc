//! Owners command handler

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::Cli;

/// Print the stylesheets that would be recompiled for `partials`
///
/// Files whose imports cannot be resolved are reported and fail the
/// command; the owners that did resolve are still printed.
pub fn cmd_owners(cli: &Cli, partials: &[PathBuf]) -> Result<bool> {
    let session = super::prepare(cli, false)?;
    let owners = session.owners(partials)?;

    let reporter = session.runner().reporter();
    reporter.owners(partials, &owners);
    Ok(reporter.error_count() == 0)
}
