//! sass-guard CLI - incremental Sass compile runner
//!
//! Usage: sass-guard <COMMAND>
//!
//! Commands:
//!   build    Compile every stylesheet under the source directory
//!   check    Compile without writing outputs
//!   changed  Compile changed stylesheets and the owners of changed partials
//!   owners   List the stylesheets that import the given partials
//!   clean    Remove the outputs of deleted stylesheets

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let succeeded = match &cli.command {
        Commands::Build => commands::build::cmd_build(&cli, false)?,
        Commands::Check => commands::build::cmd_build(&cli, true)?,
        Commands::Changed { paths } => commands::changed::cmd_changed(&cli, paths)?,
        Commands::Owners { partials } => commands::owners::cmd_owners(&cli, partials)?,
        Commands::Clean { paths } => commands::clean::cmd_clean(&cli, paths)?,
    };

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}
