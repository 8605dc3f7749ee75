//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Print command output to stdout.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping (see `error` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::commands::check::Checks;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let session = cli.session();
    tracing::debug!(path = %session.file_path().display(), "Using environment file");

    let output = match cli.command {
        Commands::Check {
            keys,
            not_empty,
            integer,
            allowed,
            no_load,
        } => {
            let checks = Checks {
                not_empty,
                integer,
                allowed,
            };
            commands::check::run(session, cli.overload, no_load, keys, &checks)?
        }
        Commands::Show { format } => commands::show::run(session, cli.overload, &format)?,
        Commands::Raw { key, format } => commands::raw::run(session, cli.overload, &key, &format)?,
        Commands::Dump { output } => commands::dump::run(session, cli.overload, &output)?,
    };

    if output.is_empty() || output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
    Ok(())
}
