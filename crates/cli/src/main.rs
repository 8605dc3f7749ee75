//! Yamlenv CLI - inspect, validate and dump YAML environment files.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build a `Yamlenv` session over the process environment.
//! - Format and display results in env, JSON or YAML form.
//!
//! Does NOT handle:
//! - Parsing or loading logic (see `crates/yamlenv`).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only command output.
//! - Global options (`--dir`, `--file`, `--uppercase`, `--overload`) apply to every subcommand.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::{Cli, LogFormat};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    match cli.log_format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
