//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//! - Build the `Yamlenv` session described by the global options.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use yamlenv::Yamlenv;
use yamlenv::constants::DEFAULT_FILENAME;

#[derive(Parser)]
#[command(name = "yamlenv")]
#[command(about = "Load YAML environment files, validate variables, and export dotenv files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  yamlenv show\n  yamlenv --dir config --uppercase show --format json\n  yamlenv check DB_HOST DB_PORT --not-empty\n  yamlenv check DB_PORT --integer\n  yamlenv raw DATABASE --format yaml\n  yamlenv dump .env\n"
)]
pub struct Cli {
    /// Directory containing the environment file
    #[arg(short, long, global = true, env = "YAMLENV_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Environment file name inside the directory
    #[arg(short, long, global = true, env = "YAMLENV_FILE", default_value = DEFAULT_FILENAME)]
    pub file: String,

    /// Upper-case every exported variable name
    #[arg(short, long, global = true, env = "YAMLENV_UPPERCASE")]
    pub uppercase: bool,

    /// Overwrite variables that are already set in the environment
    #[arg(long, global = true)]
    pub overload: bool,

    /// Log output format (logs are written to stderr; filter with RUST_LOG)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Session over the process environment for the configured file.
    pub fn session(&self) -> Yamlenv {
        Yamlenv::new(&self.dir)
            .with_filename(self.file.as_str())
            .with_uppercase(self.uppercase)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the file and assert that variables are set
    Check {
        /// Variable names to check
        #[arg(required = true)]
        keys: Vec<String>,

        /// Fail on empty or whitespace-only values
        #[arg(long)]
        not_empty: bool,

        /// Fail on values that are not integers
        #[arg(long)]
        integer: bool,

        /// Comma-separated list of allowed values
        #[arg(long, value_delimiter = ',')]
        allowed: Vec<String>,

        /// Check the current environment without loading the file (not with --overload)
        #[arg(long)]
        no_load: bool,
    },

    /// Print the flattened variables from the file
    Show {
        /// Output format (env, json, yaml)
        #[arg(long, default_value = "env")]
        format: String,
    },

    /// Print the unflattened value of a top-level key
    Raw {
        /// Top-level key to print
        key: String,

        /// Output format (env, json, yaml)
        #[arg(long, default_value = "yaml")]
        format: String,
    },

    /// Write the flattened variables to a dotenv file
    Dump {
        /// Output path, relative to the environment file directory
        output: PathBuf,
    },
}
