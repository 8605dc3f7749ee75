//! Error types for loading environment files.
//!
//! Responsibilities:
//! - Define error variants for every load, dump, and session failure.
//! - Wrap validation failures so callers can use one error type with `?`.
//!
//! Invariants:
//! - Path errors include the attempted path.
//! - Parse errors NEVER include raw file contents to prevent secret leakage;
//!   only the line number and error kind are reported.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::parser::ParseError;
use crate::validator::ValidationError;

/// Errors that can occur while loading, inspecting, or dumping an environment file.
#[derive(Error, Debug)]
pub enum Error {
    /// The file is missing or unreadable.
    #[error("Unable to read the environment file at {path}: {kind}")]
    InvalidPath { path: PathBuf, kind: ErrorKind },

    /// The file does not match the accepted YAML subset.
    #[error("Input file does not contain valid Yaml at {path}")]
    InvalidFile {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// A flattened name or value cannot be stored in the environment.
    #[error("Invalid environment variable '{name}': names must be non-empty without '=' or NUL, values without NUL")]
    InvalidVariable { name: String },

    #[error("Loader has not been initialized yet.")]
    LoaderNotInitialized,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A loaded name cannot be represented in a dotenv file.
    #[error("Cannot dump variable '{name}': dotenv names must start with a letter or '_' and contain only letters, digits, '_' or '.'")]
    DumpName { name: String },

    /// Writing the dotenv dump failed.
    #[error("Unable to write the environment dump at {path}: {kind}")]
    Dump { path: PathBuf, kind: ErrorKind },
}
