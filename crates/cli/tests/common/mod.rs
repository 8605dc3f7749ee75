//! Shared test utilities for yamlenv CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Write environment files into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic: `YAMLENV_*` and
//!   `RUST_LOG` from the host are cleared.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Returns a hermetic `yamlenv` command for integration testing.
pub fn yamlenv_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("yamlenv");

    cmd.env_remove("YAMLENV_DIR")
        .env_remove("YAMLENV_FILE")
        .env_remove("YAMLENV_UPPERCASE")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a `yamlenv` command pointed at `dir`.
pub fn yamlenv_cmd_in(dir: &TempDir) -> Command {
    let mut cmd = yamlenv_cmd();
    cmd.arg("--dir").arg(dir.path());
    cmd
}

/// Creates a temporary directory containing `env.yml` with `contents`.
pub fn env_dir(contents: &str) -> TempDir {
    env_dir_with("env.yml", contents)
}

/// Creates a temporary directory containing `filename` with `contents`.
pub fn env_dir_with(filename: &str, contents: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join(filename), contents).expect("Failed to write env file");
    dir
}
