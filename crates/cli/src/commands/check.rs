//! Check command implementation.
//!
//! Responsibilities:
//! - Load the environment file (unless `--no-load`) and assert variables.
//! - Apply the requested predicates in a fixed order: presence, non-empty,
//!   integer, allowed values.
//!
//! Invariants:
//! - Assertions read the live process environment, so variables set by the
//!   caller count even when the file does not define them.
//! - `--no-load` and `--overload` are mutually exclusive.

use anyhow::{Result, bail};
use tracing::info;
use yamlenv::{EnvStore, Yamlenv};

use super::load_session;

/// Predicates requested on the command line.
#[derive(Debug, Default)]
pub struct Checks {
    pub not_empty: bool,
    pub integer: bool,
    pub allowed: Vec<String>,
}

pub fn run<S: EnvStore>(
    mut session: Yamlenv<S>,
    overload: bool,
    no_load: bool,
    keys: Vec<String>,
    checks: &Checks,
) -> Result<String> {
    if no_load && overload {
        bail!("--no-load cannot be combined with --overload");
    }
    if !no_load {
        load_session(&mut session, overload)?;
    }

    let count = keys.len();
    let mut validator = session.required(keys)?;
    if checks.not_empty {
        validator = validator.not_empty()?;
    }
    if checks.integer {
        validator = validator.is_integer()?;
    }
    if !checks.allowed.is_empty() {
        validator = validator.allowed_values(&checks.allowed)?;
    }

    info!(variables = validator.keys().len(), requested = count, "Environment checks passed");
    Ok("OK".to_string())
}
