//! Raw command implementation.
//!
//! Responsibilities:
//! - Print the unflattened value of one top-level key.
//!
//! Invariants:
//! - The key is matched after case mapping, so `--uppercase` sessions look up
//!   upper-cased keys.

use anyhow::{Result, anyhow};
use yamlenv::{EnvStore, KeyCase, Yamlenv};

use super::load_session;
use crate::formatters::OutputFormat;

pub fn run<S: EnvStore>(
    mut session: Yamlenv<S>,
    overload: bool,
    key: &str,
    format: &str,
) -> Result<String> {
    let format = OutputFormat::from_str(format)?;
    load_session(&mut session, overload)?;

    let value = session.get_raw_env(key).ok_or_else(|| {
        anyhow!(
            "Key '{}' not found in {}",
            key,
            session.file_path().display()
        )
    })?;
    let case = KeyCase::from_uppercase_flag(session.is_uppercase());
    format.formatter().format_raw(key, value, case)
}
