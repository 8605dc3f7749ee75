//! Dump command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use yamlenv::{EnvStore, Yamlenv};

use super::load_session;

/// Load the file and write its variables as a dotenv file, returning the written path.
pub fn run<S: EnvStore>(mut session: Yamlenv<S>, overload: bool, output: &Path) -> Result<String> {
    load_session(&mut session, overload)?;

    let path = session
        .dump(output)
        .context("Failed to dump environment variables")?;
    Ok(path.display().to_string())
}
