//! Show command implementation.

use anyhow::Result;
use yamlenv::{EnvStore, Yamlenv};

use super::load_session;
use crate::formatters::OutputFormat;

/// Load the file and render its flattened entries.
pub fn run<S: EnvStore>(mut session: Yamlenv<S>, overload: bool, format: &str) -> Result<String> {
    let format = OutputFormat::from_str(format)?;
    load_session(&mut session, overload)?;

    let loader = session.loader()?;
    format.formatter().format_entries(loader.entries())
}
