//! Dotenv formatter implementation.
//!
//! Responsibilities:
//! - Format entries as `NAME="value"` lines, identical to `yamlenv dump`.
//! - Format a raw value by flattening it under its key.

use anyhow::Result;
use yamlenv::dump::render_dotenv;
use yamlenv::{Document, FlatEntry, KeyCase, Value, flatten::flatten};

use crate::formatters::Formatter;

/// Dotenv formatter.
pub struct EnvFormatter;

impl Formatter for EnvFormatter {
    fn format_entries(&self, entries: &[FlatEntry]) -> Result<String> {
        Ok(render_dotenv(entries))
    }

    fn format_raw(&self, key: &str, value: &Value, case: KeyCase) -> Result<String> {
        let document: Document = [(key, value.clone())].into_iter().collect();
        Ok(render_dotenv(&flatten(&document, case)))
    }
}
