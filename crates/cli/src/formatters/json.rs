//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format entries and raw values as pretty-printed JSON.

use anyhow::Result;
use yamlenv::{FlatEntry, KeyCase, Value};

use crate::formatters::{Formatter, entry_outputs};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_entries(&self, entries: &[FlatEntry]) -> Result<String> {
        Ok(serde_json::to_string_pretty(&entry_outputs(entries))?)
    }

    fn format_raw(&self, _key: &str, value: &Value, _case: KeyCase) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}
