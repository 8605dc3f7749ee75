//! YAML formatter implementation.
//!
//! Responsibilities:
//! - Format entries and raw values as YAML.
//!
//! Does NOT handle:
//! - Round-tripping into this crate's restricted input subset; output is
//!   plain `serde_yaml` and may use constructs the loader rejects.

use anyhow::Result;
use yamlenv::{FlatEntry, KeyCase, Value};

use crate::formatters::{Formatter, entry_outputs};

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_entries(&self, entries: &[FlatEntry]) -> Result<String> {
        Ok(serde_yaml::to_string(&entry_outputs(entries))?)
    }

    fn format_raw(&self, _key: &str, value: &Value, _case: KeyCase) -> Result<String> {
        Ok(serde_yaml::to_string(value)?)
    }
}
