//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide env (dotenv), JSON and YAML output formats.
//! - Render flattened entries and raw values through the `Formatter` trait.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Entries are rendered in file order.
//! - Null raw values render as `null` in JSON/YAML and as an empty string in env output.

mod env;
mod json;
mod yaml;


use anyhow::Result;
use serde::Serialize;
use yamlenv::{FlatEntry, KeyCase, Value};

pub use env::EnvFormatter;
pub use json::JsonFormatter;
pub use yaml::YamlFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Env,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "env" | "dotenv" => Ok(OutputFormat::Env),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: env, json, yaml", s),
        }
    }

    pub fn formatter(self) -> Box<dyn Formatter> {
        match self {
            OutputFormat::Env => Box::new(EnvFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
            OutputFormat::Yaml => Box::new(YamlFormatter),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format flattened entries.
    fn format_entries(&self, entries: &[FlatEntry]) -> Result<String>;

    /// Format the raw value stored under a top-level key.
    ///
    /// `case` is the session's key case, applied where output names variables.
    fn format_raw(&self, key: &str, value: &Value, case: KeyCase) -> Result<String>;
}

/// One flattened variable in structured output.
#[derive(Debug, Serialize)]
pub struct EntryOutput<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> From<&'a FlatEntry> for EntryOutput<'a> {
    fn from(entry: &'a FlatEntry) -> Self {
        Self {
            name: &entry.name,
            value: &entry.resolved,
        }
    }
}

pub(crate) fn entry_outputs(entries: &[FlatEntry]) -> Vec<EntryOutput<'_>> {
    entries.iter().map(EntryOutput::from).collect()
}
