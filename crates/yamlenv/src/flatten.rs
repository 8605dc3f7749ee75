//! Flattening of nested documents into environment variable entries.
//!
//! Responsibilities:
//! - Walk a `Document` depth-first in source order.
//! - Join nested keys with `KEY_SEPARATOR` and apply the casing policy.
//!
//! Invariants:
//! - Mappings produce no entry of their own, only their leaves do.
//! - Joining is purely syntactic: `A` + `B_C` yields `A_B_C` with no escaping.
//! - Names are unique per pass; a later colliding path overwrites the earlier
//!   entry's value and keeps its position.

use crate::constants::KEY_SEPARATOR;
use crate::value::{Document, Value};

/// How emitted variable names are cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyCase {
    /// Keep keys exactly as written.
    #[default]
    Preserve,
    /// Upper-case every emitted name.
    Upper,
}

impl KeyCase {
    pub fn from_uppercase_flag(uppercase: bool) -> Self {
        if uppercase { KeyCase::Upper } else { KeyCase::Preserve }
    }

    pub fn apply(self, name: &str) -> String {
        match self {
            KeyCase::Preserve => name.to_string(),
            KeyCase::Upper => name.to_uppercase(),
        }
    }
}

/// One leaf reached by flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry {
    /// Flattened variable name.
    pub name: String,
    /// String exported to the environment (`""` for nulls).
    pub resolved: String,
    /// The leaf value as parsed.
    pub raw: Value,
}

/// Flatten a document into ordered entries.
pub fn flatten(document: &Document, case: KeyCase) -> Vec<FlatEntry> {
    let mut entries = Vec::new();
    walk(document, None, case, &mut entries);
    entries
}

fn walk(document: &Document, prefix: Option<&str>, case: KeyCase, out: &mut Vec<FlatEntry>) {
    for (key, value) in document.iter() {
        let joined = match prefix {
            Some(parent) => format!("{parent}{KEY_SEPARATOR}{key}"),
            None => key.to_string(),
        };

        match value {
            Value::Map(child) => walk(child, Some(&joined), case, out),
            Value::Scalar(_) | Value::Null => {
                let entry = FlatEntry {
                    name: case.apply(&joined),
                    resolved: value.resolved().unwrap_or_default().to_string(),
                    raw: value.clone(),
                };
                push_unique(out, entry);
            }
        }
    }
}

fn push_unique(out: &mut Vec<FlatEntry>, entry: FlatEntry) {
    match out.iter_mut().find(|existing| existing.name == entry.name) {
        Some(existing) => {
            tracing::trace!(name = %entry.name, "Flattened name collision, later value wins");
            *existing = entry;
        }
        None => out.push(entry),
    }
}
