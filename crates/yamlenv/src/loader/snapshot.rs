//! Cached result of one successful load.
//!
//! Invariants:
//! - Built once per load/overload and replaced wholesale, never patched.
//! - Holds the parsed values even when `load` kept a pre-existing
//!   environment value instead of writing the file's value.

use std::collections::HashMap;

use crate::flatten::{FlatEntry, KeyCase};
use crate::value::{Document, Value};

/// Resolved and raw values from the most recent load.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    entries: Vec<FlatEntry>,
    index: HashMap<String, usize>,
    raw: Document,
}

impl EnvSnapshot {
    pub(crate) fn new(document: Document, entries: Vec<FlatEntry>, case: KeyCase) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(pos, entry)| (entry.name.clone(), pos))
            .collect();
        let raw = document
            .into_iter()
            .map(|(key, value)| (case.apply(&key), value))
            .collect();
        Self {
            entries,
            index,
            raw,
        }
    }

    pub fn get(&self, name: &str) -> Option<&FlatEntry> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    /// Flattened string value for `name`.
    pub fn resolved(&self, name: &str) -> Option<&str> {
        self.get(name).map(|entry| entry.resolved.as_str())
    }

    /// Unflattened value of the top-level key `name`.
    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.raw.get(name)
    }

    /// Flattened entries in file order.
    pub fn entries(&self) -> &[FlatEntry] {
        &self.entries
    }

    /// The top-level document with case-mapped keys.
    pub fn raw_document(&self) -> &Document {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
