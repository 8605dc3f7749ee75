//! File loader implementation.
//!
//! Responsibilities:
//! - Read one environment file, parse it, and flatten it.
//! - Write entries through an `EnvStore` with immutable or overwrite policy.
//! - Keep the snapshot of the most recent successful load.
//!
//! Does NOT handle:
//! - Owning the store (see `session.rs`).
//! - Validation of variables (see `validator.rs`).
//!
//! Invariants:
//! - Read, parse, and name checks all complete before the first write, so a
//!   failing file applies zero variables.
//! - A failed call leaves the previous snapshot untouched.
//! - Variables that disappear from the file are never unset.

use std::path::{Path, PathBuf};

use super::error::Error;
use super::snapshot::EnvSnapshot;
use crate::flatten::{FlatEntry, KeyCase, flatten};
use crate::parser::parse_bytes;
use crate::store::{EnvStore, is_valid_variable};
use crate::value::{Document, Value};

/// How entries are written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Keep variables that already hold a value.
    Immutable,
    /// Overwrite variables unconditionally.
    Overwrite,
}

/// Loads one environment file into an `EnvStore`.
#[derive(Debug, Clone)]
pub struct Loader {
    file_path: PathBuf,
    case: KeyCase,
    snapshot: Option<EnvSnapshot>,
}

impl Loader {
    /// Create a loader for `path/filename`.
    pub fn new(path: impl AsRef<Path>, filename: &str, uppercase: bool) -> Self {
        Self {
            file_path: path.as_ref().join(filename),
            case: KeyCase::from_uppercase_flag(uppercase),
            snapshot: None,
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn is_uppercase(&self) -> bool {
        self.case == KeyCase::Upper
    }

    /// Whether a load or overload has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Load the file without overwriting variables that already hold a value.
    pub fn load<S: EnvStore + ?Sized>(&mut self, store: &mut S) -> Result<(), Error> {
        self.apply(store, LoadMode::Immutable)
    }

    /// Load the file, overwriting existing variables.
    pub fn overload<S: EnvStore + ?Sized>(&mut self, store: &mut S) -> Result<(), Error> {
        self.apply(store, LoadMode::Overwrite)
    }

    /// Read, parse, and apply the file with the given policy.
    pub fn apply<S: EnvStore + ?Sized>(
        &mut self,
        store: &mut S,
        mode: LoadMode,
    ) -> Result<(), Error> {
        let document = self.read_document()?;
        let entries = flatten(&document, self.case);

        if let Some(bad) = entries
            .iter()
            .find(|entry| !is_valid_variable(&entry.name, &entry.resolved))
        {
            return Err(Error::InvalidVariable {
                name: bad.name.clone(),
            });
        }

        let written = apply_entries(store, &entries, mode);

        tracing::debug!(
            path = %self.file_path.display(),
            entries = entries.len(),
            written,
            mode = ?mode,
            "Loaded environment file"
        );

        self.snapshot = Some(EnvSnapshot::new(document, entries, self.case));
        Ok(())
    }

    fn read_document(&self) -> Result<Document, Error> {
        let bytes = std::fs::read(&self.file_path).map_err(|e| {
            tracing::warn!(
                path = %self.file_path.display(),
                error = %e,
                "Failed to read environment file"
            );
            Error::InvalidPath {
                path: self.file_path.clone(),
                kind: e.kind(),
            }
        })?;

        parse_bytes(&bytes).map_err(|source| {
            tracing::warn!(
                path = %self.file_path.display(),
                line = source.line,
                error = %source.kind,
                "Failed to parse environment file"
            );
            Error::InvalidFile {
                path: self.file_path.clone(),
                source,
            }
        })
    }

    /// Snapshot of the most recent successful load.
    pub fn snapshot(&self) -> Option<&EnvSnapshot> {
        self.snapshot.as_ref()
    }

    /// Flattened value parsed for `name`.
    pub fn env(&self, name: &str) -> Option<&str> {
        self.snapshot.as_ref()?.resolved(name)
    }

    /// Unflattened value parsed for the top-level key `name`.
    pub fn raw_env(&self, name: &str) -> Option<&Value> {
        self.snapshot.as_ref()?.raw(name)
    }

    /// Flattened entries from the last load, empty before any load.
    pub fn entries(&self) -> &[FlatEntry] {
        self.snapshot
            .as_ref()
            .map(EnvSnapshot::entries)
            .unwrap_or_default()
    }
}

/// Write entries through the store, returning how many were written.
fn apply_entries<S: EnvStore + ?Sized>(
    store: &mut S,
    entries: &[FlatEntry],
    mode: LoadMode,
) -> usize {
    let mut written = 0;
    for entry in entries {
        let applied = match mode {
            LoadMode::Immutable => store.set_if_absent(&entry.name, &entry.resolved),
            LoadMode::Overwrite => {
                store.set_always(&entry.name, &entry.resolved);
                true
            }
        };

        if applied {
            written += 1;
            tracing::trace!(name = %entry.name, "Applied environment variable");
        } else {
            tracing::trace!(name = %entry.name, "Kept existing environment variable");
        }
    }
    written
}
