//! Environment store boundary.
//!
//! Responsibilities:
//! - Define `EnvStore`, the only path through which variables are read for
//!   validation and written by the loader.
//! - Provide `ProcessEnv` (the real process environment) and `MemoryEnv`
//!   (an in-memory store for tests and embedding).
//!
//! Invariants:
//! - A variable is present when the store holds a value for it, including
//!   the empty string.
//! - `ProcessEnv` is the only code in the workspace that mutates the process
//!   environment outside of tests.

use std::collections::HashMap;

/// Get/set access to a keyed store of environment variables.
pub trait EnvStore {
    /// Current value of `name`, if any.
    fn get(&self, name: &str) -> Option<String>;

    /// Write `name` unconditionally.
    fn set_always(&mut self, name: &str, value: &str);

    fn exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Write `name` only if the store holds no value for it.
    ///
    /// Returns `true` if the value was written.
    fn set_if_absent(&mut self, name: &str, value: &str) -> bool {
        if self.exists(name) {
            return false;
        }
        self.set_always(name, value);
        true
    }
}

/// Whether `name`/`value` can be stored as an OS environment variable.
///
/// Names must be non-empty and free of `=` and NUL; values must be free of NUL.
pub fn is_valid_variable(name: &str, value: &str) -> bool {
    !name.is_empty() && !name.contains(['=', '\0']) && !value.contains('\0')
}

/// The real process environment.
///
/// Writes are visible to `std::env::var` and inherited by child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }

    fn set_always(&mut self, name: &str, value: &str) {
        // SAFETY: the process environment is only mutated during single-threaded
        // startup; callers that load from several threads must serialize calls.
        unsafe {
            std::env::set_var(name, value);
        }
    }
}

/// An in-memory environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set_always(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
