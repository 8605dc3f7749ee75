//! Chained assertions over a batch of environment variables.
//!
//! Responsibilities:
//! - Check presence of every key in a batch when the batch is created.
//! - Apply chained predicates (`not_empty`, `is_integer`, `allowed_values`).
//! - Report every failure of a step in one `ValidationError`.
//!
//! Does NOT handle:
//! - Reading the loader's snapshot; values always come from the live store.
//!
//! Invariants:
//! - Each step raises as soon as it recorded a failure; there is no separate
//!   finalize step.
//! - Failures are reported in batch key order.

use std::fmt;

use thiserror::Error;

use crate::constants::VALIDATION_MESSAGE_PREFIX;
use crate::store::EnvStore;

/// The kind of assertion a variable failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Missing,
    Empty,
    NotInteger,
    NotAllowed,
}

impl FailureKind {
    pub fn reason(self) -> &'static str {
        match self {
            FailureKind::Missing => "missing",
            FailureKind::Empty => "empty",
            FailureKind::NotInteger => "not an integer",
            FailureKind::NotAllowed => "not an allowed value",
        }
    }
}

/// One variable that failed one assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    pub variable: String,
    pub kind: FailureKind,
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}", self.variable, self.kind.reason())
    }
}

/// All failures recorded by one validation step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    failures: Vec<AssertionFailure>,
}

impl ValidationError {
    pub fn failures(&self) -> &[AssertionFailure] {
        &self.failures
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{VALIDATION_MESSAGE_PREFIX}: ")?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{failure}")?;
        }
        f.write_str(".")
    }
}

/// The names in one assertion batch.
///
/// Accepts a single name or a sequence of names; duplicates are dropped,
/// keeping first occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keys(Vec<String>);

impl Keys {
    fn new(names: impl IntoIterator<Item = String>) -> Self {
        let mut keys: Vec<String> = Vec::new();
        for name in names {
            if !keys.contains(&name) {
                keys.push(name);
            }
        }
        Keys(keys)
    }
}

impl From<&str> for Keys {
    fn from(name: &str) -> Self {
        Keys(vec![name.to_string()])
    }
}

impl From<String> for Keys {
    fn from(name: String) -> Self {
        Keys(vec![name])
    }
}

impl From<&[&str]> for Keys {
    fn from(names: &[&str]) -> Self {
        Keys::new(names.iter().map(|n| n.to_string()))
    }
}

impl<const N: usize> From<[&str; N]> for Keys {
    fn from(names: [&str; N]) -> Self {
        Keys::new(names.into_iter().map(str::to_string))
    }
}

impl From<Vec<&str>> for Keys {
    fn from(names: Vec<&str>) -> Self {
        Keys::new(names.into_iter().map(str::to_string))
    }
}

impl From<Vec<String>> for Keys {
    fn from(names: Vec<String>) -> Self {
        Keys::new(names)
    }
}

/// Assertions over one batch of variables read from a store.
#[derive(Debug)]
pub struct Validator<'a, S: EnvStore + ?Sized> {
    store: &'a S,
    keys: Vec<String>,
}

impl<'a, S: EnvStore + ?Sized> Validator<'a, S> {
    /// Start a batch, failing if any key is absent from the store.
    pub fn new(store: &'a S, keys: impl Into<Keys>) -> Result<Self, ValidationError> {
        let Keys(keys) = keys.into();
        Self { store, keys }.check(FailureKind::Missing, |_| true)
    }

    /// The names in this batch.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Fail variables that are empty or whitespace-only.
    pub fn not_empty(self) -> Result<Self, ValidationError> {
        self.check(FailureKind::Empty, |value| !value.trim().is_empty())
    }

    /// Fail variables that are not an optionally signed run of decimal digits.
    pub fn is_integer(self) -> Result<Self, ValidationError> {
        self.check(FailureKind::NotInteger, is_integer)
    }

    /// Fail variables that are not exactly one of `allowed`.
    pub fn allowed_values<I, T>(self, allowed: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let allowed: Vec<T> = allowed.into_iter().collect();
        self.check(FailureKind::NotAllowed, |value| {
            allowed.iter().any(|candidate| candidate.as_ref() == value)
        })
    }

    /// Run one step over the whole batch and raise if anything failed.
    ///
    /// A variable that vanished from the store since the batch started is
    /// reported as missing.
    fn check(
        self,
        kind: FailureKind,
        predicate: impl Fn(&str) -> bool,
    ) -> Result<Self, ValidationError> {
        let failures: Vec<AssertionFailure> = self
            .keys
            .iter()
            .filter_map(|key| {
                let failed = match self.store.get(key) {
                    None => FailureKind::Missing,
                    Some(value) if !predicate(&value) => kind,
                    Some(_) => return None,
                };
                Some(AssertionFailure {
                    variable: key.clone(),
                    kind: failed,
                })
            })
            .collect();

        if failures.is_empty() {
            return Ok(self);
        }

        tracing::debug!(
            failures = failures.len(),
            batch = self.keys.len(),
            "Environment assertions failed"
        );
        Err(ValidationError { failures })
    }
}

fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
