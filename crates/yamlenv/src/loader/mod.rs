//! Environment file loading.
//!
//! Responsibilities:
//! - Load a YAML environment file into an `EnvStore` (`Loader`).
//! - Cache resolved and raw values of the last successful load (`EnvSnapshot`).
//! - Define the crate-wide `Error` type.
//!
//! Does NOT handle:
//! - Choosing or owning the store (see `session.rs`).
//! - YAML grammar details (see `parser/`).
//!
//! Invariants / Assumptions:
//! - `load` never overwrites a variable that already holds a value; `overload` always does.
//! - Each call applies its policy against the store as it is at call time.

mod error;
mod file;
mod snapshot;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use file::{LoadMode, Loader};
pub use snapshot::EnvSnapshot;
