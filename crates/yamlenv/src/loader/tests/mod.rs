//! Tests for the environment file loader.
//!
//! Responsibilities:
//! - Test immutable and overwrite policies against an in-memory store.
//! - Test every bundled fixture file end to end.
//! - Test snapshot caching and failure atomicity.
//! - Test writes through the real process environment.
//!
//! Does NOT handle:
//! - Scalar and document grammar edge cases (tested in `parser/`).
//! - Validator chaining (tested in `validator.rs`).
//!
//! Invariants:
//! - Tests that touch the process environment hold `env_lock()` and run `#[serial]`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::PathBuf;
use std::sync::Mutex;

pub mod fixture_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Directory holding the bundled `valid/` and `invalid/` fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn valid_fixtures() -> PathBuf {
    fixtures_dir().join("valid")
}

pub fn invalid_fixtures() -> PathBuf {
    fixtures_dir().join("invalid")
}
