//! CLI command implementations.

pub mod check;
pub mod dump;
pub mod raw;
pub mod show;

use anyhow::{Context, Result};
use yamlenv::{EnvStore, Yamlenv};

/// Load or overload the session's file.
pub fn load_session<S: EnvStore>(session: &mut Yamlenv<S>, overload: bool) -> Result<()> {
    let result = if overload {
        session.overload()
    } else {
        session.load()
    };
    result.with_context(|| {
        format!(
            "Failed to load environment file {}",
            session.file_path().display()
        )
    })
}
