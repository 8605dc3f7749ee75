//! Dotenv rendering of loaded variables.
//!
//! Responsibilities:
//! - Render flattened entries as `NAME="value"` lines.
//! - Write the rendering to disk, creating parent directories.
//!
//! Invariants:
//! - Output is readable by dotenv parsers and yields the same name/value pairs.
//! - Variable expansion is disabled by escaping `$`.
//! - `write_dotenv` refuses names outside the dotenv key charset before
//!   touching the filesystem.

use std::fmt::Write as _;
use std::path::Path;

use crate::flatten::FlatEntry;
use crate::loader::Error;

/// Render entries as a dotenv file, one double-quoted assignment per line.
pub fn render_dotenv(entries: &[FlatEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}=\"{}\"", entry.name, escape(&entry.resolved));
    }
    out
}

/// Whether `name` is a key dotenv parsers accept.
///
/// A letter or `_`, then letters, digits, `_` or `.`.
pub fn is_dotenv_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// Write the dotenv rendering of `entries` to `path`.
pub fn write_dotenv(path: &Path, entries: &[FlatEntry]) -> Result<(), Error> {
    if let Some(bad) = entries.iter().find(|entry| !is_dotenv_name(&entry.name)) {
        tracing::warn!(path = %path.display(), name = %bad.name, "Refusing to dump unsupported name");
        return Err(Error::DumpName {
            name: bad.name.clone(),
        });
    }

    let to_error = |e: std::io::Error| {
        tracing::warn!(path = %path.display(), error = %e, "Failed to write environment dump");
        Error::Dump {
            path: path.to_path_buf(),
            kind: e.kind(),
        }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::write(path, render_dotenv(entries)).map_err(to_error)?;

    tracing::debug!(path = %path.display(), entries = entries.len(), "Wrote environment dump");
    Ok(())
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '$' => out.push_str("\\$"),
            other => out.push(other),
        }
    }
    out
}
