//! Parser for the restricted YAML subset accepted in environment files.
//!
//! Responsibilities:
//! - Turn file contents into a `Document` tree (see `document.rs`).
//! - Classify individual scalars, honoring quotes and comments (see `scalar.rs`).
//!
//! Does NOT handle:
//! - Sequences, anchors/aliases, tags, block scalars, flow collections, or
//!   multi-document streams. These are rejected rather than approximated.
//!
//! Invariants:
//! - Parsing is all-or-nothing: one bad line fails the whole document.

mod document;
mod error;
mod scalar;

pub use document::{parse_bytes, parse_document};
pub use error::{ParseError, ParseErrorKind};
