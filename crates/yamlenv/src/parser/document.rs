//! Indentation-driven structural parse of the restricted YAML subset.
//!
//! Responsibilities:
//! - Split the input into `key: value` lines, skipping blanks and comments.
//! - Build nested `Document`s from indentation.
//!
//! Does NOT handle:
//! - Value quoting and comments (see `scalar.rs`).
//! - Flattening (see `flatten.rs`).
//!
//! Invariants:
//! - Any rejected line rejects the whole document.
//! - Indentation is spaces only; a dedent must land on an open block's level.

use std::iter::Peekable;

use super::error::{ParseError, ParseErrorKind};
use super::scalar::{parse_key, parse_value, quoted_token_end};
use crate::value::{Document, Value};

/// One content line after lexical analysis.
#[derive(Debug)]
struct Line {
    number: usize,
    indent: usize,
    key: String,
    /// `None` when nothing follows the separator.
    value: Option<Value>,
}

/// Parse a complete document.
pub fn parse_document(input: &str) -> Result<Document, ParseError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut lines = collect_lines(input)?.into_iter().peekable();

    let Some(base_indent) = lines.peek().map(|line| line.indent) else {
        return Ok(Document::new());
    };

    let document = parse_block(&mut lines, base_indent)?;

    // Anything left dedented below the first line's level.
    if let Some(line) = lines.next() {
        return Err(ParseError::new(line.number, ParseErrorKind::UnexpectedIndent));
    }
    Ok(document)
}

/// Parse raw bytes, rejecting invalid UTF-8.
pub fn parse_bytes(bytes: &[u8]) -> Result<Document, ParseError> {
    let input = std::str::from_utf8(bytes).map_err(|e| {
        let line = bytes[..e.valid_up_to()]
            .iter()
            .filter(|&&b| b == b'\n')
            .count()
            + 1;
        ParseError::new(line, ParseErrorKind::InvalidUtf8)
    })?;
    parse_document(input)
}

fn collect_lines(input: &str) -> Result<Vec<Line>, ParseError> {
    let mut lines = Vec::new();
    let mut seen_marker = false;

    for (idx, raw) in input.lines().enumerate() {
        let number = idx + 1;
        let stripped = raw.trim();
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }

        let content = raw.trim_start_matches(' ');
        let indent = raw.len() - content.len();
        if content.starts_with('\t') {
            return Err(ParseError::new(number, ParseErrorKind::TabIndentation));
        }

        if indent == 0 && is_document_marker(stripped) {
            if seen_marker || !lines.is_empty() {
                return Err(ParseError::new(number, ParseErrorKind::MultipleDocuments));
            }
            seen_marker = true;
            continue;
        }

        if stripped == "-" || stripped.starts_with("- ") {
            return Err(ParseError::new(
                number,
                ParseErrorKind::SequenceNotSupported,
            ));
        }

        let (key, value) = split_key_value(stripped)
            .and_then(|(key, value)| Ok((parse_key(key)?, parse_value(value)?)))
            .map_err(|kind| ParseError::new(number, kind))?;

        lines.push(Line {
            number,
            indent,
            key,
            value,
        });
    }

    Ok(lines)
}

fn is_document_marker(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("---") else {
        return false;
    };
    let trimmed = rest.trim_start();
    trimmed.is_empty() || (trimmed.starts_with('#') && trimmed.len() < rest.len())
}

/// Split `key: value` at the first `:` followed by whitespace or end of line.
fn split_key_value(content: &str) -> Result<(&str, &str), ParseErrorKind> {
    let search_from = match content.chars().next() {
        Some('"' | '\'') => quoted_token_end(content)?,
        _ => 0,
    };

    let tail = &content[search_from..];
    for (offset, c) in tail.char_indices() {
        if c != ':' {
            continue;
        }
        let idx = search_from + offset;
        let after = &content[idx + 1..];
        if after.chars().next().is_none_or(char::is_whitespace) {
            return Ok((&content[..idx], after));
        }
    }
    Err(ParseErrorKind::MissingSeparator)
}

fn parse_block<I>(lines: &mut Peekable<I>, indent: usize) -> Result<Document, ParseError>
where
    I: Iterator<Item = Line>,
{
    let mut document = Document::new();

    while let Some(line) = lines.next_if(|line| line.indent >= indent) {
        if line.indent > indent {
            return Err(ParseError::new(line.number, ParseErrorKind::UnexpectedIndent));
        }

        let value = match line.value {
            Some(value) => value,
            None => match lines.peek().map(|next| next.indent) {
                Some(child_indent) if child_indent > indent => {
                    Value::Map(parse_block(lines, child_indent)?)
                }
                _ => Value::Null,
            },
        };

        document.insert(line.key, value);
    }

    Ok(document)
}
