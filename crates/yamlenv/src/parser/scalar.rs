//! Scalar classification for the value (and key) half of a `key: value` line.
//!
//! Responsibilities:
//! - Strip trailing comments outside quotes.
//! - Unquote single- and double-quoted strings, applying escapes once.
//! - Reject unquoted values that contain whitespace or start with an
//!   unsupported YAML indicator.
//!
//! Does NOT handle:
//! - Indentation or nesting (see `document.rs`).
//! - Integer detection; numeric-looking values stay strings.

use super::error::ParseErrorKind;
use crate::value::Value;

/// Characters that would start a YAML construct this subset does not support.
const UNSUPPORTED_INDICATORS: &[char] = &['[', ']', '{', '}', '&', '*', '!', '|', '>', '@', '`'];

/// Parse the text after a `key:` separator.
///
/// Returns `Ok(None)` when nothing but whitespace or a comment follows the
/// separator; the caller decides whether that opens a nested block or is null.
pub fn parse_value(input: &str) -> Result<Option<Value>, ParseErrorKind> {
    let trimmed = input.trim_start();
    match trimmed.chars().next() {
        None | Some('#') => Ok(None),
        Some('"') => {
            let (value, rest) = parse_double_quoted(&trimmed[1..])?;
            ensure_only_comment(rest)?;
            Ok(Some(Value::Scalar(value)))
        }
        Some('\'') => {
            let (value, rest) = parse_single_quoted(&trimmed[1..])?;
            ensure_only_comment(rest)?;
            Ok(Some(Value::Scalar(value)))
        }
        Some(_) => parse_plain(trimmed).map(Some),
    }
}

/// Parse a mapping key, unquoting it if needed.
pub fn parse_key(input: &str) -> Result<String, ParseErrorKind> {
    let trimmed = input.trim();
    let key = match trimmed.chars().next() {
        None => return Err(ParseErrorKind::EmptyKey),
        Some('"') => {
            let (key, rest) = parse_double_quoted(&trimmed[1..])?;
            if !rest.trim().is_empty() {
                return Err(ParseErrorKind::TrailingCharacters);
            }
            key
        }
        Some('\'') => {
            let (key, rest) = parse_single_quoted(&trimmed[1..])?;
            if !rest.trim().is_empty() {
                return Err(ParseErrorKind::TrailingCharacters);
            }
            key
        }
        Some(_) => trimmed.to_string(),
    };

    if key.is_empty() {
        return Err(ParseErrorKind::EmptyKey);
    }
    Ok(key)
}

/// Byte offset just past the closing quote of a quoted token starting at `input[0]`.
pub(crate) fn quoted_token_end(input: &str) -> Result<usize, ParseErrorKind> {
    let mut chars = input.char_indices();
    let Some((_, quote)) = chars.next() else {
        return Err(ParseErrorKind::UnterminatedQuote);
    };
    let body = &input[quote.len_utf8()..];
    let rest = match quote {
        '"' => parse_double_quoted(body)?.1,
        _ => parse_single_quoted(body)?.1,
    };
    Ok(input.len() - rest.len())
}

fn parse_plain(input: &str) -> Result<Value, ParseErrorKind> {
    let value = strip_comment(input).trim();

    if let Some(first) = value
        .chars()
        .next()
        .filter(|c| UNSUPPORTED_INDICATORS.contains(c))
    {
        return Err(ParseErrorKind::UnsupportedSyntax(first));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ParseErrorKind::UnquotedWhitespace);
    }
    if is_null_literal(value) {
        return Ok(Value::Null);
    }
    Ok(Value::Scalar(value.to_string()))
}

fn is_null_literal(value: &str) -> bool {
    matches!(value, "" | "~" | "null" | "Null" | "NULL")
}

/// Cut an unquoted value at its comment.
///
/// A `#` starts a comment only at the beginning of the text or after whitespace;
/// `a#b` is a literal value.
fn strip_comment(input: &str) -> &str {
    let mut after_whitespace = true;
    for (idx, c) in input.char_indices() {
        if c == '#' && after_whitespace {
            return &input[..idx];
        }
        after_whitespace = c.is_whitespace();
    }
    input
}

/// What follows a closing quote: only whitespace and an optional comment.
fn ensure_only_comment(rest: &str) -> Result<(), ParseErrorKind> {
    let trimmed = rest.trim_start();
    if trimmed.is_empty() {
        return Ok(());
    }
    if trimmed.starts_with('#') && trimmed.len() < rest.len() {
        return Ok(());
    }
    Err(ParseErrorKind::TrailingCharacters)
}

/// Parse a double-quoted body (opening quote already consumed).
///
/// Returns the unescaped string and the text after the closing quote.
fn parse_double_quoted(input: &str) -> Result<(String, &str), ParseErrorKind> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices();
    while let Some((idx, c)) = chars.next() {
        match c {
            '"' => return Ok((out, &input[idx + 1..])),
            '\\' => match chars.next() {
                Some((_, escaped)) => out.push(unescape(escaped)?),
                None => return Err(ParseErrorKind::UnterminatedQuote),
            },
            c => out.push(c),
        }
    }
    Err(ParseErrorKind::UnterminatedQuote)
}

fn unescape(c: char) -> Result<char, ParseErrorKind> {
    match c {
        '"' => Ok('"'),
        '\\' => Ok('\\'),
        '/' => Ok('/'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        't' => Ok('\t'),
        other => Err(ParseErrorKind::InvalidEscape(other)),
    }
}

/// Parse a single-quoted body (opening quote already consumed).
///
/// `''` is a literal quote; backslashes are literal.
fn parse_single_quoted(input: &str) -> Result<(String, &str), ParseErrorKind> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if c != '\'' {
            out.push(c);
            continue;
        }
        if chars.next_if(|&(_, next)| next == '\'').is_some() {
            out.push('\'');
        } else {
            return Ok((out, &input[idx + 1..]));
        }
    }
    Err(ParseErrorKind::UnterminatedQuote)
}
