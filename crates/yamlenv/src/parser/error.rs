//! Error types for YAML parsing.
//!
//! Invariants:
//! - Errors carry a 1-based line number and a kind, NEVER the raw line
//!   contents, so secrets in the file cannot leak through error messages.

use thiserror::Error;

/// Why a line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("file is not valid UTF-8")]
    InvalidUtf8,

    #[error("unquoted value contains whitespace; quote the value")]
    UnquotedWhitespace,

    #[error("unterminated quoted string")]
    UnterminatedQuote,

    #[error("unexpected characters after closing quote")]
    TrailingCharacters,

    #[error("unsupported escape sequence '\\{0}'")]
    InvalidEscape(char),

    #[error("expected 'key: value'")]
    MissingSeparator,

    #[error("empty key")]
    EmptyKey,

    #[error("unexpected indentation")]
    UnexpectedIndent,

    #[error("tabs are not allowed in indentation")]
    TabIndentation,

    #[error("sequences are not supported")]
    SequenceNotSupported,

    #[error("unsupported YAML syntax starting with '{0}'")]
    UnsupportedSyntax(char),

    #[error("multiple documents are not supported")]
    MultipleDocuments,
}

/// A parse failure at a specific line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}
