//! Error types for tokenizing, parsing and value-model operations.

use std::num::ParseFloatError;
use thiserror::Error;

/// Errors that can occur while reading a document or manipulating a [`Value`](crate::Value).
///
/// Lexical and structural variants carry the 1-based line and column where the
/// problem was detected.
#[derive(Error, Debug)]
pub enum JsonError {
    /// A character that starts no valid token.
    #[error("unexpected character {ch:?} at line {line}, column {column}")]
    UnexpectedCharacter { ch: char, line: usize, column: usize },

    /// `true`, `false` or `null` whose trailing characters don't match.
    #[error("invalid literal at line {line}, column {column}: expected `{expected}`")]
    InvalidLiteral {
        expected: &'static str,
        line: usize,
        column: usize,
    },

    /// A string literal with no closing quote before the end of input.
    #[error("unterminated string literal starting at line {line}, column {column}")]
    UnterminatedLiteral { line: usize, column: usize },

    /// A grammar violation: missing colon, missing or duplicate comma, a value
    /// where a key or delimiter was expected, or the reverse.
    #[error("malformed structure at line {line}, column {column}: {message}")]
    MalformedStructure {
        message: String,
        line: usize,
        column: usize,
    },

    /// An operation was invoked on a value whose active variant doesn't support it.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Read-only key lookup on an object with no matching entry.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// Numeric token text that is not a valid, finite 64-bit float. `source`
    /// is `None` when the text is well-formed but out of range.
    #[error("cannot convert {text:?} to a number at line {line}, column {column}")]
    NumberConversionFailure {
        text: String,
        line: usize,
        column: usize,
        #[source]
        source: Option<ParseFloatError>,
    },

    /// Arrays and objects nested deeper than the configured maximum.
    #[error("nesting depth {depth} exceeds the maximum of {max} at line {line}, column {column}")]
    NestingTooDeep {
        depth: usize,
        max: usize,
        line: usize,
        column: usize,
    },

    /// The underlying reader failed (including non-UTF-8 input).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout jsonm-core.
pub type Result<T> = std::result::Result<T, JsonError>;
