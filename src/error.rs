//! Error taxonomies for the JSON engine.
//!
//! Three disjoint families, mirroring the three ways the engine can be
//! disappointed:
//!
//! - [`ParseError`] - text-to-tree failures (lexical, grammatical, file
//!   level, or representation-width), carrying a 1-based source position
//!   when one is known.
//! - [`FormatError`] - tree-to-text failures.
//! - [`AccessError`] - caller contract violations against an already
//!   built tree.
//!
//! Every failure aborts the whole operation. Nothing is retried and no
//! partial result is ever returned.

use std::fmt;

use thiserror::Error;

/// The specific failure behind a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseErrorKind {
    /// A character sequence that is not any JSON token.
    #[error("unknown token")]
    UnknownToken,
    /// A valid token in a position the grammar does not allow.
    #[error("unexpected token")]
    UnexpectedToken,
    /// The source text ended before the document was complete.
    #[error("unexpected end of source")]
    UnexpectedSourceEnd,
    /// No file exists at the given path.
    #[error("file not found")]
    FileNotFound,
    /// The file exists but could not be read.
    #[error("file could not be read")]
    FileReadError,
    /// The path's extension is not exactly `.json`.
    #[error("incorrect file extension")]
    IncorrectFileExtension,
    /// A literal control character inside a string, or a character the
    /// string representation cannot convert.
    #[error("illegal code point")]
    IllegalCodePoint,
    /// A `\` not introducing a recognized escape sequence.
    #[error("bad reverse solidus")]
    BadReverseSolidus,
    /// A number token that native numeric parsing rejects.
    #[error("incorrect number format")]
    IncorrectNumberFormat,
    /// A decoded `\uXXXX` unit the string representation cannot hold.
    #[error("string type too narrow")]
    StringTypeTooNarrow,
    /// A number that parses but overflows the integer representation.
    #[error("integer type too narrow")]
    IntegerTypeTooNarrow,
    /// A number that parses but overflows the float representation.
    #[error("floating point type too narrow")]
    FloatingPointTypeTooNarrow,
    /// Container nesting exceeded the parser's depth limit.
    #[error("nesting too deep")]
    NestingTooDeep,
}

/// A failure while turning JSON text into a value tree.
///
/// Lexical and grammatical failures carry the 1-based line and character
/// column of the offending input; file-level failures and mid-container
/// source exhaustion carry no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// 1-based source line, when known.
    pub line: Option<u32>,
    /// 1-based character column, when known.
    pub column: Option<u32>,
}

impl ParseError {
    /// A positioned error.
    pub fn at(kind: ParseErrorKind, line: u32, column: u32) -> Self {
        Self {
            kind,
            line: Some(line),
            column: Some(column),
        }
    }

    /// An error with no source position.
    pub fn plain(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            line: None,
            column: None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let (Some(line), Some(column)) = (self.line, self.column) {
            write!(f, " at line {line}, column {column}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// A failure while turning a value tree into JSON text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FormatError {
    /// A control character with no two-character escape form.
    #[error("illegal code point")]
    IllegalCodePoint,
    /// A code unit sequence the output encoding cannot express.
    #[error("conversion failure")]
    ConversionFailure,
}

/// A caller contract violation against an already built tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AccessError {
    /// The stored tag does not match the requested accessor.
    #[error("incorrect type")]
    IncorrectType,
    /// An array index at or past the array's length.
    #[error("index out of range")]
    IndexOutOfRange,
    /// An object lookup for a key that is not present.
    #[error("no such key")]
    NoSuchKey,
    /// An ordering comparison between values that have no natural order.
    #[error("illegal operand")]
    IllegalOperand,
}

/// A failure while writing serialized text to a sink.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The tree could not be rendered as JSON text.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The sink rejected the rendered text.
    #[error("failed to write JSON text: {0}")]
    Io(#[from] std::io::Error),
}
