//! jsontree - an embeddable JSON text engine.
//!
//! Converts JSON source text into an in-memory value tree, exposes typed
//! accessors over that tree, and re-emits the tree as indented JSON
//! text. The tree is generic over the caller's integer, floating-point
//! and string representations, so one engine serves narrow
//! embedded-friendly types and wide ones alike; width overflows surface
//! as classified errors rather than silent truncation.
//!
//! # Architecture
//!
//! - [`lexer`] - tokenizer with 1-based line/column tracking
//! - [`codec`] - string escape decoding/encoding against a string representation
//! - [`repr`] - representation parameters for integers, floats and strings
//! - [`parser`] - recursive descent over the token sequence
//! - [`value`] - the tagged value tree and its typed accessors
//! - [`writer`] - indented JSON text emission
//! - [`fs`] - whole-file read/write wrappers
//! - [`error`] - the parsing, formatting and interface-misuse taxonomies
//!
//! # Example
//!
//! ```
//! use jsontree::{parse_text, to_text, Value};
//!
//! let tree: Value = parse_text(r#"{"a": 1, "b": [true, null]}"#).unwrap();
//! assert_eq!(tree.get("a").unwrap().as_integer().unwrap(), 1);
//! assert!(tree.get("b").unwrap().at(1).unwrap().is_null());
//!
//! let text = to_text(&tree).unwrap();
//! let again: Value = parse_text(&text).unwrap();
//! assert_eq!(again, tree);
//! ```
//!
//! Everything runs synchronously on the calling thread; a built tree is
//! safe to share across threads read-only.

// Library code must propagate errors, never panic.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod codec;
pub mod error;
pub mod fs;
pub mod lexer;
pub mod parser;
pub mod repr;
pub mod value;
pub mod writer;

// Re-export commonly used types
pub use error::{AccessError, FormatError, ParseError, ParseErrorKind, WriteError};
pub use fs::{parse_file, write_file};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::{parse_text, parse_text_with_depth, Parser, DEFAULT_MAX_DEPTH};
pub use repr::{ByteString, FloatRepr, IntRepr, NumberError, StringRepr, WideString};
pub use value::{ObjectMap, Value};
pub use writer::{to_text, write_stream};
