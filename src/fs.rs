//! Whole-file convenience wrappers around the text engine.
//!
//! Thin I/O collaborators: read a `.json` file into text and delegate to
//! [`parse_text`], or render a tree and write it out, truncating or
//! creating the target.

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use crate::error::{ParseError, ParseErrorKind, WriteError};
use crate::parser::parse_text;
use crate::repr::{FloatRepr, IntRepr, StringRepr};
use crate::value::Value;
use crate::writer::to_text;

/// Read and parse the JSON file at `path`.
///
/// The extension must be exactly `.json`; the file must exist and be
/// readable.
pub fn parse_file<I, F, S>(path: impl AsRef<Path>) -> Result<Value<I, F, S>, ParseError>
where
    I: IntRepr,
    F: FloatRepr,
    S: StringRepr,
{
    let path = path.as_ref();

    if path.extension() != Some(OsStr::new("json")) {
        log::debug!("refusing {}: extension is not .json", path.display());
        return Err(ParseError::plain(ParseErrorKind::IncorrectFileExtension));
    }

    if !path.exists() {
        log::debug!("no file found at {}", path.display());
        return Err(ParseError::plain(ParseErrorKind::FileNotFound));
    }

    log::trace!("reading {}", path.display());
    let source = std::fs::read_to_string(path).map_err(|err| {
        log::debug!("could not read {}: {err}", path.display());
        if err.kind() == io::ErrorKind::NotFound {
            ParseError::plain(ParseErrorKind::FileNotFound)
        } else {
            ParseError::plain(ParseErrorKind::FileReadError)
        }
    })?;

    parse_text(&source)
}

/// Render `value` and write the text to `path`, truncating or creating
/// the file.
pub fn write_file<I, F, S>(value: &Value<I, F, S>, path: impl AsRef<Path>) -> Result<(), WriteError>
where
    I: IntRepr,
    F: FloatRepr,
    S: StringRepr,
{
    let path = path.as_ref();
    let text = to_text(value)?;
    log::trace!("writing {} bytes to {}", text.len(), path.display());
    std::fs::write(path, text)?;
    Ok(())
}
