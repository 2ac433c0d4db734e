//! Indented JSON text emission.
//!
//! Walks a value tree depth first and renders it with one tab per
//! nesting level. Empty containers collapse to `[]`/`{}` with no
//! interior whitespace. Object members are emitted in the backing
//! association's iteration order, which is not the source order.

use std::io;

use crate::error::{FormatError, WriteError};
use crate::repr::{FloatRepr, IntRepr, StringRepr};
use crate::value::Value;

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push('\t');
    }
}

fn write_value<I, F, S>(
    value: &Value<I, F, S>,
    depth: usize,
    out: &mut String,
) -> Result<(), FormatError>
where
    I: IntRepr,
    F: FloatRepr,
    S: StringRepr,
{
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(true) => out.push_str("true"),
        Value::Boolean(false) => out.push_str("false"),
        Value::Integer(number) => out.push_str(&number.to_string()),
        Value::Float(number) => out.push_str(&number.render()),
        Value::String(payload) => {
            out.push('"');
            payload.encode_into(out)?;
            out.push('"');
        }
        Value::Array(elements) => {
            if elements.is_empty() {
                out.push_str("[]");
            } else {
                out.push_str("[\n");
                for (index, element) in elements.iter().enumerate() {
                    indent(depth + 1, out);
                    write_value(element, depth + 1, out)?;
                    if index + 1 < elements.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                indent(depth, out);
                out.push(']');
            }
        }
        Value::Object(members) => {
            if members.is_empty() {
                out.push_str("{}");
            } else {
                out.push_str("{\n");
                let count = members.len();
                for (index, (key, member)) in members.iter().enumerate() {
                    indent(depth + 1, out);
                    out.push('"');
                    key.encode_into(out)?;
                    out.push_str("\": ");
                    write_value(member, depth + 1, out)?;
                    if index + 1 < count {
                        out.push(',');
                    }
                    out.push('\n');
                }
                indent(depth, out);
                out.push('}');
            }
        }
    }
    Ok(())
}

/// Render a value tree as indented JSON text.
pub fn to_text<I, F, S>(value: &Value<I, F, S>) -> Result<String, FormatError>
where
    I: IntRepr,
    F: FloatRepr,
    S: StringRepr,
{
    let mut out = String::new();
    write_value(value, 0, &mut out)?;
    Ok(out)
}

/// Render a value tree and write the text to any output sink.
pub fn write_stream<W, I, F, S>(value: &Value<I, F, S>, sink: &mut W) -> Result<(), WriteError>
where
    W: io::Write,
    I: IntRepr,
    F: FloatRepr,
    S: StringRepr,
{
    let text = to_text(value)?;
    sink.write_all(text.as_bytes())?;
    Ok(())
}
