//! Representation parameters for the value tree.
//!
//! A tree instance stores its numbers and strings in caller-chosen
//! concrete types. The three traits here are the seams those choices
//! plug into:
//!
//! - [`IntRepr`] - the integer representation, any fixed-width standard
//!   integer out of the box.
//! - [`FloatRepr`] - the float representation, `f32` or `f64`.
//! - [`StringRepr`] - the string representation. [`String`] (UTF-8) is
//!   the default; [`ByteString`] is a narrow 8-bit-unit representation
//!   and [`WideString`] a 16-bit-unit one, so the same engine serves
//!   both widths.
//!
//! Width failures are reported through the return values here and mapped
//! to the proper error kinds by the codec and parser.

use std::fmt;
use std::hash::Hash;
use std::num::IntErrorKind;

use crate::error::FormatError;

/// Why a numeric literal failed to land in its representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    /// The text is not a valid number for the representation's grammar.
    Malformed,
    /// The text is a valid number but overflows the representation.
    OutOfRange,
}

/// An integer representation for [`Value::Integer`](crate::Value).
pub trait IntRepr: Copy + fmt::Debug + fmt::Display + PartialEq + PartialOrd {
    /// Parse decimal text, distinguishing malformed input from overflow.
    fn parse_decimal(text: &str) -> Result<Self, NumberError>;
}

macro_rules! int_repr {
    ($($ty:ty),* $(,)?) => {$(
        impl IntRepr for $ty {
            fn parse_decimal(text: &str) -> Result<Self, NumberError> {
                text.parse::<$ty>().map_err(|err| match err.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        NumberError::OutOfRange
                    }
                    _ => NumberError::Malformed,
                })
            }
        }
    )*};
}

int_repr!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

/// A floating-point representation for [`Value::Float`](crate::Value).
pub trait FloatRepr: Copy + fmt::Debug + fmt::Display + PartialEq + PartialOrd {
    /// Parse decimal text, distinguishing malformed input from overflow.
    fn parse_decimal(text: &str) -> Result<Self, NumberError>;

    /// Canonical decimal text for serialization.
    ///
    /// Whole finite values get a `.0` suffix so that re-parsing the
    /// output classifies them as floats again.
    fn render(&self) -> String {
        let mut text = self.to_string();
        if text.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
            text.push_str(".0");
        }
        text
    }
}

impl FloatRepr for f64 {
    fn parse_decimal(text: &str) -> Result<Self, NumberError> {
        // `f64::from_str` never reports overflow; it saturates to
        // infinity, which no number token can spell directly.
        let value = text.parse::<f64>().map_err(|_| NumberError::Malformed)?;
        if value.is_infinite() {
            return Err(NumberError::OutOfRange);
        }
        Ok(value)
    }
}

impl FloatRepr for f32 {
    fn parse_decimal(text: &str) -> Result<Self, NumberError> {
        let wide = text.parse::<f64>().map_err(|_| NumberError::Malformed)?;
        if wide.is_infinite() {
            return Err(NumberError::OutOfRange);
        }
        let value = wide as f32;
        if value.is_infinite() {
            return Err(NumberError::OutOfRange);
        }
        Ok(value)
    }
}

/// A string representation for [`Value::String`](crate::Value) payloads
/// and object keys.
///
/// The codec drives decoding through [`push_char`](Self::push_char) for
/// unescaped source runs and [`push_unit`](Self::push_unit) for decoded
/// `\uXXXX` units; both return `false` when the representation cannot
/// hold the character, which the codec maps to `IllegalCodePoint` and
/// `StringTypeTooNarrow` respectively.
pub trait StringRepr: Sized + Clone + fmt::Debug + Eq + Hash + PartialOrd {
    /// The empty string of this representation.
    fn empty() -> Self;

    /// Append one unescaped source character. `false` if the
    /// representation cannot convert it.
    fn push_char(&mut self, ch: char) -> bool;

    /// Append one decoded 16-bit escape unit. `false` if the
    /// representation is too narrow to hold it.
    fn push_unit(&mut self, unit: u16) -> bool;

    /// Append this string to `out` in escaped JSON form, without the
    /// surrounding quotes.
    fn encode_into(&self, out: &mut String) -> Result<(), FormatError>;
}

impl StringRepr for String {
    fn empty() -> Self {
        String::new()
    }

    fn push_char(&mut self, ch: char) -> bool {
        self.push(ch);
        true
    }

    fn push_unit(&mut self, unit: u16) -> bool {
        // Lone surrogate units have no UTF-8 form.
        match char::from_u32(unit as u32) {
            Some(ch) => {
                self.push(ch);
                true
            }
            None => false,
        }
    }

    fn encode_into(&self, out: &mut String) -> Result<(), FormatError> {
        for ch in self.chars() {
            match ch {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\x08' => out.push_str("\\b"),
                '\x0C' => out.push_str("\\f"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                ch if ch <= '\x1F' => return Err(FormatError::IllegalCodePoint),
                ch => out.push(ch),
            }
        }
        Ok(())
    }
}

/// A narrow string representation with 8-bit code units.
///
/// Units are Latin-1 code points: characters up to U+00FF are stored
/// directly, anything wider cannot be represented. A `\uXXXX` escape
/// past U+00FF fails decoding as `StringTypeTooNarrow`; a literal
/// character past it fails as `IllegalCodePoint`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    /// Wrap raw Latin-1 units.
    pub fn from_latin1(units: Vec<u8>) -> Self {
        Self(units)
    }

    /// Build from text; `None` if any character is above U+00FF.
    pub fn from_text(text: &str) -> Option<Self> {
        let mut out = Self::default();
        for ch in text.chars() {
            if !out.push_char(ch) {
                return None;
            }
        }
        Some(out)
    }

    /// The underlying units.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of code units.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for &unit in &self.0 {
            f.write_char(unit as char)?;
        }
        Ok(())
    }
}

impl StringRepr for ByteString {
    fn empty() -> Self {
        Self::default()
    }

    fn push_char(&mut self, ch: char) -> bool {
        let code = ch as u32;
        if code > 0xFF {
            return false;
        }
        self.0.push(code as u8);
        true
    }

    fn push_unit(&mut self, unit: u16) -> bool {
        if unit > 0xFF {
            return false;
        }
        self.0.push(unit as u8);
        true
    }

    fn encode_into(&self, out: &mut String) -> Result<(), FormatError> {
        for &unit in &self.0 {
            match unit {
                b'"' => out.push_str("\\\""),
                b'\\' => out.push_str("\\\\"),
                0x08 => out.push_str("\\b"),
                0x0C => out.push_str("\\f"),
                b'\n' => out.push_str("\\n"),
                b'\r' => out.push_str("\\r"),
                b'\t' => out.push_str("\\t"),
                unit if unit <= 0x1F => return Err(FormatError::IllegalCodePoint),
                unit => out.push(unit as char),
            }
        }
        Ok(())
    }
}

/// A wide string representation with 16-bit code units.
///
/// UTF-16 shaped, but lone surrogate units are allowed, so every decoded
/// `\uXXXX` unit can be held verbatim. Encoding emits units outside
/// printable ASCII as `\uxxxx`; code points above U+FFFF are stored as a
/// surrogate pair and both halves are emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WideString(Vec<u16>);

impl WideString {
    /// Wrap raw 16-bit units.
    pub fn from_units(units: Vec<u16>) -> Self {
        Self(units)
    }

    /// The underlying units.
    pub fn units(&self) -> &[u16] {
        &self.0
    }

    /// Number of code units.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for WideString {
    fn from(text: &str) -> Self {
        Self(text.encode_utf16().collect())
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for decoded in char::decode_utf16(self.0.iter().copied()) {
            f.write_char(decoded.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl StringRepr for WideString {
    fn empty() -> Self {
        Self::default()
    }

    fn push_char(&mut self, ch: char) -> bool {
        let mut buf = [0u16; 2];
        self.0.extend_from_slice(ch.encode_utf16(&mut buf));
        true
    }

    fn push_unit(&mut self, unit: u16) -> bool {
        self.0.push(unit);
        true
    }

    fn encode_into(&self, out: &mut String) -> Result<(), FormatError> {
        for &unit in &self.0 {
            match unit {
                0x22 => out.push_str("\\\""),
                0x5C => out.push_str("\\\\"),
                0x08 => out.push_str("\\b"),
                0x0C => out.push_str("\\f"),
                0x0A => out.push_str("\\n"),
                0x0D => out.push_str("\\r"),
                0x09 => out.push_str("\\t"),
                unit if unit <= 0x1F => return Err(FormatError::IllegalCodePoint),
                unit if unit <= 0x7E => out.push(unit as u8 as char),
                unit => out.push_str(&format!("\\u{unit:04x}")),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_parse_distinguishes_malformed_from_overflow() {
        assert_eq!(i64::parse_decimal("42"), Ok(42));
        assert_eq!(i64::parse_decimal("-123"), Ok(-123));
        assert_eq!(i64::parse_decimal("1e10"), Err(NumberError::Malformed));
        assert_eq!(i8::parse_decimal("300"), Err(NumberError::OutOfRange));
        assert_eq!(u8::parse_decimal("-1"), Err(NumberError::Malformed));
    }

    #[test]
    fn float_parse_overflow_is_out_of_range() {
        assert_eq!(f64::parse_decimal("1.5"), Ok(1.5));
        assert_eq!(f64::parse_decimal("1.2.3"), Err(NumberError::Malformed));
        assert_eq!(f64::parse_decimal("1.0e400"), Err(NumberError::OutOfRange));
        // Fits f64 but not f32.
        assert_eq!(f32::parse_decimal("1.0e39"), Err(NumberError::OutOfRange));
        assert_eq!(f32::parse_decimal("1.5"), Ok(1.5));
    }

    #[test]
    fn float_render_keeps_decimal_point() {
        assert_eq!(1.5f64.render(), "1.5");
        assert_eq!(1.0f64.render(), "1.0");
        assert_eq!((-3.0f64).render(), "-3.0");
    }

    #[test]
    fn byte_string_width() {
        let mut s = ByteString::empty();
        assert!(s.push_unit(0xFF));
        assert!(!s.push_unit(0x100));
        assert!(s.push_char('ÿ'));
        assert!(!s.push_char('Ā'));
        assert_eq!(s.as_bytes(), &[0xFF, 0xFF]);
    }

    #[test]
    fn byte_string_round_trips_latin1() {
        let s = ByteString::from_text("café").unwrap();
        let mut out = String::new();
        s.encode_into(&mut out).unwrap();
        assert_eq!(out, "café");
    }

    #[test]
    fn wide_string_holds_lone_surrogates() {
        let mut s = WideString::empty();
        assert!(s.push_unit(0xD800));
        assert_eq!(s.units(), &[0xD800]);
    }

    #[test]
    fn wide_string_encodes_non_ascii_as_hex() {
        let s = WideString::from("aé💩");
        let mut out = String::new();
        s.encode_into(&mut out).unwrap();
        assert_eq!(out, "a\\u00e9\\ud83d\\udca9");
    }

    #[test]
    fn utf8_string_rejects_surrogate_units() {
        let mut s = String::empty();
        assert!(!s.push_unit(0xD800));
        assert!(s.push_unit(0x0041));
        assert_eq!(s, "A");
    }

    #[test]
    fn encode_rejects_raw_control_characters() {
        let mut out = String::new();
        let err = "a\x01b".to_string().encode_into(&mut out).unwrap_err();
        assert_eq!(err, FormatError::IllegalCodePoint);
    }
}
