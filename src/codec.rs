//! String escape codec.
//!
//! Decodes the raw, still-escaped payload of a string token into a
//! caller-chosen [`StringRepr`], and encodes a representation back into
//! escaped JSON text. The tokenizer only found the string's boundaries;
//! everything about escape legality and representation width is decided
//! here.
//!
//! Error positions are the token's column plus the character offset of
//! the offending character within the raw payload.

use crate::error::{FormatError, ParseError, ParseErrorKind};
use crate::repr::StringRepr;

/// Decode raw escaped string text into `S`.
///
/// `line` and `column` are the position of the string token, used to
/// place any error.
pub fn decode<S: StringRepr>(raw: &str, line: u32, column: u32) -> Result<S, ParseError> {
    let mut output = S::empty();
    let mut chars = raw.chars();
    // Character offset into the raw payload, for error positions.
    let mut offset: u32 = 0;

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            let escape_at = column + offset;
            offset += 1;
            let Some(escape) = chars.next() else {
                log::debug!("dangling reverse solidus at ({line}, {escape_at})");
                return Err(ParseError::at(
                    ParseErrorKind::BadReverseSolidus,
                    line,
                    escape_at,
                ));
            };
            offset += 1;

            let unit: u16 = match escape {
                '"' => b'"' as u16,
                '\\' => b'\\' as u16,
                '/' => b'/' as u16,
                'b' => 0x08,
                'f' => 0x0C,
                'n' => b'\n' as u16,
                'r' => b'\r' as u16,
                't' => b'\t' as u16,
                'u' => {
                    let mut unit: u16 = 0;
                    for _ in 0..4 {
                        let digit = chars.next().and_then(|hex| hex.to_digit(16));
                        let Some(digit) = digit else {
                            log::debug!("malformed \\u escape at ({line}, {escape_at})");
                            return Err(ParseError::at(
                                ParseErrorKind::BadReverseSolidus,
                                line,
                                escape_at,
                            ));
                        };
                        unit = (unit << 4) | digit as u16;
                        offset += 1;
                    }
                    unit
                }
                _ => {
                    log::debug!("unrecognized escape '{escape}' at ({line}, {escape_at})");
                    return Err(ParseError::at(
                        ParseErrorKind::BadReverseSolidus,
                        line,
                        escape_at,
                    ));
                }
            };

            if !output.push_unit(unit) {
                log::debug!("code unit {unit:#06x} too wide for string representation");
                return Err(ParseError::at(
                    ParseErrorKind::StringTypeTooNarrow,
                    line,
                    escape_at,
                ));
            }
            continue;
        }

        // Literal control characters must be escaped.
        if (ch as u32) <= 0x1F {
            return Err(ParseError::at(
                ParseErrorKind::IllegalCodePoint,
                line,
                column + offset,
            ));
        }

        if !output.push_char(ch) {
            log::debug!("character {ch:?} not representable in string representation");
            return Err(ParseError::at(
                ParseErrorKind::IllegalCodePoint,
                line,
                column + offset,
            ));
        }
        offset += 1;
    }

    Ok(output)
}

/// Encode `value` as escaped JSON string text, without surrounding
/// quotes.
pub fn encode<S: StringRepr>(value: &S) -> Result<String, FormatError> {
    let mut out = String::new();
    value.encode_into(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::{ByteString, WideString};

    fn decode_utf8(raw: &str) -> Result<String, ParseError> {
        decode(raw, 1, 1)
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(decode_utf8("hello").unwrap(), "hello");
    }

    #[test]
    fn two_character_escapes() {
        assert_eq!(decode_utf8(r#"a\"b\\c\/d"#).unwrap(), "a\"b\\c/d");
        assert_eq!(decode_utf8(r"x\b\f\n\r\t").unwrap(), "x\x08\x0C\n\r\t");
    }

    #[test]
    fn unicode_escape() {
        assert_eq!(decode_utf8(r"\u0041").unwrap(), "A");
        assert_eq!(decode_utf8(r"\u00e9").unwrap(), "é");
    }

    #[test]
    fn literal_control_character_is_illegal() {
        let err = decode_utf8("ab\x01").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::IllegalCodePoint);
        assert_eq!(err.column, Some(3));
    }

    #[test]
    fn escaped_control_character_is_fine() {
        assert_eq!(decode_utf8(r"\u0001").unwrap(), "\x01");
    }

    #[test]
    fn unrecognized_escape_is_bad_reverse_solidus() {
        let err = decode_utf8(r"a\q").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::BadReverseSolidus);
        assert_eq!(err.column, Some(2));
    }

    #[test]
    fn truncated_unicode_escape_is_bad_reverse_solidus() {
        for raw in [r"\u", r"\u00", r"\u00G1", r"a\"] {
            let err = decode_utf8(raw).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::BadReverseSolidus, "raw: {raw}");
        }
    }

    #[test]
    fn narrow_representation_boundary() {
        let ok: ByteString = decode(r"\u00FF", 1, 1).unwrap();
        assert_eq!(ok.as_bytes(), &[0xFF]);
        let err = decode::<ByteString>(r"\u0100", 1, 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::StringTypeTooNarrow);
    }

    #[test]
    fn narrow_representation_rejects_wide_run_character() {
        let err = decode::<ByteString>("aĀb", 1, 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::IllegalCodePoint);
        assert_eq!(err.column, Some(2));
    }

    #[test]
    fn utf8_representation_rejects_surrogate_escape() {
        let err = decode::<String>(r"\uD800", 1, 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::StringTypeTooNarrow);
    }

    #[test]
    fn wide_representation_holds_surrogate_escape() {
        let wide: WideString = decode(r"\uD800", 1, 1).unwrap();
        assert_eq!(wide.units(), &[0xD800]);
    }

    #[test]
    fn encode_escapes_and_rejects_controls() {
        assert_eq!(encode(&"a\"b\\c\n".to_string()).unwrap(), r#"a\"b\\c\n"#);
        assert_eq!(
            encode(&"\x02".to_string()).unwrap_err(),
            FormatError::IllegalCodePoint
        );
    }

    #[test]
    fn encode_decode_inverse_for_utf8() {
        let original = "tabs\tand \"quotes\" and \\slashes\\ and é".to_string();
        let encoded = encode(&original).unwrap();
        let decoded: String = decode(&encoded, 1, 1).unwrap();
        assert_eq!(decoded, original);
    }
}
