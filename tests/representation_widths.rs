//! Width behavior across representation choices.
//!
//! The same source text lands differently depending on the tree's
//! integer, float and string representations. These tests pin the
//! classification of each width failure and the points where a narrower
//! or wider representation changes the outcome.

use jsontree::{parse_text, to_text, ByteString, ParseErrorKind, Value, WideString};

// ============================================================================
// Integer representations
// ============================================================================

#[test_log::test]
fn narrow_integer_overflow_is_too_narrow() {
    let err = parse_text::<i8, f64, String>("300").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::IntegerTypeTooNarrow);
    assert_eq!((err.line, err.column), (Some(1), Some(1)));

    let edge: Value<i8, f64, String> = parse_text("-128").unwrap();
    assert_eq!(edge.as_integer(), Ok(-128));
}

#[test_log::test]
fn default_integer_overflow_is_too_narrow() {
    let err = parse_text::<i64, f64, String>("9223372036854775808").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::IntegerTypeTooNarrow);

    let max: Value = parse_text("9223372036854775807").unwrap();
    assert_eq!(max.as_integer(), Ok(i64::MAX));
}

#[test_log::test]
fn unsigned_representation_rejects_negatives_as_malformed() {
    let err = parse_text::<u32, f64, String>("-1").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::IncorrectNumberFormat);
}

// ============================================================================
// Float representations
// ============================================================================

#[test_log::test]
fn float_width_decides_overflow() {
    // Fits f64, overflows f32.
    let err = parse_text::<i64, f32, String>("3.5e38").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::FloatingPointTypeTooNarrow);
    let wide: Value = parse_text("3.5e38").unwrap();
    assert_eq!(wide.as_floating_point(), Ok(3.5e38));
}

#[test_log::test]
fn double_overflow_is_too_narrow() {
    let err = parse_text::<i64, f64, String>("1.0e400").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::FloatingPointTypeTooNarrow);
}

#[test_log::test]
fn whole_floats_round_trip_as_floats() {
    let tree: Value<i64, f32, String> = parse_text("4.0").unwrap();
    let text = to_text(&tree).unwrap();
    assert_eq!(text, "4.0");
    let again: Value<i64, f32, String> = parse_text(&text).unwrap();
    assert_eq!(again, tree);
}

// ============================================================================
// String representations: escapes at the width boundary
// ============================================================================

#[test_log::test]
fn byte_string_accepts_escapes_up_to_latin1() {
    let tree: Value<i64, f64, ByteString> = parse_text(r#""caf\u00e9""#).unwrap();
    let payload = tree.as_string().unwrap();
    assert_eq!(payload.as_bytes(), b"caf\xe9");
}

#[test_log::test]
fn byte_string_rejects_escapes_past_latin1() {
    let err = parse_text::<i64, f64, ByteString>(r#""\u0100""#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::StringTypeTooNarrow);
}

#[test_log::test]
fn byte_string_rejects_wide_literal_characters() {
    let err = parse_text::<i64, f64, ByteString>("\"Ā\"").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::IllegalCodePoint);
}

#[test_log::test]
fn utf8_string_rejects_lone_surrogate_escapes() {
    let err = parse_text::<i64, f64, String>(r#""\uD800""#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::StringTypeTooNarrow);
}

#[test_log::test]
fn wide_string_holds_lone_surrogate_escapes() {
    let tree: Value<i64, f64, WideString> = parse_text(r#""\uD800""#).unwrap();
    assert_eq!(tree.as_string().unwrap().units(), &[0xD800]);
}

// ============================================================================
// String representations: serialization
// ============================================================================

#[test_log::test]
fn wide_string_serializes_non_ascii_as_hex_escapes() {
    let tree: Value<i64, f64, WideString> = Value::String(WideString::from("aé"));
    assert_eq!(to_text(&tree).unwrap(), r#""a\u00e9""#);
}

#[test_log::test]
fn wide_string_rendering_is_a_fixed_point() {
    let source = r#""\ud83d\udca9""#;
    let tree: Value<i64, f64, WideString> = parse_text(source).unwrap();
    assert_eq!(to_text(&tree).unwrap(), source);
}

#[test_log::test]
fn byte_string_keys_address_members() {
    let tree: Value<i64, f64, ByteString> = parse_text(r#"{"k": 1}"#).unwrap();
    let key = ByteString::from_text("k").unwrap();
    assert_eq!(tree.get(&key).unwrap().as_integer(), Ok(1));
}
