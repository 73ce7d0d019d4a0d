//! Integration tests for leading-prefix numeric parsing

use prims_core::numeric::{parse_float, parse_int};
use prims_core::{ffi_to_float, ffi_to_int, str_to_float, str_to_int, ParseNumberError};

#[test]
fn test_str_to_int_examples() {
    assert_eq!(str_to_int("42"), Some(42));
    assert_eq!(str_to_int("abc"), None);
    assert_eq!(str_to_int(" \t 123abc"), Some(123));
}

#[test]
fn test_str_to_float_examples() {
    assert_eq!(str_to_float("3.14"), Some(3.14));
    assert_eq!(str_to_float(""), None);
    assert_eq!(str_to_float("2.5e3 units"), Some(2500.0));
}

#[test]
fn test_unsafe_parsers_use_nan_sentinel() {
    assert!(ffi_to_int("").is_nan());
    assert!(ffi_to_int("x1").is_nan());
    assert!(ffi_to_float("").is_nan());
    assert!(ffi_to_float("-").is_nan());

    assert_eq!(ffi_to_int("-12.7"), -12.0);
    assert_eq!(ffi_to_float("-12.7"), -12.7);
}

#[test]
fn test_ffi_to_int_beyond_exact_range() {
    // Past 2^53 and i64, the result is the nearest double to the literal.
    for literal in [
        "9007199254740993",
        "18446744073709551617",
        "123456789012345678901234567890",
        "99999999999999999999999999999999999999",
    ] {
        assert_eq!(ffi_to_int(literal), literal.parse::<f64>().unwrap(), "{literal}");
        assert_eq!(str_to_int(literal).is_none(), literal.len() > 19, "{literal}");
    }
}

#[test]
fn test_error_reasons() {
    assert_eq!(parse_int(" "), Err(ParseNumberError::Empty));
    assert_eq!(parse_int("px"), Err(ParseNumberError::NoDigits));
    assert_eq!(
        parse_int("123456789012345678901234"),
        Err(ParseNumberError::Overflow)
    );
    assert_eq!(parse_float("e"), Err(ParseNumberError::NoDigits));
    assert_eq!(
        ParseNumberError::Overflow.to_string(),
        "integer does not fit in 64 bits"
    );
}

#[test]
fn test_int_and_float_views_of_same_input() {
    assert_eq!(str_to_int("1e3"), Some(1));
    assert_eq!(str_to_float("1e3"), Some(1000.0));
    assert_eq!(str_to_int("0x10"), Some(16));
    assert_eq!(str_to_float("0x10"), Some(0.0));
}

#[test]
fn test_parsers_are_idempotent() {
    for s in ["42", "abc", "3.5x", ""] {
        assert_eq!(str_to_int(s), str_to_int(s));
        assert_eq!(str_to_float(s), str_to_float(s));
    }
}
