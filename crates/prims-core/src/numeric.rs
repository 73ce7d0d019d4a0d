//! Leading-prefix numeric parsing
//!
//! Both parsers skip leading white space and then consume the longest valid
//! numeric prefix, ignoring whatever follows it. The `ffi_*` forms report
//! failure with a NaN sentinel; the `str_to_*` forms return `None`.
//!
//! Integer syntax: `[+-]? ( 0[xX] hex+ | digit+ )`.
//! Float syntax: `[+-]? ( Infinity | digit+ ( . digit* )? exp? | . digit+ exp? )`
//! where `exp` is `[eE] [+-]? digit+`. An incomplete exponent is left unconsumed.

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{char, digit0, digit1, hex_digit1, one_of},
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};
use thiserror::Error;

use crate::classify::is_space_char;

/// Reason a leading-prefix parse produced no value
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseNumberError {
    #[error("input is empty or only white space")]
    Empty,

    #[error("input does not start with a number")]
    NoDigits,

    #[error("integer does not fit in 64 bits")]
    Overflow,
}

/// Parse the leading integer of `s`, or NaN if there is none.
///
/// The result is always integral (or NaN). Magnitudes beyond `i64` are
/// approximated rather than rejected.
pub fn ffi_to_int(s: &str) -> f64 {
    match leading_int(s) {
        Ok(literal) => literal.to_f64(),
        Err(_) => f64::NAN,
    }
}

/// Parse the leading float of `s`, or NaN if there is none.
pub fn ffi_to_float(s: &str) -> f64 {
    parse_float(s).unwrap_or(f64::NAN)
}

/// Parse the leading integer of `s`.
///
/// Returns `None` exactly when [`ffi_to_int`] would return NaN, and also
/// when the integer does not fit in an `i64`.
pub fn str_to_int(s: &str) -> Option<i64> {
    parse_int(s).ok()
}

/// Parse the leading float of `s`.
pub fn str_to_float(s: &str) -> Option<f64> {
    parse_float(s).ok()
}

/// Parse the leading integer of `s`, reporting why it failed.
pub fn parse_int(s: &str) -> Result<i64, ParseNumberError> {
    leading_int(s)?.to_i64()
}

/// Parse the leading float of `s`, reporting why it failed.
pub fn parse_float(s: &str) -> Result<f64, ParseNumberError> {
    let input = skip_leading_space(s)?;
    float_literal(input)
        .map(|(_, value)| value)
        .map_err(|_| ParseNumberError::NoDigits)
}

fn skip_leading_space(s: &str) -> Result<&str, ParseNumberError> {
    let rest = s.trim_start_matches(is_space_char);
    if rest.is_empty() {
        Err(ParseNumberError::Empty)
    } else {
        Ok(rest)
    }
}

/// Integer prefix as recognised, before conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IntLiteral<'a> {
    negative: bool,
    radix: u32,
    digits: &'a str,
}

impl IntLiteral<'_> {
    fn digit_values(&self) -> impl Iterator<Item = u32> + '_ {
        let radix = self.radix;
        self.digits.chars().filter_map(move |c| c.to_digit(radix))
    }

    fn to_i64(self) -> Result<i64, ParseNumberError> {
        let radix = i64::from(self.radix);
        self.digit_values().try_fold(0i64, |acc, digit| {
            let digit = i64::from(digit);
            let shifted = acc.checked_mul(radix);
            let next = if self.negative {
                shifted.and_then(|v| v.checked_sub(digit))
            } else {
                shifted.and_then(|v| v.checked_add(digit))
            };
            next.ok_or(ParseNumberError::Overflow)
        })
    }

    fn to_f64(self) -> f64 {
        let magnitude = if self.radix == 10 {
            // Correctly rounded, unlike a digit-by-digit fold.
            self.digits.parse::<f64>().unwrap_or(f64::NAN)
        } else {
            let radix = f64::from(self.radix);
            self.digit_values()
                .fold(0.0, |acc, digit| acc * radix + f64::from(digit))
        };
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

fn leading_int(s: &str) -> Result<IntLiteral<'_>, ParseNumberError> {
    let input = skip_leading_space(s)?;
    int_literal(input)
        .map(|(_, literal)| literal)
        .map_err(|_| ParseNumberError::NoDigits)
}

fn sign(input: &str) -> IResult<&str, Option<char>> {
    opt(one_of("+-"))(input)
}

fn int_literal(input: &str) -> IResult<&str, IntLiteral<'_>> {
    let (input, sign) = sign(input)?;
    let (input, hex) = opt(tag_no_case("0x"))(input)?;
    // Once a hex prefix is seen, decimal digits are no longer an option.
    let (input, (digits, radix)) = if hex.is_some() {
        map(hex_digit1, |d| (d, 16))(input)?
    } else {
        map(digit1, |d| (d, 10))(input)?
    };
    Ok((
        input,
        IntLiteral {
            negative: sign == Some('-'),
            radix,
            digits,
        },
    ))
}

fn exponent(input: &str) -> IResult<&str, &str> {
    recognize(tuple((one_of("eE"), opt(one_of("+-")), digit1)))(input)
}

fn mantissa(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ))(input)
}

fn infinity(input: &str) -> IResult<&str, f64> {
    map(pair(sign, tag("Infinity")), |(sign, _)| {
        if sign == Some('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    })(input)
}

fn decimal(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((sign, mantissa, opt(exponent)))),
        |literal: &str| literal.parse::<f64>(),
    )(input)
}

fn float_literal(input: &str) -> IResult<&str, f64> {
    alt((infinity, decimal))(input)
}
