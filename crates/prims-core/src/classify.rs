//! Character classification predicates
//!
//! Each predicate is a regular-expression test against the whole input, not
//! a per-character scan. `is_alphanumeric` is an alternation of two
//! whole-string patterns, so a mixed input such as `"a1"` matches neither.

use once_cell::sync::Lazy;
use regex::Regex;

static ALPHABETIC: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z]+$"));
static DIGIT: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]+$"));
static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z]+$|^[0-9]+$"));
// Unicode white space plus the byte order mark, minus NEL (U+0085).
static WHITESPACE: Lazy<Regex> = Lazy::new(|| compile(r"[\s&&[^\x{85}]]|\x{FEFF}"));

// Patterns are literals, so compilation cannot fail at runtime.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("classification pattern must compile")
}

/// True iff `c` is made only of ASCII letters.
pub fn is_alphabetic(c: &str) -> bool {
    ALPHABETIC.is_match(c)
}

/// True iff `c` is made only of ASCII digits.
pub fn is_digit(c: &str) -> bool {
    DIGIT.is_match(c)
}

/// True iff `c` is all letters or all digits.
pub fn is_alphanumeric(c: &str) -> bool {
    ALPHANUMERIC.is_match(c)
}

/// True iff `c` contains a whitespace character anywhere.
pub fn is_whitespace(c: &str) -> bool {
    WHITESPACE.is_match(c)
}

/// Single-character form of [`is_whitespace`], also used to skip the space
/// before a number.
pub(crate) fn is_space_char(c: char) -> bool {
    WHITESPACE.is_match(c.encode_utf8(&mut [0; 4]))
}
