//! Integration tests for character classification

use prims_core::{is_alphabetic, is_alphanumeric, is_digit, is_whitespace, str_to_int};

#[test]
fn test_letters_and_digits_are_disjoint() {
    for c in ('a'..='z').chain('A'..='Z') {
        let s = c.to_string();
        assert!(is_alphabetic(&s));
        assert!(!is_digit(&s));
        assert!(is_alphanumeric(&s));
    }
    for c in '0'..='9' {
        let s = c.to_string();
        assert!(!is_alphabetic(&s));
        assert!(is_digit(&s));
        assert!(is_alphanumeric(&s));
    }
}

#[test]
fn test_digit_strings_of_any_length() {
    for s in ["0", "12", "000123", "98765432109876543210"] {
        assert!(is_digit(s), "{s:?} should be digits");
    }
}

#[test]
fn test_mixed_input_is_not_alphanumeric() {
    for s in ["a1", "1a", "abc123", "x y", "-"] {
        assert!(!is_alphanumeric(s), "{s:?} should not match");
    }
}

#[test]
fn test_whitespace_anywhere() {
    assert!(is_whitespace("no\tdelimiter"));
    assert!(is_whitespace("trailing "));
    assert!(is_whitespace("\u{2003}"));
    assert!(!is_whitespace("tight"));
}

#[test]
fn test_whitespace_matches_number_prefix_skipping() {
    let candidates = [
        ' ', '\t', '\n', '\u{a0}', '\u{2003}', '\u{3000}', '\u{feff}', '\u{85}', '\u{200b}', 'x',
    ];
    for c in candidates {
        let skipped = str_to_int(&format!("{c}5")) == Some(5);
        assert_eq!(is_whitespace(&c.to_string()), skipped, "{:?}", c);
    }
}

#[test]
fn test_predicates_are_idempotent() {
    for s in ["a", "1", "a1", " ", ""] {
        assert_eq!(is_alphabetic(s), is_alphabetic(s));
        assert_eq!(is_digit(s), is_digit(s));
        assert_eq!(is_alphanumeric(s), is_alphanumeric(s));
        assert_eq!(is_whitespace(s), is_whitespace(s));
    }
}

#[test]
fn test_predicates_are_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                (0..100).all(|_| is_alphabetic("abc") && !is_digit("abc"))
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
