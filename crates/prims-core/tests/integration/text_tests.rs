//! Integration tests for string utilities

use prims_core::{explode, str_index, str_split};

#[test]
fn test_split_examples() {
    assert_eq!(str_split("a,b,,c", ","), vec!["a", "b", "", "c"]);
    assert_eq!(str_split("abc", ""), vec!["a", "b", "c"]);
    assert_eq!(str_split("abc", "x"), vec!["abc"]);
}

#[test]
fn test_split_rejoins_to_input() {
    for (s, sep) in [("a,b,,c", ","), (",x,", ","), ("one--two", "--"), ("", ";")] {
        assert_eq!(str_split(s, sep).join(sep), s);
    }
}

#[test]
fn test_index_examples() {
    assert_eq!(str_index("hello", 1), Some('e'));
    assert_eq!(str_index("hello", -1), None);
    assert_eq!(str_index("hello", 5), None);
}

#[test]
fn test_index_agrees_with_explode() {
    let s = "añb☃";
    let chars = explode(s);
    for (i, c) in chars.iter().enumerate() {
        assert_eq!(str_index(s, i as i64).map(String::from).as_deref(), Some(*c));
    }
    assert_eq!(str_index(s, chars.len() as i64), None);
}

#[test]
fn test_explode_examples() {
    assert_eq!(explode("ab"), vec!["a", "b"]);
    assert_eq!(explode("ab").concat(), "ab");
    assert_eq!(explode("abc"), str_split("abc", ""));
}
