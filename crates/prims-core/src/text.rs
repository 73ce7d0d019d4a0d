//! String splitting, indexing and explosion
//!
//! Characters are Unicode scalar values (`char`), so lengths and indices
//! count `char`s rather than bytes.

/// Split `s` at every occurrence of the literal separator `sep`.
///
/// An empty separator splits `s` into its characters. Empty segments at the
/// boundaries and between adjacent separators are kept, so a separator that
/// never occurs yields `[s]`.
pub fn str_split<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    if sep.is_empty() {
        explode(s)
    } else {
        s.split(sep).collect()
    }
}

/// The character at position `i`, or `None` when `i` is out of range.
pub fn str_index(s: &str, i: i64) -> Option<char> {
    let i = usize::try_from(i).ok()?;
    s.chars().nth(i)
}

/// Every character of `s`, in order, each as its own slice.
pub fn explode(s: &str) -> Vec<&str> {
    s.char_indices()
        .map(|(start, c)| &s[start..start + c.len_utf8()])
        .collect()
}
