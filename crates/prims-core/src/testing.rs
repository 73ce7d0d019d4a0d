//! Test utilities shared by unit tests, integration tests and benchmarks
//!
//! This module provides sample inputs for the predicates and parsers and a
//! scratch directory for exercising [`which`](crate::which) against a real
//! filesystem.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Every ASCII letter as a one-character string
///
/// # Examples
/// ```
/// use prims_core::testing::ascii_letters;
///
/// assert_eq!(ascii_letters().len(), 52);
/// ```
pub fn ascii_letters() -> Vec<String> {
    ('a'..='z').chain('A'..='Z').map(String::from).collect()
}

/// Every ASCII digit as a one-character string
pub fn ascii_digits() -> Vec<String> {
    ('0'..='9').map(String::from).collect()
}

/// One-character strings that `is_whitespace` must accept
pub fn whitespace_samples() -> Vec<String> {
    [' ', '\t', '\n', '\r', '\u{0b}', '\u{0c}', '\u{a0}', '\u{2003}']
        .into_iter()
        .map(String::from)
        .collect()
}

/// Inputs for the numeric parsers, paired with the expected leading integer
pub fn int_samples() -> Vec<(&'static str, Option<i64>)> {
    vec![
        ("42", Some(42)),
        ("-7", Some(-7)),
        ("  19 apples", Some(19)),
        ("0x2a", Some(42)),
        ("3.9", Some(3)),
        ("abc", None),
        ("", None),
        ("-", None),
    ]
}

/// Inputs for the numeric parsers, paired with the expected leading float
pub fn float_samples() -> Vec<(&'static str, Option<f64>)> {
    vec![
        ("3.14", Some(3.14)),
        ("-0.5", Some(-0.5)),
        (".25", Some(0.25)),
        ("6.02e23", Some(6.02e23)),
        ("  1.5m", Some(1.5)),
        ("Infinity", Some(f64::INFINITY)),
        ("abc", None),
        ("", None),
        (".", None),
    ]
}

/// A temporary directory that is removed on drop
///
/// # Examples
/// ```
/// use prims_core::testing::ScratchDir;
///
/// let dir = ScratchDir::new().unwrap();
/// let file = dir.touch("present").unwrap();
/// assert_eq!(prims_core::which(&file), file);
/// assert_eq!(prims_core::which(&dir.missing("absent")), "");
/// ```
pub struct ScratchDir {
    dir: tempfile::TempDir,
}

impl ScratchDir {
    /// Create a fresh, empty scratch directory
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Path of the directory itself
    pub fn path(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    /// Create an empty file and return its path
    pub fn touch(&self, name: &str) -> io::Result<String> {
        let path = self.join(name);
        fs::write(&path, b"")?;
        Ok(path.to_string_lossy().into_owned())
    }

    /// Create a subdirectory and return its path
    pub fn mkdir(&self, name: &str) -> io::Result<String> {
        let path = self.join(name);
        fs::create_dir_all(&path)?;
        Ok(path.to_string_lossy().into_owned())
    }

    /// Path of an entry that was never created
    pub fn missing(&self, name: &str) -> String {
        self.join(name).to_string_lossy().into_owned()
    }

    fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
