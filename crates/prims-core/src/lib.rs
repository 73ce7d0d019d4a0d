//! Primitive predicates and parsers for host combinator libraries.
//!
//! Every primitive is a stateless function of its arguments (only [`which`]
//! reads external state). The [`table`] module exposes the same primitives
//! as a flat, name-indexed table over dynamically typed [`Value`]s, which is
//! what the C and WebAssembly bindings dispatch through.

pub mod classify;
pub mod numeric;
pub mod probe;
pub mod table;
pub mod text;
pub mod value;

// Test utilities (available in tests and when used as a dependency with dev profile)
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use classify::{is_alphabetic, is_alphanumeric, is_digit, is_whitespace};
pub use numeric::{ffi_to_float, ffi_to_int, str_to_float, str_to_int, ParseNumberError};
pub use probe::{which, which_with, PathProbe, StdProbe};
pub use table::{call, lookup, primitives, Primitive};
pub use text::{explode, str_index, str_split};
pub use value::Value;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown primitive: {0}")]
    UnknownPrimitive(String),

    #[error("{name}: expected {expected} argument(s), but got {got}")]
    Arity {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{name}: expected {expected}, but got {got}")]
    TypeMismatch {
        name: &'static str,
        expected: &'static str,
        got: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
