//! C ABI for the primitive library
//!
//! Strings cross the boundary as NUL-terminated UTF-8. Every string or list
//! returned by this library is owned by the caller and must be released with
//! the matching `prims_*_free` function. Bad input (null pointers, invalid
//! UTF-8) never aborts: it degrades to the primitive's own failure value and
//! is logged at `warn`.
//!
//! See `include/prims.h` for the C declarations.

pub mod dispatch;
pub mod primitives;
pub mod types;

pub use types::{PrimsOptionFloat, PrimsOptionInt, PrimsOptionStr, PrimsOptionTag, PrimsStrList};

use libc::c_char;
use std::ffi::{CStr, CString, NulError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FfiError {
    #[error("null pointer passed for `{0}`")]
    NullPointer(&'static str),

    #[error("`{0}` is not valid UTF-8")]
    InvalidUtf8(&'static str),

    #[error("result contains an interior NUL byte")]
    InteriorNul(#[from] NulError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Primitive(#[from] prims_core::Error),
}

pub type Result<T> = std::result::Result<T, FfiError>;

/// Borrow a C string argument as `&str`.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn read_str<'a>(ptr: *const c_char, arg: &'static str) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(FfiError::NullPointer(arg));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| FfiError::InvalidUtf8(arg))
}

/// Copy a Rust string into a caller-owned C string.
fn into_c_string(s: &str) -> Result<*mut c_char> {
    Ok(CString::new(s)?.into_raw())
}

/// Log a rejected call and hand back the primitive's failure value.
fn reject<T>(function: &'static str, err: FfiError, fallback: T) -> T {
    tracing::warn!(function, error = %err, "rejected call");
    fallback
}
