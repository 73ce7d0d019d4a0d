//! One C entry point per primitive

use crate::types::{PrimsOptionFloat, PrimsOptionInt, PrimsOptionStr, PrimsStrList};
use crate::{into_c_string, read_str, reject, Result};
use libc::c_char;
use std::ffi::CString;

/// Run `f` on a string argument, or return `fallback` if it can't be read.
unsafe fn with_str<T>(
    function: &'static str,
    ptr: *const c_char,
    fallback: T,
    f: impl FnOnce(&str) -> T,
) -> T {
    match read_str(ptr, "s") {
        Ok(s) => f(s),
        Err(e) => reject(function, e, fallback),
    }
}

/// True iff `c` is made only of ASCII letters.
///
/// # Safety
/// `c` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prims_is_alphabetic(c: *const c_char) -> bool {
    with_str("prims_is_alphabetic", c, false, prims_core::is_alphabetic)
}

/// True iff `c` is made only of ASCII digits.
///
/// # Safety
/// `c` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prims_is_digit(c: *const c_char) -> bool {
    with_str("prims_is_digit", c, false, prims_core::is_digit)
}

/// True iff `c` is all ASCII letters or all ASCII digits.
///
/// # Safety
/// `c` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prims_is_alphanumeric(c: *const c_char) -> bool {
    with_str("prims_is_alphanumeric", c, false, prims_core::is_alphanumeric)
}

/// True iff `c` contains a whitespace character.
///
/// # Safety
/// `c` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prims_is_whitespace(c: *const c_char) -> bool {
    with_str("prims_is_whitespace", c, false, prims_core::is_whitespace)
}

/// Leading integer of `s`, or NaN.
///
/// # Safety
/// `s` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prims_ffi_to_int(s: *const c_char) -> f64 {
    with_str("prims_ffi_to_int", s, f64::NAN, prims_core::ffi_to_int)
}

/// Leading float of `s`, or NaN.
///
/// # Safety
/// `s` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prims_ffi_to_float(s: *const c_char) -> f64 {
    with_str("prims_ffi_to_float", s, f64::NAN, prims_core::ffi_to_float)
}

/// Leading integer of `s` as an optional.
///
/// # Safety
/// `s` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prims_str_to_int(s: *const c_char) -> PrimsOptionInt {
    with_str("prims_str_to_int", s, None, prims_core::str_to_int).into()
}

/// Leading float of `s` as an optional.
///
/// # Safety
/// `s` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prims_str_to_float(s: *const c_char) -> PrimsOptionFloat {
    with_str("prims_str_to_float", s, None, prims_core::str_to_float).into()
}

/// Split `s` at every occurrence of `sep`.
///
/// # Safety
/// `s` and `sep` must each be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prims_str_split(s: *const c_char, sep: *const c_char) -> PrimsStrList {
    let split = || -> Result<PrimsStrList> {
        let s = read_str(s, "s")?;
        let sep = read_str(sep, "sep")?;
        PrimsStrList::from_strs(&prims_core::str_split(s, sep))
    };
    split().unwrap_or_else(|e| reject("prims_str_split", e, PrimsStrList::empty()))
}

/// `path` if an entry exists there, otherwise the empty string.
///
/// Never returns null; release the result with `prims_string_free`.
///
/// # Safety
/// `path` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prims_which(path: *const c_char) -> *mut c_char {
    let which = || -> Result<*mut c_char> {
        let path = read_str(path, "path")?;
        into_c_string(&prims_core::which(path))
    };
    which().unwrap_or_else(|e| reject("prims_which", e, CString::default().into_raw()))
}

/// Character at position `i` of `s`, as an optional string.
///
/// # Safety
/// `s` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prims_str_index(s: *const c_char, i: i64) -> PrimsOptionStr {
    let index = || -> Result<PrimsOptionStr> {
        match prims_core::str_index(read_str(s, "s")?, i) {
            Some(c) => PrimsOptionStr::some(c.encode_utf8(&mut [0; 4])),
            None => Ok(PrimsOptionStr::none()),
        }
    };
    index().unwrap_or_else(|e| reject("prims_str_index", e, PrimsOptionStr::none()))
}

/// Every character of `s`, in order.
///
/// # Safety
/// `s` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prims_explode(s: *const c_char) -> PrimsStrList {
    let explode = || -> Result<PrimsStrList> {
        PrimsStrList::from_strs(&prims_core::explode(read_str(s, "s")?))
    };
    explode().unwrap_or_else(|e| reject("prims_explode", e, PrimsStrList::empty()))
}
