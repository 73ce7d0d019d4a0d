//! `#[repr(C)]` result types and their release functions

use crate::{into_c_string, Result};
use libc::{c_char, size_t};
use std::ffi::CString;
use std::ptr;

/// Discriminant of an optional result
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimsOptionTag {
    None = 0,
    Some = 1,
}

/// Optional integer; `value` is meaningful only when `tag` is `Some`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimsOptionInt {
    pub tag: PrimsOptionTag,
    pub value: i64,
}

impl From<Option<i64>> for PrimsOptionInt {
    fn from(value: Option<i64>) -> Self {
        match value {
            Some(value) => Self {
                tag: PrimsOptionTag::Some,
                value,
            },
            None => Self {
                tag: PrimsOptionTag::None,
                value: 0,
            },
        }
    }
}

/// Optional float; `value` is meaningful only when `tag` is `Some`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimsOptionFloat {
    pub tag: PrimsOptionTag,
    pub value: f64,
}

impl From<Option<f64>> for PrimsOptionFloat {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(value) => Self {
                tag: PrimsOptionTag::Some,
                value,
            },
            None => Self {
                tag: PrimsOptionTag::None,
                value: 0.0,
            },
        }
    }
}

/// Optional owned string; `value` is null when `tag` is `None`
///
/// Release with `prims_option_str_free`.
#[repr(C)]
#[derive(Debug)]
pub struct PrimsOptionStr {
    pub tag: PrimsOptionTag,
    pub value: *mut c_char,
}

impl PrimsOptionStr {
    pub fn none() -> Self {
        Self {
            tag: PrimsOptionTag::None,
            value: ptr::null_mut(),
        }
    }

    pub(crate) fn some(s: &str) -> Result<Self> {
        Ok(Self {
            tag: PrimsOptionTag::Some,
            value: into_c_string(s)?,
        })
    }
}

/// Owned array of owned strings
///
/// `items` is null when `len` is zero. Release with `prims_str_list_free`.
#[repr(C)]
#[derive(Debug)]
pub struct PrimsStrList {
    pub items: *mut *mut c_char,
    pub len: size_t,
}

impl PrimsStrList {
    pub fn empty() -> Self {
        Self {
            items: ptr::null_mut(),
            len: 0,
        }
    }

    pub(crate) fn from_strs(strs: &[&str]) -> Result<Self> {
        if strs.is_empty() {
            return Ok(Self::empty());
        }
        let mut items = Vec::with_capacity(strs.len());
        for s in strs {
            match CString::new(*s) {
                Ok(c_string) => items.push(c_string.into_raw()),
                Err(e) => {
                    // Reclaim what was already handed out before failing.
                    for item in items {
                        drop(unsafe { CString::from_raw(item) });
                    }
                    return Err(e.into());
                }
            }
        }
        let items = items.into_boxed_slice();
        let len = items.len();
        Ok(Self {
            items: Box::into_raw(items) as *mut *mut c_char,
            len,
        })
    }

    /// View the list as Rust strings.
    ///
    /// # Safety
    /// `self` must have been produced by this library and not yet freed.
    pub unsafe fn to_vec(&self) -> Vec<String> {
        if self.items.is_null() {
            return Vec::new();
        }
        std::slice::from_raw_parts(self.items, self.len)
            .iter()
            .map(|&item| std::ffi::CStr::from_ptr(item).to_string_lossy().into_owned())
            .collect()
    }
}

/// Free a string returned by `prims_which`.
///
/// # Safety
/// `s` must be null or a pointer returned by this library, freed at most once.
#[no_mangle]
pub unsafe extern "C" fn prims_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Free a list returned by `prims_str_split` or `prims_explode`.
///
/// # Safety
/// `list` must have been returned by this library and freed at most once.
#[no_mangle]
pub unsafe extern "C" fn prims_str_list_free(list: PrimsStrList) {
    if list.items.is_null() {
        return;
    }
    let items = Box::from_raw(ptr::slice_from_raw_parts_mut(list.items, list.len));
    for &item in items.iter() {
        prims_string_free(item);
    }
}

/// Free the string inside an optional returned by `prims_str_index`.
///
/// # Safety
/// `option` must have been returned by this library and freed at most once.
#[no_mangle]
pub unsafe extern "C" fn prims_option_str_free(option: PrimsOptionStr) {
    prims_string_free(option.value);
}
