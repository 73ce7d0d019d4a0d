//! WebAssembly bindings for the primitive library.
//!
//! Exported under the names host combinator libraries already call. Optional
//! results come back in the host ADT layout (`[null, "Option", "Some", v]`),
//! lists as plain JS arrays. `which` needs Node's `fs` module.

use prims_core::{PathProbe, Value};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "fs")]
extern "C" {
    #[wasm_bindgen(js_name = existsSync)]
    fn exists_sync(path: &str) -> bool;
}

/// Probes paths through Node's `fs.existsSync`.
struct NodeProbe;

impl PathProbe for NodeProbe {
    fn exists(&self, path: &str) -> bool {
        !path.is_empty() && exists_sync(path)
    }
}

/// Largest integer a JS number holds exactly (`Number.MAX_SAFE_INTEGER`).
const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Integers beyond the safe range become the nearest JS number, as the host's
/// own `parseInt` would produce.
fn to_js_number(value: Value) -> Value {
    match value {
        Value::Int(i) if !(-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&i) => {
            Value::Float(i as f64)
        }
        other => other,
    }
}

/// Convert a value to JS, mapping unit to `null` rather than `undefined`.
fn to_host(value: Value) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    Ok(value.map_scalars(&to_js_number).serialize(&serializer)?)
}

fn to_array(items: &[&str]) -> js_sys::Array {
    items.iter().map(|s| JsValue::from_str(s)).collect()
}

#[wasm_bindgen]
pub fn is_alphabetic(c: &str) -> bool {
    prims_core::is_alphabetic(c)
}

#[wasm_bindgen]
pub fn is_digit(c: &str) -> bool {
    prims_core::is_digit(c)
}

#[wasm_bindgen]
pub fn is_alphanumeric(c: &str) -> bool {
    prims_core::is_alphanumeric(c)
}

#[wasm_bindgen]
pub fn is_whitespace(c: &str) -> bool {
    prims_core::is_whitespace(c)
}

#[wasm_bindgen]
pub fn ffi_to_int(s: &str) -> f64 {
    prims_core::ffi_to_int(s)
}

#[wasm_bindgen]
pub fn ffi_to_float(s: &str) -> f64 {
    prims_core::ffi_to_float(s)
}

#[wasm_bindgen]
pub fn str_to_int(s: &str) -> Result<JsValue, JsError> {
    to_host(Value::from(prims_core::str_to_int(s)))
}

#[wasm_bindgen]
pub fn str_to_float(s: &str) -> Result<JsValue, JsError> {
    to_host(Value::from(prims_core::str_to_float(s)))
}

#[wasm_bindgen]
pub fn str_split(s: &str, sep: &str) -> js_sys::Array {
    to_array(&prims_core::str_split(s, sep))
}

/// `path` if something exists there, otherwise `""`.
#[wasm_bindgen]
pub fn which(path: &str) -> String {
    prims_core::which_with(&NodeProbe, path)
}

/// Character at `i`; JS numbers that aren't integral index nothing.
#[wasm_bindgen]
pub fn str_index(s: &str, i: f64) -> Result<JsValue, JsError> {
    let found = Value::Float(i)
        .as_index()
        .and_then(|i| prims_core::str_index(s, i));
    to_host(Value::from(found))
}

#[wasm_bindgen]
pub fn explode(s: &str) -> js_sys::Array {
    to_array(&prims_core::explode(s))
}

/// Call any primitive by name with an array of arguments.
///
/// Throws on an unknown name, wrong argument count or wrong argument type.
#[wasm_bindgen]
pub fn call(name: &str, args: JsValue) -> Result<JsValue, JsError> {
    let args: Vec<Value> = serde_wasm_bindgen::from_value(args)?;
    to_host(prims_core::call(name, &args)?)
}
