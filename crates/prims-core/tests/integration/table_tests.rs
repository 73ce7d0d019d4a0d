//! Integration tests for dispatch through the primitive table

use prims_core::{call, lookup, primitives, Error, Value};
use serde_json::json;

#[test]
fn test_every_primitive_is_registered() {
    let expected = [
        ("is_alphabetic", 1),
        ("is_digit", 1),
        ("is_alphanumeric", 1),
        ("is_whitespace", 1),
        ("ffi_to_int", 1),
        ("ffi_to_float", 1),
        ("str_to_int", 1),
        ("str_to_float", 1),
        ("str_split", 2),
        ("which", 1),
        ("str_index", 2),
        ("explode", 1),
    ];
    assert_eq!(primitives().len(), expected.len());
    for (name, arity) in expected {
        let primitive = lookup(name).unwrap_or_else(|| panic!("{name} missing"));
        assert_eq!(primitive.arity, arity, "{name}");
    }
}

#[test]
fn test_option_results_use_host_layout() {
    let some = call("str_to_int", &["42".into()]).unwrap();
    assert_eq!(serde_json::to_value(&some).unwrap(), json!([null, "Option", "Some", 42]));

    let none = call("str_index", &["hello".into(), Value::Int(5)]).unwrap();
    assert_eq!(serde_json::to_value(&none).unwrap(), json!([null, "Option", "None"]));
}

#[test]
fn test_json_arguments_round_trip() {
    let args: Vec<Value> = serde_json::from_value(json!(["a,b,,c", ","])).unwrap();
    let result = call("str_split", &args).unwrap();
    assert_eq!(serde_json::to_value(&result).unwrap(), json!(["a", "b", "", "c"]));
}

#[test]
fn test_which_through_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().to_string_lossy().to_string();
    assert_eq!(call("which", &[path.as_str().into()]), Ok(Value::Str(path.clone())));

    let missing = dir.path().join("missing").to_string_lossy().to_string();
    assert_eq!(call("which", &[missing.into()]), Ok(Value::Str(String::new())));
}

#[test]
fn test_arity_is_checked_before_types() {
    assert_eq!(
        call("str_split", &[Value::Int(1)]),
        Err(Error::Arity {
            name: "str_split",
            expected: 2,
            got: 1
        })
    );
}
