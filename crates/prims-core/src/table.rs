//! Flat primitive table
//!
//! Each primitive is registered under its host-visible name with a fixed
//! arity. Dispatch checks the argument count and, for primitives that need
//! real strings or indices, the argument types. Predicates and numeric
//! parsers coerce any argument to its host string form instead.

use crate::value::Value;
use crate::{classify, numeric, probe, text, Error, Result};

type PrimitiveFn = fn(&'static str, &[Value]) -> Result<Value>;

/// A named entry in the primitive table
#[derive(Clone, Copy)]
pub struct Primitive {
    pub name: &'static str,
    pub arity: usize,
    func: PrimitiveFn,
}

impl Primitive {
    const fn new(name: &'static str, arity: usize, func: PrimitiveFn) -> Self {
        Self { name, arity, func }
    }

    /// Invoke the primitive after checking the argument count.
    pub fn invoke(&self, args: &[Value]) -> Result<Value> {
        if args.len() != self.arity {
            return Err(Error::Arity {
                name: self.name,
                expected: self.arity,
                got: args.len(),
            });
        }
        (self.func)(self.name, args)
    }
}

impl std::fmt::Debug for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Primitive")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

static PRIMITIVES: [Primitive; 12] = [
    Primitive::new("is_alphabetic", 1, is_alphabetic),
    Primitive::new("is_digit", 1, is_digit),
    Primitive::new("is_alphanumeric", 1, is_alphanumeric),
    Primitive::new("is_whitespace", 1, is_whitespace),
    Primitive::new("ffi_to_int", 1, ffi_to_int),
    Primitive::new("ffi_to_float", 1, ffi_to_float),
    Primitive::new("str_to_int", 1, str_to_int),
    Primitive::new("str_to_float", 1, str_to_float),
    Primitive::new("str_split", 2, str_split),
    Primitive::new("which", 1, which),
    Primitive::new("str_index", 2, str_index),
    Primitive::new("explode", 1, explode),
];

fn is_alphabetic(_: &'static str, args: &[Value]) -> Result<Value> {
    Ok(classify::is_alphabetic(&coerce(&args[0])).into())
}

fn is_digit(_: &'static str, args: &[Value]) -> Result<Value> {
    Ok(classify::is_digit(&coerce(&args[0])).into())
}

fn is_alphanumeric(_: &'static str, args: &[Value]) -> Result<Value> {
    Ok(classify::is_alphanumeric(&coerce(&args[0])).into())
}

fn is_whitespace(_: &'static str, args: &[Value]) -> Result<Value> {
    Ok(classify::is_whitespace(&coerce(&args[0])).into())
}

fn ffi_to_int(_: &'static str, args: &[Value]) -> Result<Value> {
    Ok(numeric::ffi_to_int(&coerce(&args[0])).into())
}

fn ffi_to_float(_: &'static str, args: &[Value]) -> Result<Value> {
    Ok(numeric::ffi_to_float(&coerce(&args[0])).into())
}

fn str_to_int(_: &'static str, args: &[Value]) -> Result<Value> {
    Ok(numeric::str_to_int(&coerce(&args[0])).into())
}

fn str_to_float(_: &'static str, args: &[Value]) -> Result<Value> {
    Ok(numeric::str_to_float(&coerce(&args[0])).into())
}

fn str_split(name: &'static str, args: &[Value]) -> Result<Value> {
    let s = expect_str(name, &args[0])?;
    let sep = expect_str(name, &args[1])?;
    Ok(text::str_split(s, sep).into())
}

fn which(name: &'static str, args: &[Value]) -> Result<Value> {
    Ok(probe::which(expect_str(name, &args[0])?).into())
}

fn str_index(name: &'static str, args: &[Value]) -> Result<Value> {
    let s = expect_str(name, &args[0])?;
    let i = args[1].as_index().ok_or(Error::TypeMismatch {
        name,
        expected: "integer",
        got: args[1].type_name(),
    })?;
    Ok(text::str_index(s, i).into())
}

fn explode(name: &'static str, args: &[Value]) -> Result<Value> {
    Ok(text::explode(expect_str(name, &args[0])?).into())
}

fn coerce(value: &Value) -> String {
    value.to_host_string()
}

fn expect_str<'a>(name: &'static str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or(Error::TypeMismatch {
        name,
        expected: "string",
        got: value.type_name(),
    })
}

/// All registered primitives, in a stable order
pub fn primitives() -> &'static [Primitive] {
    &PRIMITIVES
}

/// Find a primitive by its host-visible name.
pub fn lookup(name: &str) -> Option<&'static Primitive> {
    PRIMITIVES.iter().find(|p| p.name == name)
}

/// Call the primitive `name` with `args`.
pub fn call(name: &str, args: &[Value]) -> Result<Value> {
    let primitive = lookup(name).ok_or_else(|| Error::UnknownPrimitive(name.to_string()))?;
    tracing::trace!(name, argc = args.len(), "dispatching primitive");
    primitive.invoke(args)
}
