//! Host values exchanged through the primitive table
//!
//! Optional values use the host runtime's ADT layout when serialized:
//! `[null, "Option", "None"]` and `[null, "Option", "Some", value]`.

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

const OPTION_TYPE: &str = "Option";
const NONE_TAG: &str = "None";
const SOME_TAG: &str = "Some";

/// Dynamically typed host value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Option(Option<Box<Value>>),
}

impl Value {
    pub fn none() -> Self {
        Value::Option(None)
    }

    pub fn some(value: impl Into<Value>) -> Self {
        Value::Option(Some(Box::new(value.into())))
    }

    /// Short name of the value's type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Option(_) => "option",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Integral numeric value, accepting floats with no fractional part
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    /// Apply `f` to every scalar, including those nested in lists and options.
    pub fn map_scalars(self, f: &impl Fn(Value) -> Value) -> Value {
        match self {
            Value::List(items) => {
                Value::List(items.into_iter().map(|item| item.map_scalars(f)).collect())
            }
            Value::Option(inner) => Value::Option(inner.map(|v| Box::new(v.map_scalars(f)))),
            scalar => f(scalar),
        }
    }

    /// Render the value the way the host converts it to a string.
    pub fn to_host_string(&self) -> String {
        self.to_string()
    }

    /// Elements of the host list layout of this value, if it has one.
    fn host_elements(&self) -> Option<Vec<Value>> {
        match self {
            Value::List(items) => Some(items.clone()),
            Value::Option(inner) => {
                let mut items = vec![
                    Value::Null,
                    Value::Str(OPTION_TYPE.to_string()),
                ];
                match inner {
                    None => items.push(Value::Str(NONE_TAG.to_string())),
                    Some(value) => {
                        items.push(Value::Str(SOME_TAG.to_string()));
                        items.push(value.as_ref().clone());
                    }
                }
                Some(items)
            }
            _ => None,
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return f.write_str("0");
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        write!(f, "{}", n)
    } else {
        // Host exponent form always carries a sign: 1e+21, 1e-7.
        let formatted = format!("{:e}", n);
        match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{}e+{}", mantissa, exp),
            _ => f.write_str(&formatted),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(n) => write_number(f, *n),
            Value::Str(s) => f.write_str(s),
            Value::List(_) | Value::Option(_) => {
                let items = self.host_elements().unwrap_or_default();
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // Null elements render as empty inside a list.
                    if *item != Value::Null {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Str(c.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Value::Option(value.map(|v| Box::new(v.into())))
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) => items.serialize(serializer),
            Value::Option(inner) => {
                let len = if inner.is_some() { 4 } else { 3 };
                let mut seq = serializer.serialize_seq(Some(len))?;
                seq.serialize_element(&())?;
                seq.serialize_element(OPTION_TYPE)?;
                match inner {
                    None => seq.serialize_element(NONE_TAG)?,
                    Some(value) => {
                        seq.serialize_element(SOME_TAG)?;
                        seq.serialize_element(value.as_ref())?;
                    }
                }
                seq.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a host value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, i: i64) -> Result<Value, E> {
        Ok(Value::Int(i))
    }

    fn visit_u64<E: de::Error>(self, u: u64) -> Result<Value, E> {
        Ok(i64::try_from(u).map_or(Value::Float(u as f64), Value::Int))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<Value, E> {
        Ok(Value::Float(n))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::Str(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::Str(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(from_host_list(items))
    }
}

/// Recognise the host `Option` layout inside a plain list.
fn from_host_list(mut items: Vec<Value>) -> Value {
    let is_option = items.len() >= 3
        && items[0] == Value::Null
        && items[1].as_str() == Some(OPTION_TYPE);
    if is_option {
        match (items.len(), items[2].as_str()) {
            (3, Some(NONE_TAG)) => return Value::none(),
            (4, Some(SOME_TAG)) => {
                if let Some(value) = items.pop() {
                    return Value::Option(Some(Box::new(value)));
                }
            }
            _ => {}
        }
    }
    Value::List(items)
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}
