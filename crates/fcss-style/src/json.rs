//! Conversion from dynamic JSON arguments.
//!
//! JSON is the untyped surface of the crate: anything that is not an object
//! is rejected here, before hashing, caching, or insertion can happen.

use serde_json::{Map, Value};

use crate::{Scalar, StyleError, StyleObject, StyleValue};

/// Human-readable JSON kind used in argument errors.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn scalar(key: &str, value: &Value) -> Result<Scalar, StyleError> {
    match value {
        Value::String(s) => Ok(Scalar::Str(s.clone())),
        Value::Bool(b) => Ok(Scalar::Bool(*b)),
        Value::Number(n) => n.as_f64().map(Scalar::Num).ok_or_else(|| StyleError::InvalidValue {
            key: key.to_owned(),
            reason: "number is not representable as f64",
        }),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(StyleError::InvalidValue {
            key: key.to_owned(),
            reason: "fallback lists may only hold strings, numbers, or booleans",
        }),
    }
}

fn from_map(map: &Map<String, Value>) -> Result<StyleObject, StyleError> {
    let mut obj = StyleObject::new();
    for (key, value) in map {
        let value = match value {
            Value::Null => StyleValue::Null,
            Value::Object(nested) => StyleValue::Object(from_map(nested)?),
            Value::Array(items) => StyleValue::List(
                items
                    .iter()
                    .filter(|item| !item.is_null())
                    .map(|item| scalar(key, item))
                    .collect::<Result<_, _>>()?,
            ),
            other => StyleValue::Scalar(scalar(key, other)?),
        };
        obj.set(key.as_str(), value);
    }
    Ok(obj)
}

impl TryFrom<&Value> for StyleObject {
    type Error = StyleError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => from_map(map),
            other => Err(StyleError::NotAnObject { found: kind(other) }),
        }
    }
}

impl TryFrom<Value> for StyleObject {
    type Error = StyleError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}
