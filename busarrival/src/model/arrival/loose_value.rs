use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::CoercionError;

/// a JSON value the upstream API may encode as a number or as a string,
/// depending on the record. decoding never fails on the representation;
/// [`LooseValue::coerce_to_int`] decides whether the value is usable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LooseValue {
    Int(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl LooseValue {
    /// coerces this value to an integer. floats are truncated toward zero,
    /// strings must hold a base-10 integer.
    pub fn coerce_to_int(&self) -> Result<i64, CoercionError> {
        match self {
            LooseValue::Int(i) => Ok(*i),
            LooseValue::Float(f) => Ok(f.trunc() as i64),
            LooseValue::Text(s) => s.parse::<i64>().map_err(|e| CoercionError::InvalidNumber {
                value: s.clone(),
                source: e,
            }),
            LooseValue::Other(v) => Err(CoercionError::TypeMismatch(json_type_name(v))),
        }
    }
}

/// coerces an optional field. absent or null fields are a type mismatch,
/// same as any other unusable representation.
pub fn coerce_to_int(value: Option<&LooseValue>) -> Result<i64, CoercionError> {
    match value {
        Some(v) => v.coerce_to_int(),
        None => Err(CoercionError::TypeMismatch("null")),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
