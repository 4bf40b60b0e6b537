//! Structural comparison of the `variables` payloads.

use serde_json::{Map, Number, Value};

/// Deep equality of two variable trees.
///
/// Objects are equal with the same keys in any order, arrays need the same
/// elements in the same order. Numbers are compared by value, so `1` and `1.0`
/// are equal. Values of different JSON types are never equal.
pub fn variables_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| variables_equal(a, b)))
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| variables_equal(a, b))
        }
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Null, Value::Null) => true,
        _ => false,
    }
}

/// Absent and `null` variables both mean no variables at all.
pub fn or_empty(variables: Option<Value>) -> Value {
    match variables {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(variables) => variables,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }

    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }

    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
