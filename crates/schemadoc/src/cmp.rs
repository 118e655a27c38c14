use serde_json::{Map, Number, Value};

/// Deep equality where numbers compare by value, so `1` equals `1.0`.
pub(crate) fn equal(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::String(l), Value::String(r)) => l == r,
        (Value::Number(l), Value::Number(r)) => equal_numbers(l, r),
        (Value::Array(l), Value::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| equal(l, r))
        }
        (Value::Object(l), Value::Object(r)) => equal_objects(l, r),
        _ => false,
    }
}

#[allow(clippy::float_cmp)]
fn equal_numbers(lhs: &Number, rhs: &Number) -> bool {
    if let (Some(l), Some(r)) = (lhs.as_u64(), rhs.as_u64()) {
        return l == r;
    }
    if let (Some(l), Some(r)) = (lhs.as_i64(), rhs.as_i64()) {
        return l == r;
    }
    match (lhs.as_f64(), rhs.as_f64()) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}

fn equal_objects(lhs: &Map<String, Value>, rhs: &Map<String, Value>) -> bool {
    lhs.len() == rhs.len()
        && lhs
            .iter()
            .all(|(key, value)| rhs.get(key).is_some_and(|other| equal(value, other)))
}
