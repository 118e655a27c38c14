use serde_json::{Map, Value};

use crate::{
    node::{Additional, NodeId},
    Document, SchemaError,
};

pub(super) type Object = Map<String, Value>;

/// A non-negative integer. Floats without a fractional part are accepted.
#[allow(
    clippy::float_cmp,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
pub(super) fn get_size(object: &Object, keyword: &'static str) -> Result<Option<u64>, SchemaError> {
    let Some(value) = object.get(keyword) else {
        return Ok(None);
    };
    let Value::Number(number) = value else {
        return Err(SchemaError::NotInteger { keyword });
    };
    if let Some(size) = number.as_u64() {
        return Ok(Some(size));
    }
    if number.is_i64() {
        return Err(SchemaError::Negative { keyword });
    }
    match number.as_f64() {
        Some(size) if size.trunc() == size => {
            if size < 0. {
                Err(SchemaError::Negative { keyword })
            } else {
                // NOTE: Imprecise cast as big integers are not supported yet
                Ok(Some(size as u64))
            }
        }
        _ => Err(SchemaError::NotInteger { keyword }),
    }
}

pub(super) fn get_number(object: &Object, keyword: &'static str) -> Result<Option<f64>, SchemaError> {
    match object.get(keyword) {
        None => Ok(None),
        Some(Value::Number(number)) => Ok(number.as_f64()),
        Some(_) => Err(SchemaError::invalid_type(keyword, "number")),
    }
}

pub(super) fn get_bool(object: &Object, keyword: &'static str) -> Result<Option<bool>, SchemaError> {
    match object.get(keyword) {
        None => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(_) => Err(SchemaError::invalid_type(keyword, "boolean")),
    }
}

pub(super) fn get_string<'a>(
    object: &'a Object,
    keyword: &'static str,
) -> Result<Option<&'a str>, SchemaError> {
    match object.get(keyword) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(SchemaError::invalid_type(keyword, "string")),
    }
}

/// Fail if both bounds are set and the lower one is greater.
pub(super) fn check_order<T: PartialOrd>(
    min: Option<T>,
    max: Option<T>,
    min_keyword: &'static str,
    max_keyword: &'static str,
) -> Result<(), SchemaError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(SchemaError::ordering(min_keyword, max_keyword)),
        _ => Ok(()),
    }
}

/// Compile `value` into a new child of `parent` labelled `property`.
pub(super) fn compile_child(
    document: &mut Document,
    parent: NodeId,
    property: impl Into<String>,
    value: &Value,
) -> Result<NodeId, SchemaError> {
    let child = document.new_child(parent, property);
    document.compile(value, child)?;
    Ok(child)
}

/// `additionalProperties` and `additionalItems`: a boolean or a schema.
pub(super) fn compile_additional(
    document: &mut Document,
    parent: NodeId,
    keyword: &'static str,
    value: &Value,
) -> Result<Additional, SchemaError> {
    match value {
        Value::Bool(value) => Ok(Additional::Bool(*value)),
        Value::Object(_) => compile_child(document, parent, keyword, value).map(Additional::Schema),
        _ => Err(SchemaError::invalid_type(keyword, "boolean/schema")),
    }
}

/// Combinators and positional `items`: an array of schemas.
pub(super) fn compile_schema_array(
    document: &mut Document,
    parent: NodeId,
    keyword: &'static str,
    value: &Value,
    expected: &'static str,
) -> Result<Vec<NodeId>, SchemaError> {
    let Value::Array(items) = value else {
        return Err(SchemaError::invalid_type(keyword, expected));
    };
    let mut children = Vec::with_capacity(items.len());
    for item in items {
        if !item.is_object() {
            return Err(SchemaError::invalid_type(keyword, expected));
        }
        children.push(compile_child(document, parent, keyword, item)?);
    }
    Ok(children)
}
