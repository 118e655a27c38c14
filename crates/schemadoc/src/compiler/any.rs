use schemadoc_referencing::Reference;
use serde_json::Value;

use super::helpers::{get_string, Object};
use crate::{
    cmp,
    node::{NodeId, SchemaNode},
    primitive_type::PrimitiveType,
    Document, SchemaError,
};

pub(super) fn compile_dialect(
    document: &mut Document,
    target: NodeId,
    object: &Object,
) -> Result<(), SchemaError> {
    if let Some(schema) = get_string(object, "$schema")? {
        document.node_mut(target).schema = Some(Reference::parse(schema)?);
    }
    Ok(())
}

pub(super) fn compile_metadata(
    document: &mut Document,
    target: NodeId,
    object: &Object,
) -> Result<(), SchemaError> {
    let id = get_string(object, "id")?.map(String::from);
    let title = get_string(object, "title")?.map(String::from);
    let description = get_string(object, "description")?.map(String::from);
    let node = document.node_mut(target);
    node.id = id;
    node.title = title;
    node.description = description;
    Ok(())
}

pub(super) fn compile_type(
    document: &mut Document,
    target: NodeId,
    object: &Object,
) -> Result<(), SchemaError> {
    const EXPECTED: &str = "string/array of strings";
    let node = document.node_mut(target);
    match object.get("type") {
        None => {}
        Some(Value::String(name)) => add_type(node, name)?,
        Some(Value::Array(names)) => {
            for name in names {
                let Value::String(name) = name else {
                    return Err(SchemaError::invalid_type("type", EXPECTED));
                };
                add_type(node, name)?;
            }
        }
        Some(_) => return Err(SchemaError::invalid_type("type", EXPECTED)),
    }
    Ok(())
}

fn add_type(node: &mut SchemaNode, name: &str) -> Result<(), SchemaError> {
    let Ok(ty) = PrimitiveType::try_from(name) else {
        return Err(SchemaError::UnknownType {
            name: name.to_string(),
        });
    };
    if node.types.contains_type(ty) {
        return Err(SchemaError::DuplicateType {
            name: name.to_string(),
        });
    }
    node.types |= ty;
    Ok(())
}

pub(super) fn compile_enum(
    document: &mut Document,
    target: NodeId,
    object: &Object,
) -> Result<(), SchemaError> {
    let Some(items) = object.get("enum") else {
        return Ok(());
    };
    let Value::Array(items) = items else {
        return Err(SchemaError::invalid_type("enum", "array"));
    };
    let mut enumeration: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if enumeration.iter().any(|existing| cmp::equal(existing, item)) {
            return Err(SchemaError::DuplicateEnum);
        }
        enumeration.push(item.clone());
    }
    document.node_mut(target).enumeration = enumeration;
    Ok(())
}
