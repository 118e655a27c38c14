use super::helpers::{compile_child, compile_schema_array, Object};
use crate::{node::NodeId, Document, SchemaError};

/// `oneOf`, `anyOf`, `allOf` and `not`.
pub(super) fn compile(
    document: &mut Document,
    target: NodeId,
    object: &Object,
) -> Result<(), SchemaError> {
    for keyword in ["oneOf", "anyOf", "allOf"] {
        let Some(value) = object.get(keyword) else {
            continue;
        };
        let children = compile_schema_array(document, target, keyword, value, "array of schemas")?;
        let node = document.node_mut(target);
        match keyword {
            "oneOf" => node.one_of = children,
            "anyOf" => node.any_of = children,
            _ => node.all_of = children,
        }
    }

    if let Some(value) = object.get("not") {
        if !value.is_object() {
            return Err(SchemaError::invalid_type("not", "object"));
        }
        let child = compile_child(document, target, "not", value)?;
        document.node_mut(target).not = Some(child);
    }
    Ok(())
}
