use serde_json::Value;

use super::helpers::{
    check_order, compile_additional, compile_child, compile_schema_array, get_bool, get_size,
    Object,
};
use crate::{node::NodeId, Document, SchemaError};

/// `items` and `additionalItems`.
pub(super) fn compile_items(
    document: &mut Document,
    target: NodeId,
    object: &Object,
) -> Result<(), SchemaError> {
    match object.get("items") {
        None => {}
        Some(value @ Value::Object(_)) => {
            let child = compile_child(document, target, "items", value)?;
            let node = document.node_mut(target);
            node.items = vec![child];
            node.items_is_single_schema = true;
        }
        Some(value @ Value::Array(_)) => {
            let items = compile_schema_array(
                document,
                target,
                "items",
                value,
                "schema/array of schemas",
            )?;
            let node = document.node_mut(target);
            node.items = items;
            node.items_is_single_schema = false;
        }
        Some(_) => return Err(SchemaError::invalid_type("items", "schema/array of schemas")),
    }

    if let Some(value) = object.get("additionalItems") {
        let additional = compile_additional(document, target, "additionalItems", value)?;
        document.node_mut(target).additional_items = Some(additional);
    }
    Ok(())
}

/// `minItems`, `maxItems` and `uniqueItems`.
pub(super) fn compile_limits(
    document: &mut Document,
    target: NodeId,
    object: &Object,
) -> Result<(), SchemaError> {
    let min = get_size(object, "minItems")?;
    let max = get_size(object, "maxItems")?;
    check_order(min, max, "minItems", "maxItems")?;
    let unique = get_bool(object, "uniqueItems")?;

    let node = document.node_mut(target);
    node.min_items = min;
    node.max_items = max;
    node.unique_items = unique.unwrap_or_default();
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use test_case::test_case;

    use super::super::tests::{compile, compile_error};
    use crate::Additional;

    #[test]
    fn single_schema() {
        let document = compile(json!({"items": {"type": "string"}}));
        let root = document.root_node();
        assert!(root.items_is_single_schema());
        assert_eq!(root.items().len(), 1);
        assert_eq!(document[root.items()[0]].property(), "items");
    }

    #[test]
    fn positional() {
        let document = compile(json!({
            "items": [{"type": "string"}, {"type": "integer"}],
            "additionalItems": false
        }));
        let root = document.root_node();
        assert!(!root.items_is_single_schema());
        assert_eq!(root.items().len(), 2);
        assert_eq!(root.additional_items(), Some(Additional::Bool(false)));
    }

    #[test]
    fn additional_items_schema() {
        let document = compile(json!({"additionalItems": {"type": "null"}}));
        let Some(Additional::Schema(id)) = document.root_node().additional_items() else {
            panic!("Expected a schema");
        };
        assert_eq!(document[id].property(), "additionalItems");
    }

    #[test]
    fn limits() {
        let document = compile(json!({"minItems": 1, "maxItems": 3.0, "uniqueItems": true}));
        let root = document.root_node();
        assert_eq!(root.min_items(), Some(1));
        assert_eq!(root.max_items(), Some(3));
        assert!(root.unique_items());
        assert_eq!(root.additional_items(), None);
    }

    #[test_case(json!({"items": 1}), "items must be of type schema/array of schemas")]
    #[test_case(json!({"items": [{}, true]}), "items must be of type schema/array of schemas"; "non-object item")]
    #[test_case(json!({"additionalItems": "no"}), "additionalItems must be of type boolean/schema")]
    #[test_case(json!({"minItems": 4, "maxItems": 3}), "minItems cannot be greater than maxItems")]
    #[test_case(json!({"minItems": 1.5}), "minItems must be an integer")]
    #[test_case(json!({"uniqueItems": 1}), "uniqueItems must be of type boolean")]
    fn invalid(schema: Value, expected: &str) {
        assert_eq!(compile_error(schema), expected);
    }
}
