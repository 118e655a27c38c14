use ahash::AHashMap;
use serde_json::Value;

use super::helpers::{check_order, compile_additional, compile_child, get_size, Object};
use crate::{
    node::{Dependency, NodeId},
    regex::Pattern,
    Document, SchemaError,
};

pub(super) fn compile_definitions(
    document: &mut Document,
    target: NodeId,
    object: &Object,
) -> Result<(), SchemaError> {
    let Some(definitions) = object.get("definitions") else {
        return Ok(());
    };
    let Value::Object(definitions) = definitions else {
        return Err(SchemaError::invalid_type("definitions", "array of schemas"));
    };
    let mut children = AHashMap::with_capacity(definitions.len());
    for (name, value) in definitions {
        if !value.is_object() {
            return Err(SchemaError::invalid_type("definitions", "array of schemas"));
        }
        children.insert(
            name.clone(),
            compile_child(document, target, "definitions", value)?,
        );
    }
    document.node_mut(target).definitions = children;
    Ok(())
}

/// `properties`, `additionalProperties`, `patternProperties` and `dependencies`.
pub(super) fn compile_properties(
    document: &mut Document,
    target: NodeId,
    object: &Object,
) -> Result<(), SchemaError> {
    if let Some(properties) = object.get("properties") {
        let Value::Object(properties) = properties else {
            return Err(SchemaError::invalid_type("properties", "object"));
        };
        let mut children = AHashMap::with_capacity(properties.len());
        for (name, value) in properties {
            children.insert(name.clone(), compile_child(document, target, name, value)?);
        }
        document.node_mut(target).properties = children;
    }

    if let Some(value) = object.get("additionalProperties") {
        let additional = compile_additional(document, target, "additionalProperties", value)?;
        document.node_mut(target).additional_properties = Some(additional);
    }

    if let Some(patterns) = object.get("patternProperties") {
        let Value::Object(patterns) = patterns else {
            return Err(SchemaError::invalid_type("patternProperties", "schema"));
        };
        let engine = document.pattern_engine;
        let mut children = AHashMap::with_capacity(patterns.len());
        for (pattern, value) in patterns {
            if Pattern::new(engine, pattern).is_none() {
                return Err(SchemaError::invalid_pattern(pattern));
            }
            children.insert(
                pattern.clone(),
                compile_child(document, target, pattern, value)?,
            );
        }
        document.node_mut(target).pattern_properties = children;
    }

    if let Some(dependencies) = object.get("dependencies") {
        compile_dependencies(document, target, dependencies)?;
    }
    Ok(())
}

fn compile_dependencies(
    document: &mut Document,
    target: NodeId,
    dependencies: &Value,
) -> Result<(), SchemaError> {
    const EXPECTED: &str = "schema or array of strings";
    let Value::Object(dependencies) = dependencies else {
        return Err(SchemaError::invalid_type("dependencies", "object"));
    };
    let mut compiled = AHashMap::with_capacity(dependencies.len());
    for (name, value) in dependencies {
        let dependency = match value {
            Value::Array(items) => {
                let mut properties = Vec::with_capacity(items.len());
                for item in items {
                    let Value::String(property) = item else {
                        return Err(SchemaError::invalid_type("dependency", EXPECTED));
                    };
                    properties.push(property.clone());
                }
                Dependency::Properties(properties)
            }
            Value::Object(_) => Dependency::Schema(compile_child(document, target, name, value)?),
            _ => return Err(SchemaError::invalid_type("dependency", EXPECTED)),
        };
        compiled.insert(name.clone(), dependency);
    }
    document.node_mut(target).dependencies = compiled;
    Ok(())
}

/// `minProperties`, `maxProperties` and `required`.
pub(super) fn compile_limits(
    document: &mut Document,
    target: NodeId,
    object: &Object,
) -> Result<(), SchemaError> {
    let min = get_size(object, "minProperties")?;
    let max = get_size(object, "maxProperties")?;
    check_order(min, max, "minProperties", "maxProperties")?;

    let mut required = Vec::new();
    if let Some(names) = object.get("required") {
        let Value::Array(names) = names else {
            return Err(SchemaError::invalid_type("required", "array of strings"));
        };
        for name in names {
            let Value::String(name) = name else {
                return Err(SchemaError::invalid_type("required", "array of strings"));
            };
            if required.contains(name) {
                return Err(SchemaError::DuplicateRequired { name: name.clone() });
            }
            required.push(name.clone());
        }
    }

    let node = document.node_mut(target);
    node.min_properties = min;
    node.max_properties = max;
    node.required = required;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use test_case::test_case;

    use super::super::tests::{compile, compile_error};
    use crate::{Additional, Dependency, PrimitiveType};

    #[test]
    fn properties() {
        let document = compile(json!({
            "type": "object",
            "properties": {"a": {"type": "integer"}},
            "required": ["a"]
        }));
        let root = document.root_node();
        assert!(root.types().contains_type(PrimitiveType::Object));
        assert_eq!(root.types().len(), 1);
        assert_eq!(root.required(), ["a"]);
        let a = &document[root.properties()["a"]];
        assert_eq!(a.property(), "a");
        assert_eq!(a.parent(), Some(document.root()));
        assert!(a.types().contains_type(PrimitiveType::Integer));
    }

    #[test]
    fn definitions() {
        let document = compile(json!({"definitions": {"x": {"minimum": 1}}}));
        let x = &document[document.root_node().definitions()["x"]];
        assert_eq!(x.property(), "definitions");
        assert_eq!(x.minimum(), Some(1.0));
    }

    #[test]
    fn additional_properties() {
        let document = compile(json!({
            "properties": {
                "closed": {"additionalProperties": false},
                "schema": {"additionalProperties": {"type": "string"}},
                "unset": {}
            }
        }));
        let properties = document.root_node().properties();
        assert_eq!(
            document[properties["closed"]].additional_properties(),
            Some(Additional::Bool(false))
        );
        assert_eq!(document[properties["unset"]].additional_properties(), None);
        let Some(Additional::Schema(id)) = document[properties["schema"]].additional_properties()
        else {
            panic!("Expected a schema");
        };
        assert_eq!(document[id].property(), "additionalProperties");
    }

    #[test]
    fn pattern_properties() {
        let document = compile(json!({"patternProperties": {"^x-": {"type": "string"}}}));
        let id = document.root_node().pattern_properties()["^x-"];
        assert_eq!(document[id].property(), "^x-");
    }

    #[test]
    fn dependencies() {
        let document = compile(json!({
            "dependencies": {
                "card": ["billing"],
                "name": {"required": ["surname"]}
            }
        }));
        let dependencies = document.root_node().dependencies();
        assert_eq!(
            dependencies["card"],
            Dependency::Properties(vec!["billing".to_string()])
        );
        let Dependency::Schema(id) = dependencies["name"] else {
            panic!("Expected a schema");
        };
        assert_eq!(document[id].property(), "name");
        assert_eq!(document[id].required(), ["surname"]);
    }

    #[test]
    fn property_counts() {
        let document = compile(json!({"minProperties": 1, "maxProperties": 1}));
        assert_eq!(document.root_node().min_properties(), Some(1));
        assert_eq!(document.root_node().max_properties(), Some(1));
    }

    #[test_case(json!({"definitions": []}), "definitions must be of type array of schemas")]
    #[test_case(json!({"definitions": {"x": true}}), "definitions must be of type array of schemas")]
    #[test_case(json!({"properties": []}), "properties must be of type object")]
    #[test_case(json!({"additionalProperties": 1}), "additionalProperties must be of type boolean/schema")]
    #[test_case(json!({"patternProperties": []}), "patternProperties must be of type schema")]
    #[test_case(json!({"patternProperties": {"(": {}}}), "Invalid regex pattern '('")]
    #[test_case(json!({"dependencies": []}), "dependencies must be of type object")]
    #[test_case(json!({"dependencies": {"a": [1]}}), "dependency must be of type schema or array of strings")]
    #[test_case(json!({"dependencies": {"a": "b"}}), "dependency must be of type schema or array of strings")]
    #[test_case(json!({"minProperties": 2, "maxProperties": 1}), "minProperties cannot be greater than maxProperties")]
    #[test_case(json!({"maxProperties": -1}), "maxProperties must be greater than or equal to 0")]
    #[test_case(json!({"required": "a"}), "required must be of type array of strings")]
    #[test_case(json!({"required": [1]}), "required must be of type array of strings"; "non-string item")]
    #[test_case(json!({"required": ["a", "a"]}), "a is already required")]
    fn invalid(schema: Value, expected: &str) {
        assert_eq!(compile_error(schema), expected);
    }
}
