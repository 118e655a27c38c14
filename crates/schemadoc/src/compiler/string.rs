use serde_json::Value;

use super::helpers::{check_order, get_size, Object};
use crate::{node::NodeId, regex::Pattern, Document, SchemaError};

/// `minLength`, `maxLength` and `pattern`.
pub(super) fn compile(
    document: &mut Document,
    target: NodeId,
    object: &Object,
) -> Result<(), SchemaError> {
    let min = get_size(object, "minLength")?;
    let max = get_size(object, "maxLength")?;
    check_order(min, max, "minLength", "maxLength")?;

    let pattern = match object.get("pattern") {
        None => None,
        Some(Value::String(pattern)) => Some(
            Pattern::new(document.pattern_engine, pattern)
                .ok_or_else(|| SchemaError::invalid_pattern(pattern))?,
        ),
        Some(_) => return Err(SchemaError::invalid_type("pattern", "string")),
    };

    let node = document.node_mut(target);
    node.min_length = min;
    node.max_length = max;
    node.pattern = pattern;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use test_case::test_case;

    use super::super::tests::{compile, compile_error};
    use crate::{CompileOptions, PatternEngine};

    #[test]
    fn lengths() {
        let document = compile(json!({"minLength": 1, "maxLength": 10}));
        assert_eq!(document.root_node().min_length(), Some(1));
        assert_eq!(document.root_node().max_length(), Some(10));
    }

    #[test_case(PatternEngine::FancyRegex)]
    #[test_case(PatternEngine::Regex)]
    fn pattern(engine: PatternEngine) {
        let document = CompileOptions::default()
            .with_pattern_engine(engine)
            .build(&json!({"pattern": "^[a-z]+$"}))
            .expect("Valid schema");
        let pattern = document.root_node().pattern().expect("Compiled");
        assert_eq!(pattern.as_str(), "^[a-z]+$");
        assert_eq!(pattern.is_match("abc"), Ok(true));
        assert_eq!(pattern.is_match("ABC"), Ok(false));
    }

    #[test]
    fn look_around_needs_backtracking_engine() {
        let schema = json!({"pattern": "^(?!x)"});
        assert!(CompileOptions::default().build(&schema).is_ok());
        let error = CompileOptions::default()
            .with_pattern_engine(PatternEngine::Regex)
            .build(&schema)
            .expect_err("Unsupported by the linear engine");
        assert_eq!(error.to_string(), "Invalid regex pattern '^(?!x)'");
    }

    #[test_case(json!({"minLength": 2.5}), "minLength must be an integer")]
    #[test_case(json!({"maxLength": -3}), "maxLength must be greater than or equal to 0")]
    #[test_case(json!({"minLength": 3, "maxLength": 2}), "minLength cannot be greater than maxLength")]
    #[test_case(json!({"pattern": 1}), "pattern must be of type string")]
    #[test_case(json!({"pattern": "[a-"}), "Invalid regex pattern '[a-'")]
    fn invalid(schema: Value, expected: &str) {
        assert_eq!(compile_error(schema), expected);
    }
}
