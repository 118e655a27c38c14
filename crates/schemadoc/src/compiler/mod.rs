//! Recursive descent from a JSON object to schema nodes.
//!
//! Keywords are processed in a fixed order: checks such as `exclusiveMinimum` rely on
//! `minimum` being compiled before them.
mod any;
mod array;
mod combinators;
mod helpers;
mod numeric;
mod object;
mod refs;
mod string;

use std::sync::Arc;

use serde_json::Value;

use crate::{node::NodeId, Document, SchemaError};

impl Document {
    /// Compile `value` into the node `target`.
    pub(crate) fn compile(&mut self, value: &Value, target: NodeId) -> Result<(), SchemaError> {
        let Value::Object(object) = value else {
            return Err(SchemaError::not_an_object());
        };
        tracing::trace!(property = self[target].property(), "Compiling schema");

        if target == self.root {
            self.node_mut(target).reference = Arc::clone(&self.reference);
        }

        any::compile_dialect(self, target, object)?;

        if let Some(reference) = object.get("$ref") {
            let Value::String(reference) = reference else {
                return Err(SchemaError::invalid_type("$ref", "string"));
            };
            // Siblings of `$ref` are ignored
            return refs::compile(self, target, reference);
        }

        object::compile_definitions(self, target, object)?;
        any::compile_metadata(self, target, object)?;
        any::compile_type(self, target, object)?;
        object::compile_properties(self, target, object)?;
        array::compile_items(self, target, object)?;
        numeric::compile(self, target, object)?;
        string::compile(self, target, object)?;
        object::compile_limits(self, target, object)?;
        array::compile_limits(self, target, object)?;
        any::compile_enum(self, target, object)?;
        combinators::compile(self, target, object)
    }
}
