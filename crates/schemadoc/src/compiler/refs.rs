use std::sync::Arc;

use schemadoc_referencing::Reference;

use crate::{node::NodeId, Document, SchemaError};

/// Dereference `reference` found in the node `source`.
///
/// Each target is compiled once per dereference key. The new node is registered before its
/// body is compiled so that recursive references resolve to it instead of descending again.
pub(super) fn compile(
    document: &mut Document,
    source: NodeId,
    reference: &str,
) -> Result<(), SchemaError> {
    let key = format!("{}{reference}", document[source].reference);
    if let Some(cached) = document.references.get(&key) {
        tracing::trace!(key = %key, "Reference pool hit");
        document.node_mut(source).ref_schema = Some(cached);
        return Ok(());
    }

    let parsed = Reference::parse(reference)?;
    let standalone = document.pool.standalone();
    let resolved = if parsed.is_absolute() || standalone.is_some() {
        parsed
    } else {
        document[source].reference.inherits(&parsed)?
    };
    tracing::debug!(key = %key, resolved = %resolved, "Resolving reference");

    let contents = match standalone {
        Some(contents) => contents,
        None => document.pool.get_document(&resolved)?,
    };
    let target = resolved.pointer().resolve(&contents)?;
    if !target.is_object() {
        return Err(SchemaError::not_an_object());
    }

    let resolved = Arc::new(resolved);
    let resolved_key = format!("{resolved}{reference}");
    document.node_mut(source).reference = Arc::clone(&resolved);
    let child = document.new_child(source, "$ref");
    document.references.insert(key, child);
    document.references.insert(resolved_key, child);
    document.node_mut(source).ref_schema = Some(child);
    document.compile(target, child)
}
