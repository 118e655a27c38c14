use std::{ops::Index, sync::Arc};

use schemadoc_referencing::{DocumentPool, Reference};
use serde_json::Value;

use crate::{
    node::{NodeId, SchemaNode},
    pool::ReferencePool,
    regex::PatternEngine,
    CompileOptions, SchemaError,
};

/// Label of the root node until [`Document::set_root_name`] is called.
pub const ROOT_SCHEMA_PROPERTY: &str = "(root)";

/// A compiled schema document.
///
/// Owns every [`SchemaNode`] in an arena. Nodes refer to each other through [`NodeId`], so
/// recursive `$ref`s form cycles of ids rather than of owned values.
#[derive(Debug)]
pub struct Document {
    pub(crate) reference: Arc<Reference>,
    pub(crate) root: NodeId,
    pub(crate) nodes: Vec<SchemaNode>,
    pub(crate) pool: DocumentPool,
    pub(crate) references: ReferencePool,
    pub(crate) pattern_engine: PatternEngine,
}

impl Document {
    /// Load a schema from a reference string or compile an in-memory JSON object.
    ///
    /// ```rust
    /// use schemadoc::{Document, PrimitiveType};
    /// use serde_json::json;
    ///
    /// # fn example() -> Result<(), schemadoc::SchemaError> {
    /// let document = Document::from_uri_or_value(&json!({"type": ["string", "null"]}))?;
    /// let types = document.root_node().types();
    /// assert!(types.contains_type(PrimitiveType::Null));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the input is neither a string nor an object, if the referenced
    /// document can not be loaded, or if the schema is malformed.
    pub fn from_uri_or_value(input: &Value) -> Result<Document, SchemaError> {
        CompileOptions::default().build(input)
    }

    /// Load and compile the schema `reference` points to.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference is invalid, the document can not be loaded, or the
    /// schema is malformed.
    pub fn from_reference(reference: &str) -> Result<Document, SchemaError> {
        CompileOptions::default().build_from_reference(reference)
    }

    /// Compile an in-memory schema. Its `$ref`s are resolved against the schema itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an object or the schema is malformed.
    pub fn from_value(value: Value) -> Result<Document, SchemaError> {
        CompileOptions::default().build_from_value(value)
    }

    pub(crate) fn new(
        reference: Reference,
        pool: DocumentPool,
        pattern_engine: PatternEngine,
    ) -> Document {
        let reference = Arc::new(reference);
        let root = SchemaNode::new(ROOT_SCHEMA_PROPERTY, None, Arc::clone(&reference));
        Document {
            reference,
            root: NodeId::new(0),
            nodes: vec![root],
            pool,
            references: ReferencePool::new(),
            pattern_engine,
        }
    }

    /// Relabel the root node.
    pub fn set_root_name(&mut self, name: impl Into<String>) {
        let root = self.root;
        self.node_mut(root).property = name.into();
    }

    /// Base reference of the document: the loaded location or `#` for in-memory schemas.
    #[must_use]
    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn root_node(&self) -> &SchemaNode {
        &self[self.root]
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SchemaNode> {
        self.nodes.get(id.index())
    }

    /// All nodes in creation order, the root first.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &SchemaNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId::new(idx), node))
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Documents loaded while compiling.
    #[must_use]
    pub fn documents(&self) -> &DocumentPool {
        &self.pool
    }

    /// Nodes built for `$ref` targets.
    #[must_use]
    pub fn references(&self) -> &ReferencePool {
        &self.references
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut SchemaNode {
        &mut self.nodes[id.index()]
    }

    /// Allocate a node under `parent` that shares its scope.
    pub(crate) fn new_child(&mut self, parent: NodeId, property: impl Into<String>) -> NodeId {
        let reference = Arc::clone(&self[parent].reference);
        let id = NodeId::new(self.nodes.len());
        self.nodes
            .push(SchemaNode::new(property, Some(parent), reference));
        id
    }
}

impl Index<NodeId> for Document {
    type Output = SchemaNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}
