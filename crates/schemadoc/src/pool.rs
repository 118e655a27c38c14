use ahash::AHashMap;

use crate::node::NodeId;

/// Cache of schema nodes built for `$ref` targets, keyed by the dereference key
/// (the in-scope base reference followed by the literal `$ref` value).
#[derive(Debug, Default)]
pub struct ReferencePool {
    schemas: AHashMap<String, NodeId>,
}

impl ReferencePool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<NodeId> {
        self.schemas.get(key).copied()
    }

    /// Register `node` under `key`. An existing entry is kept.
    pub fn insert(&mut self, key: String, node: NodeId) {
        self.schemas.entry(key).or_insert(node);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
