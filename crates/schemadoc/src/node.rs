use std::sync::Arc;

use ahash::AHashMap;
use schemadoc_referencing::Reference;
use serde_json::Value;

use crate::{primitive_type::PrimitiveTypesBitMap, regex::Pattern};

/// Unique identifier of a [`SchemaNode`] within a [`Document`](crate::Document).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    // NOTE: Schemas with more than `u32::MAX` nodes are not supported
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn new(value: usize) -> NodeId {
        NodeId(value as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Value of `additionalProperties` or `additionalItems`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Additional {
    Bool(bool),
    Schema(NodeId),
}

/// Value of a single `dependencies` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dependency {
    /// Names of properties that must be present as well.
    Properties(Vec<String>),
    /// A schema the whole instance must be valid against.
    Schema(NodeId),
}

/// One compiled JSON Schema object.
#[derive(Debug, Clone)]
pub struct SchemaNode {
    pub(crate) property: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) reference: Arc<Reference>,
    pub(crate) ref_schema: Option<NodeId>,
    pub(crate) schema: Option<Reference>,

    pub(crate) id: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,

    pub(crate) types: PrimitiveTypesBitMap,
    pub(crate) definitions: AHashMap<String, NodeId>,

    pub(crate) properties: AHashMap<String, NodeId>,
    pub(crate) pattern_properties: AHashMap<String, NodeId>,
    pub(crate) additional_properties: Option<Additional>,
    pub(crate) dependencies: AHashMap<String, Dependency>,
    pub(crate) min_properties: Option<u64>,
    pub(crate) max_properties: Option<u64>,
    pub(crate) required: Vec<String>,

    pub(crate) items: Vec<NodeId>,
    pub(crate) items_is_single_schema: bool,
    pub(crate) additional_items: Option<Additional>,
    pub(crate) min_items: Option<u64>,
    pub(crate) max_items: Option<u64>,
    pub(crate) unique_items: bool,

    pub(crate) multiple_of: Option<f64>,
    pub(crate) minimum: Option<f64>,
    pub(crate) exclusive_minimum: bool,
    pub(crate) maximum: Option<f64>,
    pub(crate) exclusive_maximum: bool,

    pub(crate) min_length: Option<u64>,
    pub(crate) max_length: Option<u64>,
    pub(crate) pattern: Option<Pattern>,

    pub(crate) enumeration: Vec<Value>,

    pub(crate) one_of: Vec<NodeId>,
    pub(crate) any_of: Vec<NodeId>,
    pub(crate) all_of: Vec<NodeId>,
    pub(crate) not: Option<NodeId>,
}

impl SchemaNode {
    pub(crate) fn new(
        property: impl Into<String>,
        parent: Option<NodeId>,
        reference: Arc<Reference>,
    ) -> Self {
        Self {
            property: property.into(),
            parent,
            reference,
            ref_schema: None,
            schema: None,
            id: None,
            title: None,
            description: None,
            types: PrimitiveTypesBitMap::new(),
            definitions: AHashMap::new(),
            properties: AHashMap::new(),
            pattern_properties: AHashMap::new(),
            additional_properties: None,
            dependencies: AHashMap::new(),
            min_properties: None,
            max_properties: None,
            required: Vec::new(),
            items: Vec::new(),
            items_is_single_schema: false,
            additional_items: None,
            min_items: None,
            max_items: None,
            unique_items: false,
            multiple_of: None,
            minimum: None,
            exclusive_minimum: false,
            maximum: None,
            exclusive_maximum: false,
            min_length: None,
            max_length: None,
            pattern: None,
            enumeration: Vec::new(),
            one_of: Vec::new(),
            any_of: Vec::new(),
            all_of: Vec::new(),
            not: None,
        }
    }

    /// Keyword or container label that produced this node.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
    /// Base reference used to resolve relative `$ref`s under this node.
    #[must_use]
    pub fn reference(&self) -> &Reference {
        &self.reference
    }
    /// Target of this node's `$ref`, if any.
    #[must_use]
    pub fn ref_schema(&self) -> Option<NodeId> {
        self.ref_schema
    }
    #[must_use]
    pub fn schema(&self) -> Option<&Reference> {
        self.schema.as_ref()
    }
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    #[must_use]
    pub fn types(&self) -> PrimitiveTypesBitMap {
        self.types
    }
    #[must_use]
    pub fn definitions(&self) -> &AHashMap<String, NodeId> {
        &self.definitions
    }
    #[must_use]
    pub fn properties(&self) -> &AHashMap<String, NodeId> {
        &self.properties
    }
    #[must_use]
    pub fn pattern_properties(&self) -> &AHashMap<String, NodeId> {
        &self.pattern_properties
    }
    /// `None` when the keyword is absent, which is distinct from `false`.
    #[must_use]
    pub fn additional_properties(&self) -> Option<Additional> {
        self.additional_properties
    }
    #[must_use]
    pub fn dependencies(&self) -> &AHashMap<String, Dependency> {
        &self.dependencies
    }
    #[must_use]
    pub fn min_properties(&self) -> Option<u64> {
        self.min_properties
    }
    #[must_use]
    pub fn max_properties(&self) -> Option<u64> {
        self.max_properties
    }
    #[must_use]
    pub fn required(&self) -> &[String] {
        &self.required
    }
    /// Item schemas. A single schema applies to every item when
    /// [`items_is_single_schema`](Self::items_is_single_schema) is set.
    #[must_use]
    pub fn items(&self) -> &[NodeId] {
        &self.items
    }
    #[must_use]
    pub fn items_is_single_schema(&self) -> bool {
        self.items_is_single_schema
    }
    /// `None` when the keyword is absent, which is distinct from `false`.
    #[must_use]
    pub fn additional_items(&self) -> Option<Additional> {
        self.additional_items
    }
    #[must_use]
    pub fn min_items(&self) -> Option<u64> {
        self.min_items
    }
    #[must_use]
    pub fn max_items(&self) -> Option<u64> {
        self.max_items
    }
    #[must_use]
    pub fn unique_items(&self) -> bool {
        self.unique_items
    }
    #[must_use]
    pub fn multiple_of(&self) -> Option<f64> {
        self.multiple_of
    }
    #[must_use]
    pub fn minimum(&self) -> Option<f64> {
        self.minimum
    }
    #[must_use]
    pub fn exclusive_minimum(&self) -> bool {
        self.exclusive_minimum
    }
    #[must_use]
    pub fn maximum(&self) -> Option<f64> {
        self.maximum
    }
    #[must_use]
    pub fn exclusive_maximum(&self) -> bool {
        self.exclusive_maximum
    }
    #[must_use]
    pub fn min_length(&self) -> Option<u64> {
        self.min_length
    }
    #[must_use]
    pub fn max_length(&self) -> Option<u64> {
        self.max_length
    }
    #[must_use]
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }
    #[must_use]
    pub fn enumeration(&self) -> &[Value] {
        &self.enumeration
    }
    #[must_use]
    pub fn one_of(&self) -> &[NodeId] {
        &self.one_of
    }
    #[must_use]
    pub fn any_of(&self) -> &[NodeId] {
        &self.any_of
    }
    #[must_use]
    pub fn all_of(&self) -> &[NodeId] {
        &self.all_of
    }
    /// `None` when the keyword is absent.
    #[must_use]
    pub fn not(&self) -> Option<NodeId> {
        self.not
    }
}
