//! # schemadoc
//!
//! Loads JSON Schema (draft 4) documents and compiles them into a graph of constraint nodes.
//!
//! A schema is given either as a reference string (`file://` or `http://` location, with an
//! optional JSON Pointer fragment) or as an in-memory JSON object. Every `$ref` is resolved
//! while compiling; remote documents are fetched once per location and each reference target
//! is compiled once, so recursive schemas produce a finite graph.
//!
//! ```rust
//! use schemadoc::{Document, PrimitiveType};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), schemadoc::SchemaError> {
//! let document = Document::from_value(json!({
//!     "$ref": "#/definitions/name",
//!     "definitions": {
//!         "name": {"type": "string", "minLength": 1}
//!     }
//! }))?;
//! let target = document
//!     .root_node()
//!     .ref_schema()
//!     .expect("`$ref` is resolved");
//! assert!(document[target].types().contains_type(PrimitiveType::String));
//! assert_eq!(document[target].min_length(), Some(1));
//! # Ok(())
//! # }
//! ```
mod cmp;
mod compiler;
mod document;
mod error;
mod node;
mod options;
mod pool;
mod primitive_type;
mod regex;

pub use document::{Document, ROOT_SCHEMA_PROPERTY};
pub use error::SchemaError;
pub use node::{Additional, Dependency, NodeId, SchemaNode};
pub use options::CompileOptions;
pub use pool::ReferencePool;
pub use primitive_type::{PrimitiveType, PrimitiveTypesBitMap};
pub use regex::{Pattern, PatternEngine};
pub use schemadoc_referencing::{
    DefaultRetriever, DocumentPool, Location, Pointer, Reference, Retrieve,
};

/// Create default [`CompileOptions`].
#[must_use]
pub fn options() -> CompileOptions {
    CompileOptions::default()
}

/// Compile a reference string or an in-memory JSON object with default options.
///
/// # Errors
///
/// See [`Document::from_uri_or_value`].
pub fn compile(input: &serde_json::Value) -> Result<Document, SchemaError> {
    Document::from_uri_or_value(input)
}
