//! # schemadoc-referencing
//!
//! JSON References (a URI plus a JSON Pointer fragment) and a pool of raw JSON documents
//! loaded by their canonical location.
mod error;
mod pointer;
mod pool;
mod reference;
mod retriever;

pub use error::{Error, InheritanceError};
pub use pointer::{unescape_segment, Pointer};
pub use pool::DocumentPool;
pub use reference::Reference;
pub use retriever::{DefaultRetriever, IntoRetriever, Location, Retrieve};
