use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use schemadoc::{Document, Location, PrimitiveType, Retrieve, SchemaError};
use serde_json::{json, Value};
use test_case::test_case;

/// Serves documents from memory and counts fetches.
struct InMemory {
    documents: HashMap<String, Value>,
    fetches: Arc<AtomicUsize>,
}

impl InMemory {
    fn new(documents: impl IntoIterator<Item = (&'static str, Value)>) -> InMemory {
        InMemory {
            documents: documents
                .into_iter()
                .map(|(location, value)| (location.to_string(), value))
                .collect(),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Retrieve for InMemory {
    fn retrieve(
        &self,
        location: Location<'_>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.documents
            .get(location.as_str())
            .cloned()
            .ok_or_else(|| "404 Not Found".into())
    }
}

fn build(retriever: InMemory, reference: &str) -> Result<Document, SchemaError> {
    schemadoc::options()
        .with_retriever(retriever)
        .build(&json!(reference))
}

#[test]
fn local_reference_in_remote_document() {
    let retriever = InMemory::new([(
        "http://example.com/root.json",
        json!({
            "properties": {"name": {"$ref": "#/definitions/name"}},
            "definitions": {"name": {"type": "string"}}
        }),
    )]);
    let fetches = Arc::clone(&retriever.fetches);
    let document = build(retriever, "http://example.com/root.json").expect("Valid schema");

    let name = document.root_node().properties()["name"];
    let target = document[name].ref_schema().expect("Resolved");
    assert!(document[target].types().contains_type(PrimitiveType::String));
    assert_eq!(
        document[name].reference().to_string(),
        "http://example.com/root.json#/definitions/name"
    );
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
    assert_eq!(document.documents().len(), 1);
}

#[test]
fn documents_are_fetched_once() {
    let retriever = InMemory::new([
        (
            "http://example.com/root.json",
            json!({
                "properties": {
                    "a": {"$ref": "http://example.com/defs.json#/definitions/a"},
                    "b": {"$ref": "http://example.com/defs.json#/definitions/b"}
                }
            }),
        ),
        (
            "http://example.com/defs.json",
            json!({"definitions": {"a": {"type": "integer"}, "b": {"type": "boolean"}}}),
        ),
    ]);
    let fetches = Arc::clone(&retriever.fetches);
    let document = build(retriever, "http://example.com/root.json").expect("Valid schema");

    assert_eq!(fetches.load(Ordering::SeqCst), 2);
    assert!(document.documents().contains("http://example.com/defs.json"));
    let properties = document.root_node().properties();
    let b = document[properties["b"]].ref_schema().expect("Resolved");
    assert!(document[b].types().contains_type(PrimitiveType::Boolean));
}

#[test]
fn nested_path_inherits_scope() {
    let retriever = InMemory::new([
        (
            "http://example.com/schemas/",
            json!({"items": {"$ref": "/schemas/item.json"}}),
        ),
        ("http://example.com/schemas/item.json", json!({"type": "null"})),
    ]);
    let document = build(retriever, "http://example.com/schemas/").expect("Valid schema");
    let items = document.root_node().items()[0];
    let target = document[items].ref_schema().expect("Resolved");
    assert!(document[target].types().contains_type(PrimitiveType::Null));
    assert_eq!(
        document[target].reference().to_string(),
        "http://example.com/schemas/item.json"
    );
}

#[test]
fn fragment_of_entry_reference_is_dropped() {
    let retriever = InMemory::new([(
        "http://example.com/root.json",
        json!({
            "type": "object",
            "definitions": {
                "a": {"$ref": "#/definitions/b"},
                "b": {"type": "string"}
            }
        }),
    )]);
    let document =
        build(retriever, "http://example.com/root.json#/definitions/a").expect("Valid schema");

    let root = document.root_node();
    assert_eq!(root.types().iter().collect::<Vec<_>>(), [PrimitiveType::Object]);
    assert_eq!(root.definitions().len(), 2);
    assert_eq!(root.reference().to_string(), "http://example.com/root.json");
    let a = root.definitions()["a"];
    let b = document[a].ref_schema().expect("Sibling definition is reachable");
    assert!(document[b].types().contains_type(PrimitiveType::String));
}

#[test]
fn recursive_remote_document() {
    let retriever = InMemory::new([(
        "http://example.com/tree.json",
        json!({
            "type": "object",
            "properties": {
                "children": {"type": "array", "items": {"$ref": "http://example.com/tree.json"}}
            }
        }),
    )]);
    let fetches = Arc::clone(&retriever.fetches);
    let document = build(retriever, "http://example.com/tree.json").expect("Valid schema");

    let children = document.root_node().properties()["children"];
    let items = document[children].items()[0];
    let tree = document[items].ref_schema().expect("Resolved");
    let nested_children = document[tree].properties()["children"];
    let nested_items = document[nested_children].items()[0];
    assert_eq!(document[nested_items].ref_schema(), Some(tree));
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[test_case(
    "http://example.com/missing.json",
    "Failed to retrieve 'http://example.com/missing.json': 404 Not Found";
    "unretrievable"
)]
#[test_case("ftp://example.com/schema.json", "unhandled scheme ftp")]
#[test_case("schema.json", "Reference must be canonical schema.json")]
fn loading_errors(reference: &str, expected: &str) {
    let retriever = InMemory::new([("http://example.com/root.json", json!({}))]);
    let error = build(retriever, reference).expect_err("Should fail");
    assert_eq!(error.to_string(), expected);
}

#[test]
fn relative_reference_uses_remote_document() {
    let retriever = InMemory::new([(
        "http://example.com/root.json",
        json!({"properties": {"a": {"$ref": "#/definitions/a"}}}),
    )]);
    let error = build(retriever, "http://example.com/root.json").expect_err("Should fail");
    assert_eq!(error.to_string(), "Pointer '/definitions/a' does not exist");
}

#[test]
fn divergent_pointer_is_rejected() {
    let retriever = InMemory::new([(
        "http://example.com/root.json",
        json!({
            "properties": {"a": {"$ref": "#/definitions/a"}},
            "definitions": {
                "a": {"properties": {"b": {"$ref": "#/definitions/b"}}},
                "b": {}
            }
        }),
    )]);
    let error = build(retriever, "http://example.com/root.json").expect_err("Should fail");
    assert!(matches!(error, SchemaError::Reference(_)));
}
