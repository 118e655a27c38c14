use std::sync::Arc;

use schemadoc_referencing::{DefaultRetriever, DocumentPool, IntoRetriever, Reference, Retrieve};
use serde_json::Value;

use crate::{regex::PatternEngine, Document, SchemaError};

/// Configuration for loading and compiling schema documents.
///
/// ```rust
/// use schemadoc::PatternEngine;
/// use serde_json::json;
///
/// # fn example() -> Result<(), schemadoc::SchemaError> {
/// let document = schemadoc::options()
///     .with_root_name("Address")
///     .with_pattern_engine(PatternEngine::Regex)
///     .build(&json!({"type": "object"}))?;
/// assert_eq!(document.root_node().property(), "Address");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CompileOptions {
    retriever: Arc<dyn Retrieve>,
    root_name: Option<String>,
    pattern_engine: PatternEngine,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            retriever: Arc::new(DefaultRetriever),
            root_name: None,
            pattern_engine: PatternEngine::default(),
        }
    }
}

impl std::fmt::Debug for CompileOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompileOptions")
            .field("retriever", &"<dyn Retrieve>")
            .field("root_name", &self.root_name)
            .field("pattern_engine", &self.pattern_engine)
            .finish()
    }
}

impl CompileOptions {
    /// Use a custom retriever for `file` and `http` documents.
    #[must_use]
    pub fn with_retriever(mut self, retriever: impl IntoRetriever) -> Self {
        self.retriever = retriever.into_retriever();
        self
    }

    /// Label the root node with `name` instead of `(root)`.
    #[must_use]
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_pattern_engine(mut self, engine: PatternEngine) -> Self {
        self.pattern_engine = engine;
        self
    }

    /// Compile a reference string or an in-memory JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidArgument`] for other kinds of input, or the first
    /// loading or compilation error.
    pub fn build(&self, input: &Value) -> Result<Document, SchemaError> {
        match input {
            Value::String(reference) => self.build_from_reference(reference),
            Value::Object(_) => self.build_from_value(input.clone()),
            _ => Err(SchemaError::InvalidArgument),
        }
    }

    /// Load the document `reference` points to and compile it as a whole.
    ///
    /// The fragment of `reference` is dropped: the document's base reference is its
    /// canonical location.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference is invalid, the document can not be loaded, or the
    /// schema is malformed.
    pub fn build_from_reference(&self, reference: &str) -> Result<Document, SchemaError> {
        tracing::debug!(reference, "New schema document from reference");
        let reference = Reference::parse(reference)?;
        let mut pool = DocumentPool::with_retriever(Arc::clone(&self.retriever));
        let contents = pool.get_document(&reference)?;
        let mut document = Document::new(reference.canonical(), pool, self.pattern_engine);
        let root = document.root;
        document.compile(&contents, root)?;
        Ok(self.finish(document))
    }

    /// Compile an in-memory schema, resolving its `$ref`s against itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an object or the schema is malformed.
    pub fn build_from_value(&self, value: Value) -> Result<Document, SchemaError> {
        tracing::debug!("New schema document from value");
        if !value.is_object() {
            return Err(SchemaError::InvalidArgument);
        }
        let contents = Arc::new(value);
        let mut pool = DocumentPool::with_retriever(Arc::clone(&self.retriever));
        pool.set_standalone(Arc::clone(&contents));
        let reference = Reference::parse("#")?;
        let mut document = Document::new(reference, pool, self.pattern_engine);
        let root = document.root;
        document.compile(&contents, root)?;
        Ok(self.finish(document))
    }

    fn finish(&self, mut document: Document) -> Document {
        if let Some(name) = &self.root_name {
            document.set_root_name(name.clone());
        }
        tracing::debug!(nodes = document.len(), "Schema document compiled");
        document
    }
}
