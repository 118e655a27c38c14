use std::sync::Arc;

use ahash::AHashMap;
use serde_json::Value;

use crate::{DefaultRetriever, Error, IntoRetriever, Location, Reference, Retrieve};

/// A cache of raw JSON documents keyed by their canonical location.
///
/// Documents are fetched at most once and are never refreshed. Alternatively, a single
/// standalone document can be registered when the schema was supplied in memory.
pub struct DocumentPool {
    documents: AHashMap<String, Arc<Value>>,
    standalone: Option<Arc<Value>>,
    retriever: Arc<dyn Retrieve>,
}

impl std::fmt::Debug for DocumentPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentPool")
            .field("documents", &self.documents.keys().collect::<Vec<_>>())
            .field("standalone", &self.standalone.is_some())
            .field("retriever", &"<dyn Retrieve>")
            .finish()
    }
}

impl Default for DocumentPool {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentPool {
    /// Create an empty pool backed by [`DefaultRetriever`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_retriever(DefaultRetriever)
    }

    #[must_use]
    pub fn with_retriever(retriever: impl IntoRetriever) -> Self {
        Self {
            documents: AHashMap::new(),
            standalone: None,
            retriever: retriever.into_retriever(),
        }
    }

    /// Register an in-memory document. While it is set, references are resolved against it.
    pub fn set_standalone(&mut self, document: impl Into<Arc<Value>>) {
        self.standalone = Some(document.into());
    }

    #[must_use]
    pub fn standalone(&self) -> Option<Arc<Value>> {
        self.standalone.clone()
    }

    /// Return the document `reference` points into, loading it on the first request.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference is not absolute, its scheme is neither `file` nor
    /// `http`, or the retriever fails.
    pub fn get_document(&mut self, reference: &Reference) -> Result<Arc<Value>, Error> {
        tracing::debug!(reference = %reference, "Get document from pool");
        if !reference.is_absolute() {
            return Err(Error::not_canonical(reference.to_string()));
        }
        let canonical = reference.canonical().to_string();
        if let Some(document) = self.documents.get(&canonical) {
            tracing::debug!(location = %canonical, "Found in pool");
            return Ok(Arc::clone(document));
        }

        let location = match reference.scheme() {
            Some(scheme) if scheme.eq_ignore_ascii_case("file") => {
                Location::File(strip_file_prefix(&canonical))
            }
            Some(scheme) if scheme.eq_ignore_ascii_case("http") => Location::Http(&canonical),
            Some(scheme) => return Err(Error::unhandled_scheme(scheme)),
            None => return Err(Error::not_canonical(reference.to_string())),
        };
        tracing::debug!(?location, "Loading new document");
        let document = self
            .retriever
            .retrieve(location)
            .map_err(|error| Error::unretrievable(location.as_str(), error))?;

        let document = Arc::new(document);
        self.documents.insert(canonical, Arc::clone(&document));
        Ok(document)
    }

    /// Whether a document is cached under the given canonical location.
    #[must_use]
    pub fn contains(&self, canonical: &str) -> bool {
        self.documents.contains_key(canonical)
    }

    /// Number of fetched documents. The standalone document is not counted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Path part of a `file://` location. Schemes are case-insensitive.
fn strip_file_prefix(location: &str) -> &str {
    const PREFIX: &str = "file://";
    match location.get(..PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(PREFIX) => &location[PREFIX.len()..],
        _ => location,
    }
}
