use std::sync::Arc;

use serde_json::Value;

/// Location of a document that is not yet in a [`DocumentPool`](crate::DocumentPool).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location<'a> {
    /// A filesystem path, `file://` prefix already removed.
    File(&'a str),
    /// A full `http` URL without fragment.
    Http(&'a str),
}

impl Location<'_> {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Location::File(path) | Location::Http(path) => path,
        }
    }
}

/// Trait for retrieving raw JSON documents by their location.
pub trait Retrieve: Send + Sync {
    /// Load and parse the document at `location`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document can not be read or is not valid JSON.
    fn retrieve(&self, location: Location<'_>)
        -> Result<Value, Box<dyn std::error::Error + Send + Sync>>;
}

/// Reads `file` documents from disk and fetches `http` documents with a blocking client.
///
/// Each scheme is available only when the corresponding crate feature is enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRetriever;

impl Retrieve for DefaultRetriever {
    fn retrieve(
        &self,
        location: Location<'_>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        match location {
            Location::File(path) => read_file(path),
            Location::Http(url) => fetch_http(url),
        }
    }
}

#[cfg(feature = "retrieve-file")]
fn read_file(path: &str) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
    let file = std::fs::File::open(path)?;
    Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
}

#[cfg(not(feature = "retrieve-file"))]
fn read_file(_: &str) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
    Err("`retrieve-file` feature or a custom retriever is required to load files".into())
}

#[cfg(all(feature = "retrieve-http", not(target_arch = "wasm32")))]
fn fetch_http(url: &str) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(response.json()?)
}

#[cfg(not(all(feature = "retrieve-http", not(target_arch = "wasm32"))))]
fn fetch_http(_: &str) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
    Err("`retrieve-http` feature or a custom retriever is required to fetch over HTTP".into())
}

pub trait IntoRetriever {
    fn into_retriever(self) -> Arc<dyn Retrieve>;
}

impl<T: Retrieve + 'static> IntoRetriever for T {
    fn into_retriever(self) -> Arc<dyn Retrieve> {
        Arc::new(self)
    }
}

impl IntoRetriever for Arc<dyn Retrieve> {
    fn into_retriever(self) -> Arc<dyn Retrieve> {
        self
    }
}
