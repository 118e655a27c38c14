use std::error::Error as StdError;

/// Errors that can occur while parsing references or loading documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not a valid URI reference.
    #[error("Invalid URI reference '{reference}': {message}")]
    InvalidUri { reference: String, message: String },
    /// The fragment is not a valid JSON Pointer.
    #[error("Invalid JSON pointer '{pointer}': {message}")]
    InvalidPointer { pointer: String, message: String },
    /// The pointer does not address any value inside the document.
    #[error("Pointer '{pointer}' does not exist")]
    PointerToNowhere { pointer: String },
    /// A child reference can not be embedded under its parent.
    #[error("{0}")]
    Inheritance(InheritanceError),
    /// Only absolute references can be loaded.
    #[error("Reference must be canonical {reference}")]
    NotCanonical { reference: String },
    /// The document location uses a scheme without a loader.
    #[error("unhandled scheme {scheme}")]
    UnhandledScheme { scheme: String },
    /// The retriever failed to produce a JSON document.
    #[error("Failed to retrieve '{location}': {source}")]
    Unretrievable {
        location: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// Reasons for a failed [`Reference::inherits`](crate::Reference::inherits) call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InheritanceError {
    #[error("parent reference {parent} must be an absolute URL")]
    RelativeParent { parent: String },
    #[error("scheme type {scheme} not handled")]
    UnsupportedScheme { scheme: String },
    #[error("scheme of child {child} incompatible with scheme of parent {parent}")]
    SchemeMismatch { parent: String, child: String },
    #[error("references {parent} and {child} have different hosts")]
    HostMismatch { parent: String, child: String },
    #[error("child reference {child} has divergent path {child_path} from parent {parent}, which has path {parent_path}")]
    DivergentPath {
        parent: String,
        parent_path: String,
        child: String,
        child_path: String,
    },
    #[error("child reference {child} has divergent pointer {child_pointer} from parent {parent}, which has pointer {parent_pointer}")]
    DivergentPointer {
        parent: String,
        parent_pointer: String,
        child: String,
        child_pointer: String,
    },
}

impl Error {
    pub(crate) fn invalid_uri(reference: impl Into<String>, message: impl Into<String>) -> Error {
        Error::InvalidUri {
            reference: reference.into(),
            message: message.into(),
        }
    }
    pub(crate) fn invalid_pointer(pointer: impl Into<String>, message: impl Into<String>) -> Error {
        Error::InvalidPointer {
            pointer: pointer.into(),
            message: message.into(),
        }
    }
    pub(crate) fn pointer_to_nowhere(pointer: impl Into<String>) -> Error {
        Error::PointerToNowhere {
            pointer: pointer.into(),
        }
    }
    pub(crate) fn not_canonical(reference: impl Into<String>) -> Error {
        Error::NotCanonical {
            reference: reference.into(),
        }
    }
    pub(crate) fn unhandled_scheme(scheme: impl Into<String>) -> Error {
        Error::UnhandledScheme {
            scheme: scheme.into(),
        }
    }
    pub(crate) fn unretrievable(
        location: impl Into<String>,
        source: Box<dyn StdError + Send + Sync>,
    ) -> Error {
        Error::Unretrievable {
            location: location.into(),
            source,
        }
    }
}

impl From<InheritanceError> for Error {
    fn from(error: InheritanceError) -> Self {
        Error::Inheritance(error)
    }
}
