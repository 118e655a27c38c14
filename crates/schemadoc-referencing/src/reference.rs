use core::fmt;
use std::str::FromStr;

use fluent_uri::UriRef;
use percent_encoding::percent_decode_str;

use crate::{Error, InheritanceError, Pointer};

/// A JSON Reference: a URI reference with a JSON Pointer in its fragment.
///
/// ```rust
/// use schemadoc_referencing::Reference;
///
/// # fn example() -> Result<(), schemadoc_referencing::Error> {
/// let parent = Reference::parse("http://example.com/schemas/root.json")?;
/// let child = Reference::parse("#/definitions/address")?;
/// let inherited = parent.inherits(&child)?;
/// assert_eq!(
///     inherited.to_string(),
///     "http://example.com/schemas/root.json#/definitions/address"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    scheme: Option<String>,
    authority: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
    pointer: Pointer,
}

impl Reference {
    /// Parse a URI reference and the JSON Pointer in its fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid URI reference or its fragment is not a
    /// valid JSON Pointer.
    pub fn parse(input: &str) -> Result<Reference, Error> {
        let uri =
            UriRef::parse(input).map_err(|error| Error::invalid_uri(input, error.to_string()))?;
        let fragment = uri.fragment().map(|fragment| fragment.as_str().to_string());
        let pointer = match &fragment {
            Some(fragment) => {
                let decoded = percent_decode_str(fragment)
                    .decode_utf8()
                    .map_err(|error| Error::invalid_pointer(fragment.as_str(), error.to_string()))?;
                Pointer::parse(&decoded)?
            }
            None => Pointer::default(),
        };
        Ok(Reference {
            scheme: uri.scheme().map(|scheme| scheme.as_str().to_string()),
            authority: uri.authority().map(|authority| authority.as_str().to_string()),
            path: uri.path().as_str().to_string(),
            query: uri.query().map(|query| query.as_str().to_string()),
            fragment,
            pointer,
        })
    }

    /// Whether the reference carries a scheme.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// The authority component (`host[:port]` with optional user info).
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The raw fragment, without the leading `#`.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    #[must_use]
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// The same reference without a fragment. Used as the document cache key.
    #[must_use]
    pub fn canonical(&self) -> Reference {
        Reference {
            fragment: None,
            pointer: Pointer::default(),
            ..self.clone()
        }
    }

    /// Compute the reference a `child` schema uses when embedded under `self`.
    ///
    /// The child may only narrow the parent's scope: its path and its pointer must extend
    /// the parent's ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent is relative or uses a scheme other than `http` or
    /// `file`, if an absolute child points to another scheme or host, or if the child's path
    /// or pointer diverge from the parent's.
    pub fn inherits(&self, child: &Reference) -> Result<Reference, Error> {
        let Some(scheme) = self.scheme() else {
            return Err(InheritanceError::RelativeParent {
                parent: self.to_string(),
            }
            .into());
        };
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("file") {
            return Err(InheritanceError::UnsupportedScheme {
                scheme: scheme.to_string(),
            }
            .into());
        }
        if child.is_absolute() {
            if !child
                .scheme()
                .is_some_and(|child_scheme| child_scheme.eq_ignore_ascii_case(scheme))
            {
                return Err(InheritanceError::SchemeMismatch {
                    parent: self.to_string(),
                    child: child.to_string(),
                }
                .into());
            }
            if host(child.authority.as_deref()) != host(self.authority.as_deref()) {
                return Err(InheritanceError::HostMismatch {
                    parent: self.to_string(),
                    child: child.to_string(),
                }
                .into());
            }
        }

        let mut inherited = self.clone();

        if !child.path.is_empty() {
            if !child.path.starts_with(&self.path) {
                return Err(InheritanceError::DivergentPath {
                    parent: self.to_string(),
                    parent_path: self.path.clone(),
                    child: child.to_string(),
                    child_path: child.path.clone(),
                }
                .into());
            }
            inherited.path.clone_from(&child.path);
        }

        if let Some(child_fragment) = child.fragment().filter(|fragment| !fragment.is_empty()) {
            let parent_fragment = self.fragment().unwrap_or_default();
            if !child_fragment.starts_with(parent_fragment) {
                return Err(InheritanceError::DivergentPointer {
                    parent: self.to_string(),
                    parent_pointer: parent_fragment.to_string(),
                    child: child.to_string(),
                    child_pointer: child_fragment.to_string(),
                }
                .into());
            }
            inherited.fragment = Some(child_fragment.to_string());
            inherited.pointer = child.pointer.clone();
        }

        Ok(inherited)
    }
}

/// Host and port of an authority, without user information.
fn host(authority: Option<&str>) -> Option<&str> {
    authority.map(|authority| {
        authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host)
    })
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        if let Some(authority) = &self.authority {
            write!(f, "//{authority}")?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl FromStr for Reference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reference::parse(s)
    }
}
