use core::fmt;
use std::borrow::Cow;

use serde_json::Value;

use crate::Error;

/// A parsed JSON Pointer (RFC 6901).
///
/// The empty pointer addresses the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pointer {
    raw: String,
    tokens: Vec<String>,
}

impl Pointer {
    /// Parse a pointer from its (already percent-decoded) string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is neither empty nor starts with `/`, or if it contains
    /// a `~` that is not followed by `0` or `1`.
    pub fn parse(pointer: &str) -> Result<Pointer, Error> {
        if pointer.is_empty() {
            return Ok(Pointer::default());
        }
        let Some(rest) = pointer.strip_prefix('/') else {
            return Err(Error::invalid_pointer(
                pointer,
                "JSON pointer must be empty or start with a \"/\"",
            ));
        };
        let mut tokens = Vec::new();
        for segment in rest.split('/') {
            if !is_valid_segment(segment) {
                return Err(Error::invalid_pointer(
                    pointer,
                    "'~' must be followed by '0' or '1'",
                ));
            }
            tokens.push(unescape_segment(segment).into_owned());
        }
        Ok(Pointer {
            raw: pointer.to_string(),
            tokens,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Unescaped reference tokens of this pointer.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Look up the value addressed by this pointer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PointerToNowhere`] if any token is missing from the document.
    pub fn resolve<'a>(&self, document: &'a Value) -> Result<&'a Value, Error> {
        self.tokens
            .iter()
            .try_fold(document, |target, token| match target {
                Value::Object(map) => map.get(token.as_str()),
                Value::Array(list) => parse_index(token).and_then(|idx| list.get(idx)),
                _ => None,
            })
            .ok_or_else(|| Error::pointer_to_nowhere(self.raw.as_str()))
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    while let Some(c) = chars.next() {
        if c == '~' && !matches!(chars.next(), Some('0' | '1')) {
            return false;
        }
    }
    true
}

/// Replace `~1` with `/` and `~0` with `~` in a single reference token.
#[must_use]
pub fn unescape_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains('~') {
        Cow::Owned(segment.replace("~1", "/").replace("~0", "~"))
    } else {
        Cow::Borrowed(segment)
    }
}

// Taken from `serde_json`.
fn parse_index(s: &str) -> Option<usize> {
    if s.starts_with('+') || (s.starts_with('0') && s.len() != 1) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use test_case::test_case;

    use super::{unescape_segment, Pointer};

    #[test_case(""; "empty")]
    #[test_case("/"; "empty token")]
    #[test_case("/definitions/foo")]
    #[test_case("/a~1b/c~0d")]
    fn parse_valid(input: &str) {
        let pointer = Pointer::parse(input).expect("Valid pointer");
        assert_eq!(pointer.to_string(), input);
    }

    #[test_case("definitions"; "no leading slash")]
    #[test_case("/a~2"; "unknown escape")]
    #[test_case("/a~"; "dangling tilde")]
    fn parse_invalid(input: &str) {
        assert!(Pointer::parse(input).is_err());
    }

    #[test]
    fn unescape_order() {
        assert_eq!(unescape_segment("~01"), "~1");
        assert_eq!(unescape_segment("a~1b"), "a/b");
    }

    #[test_case("", &json!({"a": [1, {"b": 2}]}); "whole document")]
    #[test_case("/a/0", &json!(1))]
    #[test_case("/a/1/b", &json!(2))]
    fn resolve(input: &str, expected: &serde_json::Value) {
        let document = json!({"a": [1, {"b": 2}]});
        let pointer = Pointer::parse(input).expect("Valid pointer");
        assert_eq!(pointer.resolve(&document).expect("Existing value"), expected);
    }

    #[test_case("/b")]
    #[test_case("/a/2")]
    #[test_case("/a/01"; "leading zero")]
    #[test_case("/a/0/x"; "through a scalar")]
    fn resolve_missing(input: &str) {
        let document = json!({"a": [1, {"b": 2}]});
        let pointer = Pointer::parse(input).expect("Valid pointer");
        let error = pointer.resolve(&document).expect_err("Missing value");
        assert_eq!(error.to_string(), format!("Pointer '{input}' does not exist"));
    }

    #[test]
    fn escaped_keys() {
        let document = json!({"a/b": {"~c": true}});
        let pointer = Pointer::parse("/a~1b/~0c").expect("Valid pointer");
        assert_eq!(pointer.resolve(&document).expect("Existing value"), &json!(true));
    }
}
