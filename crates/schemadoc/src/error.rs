/// Errors produced while loading or compiling a schema document.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Reference parsing, inheritance or document retrieval failed.
    #[error(transparent)]
    Reference(#[from] schemadoc_referencing::Error),
    /// The top-level input is neither a reference string nor a JSON object.
    #[error("Invalid argument, must be a JSON reference string or a JSON object")]
    InvalidArgument,
    /// A keyword holds a value of the wrong JSON kind.
    #[error("{keyword} must be of type {expected}")]
    InvalidType {
        keyword: &'static str,
        expected: &'static str,
    },
    #[error("{keyword} must be an integer")]
    NotInteger { keyword: &'static str },
    #[error("{keyword} must be greater than or equal to 0")]
    Negative { keyword: &'static str },
    #[error("multipleOf must be strictly greater than 0")]
    NonPositiveMultipleOf,
    /// The lower bound of a pair of keywords exceeds the upper one.
    #[error("{min} cannot be greater than {max}")]
    Ordering {
        min: &'static str,
        max: &'static str,
    },
    #[error("{exclusive} cannot exist without {bound}")]
    ExclusiveWithoutBound {
        exclusive: &'static str,
        bound: &'static str,
    },
    #[error("Invalid regex pattern '{pattern}'")]
    InvalidPattern { pattern: String },
    #[error("{name} is not a valid type")]
    UnknownType { name: String },
    #[error("{name} type is duplicated")]
    DuplicateType { name: String },
    #[error("{name} is already required")]
    DuplicateRequired { name: String },
    #[error("enum items must be unique")]
    DuplicateEnum,
}

impl SchemaError {
    pub(crate) fn invalid_type(keyword: &'static str, expected: &'static str) -> SchemaError {
        SchemaError::InvalidType { keyword, expected }
    }
    pub(crate) fn not_an_object() -> SchemaError {
        SchemaError::invalid_type("schema", "object")
    }
    pub(crate) fn ordering(min: &'static str, max: &'static str) -> SchemaError {
        SchemaError::Ordering { min, max }
    }
    pub(crate) fn invalid_pattern(pattern: impl Into<String>) -> SchemaError {
        SchemaError::InvalidPattern {
            pattern: pattern.into(),
        }
    }
}
