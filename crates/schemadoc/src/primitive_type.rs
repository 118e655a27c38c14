use core::fmt;
use std::ops::BitOrAssign;

/// JSON types a schema can declare in its `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
}

const ALL: [PrimitiveType; 7] = [
    PrimitiveType::Array,
    PrimitiveType::Boolean,
    PrimitiveType::Integer,
    PrimitiveType::Null,
    PrimitiveType::Number,
    PrimitiveType::Object,
    PrimitiveType::String,
];

impl PrimitiveType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::Array => "array",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Null => "null",
            PrimitiveType::Number => "number",
            PrimitiveType::Object => "object",
            PrimitiveType::String => "string",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PrimitiveType {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ALL.into_iter()
            .find(|ty| ty.as_str() == value)
            .ok_or(())
    }
}

/// Compact set of [`PrimitiveType`] values.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimitiveTypesBitMap {
    inner: u8,
}

impl PrimitiveTypesBitMap {
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: 0 }
    }

    #[must_use]
    pub fn contains_type(self, ty: PrimitiveType) -> bool {
        self.inner & ty.bit() != 0
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.inner.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.inner == 0
    }

    pub fn iter(self) -> impl Iterator<Item = PrimitiveType> {
        ALL.into_iter().filter(move |ty| self.contains_type(*ty))
    }
}

impl BitOrAssign<PrimitiveType> for PrimitiveTypesBitMap {
    fn bitor_assign(&mut self, rhs: PrimitiveType) {
        self.inner |= rhs.bit();
    }
}

impl fmt::Debug for PrimitiveTypesBitMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
