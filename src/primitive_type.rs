//! The seven JSON Schema type names and a compact bitset over them.

use std::convert::TryFrom;
use std::fmt;
use std::ops::BitOrAssign;

use crate::error::CompileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PrimitiveType {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveType::Array => "array",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Null => "null",
            PrimitiveType::Number => "number",
            PrimitiveType::Object => "object",
            PrimitiveType::String => "string",
        };
        f.write_str(name)
    }
}

impl TryFrom<&str> for PrimitiveType {
    type Error = CompileError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "array" => Ok(PrimitiveType::Array),
            "boolean" => Ok(PrimitiveType::Boolean),
            "integer" => Ok(PrimitiveType::Integer),
            "null" => Ok(PrimitiveType::Null),
            "number" => Ok(PrimitiveType::Number),
            "object" => Ok(PrimitiveType::Object),
            "string" => Ok(PrimitiveType::String),
            _ => Err(CompileError::InvalidType),
        }
    }
}

impl PrimitiveType {
    const fn as_bit(self) -> u8 {
        match self {
            PrimitiveType::Array => 1,
            PrimitiveType::Boolean => 2,
            PrimitiveType::Integer => 4,
            PrimitiveType::Null => 8,
            PrimitiveType::Number => 16,
            PrimitiveType::Object => 32,
            PrimitiveType::String => 64,
        }
    }
}

/// A bitset over [`PrimitiveType`], used to compile `type: "foo"` and `type: ["foo", "bar"]`
/// into a single representation validation can test in one comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PrimitiveTypesBitMap {
    inner: u8,
}

impl PrimitiveTypesBitMap {
    pub(crate) fn new() -> Self {
        PrimitiveTypesBitMap { inner: 0 }
    }

    pub(crate) fn contains_type(self, type_: PrimitiveType) -> bool {
        self.inner & type_.as_bit() != 0
    }
}

impl From<PrimitiveType> for PrimitiveTypesBitMap {
    fn from(type_: PrimitiveType) -> Self {
        PrimitiveTypesBitMap {
            inner: type_.as_bit(),
        }
    }
}

impl BitOrAssign<PrimitiveType> for PrimitiveTypesBitMap {
    fn bitor_assign(&mut self, rhs: PrimitiveType) {
        self.inner |= rhs.as_bit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_type_name() {
        for name in ["array", "boolean", "integer", "null", "number", "object", "string"] {
            let type_ = PrimitiveType::try_from(name).unwrap();
            assert_eq!(type_.to_string(), name);
        }
    }

    #[test]
    fn rejects_unknown_type_name() {
        assert!(PrimitiveType::try_from("float").is_err());
    }

    #[test]
    fn bitmap_tracks_multiple_types() {
        let mut bitmap = PrimitiveTypesBitMap::new();
        bitmap |= PrimitiveType::String;
        bitmap |= PrimitiveType::Null;
        assert!(bitmap.contains_type(PrimitiveType::String));
        assert!(bitmap.contains_type(PrimitiveType::Null));
        assert!(!bitmap.contains_type(PrimitiveType::Integer));
    }
}
