//! `type`.

use std::convert::TryFrom;

use serde_json::Value;

use crate::error::{CompileError, ValidateError};
use crate::primitive_type::{PrimitiveType, PrimitiveTypesBitMap};
use crate::value::is_integral;

#[derive(Debug)]
pub(crate) struct TypesValidator {
    types: PrimitiveTypesBitMap,
}

impl TypesValidator {
    pub(crate) fn compile(value: &Value) -> Result<Self, CompileError> {
        let mut types = PrimitiveTypesBitMap::new();
        match value {
            Value::String(name) => types |= PrimitiveType::try_from(name.as_str())?,
            Value::Array(names) => {
                if names.is_empty() {
                    return Err(CompileError::InvalidType);
                }
                for name in names {
                    match name {
                        Value::String(name) => types |= PrimitiveType::try_from(name.as_str())?,
                        _ => return Err(CompileError::InvalidType),
                    }
                }
            }
            _ => return Err(CompileError::InvalidType),
        }
        Ok(TypesValidator { types })
    }

    pub(crate) fn validate(&self, instance: &Value) -> Result<bool, ValidateError> {
        Ok(match instance {
            Value::Object(_) => self.types.contains_type(PrimitiveType::Object),
            Value::Array(_) => self.types.contains_type(PrimitiveType::Array),
            Value::String(_) => self.types.contains_type(PrimitiveType::String),
            Value::Bool(_) => self.types.contains_type(PrimitiveType::Boolean),
            Value::Null => self.types.contains_type(PrimitiveType::Null),
            Value::Number(n) => {
                self.types.contains_type(PrimitiveType::Number)
                    || (self.types.contains_type(PrimitiveType::Integer) && is_integral(n))
            }
        })
    }
}
