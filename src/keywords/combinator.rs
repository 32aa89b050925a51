//! `allOf`, `anyOf`, `oneOf`.

use serde_json::Value;

use crate::compiler::compile_schema;
use crate::error::{CompileError, ValidateError};
use crate::ir::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CombinatorKind {
    All,
    Any,
    One,
}

#[derive(Debug)]
pub(crate) struct CombinatorValidator {
    kind: CombinatorKind,
    schemas: Vec<Node>,
}

impl CombinatorValidator {
    pub(crate) fn compile(value: &Value, kind: CombinatorKind) -> Result<Self, CompileError> {
        let items = match value {
            Value::Array(items) => items,
            _ => return Err(CompileError::InvalidAllOfType),
        };
        if items.is_empty() {
            return Err(CompileError::AllAnyOneOfEmptyArray);
        }
        let mut schemas = Vec::with_capacity(items.len());
        for item in items {
            schemas.push(compile_schema(item)?);
        }
        Ok(CombinatorValidator { kind, schemas })
    }

    pub(crate) fn validate(&self, instance: &Value) -> Result<bool, ValidateError> {
        match self.kind {
            CombinatorKind::All => {
                for schema in &self.schemas {
                    if !schema.validate(instance)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            CombinatorKind::Any => {
                for schema in &self.schemas {
                    if schema.validate(instance)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            CombinatorKind::One => {
                let mut matches = 0;
                for schema in &self.schemas {
                    if schema.validate(instance)? {
                        matches += 1;
                        if matches == 2 {
                            return Ok(false);
                        }
                    }
                }
                Ok(matches == 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn all_of_requires_every_schema() {
        let validator =
            CombinatorValidator::compile(&json!([{"type": "integer"}, {"minimum": 0}]), CombinatorKind::All)
                .unwrap();
        assert!(validator.validate(&json!(1)).unwrap());
        assert!(!validator.validate(&json!(-1)).unwrap());
        assert!(!validator.validate(&json!(1.5)).unwrap());
    }

    #[test]
    fn any_of_requires_one_schema() {
        let validator =
            CombinatorValidator::compile(&json!([{"type": "string"}, {"type": "integer"}]), CombinatorKind::Any)
                .unwrap();
        assert!(validator.validate(&json!("x")).unwrap());
        assert!(validator.validate(&json!(1)).unwrap());
        assert!(!validator.validate(&json!(1.5)).unwrap());
    }

    #[test]
    fn one_of_rejects_more_than_one_match() {
        let validator =
            CombinatorValidator::compile(&json!([{"minimum": 0}, {"maximum": 10}]), CombinatorKind::One)
                .unwrap();
        assert!(!validator.validate(&json!(5)).unwrap());
        assert!(validator.validate(&json!(-5)).unwrap());
        assert!(validator.validate(&json!(15)).unwrap());
    }

    #[test]
    fn rejects_empty_array() {
        assert!(CombinatorValidator::compile(&json!([]), CombinatorKind::All).is_err());
    }

    #[test]
    fn rejects_non_array_value() {
        assert!(CombinatorValidator::compile(&json!({}), CombinatorKind::All).is_err());
    }
}
