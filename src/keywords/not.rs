//! `not`.

use serde_json::Value;

use crate::compiler::compile_schema;
use crate::error::{CompileError, ValidateError};
use crate::ir::Node;

#[derive(Debug)]
pub(crate) struct NotValidator(Box<Node>);

impl NotValidator {
    pub(crate) fn compile(value: &Value) -> Result<Self, CompileError> {
        Ok(NotValidator(Box::new(compile_schema(value)?)))
    }

    pub(crate) fn validate(&self, instance: &Value) -> Result<bool, ValidateError> {
        Ok(!self.0.validate(instance)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inverts_the_inner_schema() {
        let validator = NotValidator::compile(&json!({"type": "string"})).unwrap();
        assert!(validator.validate(&json!(1)).unwrap());
        assert!(!validator.validate(&json!("x")).unwrap());
    }
}
