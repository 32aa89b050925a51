//! A compact JSON Schema compiler and validator covering a pragmatic subset of Draft 7:
//! `type`, item/length bounds, numeric bounds, `multipleOf`, `properties`/
//! `patternProperties`/`additionalProperties`/`required`, `allOf`/`anyOf`/`oneOf`, `not`,
//! `enum`/`const` and `pattern`.
//!
//! Schemas compile once into a [`CompiledSchema`] — a closed tree of keyword validators —
//! and that compiled form validates any number of instances without re-examining the
//! original schema JSON. There is no `$ref` resolution, no draft negotiation and no custom
//! keyword registration; schemas that use any of those, or any keyword outside the list
//! above, fail to compile with [`CompileError::NonExhaustiveSchemaValidators`].
//!
//! ```
//! use serde_json::json;
//!
//! let compiled = jschema_core::compile(&json!({"type": "integer", "minimum": 0})).unwrap();
//! assert!(jschema_core::validate(&compiled, &json!(5)).unwrap());
//! assert!(!jschema_core::validate(&compiled, &json!(-5)).unwrap());
//! ```

mod compiler;
mod error;
mod ir;
mod keywords;
mod primitive_type;
mod value;

pub use error::{CompileError, Error, ValidateError};

use serde_json::Value;

/// A fully compiled schema, ready to validate any number of instances without
/// re-examining the original schema JSON.
///
/// This is an opaque handle — the tree of keyword validators behind it is this crate's own
/// implementation detail, reached only through [`validate`].
#[derive(Debug)]
pub struct CompiledSchema(ir::Node);

/// Compile a schema. The schema value itself is not retained by the result — only the
/// derived validators are.
pub fn compile(schema: &Value) -> Result<CompiledSchema, CompileError> {
    Ok(CompiledSchema(compiler::compile_schema(schema)?))
}

/// Validate `instance` against an already-compiled schema.
pub fn validate(compiled: &CompiledSchema, instance: &Value) -> Result<bool, ValidateError> {
    compiled.0.validate(instance)
}

/// Compile `schema` and immediately validate `instance` against it, releasing the compiled
/// form afterward. Convenient for call sites that don't need to validate more than one
/// instance against the same schema.
pub fn compile_and_validate(schema: &Value, instance: &Value) -> Result<bool, Error> {
    let compiled = compile(schema)?;
    let result = validate(&compiled, instance)?;
    release(compiled);
    Ok(result)
}

/// Release a compiled schema. Dropping a [`CompiledSchema`] value does exactly this on its
/// own — every validator owns its children through plain `Vec`/`Box` fields, so the whole
/// tree is freed the moment it goes out of scope. This function exists only so callers who
/// want to make that teardown explicit at a particular point in their code can do so.
pub fn release(compiled: CompiledSchema) {
    drop(compiled);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compiles_and_validates_a_simple_schema() {
        let compiled = compile(&json!({"type": "string", "minLength": 1})).unwrap();
        assert!(validate(&compiled, &json!("a")).unwrap());
        assert!(!validate(&compiled, &json!("")).unwrap());
        assert!(!validate(&compiled, &json!(1)).unwrap());
    }

    #[test]
    fn compile_and_validate_convenience_matches_separate_calls() {
        let schema = json!({"type": "array", "minItems": 1});
        assert!(compile_and_validate(&schema, &json!([1])).unwrap());
        assert!(!compile_and_validate(&schema, &json!([])).unwrap());
    }

    #[test]
    fn reuses_one_compiled_schema_against_many_instances() {
        let compiled = compile(&json!({"enum": [1, 2, 3]})).unwrap();
        assert!(validate(&compiled, &json!(1)).unwrap());
        assert!(validate(&compiled, &json!(2)).unwrap());
        assert!(!validate(&compiled, &json!(4)).unwrap());
    }

    #[test]
    fn compile_error_propagates_unchanged() {
        let err = compile(&json!({"type": "not-a-type"})).unwrap_err();
        assert!(matches!(err, CompileError::InvalidType));
    }
}
