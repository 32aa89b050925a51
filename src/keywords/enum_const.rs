//! `enum` and `const`.
//!
//! Both reduce to "does the instance deep-equal one of a fixed list of values" — `const` is
//! just `enum` with a single member — so they share one validator and one equality routine.
//!
//! Array equality here is deliberately **set-like** rather than positional: an array member
//! matches if every one of its elements has some equal counterpart in the other array (of
//! the same length), regardless of order. Standard JSON Schema equality is positional, and
//! this crate's own number/object/string equality above is positional too — arrays are the
//! one deliberate exception, matching `{"const": {"a": [1, 2]}}` accepting `{"a": [2, 1]}`.

use num_cmp::NumCmp;
use serde_json::{Map, Number, Value};

use crate::error::CompileError;

#[derive(Debug)]
pub(crate) struct EnumConstValidator {
    values: Vec<Value>,
}

impl EnumConstValidator {
    pub(crate) fn compile_enum(value: &Value) -> Result<Self, CompileError> {
        match value {
            Value::Array(values) => Ok(EnumConstValidator {
                values: values.clone(),
            }),
            _ => Err(CompileError::EnumConstInvalidType),
        }
    }

    pub(crate) fn compile_const(value: &Value) -> Self {
        EnumConstValidator {
            values: vec![value.clone()],
        }
    }

    pub(crate) fn validate(&self, instance: &Value) -> bool {
        self.values.iter().any(|v| deep_equal(v, instance))
    }
}

fn numbers_equal(left: &Number, right: &Number) -> bool {
    if let Some(a) = left.as_u64() {
        num_cmp_against(a, right)
    } else if let Some(a) = left.as_i64() {
        num_cmp_against(a, right)
    } else {
        let a = left.as_f64().expect("serde_json::Number is always f64-representable");
        num_cmp_against(a, right)
    }
}

fn num_cmp_against<T: NumCmp<u64> + NumCmp<i64> + NumCmp<f64> + Copy>(left: T, right: &Number) -> bool {
    if let Some(b) = right.as_u64() {
        NumCmp::num_eq(left, b)
    } else if let Some(b) = right.as_i64() {
        NumCmp::num_eq(left, b)
    } else {
        NumCmp::num_eq(
            left,
            right.as_f64().expect("serde_json::Number is always f64-representable"),
        )
    }
}

fn arrays_equal(left: &[Value], right: &[Value]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .all(|a| right.iter().any(|b| deep_equal(a, b)))
}

fn objects_equal(left: &Map<String, Value>, right: &Map<String, Value>) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .all(|(k, v)| right.get(k).map_or(false, |v2| deep_equal(v, v2)))
}

fn deep_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Null, Value::Null) => true,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Array(a), Value::Array(b)) => arrays_equal(a, b),
        (Value::Object(a), Value::Object(b)) => objects_equal(a, b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enum_matches_any_member() {
        let validator = EnumConstValidator::compile_enum(&json!([1, "two", 3.0])).unwrap();
        assert!(validator.validate(&json!("two")));
        assert!(validator.validate(&json!(3)));
        assert!(!validator.validate(&json!("three")));
    }

    #[test]
    fn const_matches_single_value() {
        let validator = EnumConstValidator::compile_const(&json!({"a": 1}));
        assert!(validator.validate(&json!({"a": 1.0})));
        assert!(!validator.validate(&json!({"a": 2})));
    }

    #[test]
    fn const_array_equality_is_set_like() {
        let validator = EnumConstValidator::compile_const(&json!({"a": [1, 2]}));
        assert!(validator.validate(&json!({"a": [2, 1]})));
    }

    #[test]
    fn enum_rejects_non_array_schema() {
        assert!(EnumConstValidator::compile_enum(&json!("nope")).is_err());
    }
}
