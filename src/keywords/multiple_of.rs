//! `multipleOf`.
//!
//! Integer-over-integer division is exact and needs no tolerance. Once either side is a
//! float, division can land a hair off an exact multiple due to ordinary binary floating
//! point rounding (`0.3 / 0.1` is not quite `3.0`), so the float path re-derives the nearest
//! candidate multiple and accepts if it's within a handful of ULPs of the instance.

use serde_json::Value;

use crate::error::{CompileError, ValidateError};
use crate::value::{number_kind, NumberKind};

#[derive(Debug)]
pub(crate) struct MultipleOfValidator {
    divisor: NumberKind,
}

impl MultipleOfValidator {
    pub(crate) fn compile(value: &Value) -> Result<Self, CompileError> {
        let n = match value {
            Value::Number(n) => n,
            _ => return Err(CompileError::InvalidMultipleOfType),
        };
        let divisor = number_kind(n);
        let positive = match divisor {
            NumberKind::Integer(i) => i > 0,
            NumberKind::Float(f) => f > 0.0,
        };
        if !positive {
            return Err(CompileError::MultipleOfLessThanZero);
        }
        Ok(MultipleOfValidator { divisor })
    }

    pub(crate) fn validate(&self, instance: &Value) -> Result<bool, ValidateError> {
        let n = match instance {
            Value::Number(n) => n,
            _ => return Ok(true),
        };
        Ok(match (number_kind(n), self.divisor) {
            (NumberKind::Integer(i), NumberKind::Integer(d)) => i % d == 0,
            (instance, divisor) => {
                let (i, d) = (instance.as_f64(), divisor.as_f64());
                if d == 0.0 {
                    return Err(ValidateError::MultipleOfDivideByZero);
                }
                let quotient = i / d;
                if quotient.fract() == 0.0 {
                    true
                } else {
                    let candidate = quotient.trunc() * d;
                    ulp_close(candidate, i)
                }
            }
        })
    }
}

fn ulp_close(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs()).max(1.0);
    diff <= scale * f64::EPSILON * 4.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(&json!(2), &json!(10), true)]
    #[test_case(&json!(3), &json!(10), false)]
    #[test_case(&json!(0.1), &json!(1.1), true)]
    #[test_case(&json!(0.01), &json!(1.0), true)]
    fn validates(schema: &Value, instance: &Value, expected: bool) {
        let validator = MultipleOfValidator::compile(schema).unwrap();
        assert_eq!(validator.validate(instance).unwrap(), expected);
    }

    #[test]
    fn rejects_non_positive_divisor() {
        assert!(MultipleOfValidator::compile(&json!(0)).is_err());
        assert!(MultipleOfValidator::compile(&json!(-2)).is_err());
    }

    #[test]
    fn rejects_non_number_divisor() {
        assert!(MultipleOfValidator::compile(&json!("2")).is_err());
    }
}
