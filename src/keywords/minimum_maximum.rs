//! `minimum`/`maximum`/`exclusiveMinimum`/`exclusiveMaximum`.
//!
//! A bound compares in the instance's own number space: an integer instance compares
//! against bounds truncated to integers, a float instance compares against bounds widened
//! to floats. This avoids the classic `1 < 1.0000000001` float-vs-int surprise at the cost
//! of a small amount of precision when a float bound is truncated for an integer instance.

use serde_json::Value;

use crate::error::CompileError;
use crate::value::{number_kind, NumberKind};

#[derive(Debug)]
pub(crate) struct MinimumMaximumValidator {
    min: Option<NumberKind>,
    max: Option<NumberKind>,
    exclusive: bool,
}

fn parse_bound(value: &Value) -> Result<NumberKind, CompileError> {
    match value {
        Value::Number(n) => Ok(number_kind(n)),
        _ => Err(CompileError::InvalidMinimumMaximumType),
    }
}

impl MinimumMaximumValidator {
    pub(crate) fn compile(
        min_value: Option<&Value>,
        max_value: Option<&Value>,
        exclusive: bool,
    ) -> Result<Self, CompileError> {
        let min = min_value.map(parse_bound).transpose()?;
        let max = max_value.map(parse_bound).transpose()?;
        Ok(MinimumMaximumValidator { min, max, exclusive })
    }

    pub(crate) fn validate(&self, instance: &Value) -> Result<bool, crate::error::ValidateError> {
        let n = match instance {
            Value::Number(n) => n,
            _ => return Ok(true),
        };
        let instance = number_kind(n);
        let min_ok = self.min.map_or(true, |bound| self.compare_min(instance, bound));
        let max_ok = self.max.map_or(true, |bound| self.compare_max(instance, bound));
        Ok(min_ok && max_ok)
    }

    fn compare_min(&self, instance: NumberKind, bound: NumberKind) -> bool {
        match instance {
            NumberKind::Integer(i) => {
                let b = match bound {
                    NumberKind::Integer(b) => b,
                    NumberKind::Float(b) => b.trunc() as i64,
                };
                if self.exclusive {
                    i > b
                } else {
                    i >= b
                }
            }
            NumberKind::Float(f) => {
                let b = bound.as_f64();
                if self.exclusive {
                    f > b
                } else {
                    f >= b
                }
            }
        }
    }

    fn compare_max(&self, instance: NumberKind, bound: NumberKind) -> bool {
        match instance {
            NumberKind::Integer(i) => {
                let b = match bound {
                    NumberKind::Integer(b) => b,
                    NumberKind::Float(b) => b.trunc() as i64,
                };
                if self.exclusive {
                    i < b
                } else {
                    i <= b
                }
            }
            NumberKind::Float(f) => {
                let b = bound.as_f64();
                if self.exclusive {
                    f < b
                } else {
                    f <= b
                }
            }
        }
    }
}
