//! `minItems`/`maxItems` and `minLength`/`maxLength`.
//!
//! Both pairs bound a count (array length or string length in code points) and share the
//! same compile-time bound parsing and runtime comparison shape, so they are one validator
//! parametrized by [`MinMaxKind`] rather than two near-identical structs.

use serde_json::Value;

use crate::error::{CompileError, ValidateError};
use crate::value::utf8_count_codepoints;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MinMaxKind {
    Items,
    Length,
}

#[derive(Debug)]
pub(crate) struct MinMaxValidator {
    kind: MinMaxKind,
    min: Option<u64>,
    max: Option<u64>,
}

fn parse_bound(value: &Value, kind: MinMaxKind) -> Result<u64, CompileError> {
    let wrong_type = match kind {
        MinMaxKind::Items => CompileError::InvalidMinMaxItemsType,
        MinMaxKind::Length => CompileError::InvalidMinMaxLengthType,
    };
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Ok(u)
            } else if n.as_i64().is_some() {
                Err(wrong_type)
            } else {
                let f = n.as_f64().ok_or(wrong_type)?;
                if f.fract() == 0.0 && f >= 0.0 {
                    Ok(f as u64)
                } else {
                    Err(CompileError::InvalidFloatToInt)
                }
            }
        }
        _ => Err(wrong_type),
    }
}

impl MinMaxValidator {
    pub(crate) fn compile(
        min_value: Option<&Value>,
        max_value: Option<&Value>,
        kind: MinMaxKind,
    ) -> Result<Self, CompileError> {
        let min = min_value.map(|v| parse_bound(v, kind)).transpose()?;
        let max = max_value.map(|v| parse_bound(v, kind)).transpose()?;
        Ok(MinMaxValidator { kind, min, max })
    }

    pub(crate) fn validate(&self, instance: &Value) -> Result<bool, ValidateError> {
        let count = match (self.kind, instance) {
            (MinMaxKind::Items, Value::Array(items)) => items.len() as u64,
            (MinMaxKind::Length, Value::String(s)) => {
                utf8_count_codepoints(s.as_bytes())? as u64
            }
            _ => return Ok(true),
        };
        Ok(self.min.map_or(true, |m| count >= m) && self.max.map_or(true, |m| count <= m))
    }
}
