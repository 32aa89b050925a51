//! A thin, read-only adaptor over the JSON value type used as both schema and instance
//! input. This is the crate's only point of contact with `serde_json::Value` — the rest
//! of the compiler and validator go through the capabilities below rather than matching
//! on `serde_json::Value` directly, so a future swap of the underlying JSON representation
//! only touches this file.
//!
//! The JSON *parser* that produces these values is an external collaborator (see the
//! crate's top-level docs); this module only describes how the compiled schema and the
//! validator read from whatever value the parser handed them.

use std::convert::TryFrom;

use serde_json::Number;

/// A JSON number is either a 64-bit signed integer or an IEEE-754 double.
///
/// `serde_json::Number` never produces the "number-as-string" tag mentioned in the wider
/// interface contract (that variant only appears when a parser is built with arbitrary
/// precision support); discrimination here is therefore always one of these two cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum NumberKind {
    Integer(i64),
    Float(f64),
}

impl NumberKind {
    pub(crate) fn as_f64(self) -> f64 {
        match self {
            NumberKind::Integer(i) => i as f64,
            NumberKind::Float(f) => f,
        }
    }
}

/// Classify a JSON number as [`NumberKind::Integer`] or [`NumberKind::Float`].
///
/// A number that round-trips through `i64` (or fits after narrowing from an unsigned
/// 64-bit value) is treated as an integer; everything else, including values too large
/// for `i64`, is treated as a float.
pub(crate) fn number_kind(n: &Number) -> NumberKind {
    if let Some(i) = n.as_i64() {
        NumberKind::Integer(i)
    } else if let Some(u) = n.as_u64() {
        if let Ok(i) = i64::try_from(u) {
            NumberKind::Integer(i)
        } else {
            NumberKind::Float(n.as_f64().expect("serde_json::Number is always f64-representable"))
        }
    } else {
        NumberKind::Float(n.as_f64().expect("serde_json::Number is always f64-representable"))
    }
}

/// `true` iff the JSON number has no fractional component, i.e. it would compare equal to
/// both its `floor` and `ceil`.
pub(crate) fn is_integral(n: &Number) -> bool {
    match number_kind(n) {
        NumberKind::Integer(_) => true,
        NumberKind::Float(f) => f.floor() == f && f.ceil() == f,
    }
}

/// Count the Unicode code points in a UTF-8 byte slice, per the "length is code points,
/// not bytes" rule `MinMax` applies to strings.
///
/// `serde_json::Value::String` is backed by Rust's `String`, which is always valid UTF-8,
/// so this can never actually fail for the adaptor this crate ships with. The `Result` is
/// kept because the interface this module implements is specified independently of the
/// concrete JSON parser: a byte-oriented adaptor over a different parser could hand back
/// invalid UTF-8, and the validator must propagate that as an error rather than panic.
pub(crate) fn utf8_count_codepoints(bytes: &[u8]) -> Result<usize, crate::error::ValidateError> {
    std::str::from_utf8(bytes)
        .map(|s| s.chars().count())
        .map_err(|_| crate::error::ValidateError::Utf8)
}
