//! Error types.
//!
//! Compilation and validation fail in different ways and for different audiences, so they
//! get two separate error enums rather than one shared one: [`CompileError`] is meant for
//! the author of a schema (almost always a mistake in the schema itself), while
//! [`ValidateError`] covers the rare cases where validating a perfectly good schema against
//! some instance runs into trouble that has nothing to do with either of them being wrong
//! (bad UTF-8, a pathological `multipleOf`, a regex engine fault).
//!
//! Neither type derives from `thiserror`; both get a hand-written `Display` and
//! `std::error::Error` impl, matching the rest of this crate's dependency footprint.

use std::fmt;

/// A schema failed to compile.
///
/// Compilation is all-or-nothing: the first error encountered aborts the whole schema, and
/// whatever was already compiled for sibling keywords is dropped before the error
/// propagates (ordinary `Drop` on the partially built [`crate::CompiledSchema`] tree, no
/// separate cleanup step).
#[derive(Debug)]
pub enum CompileError {
    /// `type` (or one of its array entries) was not a string naming a recognized JSON type.
    InvalidType,
    /// `minItems`/`maxItems` was present but not a non-negative integer.
    InvalidMinMaxItemsType,
    /// `minLength`/`maxLength` was present but not a non-negative integer.
    InvalidMinMaxLengthType,
    /// `minimum`/`maximum`/`exclusiveMinimum`/`exclusiveMaximum` was present but not a number.
    InvalidMinimumMaximumType,
    /// `multipleOf` was present but not a number.
    InvalidMultipleOfType,
    /// `multipleOf` was a number, but not strictly positive.
    MultipleOfLessThanZero,
    /// A bound meant to be compiled into an integer (e.g. `minItems: 2.5`) had a
    /// fractional part.
    InvalidFloatToInt,
    /// `pattern` (or a `patternProperties` key) was present but not a string.
    InvalidPatternType,
    /// `properties`, `patternProperties` or `required` had the wrong shape (not an object
    /// of schemas, or not an array of strings, respectively).
    InvalidPropertiesType,
    /// `allOf`/`anyOf`/`oneOf` was present but not an array.
    InvalidAllOfType,
    /// `allOf`/`anyOf`/`oneOf` was an array, but empty.
    AllAnyOneOfEmptyArray,
    /// `enum` was present but not an array.
    EnumConstInvalidType,
    /// The schema object's keys were not all consumed by a recognized keyword group.
    NonExhaustiveSchemaValidators,
    /// The top-level schema value was neither a JSON object nor a boolean.
    TopLevelSchemaType,
    /// A keyword value used the "number-as-string" tag. No parser this crate ships against
    /// ever produces that tag; this variant exists for interface completeness with the
    /// wider JSON value contract and is unreachable in practice.
    NumberAsString,
    /// A `pattern` or `patternProperties` key failed to compile as a regular expression.
    Regex(regex::Error),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::InvalidType => {
                write!(f, "'type' must be a recognized type name, or an array of them")
            }
            CompileError::InvalidMinMaxItemsType => {
                write!(f, "'minItems'/'maxItems' must be a non-negative integer")
            }
            CompileError::InvalidMinMaxLengthType => {
                write!(f, "'minLength'/'maxLength' must be a non-negative integer")
            }
            CompileError::InvalidMinimumMaximumType => {
                write!(f, "'minimum'/'maximum' must be a number")
            }
            CompileError::InvalidMultipleOfType => write!(f, "'multipleOf' must be a number"),
            CompileError::MultipleOfLessThanZero => {
                write!(f, "'multipleOf' must be strictly greater than zero")
            }
            CompileError::InvalidFloatToInt => {
                write!(f, "expected an integral value, found a fractional one")
            }
            CompileError::InvalidPatternType => write!(f, "'pattern' must be a string"),
            CompileError::InvalidPropertiesType => write!(
                f,
                "'properties'/'patternProperties' must be an object, 'required' must be an array of strings"
            ),
            CompileError::InvalidAllOfType => {
                write!(f, "'allOf'/'anyOf'/'oneOf' must be an array of schemas")
            }
            CompileError::AllAnyOneOfEmptyArray => {
                write!(f, "'allOf'/'anyOf'/'oneOf' must not be empty")
            }
            CompileError::EnumConstInvalidType => write!(f, "'enum' must be an array"),
            CompileError::NonExhaustiveSchemaValidators => {
                write!(f, "schema object contains an unrecognized keyword")
            }
            CompileError::TopLevelSchemaType => {
                write!(f, "a schema must be a JSON object or a boolean")
            }
            CompileError::NumberAsString => {
                write!(f, "numeric keyword value used an unsupported number encoding")
            }
            CompileError::Regex(inner) => write!(f, "invalid regular expression: {}", inner),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Regex(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<regex::Error> for CompileError {
    fn from(inner: regex::Error) -> Self {
        CompileError::Regex(inner)
    }
}

/// Validating an instance against an already-compiled schema failed.
///
/// This is distinct from a failed validation (an instance simply not matching a schema,
/// which is an `Ok(false)`, not an error): a [`ValidateError`] means the validator could
/// not determine a pass/fail answer at all.
#[derive(Debug)]
pub enum ValidateError {
    /// A string instance was not valid UTF-8. Unreachable with the `serde_json`-backed
    /// adaptor this crate ships (`serde_json::Value::String` is always valid UTF-8); kept
    /// for interface completeness with a byte-oriented value adaptor.
    Utf8,
    /// A number instance used the "number-as-string" tag. See [`CompileError::NumberAsString`];
    /// unreachable with this crate's adaptor.
    NumberAsString,
    /// `multipleOf`'s divisor was zero. Unreachable in practice: compilation rejects a
    /// non-positive `multipleOf` before a `MultipleOf` validator is ever constructed.
    MultipleOfDivideByZero,
    /// The regex engine faulted while matching a compiled pattern against an instance.
    /// `regex::Regex::is_match` cannot itself fail, so this is unreachable with the regex
    /// adaptor this crate ships; kept for interface completeness.
    Regex(regex::Error),
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidateError::Utf8 => write!(f, "instance string was not valid UTF-8"),
            ValidateError::NumberAsString => {
                write!(f, "instance number used an unsupported number encoding")
            }
            ValidateError::MultipleOfDivideByZero => write!(f, "'multipleOf' divisor was zero"),
            ValidateError::Regex(inner) => write!(f, "regex engine error: {}", inner),
        }
    }
}

impl std::error::Error for ValidateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidateError::Regex(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<regex::Error> for ValidateError {
    fn from(inner: regex::Error) -> Self {
        ValidateError::Regex(inner)
    }
}

/// Either half of the pipeline can fail; [`crate::compile_and_validate`] returns this
/// combined type so callers who only want a single `Result` don't have to nest two.
#[derive(Debug)]
pub enum Error {
    Compile(CompileError),
    Validate(ValidateError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Compile(inner) => write!(f, "{}", inner),
            Error::Validate(inner) => write!(f, "{}", inner),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Compile(inner) => Some(inner),
            Error::Validate(inner) => Some(inner),
        }
    }
}

impl From<CompileError> for Error {
    fn from(inner: CompileError) -> Self {
        Error::Compile(inner)
    }
}

impl From<ValidateError> for Error {
    fn from(inner: ValidateError) -> Self {
        Error::Validate(inner)
    }
}
