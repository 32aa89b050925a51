//! `pattern`, and the regex engine adaptor shared with `patternProperties`.
//!
//! JSON Schema authors write patterns against ECMA 262 regex syntax; Rust's `regex` crate
//! implements a different (though heavily overlapping) dialect. The handful of escapes that
//! differ in meaning between the two are rewritten at compile time so schemas written
//! against the ECMA semantics still behave the way their authors expect.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::error::{CompileError, ValidateError};

lazy_static! {
    static ref CONTROL_GROUP_RE: Regex = Regex::new(r"\\c([a-zA-Z])").expect("valid regex");
}

/// Rewrite ECMA 262 character-class escapes that Rust's `regex` crate spells differently,
/// and expand `\cX` control-character escapes, which `regex` does not support at all.
pub(crate) fn translate_ecma_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek().copied() {
                Some('d') => {
                    out.push_str("[0-9]");
                    chars.next();
                }
                Some('D') => {
                    out.push_str("[^0-9]");
                    chars.next();
                }
                Some('w') => {
                    out.push_str("[A-Za-z0-9_]");
                    chars.next();
                }
                Some('W') => {
                    out.push_str("[^A-Za-z0-9_]");
                    chars.next();
                }
                Some('s') => {
                    out.push_str("[ \\t\\n\\r\\f\\v]");
                    chars.next();
                }
                Some('S') => {
                    out.push_str("[^ \\t\\n\\r\\f\\v]");
                    chars.next();
                }
                Some(next) => {
                    out.push(c);
                    out.push(next);
                    chars.next();
                }
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    replace_control_groups(&out)
}

fn replace_control_groups(pattern: &str) -> String {
    CONTROL_GROUP_RE
        .replace_all(pattern, |caps: &regex::Captures| {
            let letter = caps[1].chars().next().expect("capture group is non-empty");
            let code = (letter.to_ascii_uppercase() as u8) % 32;
            format!("\\x{:02x}", code)
        })
        .into_owned()
}

/// Compile an ECMA 262 pattern string into a Rust [`Regex`], applying the translation
/// above. Shared by `pattern` and `patternProperties`.
pub(crate) fn compile_regex(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&translate_ecma_pattern(pattern))
}

/// Whether `text` contains a match anywhere (JSON Schema's `pattern` is a partial, not
/// anchored, match).
pub(crate) fn partial_match(regex: &Regex, text: &str) -> Result<bool, ValidateError> {
    Ok(regex.is_match(text))
}

#[derive(Debug)]
pub(crate) struct PatternValidator {
    regex: Regex,
}

impl PatternValidator {
    pub(crate) fn compile(value: &Value) -> Result<Self, CompileError> {
        let pattern = match value {
            Value::String(s) => s,
            _ => return Err(CompileError::InvalidPatternType),
        };
        Ok(PatternValidator {
            regex: compile_regex(pattern)?,
        })
    }

    pub(crate) fn validate(&self, instance: &Value) -> Result<bool, ValidateError> {
        match instance {
            Value::String(s) => partial_match(&self.regex, s),
            _ => Ok(true),
        }
    }
}
