//! `properties`, `patternProperties`, `additionalProperties`, `required`, merged into one
//! validator since they all act on the same pass over an object instance's members.

use regex::Regex;
use serde_json::{Map, Value};

use crate::compiler::compile_schema;
use crate::error::{CompileError, ValidateError};
use crate::ir::Node;
use crate::keywords::pattern::compile_regex;

enum MatchEntry {
    Literal {
        key: String,
        required: bool,
        child: Node,
    },
    Regex {
        regex: Regex,
        child: Node,
    },
}

impl std::fmt::Debug for MatchEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchEntry::Literal { key, required, child } => f
                .debug_struct("Literal")
                .field("key", key)
                .field("required", required)
                .field("child", child)
                .finish(),
            MatchEntry::Regex { regex, child } => f
                .debug_struct("Regex")
                .field("regex", &regex.as_str())
                .field("child", child)
                .finish(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct PatternMatchValidator {
    entries: Vec<MatchEntry>,
    additional: Option<Box<Node>>,
    required_count: usize,
}

fn required_keys(value: &Value) -> Result<Vec<&str>, CompileError> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.as_str()),
                _ => Err(CompileError::InvalidPropertiesType),
            })
            .collect(),
        _ => Err(CompileError::InvalidPropertiesType),
    }
}

fn properties_map(value: &Value) -> Result<&Map<String, Value>, CompileError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(CompileError::InvalidPropertiesType),
    }
}

impl PatternMatchValidator {
    pub(crate) fn compile(
        properties: Option<&Value>,
        pattern_properties: Option<&Value>,
        additional_properties: Option<&Value>,
        required: Option<&Value>,
    ) -> Result<Self, CompileError> {
        let required_names: Vec<&str> = match required {
            Some(value) => required_keys(value)?,
            None => Vec::new(),
        };
        let required_count = required_names.len();

        // Step 1: every required name gets a literal entry up front, defaulting to
        // `BoolSchema(true)` so an instance missing the key fails on the required count
        // alone, not on some incidental child schema.
        let mut entries: Vec<MatchEntry> = required_names
            .iter()
            .map(|name| MatchEntry::Literal {
                key: (*name).to_string(),
                required: true,
                child: Node::Bool(true),
            })
            .collect();

        // Step 2: `properties` either replaces the child of a required entry already
        // present, or appends a new, non-required literal entry.
        if let Some(value) = properties {
            for (key, schema) in properties_map(value)? {
                let compiled = compile_schema(schema)?;
                match entries
                    .iter_mut()
                    .find(|entry| matches!(entry, MatchEntry::Literal { key: k, .. } if k == key))
                {
                    Some(MatchEntry::Literal { child, .. }) => *child = compiled,
                    _ => entries.push(MatchEntry::Literal {
                        key: key.clone(),
                        required: false,
                        child: compiled,
                    }),
                }
            }
        }

        // Step 3: `patternProperties` always appends fresh regex entries.
        if let Some(value) = pattern_properties {
            for (pattern, schema) in properties_map(value)? {
                entries.push(MatchEntry::Regex {
                    regex: compile_regex(pattern)?,
                    child: compile_schema(schema)?,
                });
            }
        }

        // Step 4: `additionalProperties` compiles into its own slot, not an entry.
        let additional = match additional_properties {
            Some(value) => Some(Box::new(compile_schema(value)?)),
            None => None,
        };

        Ok(PatternMatchValidator {
            entries,
            additional,
            required_count,
        })
    }

    pub(crate) fn validate(&self, instance: &Value) -> Result<bool, ValidateError> {
        let object = match instance {
            Value::Object(object) => object,
            _ => return Ok(true),
        };

        let mut satisfied_required = 0usize;
        let mut seen_required = std::collections::HashSet::new();

        for (key, value) in object.iter() {
            let mut matched_any = false;
            let mut failed = false;

            for entry in &self.entries {
                match entry {
                    MatchEntry::Literal { key: entry_key, required, child } => {
                        if entry_key == key {
                            matched_any = true;
                            if *required && seen_required.insert(entry_key.clone()) {
                                satisfied_required += 1;
                            }
                            if !child.validate(value)? {
                                failed = true;
                            }
                        }
                    }
                    MatchEntry::Regex { regex, child } => {
                        if regex.is_match(key) {
                            matched_any = true;
                            if !child.validate(value)? {
                                failed = true;
                            }
                        }
                    }
                }
            }

            if !matched_any || failed {
                if let Some(additional) = &self.additional {
                    if !additional.validate(value)? {
                        return Ok(false);
                    }
                }
            }
            if failed {
                return Ok(false);
            }
        }

        Ok(satisfied_required >= self.required_count)
    }
}
