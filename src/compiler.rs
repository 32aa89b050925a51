//! Top-level schema compilation: walk a schema object's keys, group them into the
//! keyword families `src/keywords` implements, and fail if anything is left unconsumed.

use serde_json::{Map, Value};

use crate::error::CompileError;
use crate::ir::Node;
use crate::keywords::combinator::{CombinatorKind, CombinatorValidator};
use crate::keywords::enum_const::EnumConstValidator;
use crate::keywords::min_max::{MinMaxKind, MinMaxValidator};
use crate::keywords::minimum_maximum::MinimumMaximumValidator;
use crate::keywords::multiple_of::MultipleOfValidator;
use crate::keywords::not::NotValidator;
use crate::keywords::pattern::PatternValidator;
use crate::keywords::pattern_match::PatternMatchValidator;
use crate::keywords::types::TypesValidator;

/// Compile a single schema value (object, or boolean) into its [`Node`].
///
/// This is the entry point keyword validators call recursively for their own subschemas
/// (`not`, `allOf`/`anyOf`/`oneOf` members, `additionalProperties`, and so on), as well as
/// the function [`crate::compile`] forwards to at the crate root.
pub(crate) fn compile_schema(schema: &Value) -> Result<Node, CompileError> {
    match schema {
        Value::Bool(accept) => Ok(Node::Bool(*accept)),
        Value::Object(object) => compile_object(object),
        _ => Err(CompileError::TopLevelSchemaType),
    }
}

fn compile_object(object: &Map<String, Value>) -> Result<Node, CompileError> {
    let mut children = Vec::new();
    let mut consumed = 0usize;

    if let Some(value) = object.get("type") {
        children.push(Node::Types(TypesValidator::compile(value)?));
        consumed += 1;
    }

    let min_items = object.get("minItems");
    let max_items = object.get("maxItems");
    if min_items.is_some() || max_items.is_some() {
        children.push(Node::MinMax(MinMaxValidator::compile(
            min_items,
            max_items,
            MinMaxKind::Items,
        )?));
        consumed += min_items.is_some() as usize + max_items.is_some() as usize;
    }

    let min_length = object.get("minLength");
    let max_length = object.get("maxLength");
    if min_length.is_some() || max_length.is_some() {
        children.push(Node::MinMax(MinMaxValidator::compile(
            min_length,
            max_length,
            MinMaxKind::Length,
        )?));
        consumed += min_length.is_some() as usize + max_length.is_some() as usize;
    }

    let minimum = object.get("minimum");
    let maximum = object.get("maximum");
    if minimum.is_some() || maximum.is_some() {
        children.push(Node::MinimumMaximum(MinimumMaximumValidator::compile(
            minimum, maximum, false,
        )?));
        consumed += minimum.is_some() as usize + maximum.is_some() as usize;
    }

    let exclusive_minimum = object.get("exclusiveMinimum");
    let exclusive_maximum = object.get("exclusiveMaximum");
    if exclusive_minimum.is_some() || exclusive_maximum.is_some() {
        children.push(Node::MinimumMaximum(MinimumMaximumValidator::compile(
            exclusive_minimum,
            exclusive_maximum,
            true,
        )?));
        consumed += exclusive_minimum.is_some() as usize + exclusive_maximum.is_some() as usize;
    }

    if let Some(value) = object.get("multipleOf") {
        children.push(Node::MultipleOf(MultipleOfValidator::compile(value)?));
        consumed += 1;
    }

    let properties = object.get("properties");
    let pattern_properties = object.get("patternProperties");
    let additional_properties = object.get("additionalProperties");
    let required = object.get("required");
    if properties.is_some()
        || pattern_properties.is_some()
        || additional_properties.is_some()
        || required.is_some()
    {
        children.push(Node::PatternMatch(PatternMatchValidator::compile(
            properties,
            pattern_properties,
            additional_properties,
            required,
        )?));
        consumed += properties.is_some() as usize
            + pattern_properties.is_some() as usize
            + additional_properties.is_some() as usize
            + required.is_some() as usize;
    }

    if let Some(value) = object.get("allOf") {
        children.push(Node::Combinator(CombinatorValidator::compile(
            value,
            CombinatorKind::All,
        )?));
        consumed += 1;
    }
    if let Some(value) = object.get("anyOf") {
        children.push(Node::Combinator(CombinatorValidator::compile(
            value,
            CombinatorKind::Any,
        )?));
        consumed += 1;
    }
    if let Some(value) = object.get("oneOf") {
        children.push(Node::Combinator(CombinatorValidator::compile(
            value,
            CombinatorKind::One,
        )?));
        consumed += 1;
    }

    if let Some(value) = object.get("not") {
        children.push(Node::Not(NotValidator::compile(value)?));
        consumed += 1;
    }

    if let Some(value) = object.get("enum") {
        children.push(Node::EnumConst(EnumConstValidator::compile_enum(value)?));
        consumed += 1;
    }
    if let Some(value) = object.get("const") {
        children.push(Node::EnumConst(EnumConstValidator::compile_const(value)));
        consumed += 1;
    }

    if let Some(value) = object.get("pattern") {
        children.push(Node::Pattern(PatternValidator::compile(value)?));
        consumed += 1;
    }

    if consumed != object.len() {
        // `children` is dropped here, releasing every validator compiled for the keyword
        // groups seen so far before the error propagates.
        return Err(CompileError::NonExhaustiveSchemaValidators);
    }

    Ok(Node::Conjunction(children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compiles_boolean_schemas() {
        assert!(matches!(compile_schema(&json!(true)).unwrap(), Node::Bool(true)));
        assert!(matches!(compile_schema(&json!(false)).unwrap(), Node::Bool(false)));
    }

    #[test]
    fn compiles_empty_object_schema_to_empty_conjunction() {
        let compiled = compile_schema(&json!({})).unwrap();
        assert!(compiled.validate(&json!(42)).unwrap());
    }

    #[test]
    fn rejects_unrecognized_keyword() {
        assert!(matches!(
            compile_schema(&json!({"unknownKeyword": 1})),
            Err(CompileError::NonExhaustiveSchemaValidators)
        ));
    }

    #[test]
    fn rejects_non_object_non_boolean_schema() {
        assert!(matches!(compile_schema(&json!("nope")), Err(CompileError::TopLevelSchemaType)));
    }

    #[test]
    fn combines_multiple_keyword_groups_as_a_conjunction() {
        let compiled = compile_schema(&json!({"type": "integer", "minimum": 0})).unwrap();
        assert!(compiled.validate(&json!(5)).unwrap());
        assert!(!compiled.validate(&json!(-5)).unwrap());
        assert!(!compiled.validate(&json!(1.5)).unwrap());
    }
}
