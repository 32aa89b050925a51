//! End-to-end scenarios driven through the public `compile`/`validate` API, mirroring the
//! keyword-level unit tests but exercising the compiler's keyword-grouping and the
//! validator's recursive walk together.

use jschema_core::{compile, compile_and_validate, validate, CompileError};
use serde_json::{json, Value};
use test_case::test_case;

#[test_case(&json!({"type": "integer"}), &json!(1.0), true; "1 integer type accepts whole float")]
#[test_case(&json!({"type": "integer"}), &json!(1.1), false; "2 integer type rejects fractional float")]
#[test_case(&json!({"type": ["string", "null"]}), &json!(null), true; "3 union type accepts null")]
#[test_case(&json!({"minimum": 0, "exclusiveMaximum": 10}), &json!(0), true; "4 inclusive minimum boundary accepts")]
#[test_case(&json!({"minimum": 0, "exclusiveMaximum": 10}), &json!(10), false; "5 exclusive maximum boundary rejects")]
#[test_case(&json!({"multipleOf": 0.1}), &json!(1.1), true; "6 multiple of float tolerance accepts")]
#[test_case(&json!({"properties": {"a": {"type": "integer"}}, "required": ["a"]}), &json!({"a": 1}), true; "7 required property present accepts")]
#[test_case(&json!({"properties": {"a": {"type": "integer"}}, "required": ["a"]}), &json!({}), false; "8 required property missing rejects")]
#[test_case(&json!({"patternProperties": {"^x": {"type": "integer"}}, "additionalProperties": false}), &json!({"x1": 1, "y": 2}), false; "9 unmatched member rejected by additional properties false")]
#[test_case(&json!({"oneOf": [{"type": "integer"}, {"minimum": 0}]}), &json!(1), false; "10 one of rejects when two branches match")]
#[test_case(&json!({"const": {"a": [1, 2]}}), &json!({"a": [2, 1]}), true; "11 const array equality is set like")]
#[test_case(&json!({"not": {"type": "string"}}), &json!("hi"), false; "12 not inverts inner schema")]
#[test_case(&json!({"maxLength": 1}), &json!("😀"), true; "13 max length counts code points not bytes")]
fn scenario_table(schema: &Value, instance: &Value, expected: bool) {
    let compiled = compile(schema).expect("schema compiles");
    assert_eq!(validate(&compiled, instance).unwrap(), expected);
}

#[test]
fn bool_schema_true_accepts_everything() {
    let compiled = compile(&json!(true)).unwrap();
    assert!(validate(&compiled, &json!(null)).unwrap());
    assert!(validate(&compiled, &json!({"a": 1})).unwrap());
}

#[test]
fn bool_schema_false_rejects_everything() {
    let compiled = compile(&json!(false)).unwrap();
    assert!(!validate(&compiled, &json!(null)).unwrap());
    assert!(!validate(&compiled, &json!(1)).unwrap());
}

#[test]
fn empty_object_schema_accepts_everything() {
    let compiled = compile(&json!({})).unwrap();
    for instance in [json!(1), json!("x"), json!(null), json!([1, 2]), json!({"a": 1})] {
        assert!(validate(&compiled, &instance).unwrap());
    }
}

#[test]
fn not_is_logical_negation_of_inner_schema() {
    let compiled = compile(&json!({"not": {"type": "integer"}})).unwrap();
    assert!(validate(&compiled, &json!("x")).unwrap());
    assert!(!validate(&compiled, &json!(1)).unwrap());
}

#[test]
fn combinators_match_their_quantifiers() {
    let all_of = compile(&json!({"allOf": [{"minimum": 0}, {"maximum": 10}]})).unwrap();
    assert!(validate(&all_of, &json!(5)).unwrap());
    assert!(!validate(&all_of, &json!(-1)).unwrap());

    let any_of = compile(&json!({"anyOf": [{"type": "string"}, {"type": "null"}]})).unwrap();
    assert!(validate(&any_of, &json!("x")).unwrap());
    assert!(!validate(&any_of, &json!(1)).unwrap());

    let one_of = compile(&json!({"oneOf": [{"minimum": 5}, {"maximum": 0}]})).unwrap();
    assert!(validate(&one_of, &json!(10)).unwrap());
    assert!(validate(&one_of, &json!(-10)).unwrap());
    assert!(!validate(&one_of, &json!(2)).unwrap());
}

#[test]
fn unknown_keyword_fails_compilation() {
    let err = compile(&json!({"type": "string", "unknownKeyword": true})).unwrap_err();
    assert!(matches!(err, CompileError::NonExhaustiveSchemaValidators));
}

#[test]
fn min_max_length_counts_unicode_code_points() {
    let compiled = compile(&json!({"minLength": 1, "maxLength": 1})).unwrap();
    assert!(validate(&compiled, &json!("\u{1F600}")).unwrap());
    assert!(!validate(&compiled, &json!("ab")).unwrap());
}

#[test]
fn compile_and_validate_matches_separate_compile_then_validate() {
    let schema = json!({"type": "integer", "minimum": 0});
    for instance in [json!(5), json!(-5), json!(1.5)] {
        let compiled = compile(&schema).unwrap();
        let separate = validate(&compiled, &instance).unwrap();
        let combined = compile_and_validate(&schema, &instance).unwrap();
        assert_eq!(separate, combined);
    }
}

#[test]
fn combined_keyword_groups_compile_to_one_conjunction_child_each() {
    // `minItems`+`maxItems` together contribute one MinMax child, not two independent ones;
    // this only compiles at all if the compiler's exhaustive-key-consumption check counts
    // both keys against that single child.
    let compiled = compile(&json!({"minItems": 1, "maxItems": 3})).unwrap();
    assert!(validate(&compiled, &json!([1, 2])).unwrap());
    assert!(!validate(&compiled, &json!([])).unwrap());
    assert!(!validate(&compiled, &json!([1, 2, 3, 4])).unwrap());
}
