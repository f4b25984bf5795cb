//! Integration tests for enum and case mapping
//!
//! These tests parse real Swift enums and check the Enumeration and Case
//! records, including one-to-many case expansion and associated values.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use swiftdecl_core::{
    Case, Declaration, DeclarationKind, Enumeration, ExtractError, Selector, SwiftParser,
};

fn cases(source: &str) -> Vec<Case> {
    SwiftParser::new()
        .extract_kind::<Case>(source)
        .expect("Failed to extract cases")
}

fn enums(source: &str) -> Vec<Enumeration> {
    SwiftParser::new()
        .extract_kind::<Enumeration>(source)
        .expect("Failed to extract enums")
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_one_case_per_element() {
    let cases = cases("enum E { case a, b(Int) }");

    assert_eq!(cases.len(), 2, "Expected one Case per element");

    assert_eq!(cases[0].name(), "a");
    assert_eq!(cases[0].keyword(), "case");
    assert!(cases[0].associated_value().is_none());

    assert_eq!(cases[1].name(), "b");
    let values = cases[1]
        .associated_value()
        .expect("b should carry an associated value");
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].type_name(), Some("Int"));
    assert_eq!(values[0].first_name(), None);
    assert_eq!(values[0].second_name(), None);

    assert_eq!(cases[1].to_string(), "case b(Int)");
    assert_eq!(cases[0].to_string(), "case a");
}

#[test]
fn test_case_elements_share_entry_modifiers() {
    let source = r#"
enum Tree {
    indirect case node(Tree, Tree), leaf
}
"#;
    let cases = cases(source);

    assert_eq!(cases.len(), 2);
    for case in &cases {
        let modifiers: Vec<&str> = case.modifiers().iter().map(|m| m.name()).collect();
        assert!(
            modifiers.contains(&"indirect"),
            "Expected indirect on {}, got {:?}",
            case.name(),
            modifiers
        );
    }
    assert_eq!(cases[0].associated_value().map(|v| v.len()), Some(2));
    assert!(cases[1].associated_value().is_none());
}

#[test]
fn test_labelled_associated_values() {
    let cases = cases("enum Shape { case point(x: Int, y: Int) }");

    assert_eq!(cases.len(), 1);
    let values = cases[0].associated_value().expect("expected payload");
    let labels: Vec<Option<&str>> = values.iter().map(|p| p.first_name()).collect();
    assert_eq!(labels, vec![Some("x"), Some("y")]);
    assert!(values.iter().all(|p| p.type_name() == Some("Int")));

    assert_eq!(cases[0].to_string(), "case point(x: Int, y: Int)");
}

#[test]
fn test_raw_values() {
    let source = r#"
enum Planet: Int {
    case mercury = 1, venus
    case earth = 3
}
"#;
    let cases = cases(source);

    let raw: Vec<(&str, Option<&str>)> = cases.iter().map(|c| (c.name(), c.raw_value())).collect();
    assert_eq!(
        raw,
        vec![("mercury", Some("1")), ("venus", None), ("earth", Some("3"))]
    );
    assert_eq!(cases[0].to_string(), "case mercury = 1");
}

#[test]
fn test_enumeration_record() {
    let source = r#"
public enum Suit: String, CaseIterable {
    case hearts, spades
}
"#;
    let enums = enums(source);

    assert_eq!(enums.len(), 1);
    let suit = &enums[0];
    assert_eq!(suit.keyword(), "enum");
    assert_eq!(suit.name(), "Suit");
    assert!(suit.attributes().is_empty());
    assert_eq!(suit.modifiers().len(), 1);
    assert_eq!(suit.modifiers()[0].name(), "public");
    assert_eq!(suit.inheritance(), ["String", "CaseIterable"]);

    let names: Vec<&str> = suit.cases().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["hearts", "spades"]);
    assert_eq!(suit.to_string(), "public enum Suit");
}

#[test]
fn test_generic_enumeration_description() {
    let enums = enums("enum Result<Success, Failure> where Failure: Error { case success(Success) }");

    assert_eq!(enums.len(), 1);
    assert_eq!(
        enums[0].to_string(),
        "enum Result<Success, Failure> where Failure: Error"
    );
}

#[test]
fn test_absent_and_present_payload_serialize_differently() {
    let cases = cases("enum E { case a, b(Int) }");

    let a = serde_json::to_value(&cases[0]).expect("serialize a");
    let b = serde_json::to_value(&cases[1]).expect("serialize b");

    assert!(a["associated_value"].is_null());
    assert!(b["associated_value"].is_array());
    assert_eq!(b["associated_value"][0]["type"], "Int");
}

#[test]
fn test_empty_payload_is_not_absent() {
    let cases = cases("enum E { case a(), b }");

    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].associated_value(), Some(&[][..]));
    assert_eq!(cases[0].to_string(), "case a()");
    assert!(cases[1].associated_value().is_none());

    let a = serde_json::to_value(&cases[0]).expect("serialize a");
    let b = serde_json::to_value(&cases[1]).expect("serialize b");
    assert_eq!(a["associated_value"], serde_json::json!([]));
    assert!(b["associated_value"].is_null());
}

#[test]
fn test_mapping_is_idempotent() {
    let source = "enum E { case a, b(Int) }";
    let first = cases(source);
    let second = cases(source);

    assert_eq!(first, second);
    for (x, y) in first.iter().zip(&second) {
        assert_eq!(hash_of(x), hash_of(y));
    }
}

#[test]
fn test_formatting_does_not_change_records() {
    let compact = cases("enum E { case a, b(Int) }");
    let spread = cases(
        r#"
enum E {
    // the first case
    case a,
         b( Int )
}
"#,
    );

    assert_eq!(compact, spread);
}

#[test]
fn test_case_element_outside_enum_entry_is_rejected() {
    let source = "struct S {}";
    let parser = SwiftParser::new();
    let tree = parser.parse(source).expect("parse");

    let declaration = tree
        .root_node()
        .named_child(0)
        .expect("struct declaration");
    let name = declaration
        .child_by_field_name("name")
        .expect("struct name");

    let err = Case::from_element(&name, source).unwrap_err();
    assert!(
        matches!(err, ExtractError::GrammarViolation { .. }),
        "Expected a grammar violation, got {:?}",
        err
    );
}

#[test]
fn test_case_selector_through_any_declaration() {
    let decls = SwiftParser::new()
        .extract(
            "enum E { case a, b }",
            &Selector::Kind(DeclarationKind::Case),
        )
        .expect("extract");

    assert_eq!(decls.len(), 2);
    assert!(decls.iter().all(|d| d.kind() == DeclarationKind::Case));
}
