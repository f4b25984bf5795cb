//! Integration tests for operator and precedence group declarations

use swiftdecl_core::{
    Associativity, Declaration, Fixity, Function, Operator, PrecedenceGroup, SwiftParser,
};

fn operators(source: &str) -> Vec<Operator> {
    SwiftParser::new()
        .extract_kind::<Operator>(source)
        .expect("Failed to extract operators")
}

#[test]
fn test_prefix_operator() {
    let ops = operators("prefix operator +++");

    assert_eq!(ops.len(), 1);
    let op = &ops[0];
    assert_eq!(op.fixity(), Fixity::Prefix);
    assert_eq!(op.keyword(), "operator");
    assert_eq!(op.name(), "+++");
    assert_eq!(op.modifiers()[0].name(), "prefix");
    assert_eq!(op.precedence_group(), None);
    assert_eq!(op.to_string(), "prefix operator +++");
}

#[test]
fn test_infix_operator_with_precedence_group() {
    let ops = operators("infix operator <=> : ComparisonPrecedence");

    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].fixity(), Fixity::Infix);
    assert_eq!(ops[0].name(), "<=>");
    assert_eq!(ops[0].precedence_group(), Some("ComparisonPrecedence"));
    assert_eq!(
        ops[0].to_string(),
        "infix operator <=>: ComparisonPrecedence"
    );
}

#[test]
fn test_postfix_operator() {
    let ops = operators("postfix operator ***");

    assert_eq!(ops[0].fixity(), Fixity::Postfix);
    assert_eq!(ops[0].fixity().to_string(), "postfix");
}

#[test]
fn test_precedence_group() {
    let source = r#"
precedencegroup ExponentiationPrecedence {
    higherThan: MultiplicationPrecedence
    associativity: right
}
"#;
    let groups = SwiftParser::new()
        .extract_kind::<PrecedenceGroup>(source)
        .expect("Failed to extract precedence groups");

    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert_eq!(group.keyword(), "precedencegroup");
    assert_eq!(group.name(), "ExponentiationPrecedence");
    assert_eq!(group.higher_than(), ["MultiplicationPrecedence"]);
    assert!(group.lower_than().is_empty());
    assert_eq!(group.associativity(), Some(Associativity::Right));
    assert_eq!(group.assignment(), None);
}

#[test]
fn test_operator_implementation() {
    let source = r#"
struct Vector {
    static func + (lhs: Vector, rhs: Vector) -> Vector {
        return lhs
    }
}
"#;
    let functions = SwiftParser::new()
        .extract_kind::<Function>(source)
        .expect("Failed to extract functions");

    assert_eq!(functions.len(), 1);
    assert_eq!(functions[0].name(), "+");
    assert!(functions[0].is_operator());
}
