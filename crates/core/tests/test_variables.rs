//! Integration tests for properties, typealiases and imports

use swiftdecl_core::{Declaration, ExtractError, Import, SwiftParser, Typealias, Variable};

fn variables(source: &str) -> Vec<Variable> {
    SwiftParser::new()
        .extract_kind::<Variable>(source)
        .expect("Failed to extract variables")
}

#[test]
fn test_one_variable_per_binding() {
    let vars = variables("let a = 1, b: String = \"x\"");

    assert_eq!(vars.len(), 2);
    assert_eq!(vars[0].keyword(), "let");
    assert_eq!(vars[0].name(), "a");
    assert_eq!(vars[0].type_annotation(), None);
    assert_eq!(vars[0].initialized_value(), Some("1"));

    assert_eq!(vars[1].keyword(), "let");
    assert_eq!(vars[1].name(), "b");
    assert_eq!(vars[1].type_annotation(), Some("String"));
    assert_eq!(vars[1].to_string(), "let b: String = \"x\"");
}

#[test]
fn test_stored_and_computed_properties() {
    let source = r#"
struct Counter {
    private(set) var count: Int = 0
    var isEmpty: Bool {
        return count == 0
    }
}
"#;
    let vars = variables(source);

    assert_eq!(vars.len(), 2);

    let modifier = &vars[0].modifiers()[0];
    assert_eq!(modifier.name(), "private");
    assert_eq!(modifier.detail(), Some("set"));
    assert_eq!(vars[0].to_string(), "private(set) var count: Int = 0");

    assert_eq!(vars[1].name(), "isEmpty");
    assert_eq!(vars[1].type_annotation(), Some("Bool"));
    assert_eq!(vars[1].initialized_value(), None);
}

#[test]
fn test_tuple_pattern_is_one_record() {
    let vars = variables("let (a, b) = (1, 2)");

    assert_eq!(vars.len(), 1);
    assert_eq!(vars[0].name(), "(a, b)");
    assert_eq!(vars[0].initialized_value(), Some("(1, 2)"));
    assert_eq!(vars[0].to_string(), "let (a, b) = (1, 2)");
}

#[test]
fn test_binding_outside_property_is_rejected() {
    let source = "func f() {}";
    let tree = SwiftParser::new().parse(source).expect("parse");
    let function = tree.root_node().named_child(0).expect("function");

    let err = Variable::from_binding(&function, source).unwrap_err();
    assert!(matches!(err, ExtractError::GrammarViolation { .. }));
}

#[test]
fn test_typealias() {
    let aliases = SwiftParser::new()
        .extract_kind::<Typealias>("public typealias Handler = (Int) -> Void")
        .expect("Failed to extract typealiases");

    assert_eq!(aliases.len(), 1);
    assert_eq!(aliases[0].name(), "Handler");
    assert_eq!(aliases[0].initialized_type(), Some("(Int) -> Void"));
    assert_eq!(
        aliases[0].to_string(),
        "public typealias Handler = (Int) -> Void"
    );
}

#[test]
fn test_imports() {
    let source = r#"
import Foundation
@testable import MyModule
import struct Swift.Array
"#;
    let imports = SwiftParser::new()
        .extract_kind::<Import>(source)
        .expect("Failed to extract imports");

    assert_eq!(imports.len(), 3);

    assert_eq!(imports[0].name(), "Foundation");
    assert_eq!(imports[0].import_kind(), None);
    assert_eq!(imports[0].to_string(), "import Foundation");

    assert_eq!(imports[1].attributes()[0].name(), "testable");
    assert_eq!(imports[1].to_string(), "@testable import MyModule");

    assert_eq!(imports[2].import_kind(), Some("struct"));
    assert_eq!(imports[2].path_components(), ["Swift", "Array"]);
    assert_eq!(imports[2].name(), "Swift.Array");
    assert_eq!(imports[2].to_string(), "import struct Swift.Array");
}
