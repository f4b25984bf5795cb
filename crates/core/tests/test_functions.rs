//! Integration tests for functions, initializers, deinitializers and subscripts

use swiftdecl_core::{
    Declaration, Deinitializer, Function, GenericRequirement, Initializer, Subscript,
    SwiftParser,
};

fn functions(source: &str) -> Vec<Function> {
    SwiftParser::new()
        .extract_kind::<Function>(source)
        .expect("Failed to extract functions")
}

#[test]
fn test_function_parameters() {
    let source = r#"
func greet(person: String, from hometown: String = "Cupertino", _ times: Int) -> String {
    return person
}
"#;
    let funcs = functions(source);

    assert_eq!(funcs.len(), 1);
    let f = &funcs[0];
    assert_eq!(f.keyword(), "func");
    assert_eq!(f.name(), "greet");

    let input = f.signature().input();
    assert_eq!(input.len(), 3);

    assert_eq!(input[0].first_name(), Some("person"));
    assert_eq!(input[0].second_name(), None);
    assert_eq!(input[0].type_name(), Some("String"));

    assert_eq!(input[1].first_name(), Some("from"));
    assert_eq!(input[1].second_name(), Some("hometown"));
    assert_eq!(input[1].default_argument(), Some("\"Cupertino\""));

    assert_eq!(input[2].first_name(), Some("_"));
    assert_eq!(input[2].internal_name(), Some("times"));

    assert_eq!(f.signature().output(), Some("String"));
    assert_eq!(
        f.to_string(),
        "func greet(person: String, from hometown: String = \"Cupertino\", _ times: Int) -> String"
    );
}

#[test]
fn test_variadic_parameter() {
    let funcs = functions("func sum(_ values: Int...) -> Int { return 0 }");

    let input = funcs[0].signature().input();
    assert_eq!(input.len(), 1);
    assert!(input[0].is_variadic());
    assert_eq!(input[0].type_name(), Some("Int"));
    assert_eq!(funcs[0].to_string(), "func sum(_ values: Int...) -> Int");
}

#[test]
fn test_effects() {
    let source = r#"
func load() async throws -> Data {
    return Data()
}

func apply(_ f: () throws -> Void) rethrows {}
"#;
    let funcs = functions(source);

    assert_eq!(funcs.len(), 2);
    assert!(funcs[0].signature().is_async());
    assert_eq!(funcs[0].signature().throws_keyword(), Some("throws"));
    assert_eq!(funcs[0].to_string(), "func load() async throws -> Data");

    assert!(!funcs[1].signature().is_async());
    assert_eq!(funcs[1].signature().throws_keyword(), Some("rethrows"));
    assert_eq!(funcs[1].signature().output(), None);
}

#[test]
fn test_generic_function() {
    let source = r#"
func find<T: Equatable, C>(_ value: T, in items: C) -> Int? where C: Collection, C.Element == T {
    return nil
}
"#;
    let funcs = functions(source);

    let f = &funcs[0];
    let names: Vec<&str> = f.generic_parameters().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["T", "C"]);

    let reqs = f.generic_requirements();
    assert_eq!(reqs.len(), 2);
    assert_eq!(reqs[0].left(), "C");
    assert_eq!(reqs[0].right(), "Collection");
    assert!(matches!(reqs[1], GenericRequirement::SameType { .. }));

    assert_eq!(
        f.to_string(),
        "func find<T: Equatable, C>(_ value: T, in items: C) -> Int? where C: Collection, C.Element == T"
    );
}

#[test]
fn test_modifiers_on_methods() {
    let source = r#"
class Cache {
    public static func shared() -> Cache { return Cache() }
    @discardableResult
    private func clear() -> Bool { return true }
}
"#;
    let funcs = functions(source);

    assert_eq!(funcs.len(), 2);
    let modifiers: Vec<&str> = funcs[0].modifiers().iter().map(|m| m.name()).collect();
    assert_eq!(modifiers, vec!["public", "static"]);

    assert_eq!(funcs[1].attributes().len(), 1);
    assert_eq!(funcs[1].attributes()[0].name(), "discardableResult");
    assert_eq!(
        funcs[1].to_string(),
        "@discardableResult private func clear() -> Bool"
    );
}

#[test]
fn test_protocol_requirements() {
    let source = r#"
protocol Store {
    func get(key: String) -> Int?
    func set(key: String, value: Int)
}
"#;
    let funcs = functions(source);

    let names: Vec<&str> = funcs.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["get", "set"]);
    assert_eq!(funcs[1].signature().input().len(), 2);
}

#[test]
fn test_initializers() {
    let source = r#"
struct Temperature {
    init(celsius: Double) {}
    init?(fahrenheit: Double) {}
}
"#;
    let inits = SwiftParser::new()
        .extract_kind::<Initializer>(source)
        .expect("Failed to extract initializers");

    assert_eq!(inits.len(), 2);
    assert_eq!(inits[0].keyword(), "init");
    assert_eq!(inits[0].name(), "init");
    assert!(!inits[0].is_failable());
    assert_eq!(inits[0].to_string(), "init(celsius: Double)");

    assert!(inits[1].is_failable());
    assert_eq!(inits[1].optional(), Some("?"));
    assert_eq!(inits[1].parameters()[0].first_name(), Some("fahrenheit"));
}

#[test]
fn test_deinitializer() {
    let deinits = SwiftParser::new()
        .extract_kind::<Deinitializer>("class Handle { deinit { close() } }")
        .expect("Failed to extract deinitializers");

    assert_eq!(deinits.len(), 1);
    assert_eq!(deinits[0].keyword(), "deinit");
    assert_eq!(deinits[0].to_string(), "deinit");
}

#[test]
fn test_subscript() {
    let source = r#"
struct Matrix {
    subscript(row: Int, column: Int) -> Double {
        get { return 0 }
    }
}
"#;
    let subscripts = SwiftParser::new()
        .extract_kind::<Subscript>(source)
        .expect("Failed to extract subscripts");

    assert_eq!(subscripts.len(), 1);
    let s = &subscripts[0];
    assert_eq!(s.keyword(), "subscript");
    assert_eq!(s.parameters().len(), 2);
    assert_eq!(s.return_type(), Some("Double"));
    assert_eq!(s.to_string(), "subscript(row: Int, column: Int) -> Double");
}
