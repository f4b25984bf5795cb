//! Parameters shared by functions, initializers, subscripts and enum cases

use crate::parser::syntax::{is_trivia, node_text, span_text};
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// A function parameter or an enum case associated value.
///
/// `func greet(to person: String = "you")` has first name `to`, second
/// name `person`, type `String` and default argument `"you"`. An associated
/// value such as the `Int` in `case b(Int)` has only a type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    second_name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    type_name: Option<String>,
    #[serde(default)]
    variadic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_argument: Option<String>,
}

impl Parameter {
    pub fn new(
        first_name: Option<String>,
        second_name: Option<String>,
        type_name: Option<String>,
        variadic: bool,
        default_argument: Option<String>,
    ) -> Self {
        Self {
            first_name,
            second_name,
            type_name,
            variadic,
            default_argument,
        }
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn second_name(&self) -> Option<&str> {
        self.second_name.as_deref()
    }

    /// Verbatim type annotation, including `inout` and similar
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    pub fn default_argument(&self) -> Option<&str> {
        self.default_argument.as_deref()
    }

    /// The name used inside the body: the second name when present
    pub fn internal_name(&self) -> Option<&str> {
        self.second_name().or_else(|| self.first_name())
    }

    /// Map a `parameter` node: `external_name? name : modifiers? type ...?`
    fn from_function_parameter(node: &Node, default: Option<&Node>, source: &str) -> Self {
        let mut names = Vec::new();
        let mut type_nodes = Vec::new();
        let mut seen_colon = false;
        let mut variadic = false;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if is_trivia(&child) {
                continue;
            }
            match child.kind() {
                ":" if !child.is_named() => seen_colon = true,
                "..." if !child.is_named() => variadic = true,
                "three_dot_operator" => variadic = true,
                _ if child.is_named() && !seen_colon => {
                    if let Some(text) = node_text(&child, source) {
                        names.push(text);
                    }
                }
                _ if child.is_named() => type_nodes.push(child),
                _ => {}
            }
        }

        let external = node
            .child_by_field_name("external_name")
            .and_then(|n| node_text(&n, source));
        let internal = node
            .child_by_field_name("name")
            .and_then(|n| node_text(&n, source));
        let (first_name, second_name) = match (external, internal) {
            (Some(ext), Some(name)) => (Some(ext), Some(name)),
            (None, Some(name)) => (Some(name), None),
            _ => {
                let mut names = names.into_iter();
                (names.next(), names.next())
            }
        };

        let type_name = match (type_nodes.first(), type_nodes.last()) {
            (Some(first), Some(last)) => span_text(first, last, source),
            _ => None,
        };

        let default_argument = node
            .child_by_field_name("default_value")
            .or(default.copied())
            .and_then(|d| node_text(&d, source));

        Self::new(first_name, second_name, type_name, variadic, default_argument)
    }

    /// Map one comma-separated entry of an `enum_type_parameters` list:
    /// `(_ label: Type = default)`, where everything but the type is optional
    fn from_associated_value(items: &[Node], source: &str) -> Self {
        let colon = items
            .iter()
            .position(|n| !n.is_named() && n.kind() == ":");
        let (labels, rest) = match colon {
            Some(at) => (&items[..at], &items[at + 1..]),
            None => (&items[..0], items),
        };

        let mut names = labels.iter().filter_map(|n| match n.kind() {
            "wildcard_pattern" | "_" => Some("_".to_string()),
            _ if n.is_named() => node_text(n, source),
            _ => None,
        });
        let first_name = names.next();
        let second_name = names.next();

        let mut values = rest.iter().filter(|n| n.is_named());
        let type_name = values.next().and_then(|n| node_text(n, source));
        let default_argument = values.next().and_then(|n| node_text(n, source));

        Self::new(first_name, second_name, type_name, false, default_argument)
    }
}

/// Parameters of a function-like node (`function_declaration`,
/// `init_declaration`, `subscript_declaration`, ...), in order.
///
/// Default values are attached to the declaration under the
/// `default_value` field, directly after the parameter they belong to.
pub(crate) fn function_parameters(node: &Node, source: &str) -> Vec<Parameter> {
    let mut entries: Vec<(Node, Option<Node>)> = Vec::new();

    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            if child.kind() == "parameter" {
                entries.push((child, None));
            } else if cursor.field_name() == Some("default_value") {
                if let Some(entry) = entries.last_mut() {
                    entry.1 = Some(child);
                }
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }

    entries
        .iter()
        .map(|(param, default)| Parameter::from_function_parameter(param, default.as_ref(), source))
        .collect()
}

/// Associated values of an `enum_type_parameters` node, in order
pub(crate) fn associated_values(node: &Node, source: &str) -> Vec<Parameter> {
    let mut groups: Vec<Vec<Node>> = vec![Vec::new()];

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if is_trivia(&child) {
            continue;
        }
        match child.kind() {
            "(" | ")" if !child.is_named() => {}
            "," if !child.is_named() => groups.push(Vec::new()),
            _ => {
                if let Some(group) = groups.last_mut() {
                    group.push(child);
                }
            }
        }
    }

    groups
        .iter()
        .filter(|g| g.iter().any(|n| n.is_named()))
        .map(|g| Parameter::from_associated_value(g, source))
        .collect()
}
