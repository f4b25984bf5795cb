//! `let`/`var` bindings and `typealias` declarations

use super::decorator::{Attribute, Decorators, Modifier};
use super::generics::{generic_parameters, GenericParameter};
use super::{impl_declaration, required_name, DeclarationKind, FromSyntax};
use crate::parser::syntax::{
    field_text, find_child_by_kind, first_token_of, is_trivia, named_after_token, node_text,
    parent_kind,
};
use crate::parser::ExtractError;
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

const BINDING_PARENTS: [&str; 2] = ["property_declaration", "protocol_property_declaration"];

/// One binding of a `let` or `var` declaration.
///
/// `let a = 1, b: Int = 2` declares two variables sharing the same
/// attributes, modifiers and keyword. A tuple pattern such as
/// `let (a, b) = (1, 2)` stays a single record named by the pattern text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    type_annotation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    initialized_value: Option<String>,
}

impl_declaration!(Variable);

impl Variable {
    pub fn type_annotation(&self) -> Option<&str> {
        self.type_annotation.as_deref()
    }

    pub fn initialized_value(&self) -> Option<&str> {
        self.initialized_value.as_deref()
    }

    /// Map every binding of a property declaration
    pub(crate) fn from_declaration(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        binding_patterns(node)
            .iter()
            .map(|pattern| Self::from_binding(pattern, source))
            .collect()
    }

    /// Map a single binding pattern. Patterns are only bound by a property
    /// declaration; any other parent is a malformed tree.
    pub fn from_binding(pattern: &Node, source: &str) -> Result<Self, ExtractError> {
        let declaration = match pattern.parent() {
            Some(parent) if BINDING_PARENTS.contains(&parent.kind()) => parent,
            _ => {
                return Err(ExtractError::violation(
                    "variable binding",
                    "a `property_declaration` parent",
                    parent_kind(pattern),
                ))
            }
        };

        let decorators = Decorators::from_node(&declaration, source);
        let keyword = binding_keyword(&declaration, pattern, source)
            .unwrap_or_else(|| "var".to_string());
        let name = required_name(&declaration, pattern_name(pattern, source), "variable")?;

        let mut type_annotation = None;
        let mut initialized_value = None;
        let mut sibling = pattern.next_sibling();
        while let Some(node) = sibling {
            if !node.is_named() && node.kind() == "," {
                break;
            }
            if node.is_named() && !is_trivia(&node) {
                match node.kind() {
                    "type_annotation" => {
                        type_annotation = field_text(&node, "type", source).or_else(|| {
                            named_after_token(&node, ":").and_then(|t| node_text(&t, source))
                        });
                    }
                    "type_constraints" | "computed_property" | "willset_didset_block"
                    | "protocol_property_requirements" => {}
                    _ => initialized_value = node_text(&node, source),
                }
            }
            sibling = node.next_sibling();
        }

        Ok(Self {
            attributes: decorators.attributes,
            modifiers: decorators.modifiers,
            keyword,
            name,
            type_annotation,
            initialized_value,
        })
    }
}

impl FromSyntax for Variable {
    const KIND: DeclarationKind = DeclarationKind::Variable;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        Self::from_declaration(node, source)
    }
}

/// The `name` patterns of a property declaration, one per binding
fn binding_patterns<'a>(node: &Node<'a>) -> Vec<Node<'a>> {
    let mut patterns = Vec::new();
    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            if cursor.field_name() == Some("name") {
                patterns.push(cursor.node());
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    if patterns.is_empty() {
        let mut cursor = node.walk();
        patterns.extend(node.children(&mut cursor).filter(|c| c.kind() == "pattern"));
    }
    patterns
}

/// `let` or `var`, found beside the pattern or inside it
fn binding_keyword(declaration: &Node, pattern: &Node, source: &str) -> Option<String> {
    [declaration, pattern].into_iter().find_map(|n| {
        find_child_by_kind(n, "value_binding_pattern")
            .and_then(|vbp| {
                field_text(&vbp, "mutability", source)
                    .or_else(|| first_token_of(&vbp, &["let", "var"]))
            })
            .or_else(|| first_token_of(n, &["let", "var"]))
    })
}

/// The bound identifier of a pattern; tuple and other patterns keep their text
fn pattern_name(pattern: &Node, source: &str) -> Option<String> {
    if pattern.kind() == "simple_identifier" {
        return node_text(pattern, source);
    }
    field_text(pattern, "bound_identifier", source)
        .or_else(|| {
            find_child_by_kind(pattern, "simple_identifier").and_then(|id| node_text(&id, source))
        })
        .or_else(|| node_text(pattern, source))
}

/// A `typealias` declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Typealias {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
    name: String,
    generic_parameters: Vec<GenericParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    initialized_type: Option<String>,
}

impl_declaration!(Typealias);

impl Typealias {
    pub fn generic_parameters(&self) -> &[GenericParameter] {
        &self.generic_parameters
    }

    /// The aliased type after `=`
    pub fn initialized_type(&self) -> Option<&str> {
        self.initialized_type.as_deref()
    }
}

impl FromSyntax for Typealias {
    const KIND: DeclarationKind = DeclarationKind::Typealias;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        let decorators = Decorators::from_node(node, source);
        let keyword =
            first_token_of(node, &["typealias"]).unwrap_or_else(|| "typealias".to_string());
        let name = required_name(node, field_text(node, "name", source), "typealias")?;

        Ok(vec![Self {
            attributes: decorators.attributes,
            modifiers: decorators.modifiers,
            keyword,
            name,
            generic_parameters: generic_parameters(node, source),
            initialized_type: field_text(node, "value", source),
        }])
    }
}
