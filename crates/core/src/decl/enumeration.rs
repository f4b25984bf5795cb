//! `enum` declarations and their `case` elements

use super::decorator::{Attribute, Decorators, Modifier};
use super::generics::{
    generic_parameters, generic_requirements, GenericParameter, GenericRequirement,
};
use super::parameter::{associated_values, Parameter};
use super::{
    declaration_keyword, impl_declaration, inheritance, required_name, DeclarationKind,
    FromSyntax,
};
use crate::parser::syntax::{
    children_by_kind, field_text, find_child_by_kind, first_token_of, is_trivia, node_text,
    parent_kind,
};
use crate::parser::ExtractError;
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// An `enum` declaration.
///
/// For raw-representable enumerations the first inheritance entry is the
/// raw-value type by convention; nothing here checks that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Enumeration {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
    name: String,
    inheritance: Vec<String>,
    generic_parameters: Vec<GenericParameter>,
    generic_requirements: Vec<GenericRequirement>,
    cases: Vec<Case>,
}

/// One element of a `case` declaration inside an enumeration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Case {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
    name: String,
    /// `None` when the case has no parenthesized payload at all
    associated_value: Option<Vec<Parameter>>,
    raw_value: Option<String>,
}

impl_declaration!(Enumeration, Case);

impl Enumeration {
    pub fn inheritance(&self) -> &[String] {
        &self.inheritance
    }

    pub fn generic_parameters(&self) -> &[GenericParameter] {
        &self.generic_parameters
    }

    pub fn generic_requirements(&self) -> &[GenericRequirement] {
        &self.generic_requirements
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// Map an enum-flavoured `class_declaration`
    pub(crate) fn from_node(node: &Node, source: &str) -> Result<Self, ExtractError> {
        let mut decorators = Decorators::from_node(node, source);
        decorators.push_token(first_token_of(node, &["indirect"]));

        let keyword = declaration_keyword(node, source).unwrap_or_else(|| "enum".to_string());
        let name = required_name(node, field_text(node, "name", source), "enum")?;

        let body = node
            .child_by_field_name("body")
            .or_else(|| find_child_by_kind(node, "enum_class_body"))
            .or_else(|| find_child_by_kind(node, "class_body"));

        let mut cases = Vec::new();
        if let Some(body) = body {
            for entry in children_by_kind(&body, "enum_entry") {
                cases.extend(Case::from_entry(&entry, source)?);
            }
        }

        Ok(Self {
            attributes: decorators.attributes,
            modifiers: decorators.modifiers,
            keyword,
            name,
            inheritance: inheritance(node, source),
            generic_parameters: generic_parameters(node, source),
            generic_requirements: generic_requirements(node, source),
            cases,
        })
    }
}

impl FromSyntax for Enumeration {
    const KIND: DeclarationKind = DeclarationKind::Enumeration;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        Ok(vec![Self::from_node(node, source)?])
    }
}

impl Case {
    pub fn associated_value(&self) -> Option<&[Parameter]> {
        self.associated_value.as_deref()
    }

    pub fn raw_value(&self) -> Option<&str> {
        self.raw_value.as_deref()
    }

    /// Map every element of an `enum_entry` (`case a, b(Int), c = 3`).
    /// Elements are the entry's `name` identifiers; each shares the entry's
    /// attributes, modifiers and keyword.
    pub(crate) fn from_entry(entry: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        case_elements(entry)
            .iter()
            .map(|element| Self::from_element(element, source))
            .collect()
    }

    /// Map a single case element. The element only exists inside an
    /// `enum_entry`; any other parent is a malformed tree.
    pub fn from_element(element: &Node, source: &str) -> Result<Self, ExtractError> {
        let entry = match element.parent() {
            Some(parent) if parent.kind() == "enum_entry" => parent,
            _ => {
                return Err(ExtractError::violation(
                    "enum case element",
                    "an `enum_entry` parent",
                    parent_kind(element),
                ))
            }
        };

        let mut decorators = Decorators::from_node(&entry, source);
        decorators.push_token(first_token_of(&entry, &["indirect"]));
        let keyword = first_token_of(&entry, &["case"]).unwrap_or_else(|| "case".to_string());
        let name = required_name(&entry, node_text(element, source), "case")?;

        let mut associated_value = None;
        let mut raw_value = None;
        let mut sibling = element.next_sibling();
        while let Some(node) = sibling {
            if !node.is_named() && matches!(node.kind(), "," | ";") {
                break;
            }
            if node.is_named() && !is_trivia(&node) {
                if node.kind() == "enum_type_parameters" {
                    associated_value = Some(associated_values(&node, source));
                } else {
                    raw_value = node_text(&node, source);
                }
            }
            sibling = node.next_sibling();
        }

        Ok(Self {
            attributes: decorators.attributes,
            modifiers: decorators.modifiers,
            keyword,
            name,
            associated_value,
            raw_value,
        })
    }
}

impl FromSyntax for Case {
    const KIND: DeclarationKind = DeclarationKind::Case;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        Self::from_entry(node, source)
    }
}

/// The name identifiers of an `enum_entry`, one per element
fn case_elements<'a>(entry: &Node<'a>) -> Vec<Node<'a>> {
    let mut elements = Vec::new();
    let mut cursor = entry.walk();
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            if cursor.field_name() == Some("name") {
                elements.push(child);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }

    if elements.is_empty() {
        // Without field names, an element name is the identifier that
        // directly follows `case` or a separating comma.
        let mut expect_name = false;
        let mut cursor = entry.walk();
        for child in entry.children(&mut cursor) {
            if is_trivia(&child) {
                continue;
            }
            if !child.is_named() && matches!(child.kind(), "case" | ",") {
                expect_name = true;
                continue;
            }
            if expect_name && child.kind() == "simple_identifier" {
                elements.push(child);
            }
            expect_name = false;
        }
    }
    elements
}
