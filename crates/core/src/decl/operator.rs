//! `operator` and `precedencegroup` declarations

use super::decorator::{Attribute, Decorators, Modifier};
use super::{impl_declaration, required_name, DeclarationKind, FromSyntax};
use crate::parser::syntax::{
    child_after_token, children_by_kind, find_child_by_kind, first_token_of, named_after_token,
    named_children, node_text,
};
use crate::parser::ExtractError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tree_sitter::Node;

/// Where an operator sits relative to its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fixity {
    Prefix,
    Infix,
    Postfix,
}

impl Fixity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fixity::Prefix => "prefix",
            Fixity::Infix => "infix",
            Fixity::Postfix => "postfix",
        }
    }

    fn parse(text: &str) -> Option<Self> {
        match text {
            "prefix" => Some(Fixity::Prefix),
            "infix" => Some(Fixity::Infix),
            "postfix" => Some(Fixity::Postfix),
            _ => None,
        }
    }
}

impl fmt::Display for Fixity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operator declaration such as `infix operator <>: AdditionPrecedence`.
///
/// The fixity also appears in `modifiers`, where Swift spells it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operator {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
    name: String,
    fixity: Fixity,
    precedence_group: Option<String>,
}

impl_declaration!(Operator);

impl Operator {
    pub fn fixity(&self) -> Fixity {
        self.fixity
    }

    pub fn precedence_group(&self) -> Option<&str> {
        self.precedence_group.as_deref()
    }
}

impl FromSyntax for Operator {
    const KIND: DeclarationKind = DeclarationKind::Operator;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        let mut decorators = Decorators::from_node(node, source);
        decorators.push_token(first_token_of(node, &["prefix", "infix", "postfix"]));

        let fixity = decorators
            .modifiers
            .iter()
            .find_map(|m| Fixity::parse(m.name()))
            .ok_or_else(|| ExtractError::violation(node.kind(), "a fixity", "none"))?;

        let keyword = first_token_of(node, &["operator"]).unwrap_or_else(|| "operator".to_string());
        let name = required_name(
            node,
            child_after_token(node, "operator").and_then(|n| node_text(&n, source)),
            "operator",
        )?;
        let precedence_group = named_after_token(node, ":").and_then(|n| node_text(&n, source));

        Ok(vec![Self {
            attributes: decorators.attributes,
            modifiers: decorators.modifiers,
            keyword,
            name,
            fixity,
            precedence_group,
        }])
    }
}

/// Associativity of a precedence group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Associativity {
    Left,
    Right,
    None,
}

impl Associativity {
    fn parse(text: &str) -> Option<Self> {
        match text {
            "left" => Some(Associativity::Left),
            "right" => Some(Associativity::Right),
            "none" => Some(Associativity::None),
            _ => None,
        }
    }
}

/// A `precedencegroup` declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrecedenceGroup {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
    name: String,
    higher_than: Vec<String>,
    lower_than: Vec<String>,
    associativity: Option<Associativity>,
    assignment: Option<bool>,
}

impl_declaration!(PrecedenceGroup);

impl PrecedenceGroup {
    pub fn higher_than(&self) -> &[String] {
        &self.higher_than
    }

    pub fn lower_than(&self) -> &[String] {
        &self.lower_than
    }

    pub fn associativity(&self) -> Option<Associativity> {
        self.associativity
    }

    pub fn assignment(&self) -> Option<bool> {
        self.assignment
    }
}

impl FromSyntax for PrecedenceGroup {
    const KIND: DeclarationKind = DeclarationKind::PrecedenceGroup;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        let decorators = Decorators::from_node(node, source);
        let keyword = first_token_of(node, &["precedencegroup"])
            .unwrap_or_else(|| "precedencegroup".to_string());
        let name = required_name(
            node,
            find_child_by_kind(node, "simple_identifier").and_then(|n| node_text(&n, source)),
            "precedence group",
        )?;

        let mut higher_than = Vec::new();
        let mut lower_than = Vec::new();
        let mut associativity = None;
        let mut assignment = None;

        let entries = find_child_by_kind(node, "precedence_group_attributes")
            .map(|attrs| children_by_kind(&attrs, "precedence_group_attribute"))
            .unwrap_or_default();
        for entry in &entries {
            let parts: Vec<String> = named_children(entry)
                .iter()
                .filter_map(|n| node_text(n, source))
                .collect();
            let Some((key, values)) = parts.split_first() else {
                continue;
            };
            match key.as_str() {
                "higherThan" => higher_than.extend(values.iter().cloned()),
                "lowerThan" => lower_than.extend(values.iter().cloned()),
                "associativity" => {
                    associativity = values.first().and_then(|v| Associativity::parse(v))
                }
                "assignment" => assignment = values.first().map(|v| v == "true"),
                _ => {}
            }
        }

        Ok(vec![Self {
            attributes: decorators.attributes,
            modifiers: decorators.modifiers,
            keyword,
            name,
            higher_than,
            lower_than,
            associativity,
            assignment,
        }])
    }
}
