//! Attributes (`@available(iOS 13, *)`) and modifiers (`public`, `private(set)`)

use crate::parser::syntax::{find_child_by_kind, is_trivia, node_text, split_top_level};
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// A `@name(arguments)` attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    arguments: Vec<Argument>,
}

/// One argument of an attribute, optionally labelled (`renamed: "x"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    value: String,
}

/// A declaration modifier such as `public`, `static` or `private(set)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifier {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, arguments: Vec<Argument>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Map an `attribute` node. The name is the `user_type` after `@`; the
    /// arguments are the comma-separated pieces of the parenthesized tail.
    pub(crate) fn from_node(node: &Node, source: &str) -> Self {
        let text = node_text(node, source).unwrap_or_default();
        let body = text.trim_start_matches('@').trim_start();

        let (head, tail) = match body.find('(') {
            Some(open) => (&body[..open], Some(&body[open + 1..])),
            None => (body, None),
        };

        let name = find_child_by_kind(node, "user_type")
            .and_then(|ut| node_text(&ut, source))
            .unwrap_or_else(|| head.trim().to_string());

        let arguments = tail
            .map(|t| t.strip_suffix(')').unwrap_or(t))
            .map(|inner| split_top_level(inner).iter().map(|a| Argument::parse(a)).collect())
            .unwrap_or_default();

        Self { name, arguments }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }
}

impl Argument {
    pub fn new(name: Option<String>, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    /// Split `label: value`; anything else is an unlabelled value
    fn parse(text: &str) -> Self {
        if let Some((label, value)) = text.split_once(':') {
            let label = label.trim();
            let is_label = !label.is_empty()
                && !value.starts_with(':')
                && label
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_alphabetic() || c == '_')
                && label.chars().all(|c| c.is_alphanumeric() || c == '_');
            if is_label {
                return Self::new(Some(label.to_string()), value.trim());
            }
        }
        Self::new(None, text.trim())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Modifier {
    pub fn new(name: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            name: name.into(),
            detail,
        }
    }

    /// Map a modifier node (`visibility_modifier`, `member_modifier`, ...)
    pub(crate) fn from_node(node: &Node, source: &str) -> Self {
        Self::parse(&node_text(node, source).unwrap_or_default())
    }

    fn parse(text: &str) -> Self {
        match text.split_once('(') {
            Some((name, rest)) => {
                let detail = rest.trim_end().trim_end_matches(')').trim();
                Self::new(
                    name.trim(),
                    (!detail.is_empty()).then(|| detail.to_string()),
                )
            }
            None => Self::new(text.trim(), None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

/// Attributes and modifiers read from a declaration's `modifiers` child
pub(crate) struct Decorators {
    pub attributes: Vec<Attribute>,
    pub modifiers: Vec<Modifier>,
}

impl Decorators {
    pub(crate) fn from_node(node: &Node, source: &str) -> Self {
        let mut attributes = Vec::new();
        let mut modifiers = Vec::new();

        if let Some(list) = find_child_by_kind(node, "modifiers") {
            let mut cursor = list.walk();
            for child in list.named_children(&mut cursor) {
                if is_trivia(&child) {
                    continue;
                }
                match child.kind() {
                    "attribute" => attributes.push(Attribute::from_node(&child, source)),
                    _ => modifiers.push(Modifier::from_node(&child, source)),
                }
            }
        }

        Self {
            attributes,
            modifiers,
        }
    }

    /// Append a bare modifier token the grammar keeps outside `modifiers`
    /// (`indirect`, `class func`), unless it was already collected.
    pub(crate) fn push_token(&mut self, token: Option<String>) {
        if let Some(token) = token {
            if !self.modifiers.iter().any(|m| m.name == token) {
                self.modifiers.push(Modifier::new(token, None));
            }
        }
    }
}
