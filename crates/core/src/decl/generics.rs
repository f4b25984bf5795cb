//! Generic parameter clauses (`<T: Equatable>`) and where-clauses

use crate::parser::syntax::{
    children_by_kind, find_child_by_kind, named_after_token, named_children, node_text,
};
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// A type placeholder declared in a generic parameter clause
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericParameter {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    constraint: Option<String>,
}

/// A where-clause relation between types
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "relation", rename_all = "snake_case")]
pub enum GenericRequirement {
    /// `T: Protocol`
    Conformance { type_name: String, protocol: String },
    /// `T.Element == U`
    SameType { left: String, right: String },
}

impl GenericParameter {
    pub fn new(name: impl Into<String>, constraint: Option<String>) -> Self {
        Self {
            name: name.into(),
            constraint,
        }
    }

    fn from_node(node: &Node, source: &str) -> Option<Self> {
        let name = node_name_of_parameter(node, source)?;
        let constraint = named_after_token(node, ":").and_then(|c| node_text(&c, source));
        Some(Self::new(name, constraint))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }
}

/// The placeholder name: the first named child before `:`. The grammar's
/// `name` field on a `type_parameter` holds the constraint, so it is skipped.
fn node_name_of_parameter(node: &Node, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    if !cursor.goto_first_child() {
        return None;
    }
    loop {
        let child = cursor.node();
        if !child.is_named() && child.kind() == ":" {
            return None;
        }
        if cursor.field_name().is_none()
            && matches!(
                child.kind(),
                "type_identifier" | "type_parameter_pack" | "simple_identifier"
            )
        {
            return node_text(&child, source);
        }
        if !cursor.goto_next_sibling() {
            return None;
        }
    }
}

impl GenericRequirement {
    /// Classify one where-clause entry by its relation. Both sides keep
    /// their verbatim text.
    fn from_node(node: &Node, source: &str) -> Option<Self> {
        let text = node_text(node, source)?;
        let same_type = match node.kind() {
            "inheritance_constraint" => false,
            "equality_constraint" => true,
            _ => text.contains("=="),
        };

        if same_type {
            let (left, right) = text.split_once("==").or_else(|| text.split_once('='))?;
            Some(GenericRequirement::SameType {
                left: strip_attributes(left),
                right: right.trim().to_string(),
            })
        } else {
            let (left, right) = text.split_once(':')?;
            Some(GenericRequirement::Conformance {
                type_name: strip_attributes(left),
                protocol: right.trim().to_string(),
            })
        }
    }

    /// The constrained (left-hand) type
    pub fn left(&self) -> &str {
        match self {
            GenericRequirement::Conformance { type_name, .. } => type_name,
            GenericRequirement::SameType { left, .. } => left,
        }
    }

    /// The protocol or type the left-hand side is related to
    pub fn right(&self) -> &str {
        match self {
            GenericRequirement::Conformance { protocol, .. } => protocol,
            GenericRequirement::SameType { right, .. } => right,
        }
    }
}

/// Drop leading `@attr` tokens a where-clause entry may carry
fn strip_attributes(text: &str) -> String {
    text.split_whitespace()
        .skip_while(|w| w.starts_with('@'))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parameters of the `type_parameters` child of `node`, in order
pub(crate) fn generic_parameters(node: &Node, source: &str) -> Vec<GenericParameter> {
    let Some(clause) = find_child_by_kind(node, "type_parameters") else {
        return Vec::new();
    };
    children_by_kind(&clause, "type_parameter")
        .iter()
        .filter_map(|p| GenericParameter::from_node(p, source))
        .collect()
}

/// Requirements from the where-clause inside the angle brackets followed by
/// the trailing where-clause, in source order
pub(crate) fn generic_requirements(node: &Node, source: &str) -> Vec<GenericRequirement> {
    let mut clauses = Vec::new();
    if let Some(params) = find_child_by_kind(node, "type_parameters") {
        clauses.extend(children_by_kind(&params, "type_constraints"));
    }
    clauses.extend(children_by_kind(node, "type_constraints"));

    clauses
        .iter()
        .flat_map(|clause| named_children(clause))
        .filter(|c| c.kind() != "where_keyword")
        .filter_map(|c| {
            let relation = if c.kind() == "type_constraint" {
                named_children(&c).into_iter().next()?
            } else {
                c
            };
            GenericRequirement::from_node(&relation, source)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_attributes() {
        assert_eq!(strip_attributes(" @unchecked T "), "T");
        assert_eq!(strip_attributes("T.Element"), "T.Element");
    }

    #[test]
    fn test_requirement_sides() {
        let req = GenericRequirement::SameType {
            left: "T.Element".to_string(),
            right: "Int".to_string(),
        };
        assert_eq!(req.left(), "T.Element");
        assert_eq!(req.right(), "Int");
        assert_eq!(req.to_string(), "T.Element == Int");

        let req = GenericRequirement::Conformance {
            type_name: "T".to_string(),
            protocol: "Hashable".to_string(),
        };
        assert_eq!(req.to_string(), "T: Hashable");
    }
}
