//! `protocol` declarations and their `associatedtype` requirements

use super::decorator::{Attribute, Decorators, Modifier};
use super::generics::{
    generic_parameters, generic_requirements, GenericParameter, GenericRequirement,
};
use super::{impl_declaration, inheritance, required_name, DeclarationKind, FromSyntax};
use crate::parser::syntax::{field_text, first_token_of, named_after_token, node_text};
use crate::parser::ExtractError;
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// A `protocol` declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Protocol {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
    name: String,
    inheritance: Vec<String>,
    /// Primary associated types (`protocol Store<Element>`)
    generic_parameters: Vec<GenericParameter>,
    generic_requirements: Vec<GenericRequirement>,
}

/// An `associatedtype` requirement inside a protocol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssociatedType {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
    name: String,
    inheritance: Vec<String>,
    generic_requirements: Vec<GenericRequirement>,
    default_type: Option<String>,
}

impl_declaration!(Protocol, AssociatedType);

impl Protocol {
    pub fn inheritance(&self) -> &[String] {
        &self.inheritance
    }

    pub fn generic_parameters(&self) -> &[GenericParameter] {
        &self.generic_parameters
    }

    pub fn generic_requirements(&self) -> &[GenericRequirement] {
        &self.generic_requirements
    }
}

impl FromSyntax for Protocol {
    const KIND: DeclarationKind = DeclarationKind::Protocol;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        let decorators = Decorators::from_node(node, source);
        let keyword = field_text(node, "declaration_kind", source)
            .unwrap_or_else(|| "protocol".to_string());
        let name = required_name(node, field_text(node, "name", source), "protocol")?;

        Ok(vec![Self {
            attributes: decorators.attributes,
            modifiers: decorators.modifiers,
            keyword,
            name,
            inheritance: inheritance(node, source),
            generic_parameters: generic_parameters(node, source),
            generic_requirements: generic_requirements(node, source),
        }])
    }
}

impl AssociatedType {
    /// The constraint after `:`, if any
    pub fn inheritance(&self) -> &[String] {
        &self.inheritance
    }

    pub fn generic_requirements(&self) -> &[GenericRequirement] {
        &self.generic_requirements
    }

    /// The default after `=`, if any
    pub fn default_type(&self) -> Option<&str> {
        self.default_type.as_deref()
    }
}

impl FromSyntax for AssociatedType {
    const KIND: DeclarationKind = DeclarationKind::AssociatedType;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        let decorators = Decorators::from_node(node, source);
        let keyword = first_token_of(node, &["associatedtype"])
            .unwrap_or_else(|| "associatedtype".to_string());
        let name = required_name(node, field_text(node, "name", source), "associated type")?;

        let inheritance = field_text(node, "must_inherit", source)
            .or_else(|| named_after_token(node, ":").and_then(|n| node_text(&n, source)))
            .into_iter()
            .collect();
        let default_type = field_text(node, "default_value", source)
            .or_else(|| named_after_token(node, "=").and_then(|n| node_text(&n, source)));

        Ok(vec![Self {
            attributes: decorators.attributes,
            modifiers: decorators.modifiers,
            keyword,
            name,
            inheritance,
            generic_requirements: generic_requirements(node, source),
            default_type,
        }])
    }
}
