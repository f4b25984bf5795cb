//! `class`, `actor`, `struct` and `extension` declarations

use super::decorator::{Attribute, Decorators, Modifier};
use super::generics::{
    generic_parameters, generic_requirements, GenericParameter, GenericRequirement,
};
use super::{
    declaration_keyword, impl_declaration, inheritance, required_name, DeclarationKind,
    FromSyntax,
};
use crate::parser::syntax::field_text;
use crate::parser::ExtractError;
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// A `class` or `actor` declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Class {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
    name: String,
    inheritance: Vec<String>,
    generic_parameters: Vec<GenericParameter>,
    generic_requirements: Vec<GenericRequirement>,
}

/// A `struct` declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Structure {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
    name: String,
    inheritance: Vec<String>,
    generic_parameters: Vec<GenericParameter>,
    generic_requirements: Vec<GenericRequirement>,
}

/// An `extension` of an existing type; `name` is the extended type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extension {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
    name: String,
    inheritance: Vec<String>,
    generic_requirements: Vec<GenericRequirement>,
}

impl_declaration!(Class, Structure, Extension);

/// Fields common to the nominal types declared through `class_declaration`
struct NominalParts {
    decorators: Decorators,
    keyword: String,
    name: String,
    inheritance: Vec<String>,
    generic_parameters: Vec<GenericParameter>,
    generic_requirements: Vec<GenericRequirement>,
}

impl NominalParts {
    fn from_node(node: &Node, source: &str, default_keyword: &str) -> Result<Self, ExtractError> {
        let keyword =
            declaration_keyword(node, source).unwrap_or_else(|| default_keyword.to_string());
        let name = required_name(node, field_text(node, "name", source), &keyword)?;
        Ok(Self {
            decorators: Decorators::from_node(node, source),
            keyword,
            name,
            inheritance: inheritance(node, source),
            generic_parameters: generic_parameters(node, source),
            generic_requirements: generic_requirements(node, source),
        })
    }
}

macro_rules! nominal_accessors {
    ($($ty:ty),+) => {
        $(
            impl $ty {
                /// Inherited types in source order
                pub fn inheritance(&self) -> &[String] {
                    &self.inheritance
                }

                pub fn generic_requirements(&self) -> &[GenericRequirement] {
                    &self.generic_requirements
                }
            }
        )+
    };
}

nominal_accessors!(Class, Structure, Extension);

impl Class {
    pub fn generic_parameters(&self) -> &[GenericParameter] {
        &self.generic_parameters
    }
}

impl Structure {
    pub fn generic_parameters(&self) -> &[GenericParameter] {
        &self.generic_parameters
    }
}

impl FromSyntax for Class {
    const KIND: DeclarationKind = DeclarationKind::Class;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        let parts = NominalParts::from_node(node, source, "class")?;
        Ok(vec![Self {
            attributes: parts.decorators.attributes,
            modifiers: parts.decorators.modifiers,
            keyword: parts.keyword,
            name: parts.name,
            inheritance: parts.inheritance,
            generic_parameters: parts.generic_parameters,
            generic_requirements: parts.generic_requirements,
        }])
    }
}

impl FromSyntax for Structure {
    const KIND: DeclarationKind = DeclarationKind::Structure;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        let parts = NominalParts::from_node(node, source, "struct")?;
        Ok(vec![Self {
            attributes: parts.decorators.attributes,
            modifiers: parts.decorators.modifiers,
            keyword: parts.keyword,
            name: parts.name,
            inheritance: parts.inheritance,
            generic_parameters: parts.generic_parameters,
            generic_requirements: parts.generic_requirements,
        }])
    }
}

impl FromSyntax for Extension {
    const KIND: DeclarationKind = DeclarationKind::Extension;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        let parts = NominalParts::from_node(node, source, "extension")?;
        Ok(vec![Self {
            attributes: parts.decorators.attributes,
            modifiers: parts.decorators.modifiers,
            keyword: parts.keyword,
            name: parts.name,
            inheritance: parts.inheritance,
            generic_requirements: parts.generic_requirements,
        }])
    }
}
