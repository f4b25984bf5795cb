//! Functions, initializers, deinitializers and subscripts

use super::decorator::{Attribute, Decorators, Modifier};
use super::generics::{
    generic_parameters, generic_requirements, GenericParameter, GenericRequirement,
};
use super::parameter::{function_parameters, Parameter};
use super::{Declaration, DeclarationKind, FromSyntax};
use crate::parser::syntax::{
    child_after_token, field_text, find_child_by_kind, first_token_of, has_token, node_text,
};
use crate::parser::ExtractError;
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// The parameter list and effects of a function-like declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    input: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    throws_keyword: Option<String>,
    #[serde(default)]
    is_async: bool,
}

impl Signature {
    pub fn input(&self) -> &[Parameter] {
        &self.input
    }

    /// Return type text after `->`
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// `throws`, `rethrows` or a typed `throws(E)`
    pub fn throws_keyword(&self) -> Option<&str> {
        self.throws_keyword.as_deref()
    }

    pub fn is_async(&self) -> bool {
        self.is_async
    }

    fn from_node(node: &Node, source: &str) -> Self {
        Self {
            input: function_parameters(node, source),
            output: return_type(node, source),
            throws_keyword: throws_keyword(node, source),
            is_async: has_token(node, "async"),
        }
    }
}

/// Return type from the `return_type` field, or the type after `->`
fn return_type(node: &Node, source: &str) -> Option<String> {
    if let Some(rt) = field_text(node, "return_type", source) {
        return Some(rt);
    }

    let mut found_arrow = false;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if !child.is_named() && child.kind() == "->" {
            found_arrow = true;
            continue;
        }
        if found_arrow && child.is_named() {
            if matches!(child.kind(), "function_body" | "type_constraints" | "computed_property") {
                break;
            }
            return node_text(&child, source);
        }
    }
    None
}

fn throws_keyword(node: &Node, source: &str) -> Option<String> {
    find_child_by_kind(node, "throws")
        .and_then(|t| node_text(&t, source))
        .or_else(|| first_token_of(node, &["throws", "rethrows"]))
}

/// A `func` declaration, with or without a body
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Function {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
    /// An identifier, or an operator for operator implementations
    name: String,
    generic_parameters: Vec<GenericParameter>,
    signature: Signature,
    generic_requirements: Vec<GenericRequirement>,
}

super::impl_declaration!(Function);

impl Function {
    pub fn generic_parameters(&self) -> &[GenericParameter] {
        &self.generic_parameters
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn generic_requirements(&self) -> &[GenericRequirement] {
        &self.generic_requirements
    }

    /// Whether a `prefix`, `infix` or `postfix` modifier marks this function
    /// as an operator implementation
    pub fn is_operator(&self) -> bool {
        self.modifiers
            .iter()
            .any(|m| matches!(m.name(), "prefix" | "infix" | "postfix"))
            || !self
                .name
                .starts_with(|c: char| c.is_alphabetic() || c == '_' || c == '`')
    }
}

impl FromSyntax for Function {
    const KIND: DeclarationKind = DeclarationKind::Function;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        let mut decorators = Decorators::from_node(node, source);
        decorators.push_token(first_token_of(node, &["class"]));

        let keyword = first_token_of(node, &["func"]).unwrap_or_else(|| "func".to_string());
        let name = field_text(node, "name", source)
            .or_else(|| child_after_token(node, "func").and_then(|n| node_text(&n, source)));
        let name = super::required_name(node, name, "function")?;

        Ok(vec![Self {
            attributes: decorators.attributes,
            modifiers: decorators.modifiers,
            keyword,
            name,
            generic_parameters: generic_parameters(node, source),
            signature: Signature::from_node(node, source),
            generic_requirements: generic_requirements(node, source),
        }])
    }
}

/// An `init` declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Initializer {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
    /// `?` or `!` for failable initializers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    optional: Option<String>,
    generic_parameters: Vec<GenericParameter>,
    parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    throws_keyword: Option<String>,
    #[serde(default)]
    is_async: bool,
    generic_requirements: Vec<GenericRequirement>,
}

impl Initializer {
    pub fn optional(&self) -> Option<&str> {
        self.optional.as_deref()
    }

    pub fn is_failable(&self) -> bool {
        self.optional.is_some()
    }

    pub fn generic_parameters(&self) -> &[GenericParameter] {
        &self.generic_parameters
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn throws_keyword(&self) -> Option<&str> {
        self.throws_keyword.as_deref()
    }

    pub fn is_async(&self) -> bool {
        self.is_async
    }

    pub fn generic_requirements(&self) -> &[GenericRequirement] {
        &self.generic_requirements
    }
}

impl Declaration for Initializer {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn name(&self) -> &str {
        &self.keyword
    }
}

impl FromSyntax for Initializer {
    const KIND: DeclarationKind = DeclarationKind::Initializer;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        let mut decorators = Decorators::from_node(node, source);
        decorators.push_token(first_token_of(node, &["class"]));
        let keyword = field_text(node, "name", source).unwrap_or_else(|| "init".to_string());
        let signature = Signature::from_node(node, source);

        Ok(vec![Self {
            attributes: decorators.attributes,
            modifiers: decorators.modifiers,
            keyword,
            optional: first_token_of(node, &["?", "!"]),
            generic_parameters: generic_parameters(node, source),
            parameters: signature.input,
            throws_keyword: signature.throws_keyword,
            is_async: signature.is_async,
            generic_requirements: generic_requirements(node, source),
        }])
    }
}

/// A `deinit` declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deinitializer {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
}

impl Declaration for Deinitializer {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn name(&self) -> &str {
        &self.keyword
    }
}

impl FromSyntax for Deinitializer {
    const KIND: DeclarationKind = DeclarationKind::Deinitializer;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        let decorators = Decorators::from_node(node, source);
        Ok(vec![Self {
            attributes: decorators.attributes,
            modifiers: decorators.modifiers,
            keyword: first_token_of(node, &["deinit"]).unwrap_or_else(|| "deinit".to_string()),
        }])
    }
}

/// A `subscript` declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subscript {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
    generic_parameters: Vec<GenericParameter>,
    parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    return_type: Option<String>,
    generic_requirements: Vec<GenericRequirement>,
}

impl Subscript {
    pub fn generic_parameters(&self) -> &[GenericParameter] {
        &self.generic_parameters
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    pub fn generic_requirements(&self) -> &[GenericRequirement] {
        &self.generic_requirements
    }
}

impl Declaration for Subscript {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn name(&self) -> &str {
        &self.keyword
    }
}

impl FromSyntax for Subscript {
    const KIND: DeclarationKind = DeclarationKind::Subscript;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        let decorators = Decorators::from_node(node, source);
        Ok(vec![Self {
            attributes: decorators.attributes,
            modifiers: decorators.modifiers,
            keyword: first_token_of(node, &["subscript"])
                .unwrap_or_else(|| "subscript".to_string()),
            generic_parameters: generic_parameters(node, source),
            parameters: function_parameters(node, source),
            return_type: return_type(node, source),
            generic_requirements: generic_requirements(node, source),
        }])
    }
}
