//! Semantic records for Swift declarations and the mappers that build them
//!
//! Every record is an immutable value built once from a Tree-sitter node.
//! Equality and hashing are structural: records carry no source positions,
//! so reformatting a file does not change the records extracted from it.

pub mod decorator;
pub mod enumeration;
pub mod function;
pub mod generics;
pub mod import;
pub mod nominal;
pub mod operator;
pub mod parameter;
pub mod protocol;
pub mod variable;

pub use decorator::{Argument, Attribute, Modifier};
pub use enumeration::{Case, Enumeration};
pub use function::{Deinitializer, Function, Initializer, Signature, Subscript};
pub use generics::{GenericParameter, GenericRequirement};
pub use import::Import;
pub use nominal::{Class, Extension, Structure};
pub use operator::{Associativity, Fixity, Operator, PrecedenceGroup};
pub use parameter::Parameter;
pub use protocol::{AssociatedType, Protocol};
pub use variable::{Typealias, Variable};

use crate::parser::syntax::{field_text, node_text};
use crate::parser::ExtractError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tree_sitter::Node;

/// The surface every declaration record shares
pub trait Declaration {
    /// Attributes in source order
    fn attributes(&self) -> &[Attribute];

    /// Modifiers in source order
    fn modifiers(&self) -> &[Modifier];

    /// The literal keyword that introduces the declaration (`enum`, `func`, ...)
    fn keyword(&self) -> &str;

    /// The declared name
    fn name(&self) -> &str;
}

/// A record type that can be mapped from syntax nodes
pub trait FromSyntax: Sized {
    const KIND: DeclarationKind;

    /// Whether this mapper consumes `node`
    fn matches(node: &Node, source: &str) -> bool {
        DeclarationKind::of(node, source) == Some(Self::KIND)
    }

    /// Map a matching node into its records. Most kinds produce exactly one;
    /// case and variable declarations produce one per element.
    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError>;
}

macro_rules! impl_declaration {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::decl::Declaration for $ty {
                fn attributes(&self) -> &[$crate::decl::Attribute] {
                    &self.attributes
                }

                fn modifiers(&self) -> &[$crate::decl::Modifier] {
                    &self.modifiers
                }

                fn keyword(&self) -> &str {
                    &self.keyword
                }

                fn name(&self) -> &str {
                    &self.name
                }
            }
        )+
    };
}

pub(crate) use impl_declaration;

/// Declaration kinds the collector can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    AssociatedType,
    Case,
    Class,
    Deinitializer,
    Enumeration,
    Extension,
    Function,
    Import,
    Initializer,
    Operator,
    PrecedenceGroup,
    Protocol,
    Structure,
    Subscript,
    Typealias,
    Variable,
}

impl DeclarationKind {
    pub const ALL: [DeclarationKind; 16] = [
        DeclarationKind::AssociatedType,
        DeclarationKind::Case,
        DeclarationKind::Class,
        DeclarationKind::Deinitializer,
        DeclarationKind::Enumeration,
        DeclarationKind::Extension,
        DeclarationKind::Function,
        DeclarationKind::Import,
        DeclarationKind::Initializer,
        DeclarationKind::Operator,
        DeclarationKind::PrecedenceGroup,
        DeclarationKind::Protocol,
        DeclarationKind::Structure,
        DeclarationKind::Subscript,
        DeclarationKind::Typealias,
        DeclarationKind::Variable,
    ];

    /// The Swift keyword spelling of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::AssociatedType => "associatedtype",
            DeclarationKind::Case => "case",
            DeclarationKind::Class => "class",
            DeclarationKind::Deinitializer => "deinit",
            DeclarationKind::Enumeration => "enum",
            DeclarationKind::Extension => "extension",
            DeclarationKind::Function => "func",
            DeclarationKind::Import => "import",
            DeclarationKind::Initializer => "init",
            DeclarationKind::Operator => "operator",
            DeclarationKind::PrecedenceGroup => "precedencegroup",
            DeclarationKind::Protocol => "protocol",
            DeclarationKind::Structure => "struct",
            DeclarationKind::Subscript => "subscript",
            DeclarationKind::Typealias => "typealias",
            DeclarationKind::Variable => "var",
        }
    }

    /// Classify a syntax node by the declaration kind it introduces, if any
    pub fn of(node: &Node, source: &str) -> Option<Self> {
        match node.kind() {
            "class_declaration" => match declaration_keyword(node, source)?.as_str() {
                "enum" => Some(DeclarationKind::Enumeration),
                "struct" => Some(DeclarationKind::Structure),
                "class" | "actor" => Some(DeclarationKind::Class),
                "extension" => Some(DeclarationKind::Extension),
                _ => None,
            },
            "enum_entry" => Some(DeclarationKind::Case),
            "protocol_declaration" => Some(DeclarationKind::Protocol),
            "associatedtype_declaration" => Some(DeclarationKind::AssociatedType),
            "operator_declaration" => Some(DeclarationKind::Operator),
            "precedence_group_declaration" => Some(DeclarationKind::PrecedenceGroup),
            "function_declaration" | "protocol_function_declaration" => {
                Some(DeclarationKind::Function)
            }
            "init_declaration" => Some(DeclarationKind::Initializer),
            "deinit_declaration" => Some(DeclarationKind::Deinitializer),
            "subscript_declaration" => Some(DeclarationKind::Subscript),
            "typealias_declaration" => Some(DeclarationKind::Typealias),
            "property_declaration" | "protocol_property_declaration" => {
                Some(DeclarationKind::Variable)
            }
            "import_declaration" => Some(DeclarationKind::Import),
            _ => None,
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeclarationKind {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let kind = match normalized.as_str() {
            "associatedtype" | "associated_type" => DeclarationKind::AssociatedType,
            "case" => DeclarationKind::Case,
            "class" | "actor" => DeclarationKind::Class,
            "deinit" | "deinitializer" => DeclarationKind::Deinitializer,
            "enum" | "enumeration" => DeclarationKind::Enumeration,
            "extension" => DeclarationKind::Extension,
            "func" | "function" => DeclarationKind::Function,
            "import" => DeclarationKind::Import,
            "init" | "initializer" => DeclarationKind::Initializer,
            "operator" => DeclarationKind::Operator,
            "precedencegroup" | "precedence_group" => DeclarationKind::PrecedenceGroup,
            "protocol" => DeclarationKind::Protocol,
            "struct" | "structure" => DeclarationKind::Structure,
            "subscript" => DeclarationKind::Subscript,
            "typealias" => DeclarationKind::Typealias,
            "var" | "let" | "variable" => DeclarationKind::Variable,
            _ => return Err(ExtractError::UnknownKind(s.to_string())),
        };
        Ok(kind)
    }
}

/// Any declaration record, tagged by kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnyDeclaration {
    AssociatedType(AssociatedType),
    Case(Case),
    Class(Class),
    Deinitializer(Deinitializer),
    Enumeration(Enumeration),
    Extension(Extension),
    Function(Function),
    Import(Import),
    Initializer(Initializer),
    Operator(Operator),
    PrecedenceGroup(PrecedenceGroup),
    Protocol(Protocol),
    Structure(Structure),
    Subscript(Subscript),
    Typealias(Typealias),
    Variable(Variable),
}

macro_rules! any_declaration_dispatch {
    ($self:ident, $inner:ident => $body:expr) => {
        match $self {
            AnyDeclaration::AssociatedType($inner) => $body,
            AnyDeclaration::Case($inner) => $body,
            AnyDeclaration::Class($inner) => $body,
            AnyDeclaration::Deinitializer($inner) => $body,
            AnyDeclaration::Enumeration($inner) => $body,
            AnyDeclaration::Extension($inner) => $body,
            AnyDeclaration::Function($inner) => $body,
            AnyDeclaration::Import($inner) => $body,
            AnyDeclaration::Initializer($inner) => $body,
            AnyDeclaration::Operator($inner) => $body,
            AnyDeclaration::PrecedenceGroup($inner) => $body,
            AnyDeclaration::Protocol($inner) => $body,
            AnyDeclaration::Structure($inner) => $body,
            AnyDeclaration::Subscript($inner) => $body,
            AnyDeclaration::Typealias($inner) => $body,
            AnyDeclaration::Variable($inner) => $body,
        }
    };
}

pub(crate) use any_declaration_dispatch;

impl AnyDeclaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            AnyDeclaration::AssociatedType(_) => DeclarationKind::AssociatedType,
            AnyDeclaration::Case(_) => DeclarationKind::Case,
            AnyDeclaration::Class(_) => DeclarationKind::Class,
            AnyDeclaration::Deinitializer(_) => DeclarationKind::Deinitializer,
            AnyDeclaration::Enumeration(_) => DeclarationKind::Enumeration,
            AnyDeclaration::Extension(_) => DeclarationKind::Extension,
            AnyDeclaration::Function(_) => DeclarationKind::Function,
            AnyDeclaration::Import(_) => DeclarationKind::Import,
            AnyDeclaration::Initializer(_) => DeclarationKind::Initializer,
            AnyDeclaration::Operator(_) => DeclarationKind::Operator,
            AnyDeclaration::PrecedenceGroup(_) => DeclarationKind::PrecedenceGroup,
            AnyDeclaration::Protocol(_) => DeclarationKind::Protocol,
            AnyDeclaration::Structure(_) => DeclarationKind::Structure,
            AnyDeclaration::Subscript(_) => DeclarationKind::Subscript,
            AnyDeclaration::Typealias(_) => DeclarationKind::Typealias,
            AnyDeclaration::Variable(_) => DeclarationKind::Variable,
        }
    }

    /// Map `node` as a declaration of `kind`
    pub(crate) fn from_syntax(
        kind: DeclarationKind,
        node: &Node,
        source: &str,
    ) -> Result<Vec<Self>, ExtractError> {
        fn wrap<T: FromSyntax>(
            node: &Node,
            source: &str,
            variant: fn(T) -> AnyDeclaration,
        ) -> Result<Vec<AnyDeclaration>, ExtractError> {
            Ok(T::from_syntax(node, source)?.into_iter().map(variant).collect())
        }

        match kind {
            DeclarationKind::AssociatedType => wrap(node, source, AnyDeclaration::AssociatedType),
            DeclarationKind::Case => wrap(node, source, AnyDeclaration::Case),
            DeclarationKind::Class => wrap(node, source, AnyDeclaration::Class),
            DeclarationKind::Deinitializer => wrap(node, source, AnyDeclaration::Deinitializer),
            DeclarationKind::Enumeration => wrap(node, source, AnyDeclaration::Enumeration),
            DeclarationKind::Extension => wrap(node, source, AnyDeclaration::Extension),
            DeclarationKind::Function => wrap(node, source, AnyDeclaration::Function),
            DeclarationKind::Import => wrap(node, source, AnyDeclaration::Import),
            DeclarationKind::Initializer => wrap(node, source, AnyDeclaration::Initializer),
            DeclarationKind::Operator => wrap(node, source, AnyDeclaration::Operator),
            DeclarationKind::PrecedenceGroup => wrap(node, source, AnyDeclaration::PrecedenceGroup),
            DeclarationKind::Protocol => wrap(node, source, AnyDeclaration::Protocol),
            DeclarationKind::Structure => wrap(node, source, AnyDeclaration::Structure),
            DeclarationKind::Subscript => wrap(node, source, AnyDeclaration::Subscript),
            DeclarationKind::Typealias => wrap(node, source, AnyDeclaration::Typealias),
            DeclarationKind::Variable => wrap(node, source, AnyDeclaration::Variable),
        }
    }
}

impl Declaration for AnyDeclaration {
    fn attributes(&self) -> &[Attribute] {
        any_declaration_dispatch!(self, d => d.attributes())
    }

    fn modifiers(&self) -> &[Modifier] {
        any_declaration_dispatch!(self, d => d.modifiers())
    }

    fn keyword(&self) -> &str {
        any_declaration_dispatch!(self, d => d.keyword())
    }

    fn name(&self) -> &str {
        any_declaration_dispatch!(self, d => d.name())
    }
}

/// Which keyword (class/struct/enum/extension/actor) a class_declaration uses
pub(crate) fn declaration_keyword(node: &Node, source: &str) -> Option<String> {
    if let Some(kind) = field_text(node, "declaration_kind", source) {
        return Some(kind);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if !child.is_named() {
            if let Some(text) = node_text(&child, source) {
                match text.as_str() {
                    "class" | "struct" | "enum" | "extension" | "actor" => {
                        return Some(text);
                    }
                    _ => {}
                }
            }
        }
    }
    None
}

/// The declared name, or a grammar violation when the node has none
pub(crate) fn required_name(
    node: &Node,
    name: Option<String>,
    what: &str,
) -> Result<String, ExtractError> {
    name.filter(|n| !n.is_empty())
        .ok_or_else(|| ExtractError::violation(node.kind(), format!("a {what} name"), "none"))
}

/// Inherited types after `:` in source order, each as its verbatim text
pub(crate) fn inheritance(node: &Node, source: &str) -> Vec<String> {
    let mut bases = Vec::new();
    let mut found_colon = false;
    let mut cursor = node.walk();

    for child in node.children(&mut cursor) {
        if !child.is_named() {
            match child.kind() {
                ":" => {
                    found_colon = true;
                    continue;
                }
                "{" => break,
                _ => {}
            }
        }

        if !found_colon {
            continue;
        }

        match child.kind() {
            "class_body" | "enum_class_body" | "protocol_body" | "type_constraints" => break,
            "inheritance_specifier" | "user_type" | "type_identifier" | "function_type"
            | "protocol_composition_type" | "suppressed_constraint" => {
                if let Some(text) = node_text(&child, source).filter(|t| !t.is_empty()) {
                    bases.push(text);
                }
            }
            _ => {}
        }
    }
    bases
}
