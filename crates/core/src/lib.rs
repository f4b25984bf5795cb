//! swiftdecl Core - Semantic model of Swift declarations
//!
//! This crate turns Tree-sitter syntax trees of Swift source into immutable,
//! comparable records of the declarations they contain:
//! - Declaration records (enums and cases, types, protocols, functions, ...)
//! - Generic parameter and where-clause extraction
//! - Pre-order collection of nested declarations
//! - Canonical text rendering independent of source formatting

pub mod collector;
pub mod config;
pub mod decl;
pub mod parser;
pub mod render;

pub use collector::{collect, collect_kind, collect_sources_parallel, Selector};
pub use config::ExtractConfig;
pub use decl::{
    AnyDeclaration, Argument, AssociatedType, Associativity, Attribute, Case, Class,
    Declaration, DeclarationKind, Deinitializer, Enumeration, Extension, Fixity, FromSyntax,
    Function, GenericParameter, GenericRequirement, Import, Initializer, Modifier, Operator,
    Parameter, PrecedenceGroup, Protocol, Signature, Structure, Subscript, Typealias, Variable,
};
pub use parser::{ExtractError, SwiftParser};

/// swiftdecl version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
