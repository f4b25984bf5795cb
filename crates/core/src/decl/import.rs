//! `import` declarations

use super::decorator::{Attribute, Decorators, Modifier};
use super::{Declaration, DeclarationKind, FromSyntax};
use crate::parser::syntax::{first_token_of, node_text};
use crate::parser::ExtractError;
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

const IMPORT_KINDS: [&str; 8] = [
    "typealias", "struct", "class", "enum", "protocol", "let", "var", "func",
];

/// An `import` declaration such as `@testable import struct Foundation.Date`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Import {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    keyword: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    import_kind: Option<String>,
    path_components: Vec<String>,
    name: String,
}

impl Import {
    /// The symbol kind for scoped imports (`struct`, `func`, ...)
    pub fn import_kind(&self) -> Option<&str> {
        self.import_kind.as_deref()
    }

    /// Module path, e.g. `["Foundation", "Date"]`
    pub fn path_components(&self) -> &[String] {
        &self.path_components
    }
}

impl Declaration for Import {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The dotted module path
    fn name(&self) -> &str {
        &self.name
    }
}

impl FromSyntax for Import {
    const KIND: DeclarationKind = DeclarationKind::Import;

    fn from_syntax(node: &Node, source: &str) -> Result<Vec<Self>, ExtractError> {
        // identifier may contain simple_identifier children for dotted paths
        let mut parts = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "identifier" => {
                    let mut id_cursor = child.walk();
                    let before = parts.len();
                    for id_child in child.children(&mut id_cursor) {
                        if id_child.kind() == "simple_identifier" {
                            parts.extend(node_text(&id_child, source));
                        }
                    }
                    if parts.len() == before {
                        parts.extend(node_text(&child, source));
                    }
                }
                "simple_identifier" => parts.extend(node_text(&child, source)),
                _ => {}
            }
        }

        if parts.is_empty() {
            return Err(ExtractError::violation(node.kind(), "a module path", "none"));
        }

        let decorators = Decorators::from_node(node, source);
        Ok(vec![Self {
            attributes: decorators.attributes,
            modifiers: decorators.modifiers,
            keyword: first_token_of(node, &["import"]).unwrap_or_else(|| "import".to_string()),
            import_kind: first_token_of(node, &IMPORT_KINDS),
            name: parts.join("."),
            path_components: parts,
        }])
    }
}
