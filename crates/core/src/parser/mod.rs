//! Tree-sitter boundary: turning Swift source text into a syntax tree

pub(crate) mod syntax;

use crate::collector::{self, Selector};
use crate::decl::AnyDeclaration;
use thiserror::Error;
use tree_sitter::{Parser, Tree};

/// Error types for extraction operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),

    #[error("Failed to parse source: {0}")]
    ParseFailed(String),

    /// The tree has a shape the Swift grammar never produces. This is a
    /// defect in the parser that built the tree, not bad user input.
    #[error("Grammar invariant violated: {node} requires {expected}, found {found}")]
    GrammarViolation {
        node: String,
        expected: String,
        found: String,
    },

    #[error("Unknown declaration kind: {0}")]
    UnknownKind(String),
}

impl ExtractError {
    pub(crate) fn violation(
        node: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        let err = ExtractError::GrammarViolation {
            node: node.into(),
            expected: expected.into(),
            found: found.into(),
        };
        tracing::warn!(error = %err, "refusing to map malformed syntax node");
        err
    }
}

/// Swift parser producing trees for the declaration mappers
pub struct SwiftParser {
    language: tree_sitter::Language,
}

impl Default for SwiftParser {
    fn default() -> Self {
        Self {
            language: tree_sitter_swift::LANGUAGE.into(),
        }
    }
}

impl SwiftParser {
    pub fn new() -> Self {
        Self::default()
    }

    fn create_parser(&self) -> Result<Parser, ExtractError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ExtractError::TreeSitter(e.to_string()))?;
        Ok(parser)
    }

    /// Parse Swift source into a Tree-sitter tree.
    ///
    /// A fresh `tree_sitter::Parser` is created per call, so one
    /// `SwiftParser` can be shared across threads.
    pub fn parse(&self, source: &str) -> Result<Tree, ExtractError> {
        let mut parser = self.create_parser()?;
        parser
            .parse(source, None)
            .ok_or_else(|| ExtractError::ParseFailed("Failed to parse Swift source".to_string()))
    }

    /// Parse `source` and collect every declaration accepted by `selector`
    pub fn extract(
        &self,
        source: &str,
        selector: &Selector,
    ) -> Result<Vec<AnyDeclaration>, ExtractError> {
        let tree = self.parse(source)?;
        collector::collect(&tree, source, selector)
    }

    /// Parse `source` and collect declarations of a single record type
    pub fn extract_kind<T: crate::decl::FromSyntax>(
        &self,
        source: &str,
    ) -> Result<Vec<T>, ExtractError> {
        let tree = self.parse(source)?;
        collector::collect_kind::<T>(&tree, source)
    }
}
