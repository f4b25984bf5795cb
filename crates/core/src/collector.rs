//! Pre-order collection of declaration records from a syntax tree
//!
//! A declaration is yielded before anything nested in its body, and
//! siblings are yielded top to bottom. Every call owns its accumulator, so
//! collecting twice from the same tree yields the same sequence.

use crate::decl::{AnyDeclaration, DeclarationKind, FromSyntax};
use crate::parser::{ExtractError, SwiftParser};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tree_sitter::{Node, Tree, TreeCursor};

/// Which declarations a collection pass yields
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selector {
    /// Every declaration kind
    #[default]
    Any,
    /// A single declaration kind
    Kind(DeclarationKind),
    /// Any of several declaration kinds
    AnyOf(Vec<DeclarationKind>),
}

impl Selector {
    pub fn accepts(&self, kind: DeclarationKind) -> bool {
        match self {
            Selector::Any => true,
            Selector::Kind(k) => *k == kind,
            Selector::AnyOf(kinds) => kinds.contains(&kind),
        }
    }
}

impl From<DeclarationKind> for Selector {
    fn from(kind: DeclarationKind) -> Self {
        Selector::Kind(kind)
    }
}

/// Collect every declaration in `tree` accepted by `selector`, in pre-order
pub fn collect(
    tree: &Tree,
    source: &str,
    selector: &Selector,
) -> Result<Vec<AnyDeclaration>, ExtractError> {
    let mut declarations = Vec::new();
    let mut cursor = tree.walk();

    visit(&mut cursor, &mut |node| {
        if let Some(kind) = DeclarationKind::of(node, source) {
            if selector.accepts(kind) {
                tracing::trace!(kind = %kind, node = node.kind(), "mapping declaration");
                declarations.extend(AnyDeclaration::from_syntax(kind, node, source)?);
            }
        }
        Ok(())
    })?;

    tracing::debug!(
        count = declarations.len(),
        selector = ?selector,
        "collected declarations"
    );
    Ok(declarations)
}

/// Collect every declaration of record type `T`, in pre-order
pub fn collect_kind<T: FromSyntax>(tree: &Tree, source: &str) -> Result<Vec<T>, ExtractError> {
    let mut declarations = Vec::new();
    let mut cursor = tree.walk();

    visit(&mut cursor, &mut |node| {
        if T::matches(node, source) {
            declarations.extend(T::from_syntax(node, source)?);
        }
        Ok(())
    })?;

    tracing::debug!(
        count = declarations.len(),
        kind = %T::KIND,
        "collected declarations"
    );
    Ok(declarations)
}

/// Parse and collect several independent sources in parallel.
///
/// Results are returned in the order of `sources`; a failure in one source
/// does not affect the others.
pub fn collect_sources_parallel(
    parser: &SwiftParser,
    sources: &[&str],
    selector: &Selector,
) -> Vec<Result<Vec<AnyDeclaration>, ExtractError>> {
    sources
        .par_iter()
        .map(|source| parser.extract(source, selector))
        .collect()
}

/// Call `f` on the cursor's node and then on every descendant, in pre-order
fn visit<'t, F>(cursor: &mut TreeCursor<'t>, f: &mut F) -> Result<(), ExtractError>
where
    F: FnMut(&Node<'t>) -> Result<(), ExtractError>,
{
    let node = cursor.node();
    f(&node)?;

    if cursor.goto_first_child() {
        loop {
            visit(cursor, f)?;
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }
    Ok(())
}
