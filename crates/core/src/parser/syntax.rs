//! Small helpers over `tree_sitter::Node` shared by the declaration mappers

use tree_sitter::Node;

/// Comments are extras and may appear between any two children.
pub(crate) fn is_trivia(node: &Node) -> bool {
    matches!(node.kind(), "comment" | "multiline_comment")
}

/// Verbatim source text of a node, trimmed of surrounding whitespace
pub(crate) fn node_text(node: &Node, source: &str) -> Option<String> {
    node.utf8_text(source.as_bytes())
        .ok()
        .map(|s| s.trim().to_string())
}

/// Verbatim source text from the start of `first` to the end of `last`
pub(crate) fn span_text(first: &Node, last: &Node, source: &str) -> Option<String> {
    source
        .get(first.start_byte()..last.end_byte())
        .map(|s| s.trim().to_string())
}

pub(crate) fn field_text(node: &Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .and_then(|n| node_text(&n, source))
        .filter(|s| !s.is_empty())
}

pub(crate) fn find_child_by_kind<'a>(node: &Node<'a>, kind: &str) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    let result = node.children(&mut cursor).find(|c| c.kind() == kind);
    result
}

pub(crate) fn children_by_kind<'a>(node: &Node<'a>, kind: &str) -> Vec<Node<'a>> {
    let mut cursor = node.walk();
    let result = node.children(&mut cursor).filter(|c| c.kind() == kind).collect();
    result
}

/// Named, non-comment children in source order
pub(crate) fn named_children<'a>(node: &Node<'a>) -> Vec<Node<'a>> {
    let mut cursor = node.walk();
    let result = node
        .named_children(&mut cursor)
        .filter(|c| !is_trivia(c))
        .collect();
    result
}

/// Whether `node` has a direct anonymous child spelled `token`
pub(crate) fn has_token(node: &Node, token: &str) -> bool {
    find_token(node, token).is_some()
}

pub(crate) fn find_token<'a>(node: &Node<'a>, token: &str) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    let result = node
        .children(&mut cursor)
        .find(|c| !c.is_named() && c.kind() == token);
    result
}

/// First direct anonymous child whose spelling is one of `tokens`
pub(crate) fn first_token_of(node: &Node, tokens: &[&str]) -> Option<String> {
    let mut cursor = node.walk();
    let result = node
        .children(&mut cursor)
        .find(|c| !c.is_named() && tokens.contains(&c.kind()))
        .map(|c| c.kind().to_string());
    result
}

/// First named child that follows the anonymous `token`
pub(crate) fn named_after_token<'a>(node: &Node<'a>, token: &str) -> Option<Node<'a>> {
    let mut found = false;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if !child.is_named() && child.kind() == token {
            found = true;
            continue;
        }
        if found && child.is_named() && !is_trivia(&child) {
            return Some(child);
        }
    }
    None
}

/// The child (named or not) directly after the anonymous `token`
pub(crate) fn child_after_token<'a>(node: &Node<'a>, token: &str) -> Option<Node<'a>> {
    let mut found = false;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if is_trivia(&child) {
            continue;
        }
        if found {
            return Some(child);
        }
        if !child.is_named() && child.kind() == token {
            found = true;
        }
    }
    None
}

/// Kind of the parent node, or `<root>` for the tree root
pub(crate) fn parent_kind(node: &Node) -> String {
    node.parent()
        .map(|p| p.kind().to_string())
        .unwrap_or_else(|| "<root>".to_string())
}

/// Split `text` at commas that are not nested inside brackets or string
/// literals. Empty pieces are dropped.
pub(crate) fn split_top_level(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut current = String::new();

    for ch in text.chars() {
        if in_string {
            current.push(ch);
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => {
                in_string = true;
                current.push(ch);
            }
            '(' | '[' | '{' | '<' => {
                depth += 1;
                current.push(ch);
            }
            ')' | ']' | '}' | '>' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => {
                let piece = current.trim();
                if !piece.is_empty() {
                    pieces.push(piece.to_string());
                }
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    let piece = current.trim();
    if !piece.is_empty() {
        pieces.push(piece.to_string());
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_top_level_respects_nesting() {
        assert_eq!(
            split_top_level("a, f(b, c), [d: e, f: g], \"h, i\""),
            vec!["a", "f(b, c)", "[d: e, f: g]", "\"h, i\""]
        );
    }

    #[test]
    fn test_split_top_level_drops_empty_pieces() {
        assert_eq!(split_top_level(" , x ,"), vec!["x"]);
        assert!(split_top_level("   ").is_empty());
    }

    #[test]
    fn test_split_top_level_escaped_quote() {
        assert_eq!(split_top_level(r#""a\"b, c", d"#), vec![r#""a\"b, c""#, "d"]);
    }
}
