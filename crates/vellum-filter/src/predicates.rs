//! Ready-made predicates for [`filter`](crate::filter).

use regex::Regex;
use vellum_types::{Node, NodeKind};

use crate::error::FilterResult;

/// Match nodes of the given kind.
///
/// A variant without payload reads like a scalar, so it also matches
/// [`NodeKind::Leaf`].
pub fn by_kind(kind: NodeKind) -> impl Fn(&Node) -> bool + Clone {
    move |node: &Node| {
        node.kind() == kind
            || (kind == NodeKind::Leaf && matches!(node, Node::Variant { payload: None, .. }))
    }
}

/// Match leaf descriptions and variant case names against a wildcard
/// pattern.
///
/// `*` matches any run of characters and `?` matches exactly one; every
/// other character matches itself. The pattern must cover the whole value.
/// Case names match bare (`firstCase`) or with a leading dot
/// (`.firstCase`).
pub fn by_value(pattern: &str) -> FilterResult<impl Fn(&Node) -> bool + Clone> {
    let regex = wildcard(pattern)?;
    Ok(move |node: &Node| match node {
        Node::Leaf(description) => regex.is_match(description),
        Node::Variant { case, .. } => regex.is_match(case) || regex.is_match(&format!(".{case}")),
        _ => false,
    })
}

fn wildcard(pattern: &str) -> FilterResult<Regex> {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push_str("^(?s:");
    let mut buf = [0u8; 4];
    for c in pattern.chars() {
        match c {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            literal => source.push_str(&regex::escape(literal.encode_utf8(&mut buf))),
        }
    }
    source.push_str(")$");
    Ok(Regex::new(&source)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_predicate() {
        let is_sequence = by_kind(NodeKind::Sequence);
        assert!(is_sequence(&Node::sequence([])));
        assert!(!is_sequence(&Node::set([])));

        let is_leaf = by_kind(NodeKind::Leaf);
        assert!(is_leaf(&Node::leaf("1")));
        assert!(is_leaf(&Node::variant("E", "a", None)));
        assert!(!is_leaf(&Node::variant("E", "a", Some(Node::leaf("1")))));

        let is_diff = by_kind(NodeKind::Diff);
        assert!(is_diff(&Node::added(Node::leaf("1"))));
    }

    #[test]
    fn wildcards_are_anchored() {
        let matches = by_value("*world*").unwrap();
        assert!(matches(&Node::leaf("\"Hello world!\"")));

        let matches = by_value("world").unwrap();
        assert!(!matches(&Node::leaf("\"Hello world!\"")));
        assert!(matches(&Node::leaf("world")));
    }

    #[test]
    fn question_mark_matches_one_character() {
        let matches = by_value("7?").unwrap();
        assert!(matches(&Node::leaf("77")));
        assert!(!matches(&Node::leaf("7")));
        assert!(!matches(&Node::leaf("777")));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let matches = by_value("1.5").unwrap();
        assert!(matches(&Node::leaf("1.5")));
        assert!(!matches(&Node::leaf("125")));

        let matches = by_value("[a]+").unwrap();
        assert!(matches(&Node::leaf("[a]+")));
        assert!(!matches(&Node::leaf("aa")));
    }

    #[test]
    fn star_spans_newlines() {
        let matches = by_value("a*b").unwrap();
        assert!(matches(&Node::leaf("a\nb")));
    }

    #[test]
    fn case_names_match_with_or_without_dot() {
        let variant = Node::variant("SimpleEnum", "firstCase", None);
        assert!(by_value("firstCase").unwrap()(&variant));
        assert!(by_value(".firstCase").unwrap()(&variant));
        assert!(by_value(".first*").unwrap()(&variant));
        assert!(!by_value("SimpleEnum").unwrap()(&variant));
    }

    #[test]
    fn containers_never_match_by_value() {
        let matches = by_value("*").unwrap();
        assert!(!matches(&Node::record("R", [])));
        assert!(!matches(&Node::none()));
        assert!(matches(&Node::leaf("")));
    }
}
