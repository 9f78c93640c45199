//! Canonical strings: total-order keys for sibling nodes.
//!
//! The canonical string of a node is `"<shape-tag>.<name-or-case>.<digest>"`
//! for containers and `"<description>.<digest>"` for leaves, where the
//! digest is the node's structural BLAKE3 digest. Omitted sentinels map to
//! [`OMITTED_SENTINEL`] and always sort after everything else.

use vellum_types::Node;

/// Canonical string of every omission sentinel.
pub const OMITTED_SENTINEL: &str = "\u{FFFF}";

/// Canonical string of an absent `Wrapped` value.
const ABSENT: &str = ".";

/// Derive the canonical string of `node`.
///
/// Callers that need an order-insensitive key must sort `node` first; the
/// digest covers child order.
pub fn canonical_string(node: &Node) -> String {
    match node {
        Node::Record { name, .. } => format!("{name}.{}", node.short_digest()),
        Node::Variant { name, case, .. } => format!("{name}.{case}.{}", node.short_digest()),
        Node::Sequence(_) => format!("[].{}", node.short_digest()),
        Node::Mapping(_) => format!("[:].{}", node.short_digest()),
        Node::Set(_) => format!("{{}}.{}", node.short_digest()),
        Node::Tuple(_) => format!("().{}", node.short_digest()),
        Node::Leaf(description) => format!("{description}.{}", node.short_digest()),
        Node::Wrapped(value) => value
            .as_deref()
            .map(canonical_string)
            .unwrap_or_else(|| ABSENT.to_string()),
        Node::Diff { original, update } => original
            .as_deref()
            .or(update.as_deref())
            .map(canonical_string)
            .unwrap_or_default(),
        Node::Omitted(_) => OMITTED_SENTINEL.to_string(),
    }
}
