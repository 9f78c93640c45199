//! Predicate-driven pruning.
//!
//! Each node carries a retention budget inherited from its ancestors. A node
//! that passes the predicate resets the budget of its children to
//! `match_depth`; a node that fails spends one level of it. A failing node
//! with no budget left collapses to `Omitted(Filtered)` unless one of its
//! descendants was retained, so the ancestor chain of every match survives.

use tracing::debug;
use vellum_types::{ensure_sufficient_stack, Keyed, Labeled, Node, OmittedReason};

/// Filter `node`, replacing every value that fails `predicate` (and is not
/// within `match_depth` levels below a match) with `Omitted(Filtered)`.
///
/// Mapping pairs are dropped only when both key and value fail; otherwise
/// both sides are kept, with the unfiltered original substituted for the
/// failing side. The same rule applies to the two sides of an embedded diff.
pub fn filter(node: &Node, predicate: impl Fn(&Node) -> bool, match_depth: usize) -> Node {
    debug!(match_depth, kind = %node.kind(), "filtering tree");
    Filter {
        include: &predicate,
        match_depth,
    }
    .apply(node, 0)
}

struct Filter<'p> {
    include: &'p dyn Fn(&Node) -> bool,
    match_depth: usize,
}

impl Filter<'_> {
    /// Filter `node` with `budget` levels of unconditional retention left.
    fn apply(&self, node: &Node, budget: usize) -> Node {
        ensure_sufficient_stack(|| {
            let include = (self.include)(node);
            let keep = include || budget > 0;
            let child_budget = if include {
                self.match_depth
            } else {
                budget.saturating_sub(1)
            };

            match node {
                Node::Record { name, fields } => {
                    let (fields, found) = self.labeled(fields, child_budget);
                    if keep || found {
                        Node::Record {
                            name: name.clone(),
                            fields,
                        }
                    } else {
                        filtered()
                    }
                }

                Node::Tuple(elements) => {
                    let (elements, found) = self.labeled(elements, child_budget);
                    if keep || found {
                        Node::Tuple(elements)
                    } else {
                        filtered()
                    }
                }

                Node::Sequence(elements) => {
                    let (elements, found) = self.elements(elements, child_budget);
                    if keep || found {
                        Node::Sequence(elements)
                    } else {
                        filtered()
                    }
                }

                Node::Set(elements) => {
                    let (elements, found) = self.elements(elements, child_budget);
                    if keep || found {
                        Node::Set(elements)
                    } else {
                        filtered()
                    }
                }

                Node::Mapping(entries) => {
                    let mut found = false;
                    let entries: Vec<Keyed> = entries
                        .iter()
                        .map(|entry| {
                            let key = self.apply(&entry.key, child_budget);
                            let value = self.apply(&entry.value, child_budget);
                            if key.is_omitted() && value.is_omitted() {
                                Keyed::omitted(OmittedReason::Filtered)
                            } else {
                                found = true;
                                Keyed::new(
                                    restore(key, &entry.key),
                                    restore(value, &entry.value),
                                )
                            }
                        })
                        .collect();
                    if keep || found {
                        Node::Mapping(entries)
                    } else {
                        filtered()
                    }
                }

                Node::Variant {
                    name,
                    case,
                    payload,
                } => {
                    let payload = payload.as_deref().map(|p| self.apply(p, child_budget));
                    let found = payload.as_ref().is_some_and(|p| !p.is_omitted());
                    if keep || found {
                        Node::variant(name.clone(), case.clone(), payload)
                    } else {
                        filtered()
                    }
                }

                Node::Wrapped(None) => {
                    if keep {
                        node.clone()
                    } else {
                        filtered()
                    }
                }

                // Wrapped is transparent: a failing wrapper passes its budget
                // through unspent. A present value that filters away under a
                // retained wrapper is re-filtered with one extra level so the
                // wrapper shows its inner omission instead of vanishing.
                Node::Wrapped(Some(value)) => {
                    let inner_budget = if include { self.match_depth } else { budget };
                    let inner = self.apply(value, inner_budget);
                    if inner.is_omitted() && keep {
                        Node::some(self.apply(value, inner_budget.saturating_add(1)))
                    } else if !inner.is_omitted() {
                        Node::some(inner)
                    } else {
                        filtered()
                    }
                }

                Node::Diff { original, update } => {
                    let side_budget = if include { self.match_depth } else { budget };
                    let filtered_original = original.as_deref().map(|o| self.apply(o, side_budget));
                    let filtered_update = update.as_deref().map(|u| self.apply(u, side_budget));
                    let found = filtered_original
                        .iter()
                        .chain(filtered_update.iter())
                        .any(|side| !side.is_omitted());

                    if found {
                        let original = filtered_original
                            .zip(original.as_deref())
                            .map(|(f, o)| restore(f, o));
                        let update = filtered_update
                            .zip(update.as_deref())
                            .map(|(f, u)| restore(f, u));
                        Node::from_sides(original, update).unwrap_or_else(filtered)
                    } else if keep {
                        node.clone()
                    } else {
                        filtered()
                    }
                }

                Node::Leaf(_) | Node::Omitted(_) => {
                    if keep {
                        node.clone()
                    } else {
                        filtered()
                    }
                }
            }
        })
    }

    fn labeled(&self, fields: &[Labeled], budget: usize) -> (Vec<Labeled>, bool) {
        let mut found = false;
        let fields = fields
            .iter()
            .map(|field| {
                let value = self.apply(&field.value, budget);
                found |= !value.is_omitted();
                Labeled::new(field.label.clone(), value)
            })
            .collect();
        (fields, found)
    }

    fn elements(&self, elements: &[Node], budget: usize) -> (Vec<Node>, bool) {
        let mut found = false;
        let elements = elements
            .iter()
            .map(|element| {
                let element = self.apply(element, budget);
                found |= !element.is_omitted();
                element
            })
            .collect();
        (elements, found)
    }
}

fn filtered() -> Node {
    Node::omitted(OmittedReason::Filtered)
}

/// Substitute `source` for a side that filtered away entirely.
fn restore(filtered: Node, source: &Node) -> Node {
    if filtered.is_omitted() {
        source.clone()
    } else {
        filtered
    }
}
