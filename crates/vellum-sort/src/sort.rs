use std::cmp::Ordering;

use tracing::debug;
use vellum_types::{ensure_sufficient_stack, Keyed, Labeled, Node};

use crate::canonical::{canonical_string, OMITTED_SENTINEL};
use crate::compare::compare_with;
use crate::options::{SortOptions, SortOrder};

/// Return a copy of `node` with all unordered children in canonical order.
///
/// Records are ordered by field label, mappings by the canonical string of
/// each key, and sets by the canonical string of each element. Children are
/// sorted before their canonical strings are derived, so the result does not
/// depend on the input order and sorting twice is a no-op. Omitted sentinels
/// sort last in either direction. Siblings with equal canonical strings
/// (a wrapped value and its inner value, or two omissions) fall back to
/// their structural digests.
pub fn sort(node: &Node, order: SortOrder, options: SortOptions) -> Node {
    debug!(?order, ?options, "sorting tree");
    Sorter { order, options }.sort(node)
}

struct Sorter {
    order: SortOrder,
    options: SortOptions,
}

impl Sorter {
    fn sort(&self, node: &Node) -> Node {
        ensure_sufficient_stack(|| match node {
            Node::Record { name, fields } => {
                let mut fields = self.sort_labeled(fields);
                fields.sort_by(|a, b| {
                    self.compare_text(&a.label, &b.label)
                        .then_with(|| {
                            self.compare_keys(&canonical_string(&a.value), &canonical_string(&b.value))
                        })
                        .then_with(|| a.value.digest().cmp(&b.value.digest()))
                });
                Node::Record {
                    name: name.clone(),
                    fields,
                }
            }

            Node::Mapping(entries) => {
                let mut keyed: Vec<(String, Keyed)> = entries
                    .iter()
                    .map(|entry| {
                        let entry = Keyed::new(self.sort(&entry.key), self.sort(&entry.value));
                        (canonical_string(&entry.key), entry)
                    })
                    .collect();
                keyed.sort_by(|(a_key, a), (b_key, b)| {
                    self.compare_keys(a_key, b_key)
                        .then_with(|| {
                            self.compare_keys(&canonical_string(&a.value), &canonical_string(&b.value))
                        })
                        .then_with(|| a.key.digest().cmp(&b.key.digest()))
                        .then_with(|| a.value.digest().cmp(&b.value.digest()))
                });
                Node::Mapping(keyed.into_iter().map(|(_, entry)| entry).collect())
            }

            Node::Set(elements) => {
                let mut keyed: Vec<(String, Node)> = elements
                    .iter()
                    .map(|element| {
                        let element = self.sort(element);
                        (canonical_string(&element), element)
                    })
                    .collect();
                keyed.sort_by(|(a_key, a), (b_key, b)| {
                    self.compare_keys(a_key, b_key)
                        .then_with(|| a.digest().cmp(&b.digest()))
                });
                Node::Set(keyed.into_iter().map(|(_, element)| element).collect())
            }

            Node::Sequence(elements) => Node::Sequence(elements.iter().map(|e| self.sort(e)).collect()),

            Node::Tuple(elements) => Node::Tuple(self.sort_labeled(elements)),

            Node::Variant {
                name,
                case,
                payload,
            } => Node::Variant {
                name: name.clone(),
                case: case.clone(),
                payload: payload.as_deref().map(|p| Box::new(self.sort(p))),
            },

            Node::Wrapped(value) => Node::Wrapped(value.as_deref().map(|v| Box::new(self.sort(v)))),

            // Sides that become equal once sorted collapse into one value.
            Node::Diff { original, update } => Node::from_sides(
                original.as_deref().map(|o| self.sort(o)),
                update.as_deref().map(|u| self.sort(u)),
            )
            .unwrap_or_else(|| node.clone()),

            Node::Leaf(_) | Node::Omitted(_) => node.clone(),
        })
    }

    /// Sort the values of labeled children, keeping their order.
    fn sort_labeled(&self, fields: &[Labeled]) -> Vec<Labeled> {
        fields
            .iter()
            .map(|field| Labeled::new(field.label.clone(), self.sort(&field.value)))
            .collect()
    }

    /// Order canonical strings, keeping omitted sentinels last.
    fn compare_keys(&self, a: &str, b: &str) -> Ordering {
        match (a == OMITTED_SENTINEL, b == OMITTED_SENTINEL) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.compare_text(a, b),
        }
    }

    /// Total, direction-aware text order.
    fn compare_text(&self, a: &str, b: &str) -> Ordering {
        let ordering = compare_with(a, b, self.options).then_with(|| a.cmp(b));
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}
