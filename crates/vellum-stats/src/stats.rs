use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use vellum_types::{ensure_sufficient_stack, Node, OmittedReason};

/// Aggregate metrics over a value tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Embedded diff nodes encountered.
    pub diff_count: usize,
    /// `Omitted(Filtered)` sentinels encountered.
    pub filtered_count: usize,
    /// `Omitted(Unresolved)` sentinels encountered.
    pub unresolved_count: usize,
    /// Deepest level reached. Every container and leaf adds a level;
    /// wrappers, diffs and omissions do not.
    pub max_depth: usize,
    /// Distinct type names of records and variants.
    pub type_names: BTreeSet<String>,
}

/// Collect [`Stats`] for `node`.
///
/// A diff counts once and then contributes only its update side, so the
/// remaining metrics describe the destination state.
pub fn stats(node: &Node) -> Stats {
    let mut stats = Stats::default();
    stats.visit(node, 0);
    debug!(
        diffs = stats.diff_count,
        filtered = stats.filtered_count,
        unresolved = stats.unresolved_count,
        max_depth = stats.max_depth,
        "collected stats"
    );
    stats
}

impl Stats {
    fn visit(&mut self, node: &Node, depth: usize) {
        ensure_sufficient_stack(|| match node {
            Node::Record { name, fields } => {
                self.enter(depth);
                self.type_names.insert(name.clone());
                for field in fields {
                    self.visit(&field.value, depth + 1);
                }
            }

            Node::Variant { name, payload, .. } => {
                self.enter(depth);
                self.type_names.insert(name.clone());
                if let Some(payload) = payload {
                    self.visit(payload, depth + 1);
                }
            }

            Node::Tuple(elements) => {
                self.enter(depth);
                for element in elements {
                    self.visit(&element.value, depth + 1);
                }
            }

            Node::Sequence(elements) | Node::Set(elements) => {
                self.enter(depth);
                for element in elements {
                    self.visit(element, depth + 1);
                }
            }

            Node::Mapping(entries) => {
                self.enter(depth);
                for entry in entries {
                    // A filtered pair is one omission, not two.
                    let filtered_pair = entry.key.is_omitted_with(OmittedReason::Filtered)
                        && entry.value.is_omitted_with(OmittedReason::Filtered);
                    if !filtered_pair {
                        self.visit(&entry.key, depth + 1);
                    }
                    self.visit(&entry.value, depth + 1);
                }
            }

            Node::Wrapped(value) => {
                if let Some(value) = value {
                    self.visit(value, depth);
                }
            }

            Node::Diff { update, .. } => {
                self.diff_count += 1;
                if let Some(update) = update {
                    self.visit(update, depth);
                }
            }

            Node::Leaf(_) => self.enter(depth),

            Node::Omitted(OmittedReason::Filtered) => self.filtered_count += 1,
            Node::Omitted(OmittedReason::Unresolved) => self.unresolved_count += 1,
            Node::Omitted(OmittedReason::DepthExceeded | OmittedReason::CycleDetected) => {}
        })
    }

    fn enter(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth + 1);
    }
}
