//! Structural comparison of two value trees.
//!
//! The result has the shape of the inputs, with every point of divergence
//! replaced by a [`Node::Diff`]. Equal subtrees come back unwrapped, so
//! diffing a tree against itself returns the tree.

use std::borrow::Cow;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use tracing::debug;
use vellum_types::{
    ensure_sufficient_stack, Keyed, Labeled, Node, OmittedReason, UndiffDirection,
};

use crate::sequence::{EditScript, Step};
use crate::undiff::undiff;

/// Compare `original` against `update`.
///
/// Inputs that already contain diffs are first reduced to plain trees: the
/// original side of `original` and the update side of `update`. When one of
/// them has no such side, the result is a pure addition or removal of the
/// other.
///
/// # Alignment
///
/// - Records match fields by label. Matched fields recurse; original-only
///   fields are wrapped as removed and update-only fields, appended in
///   update order, as added.
/// - Tuples compare element-wise when their label sequences agree and are
///   replaced as a whole otherwise.
/// - Sequences follow a minimal edit script, pairing a removal and an
///   insertion that meet at the same position into one change.
/// - Mappings match entries by key and sets match elements by value. Entries
///   and elements already filtered away are dropped before matching.
/// - Records and variants of a different type or case, and nodes of a
///   different kind, are replaced as a whole.
pub fn diff(original: &Node, update: &Node) -> Node {
    let result = match (
        plain(original, UndiffDirection::Original),
        plain(update, UndiffDirection::Update),
    ) {
        (Some(a), Some(b)) => compare(&a, &b),
        (Some(a), None) => Node::removed(a.into_owned()),
        (None, Some(b)) => Node::added(b.into_owned()),
        // Neither input has the requested side; nothing to compare.
        (None, None) => original.clone(),
    };

    debug!(changed = result.contains_diff(), "diffed trees");
    result
}

fn plain(node: &Node, direction: UndiffDirection) -> Option<Cow<'_, Node>> {
    if node.contains_diff() {
        undiff(node, direction).map(Cow::Owned)
    } else {
        Some(Cow::Borrowed(node))
    }
}

fn compare(original: &Node, update: &Node) -> Node {
    ensure_sufficient_stack(|| match (original, update) {
        (
            Node::Record { name, fields },
            Node::Record {
                name: update_name,
                fields: update_fields,
            },
        ) if name == update_name => Node::Record {
            name: name.clone(),
            fields: compare_fields(fields, update_fields),
        },

        (Node::Tuple(elements), Node::Tuple(update_elements))
            if elements.len() == update_elements.len()
                && elements
                    .iter()
                    .zip(update_elements)
                    .all(|(a, b)| a.label == b.label) =>
        {
            Node::Tuple(
                elements
                    .iter()
                    .zip(update_elements)
                    .map(|(a, b)| Labeled::new(a.label.clone(), compare(&a.value, &b.value)))
                    .collect(),
            )
        }

        (Node::Sequence(elements), Node::Sequence(update_elements)) => {
            Node::Sequence(compare_sequences(elements, update_elements))
        }

        (Node::Mapping(entries), Node::Mapping(update_entries)) => {
            Node::Mapping(compare_entries(entries, update_entries))
        }

        (Node::Set(elements), Node::Set(update_elements)) => {
            Node::Set(compare_members(elements, update_elements))
        }

        (
            Node::Variant {
                name,
                case,
                payload,
            },
            Node::Variant {
                name: update_name,
                case: update_case,
                payload: update_payload,
            },
        ) if name == update_name && case == update_case => {
            let payload = match (payload.as_deref(), update_payload.as_deref()) {
                (Some(a), Some(b)) => Some(compare(a, b)),
                (a, b) => Node::from_sides(a.cloned(), b.cloned()),
            };
            Node::Variant {
                name: name.clone(),
                case: case.clone(),
                payload: payload.map(Box::new),
            }
        }

        (Node::Wrapped(Some(value)), Node::Wrapped(Some(update_value))) => {
            Node::some(compare(value, update_value))
        }

        // Kind or identity mismatch, presence mismatch, leaves and omissions.
        _ => Node::changed(original.clone(), update.clone()),
    })
}

fn compare_fields(fields: &[Labeled], update_fields: &[Labeled]) -> Vec<Labeled> {
    let (matches, unmatched) = match_by(fields, update_fields, |field| &field.label);

    let mut result: Vec<Labeled> = fields
        .iter()
        .zip(matches)
        .map(|(field, matched)| {
            let value = match matched {
                Some(j) => compare(&field.value, &update_fields[j].value),
                None => Node::removed(field.value.clone()),
            };
            Labeled::new(field.label.clone(), value)
        })
        .collect();

    result.extend(
        unmatched
            .into_iter()
            .map(|j| &update_fields[j])
            .map(|field| Labeled::new(field.label.clone(), Node::added(field.value.clone()))),
    );
    result
}

fn compare_sequences(elements: &[Node], update_elements: &[Node]) -> Vec<Node> {
    EditScript::between(elements, update_elements)
        .align()
        .into_iter()
        .map(|step| match step {
            Step::Unchanged { original, update } | Step::Paired { original, update } => {
                compare(&elements[original], &update_elements[update])
            }
            Step::Inserted(update) => Node::added(update_elements[update].clone()),
            Step::Removed(original) => Node::removed(elements[original].clone()),
        })
        .collect()
}

fn compare_entries(entries: &[Keyed], update_entries: &[Keyed]) -> Vec<Keyed> {
    let retained = |entry: &&Keyed| !entry.value.is_omitted_with(OmittedReason::Filtered);
    let entries: Vec<&Keyed> = entries.iter().filter(retained).collect();
    let update_entries: Vec<&Keyed> = update_entries.iter().filter(retained).collect();

    let (matches, unmatched) = match_by(&entries, &update_entries, |entry| &entry.key);

    let mut result: Vec<Keyed> = entries
        .iter()
        .zip(matches)
        .map(|(entry, matched)| match matched {
            Some(j) => Keyed::new(
                compare(&entry.key, &update_entries[j].key),
                compare(&entry.value, &update_entries[j].value),
            ),
            None => Keyed::new(
                Node::removed(entry.key.clone()),
                Node::removed(entry.value.clone()),
            ),
        })
        .collect();

    result.extend(unmatched.into_iter().map(|j| {
        let entry = update_entries[j];
        Keyed::new(Node::added(entry.key.clone()), Node::added(entry.value.clone()))
    }));
    result
}

fn compare_members(elements: &[Node], update_elements: &[Node]) -> Vec<Node> {
    let retained = |element: &&Node| !element.is_omitted_with(OmittedReason::Filtered);
    let elements: Vec<&Node> = elements.iter().filter(retained).collect();
    let update_elements: Vec<&Node> = update_elements.iter().filter(retained).collect();

    let (matches, unmatched) = match_by(&elements, &update_elements, |element| *element);

    let mut result: Vec<Node> = elements
        .iter()
        .zip(matches)
        .map(|(element, matched)| match matched {
            Some(_) => (*element).clone(),
            None => Node::removed((*element).clone()),
        })
        .collect();

    result.extend(
        unmatched
            .into_iter()
            .map(|j| Node::added(update_elements[j].clone())),
    );
    result
}

/// Pair every original item with the first unused update item sharing its
/// key.
///
/// Returns the matched update index per original item, and the update
/// indices left unmatched, in update order. Repeated keys pair up in order
/// of appearance.
fn match_by<'a, T, K>(
    original: &'a [T],
    update: &'a [T],
    key: impl Fn(&'a T) -> &'a K,
) -> (Vec<Option<usize>>, Vec<usize>)
where
    K: Eq + Hash + ?Sized + 'a,
{
    let mut available: HashMap<&K, VecDeque<usize>> = HashMap::new();
    for (j, item) in update.iter().enumerate() {
        available.entry(key(item)).or_default().push_back(j);
    }

    let mut used = vec![false; update.len()];
    let matches = original
        .iter()
        .map(|item| {
            let j = available.get_mut(key(item))?.pop_front()?;
            used[j] = true;
            Some(j)
        })
        .collect();

    let unmatched = used
        .iter()
        .enumerate()
        .filter(|(_, used)| !**used)
        .map(|(j, _)| j)
        .collect();

    (matches, unmatched)
}
