//! Keyed and indexed access into value trees.
//!
//! Key semantics by node kind:
//!
//! - Record: field label.
//! - Tuple: zero-based index, else element label.
//! - Sequence: zero-based index only.
//! - Mapping: a key whose `Leaf` description equals the lookup key, quoted
//!   or unquoted.
//! - Variant with payload: `0` for a bare payload, or index/label into a
//!   tuple payload.
//! - Set: an element whose `Leaf` description equals the lookup key.
//! - Diff: both sides are looked up and recombined into a new diff.
//! - Everything else: not found.
//!
//! An empty key never matches.

use std::borrow::Cow;

use vellum_types::{Labeled, Node};

use crate::key::PathKey;

/// Look up a single child of `node`.
///
/// Returns `None` when nothing matches. Lookups into a diff produce a newly
/// built node, so the result is a [`Cow`].
pub fn lookup<'a>(node: &'a Node, key: impl Into<PathKey>) -> Option<Cow<'a, Node>> {
    let key = key.into();
    if key.is_empty() {
        return None;
    }
    lookup_key(node, &key)
}

/// Follow a sequence of keys, stopping at the first miss.
///
/// An empty key sequence returns `node` itself.
pub fn lookup_path<'a, K>(node: &'a Node, keys: impl IntoIterator<Item = K>) -> Option<Cow<'a, Node>>
where
    K: Into<PathKey>,
{
    let mut current = Cow::Borrowed(node);
    for key in keys {
        current = match current {
            Cow::Borrowed(node) => lookup(node, key)?,
            Cow::Owned(node) => Cow::Owned(lookup(&node, key)?.into_owned()),
        };
    }
    Some(current)
}

fn lookup_key<'a>(node: &'a Node, key: &PathKey) -> Option<Cow<'a, Node>> {
    match node {
        Node::Record { fields, .. } => by_label(fields, key).map(Cow::Borrowed),

        Node::Tuple(elements) => by_index_or_label(elements, key).map(Cow::Borrowed),

        Node::Sequence(elements) => key
            .as_index()
            .and_then(|index| elements.get(index))
            .map(Cow::Borrowed),

        Node::Mapping(entries) => entries
            .iter()
            .find(|entry| describes(&entry.key, key))
            .map(|entry| Cow::Borrowed(&entry.value)),

        Node::Variant {
            payload: Some(payload),
            ..
        } => match payload.as_ref() {
            Node::Tuple(elements) => by_index_or_label(elements, key).map(Cow::Borrowed),
            bare => (key.as_str() == "0").then_some(Cow::Borrowed(bare)),
        },

        Node::Set(elements) => elements
            .iter()
            .find(|element| describes(element, key))
            .map(Cow::Borrowed),

        Node::Diff { original, update } => {
            let original = original
                .as_deref()
                .and_then(|side| lookup_key(side, key))
                .map(Cow::into_owned);
            let update = update
                .as_deref()
                .and_then(|side| lookup_key(side, key))
                .map(Cow::into_owned);
            Node::from_sides(original, update).map(Cow::Owned)
        }

        Node::Variant { payload: None, .. }
        | Node::Wrapped(_)
        | Node::Leaf(_)
        | Node::Omitted(_) => None,
    }
}

fn by_label<'a>(fields: &'a [Labeled], key: &PathKey) -> Option<&'a Node> {
    fields
        .iter()
        .find(|field| field.label == key.as_str())
        .map(|field| &field.value)
}

fn by_index_or_label<'a>(elements: &'a [Labeled], key: &PathKey) -> Option<&'a Node> {
    key.as_index()
        .and_then(|index| elements.get(index))
        .map(|element| &element.value)
        .or_else(|| by_label(elements, key))
}

/// Whether `node` is a `Leaf` rendered as the key, with or without quotes.
fn describes(node: &Node, key: &PathKey) -> bool {
    match node {
        Node::Leaf(description) => {
            let key = key.as_str();
            description == key
                || (description.len() == key.len() + 2
                    && description.starts_with('"')
                    && description.ends_with('"')
                    && &description[1..description.len() - 1] == key)
        }
        _ => false,
    }
}
