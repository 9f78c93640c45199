//! The value tree.
//!
//! A [`Node`] models an arbitrary captured value as a closed set of shapes.
//! Divergence between two trees is embedded in the tree itself through the
//! [`Node::Diff`] case, so diffed trees flow through the same engines as
//! plain ones.
//!
//! # Invariants
//!
//! - Trees are finite. Cycles are cut by the producer with
//!   [`OmittedReason::CycleDetected`] before a tree reaches Vellum.
//! - Equality and hashing are structural over every case, omission reasons
//!   included.
//! - A `Diff` node never has both sides absent, and never holds two equal
//!   sides (use [`Node::changed`] or [`Node::from_sides`] to build one).

use serde::{Deserialize, Serialize};

use crate::kind::NodeKind;
use crate::stack::ensure_sufficient_stack;

/// Why a value was replaced by an [`Node::Omitted`] sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OmittedReason {
    /// Removed by the filter engine.
    Filtered,
    /// The producer could not classify or decode the value.
    Unresolved,
    /// The producer stopped descending at its maximum depth.
    DepthExceeded,
    /// The producer cut a reference cycle here.
    CycleDetected,
}

/// Which side of an embedded diff to recover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndiffDirection {
    Original,
    Update,
}

/// A child identified by a string label (record fields, tuple elements).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Labeled {
    pub label: String,
    pub value: Node,
}

impl Labeled {
    pub fn new(label: impl Into<String>, value: Node) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// A labeled omission sentinel.
    pub fn omitted(label: impl Into<String>, reason: OmittedReason) -> Self {
        Self::new(label, Node::Omitted(reason))
    }
}

/// A mapping entry whose key is itself a tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keyed {
    pub key: Node,
    pub value: Node,
}

impl Keyed {
    pub fn new(key: Node, value: Node) -> Self {
        Self { key, value }
    }

    /// An entry whose key and value are both omitted for the same reason.
    pub fn omitted(reason: OmittedReason) -> Self {
        Self::new(Node::Omitted(reason), Node::Omitted(reason))
    }
}

/// A captured value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Object- or struct-like aggregate with named fields.
    Record { name: String, fields: Vec<Labeled> },
    /// Array-like container. Order is meaningful.
    Sequence(Vec<Node>),
    /// Associative container. Order is iteration order only.
    Mapping(Vec<Keyed>),
    /// Sum-type instance with an optional payload.
    Variant {
        name: String,
        case: String,
        payload: Option<Box<Node>>,
    },
    /// Presence or absence of a value.
    Wrapped(Option<Box<Node>>),
    /// Set-like container. Membership matters, order does not.
    Set(Vec<Node>),
    /// Fixed-arity heterogeneous aggregate. Order is meaningful.
    Tuple(Vec<Labeled>),
    /// Atomic, pre-formatted scalar.
    Leaf(String),
    /// Sentinel for a value that was not (or should not be) rendered.
    Omitted(OmittedReason),
    /// Divergence point: `original == None` means added, `update == None`
    /// means removed.
    Diff {
        original: Option<Box<Node>>,
        update: Option<Box<Node>>,
    },
}

impl Node {
    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    pub fn leaf(description: impl Into<String>) -> Self {
        Self::Leaf(description.into())
    }

    pub fn record(name: impl Into<String>, fields: impl IntoIterator<Item = Labeled>) -> Self {
        Self::Record {
            name: name.into(),
            fields: fields.into_iter().collect(),
        }
    }

    pub fn sequence(elements: impl IntoIterator<Item = Node>) -> Self {
        Self::Sequence(elements.into_iter().collect())
    }

    pub fn mapping(entries: impl IntoIterator<Item = Keyed>) -> Self {
        Self::Mapping(entries.into_iter().collect())
    }

    pub fn set(elements: impl IntoIterator<Item = Node>) -> Self {
        Self::Set(elements.into_iter().collect())
    }

    pub fn tuple(elements: impl IntoIterator<Item = Labeled>) -> Self {
        Self::Tuple(elements.into_iter().collect())
    }

    pub fn variant(name: impl Into<String>, case: impl Into<String>, payload: Option<Node>) -> Self {
        Self::Variant {
            name: name.into(),
            case: case.into(),
            payload: payload.map(Box::new),
        }
    }

    /// A present `Wrapped` value.
    pub fn some(value: Node) -> Self {
        Self::Wrapped(Some(Box::new(value)))
    }

    /// An absent `Wrapped` value.
    pub fn none() -> Self {
        Self::Wrapped(None)
    }

    pub fn omitted(reason: OmittedReason) -> Self {
        Self::Omitted(reason)
    }

    /// A pure addition: the value did not exist on the original side.
    pub fn added(update: Node) -> Self {
        Self::Diff {
            original: None,
            update: Some(Box::new(update)),
        }
    }

    /// A pure removal: the value no longer exists on the update side.
    pub fn removed(original: Node) -> Self {
        Self::Diff {
            original: Some(Box::new(original)),
            update: None,
        }
    }

    /// A change from `original` to `update`, or `original` itself when both
    /// sides are equal.
    pub fn changed(original: Node, update: Node) -> Self {
        if original == update {
            original
        } else {
            Self::Diff {
                original: Some(Box::new(original)),
                update: Some(Box::new(update)),
            }
        }
    }

    /// Build the node describing two optional sides.
    ///
    /// Returns `None` only when both sides are absent.
    pub fn from_sides(original: Option<Node>, update: Option<Node>) -> Option<Self> {
        match (original, update) {
            (Some(original), Some(update)) => Some(Self::changed(original, update)),
            (Some(original), None) => Some(Self::removed(original)),
            (None, Some(update)) => Some(Self::added(update)),
            (None, None) => None,
        }
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    /// The fieldless discriminant of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Record { .. } => NodeKind::Record,
            Self::Sequence(_) => NodeKind::Sequence,
            Self::Mapping(_) => NodeKind::Mapping,
            Self::Variant { .. } => NodeKind::Variant,
            Self::Wrapped(_) => NodeKind::Wrapped,
            Self::Set(_) => NodeKind::Set,
            Self::Tuple(_) => NodeKind::Tuple,
            Self::Leaf(_) => NodeKind::Leaf,
            Self::Omitted(_) => NodeKind::Omitted,
            Self::Diff { .. } => NodeKind::Diff,
        }
    }

    /// Returns `true` for any omission sentinel.
    pub fn is_omitted(&self) -> bool {
        matches!(self, Self::Omitted(_))
    }

    /// Returns `true` for an omission sentinel with the given reason.
    pub fn is_omitted_with(&self, reason: OmittedReason) -> bool {
        matches!(self, Self::Omitted(r) if *r == reason)
    }

    /// Returns `true` if this node itself is an embedded diff.
    pub fn is_diff(&self) -> bool {
        matches!(self, Self::Diff { .. })
    }

    /// The description of a `Leaf`.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(description) => Some(description),
            _ => None,
        }
    }

    /// The type name carried by `Record` and `Variant` nodes.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Record { name, .. } | Self::Variant { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns `true` if an embedded diff appears anywhere in this subtree.
    pub fn contains_diff(&self) -> bool {
        ensure_sufficient_stack(|| match self {
            Self::Diff { .. } => true,
            Self::Record { fields, .. } | Self::Tuple(fields) => {
                fields.iter().any(|f| f.value.contains_diff())
            }
            Self::Sequence(elements) | Self::Set(elements) => {
                elements.iter().any(Node::contains_diff)
            }
            Self::Mapping(entries) => entries
                .iter()
                .any(|e| e.key.contains_diff() || e.value.contains_diff()),
            Self::Variant { payload, .. } => payload.as_deref().is_some_and(Node::contains_diff),
            Self::Wrapped(value) => value.as_deref().is_some_and(Node::contains_diff),
            Self::Leaf(_) | Self::Omitted(_) => false,
        })
    }

    /// The side of a `Diff` node for the given direction, or `self` for any
    /// other node.
    ///
    /// Only the top level is inspected; use the diff engine to strip nested
    /// diffs.
    pub fn side(&self, direction: UndiffDirection) -> Option<&Node> {
        match self {
            Self::Diff { original, update } => match direction {
                UndiffDirection::Original => original.as_deref(),
                UndiffDirection::Update => update.as_deref(),
            },
            other => Some(other),
        }
    }
}

impl From<&str> for Node {
    fn from(description: &str) -> Self {
        Self::leaf(description)
    }
}

impl From<String> for Node {
    fn from(description: String) -> Self {
        Self::Leaf(description)
    }
}
