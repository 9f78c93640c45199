use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Fieldless discriminant of a [`Node`](crate::Node).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Record,
    Sequence,
    Mapping,
    Variant,
    Wrapped,
    Set,
    Tuple,
    Leaf,
    Omitted,
    Diff,
}

impl NodeKind {
    /// All kinds, in declaration order.
    pub const ALL: [NodeKind; 10] = [
        NodeKind::Record,
        NodeKind::Sequence,
        NodeKind::Mapping,
        NodeKind::Variant,
        NodeKind::Wrapped,
        NodeKind::Set,
        NodeKind::Tuple,
        NodeKind::Leaf,
        NodeKind::Omitted,
        NodeKind::Diff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Record => "record",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Variant => "variant",
            Self::Wrapped => "wrapped",
            Self::Set => "set",
            Self::Tuple => "tuple",
            Self::Leaf => "leaf",
            Self::Omitted => "omitted",
            Self::Diff => "diff",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TypeError::UnknownKind(s.to_string()))
    }
}
