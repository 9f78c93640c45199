//! Structural digests of value trees.
//!
//! A [`NodeDigest`] is the BLAKE3 hash of a node's structural `Hash` stream,
//! domain-separated so it never collides with digests of other data. Equal
//! trees always produce the same digest, which makes it usable as a stable
//! tie-breaker when ordering heterogeneous siblings.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// Domain tag prepended to every node digest.
const DOMAIN: &[u8] = b"vellum-node-v1:";

/// Content-derived identifier of a tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeDigest([u8; 32]);

impl NodeDigest {
    /// Compute the digest of a tree.
    pub fn of(node: &Node) -> Self {
        let mut sink = Blake3Sink::new();
        node.hash(&mut sink);
        Self(*sink.hasher.finalize().as_bytes())
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 16 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl fmt::Debug for NodeDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeDigest({})", self.short_hex())
    }
}

impl fmt::Display for NodeDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Node {
    /// Structural digest of this tree.
    pub fn digest(&self) -> NodeDigest {
        NodeDigest::of(self)
    }

    /// Short hex form of [`Node::digest`].
    pub fn short_digest(&self) -> String {
        self.digest().short_hex()
    }
}

/// Adapts a BLAKE3 hasher to `std::hash::Hasher` so the derived `Hash`
/// impls feed it directly.
struct Blake3Sink {
    hasher: blake3::Hasher,
}

impl Blake3Sink {
    fn new() -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(DOMAIN);
        Self { hasher }
    }
}

impl Hasher for Blake3Sink {
    fn write(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    fn finish(&self) -> u64 {
        let hash = self.hasher.finalize();
        let mut head = [0u8; 8];
        head.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(head)
    }
}
