mod bits;
mod children;
mod display;
mod get;
mod hash;
mod hasher;
mod insert;
mod nodes;

use alloy_primitives::{Bytes, B256};
use nodes::Node;

pub use bits::BitPath;
pub use hasher::{Keccak256Hasher, NodeHasher};

/// A binary trie keyed by unsigned integers, maintaining a Merkle root over
/// its contents that is recomputed incrementally as the trie mutates.
///
/// The hash function is injected via the `H` parameter; [`Keccak256Hasher`]
/// is the default.
#[derive(Debug, Clone)]
pub struct Trie<H = Keccak256Hasher> {
    root: Node,
    hasher: H,
    empty_digest: B256,
}

impl Trie {
    /// Creates an empty trie hashing with keccak256.
    pub fn new() -> Self {
        Self::with_hasher(Keccak256Hasher)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: NodeHasher> Trie<H> {
    /// Creates an empty trie with an injected hash function.
    pub fn with_hasher(hasher: H) -> Self {
        // The digest of an absent node (and of an absent value) is fixed for
        // a given hasher, so it is computed once here.
        let empty_digest = hasher.hash(&[]);
        Self {
            root: Node::new(),
            hasher,
            empty_digest,
        }
    }

    /// Inserts a value under the `key` key. Overrides previous values if exists.
    ///
    /// Runs in O(bit length of `key`), independent of the trie size.
    pub fn insert(&mut self, key: u64, value: Bytes) {
        self.root.insert(BitPath::unpack(key), value);
    }

    /// Gets the value associated with `key`, or `None` if no value was ever
    /// inserted under that key.
    ///
    /// An inserted empty byte string is `Some` with an empty payload, which
    /// keeps it distinguishable from an absent key.
    pub fn get(&self, key: u64) -> Option<&Bytes> {
        self.root.get(BitPath::unpack(key))
    }

    /// Returns the Merkle root of the trie.
    ///
    /// Only subtrees touched by an insert since the previous call are
    /// rehashed; untouched subtrees return their memoized digest without
    /// recursion. Calling this twice without an intervening insert performs
    /// no hashing at all on the second call.
    pub fn root(&mut self) -> B256 {
        let empty_digest = self.empty_digest;
        self.root.hash(&self.hasher, empty_digest)
    }

    /// Returns the injected hasher.
    pub const fn hasher(&self) -> &H {
        &self.hasher
    }

    /// The digest of an absent node and of an absent value: `hash` of the
    /// empty byte sequence.
    pub const fn empty_digest(&self) -> B256 {
        self.empty_digest
    }
}
