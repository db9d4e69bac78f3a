//! Definition of the single node type building the trie.

//! Unlike a compressed trie there is no separate leaf kind: a node may hold a
//! value, children, or both at once (the mixed case arises whenever one key's
//! bit path is a prefix of another's), so one struct with optional parts
//! models every position in the tree.
use alloy_primitives::{Bytes, B256};

pub(super) use super::children::NodeChildren;

#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    /// The value stored under the key terminating exactly here, if any.
    pub(crate) value: Option<Bytes>,
    /// Exclusively owned children, addressed by the next path bit.
    pub(crate) children: NodeChildren,
    /// Memoized subtree digest. `None` means stale: an insert passed through
    /// this node since the digest was last computed.
    pub(crate) hash: Option<B256>,
}

impl Node {
    pub(super) const fn new() -> Self {
        Self {
            value: None,
            children: NodeChildren::new(),
            hash: None,
        }
    }

    pub(super) fn clear_cache(&mut self) {
        self.hash = None;
    }
}
