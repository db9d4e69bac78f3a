//! Inserting an element into the trie along its bit path.
use alloy_primitives::Bytes;

use super::bits::BitPath;
use super::nodes::Node;

impl Node {
    /// Descends along `path`, allocating empty nodes on demand, and stores
    /// `value` at the terminal node.
    ///
    /// Every node on the path, this one included, drops its memoized digest
    /// in the same pass: these are exactly the nodes whose subtree contents
    /// change, and invalidating on the way down avoids any need for parent
    /// links.
    pub(super) fn insert(&mut self, path: BitPath, value: Bytes) {
        self.clear_cache();
        match path.split_first() {
            None => self.value = Some(value),
            Some((bit, rest)) => self.children.get_or_insert(bit).insert(rest, value),
        }
    }
}
