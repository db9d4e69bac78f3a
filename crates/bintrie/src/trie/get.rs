//! Implementation of getting an element from the trie by its bit path.
use alloy_primitives::Bytes;

use super::bits::BitPath;
use super::nodes::Node;

impl Node {
    /// Walks the same path an insert would, short-circuiting to `None` as
    /// soon as a required child is absent.
    pub(super) fn get(&self, path: BitPath) -> Option<&Bytes> {
        match path.split_first() {
            None => self.value.as_ref(),
            Some((bit, rest)) => self.children.get(bit)?.get(rest),
        }
    }
}
