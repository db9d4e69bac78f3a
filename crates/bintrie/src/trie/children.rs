//! Implementation of a 2-element node children array addressed by a path bit.
use alloc::boxed::Box;

use super::nodes::Node;

#[derive(Debug, Clone, Default)]
pub(super) struct NodeChildren {
    children: [Option<Box<Node>>; 2],
}

impl NodeChildren {
    pub(super) const fn new() -> Self {
        Self {
            children: [None, None],
        }
    }

    #[inline]
    pub(super) fn get(&self, bit: usize) -> Option<&Node> {
        self.children[bit].as_deref()
    }

    #[inline]
    pub(super) fn get_mut(&mut self, bit: usize) -> Option<&mut Node> {
        self.children[bit].as_deref_mut()
    }

    /// Returns the child at `bit`, allocating an empty node if none exists.
    #[inline]
    pub(super) fn get_or_insert(&mut self, bit: usize) -> &mut Node {
        self.children[bit].get_or_insert_with(|| Box::new(Node::new()))
    }

    #[inline]
    pub(super) fn is_empty(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}
