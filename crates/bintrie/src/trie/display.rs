//! Simple printing implementation of the trie.
use core::fmt::{self, Display};

use super::nodes::Node;
use super::Trie;

impl<H> Display for Trie<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root.value.is_none() && self.root.children.is_empty() {
            return write!(f, "Trie {{ EMPTY }}");
        }

        fn fmt_node(f: &mut fmt::Formatter<'_>, node: &Node, indent: usize) -> fmt::Result {
            match &node.value {
                Some(value) => write!(f, "Node {{ value: {value:?} }}")?,
                None => write!(f, "Node")?,
            }
            if node.children.is_empty() {
                return Ok(());
            }
            for bit in 0..2 {
                write!(f, "\n{}{bit}: ", " ".repeat(indent + 4))?;
                match node.children.get(bit) {
                    Some(child) => fmt_node(f, child, indent + 4)?,
                    None => write!(f, "None")?,
                }
            }
            Ok(())
        }

        fmt_node(f, &self.root, 0)
    }
}
