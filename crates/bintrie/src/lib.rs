//! A binary Merkle trie keyed by unsigned integers.
#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod trie;

pub use alloy_primitives::{Bytes, B256};
pub use trie::{BitPath, Keccak256Hasher, NodeHasher, Trie};
