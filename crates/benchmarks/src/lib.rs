#![allow(unused_crate_dependencies)]
//! Benchmark utilities for exercising the binary Merkle trie.

use alloy_primitives::{keccak256, Bytes};
use bintrie::Trie;

/// Deterministic (key, value) workload: keys `1..=n` with 32-byte values
/// derived from the key.
pub fn generate_entries(n: u64) -> Vec<(u64, Bytes)> {
    (1..=n)
        .map(|key| {
            let value = Bytes::copy_from_slice(keccak256(key.to_le_bytes()).as_slice());
            (key, value)
        })
        .collect()
}

/// Builds a trie over the given entries without computing its root.
pub fn build_trie(entries: &[(u64, Bytes)]) -> Trie {
    let mut trie = Trie::new();
    for (key, value) in entries {
        trie.insert(*key, value.clone());
    }
    trie
}
