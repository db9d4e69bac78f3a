//! Merkle digest computation with per-node memoization.
//!
//! A node's digest is `hash(hash(value) ++ left ++ right)` where an absent
//! value or child contributes `hash(&[])`. The preimage is three 32-byte
//! digests concatenated in that order; with every component fixed-width, no
//! length prefixes or delimiters are needed for the encoding to be
//! unambiguous. Leaves use the same formula, with both children absent.
use alloy_primitives::B256;

use super::hasher::NodeHasher;
use super::nodes::Node;

impl Node {
    // Returns the subtree digest, recomputing only below stale nodes.
    // Caches the computed digest to avoid unnecessary recomputations.
    pub(super) fn hash<H: NodeHasher>(&mut self, hasher: &H, empty_digest: B256) -> B256 {
        if let Some(hash) = self.hash {
            return hash;
        }

        let value = match &self.value {
            Some(value) => hasher.hash(value),
            None => empty_digest,
        };
        let left = match self.children.get_mut(0) {
            Some(child) => child.hash(hasher, empty_digest),
            None => empty_digest,
        };
        let right = match self.children.get_mut(1) {
            Some(child) => child.hash(hasher, empty_digest),
            None => empty_digest,
        };

        let mut preimage = [0u8; 96];
        preimage[..32].copy_from_slice(value.as_slice());
        preimage[32..64].copy_from_slice(left.as_slice());
        preimage[64..].copy_from_slice(right.as_slice());

        let hash = hasher.hash(&preimage);
        self.hash = Some(hash);
        hash
    }
}
