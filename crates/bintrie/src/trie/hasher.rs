//! The pluggable hash function the trie commits with.
use alloy_primitives::{keccak256, B256};

/// A hash function from byte sequences to fixed-size digests.
///
/// The trie is parametric over this choice; any collision-resistant function
/// works. Takes `&self` so instrumented implementations (e.g. an
/// invocation-counting wrapper in tests) can carry interior state.
pub trait NodeHasher {
    /// Digests an arbitrary byte sequence.
    fn hash(&self, bytes: &[u8]) -> B256;
}

/// The default hasher, backed by [`alloy_primitives::keccak256`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

impl NodeHasher for Keccak256Hasher {
    fn hash(&self, bytes: &[u8]) -> B256 {
        keccak256(bytes)
    }
}
