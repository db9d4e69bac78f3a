//! The path codec: mapping an unsigned integer key to its descent path.

/// The minimal binary expansion of a key, read least-significant bit first.
///
/// The path length is the position of the key's highest set bit plus one, so
/// no padding bits are ever produced and keys whose expansions share a low-bit
/// prefix share the corresponding trie path. Key `0` expands to the empty
/// path, which addresses the root node itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitPath {
    bits: u64,
    len: u32,
}

impl BitPath {
    /// Unpacks a key into its descent path.
    pub const fn unpack(key: u64) -> Self {
        Self {
            bits: key,
            len: u64::BITS - key.leading_zeros(),
        }
    }

    /// Number of bits remaining on the path.
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// True for the empty path, i.e. the path of key `0`.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `i`-th bit of the path, counted from the least significant end.
    pub const fn at(&self, i: usize) -> usize {
        ((self.bits >> i) & 1) as usize
    }

    /// Splits off the next bit to descend by, returning it together with the
    /// rest of the path. `None` once the path is exhausted.
    pub const fn split_first(&self) -> Option<(usize, Self)> {
        if self.len == 0 {
            return None;
        }
        let rest = Self {
            bits: self.bits >> 1,
            len: self.len - 1,
        };
        Some(((self.bits & 1) as usize, rest))
    }
}
