#![allow(missing_docs)]

#[cfg(test)]
mod tests {
    use alloy_primitives::{keccak256, Bytes, B256, KECCAK256_EMPTY};
    use bintrie::{NodeHasher, Trie};
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Keccak-backed hasher that counts every invocation, so tests can
    /// observe exactly how much hashing a `root()` call performs.
    #[derive(Debug, Default)]
    struct CountingHasher {
        invocations: AtomicUsize,
    }

    impl CountingHasher {
        fn invocations(&self) -> usize {
            self.invocations.load(Ordering::Relaxed)
        }
    }

    impl NodeHasher for CountingHasher {
        fn hash(&self, bytes: &[u8]) -> B256 {
            self.invocations.fetch_add(1, Ordering::Relaxed);
            keccak256(bytes)
        }
    }

    fn value_for(key: u64) -> Bytes {
        Bytes::copy_from_slice(keccak256(key.to_le_bytes()).as_slice())
    }

    fn rebuilt_root(model: &BTreeMap<u64, Bytes>) -> B256 {
        let mut trie = Trie::new();
        for (key, value) in model {
            trie.insert(*key, value.clone());
        }
        trie.root()
    }

    #[test]
    fn round_trip_survives_unrelated_inserts() {
        let mut trie = Trie::new();
        for key in 1..=200u64 {
            trie.insert(key, value_for(key));
        }
        for key in 1..=200u64 {
            assert_eq!(trie.get(key), Some(&value_for(key)));
        }

        for key in 1000..=1200u64 {
            trie.insert(key, value_for(key));
        }
        for key in 1..=200u64 {
            assert_eq!(trie.get(key), Some(&value_for(key)));
        }
    }

    #[test]
    fn overwrite_keeps_only_the_latest_value() {
        let mut trie = Trie::new();
        trie.insert(42, Bytes::from("old"));
        trie.root();
        trie.insert(42, Bytes::from("new"));
        assert_eq!(trie.get(42), Some(&Bytes::from("new")));

        let mut fresh = Trie::new();
        fresh.insert(42, Bytes::from("new"));
        assert_eq!(trie.root(), fresh.root());
    }

    #[test]
    fn root_is_insertion_order_independent() {
        let entries: Vec<(u64, Bytes)> = (0..=100).map(|key| (key, value_for(key))).collect();

        let mut forward = Trie::new();
        for (key, value) in &entries {
            forward.insert(*key, value.clone());
        }

        let mut backward = Trie::new();
        for (key, value) in entries.iter().rev() {
            backward.insert(*key, value.clone());
        }

        // Odd keys first, then even, with a root computed in between.
        let mut interleaved = Trie::new();
        for (key, value) in entries.iter().filter(|(key, _)| key % 2 == 1) {
            interleaved.insert(*key, value.clone());
        }
        interleaved.root();
        for (key, value) in entries.iter().filter(|(key, _)| key % 2 == 0) {
            interleaved.insert(*key, value.clone());
        }

        let expected = forward.root();
        assert_eq!(backward.root(), expected);
        assert_eq!(interleaved.root(), expected);
    }

    #[test]
    fn repeated_root_performs_no_hashing() {
        let mut trie = Trie::with_hasher(CountingHasher::default());
        for key in 1..=100u64 {
            trie.insert(key, value_for(key));
        }

        let first = trie.root();
        let hashed = trie.hasher().invocations();

        let second = trie.root();
        assert_eq!(first, second);
        assert_eq!(trie.hasher().invocations(), hashed);
    }

    #[test]
    fn incremental_roots_cost_path_work_not_trie_size() {
        let mut trie = Trie::with_hasher(CountingHasher::default());
        for key in 1..=256u64 {
            trie.insert(key, value_for(key));
        }
        trie.root();
        let baseline = trie.hasher().invocations();

        // Each insert marks at most bit-length + 1 nodes stale, and each
        // stale node costs at most two hash invocations (value digest + node
        // digest). Keys below 512 have 9-bit paths, so one insert+root cycle
        // costs at most 20 invocations.
        let k = 8u64;
        for key in 300..300 + k {
            trie.insert(key, value_for(key));
            trie.root();
        }
        let spent = trie.hasher().invocations() - baseline;
        assert!(spent <= (k as usize) * 20, "spent {spent} hash invocations");

        // Far below a from-scratch recomputation, which visits all ~257
        // nodes of the populated trie.
        assert!(spent < 257);
    }

    #[test]
    fn empty_trie_root_matches_the_pinned_convention() {
        let mut trie = Trie::new();

        let e = KECCAK256_EMPTY;
        let mut preimage = [0u8; 96];
        preimage[..32].copy_from_slice(e.as_slice());
        preimage[32..64].copy_from_slice(e.as_slice());
        preimage[64..].copy_from_slice(e.as_slice());

        assert_eq!(trie.root(), keccak256(preimage));
        assert_eq!(trie.empty_digest(), e);
    }

    #[test]
    fn foo_bar_example_lookup_results() {
        let mut trie = Trie::new();
        trie.insert(4, Bytes::from("foo"));
        trie.insert(2, Bytes::from("bar"));

        assert_eq!(trie.get(4), Some(&Bytes::from("foo")));
        assert_eq!(trie.get(2), Some(&Bytes::from("bar")));
        assert_eq!(trie.get(1), None);
    }

    #[test]
    fn key_zero_and_prefix_keys() {
        let mut trie = Trie::new();
        trie.insert(0, Bytes::from("at-root"));
        trie.insert(2, Bytes::from("two"));
        trie.insert(6, Bytes::from("six"));

        assert_eq!(trie.get(0), Some(&Bytes::from("at-root")));
        assert_eq!(trie.get(2), Some(&Bytes::from("two")));
        assert_eq!(trie.get(6), Some(&Bytes::from("six")));
    }

    #[test]
    fn empty_value_is_found_absent_key_is_not() {
        let mut trie = Trie::new();
        trie.insert(13, Bytes::new());
        assert_eq!(trie.get(13), Some(&Bytes::new()));
        assert_eq!(trie.get(14), None);
    }

    #[test]
    fn incremental_root_matches_rebuild_under_mixed_workload() {
        // xorshift-driven workload: inserts and overwrites over a small key
        // space, with the incremental root checked against a from-scratch
        // rebuild of the model after every batch.
        let mut state = 0x243f6a8885a308d3u64;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };

        let mut trie = Trie::new();
        let mut model = BTreeMap::new();

        for _batch in 0..20 {
            for _ in 0..10 {
                let key = next() % 1024;
                let value = value_for(next());
                trie.insert(key, value.clone());
                model.insert(key, value);
            }
            assert_eq!(trie.root(), rebuilt_root(&model));
            for key in 0..64u64 {
                assert_eq!(trie.get(key), model.get(&key));
            }
        }
    }
}
