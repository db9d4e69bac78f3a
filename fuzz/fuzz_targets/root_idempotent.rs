#![no_main]

use alloy_primitives::Bytes;
use bintrie::Trie;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|entries: Vec<(u64, Vec<u8>)>| {
    let mut trie = Trie::new();

    for (key, value) in &entries {
        trie.insert(*key, Bytes::copy_from_slice(value));

        let first = trie.root();
        let second = trie.root();
        assert_eq!(first, second, "root must be stable without mutation");
    }
});
