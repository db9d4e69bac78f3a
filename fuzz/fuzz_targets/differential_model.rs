#![no_main]

use std::collections::BTreeMap;

use alloy_primitives::{Bytes, B256};
use arbitrary::Arbitrary;
use bintrie::Trie;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Insert { key: u64, value: Vec<u8> },
    Get { key: u64 },
}

#[derive(Debug, Arbitrary)]
struct Input {
    ops: Vec<Op>,
}

fn model_root(model: &BTreeMap<u64, Bytes>) -> B256 {
    let mut trie = Trie::new();
    for (key, value) in model {
        trie.insert(*key, value.clone());
    }
    trie.root()
}

fuzz_target!(|input: Input| {
    let mut trie = Trie::new();
    let mut model = BTreeMap::<u64, Bytes>::new();

    for op in &input.ops {
        match op {
            Op::Insert { key, value } => {
                let value = Bytes::copy_from_slice(value);
                trie.insert(*key, value.clone());
                model.insert(*key, value);
            }
            Op::Get { key } => {
                assert_eq!(trie.get(*key), model.get(key));
            }
        }

        // Validate after each operation so transient divergences are not masked by later ops.
        let expected = model_root(&model);
        let actual = trie.root();
        assert_eq!(actual, expected, "incremental root != rebuilt root");
    }
});
