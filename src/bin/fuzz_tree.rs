//! AFL fuzz harness for the red-black tree engine.
//!
//! Replays a byte-stream of operations against two maps at once: the
//! leftmost-cached tree under test and `std::collections::BTreeMap` as the
//! reference model. After every stream the harness asserts:
//! 1. Structural validity: root black, no red-red edge, uniform black height
//! 2. Model equivalence: same length and same in-order entry sequence
//! 3. Cache honesty: `first_cached` equals a fresh all-left descent

use std::collections::BTreeMap;

use afl::fuzz;
use redbud::tree::cached::CachedRbTree;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Insert a key (value is the op counter)
    Insert { key: u16 },
    /// Remove a key if present
    Remove { key: u16 },
    /// Remove the cached minimum
    PopMin,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 3;
        let rest = &bytes[1..];

        match op_type {
            0 if rest.len() >= 2 => {
                let key = u16::from_le_bytes([rest[0], rest[1]]);
                Some((FuzzOp::Insert { key }, &rest[2..]))
            }
            1 if rest.len() >= 2 => {
                let key = u16::from_le_bytes([rest[0], rest[1]]);
                Some((FuzzOp::Remove { key }, &rest[2..]))
            }
            2 => Some((FuzzOp::PopMin, rest)),
            _ => None,
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut tree: CachedRbTree<u16, u64> = CachedRbTree::new();
        let mut model: BTreeMap<u16, u64> = BTreeMap::new();
        let mut tick = 0u64;
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Insert { key } => {
                    let expect_duplicate = model.contains_key(&key);
                    match tree.insert(key, tick) {
                        Ok(_) => assert!(!expect_duplicate, "accepted duplicate {key}"),
                        Err(rejected) => {
                            assert!(expect_duplicate, "rejected fresh key {key}");
                            assert_eq!(rejected.key, key);
                        }
                    }
                    model.entry(key).or_insert(tick);
                    tick += 1;
                }

                FuzzOp::Remove { key } => {
                    let expected = model.remove(&key);
                    let got = tree.remove_key(&key);
                    assert_eq!(got.map(|(_, value)| value), expected);
                }

                FuzzOp::PopMin => {
                    if let Some(id) = tree.first_cached() {
                        let (key, value) = tree.remove(id).expect("cached minimum is live");
                        assert_eq!(model.remove(&key), Some(value));
                    } else {
                        assert!(model.is_empty());
                    }
                }
            }

            // CRITICAL INVARIANT: balance and model equivalence after every op
            assert!(tree.is_valid(), "structural invariant broken");
            assert_eq!(tree.len(), model.len(), "length diverged from model");
        }

        // Final sweep: full in-order agreement with the model
        let ours: Vec<(u16, u64)> = tree.iter().map(|(key, value)| (*key, *value)).collect();
        let theirs: Vec<(u16, u64)> = model.iter().map(|(key, value)| (*key, *value)).collect();
        assert_eq!(ours, theirs, "in-order sequence diverged from model");
        assert_eq!(tree.first_cached(), tree.tree().first());
    });
}
