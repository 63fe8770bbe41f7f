//! Randomized structural-invariant tests.
//!
//! Every interleaving of insertions and removals must leave the tree with a
//! black root, no red-red edge, uniform black heights, sorted traversal and
//! an accurate element count. A `BTreeSet`/`BTreeMap` model provides the
//! expected contents.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use arbor_rbtree::RbTree;

#[derive(Debug, Clone)]
enum Op {
    Insert(u16),
    Remove(u16),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..500u16).prop_map(Op::Insert),
        (0..500u16).prop_map(Op::Remove),
    ]
}

fn check(tree: &RbTree<u16>) -> Result<(), TestCaseError> {
    tree.validate().map_err(TestCaseError::fail)
}

proptest! {
    // Long interleavings are the expensive part; fewer cases, more ops.
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn invariants_hold_under_interleavings(
        ops in prop::collection::vec(op_strategy(), 0..10_000),
    ) {
        let mut tree = RbTree::new();
        let mut model = BTreeSet::new();
        for op in ops {
            match op {
                Op::Insert(key) => {
                    let (_, inserted) = tree.insert_unique(key).unwrap();
                    prop_assert_eq!(inserted, model.insert(key));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(tree.remove(&key), model.take(&key));
                }
            }
            check(&tree)?;
            prop_assert_eq!(tree.len(), model.len());
        }
        let contents: Vec<u16> = tree.iter().copied().collect();
        let expected: Vec<u16> = model.into_iter().collect();
        prop_assert_eq!(contents, expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn unique_insert_counts_duplicates_once(
        keys in prop::collection::vec(0..200u16, 0..1000),
    ) {
        let mut tree = RbTree::new();
        let mut distinct = BTreeSet::new();
        for &key in &keys {
            tree.insert_unique(key).unwrap();
            distinct.insert(key);
        }
        // N inserts with D duplicates leave N - D elements.
        prop_assert_eq!(tree.len(), distinct.len());
        check(&tree)?;
    }

    #[test]
    fn multi_insert_never_rejects(
        keys in prop::collection::vec(0..50u16, 0..600),
    ) {
        let mut tree = RbTree::new();
        let mut counts: BTreeMap<u16, usize> = BTreeMap::new();
        for &key in &keys {
            tree.insert_multi(key).unwrap();
            *counts.entry(key).or_default() += 1;
        }
        prop_assert_eq!(tree.len(), keys.len());
        check(&tree)?;

        // Equal keys sit adjacent, so traversal equals the sorted input.
        let traversal: Vec<u16> = tree.iter().copied().collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(traversal, sorted);
        for (key, count) in counts {
            let seen = tree.iter().filter(|&&k| k == key).count();
            prop_assert_eq!(seen, count);
        }
    }

    #[test]
    fn deleting_minimum_drains_in_order(
        keys in prop::collection::btree_set(any::<u16>(), 0..800),
    ) {
        let mut tree = RbTree::new();
        for &key in &keys {
            tree.insert_unique(key).unwrap();
        }
        let mut drained = Vec::new();
        while !tree.is_empty() {
            let mut cursor = tree.cursor_front_mut();
            drained.push(cursor.remove_current().unwrap());
            check(&tree)?;
        }
        let expected: Vec<u16> = keys.into_iter().collect();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn clone_is_independent(
        keys in prop::collection::btree_set(0..300u16, 1..200),
    ) {
        let mut original = RbTree::new();
        for &key in &keys {
            original.insert_unique(key).unwrap();
        }
        let mut copy = original.clone();
        check(&copy)?;

        // Mutating the copy must not reach the original.
        for key in keys.iter().take(keys.len() / 2) {
            copy.remove(key);
        }
        copy.insert_unique(9999).unwrap();
        let untouched: Vec<u16> = original.iter().copied().collect();
        let expected: Vec<u16> = keys.iter().copied().collect();
        prop_assert_eq!(untouched, expected);
        check(&original)?;
        check(&copy)?;
    }

    #[test]
    fn merge_unique_builds_the_union(
        left in prop::collection::btree_set(0..200u16, 0..120),
        right in prop::collection::btree_set(0..200u16, 0..120),
    ) {
        let mut target = RbTree::new();
        for &key in &left {
            target.insert_unique(key).unwrap();
        }
        let mut source = RbTree::new();
        for &key in &right {
            source.insert_unique(key).unwrap();
        }

        target.merge_unique(&mut source).unwrap();
        prop_assert!(source.is_empty());
        check(&target)?;
        check(&source)?;

        let merged: Vec<u16> = target.iter().copied().collect();
        let expected: Vec<u16> = left.union(&right).copied().collect();
        prop_assert_eq!(merged, expected);
    }
}
