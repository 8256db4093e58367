// model = "claude-opus-4-5"
// created = 2026-08-07
// modified = 2026-08-07
// driver = "Isaac Clayton"

//! API-level tests for the tree engine: insertion, lookup, removal,
//! traversal, replacement, and the leftmost-cached variant.

use redbud::tree::cached::CachedRbTree;
use redbud::tree::{Color, NodeId, RbTree};

fn tree_of(keys: &[i32]) -> RbTree<i32, i32> {
    let mut tree = RbTree::new();
    for &key in keys {
        tree.insert(key, key * 100).unwrap();
    }
    return tree;
}

fn keys_of(tree: &RbTree<i32, i32>) -> Vec<i32> {
    return tree.iter().map(|(key, _)| *key).collect();
}

// =============================================================================
// Insertion and lookup
// =============================================================================

#[test]
fn insert_single_node() {
    let mut tree = RbTree::new();
    assert!(tree.insert(10, ()).is_ok());
    assert!(!tree.is_empty());
    assert_eq!(tree.len(), 1);
}

#[test]
fn insert_multiple_nodes() {
    let tree = tree_of(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(tree.len(), 10);
    assert_eq!(tree.iter().count(), 10);
    assert!(tree.is_valid());
}

#[test]
fn insert_duplicate_fails_and_changes_nothing() {
    let mut tree = tree_of(&[10]);
    let before = keys_of(&tree);

    let err = tree.insert(10, -1).unwrap_err();
    assert_eq!(err.key, 10);
    assert_eq!(err.value, -1);
    assert_eq!(tree.len(), 1);
    assert_eq!(keys_of(&tree), before);
    assert_eq!(tree.get(&10), Some(&1000));
}

#[test]
fn search_existing_nodes() {
    let keys: Vec<i32> = (0..10).map(|i| i * 2).collect();
    let tree = tree_of(&keys);

    for key in &keys {
        let id = tree.find(key).expect("inserted key must be found");
        assert_eq!(tree.key(id), Some(key));
    }
}

#[test]
fn search_missing_nodes() {
    let keys: Vec<i32> = (0..10).map(|i| i * 2).collect();
    let tree = tree_of(&keys);

    for i in 0..10 {
        assert_eq!(tree.find(&(i * 2 + 1)), None);
    }
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn delete_node() {
    let mut tree = tree_of(&(0..10).collect::<Vec<_>>());

    let id = tree.find(&5).unwrap();
    assert_eq!(tree.remove(id), Ok((5, 500)));

    assert_eq!(tree.find(&5), None);
    assert_eq!(tree.len(), 9);
    assert!(tree.is_valid());
}

#[test]
fn delete_multiple_nodes() {
    let mut tree = tree_of(&(0..32).collect::<Vec<_>>());

    for key in [20, 10, 15] {
        assert!(tree.remove_key(&key).is_some());
        assert!(tree.is_valid(), "invalid after removing {key}");
    }

    for key in [20, 10, 15] {
        assert_eq!(tree.find(&key), None);
    }
    assert_eq!(tree.len(), 29);

    let expected: Vec<i32> = (0..32).filter(|key| ![20, 10, 15].contains(key)).collect();
    assert_eq!(keys_of(&tree), expected);
}

#[test]
fn delete_sole_node_leaves_empty_tree() {
    let mut tree = tree_of(&[42]);
    tree.remove_key(&42).unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.first(), None);
    assert!(tree.is_valid());
}

#[test]
fn delete_red_leaf() {
    // 3 links in as a red leaf under 5.
    let mut tree = tree_of(&[10, 5, 15, 3]);

    tree.remove_key(&3).unwrap();

    assert_eq!(tree.find(&3), None);
    for key in [10, 5, 15] {
        assert!(tree.contains_key(&key));
    }
    assert!(tree.is_valid());
}

#[test]
fn delete_black_node_promotes_red_child() {
    // Shape after the four inserts:
    //      10(B)
    //     /    \
    //    5(B)  15(B)
    //   /
    //  3(R)
    let mut tree = tree_of(&[10, 5, 15, 3]);
    assert_eq!(tree.color(tree.find(&5).unwrap()), Some(Color::Black));
    assert_eq!(tree.color(tree.find(&3).unwrap()), Some(Color::Red));

    tree.remove_key(&5).unwrap();

    assert_eq!(tree.find(&5), None);
    let three = tree.find(&3).expect("3 must survive");
    assert_eq!(tree.color(three), Some(Color::Black));
    assert!(tree.is_valid());
}

// =============================================================================
// Traversal
// =============================================================================

#[test]
fn first_node_is_minimum() {
    let tree = tree_of(&(0..10).rev().collect::<Vec<_>>());
    assert_eq!(tree.key(tree.first().unwrap()), Some(&0));
}

#[test]
fn last_node_is_maximum() {
    let tree = tree_of(&(0..10).collect::<Vec<_>>());
    assert_eq!(tree.key(tree.last().unwrap()), Some(&9));
}

#[test]
fn iterate_forward_in_sorted_order() {
    let tree = tree_of(&[5, 2, 8, 1, 9, 3, 7, 4, 6, 0]);

    let mut expected = 0;
    let mut cursor = tree.first();
    while let Some(id) = cursor {
        assert_eq!(tree.key(id), Some(&expected));
        expected += 1;
        cursor = tree.next(id);
    }
    assert_eq!(expected, 10);
}

#[test]
fn iterate_backward_in_reverse_order() {
    let tree = tree_of(&(0..10).collect::<Vec<_>>());

    let mut expected = 9;
    let mut cursor = tree.last();
    while let Some(id) = cursor {
        assert_eq!(tree.key(id), Some(&expected));
        expected -= 1;
        cursor = tree.prev(id);
    }
    assert_eq!(expected, -1);
}

#[test]
fn empty_tree_operations() {
    let tree: RbTree<i32, i32> = RbTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    assert_eq!(tree.iter().count(), 0);
    assert_eq!(tree.height(), 0);
}

// =============================================================================
// Scale and balance
// =============================================================================

#[test]
fn large_number_of_insertions() {
    let mut tree = RbTree::new();
    for key in 0..1000 {
        assert!(tree.insert(key, key).is_ok());
    }

    assert_eq!(tree.len(), 1000);
    assert!(tree.is_valid());
    // Worst-case red-black height: 2 * log2(n + 1), about 20 for n = 1000.
    assert!(tree.height() <= 20, "height {} exceeds bound", tree.height());

    for key in 0..1000 {
        let id = tree.find(&key).expect("every key must be findable");
        assert_eq!(tree.value(id), Some(&key));
    }
}

#[test]
fn interleaved_inserts_and_removes_stay_balanced() {
    let mut tree = RbTree::new();
    for key in 0..256 {
        tree.insert(key, ()).unwrap();
    }
    // Drop every third key, then refill a shifted range.
    for key in (0..256).step_by(3) {
        tree.remove_key(&key).unwrap();
        assert!(tree.is_valid());
    }
    for key in 256..384 {
        tree.insert(key, ()).unwrap();
    }
    assert!(tree.is_valid());

    let keys: Vec<i32> = tree.iter().map(|(key, _)| *key).collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(keys, sorted);
}

// =============================================================================
// Replacement
// =============================================================================

#[test]
fn replace_node_keeps_position_and_invalidates_old_handle() {
    let mut tree = tree_of(&(0..10).collect::<Vec<_>>());

    let old = tree.find(&5).unwrap();
    let (new, old_key, old_value) = tree.replace(old, 5, 555).unwrap();

    assert_eq!((old_key, old_value), (5, 500));
    let found = tree.find(&5).unwrap();
    assert_eq!(found, new);
    assert_ne!(found, old);
    assert_eq!(tree.value(found), Some(&555));
    assert_eq!(tree.key(old), None);
    assert_eq!(tree.len(), 10);
    assert!(tree.is_valid());
    assert_eq!(keys_of(&tree), (0..10).collect::<Vec<_>>());
}

// =============================================================================
// Cached root
// =============================================================================

#[test]
fn cached_root_operations() {
    let mut tree: CachedRbTree<i32, i32> = CachedRbTree::new();
    for key in 0..10 {
        tree.insert(key, key).unwrap();
    }

    let leftmost = tree.first_cached().expect("non-empty tree has a minimum");
    assert_eq!(tree.tree().key(leftmost), Some(&0));
    // O(1) answer must agree with the full descent.
    assert_eq!(tree.first_cached(), tree.first());
}

#[test]
fn cached_root_tracks_mutations() {
    let mut tree: CachedRbTree<i32, i32> = CachedRbTree::new();
    let mut reference: Vec<NodeId> = Vec::new();

    for key in [50, 20, 80, 10, 60] {
        reference.push(tree.insert(key, key).unwrap());
        assert_eq!(tree.first_cached(), tree.first());
    }
    // Remove the minimum twice, then an interior node.
    tree.remove_key(&10).unwrap();
    assert_eq!(tree.first_cached(), tree.first());
    tree.remove_key(&20).unwrap();
    assert_eq!(tree.first_cached(), tree.first());
    tree.remove_key(&60).unwrap();
    assert_eq!(tree.first_cached(), tree.first());
    assert!(tree.is_valid());
}
