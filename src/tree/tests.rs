extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use core::cmp::Ordering;
use std::collections::BTreeMap;

use allocated::CountingAllocator;
use allocator_api2::alloc::Allocator;
use itertools::{assert_equal, Itertools};
use proptest::prelude::*;

use super::node::Link;
use super::*;
use crate::common::cmp_keys;

fn word(key: &str) -> Entry {
    Entry::new(key, "", "", "", "")
}

/// Checks heights, balance factors and ordering for the whole subtree,
/// returning its height.
fn check_subtree<A: Allocator>(link: &Link<A>) -> usize {
    let Some(node) = link else {
        return 0;
    };
    let left = check_subtree(&node.left);
    let right = check_subtree(&node.right);

    assert_eq!(
        node.height,
        1 + left.max(right),
        "stale height at {:?}",
        node.entry.key()
    );
    assert!(
        left.abs_diff(right) <= 1,
        "unbalanced at {:?}: {} vs {}",
        node.entry.key(),
        left,
        right
    );
    if let Some(l) = &node.left {
        assert_eq!(cmp_keys(l.entry.key(), node.entry.key()), Ordering::Less);
    }
    if let Some(r) = &node.right {
        assert_eq!(cmp_keys(r.entry.key(), node.entry.key()), Ordering::Greater);
    }
    node.height
}

fn assert_avl<A: Allocator + Clone>(tree: &BalancedTree<A>) {
    assert_eq!(check_subtree(&tree.root), tree.height());
    for (a, b) in tree.iter().tuple_windows() {
        assert_eq!(a.cmp_key(b), Ordering::Less, "{:?} before {:?}", a.key(), b.key());
    }
}

fn keys<A: Allocator + Clone>(tree: &BalancedTree<A>) -> Vec<&str> {
    tree.iter().map(Entry::key).collect()
}

fn root_key<A: Allocator + Clone>(tree: &BalancedTree<A>) -> Option<&str> {
    tree.root.as_ref().map(|node| node.entry.key())
}

#[test]
fn test_empty() {
    let tree = BalancedTree::new();

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.count(), 0);
    assert_eq!(tree.iter().next(), None);
    assert_eq!(tree.search("anything"), None);
    assert!(!tree.contains(""));
}

#[test]
fn test_one() {
    let mut tree = BalancedTree::new();
    assert!(tree.insert(Entry::new("cat", "a small feline", "قطة", "The cat sleeps", "Noun")));

    assert!(!tree.is_empty());
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.count(), 1);
    assert_eq!(keys(&tree), ["cat"]);

    let found = tree.search("CAT").unwrap();
    assert_eq!(found.meaning(), "a small feline");
    assert_eq!(found.reverse_meaning(), "قطة");
    assert_eq!(found.example(), "The cat sleeps");
    assert_eq!(found.category(), "Noun");
}

#[test]
fn test_descending_inserts_rotate_right() {
    let mut tree = BalancedTree::new();
    for key in ["C", "B", "A"] {
        assert!(tree.insert(word(key)));
    }

    let root = tree.root.as_ref().unwrap();
    assert_eq!(root.entry.key(), "B");
    assert_eq!(root.height, 2);

    let left = root.left.as_ref().unwrap();
    assert_eq!(left.entry.key(), "A");
    assert_eq!(left.height, 1);

    let right = root.right.as_ref().unwrap();
    assert_eq!(right.entry.key(), "C");
    assert_eq!(right.height, 1);

    assert_avl(&tree);
}

#[test]
fn test_ascending_inserts_rotate_left() {
    let mut tree = BalancedTree::new();
    for key in ["a", "b", "c"] {
        assert!(tree.insert(word(key)));
    }

    assert_eq!(root_key(&tree), Some("b"));
    assert_eq!(tree.height(), 2);
    assert_avl(&tree);
}

#[test]
fn test_left_right_insert() {
    let mut tree = BalancedTree::new();
    for key in ["c", "a", "b"] {
        assert!(tree.insert(word(key)));
    }

    assert_eq!(root_key(&tree), Some("b"));
    assert_eq!(keys(&tree), ["a", "b", "c"]);
    assert_eq!(tree.height(), 2);
    assert_avl(&tree);
}

#[test]
fn test_right_left_insert() {
    let mut tree = BalancedTree::new();
    for key in ["a", "c", "b"] {
        assert!(tree.insert(word(key)));
    }

    assert_eq!(root_key(&tree), Some("b"));
    assert_eq!(tree.height(), 2);
    assert_avl(&tree);
}

#[test]
fn test_delete_root_of_three() {
    let mut tree = BalancedTree::new();
    for key in ["C", "B", "A"] {
        tree.insert(word(key));
    }

    assert!(tree.delete("B"));

    assert_eq!(keys(&tree), ["A", "C"]);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.count(), 2);
    // The in-order successor takes the root's place.
    assert_eq!(root_key(&tree), Some("C"));
    assert_avl(&tree);
}

#[test]
fn test_duplicate_insert_is_rejected() {
    let mut tree = BalancedTree::new();
    for key in ["mango", "kiwi", "pear", "lime"] {
        assert!(tree.insert(word(key)));
    }
    let before: Vec<Entry> = tree.iter().cloned().collect();
    let height = tree.height();

    assert!(!tree.insert(Entry::new("KIWI", "changed", "", "", "")));
    assert!(!tree.insert(word("Mango")));

    assert_equal(tree.iter(), before.iter());
    assert_eq!(tree.height(), height);
    assert_eq!(tree.search("kiwi").unwrap().meaning(), "");
}

#[test]
fn test_delete_missing_key() {
    let mut tree = BalancedTree::new();
    assert!(!tree.delete("ghost"));

    for key in ["b", "a", "c"] {
        tree.insert(word(key));
    }
    assert!(!tree.delete("d"));
    assert!(!tree.delete(""));
    assert_eq!(tree.remove("bb"), None);

    assert_eq!(keys(&tree), ["a", "b", "c"]);
    assert_eq!(tree.height(), 2);
}

#[test]
fn test_delete_is_case_insensitive() {
    let mut tree = BalancedTree::new();
    tree.insert(Entry::new("Apple", "fruit", "", "", ""));

    let removed = tree.remove("aPPLE").unwrap();
    assert_eq!(removed.key(), "Apple");
    assert_eq!(removed.meaning(), "fruit");
    assert!(tree.is_empty());
}

#[test]
fn test_delete_everything() {
    let mut tree = BalancedTree::new();
    let words: Vec<String> = (0..64).map(|i| std::format!("w{:02}", i)).collect();
    for w in &words {
        assert!(tree.insert(word(w)));
    }
    assert_eq!(tree.count(), 64);
    assert_eq!(tree.height(), 7);
    assert_avl(&tree);

    for w in words.iter().rev() {
        assert!(tree.delete(w));
        assert_avl(&tree);
    }

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.count(), 0);
}

#[test]
fn test_iter_is_restartable() {
    let mut tree = BalancedTree::new();
    for key in ["delta", "alpha", "charlie", "bravo", "echo"] {
        tree.insert(word(key));
    }

    let first = keys(&tree);
    let second: Vec<&str> = (&tree).into_iter().map(Entry::key).collect();
    assert_eq!(first, ["alpha", "bravo", "charlie", "delta", "echo"]);
    assert_eq!(first, second);

    let mut iter = tree.iter();
    iter.next();
    let rest: Vec<&str> = iter.clone().map(Entry::key).collect();
    assert_eq!(rest, ["bravo", "charlie", "delta", "echo"]);
    assert_equal(iter.map(Entry::key), rest);
}

#[test]
fn test_mixed_case_keys_sort_together() {
    let mut tree = BalancedTree::new();
    for key in ["banana", "Apple", "cherry", "apricot", "Blueberry"] {
        tree.insert(word(key));
    }

    assert_eq!(
        keys(&tree),
        ["Apple", "apricot", "banana", "Blueberry", "cherry"]
    );
}

#[test]
fn test_debug_lists_keys() {
    let mut tree = BalancedTree::new();
    tree.insert(word("b"));
    tree.insert(word("a"));

    assert_eq!(std::format!("{:?}", tree), r#"["a", "b"]"#);
}

#[test]
fn test_nodes_are_freed() {
    let alloc = CountingAllocator::default();
    {
        let mut tree = BalancedTree::new_in(&alloc);
        for i in 0..100 {
            tree.insert(word(&std::format!("k{:03}", i)));
        }
        assert_eq!(alloc.n_allocations(), 100);

        // Duplicates must not allocate.
        tree.insert(word("K000"));
        assert_eq!(alloc.n_allocations(), 100);

        for i in (0..100).step_by(2) {
            assert!(tree.delete(&std::format!("k{:03}", i)));
        }
        assert_eq!(alloc.n_deallocations(), 50);
        assert_avl(&tree);
    }

    assert_eq!(alloc.net_allocations(), 0);
    assert_eq!(alloc.n_deallocations(), 100);
}

#[derive(Debug, Clone)]
enum Op {
    Insert(String),
    Delete(String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-eA-E]{1,3}".prop_map(Op::Insert),
        "[a-eA-E]{1,3}".prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn test_random_operations_keep_invariants(ops in prop::collection::vec(op(), 0..300)) {
        let alloc = CountingAllocator::default();
        let mut tree = BalancedTree::new_in(&alloc);
        let mut model: BTreeMap<String, String> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    let fresh = !model.contains_key(&key.to_lowercase());
                    prop_assert_eq!(tree.insert(word(&key)), fresh);
                    if fresh {
                        model.insert(key.to_lowercase(), key);
                    }
                }
                Op::Delete(key) => {
                    let removed = model.remove(&key.to_lowercase());
                    prop_assert_eq!(tree.remove(&key).map(|e| String::from(e.key())), removed);
                }
            }
            assert_avl(&tree);
        }

        prop_assert_eq!(tree.count(), model.len());
        assert_equal(tree.iter().map(Entry::key), model.values().map(String::as_str));
        prop_assert_eq!(alloc.n_allocations() - alloc.n_deallocations(), model.len());
    }
}

proptest! {
    #[test]
    fn test_height_is_logarithmic(keys in prop::collection::btree_set("[a-z]{1,8}", 1..500)) {
        let mut tree = BalancedTree::new();
        for key in &keys {
            prop_assert!(tree.insert(word(key)));
        }

        // AVL bound: h < 1.4405 * log2(n + 2), loosened to integer arithmetic.
        let log2 = (keys.len() + 2).ilog2() as usize + 1;
        prop_assert!(
            tree.height() * 100 <= 145 * log2,
            "height {} for {} keys",
            tree.height(),
            keys.len()
        );
        assert_avl(&tree);
    }
}
