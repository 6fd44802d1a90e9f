use core::fmt;

use allocator_api2::alloc::{Allocator, Global};

use crate::entry::Entry;

mod iters;
mod node;

#[cfg(test)]
mod tests;

pub use iters::Iter;
use node::{Link, Placement};

/// A height-balanced (AVL) binary search tree of [`Entry`] values, keyed by
/// case-insensitive [`Entry::key`].
///
/// Every node caches the height of its subtree, so [`height`](Self::height)
/// is O(1). After each insert or delete, every node on the path back to the
/// root has its height recomputed and is rotated if its balance factor has
/// left `-1..=1`. Nodes have no parent pointers; rebalancing happens as the
/// recursion unwinds.
///
/// Nodes are allocated with `A`, which defaults to [`Global`].
///
/// # Examples
///
/// ```
/// use allocated_lexicon::{BalancedTree, Entry};
///
/// let mut tree = BalancedTree::new();
/// assert!(tree.insert(Entry::new("cat", "a small feline", "قطة", "The cat sleeps", "Noun")));
/// assert!(!tree.insert(Entry::new("CAT", "", "", "", "")));
///
/// assert_eq!(tree.search("Cat").map(Entry::meaning), Some("a small feline"));
/// assert_eq!(tree.height(), 1);
/// ```
pub struct BalancedTree<A: Allocator + Clone = Global> {
    root: Link<A>,
    alloc: A,
}

impl BalancedTree {
    /// Create an empty tree using the global allocator.
    pub fn new() -> Self {
        Self::new_in(Global)
    }
}

impl Default for BalancedTree {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Allocator + Clone> BalancedTree<A> {
    /// Create an empty tree whose nodes are allocated with `alloc`.
    pub fn new_in(alloc: A) -> Self {
        Self { root: None, alloc }
    }

    /// Inserts `entry` unless an entry with the same key (ignoring case) is
    /// already present.
    ///
    /// Returns `false`, leaving the tree untouched, on a duplicate key.
    pub fn insert(&mut self, entry: Entry) -> bool {
        node::insert(&mut self.root, entry, &self.alloc) != Placement::Duplicate
    }

    /// Returns the entry whose key equals `key`, ignoring case.
    pub fn search(&self, key: &str) -> Option<&Entry> {
        node::search(&self.root, key)
    }

    /// Returns `true` if the tree holds an entry for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Removes the entry for `key` and returns it.
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        node::remove(&mut self.root, key)
    }

    /// Removes the entry for `key`. Returns `false` if there was none.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove(key).is_some()
    }

    /// Gets an iterator over the entries, sorted by key.
    ///
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter::new(&self.root)
    }

    /// Height of the tree; `0` when empty.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Number of entries. This walks the whole tree.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<A: Allocator + Clone> fmt::Debug for BalancedTree<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(Entry::key)).finish()
    }
}

impl<'s, A: Allocator + Clone> IntoIterator for &'s BalancedTree<A> {
    type IntoIter = Iter<'s, A>;
    type Item = &'s Entry;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
