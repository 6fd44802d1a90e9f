use core::iter::FusedIterator;

extern crate alloc;
use alloc::vec::Vec;

use allocator_api2::alloc::Allocator;

use super::node::{Link, TreeNode};
use crate::entry::Entry;

/// An iterator over the entries of a [`BalancedTree`](super::BalancedTree),
/// in ascending key order.
///
/// This struct is created by the [`iter`](super::BalancedTree::iter) method.
/// The stack holds the nodes whose left subtree has been visited but whose own
/// entry has not yet been yielded.
pub struct Iter<'a, A: Allocator> {
    stack: Vec<&'a TreeNode<A>>,
}

impl<'a, A: Allocator> Iter<'a, A> {
    pub(super) fn new(root: &'a Link<A>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link<A>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<A: Allocator> Clone for Iter<'_, A> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, A: Allocator> Iterator for Iter<'a, A> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<A: Allocator> FusedIterator for Iter<'_, A> {}
