//! The fixed A-Z directory of per-letter trees.

use core::slice;

use allocator_api2::alloc::{Allocator, Global};
use generic_array::sequence::GenericSequence;
use generic_array::GenericArray;
use typenum::{Unsigned, U26};

use crate::common::partition_letter;
use crate::tree::BalancedTree;

/// Number of partitions, one per letter `A..=Z`.
pub const PARTITION_COUNT: usize = U26::USIZE;

type Slots<A> = GenericArray<PartitionSlot<A>, U26>;

/// One letter of the directory and the tree holding every key that starts
/// with it.
#[derive(Debug)]
pub struct PartitionSlot<A: Allocator + Clone = Global> {
    letter: char,
    tree: BalancedTree<A>,
}

impl<A: Allocator + Clone> PartitionSlot<A> {
    fn new_in(letter: char, alloc: A) -> Self {
        Self {
            letter,
            tree: BalancedTree::new_in(alloc),
        }
    }

    /// The uppercase letter this slot serves.
    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn tree(&self) -> &BalancedTree<A> {
        &self.tree
    }

    pub(crate) fn tree_mut(&mut self) -> &mut BalancedTree<A> {
        &mut self.tree
    }
}

/// A directory of [`PARTITION_COUNT`] slots, created once in letter order.
///
/// Slot `i` serves the letter `'A' + i`. Slots are never added or removed;
/// only the trees inside them change.
#[derive(Debug)]
pub struct LetterPartitions<A: Allocator + Clone = Global> {
    slots: Slots<A>,
}

impl LetterPartitions {
    pub fn new() -> Self {
        Self::new_in(Global)
    }
}

impl Default for LetterPartitions {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Allocator + Clone> LetterPartitions<A> {
    /// Creates the 26 empty slots, each tree allocating from a clone of
    /// `alloc`.
    pub fn new_in(alloc: A) -> Self {
        let slots: Slots<A> =
            GenericArray::generate(|i| PartitionSlot::new_in(letter_at(i), alloc.clone()));
        Self { slots }
    }

    /// The slot `key` belongs to, or `None` if its first character is not
    /// a letter `A..=Z` in either case.
    pub fn resolve(&self, key: &str) -> Option<&PartitionSlot<A>> {
        self.slots.get(slot_index(key)?)
    }

    pub(crate) fn resolve_mut(&mut self, key: &str) -> Option<&mut PartitionSlot<A>> {
        self.slots.get_mut(slot_index(key)?)
    }

    /// The slot for `letter`, in either case.
    pub fn slot(&self, letter: char) -> Option<&PartitionSlot<A>> {
        let mut buf = [0; 4];
        self.resolve(letter.encode_utf8(&mut buf))
    }

    /// Iterates all slots from `A` to `Z`.
    pub fn slots(&self) -> slice::Iter<'_, PartitionSlot<A>> {
        self.slots.iter()
    }
}

impl<'s, A: Allocator + Clone> IntoIterator for &'s LetterPartitions<A> {
    type IntoIter = slice::Iter<'s, PartitionSlot<A>>;
    type Item = &'s PartitionSlot<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots()
    }
}

fn slot_index(key: &str) -> Option<usize> {
    partition_letter(key).map(|letter| usize::from(letter as u8 - b'A'))
}

fn letter_at(index: usize) -> char {
    debug_assert!(index < PARTITION_COUNT);
    char::from(b'A' + index as u8)
}
