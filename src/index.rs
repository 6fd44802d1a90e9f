use allocator_api2::alloc::{Allocator, Global};
use rand::Rng;

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::entry::Entry;
use crate::error::LexiconError;
use crate::partitions::LetterPartitions;

mod reports;


pub use reports::{CategoryCount, LetterCount, LetterHeight};

/// The word index: 26 letter partitions, each an AVL tree, behind one facade.
///
/// Point operations (`add`, `lookup`, `delete`) touch exactly one partition,
/// chosen by the first letter of the key. Reverse-meaning and category
/// queries scan every partition from `A` to `Z`, each in ascending key
/// order. There is no secondary index.
///
/// The number of entries is kept as a running total, so [`len`](Self::len)
/// does not walk the trees.
///
/// A `Lexicon` is meant for one writer at a time. [`update`](Self::update)
/// in particular is a delete followed by an add; callers sharing a
/// `Lexicon` across threads must hold one exclusive lock for the whole call.
///
/// # Examples
///
/// ```
/// use allocated_lexicon::{Entry, Lexicon};
///
/// let mut lexicon = Lexicon::new();
/// assert!(lexicon.add(Entry::new("apple", "a fruit", "تفاحة", "An apple a day", "Noun")));
/// assert!(!lexicon.add(Entry::new("7x", "", "", "", "")));
///
/// assert_eq!(lexicon.lookup("APPLE").map(Entry::reverse_meaning), Some("تفاحة"));
/// assert_eq!(lexicon.lookup_by_reverse_meaning("تفاحة").map(Entry::key), Some("apple"));
/// assert_eq!(lexicon.len(), 1);
/// ```
#[derive(Debug)]
pub struct Lexicon<A: Allocator + Clone = Global> {
    partitions: LetterPartitions<A>,
    len: usize,
}

impl Lexicon {
    /// Create an empty lexicon using the global allocator.
    pub fn new() -> Self {
        Self::new_in(Global)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Allocator + Clone> Lexicon<A> {
    /// Create an empty lexicon whose tree nodes are allocated with `alloc`.
    pub fn new_in(alloc: A) -> Self {
        Self {
            partitions: LetterPartitions::new_in(alloc),
            len: 0,
        }
    }

    /// Total number of entries across all partitions.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn partitions(&self) -> &LetterPartitions<A> {
        &self.partitions
    }

    /// Adds `entry`.
    ///
    /// # Errors
    ///
    /// [`LexiconError::InvalidKey`] if the key is empty or does not start
    /// with a letter `A..=Z`; [`LexiconError::DuplicateKey`] if the key is
    /// already present, ignoring case.
    pub fn try_add(&mut self, entry: Entry) -> Result<(), LexiconError> {
        let Some(slot) = self.partitions.resolve_mut(entry.key()) else {
            tracing::debug!(key = %entry.key(), "rejected add: invalid key");
            return Err(LexiconError::InvalidKey {
                key: String::from(entry.key()),
            });
        };

        // A key maps to exactly one partition, so checking there is enough.
        if slot.tree().contains(entry.key()) {
            tracing::debug!(key = %entry.key(), "rejected add: duplicate key");
            return Err(LexiconError::DuplicateKey {
                key: String::from(entry.key()),
            });
        }

        let inserted = slot.tree_mut().insert(entry);
        debug_assert!(inserted);
        self.len += 1;
        Ok(())
    }

    /// Adds `entry`, returning `false` if the key is invalid or taken.
    pub fn add(&mut self, entry: Entry) -> bool {
        self.try_add(entry).is_ok()
    }

    /// Returns the entry for `key`, ignoring case.
    pub fn lookup(&self, key: &str) -> Option<&Entry> {
        self.partitions.resolve(key)?.tree().search(key)
    }

    /// Returns the first entry, in partition then key order, whose reverse
    /// meaning is exactly `value`.
    ///
    /// This scans every entry.
    pub fn lookup_by_reverse_meaning(&self, value: &str) -> Option<&Entry> {
        self.entries().find(|entry| entry.reverse_meaning() == value)
    }

    /// Removes and returns the entry for `key`.
    ///
    /// # Errors
    ///
    /// [`LexiconError::InvalidKey`] if `key` cannot belong to any partition,
    /// [`LexiconError::NotFound`] if there is no such entry.
    pub fn try_delete(&mut self, key: &str) -> Result<Entry, LexiconError> {
        let Some(slot) = self.partitions.resolve_mut(key) else {
            return Err(LexiconError::InvalidKey {
                key: String::from(key),
            });
        };
        let Some(removed) = slot.tree_mut().remove(key) else {
            tracing::debug!(key, "delete missed");
            return Err(LexiconError::NotFound {
                key: String::from(key),
            });
        };
        self.len -= 1;
        Ok(removed)
    }

    /// Removes the entry for `key`, returning `false` if there was none.
    pub fn delete(&mut self, key: &str) -> bool {
        self.try_delete(key).is_ok()
    }

    /// Replaces the entry for `key` with `replacement` by deleting `key` and
    /// then adding `replacement`.
    ///
    /// The two steps are not atomic. If `key` is not found nothing changes.
    /// If the delete succeeds but the add is rejected (for example because
    /// `replacement` has a different key that is already taken), the
    /// original entry is gone and is not restored.
    ///
    /// # Errors
    ///
    /// The error of whichever step failed.
    pub fn try_update(&mut self, key: &str, replacement: Entry) -> Result<(), LexiconError> {
        let original = self.try_delete(key)?;
        tracing::debug!(key, replacement = %replacement.key(), "updating entry");
        self.try_add(replacement).inspect_err(|err| {
            tracing::warn!(key = %original.key(), %err, "update lost the original entry");
        })
    }

    /// Boolean form of [`try_update`](Self::try_update).
    pub fn update(&mut self, key: &str, replacement: Entry) -> bool {
        self.try_update(key, replacement).is_ok()
    }

    /// Entries whose key starts with `letter` (either case), in ascending
    /// key order. Empty for a character outside `A..=Z`.
    pub fn entries_in_partition(&self, letter: char) -> impl Iterator<Item = &Entry> + '_ {
        self.partitions
            .slot(letter)
            .into_iter()
            .flat_map(|slot| slot.tree().iter())
    }

    /// Every entry, partition by partition from `A` to `Z`, each partition in
    /// ascending key order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.partitions.slots().flat_map(|slot| slot.tree().iter())
    }

    /// Entries whose category equals `tag`, ignoring case.
    ///
    /// Results are ordered within each partition only, partitions visited
    /// from `A` to `Z`.
    pub fn entries_by_category<'s>(&'s self, tag: &'s str) -> impl Iterator<Item = &'s Entry> + 's {
        self.entries().filter(move |entry| entry.in_category(tag))
    }

    /// Entry count of every partition, `A` to `Z`, including empty ones.
    pub fn count_per_partition(&self) -> Vec<LetterCount> {
        self.partitions
            .slots()
            .map(|slot| LetterCount {
                letter: slot.letter(),
                count: slot.tree().count(),
            })
            .collect()
    }

    /// Entry count of every category present, in order of first appearance.
    ///
    /// Categories are grouped by exact text, so `Noun` and `noun` are
    /// counted separately.
    pub fn count_per_category(&self) -> Vec<CategoryCount> {
        let mut counts: Vec<CategoryCount> = Vec::new();
        for entry in self.entries() {
            match counts.iter_mut().find(|c| c.category == entry.category()) {
                Some(c) => c.count += 1,
                None => counts.push(CategoryCount {
                    category: String::from(entry.category()),
                    count: 1,
                }),
            }
        }
        counts
    }

    /// Tree height of every partition, `A` to `Z`.
    pub fn height_per_partition(&self) -> Vec<LetterHeight> {
        self.partitions
            .slots()
            .map(|slot| LetterHeight {
                letter: slot.letter(),
                height: slot.tree().height(),
            })
            .collect()
    }

    /// Draws one entry uniformly at random from those in category `tag`.
    ///
    /// The matching entries are collected on every call.
    pub fn sample_random_by_category<R: Rng + ?Sized>(&self, tag: &str, rng: &mut R) -> Option<&Entry> {
        let matches: Vec<&Entry> = self.entries().filter(|entry| entry.in_category(tag)).collect();
        if matches.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..matches.len());
        matches.get(index).copied()
    }
}
