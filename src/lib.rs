//! A bilingual word index built from 26 letter partitions of AVL trees.
//!
//! Every [`Entry`] is filed under the first letter of its key. Each letter
//! owns one [`BalancedTree`], so point operations only ever touch one small
//! tree, while queries over meanings and categories walk the partitions in
//! `A` to `Z` order.
//!
//! # Quick Start
//!
//! ```
//! use allocated_lexicon::{Entry, Lexicon};
//!
//! let mut lexicon = Lexicon::new();
//! lexicon.add(Entry::new("cat", "a small feline", "قطة", "The cat sleeps", "Noun"));
//! lexicon.add(Entry::new("dog", "a loyal canine", "كلب", "The dog barks", "Noun"));
//!
//! assert_eq!(lexicon.lookup("CAT").map(Entry::meaning), Some("a small feline"));
//! assert_eq!(lexicon.entries_by_category("noun").count(), 2);
//! assert_eq!(lexicon.len(), 2);
//! ```
//!
//! # Layers
//!
//! - [`BalancedTree`]: an AVL tree of entries with cached node heights.
//! - [`LetterPartitions`]: the fixed directory of 26 [`PartitionSlot`]s.
//! - [`Lexicon`]: the facade that routes keys to slots, keeps the running
//!   entry count, and answers the cross-partition queries.
//!
//! On top of the facade sit the [`phrase`] helpers (word-by-word
//! translation, random sentences) and, with the `std` feature, the
//! [`persist`] line format.
//!
//! # Allocators
//!
//! Like the rest of the _allocated_ family, every structure takes an
//! [`allocator_api2`] allocator. [`Lexicon::new`] uses the global
//! allocator; [`Lexicon::new_in`] hands a clone of the given allocator to
//! each of the 26 trees.
//!
//! # Errors
//!
//! The boolean and `Option` operations mirror the plain dictionary surface.
//! The `try_*` variants on [`Lexicon`] report the reason through
//! [`LexiconError`].

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(any(feature = "std", test))]
extern crate std;

extern crate alloc;

mod common;
mod entry;
mod error;
/// The [`Lexicon`] facade and its report types.
pub mod index;
pub mod partitions;
#[cfg(feature = "std")]
pub mod persist;
pub mod phrase;
/// The per-letter AVL tree.
pub mod tree;

pub use common::{cmp_keys, partition_letter};
pub use entry::Entry;
pub use error::LexiconError;
#[cfg(feature = "std")]
pub use error::PersistError;
pub use index::{CategoryCount, LetterCount, LetterHeight, Lexicon};
pub use partitions::{LetterPartitions, PartitionSlot, PARTITION_COUNT};
pub use tree::BalancedTree;
