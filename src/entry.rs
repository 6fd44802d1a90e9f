use core::cmp::Ordering;

extern crate alloc;
use alloc::string::String;

use crate::common::{cmp_keys, keys_eq};

/// One dictionary record.
///
/// Entries are ordered and identified by their [`key`](Entry::key), compared
/// case-insensitively. The derived `PartialEq` compares every field and is
/// meant for checking content, not key identity; use [`Entry::same_key`] for
/// that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Entry {
    key: String,
    meaning: String,
    reverse_meaning: String,
    example: String,
    category: String,
}

impl Entry {
    pub fn new(
        key: impl Into<String>,
        meaning: impl Into<String>,
        reverse_meaning: impl Into<String>,
        example: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            meaning: meaning.into(),
            reverse_meaning: reverse_meaning.into(),
            example: example.into(),
            category: category.into(),
        }
    }

    /// The word itself.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Meaning in the key's own language.
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    /// Meaning in the other language; the target of reverse lookups.
    pub fn reverse_meaning(&self) -> &str {
        &self.reverse_meaning
    }

    pub fn example(&self) -> &str {
        &self.example
    }

    /// Part-of-speech style tag, e.g. `Noun` or `Verb`.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Orders two entries by key, ignoring case.
    pub fn cmp_key(&self, other: &Self) -> Ordering {
        cmp_keys(&self.key, &other.key)
    }

    /// Returns `true` if both entries have the same key, ignoring case.
    pub fn same_key(&self, other: &Self) -> bool {
        keys_eq(&self.key, &other.key)
    }

    /// Returns `true` if this entry's category is `tag`, ignoring case.
    pub fn in_category(&self, tag: &str) -> bool {
        keys_eq(&self.category, tag)
    }
}
