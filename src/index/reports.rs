extern crate alloc;
use alloc::string::String;

/// Number of entries in one letter partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCount {
    pub letter: char,
    pub count: usize,
}

/// Number of entries carrying one category tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Height of one letter partition's tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterHeight {
    pub letter: char,
    pub height: usize,
}
