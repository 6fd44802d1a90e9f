extern crate alloc;
use alloc::string::String;

/// Why a [`Lexicon`](crate::Lexicon) operation did not go through.
///
/// None of these are fatal; the boolean forms of each operation simply
/// return `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    /// An entry with this key (ignoring case) is already present.
    #[error("an entry for `{key}` already exists")]
    DuplicateKey { key: String },

    /// The key is empty or does not start with a letter `A..=Z`.
    #[error("`{key}` does not start with a letter A-Z")]
    InvalidKey { key: String },

    #[error("no entry for `{key}`")]
    NotFound { key: String },
}

impl LexiconError {
    /// The key the failed operation was given.
    pub fn key(&self) -> &str {
        match self {
            Self::DuplicateKey { key } | Self::InvalidKey { key } | Self::NotFound { key } => key,
        }
    }
}

/// Errors from reading or writing the line-per-entry text format.
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record did not split into exactly five `;`-separated fields.
    #[error("malformed record: expected 5 fields, found {found}")]
    Malformed { found: usize },
}
