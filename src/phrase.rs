//! Word-by-word translation and toy sentence generation on top of a
//! [`Lexicon`].
//!
//! These helpers only read the index through its public query surface.

use allocator_api2::alloc::Allocator;
use rand::Rng;

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::index::Lexicon;

/// Category tag drawn for the subject and object of a sentence.
pub const NOUN: &str = "Noun";
/// Category tag drawn for the verb of a sentence.
pub const VERB: &str = "Verb";

/// Which way to translate or compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// From keys to reverse meanings.
    #[default]
    Forward,
    /// From reverse meanings back to keys.
    Reverse,
}

/// Replaces every known word of `text` with its reverse meaning.
///
/// Words are split on whitespace and stripped of everything but ASCII
/// letters before lookup. Unknown words are kept as written. The result is
/// joined with single spaces.
pub fn translate_forward<A: Allocator + Clone>(lexicon: &Lexicon<A>, text: &str) -> String {
    join_words(text.split_whitespace().map(|word| {
        let clean: String = word.chars().filter(char::is_ascii_alphabetic).collect();
        lexicon
            .lookup(&clean)
            .map_or(word, |entry| entry.reverse_meaning())
    }))
}

/// Replaces every word of `text` that is some entry's reverse meaning with
/// that entry's key. Unknown words are kept as written.
pub fn translate_reverse<A: Allocator + Clone>(lexicon: &Lexicon<A>, text: &str) -> String {
    join_words(text.split_whitespace().map(|word| {
        lexicon
            .lookup_by_reverse_meaning(word)
            .map_or(word, |entry| entry.key())
    }))
}

/// Translates `text` in the given direction.
pub fn translate<A: Allocator + Clone>(lexicon: &Lexicon<A>, text: &str, direction: Direction) -> String {
    match direction {
        Direction::Forward => translate_forward(lexicon, text),
        Direction::Reverse => translate_reverse(lexicon, text),
    }
}

/// Builds a three-word sentence from a random subject noun, verb and object
/// noun.
///
/// [`Direction::Forward`] gives `subject verb object` using keys;
/// [`Direction::Reverse`] gives `verb subject object` using reverse meanings.
/// Returns `None` if the lexicon has no nouns or no verbs.
pub fn compose_sentence<A, R>(lexicon: &Lexicon<A>, direction: Direction, rng: &mut R) -> Option<String>
where
    A: Allocator + Clone,
    R: Rng + ?Sized,
{
    let subject = lexicon.sample_random_by_category(NOUN, rng)?;
    let verb = lexicon.sample_random_by_category(VERB, rng)?;
    let object = lexicon.sample_random_by_category(NOUN, rng)?;

    let words = match direction {
        Direction::Forward => [subject.key(), verb.key(), object.key()],
        Direction::Reverse => [
            verb.reverse_meaning(),
            subject.reverse_meaning(),
            object.reverse_meaning(),
        ],
    };
    Some(join_words(words.into_iter()))
}

fn join_words<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words.collect::<Vec<_>>().join(" ")
}
