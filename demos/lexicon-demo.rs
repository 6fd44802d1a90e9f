//! Walks through the word index: adding, looking up, updating and deleting
//! entries, then the category and partition reports and the phrase helpers.

use allocated_lexicon::phrase::{self, Direction};
use allocated_lexicon::{Entry, Lexicon, LexiconError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Building the index ===\n");
    let mut lexicon = build()?;

    println!("\n=== Queries ===\n");
    queries(&lexicon);

    println!("\n=== Edits ===\n");
    edits(&mut lexicon)?;

    println!("\n=== Phrases ===\n");
    phrases(&lexicon);

    Ok(())
}

fn build() -> Result<Lexicon, LexiconError> {
    let mut lexicon = Lexicon::new();

    for entry in [
        Entry::new("cat", "a small feline", "قطة", "The cat sleeps", "Noun"),
        Entry::new("dog", "a loyal canine", "كلب", "The dog barks", "Noun"),
        Entry::new("bird", "a feathered animal", "طائر", "The bird sings", "Noun"),
        Entry::new("chases", "runs after", "يطارد", "The dog chases the cat", "Verb"),
        Entry::new("sees", "looks at", "يرى", "The cat sees the bird", "Verb"),
        Entry::new("big", "large", "كبير", "A big dog", "Adjective"),
    ] {
        lexicon.try_add(entry)?;
    }
    println!("Added {} words", lexicon.len());

    // Rejected without touching the index.
    for entry in [
        Entry::new("CAT", "duplicate", "", "", "Noun"),
        Entry::new("42", "not a word", "", "", "Noun"),
    ] {
        if let Err(err) = lexicon.try_add(entry) {
            println!("Rejected: {err}");
        }
    }

    Ok(lexicon)
}

fn queries(lexicon: &Lexicon) {
    if let Some(entry) = lexicon.lookup("Dog") {
        println!("dog -> {} / {}", entry.meaning(), entry.reverse_meaning());
    }
    if let Some(entry) = lexicon.lookup_by_reverse_meaning("طائر") {
        println!("طائر -> {}", entry.key());
    }

    let c_words: Vec<&str> = lexicon.entries_in_partition('c').map(Entry::key).collect();
    println!("Words under C: {c_words:?}");

    let verbs: Vec<&str> = lexicon.entries_by_category("verb").map(Entry::key).collect();
    println!("Verbs: {verbs:?}");

    for count in lexicon.count_per_category() {
        println!("  {}: {}", count.category, count.count);
    }
    for (count, height) in lexicon
        .count_per_partition()
        .iter()
        .zip(lexicon.height_per_partition())
        .filter(|(count, _)| count.count > 0)
    {
        println!("  {}: {} words, height {}", count.letter, count.count, height.height);
    }
}

fn edits(lexicon: &mut Lexicon) -> Result<(), LexiconError> {
    lexicon.try_update("big", Entry::new("big", "very large", "كبير", "A big house", "Adjective"))?;
    println!("big -> {:?}", lexicon.lookup("big").map(Entry::meaning));

    let removed = lexicon.try_delete("bird")?;
    println!("Deleted {}, {} words left", removed.key(), lexicon.len());

    // An update that renames onto a taken key loses the original.
    if let Err(err) = lexicon.try_update("sees", Entry::new("chases", "", "", "", "Verb")) {
        println!("Update failed ({err}); sees present: {}", lexicon.lookup("sees").is_some());
    }

    Ok(())
}

fn phrases(lexicon: &Lexicon) {
    println!("{}", phrase::translate(lexicon, "The dog chases the cat", Direction::Forward));
    println!("{}", phrase::translate(lexicon, "يطارد كلب قطة", Direction::Reverse));

    let mut rng = StdRng::seed_from_u64(2024);
    for direction in [Direction::Forward, Direction::Reverse] {
        if let Some(sentence) = phrase::compose_sentence(lexicon, direction, &mut rng) {
            println!("{direction:?}: {sentence}");
        }
    }
}
