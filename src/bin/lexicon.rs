//! Command-line front end for a dictionary file.
//!
//! Usage:
//!   lexicon --dict words.txt lookup apple
//!   lexicon --dict words.txt add cat "a small feline" "قطة" "The cat sleeps" Noun
//!   LEXICON_DICT=words.txt lexicon sentence --count 3 --seed 7

use std::error::Error;
use std::path::PathBuf;

use allocated_lexicon::persist::{load_path, save_path};
use allocated_lexicon::phrase::{self, Direction};
use allocated_lexicon::{Entry, Lexicon};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(name = "lexicon")]
#[command(about = "Query and edit a letter-partitioned bilingual dictionary")]
struct Cli {
    /// Dictionary file, one `key;meaning;reverse;example;category` record per line
    #[arg(short, long, env = "LEXICON_DICT")]
    dict: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a word by key (case-insensitive)
    Lookup { key: String },
    /// Find the word whose reverse meaning is exactly VALUE
    Reverse { value: String },
    /// List every word starting with LETTER
    Letter { letter: char },
    /// List every word in CATEGORY (case-insensitive)
    Category { category: String },
    /// Print per-letter counts and heights, and per-category counts
    Stats,
    /// Add a word and save the dictionary
    Add(EntryArgs),
    /// Replace the word KEY and save the dictionary
    Update {
        key: String,
        #[command(flatten)]
        entry: EntryArgs,
    },
    /// Delete a word and save the dictionary
    Delete { key: String },
    /// Translate text word by word
    Translate {
        /// Translate from reverse meanings back to keys
        #[arg(short, long)]
        reverse: bool,
        text: Vec<String>,
    },
    /// Generate random noun-verb-noun sentences
    Sentence {
        /// Use reverse meanings in verb-subject-object order
        #[arg(short, long)]
        reverse: bool,
        #[arg(short, long, default_value_t = 1)]
        count: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct EntryArgs {
    word: String,
    meaning: String,
    reverse_meaning: String,
    example: String,
    category: String,
}

impl From<EntryArgs> for Entry {
    fn from(args: EntryArgs) -> Self {
        Entry::new(
            args.word,
            args.meaning,
            args.reverse_meaning,
            args.example,
            args.category,
        )
    }
}

fn direction(reverse: bool) -> Direction {
    if reverse {
        Direction::Reverse
    } else {
        Direction::Forward
    }
}

fn print_entry(entry: &Entry) {
    println!(
        "{} [{}]\n  {}\n  {}\n  e.g. {}",
        entry.key(),
        entry.category(),
        entry.meaning(),
        entry.reverse_meaning(),
        entry.example()
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut lexicon = Lexicon::new();
    if cli.dict.exists() {
        let summary = load_path(&mut lexicon, &cli.dict)?;
        if summary.malformed > 0 || summary.rejected > 0 {
            eprintln!(
                "Loaded {} words ({} malformed, {} rejected lines skipped)",
                summary.imported, summary.malformed, summary.rejected
            );
        }
    }

    let modified = match cli.command {
        Command::Lookup { key } => {
            match lexicon.lookup(&key) {
                Some(entry) => print_entry(entry),
                None => println!("No entry for `{key}`"),
            }
            false
        }
        Command::Reverse { value } => {
            match lexicon.lookup_by_reverse_meaning(&value) {
                Some(entry) => print_entry(entry),
                None => println!("No entry with reverse meaning `{value}`"),
            }
            false
        }
        Command::Letter { letter } => {
            for entry in lexicon.entries_in_partition(letter) {
                println!("{}\t{}", entry.key(), entry.meaning());
            }
            false
        }
        Command::Category { category } => {
            for entry in lexicon.entries_by_category(&category) {
                println!("{}\t{}", entry.key(), entry.meaning());
            }
            false
        }
        Command::Stats => {
            println!("Total words: {}", lexicon.len());
            println!("\nLetter\tWords\tHeight");
            let heights = lexicon.height_per_partition();
            for (count, height) in lexicon.count_per_partition().iter().zip(&heights) {
                println!("{}\t{}\t{}", count.letter, count.count, height.height);
            }
            println!("\nCategory\tWords");
            for count in lexicon.count_per_category() {
                println!("{}\t{}", count.category, count.count);
            }
            false
        }
        Command::Add(args) => {
            lexicon.try_add(args.into())?;
            true
        }
        Command::Update { key, entry } => {
            lexicon.try_update(&key, entry.into())?;
            true
        }
        Command::Delete { key } => {
            lexicon.try_delete(&key)?;
            true
        }
        Command::Translate { reverse, text } => {
            let text = text.join(" ");
            println!("{}", phrase::translate(&lexicon, &text, direction(reverse)));
            false
        }
        Command::Sentence {
            reverse,
            count,
            seed,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            for i in 1..=count {
                match phrase::compose_sentence(&lexicon, direction(reverse), &mut rng) {
                    Some(sentence) => println!("{i}. {sentence}"),
                    None => {
                        println!("Not enough nouns and verbs to build a sentence");
                        break;
                    }
                }
            }
            false
        }
    };

    if modified {
        let written = save_path(&lexicon, &cli.dict)?;
        eprintln!("Saved {written} words to {}", cli.dict.display());
    }

    Ok(())
}
