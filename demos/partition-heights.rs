//! Fills a lexicon with random words and prints, per run, the size and
//! height of every partition as CSV (`run,letter,count,height`).

use rand::Rng;

use allocated_lexicon::{Entry, Lexicon};

const RUNS: usize = 10;
const WORDS_PER_RUN: usize = 5000;

fn random_word(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(2..10);
    (0..len).map(|_| char::from(rng.gen_range(b'a'..=b'z'))).collect()
}

fn main() {
    let mut rng = rand::thread_rng();

    println!("run,letter,count,height");
    for run in 0..RUNS {
        let mut lexicon = Lexicon::new();
        let mut duplicates = 0;

        for _ in 0..WORDS_PER_RUN {
            let word = random_word(&mut rng);
            if !lexicon.add(Entry::new(word, "", "", "", "Noun")) {
                duplicates += 1;
            }
        }
        assert_eq!(lexicon.len() + duplicates, WORDS_PER_RUN);

        for (count, height) in lexicon
            .count_per_partition()
            .into_iter()
            .zip(lexicon.height_per_partition())
        {
            println!("{},{},{},{}", run, count.letter, count.count, height.height);
        }
    }
}
