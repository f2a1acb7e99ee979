//! Build script to generate the embedded answer corpus and the letter
//! position-frequency table.
//!
//! Both artifacts are derived from `data/answers.txt`: the corpus becomes a
//! const string array, and the frequency table records, for each letter, the
//! share of corpus words carrying that letter at each of the five positions.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORD_LEN: usize = 5;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let content = fs::read_to_string("data/answers.txt")
        .unwrap_or_else(|e| panic!("Failed to read data/answers.txt: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();

    for word in &words {
        assert!(
            word.len() == WORD_LEN && word.bytes().all(|b| b.is_ascii_lowercase()),
            "Corpus word '{word}' is not a lowercase five-letter word"
        );
    }

    generate_answers(&words, &Path::new(&out_dir).join("answers.rs"));
    generate_frequencies(&words, &Path::new(&out_dir).join("letter_freq.rs"));

    println!("cargo:rerun-if-changed=data/answers.txt");
}

fn generate_answers(words: &[&str], output_path: &Path) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated answer corpus").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "/// Valid answer words, alphabetically ordered ({} words)",
        words.len()
    )
    .unwrap();
    writeln!(output, "pub const ANSWERS: &[&str] = &[").unwrap();
    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in ANSWERS").unwrap();
    writeln!(output, "pub const ANSWERS_COUNT: usize = {};", words.len()).unwrap();
}

fn generate_frequencies(words: &[&str], output_path: &Path) {
    let mut counts = [[0u32; WORD_LEN]; 26];
    for word in words {
        for (pos, byte) in word.bytes().enumerate() {
            counts[(byte - b'a') as usize][pos] += 1;
        }
    }

    let total = words.len() as f64;
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated letter position frequencies").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "/// For each letter a-z, the fraction of corpus words with that letter"
    )
    .unwrap();
    writeln!(output, "/// at each of the five positions (0.0 to 1.0)").unwrap();
    writeln!(
        output,
        "pub const LETTER_POSITION_FREQ: [[f64; {WORD_LEN}]; 26] = ["
    )
    .unwrap();
    for letter_counts in &counts {
        let row: Vec<String> = letter_counts
            .iter()
            .map(|&c| format!("{:?}", f64::from(c) / total))
            .collect();
        writeln!(output, "    [{}],", row.join(", ")).unwrap();
    }
    writeln!(output, "];").unwrap();
}
