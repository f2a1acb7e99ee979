//! Solvle - CLI
//!
//! Wordle-style assistant: feed it your guesses and the tile feedback, and it
//! narrows the word list and ranks the remaining candidates.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use solvle::{
    commands::{
        SimulateConfig, SuggestConfig, WORDS_PER_PAGE, run_simple, run_simulation, run_suggest,
    },
    core::Word,
    output::{print_simulation_report, print_suggestions},
    ranking::PositionFrequencies,
    solver::Engine,
    wordlists::{ANSWERS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "solvle",
    about = "Wordle assistant: rank the words still possible given your feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom wordlist (five-letter words, one per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant mode (default)
    Simple,

    /// One-shot suggestions for a guess history
    Suggest {
        /// Guess history as word=marks, e.g. crane=--G-Y slate=GG---
        specs: Vec<String>,

        /// Zero-based page of results
        #[arg(short, long, default_value = "0")]
        page: usize,

        /// Words per page
        #[arg(long, default_value_t = WORDS_PER_PAGE)]
        per_page: usize,

        /// Show the aggregated constraints
        #[arg(short, long)]
        verbose: bool,
    },

    /// Simulate the assistant against corpus words
    Simulate {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Test a random sample instead of a prefix
        #[arg(short, long, conflicts_with = "limit")]
        sample: Option<usize>,

        /// Override first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

/// Load the candidate corpus, from a custom file or the embedded list
fn load_corpus(wordlist: Option<&str>) -> Result<Vec<Word>> {
    use solvle::wordlists::loader::load_from_file;

    match wordlist {
        Some(path) => Ok(load_from_file(path)?),
        None => Ok(words_from_slice(ANSWERS)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let corpus = load_corpus(cli.wordlist.as_deref())?;
    if corpus.is_empty() {
        anyhow::bail!("wordlist is empty");
    }

    // A custom corpus needs its frequency table computed at startup; the
    // embedded corpus ships with a precomputed one
    let frequencies = if cli.wordlist.is_some() {
        PositionFrequencies::from_words(&corpus)
    } else {
        PositionFrequencies::embedded().clone()
    };
    let engine = Engine::new(&corpus, &frequencies);

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => run_simple(&engine).map_err(|e| anyhow::anyhow!(e)),
        Commands::Suggest {
            specs,
            page,
            per_page,
            verbose,
        } => {
            let config = SuggestConfig {
                specs,
                page,
                per_page,
            };
            let result = run_suggest(&config, &engine).map_err(|e| anyhow::anyhow!(e))?;
            print_suggestions(&result, verbose);
            Ok(())
        }
        Commands::Simulate {
            limit,
            sample,
            first_word,
        } => {
            let first_word = first_word
                .map(|text| Word::new(&text).map_err(|e| anyhow::anyhow!("first word: {e}")))
                .transpose()?;

            println!("Simulating {} games...", match (limit, sample) {
                (Some(n), _) | (_, Some(n)) => n.min(corpus.len()),
                _ => corpus.len(),
            });

            let config = SimulateConfig {
                limit,
                sample,
                first_word,
                max_guesses: 6,
            };
            let stats = run_simulation(&engine, &config);
            print_simulation_report(&stats);
            Ok(())
        }
    }
}
