//! Batch simulation harness
//!
//! Replays the solver against every corpus word (or a sample). Each game
//! guesses the top-ranked candidate, scores it against the hidden answer,
//! feeds the result back in, and repeats for up to six turns. Games own
//! their histories independently, so they run in parallel.

use crate::core::{GuessFeedback, Word};
use crate::solver::Engine;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulateConfig {
    /// Test only the first N corpus words
    pub limit: Option<usize>,
    /// Test a random sample of N corpus words instead of a prefix
    pub sample: Option<usize>,
    /// Force this word as every game's first guess
    pub first_word: Option<Word>,
    /// Guesses allowed per game
    pub max_guesses: usize,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            limit: None,
            sample: None,
            first_word: None,
            max_guesses: 6,
        }
    }
}

/// Result of one simulated game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub answer: String,
    pub guesses: Vec<String>,
    pub solved: bool,
}

/// Aggregate statistics over a simulation run
#[derive(Debug)]
pub struct SimulationStats {
    pub total: usize,
    pub solved: usize,
    pub failed: usize,
    /// Number of solved games keyed by guesses taken
    pub distribution: HashMap<usize, usize>,
    pub average_guesses: f64,
    pub total_time: Duration,
    /// Answers the solver failed to reach, with the guesses it burned
    pub failures: Vec<GameOutcome>,
    /// Hardest solved answers (most guesses), worst first
    pub worst: Vec<(String, usize)>,
}

/// Play one game to completion
fn play_game(engine: &Engine, answer: &Word, config: &SimulateConfig) -> GameOutcome {
    let mut history: Vec<GuessFeedback> = Vec::new();
    let mut guesses: Vec<String> = Vec::new();

    for turn in 1..=config.max_guesses {
        let forced = if turn == 1 { config.first_word.as_ref() } else { None };
        let guess: Word = if let Some(first) = forced {
            first.clone()
        } else {
            let candidates = engine.solve(&history);
            match candidates.first() {
                Some(best) => (*best).clone(),
                None => break, // feedback excluded the answer; terminal
            }
        };

        guesses.push(guess.text().to_string());

        if guess == *answer {
            return GameOutcome {
                answer: answer.text().to_string(),
                guesses,
                solved: true,
            };
        }

        history.push(GuessFeedback::score(&guess, answer));
    }

    GameOutcome {
        answer: answer.text().to_string(),
        guesses,
        solved: false,
    }
}

/// Run the solver against the selected answers and collect statistics
#[must_use]
pub fn run_simulation(engine: &Engine, config: &SimulateConfig) -> SimulationStats {
    let corpus = engine.corpus();

    let test_words: Vec<&Word> = if let Some(n) = config.sample {
        corpus.choose_multiple(&mut rand::rng(), n.min(corpus.len())).collect()
    } else {
        corpus
            .iter()
            .take(config.limit.unwrap_or(corpus.len()))
            .collect()
    };

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    // One independent history per game; nothing shared but the read-only
    // corpus and frequency table
    let outcomes: Vec<GameOutcome> = test_words
        .par_iter()
        .map(|answer| {
            let outcome = play_game(engine, answer, config);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_and_clear();
    let total_time = start.elapsed();

    let solved_games: Vec<&GameOutcome> = outcomes.iter().filter(|o| o.solved).collect();
    let solved = solved_games.len();
    let failed = outcomes.len() - solved;

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for outcome in &solved_games {
        *distribution.entry(outcome.guesses.len()).or_insert(0) += 1;
    }

    let average_guesses = if solved > 0 {
        solved_games.iter().map(|o| o.guesses.len()).sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    let mut worst: Vec<(String, usize)> = solved_games
        .iter()
        .filter(|o| o.guesses.len() >= 5)
        .map(|o| (o.answer.clone(), o.guesses.len()))
        .collect();
    worst.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst.truncate(10);

    let failures: Vec<GameOutcome> = outcomes.into_iter().filter(|o| !o.solved).collect();

    SimulationStats {
        total: solved + failed,
        solved,
        failed,
        distribution,
        average_guesses,
        total_time,
        failures,
        worst,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::PositionFrequencies;

    fn corpus() -> Vec<Word> {
        ["cramp", "crane", "grate", "heaps", "irate", "reach", "slate"]
            .iter()
            .map(|t| Word::new(t).unwrap())
            .collect()
    }

    #[test]
    fn play_game_solves_reachable_answer() {
        let words = corpus();
        let frequencies = PositionFrequencies::from_words(&words);
        let engine = Engine::new(&words, &frequencies);

        let answer = Word::new("slate").unwrap();
        let outcome = play_game(&engine, &answer, &SimulateConfig::default());

        assert!(outcome.solved);
        assert!(outcome.guesses.len() <= 6);
        assert_eq!(outcome.guesses.last().unwrap(), "slate");
    }

    #[test]
    fn play_game_respects_forced_first_word() {
        let words = corpus();
        let frequencies = PositionFrequencies::from_words(&words);
        let engine = Engine::new(&words, &frequencies);

        let config = SimulateConfig {
            first_word: Some(Word::new("crane").unwrap()),
            ..SimulateConfig::default()
        };
        let answer = Word::new("grate").unwrap();
        let outcome = play_game(&engine, &answer, &config);

        assert_eq!(outcome.guesses[0], "crane");
        assert!(outcome.solved);
    }

    #[test]
    fn simulation_over_whole_corpus_solves_everything() {
        // A corpus this small is always solvable within six guesses
        let words = corpus();
        let frequencies = PositionFrequencies::from_words(&words);
        let engine = Engine::new(&words, &frequencies);

        let stats = run_simulation(&engine, &SimulateConfig::default());

        assert_eq!(stats.total, words.len());
        assert_eq!(stats.failed, 0);
        assert!(stats.failures.is_empty());
        assert!(stats.average_guesses >= 1.0);
        assert_eq!(stats.distribution.values().sum::<usize>(), stats.solved);
    }

    #[test]
    fn simulation_limit_is_honored() {
        let words = corpus();
        let frequencies = PositionFrequencies::from_words(&words);
        let engine = Engine::new(&words, &frequencies);

        let config = SimulateConfig {
            limit: Some(3),
            ..SimulateConfig::default()
        };
        let stats = run_simulation(&engine, &config);
        assert_eq!(stats.total, 3);
    }

    #[test]
    fn simulation_sample_is_honored() {
        let words = corpus();
        let frequencies = PositionFrequencies::from_words(&words);
        let engine = Engine::new(&words, &frequencies);

        let config = SimulateConfig {
            sample: Some(2),
            ..SimulateConfig::default()
        };
        let stats = run_simulation(&engine, &config);
        assert_eq!(stats.total, 2);
    }
}
