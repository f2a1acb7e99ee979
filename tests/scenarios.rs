//! End-to-end scenarios against the embedded corpus

use solvle::constraint::{aggregate, matches};
use solvle::core::{GuessFeedback, Word};
use solvle::ranking::PositionFrequencies;
use solvle::solver::Engine;
use solvle::wordlists::{ANSWERS, loader::words_from_slice};

fn engine_over<'a>(
    corpus: &'a [Word],
    frequencies: &'a PositionFrequencies,
) -> Engine<'a> {
    Engine::new(corpus, frequencies)
}

fn feedback(guess: &str, marks: &str) -> GuessFeedback {
    let word = Word::new(guess).unwrap();
    GuessFeedback::from_marks(&word, marks).unwrap()
}

#[test]
fn empty_history_returns_whole_corpus_ranked() {
    let corpus = words_from_slice(ANSWERS);
    let frequencies = PositionFrequencies::embedded();
    let engine = engine_over(&corpus, frequencies);

    let result = engine.solve(&[]);
    assert_eq!(result.len(), corpus.len());
}

#[test]
fn survivors_satisfy_every_constraint() {
    let corpus = words_from_slice(ANSWERS);
    let frequencies = PositionFrequencies::embedded();
    let engine = engine_over(&corpus, frequencies);

    let history = vec![feedback("crane", "--G-Y"), feedback("slate", "-YG--")];
    let constraints = aggregate(&history);
    let result = engine.solve(&history);

    assert!(!result.is_empty());
    for word in &result {
        assert!(matches(word, &constraints), "{} escaped filtering", word);
        assert_eq!(word.letter_at(2), b'a');
        assert!(word.contains(b'e'));
        assert!(word.contains(b'l'));
        assert_ne!(word.letter_at(4), b'e');
        assert_ne!(word.letter_at(1), b'l');
        assert!(!word.contains(b'c'));
        assert!(!word.contains(b'r'));
        assert!(!word.contains(b'n'));
        assert!(!word.contains(b's'));
        assert!(!word.contains(b't'));
    }
}

#[test]
fn more_feedback_never_widens_the_candidate_set() {
    let corpus = words_from_slice(ANSWERS);
    let frequencies = PositionFrequencies::embedded();
    let engine = engine_over(&corpus, frequencies);

    let mut history = Vec::new();
    let mut previous = engine.count_candidates(&history);

    for (guess, marks) in [("crane", "--G-Y"), ("slate", "-YG--"), ("medal", "YG-YY")] {
        history.push(feedback(guess, marks));
        let current = engine.count_candidates(&history);
        assert!(current <= previous, "candidates grew after {guess}");
        previous = current;
    }
}

#[test]
fn all_green_feedback_pins_a_single_word() {
    let corpus = words_from_slice(ANSWERS);
    let frequencies = PositionFrequencies::embedded();
    let engine = engine_over(&corpus, frequencies);

    let result = engine.solve(&[feedback("slate", "GGGGG")]);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].text(), "slate");
}

#[test]
fn unsatisfiable_feedback_yields_empty_not_panic() {
    let corpus = words_from_slice(ANSWERS);
    let frequencies = PositionFrequencies::embedded();
    let engine = engine_over(&corpus, frequencies);

    // Green 'q' in first position with 'u' marked absent excludes every word
    let history = vec![feedback("query", "G----"), feedback("quick", "G----")];
    let result = engine.solve(&history);
    assert!(result.is_empty());
}

#[test]
fn ranking_is_deterministic_across_runs() {
    let corpus = words_from_slice(ANSWERS);
    let frequencies = PositionFrequencies::embedded();
    let engine = engine_over(&corpus, frequencies);

    let history = vec![feedback("crane", "--G-Y")];
    let first: Vec<&str> = engine.solve(&history).iter().map(|w| w.text()).collect();
    let second: Vec<&str> = engine.solve(&history).iter().map(|w| w.text()).collect();
    assert_eq!(first, second);
}

#[test]
fn scoring_then_solving_converges_on_the_answer() {
    let corpus = words_from_slice(ANSWERS);
    let frequencies = PositionFrequencies::embedded();
    let engine = engine_over(&corpus, frequencies);

    let answer = Word::new("slate").unwrap();
    let mut history = Vec::new();

    for _ in 0..6 {
        let candidates = engine.solve(&history);
        assert!(!candidates.is_empty(), "answer was filtered out");
        let guess = candidates[0].clone();
        if guess == answer {
            return;
        }
        history.push(GuessFeedback::score(&guess, &answer));
    }
    panic!("did not converge on the answer in six guesses");
}
