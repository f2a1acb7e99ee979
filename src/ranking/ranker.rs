//! Information-weighted candidate ordering
//!
//! Scores each candidate by the positional frequency of its letters that the
//! constraints do not already account for, then sorts descending. Words whose
//! unknown letters sit where they commonly sit in the corpus tend to split
//! the remaining candidate set fastest.

use crate::constraint::ConstraintSet;
use crate::core::{WORD_LEN, Word};

use super::PositionFrequencies;

/// Ephemeral scoring pair, dropped after the sort
struct ScoredCandidate<'a> {
    word: &'a Word,
    score: f64,
}

/// Order candidates by expected information gain, best first
///
/// A total ordering of the input, not a filter. Letters already named by a
/// green or yellow constraint contribute nothing: their presence is old
/// news. When green and yellow together already name five distinct letters
/// the word is fully determined and the input is returned unchanged.
///
/// The sort is stable, so equal scores keep their input order. With an
/// alphabetical corpus, ties resolve alphabetically.
#[must_use]
pub fn rank<'a>(
    candidates: Vec<&'a Word>,
    constraints: &ConstraintSet,
    frequencies: &PositionFrequencies,
) -> Vec<&'a Word> {
    let known = constraints.known_letters();
    if known.len() == WORD_LEN {
        return candidates;
    }

    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .into_iter()
        .map(|word| {
            let score = word
                .letters()
                .iter()
                .enumerate()
                .filter(|&(_, &letter)| !known.contains(letter))
                .map(|(position, &letter)| frequencies.get(letter, position))
                .sum();
            ScoredCandidate { word, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.into_iter().map(|s| s.word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn rank_orders_by_positional_frequency() {
        // Corpus dominated by s---- and ----e words
        let corpus = words(&["slate", "stone", "shine", "crumb", "shave"]);
        let freq = PositionFrequencies::from_words(&corpus);
        let constraints = ConstraintSet::new();

        let candidates: Vec<&Word> = corpus.iter().collect();
        let ranked = rank(candidates, &constraints, &freq);

        // CRUMB shares no high-frequency positions and must sink to the end
        assert_eq!(ranked.last().unwrap().text(), "crumb");
    }

    #[test]
    fn known_letters_contribute_nothing() {
        let corpus = words(&["zebra"]);
        let freq = PositionFrequencies::from_words(&corpus);
        let a = Word::new("zzzzz").unwrap();
        let b = Word::new("eeeee").unwrap();

        // Unconstrained both score 1.0 (z at 0 / e at 1), input order holds
        let ranked = rank(vec![&a, &b], &ConstraintSet::new(), &freq);
        assert_eq!(ranked[0].text(), "zzzzz");

        // Once Z is a known letter its frequency stops counting
        let mut constraints = ConstraintSet::new();
        constraints.add_yellow(b'z', 4);
        let ranked = rank(vec![&a, &b], &constraints, &freq);
        assert_eq!(ranked[0].text(), "eeeee");
        assert_eq!(ranked[1].text(), "zzzzz");
    }

    #[test]
    fn short_circuit_when_five_letters_known() {
        let corpus = words(&["slate", "stale", "steal", "least"]);
        let freq = PositionFrequencies::from_words(&corpus);

        let mut constraints = ConstraintSet::new();
        constraints.set_green(0, b's');
        constraints.set_green(1, b'l');
        constraints.add_yellow(b'a', 0);
        constraints.add_yellow(b't', 1);
        constraints.add_yellow(b'e', 2);

        let input: Vec<&Word> = corpus.iter().collect();
        let ranked = rank(input.clone(), &constraints, &freq);

        // Five distinct letters known: input order preserved exactly
        let expected: Vec<&str> = input.iter().map(|w| w.text()).collect();
        let actual: Vec<&str> = ranked.iter().map(|w| w.text()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn four_known_letters_still_ranks() {
        let corpus = words(&["slate", "crumb"]);
        let freq = PositionFrequencies::from_words(&corpus);

        let mut constraints = ConstraintSet::new();
        constraints.set_green(0, b's');
        constraints.set_green(1, b'l');
        constraints.add_yellow(b'a', 0);
        constraints.add_yellow(b't', 1);

        let input: Vec<&Word> = corpus.iter().collect();
        let ranked = rank(input, &constraints, &freq);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn stable_sort_keeps_alphabetical_ties() {
        // Two words with identical letters in identical positions pattern:
        // all-zero scores for letters outside this two-word corpus
        let corpus = words(&["pumps", "jazzy"]);
        let other = words(&["vexed", "which"]);
        let freq = PositionFrequencies::from_words(&corpus);
        let constraints = ConstraintSet::new();

        // Neither candidate shares a positional letter with the frequency
        // corpus, so both score 0.0 and input order must survive
        let candidates: Vec<&Word> = other.iter().collect();
        let ranked = rank(candidates, &constraints, &freq);

        assert_eq!(ranked[0].text(), "vexed");
        assert_eq!(ranked[1].text(), "which");
    }

    #[test]
    fn empty_candidates_stay_empty() {
        let freq = PositionFrequencies::from_words(&[]);
        let constraints = ConstraintSet::new();
        assert!(rank(Vec::new(), &constraints, &freq).is_empty());
    }
}
