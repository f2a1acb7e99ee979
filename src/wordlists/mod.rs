//! Word lists
//!
//! The embedded answer corpus (compiled in by the build script) and loading
//! utilities for custom corpora.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, LETTER_POSITION_FREQ};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_are_alphabetical_and_unique() {
        for pair in ANSWERS.windows(2) {
            assert!(pair[0] < pair[1], "'{}' >= '{}'", pair[0], pair[1]);
        }
    }

    #[test]
    fn frequency_rows_sum_to_one_per_position() {
        // Every word has exactly one letter at each position, so each
        // position's frequencies across all letters must sum to 1
        for position in 0..5 {
            let total: f64 = LETTER_POSITION_FREQ.iter().map(|row| row[position]).sum();
            assert!((total - 1.0).abs() < 1e-9, "position {position}: {total}");
        }
    }

    #[test]
    fn frequencies_in_unit_range() {
        for row in &LETTER_POSITION_FREQ {
            for &freq in row {
                assert!((0.0..=1.0).contains(&freq));
            }
        }
    }
}
