//! Letter position-frequency table
//!
//! For each letter, the fraction of corpus words carrying it at each of the
//! five positions. The embedded table is generated offline by the build
//! script from the same corpus file as the answer list, so the two can never
//! drift apart. The engine treats the table as an opaque read-only lookup.

use crate::core::{WORD_LEN, Word};
use crate::wordlists::LETTER_POSITION_FREQ;

/// Read-only lookup: letter and position to corpus frequency
#[derive(Debug, Clone, PartialEq)]
pub struct PositionFrequencies {
    table: [[f64; WORD_LEN]; 26],
}

static EMBEDDED: PositionFrequencies = PositionFrequencies {
    table: LETTER_POSITION_FREQ,
};

impl PositionFrequencies {
    /// The table precomputed from the embedded corpus
    #[must_use]
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    /// Compute a table from an arbitrary corpus
    ///
    /// Matches the offline generation exactly: each cell is the count of
    /// words with that letter at that position, divided by the corpus size.
    /// An empty corpus yields an all-zero table.
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut counts = [[0u32; WORD_LEN]; 26];
        for word in words {
            for (position, &letter) in word.letters().iter().enumerate() {
                counts[(letter - b'a') as usize][position] += 1;
            }
        }

        let total = words.len() as f64;
        let mut table = [[0.0; WORD_LEN]; 26];
        if !words.is_empty() {
            for (letter, row) in counts.iter().enumerate() {
                for (position, &count) in row.iter().enumerate() {
                    table[letter][position] = f64::from(count) / total;
                }
            }
        }

        Self { table }
    }

    /// Frequency of `letter` at `position` (0.0 to 1.0)
    ///
    /// # Panics
    /// Panics if `letter` is not a-z or `position >= 5`
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8, position: usize) -> f64 {
        self.table[(letter - b'a') as usize][position]
    }
}
