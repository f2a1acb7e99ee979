//! Candidate word representation
//!
//! A `Word` is a validated five-letter word, normalized to lowercase so that
//! comparisons against constraints are case-insensitive by construction.

use super::WORD_LEN;
use std::fmt;

/// A validated five-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// Wrong number of characters
    InvalidLength(usize),
    /// A character outside a-z / A-Z
    InvalidLetter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::InvalidLetter(c) => write!(f, "Word contains invalid character '{c}'"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if the input is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use solvle::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("cranes").is_err());
    /// assert!(Word::new("cran3").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if text.chars().count() != WORD_LEN {
            return Err(WordError::InvalidLength(text.chars().count()));
        }
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidLetter(bad));
        }

        let text = text.to_ascii_lowercase();
        let mut letters = [0u8; WORD_LEN];
        letters.copy_from_slice(text.as_bytes());

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if `position >= 5`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Count how many times each letter appears
    ///
    /// Indexed by `letter - b'a'`. Used by feedback scoring to consume
    /// duplicate letters correctly.
    #[must_use]
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &letter in &self.letters {
            counts[(letter - b'a') as usize] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
