//! Per-tile guess feedback
//!
//! A `GuessFeedback` is the evaluated result of one submitted guess: five
//! tiles, each carrying a letter, a position, and a green/yellow/gray status.
//! Feedback normally arrives from an external collaborator (a scraper or the
//! CLI); `score` produces it locally for simulated games.

use super::{WORD_LEN, Word};

/// Evaluated state of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileStatus {
    /// Green: letter confirmed at this exact position
    Correct,
    /// Yellow: letter in the word, but not at this position
    Present,
    /// Gray: letter not in the word (subject to duplicate-letter caveats)
    Absent,
}

impl TileStatus {
    /// Parse a single feedback mark
    ///
    /// Accepts `G`/`g`/🟩 for green, `Y`/`y`/🟨 for yellow, `-`/`_`/⬜ for gray.
    #[must_use]
    pub const fn from_mark(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// The emoji tile for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one tile of one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileOutcome {
    /// Lowercase ASCII letter shown on the tile
    pub letter: u8,
    /// Position of the tile within the guess (0-4)
    pub position: usize,
    /// Evaluated color of the tile
    pub status: TileStatus,
}

impl TileOutcome {
    /// Create a tile outcome
    #[must_use]
    pub const fn new(letter: u8, position: usize, status: TileStatus) -> Self {
        Self {
            letter,
            position,
            status,
        }
    }

    /// Whether this tile carries a usable letter and an in-range position
    ///
    /// Upstream feedback extraction is best-effort; tiles failing this check
    /// are dropped during aggregation rather than treated as fatal.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.position < WORD_LEN && self.letter.is_ascii_lowercase()
    }
}

/// Feedback for a full submitted guess: one tile per position
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuessFeedback {
    tiles: Vec<TileOutcome>,
}

impl GuessFeedback {
    /// Wrap raw tile outcomes as produced by an external collaborator
    ///
    /// Tiles are not validated here; malformed ones are skipped by the
    /// aggregator.
    #[must_use]
    pub const fn new(tiles: Vec<TileOutcome>) -> Self {
        Self { tiles }
    }

    /// The tiles of this guess, in position order as supplied
    #[must_use]
    pub fn tiles(&self) -> &[TileOutcome] {
        &self.tiles
    }

    /// Build feedback from a guess word and a mark string like "GY--Y"
    ///
    /// Accepts the same marks as [`TileStatus::from_mark`], including emoji.
    /// Returns `None` if the mark string is not exactly five valid marks.
    ///
    /// # Examples
    /// ```
    /// use solvle::core::{GuessFeedback, TileStatus, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = GuessFeedback::from_marks(&guess, "--G-Y").unwrap();
    /// assert_eq!(feedback.tiles()[2].status, TileStatus::Correct);
    /// assert_eq!(feedback.tiles()[4].status, TileStatus::Present);
    /// ```
    #[must_use]
    pub fn from_marks(guess: &Word, marks: &str) -> Option<Self> {
        let marks: Vec<char> = marks.chars().collect();
        if marks.len() != WORD_LEN {
            return None;
        }

        let mut tiles = Vec::with_capacity(WORD_LEN);
        for (position, mark) in marks.into_iter().enumerate() {
            let status = TileStatus::from_mark(mark)?;
            tiles.push(TileOutcome::new(guess.letter_at(position), position, status));
        }
        Some(Self { tiles })
    }

    /// Evaluate a guess against a known answer, Wordle-style
    ///
    /// Two passes with letter-count consumption: greens claim their letters
    /// first, then yellows are granted left to right from whatever copies
    /// remain, and leftover tiles go gray. This handles duplicate letters the
    /// way the real game does.
    ///
    /// # Examples
    /// ```
    /// use solvle::core::{GuessFeedback, TileStatus, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("erase").unwrap();
    /// let feedback = GuessFeedback::score(&guess, &answer);
    ///
    /// // S yellow, P gray, both E's yellow, D gray
    /// let statuses: Vec<_> = feedback.tiles().iter().map(|t| t.status).collect();
    /// assert_eq!(statuses, vec![
    ///     TileStatus::Present,
    ///     TileStatus::Absent,
    ///     TileStatus::Present,
    ///     TileStatus::Present,
    ///     TileStatus::Absent,
    /// ]);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut statuses = [TileStatus::Absent; WORD_LEN];
        let mut remaining = answer.letter_counts();

        // First pass: greens consume their letter from the answer pool
        for position in 0..WORD_LEN {
            if guess.letter_at(position) == answer.letter_at(position) {
                statuses[position] = TileStatus::Correct;
                remaining[(guess.letter_at(position) - b'a') as usize] -= 1;
            }
        }

        // Second pass: yellows from whatever copies remain
        for position in 0..WORD_LEN {
            if statuses[position] == TileStatus::Correct {
                continue;
            }
            let slot = (guess.letter_at(position) - b'a') as usize;
            if remaining[slot] > 0 {
                statuses[position] = TileStatus::Present;
                remaining[slot] -= 1;
            }
        }

        let tiles = statuses
            .into_iter()
            .enumerate()
            .map(|(position, status)| {
                TileOutcome::new(guess.letter_at(position), position, status)
            })
            .collect();
        Self { tiles }
    }

    /// Whether this feedback is a solved game (five green tiles)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.tiles.len() == WORD_LEN && self.tiles.iter().all(|t| t.status == TileStatus::Correct)
    }

    /// Render the feedback as emoji tiles, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.tiles.iter().map(|t| t.status.emoji()).collect()
    }
}
