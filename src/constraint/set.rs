//! Normalized constraint set
//!
//! The aggregate of everything the feedback history has revealed: green
//! letters pinned to positions, yellow letters with their forbidden
//! positions, and gray letters confirmed absent.
//!
//! Letters and positions are kept in small bitmask sets; with 26 letters and
//! 5 positions a `u32` and a `u8` cover the whole domain.

use crate::core::WORD_LEN;
use rustc_hash::FxHashMap;
use std::fmt;

/// A set of letters a-z, packed into a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Add a lowercase letter
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= 1 << (letter - b'a');
    }

    /// Remove a letter if present
    #[inline]
    pub fn remove(&mut self, letter: u8) {
        self.0 &= !(1 << (letter - b'a'));
    }

    /// Whether the set contains a letter
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << (letter - b'a')) != 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Union of two sets
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&l| self.contains(l))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter.to_ascii_uppercase() as char)?;
        }
        Ok(())
    }
}

/// A set of board positions 0-4, packed into a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionSet(u8);

impl PositionSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Add a position
    #[inline]
    pub fn insert(&mut self, position: usize) {
        self.0 |= 1 << position;
    }

    /// Remove a position if present
    #[inline]
    pub fn remove(&mut self, position: usize) {
        self.0 &= !(1 << position);
    }

    /// Whether the set contains a position
    #[inline]
    #[must_use]
    pub const fn contains(self, position: usize) -> bool {
        self.0 & (1 << position) != 0
    }

    /// Whether the set is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the positions in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..WORD_LEN).filter(move |&p| self.contains(p))
    }
}

/// Normalized aggregate of all feedback observed so far
///
/// Invariant (restored by [`normalize`](Self::normalize), which the
/// aggregator always calls): no letter appears both in `gray` and in the
/// green values or yellow keys. Green and yellow evidence outranks gray.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConstraintSet {
    green: [Option<u8>; WORD_LEN],
    yellow: FxHashMap<u8, PositionSet>,
    gray: LetterSet,
}

impl ConstraintSet {
    /// An empty constraint set (matches every word)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a letter to a position
    ///
    /// Overwrites any earlier letter at the same position: guess history is
    /// monotonically more informative, so the fresher observation wins.
    pub fn set_green(&mut self, position: usize, letter: u8) {
        self.green[position] = Some(letter);
    }

    /// Record a yellow observation: `letter` is in the word but not at
    /// `position`
    pub fn add_yellow(&mut self, letter: u8, position: usize) {
        self.yellow.entry(letter).or_default().insert(position);
    }

    /// Record a letter as absent
    pub fn add_gray(&mut self, letter: u8) {
        self.gray.insert(letter);
    }

    /// The green constraints, position-indexed
    #[must_use]
    pub const fn green(&self) -> &[Option<u8>; WORD_LEN] {
        &self.green
    }

    /// The yellow constraints: letter to forbidden positions
    pub fn yellow(&self) -> impl Iterator<Item = (u8, PositionSet)> + '_ {
        self.yellow.iter().map(|(&l, &p)| (l, p))
    }

    /// Forbidden positions for a yellow letter, if it is constrained
    #[must_use]
    pub fn yellow_positions(&self, letter: u8) -> Option<PositionSet> {
        self.yellow.get(&letter).copied()
    }

    /// The gray letters
    #[must_use]
    pub const fn gray(&self) -> LetterSet {
        self.gray
    }

    /// Letters whose presence information is already fully exploited:
    /// every green value plus every yellow key
    #[must_use]
    pub fn known_letters(&self) -> LetterSet {
        let greens: LetterSet = self.green.iter().flatten().copied().collect();
        let yellows: LetterSet = self.yellow.keys().copied().collect();
        greens.union(yellows)
    }

    /// Whether green and yellow together already name five distinct letters
    #[must_use]
    pub fn is_fully_determined(&self) -> bool {
        self.known_letters().len() == WORD_LEN
    }

    /// Whether no constraint has been recorded at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.green.iter().all(Option::is_none) && self.yellow.is_empty() && self.gray.is_empty()
    }

    /// Restore the no-conflict invariant
    ///
    /// - A position green for some letter is removed from that same letter's
    ///   yellow set (a green elsewhere leaves yellow constraints on other
    ///   positions intact, for repeated letters).
    /// - Yellow entries with no remaining forbidden positions are dropped.
    /// - Letters appearing in green values or yellow keys are dropped from
    ///   gray.
    pub fn normalize(&mut self) {
        for (position, &green_letter) in self.green.iter().enumerate() {
            if let Some(letter) = green_letter
                && let Some(positions) = self.yellow.get_mut(&letter)
            {
                positions.remove(position);
            }
        }
        self.yellow.retain(|_, positions| !positions.is_empty());

        for letter in self.green.iter().flatten() {
            self.gray.remove(*letter);
        }
        for &letter in self.yellow.keys() {
            self.gray.remove(letter);
        }
    }

    /// One-line human-readable summary, used by diagnostics and verbose
    /// output
    #[must_use]
    pub fn summary(&self) -> String {
        let green: String = self
            .green
            .iter()
            .map(|slot| slot.map_or('·', |l| l.to_ascii_uppercase() as char))
            .collect();

        let mut yellow: Vec<String> = self
            .yellow
            .iter()
            .map(|(&letter, positions)| {
                let spots: Vec<String> =
                    positions.iter().map(|p| p.to_string()).collect();
                format!("{}!{}", letter.to_ascii_uppercase() as char, spots.join(""))
            })
            .collect();
        yellow.sort();

        format!(
            "green [{green}] yellow [{}] gray [{}]",
            yellow.join(" "),
            self.gray
        )
    }
}
