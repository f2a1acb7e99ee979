//! Constraint aggregation
//!
//! Reduces a whole feedback history into one normalized [`ConstraintSet`],
//! resolving the conflicts that show up across guesses: a letter typed twice
//! when the answer has it once, a letter yellow in one guess and gray in
//! another, a position reported green with two different letters.

use super::set::{ConstraintSet, LetterSet};
use crate::core::{GuessFeedback, TileStatus};
use log::debug;

/// Aggregate a feedback history into a normalized constraint set
///
/// The history is walked in submission order. Rules:
///
/// - Green tiles pin letters to positions; if two guesses disagree about a
///   position (an upstream anomaly), the later observation wins.
/// - Yellow tiles record the letter as present and its tested position as
///   forbidden, merged across guesses.
/// - A letter goes gray only if *every* tile that ever showed it was gray.
///   A single green or yellow sighting anywhere outranks any number of gray
///   ones; this keeps a doubled-up guess letter from poisoning the
///   constraint set when the answer holds just one copy.
/// - Malformed tiles (position out of range, letter not a-z) are dropped;
///   upstream extraction is best-effort and partial rows are expected
///   mid-game.
///
/// Never fails. Aggregating the same history twice yields the same set.
#[must_use]
pub fn aggregate(history: &[GuessFeedback]) -> ConstraintSet {
    let mut constraints = ConstraintSet::new();
    let mut seen_placed = LetterSet::EMPTY; // ever green or yellow
    let mut seen_absent = LetterSet::EMPTY; // ever gray

    for feedback in history {
        for tile in feedback.tiles() {
            if !tile.is_well_formed() {
                debug!(
                    "dropping malformed tile (letter {:#x}, position {})",
                    tile.letter, tile.position
                );
                continue;
            }

            match tile.status {
                TileStatus::Correct => {
                    constraints.set_green(tile.position, tile.letter);
                    seen_placed.insert(tile.letter);
                }
                TileStatus::Present => {
                    constraints.add_yellow(tile.letter, tile.position);
                    seen_placed.insert(tile.letter);
                }
                TileStatus::Absent => {
                    seen_absent.insert(tile.letter);
                }
            }
        }
    }

    // Gray only where absence was the letter's whole story
    for letter in seen_absent.iter() {
        if !seen_placed.contains(letter) {
            constraints.add_gray(letter);
        }
    }

    constraints.normalize();
    debug!("aggregated {} guesses: {}", history.len(), constraints.summary());
    constraints
}
