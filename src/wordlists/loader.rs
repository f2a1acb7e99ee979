//! Word list loading utilities

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load a corpus from a file, one word per line
///
/// Invalid entries are skipped: corpus files are trusted input, but a stray
/// blank line or comment should not be fatal. The returned list preserves
/// file order, so an alphabetically sorted file yields an alphabetical
/// corpus.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read. An unreadable corpus is
/// fatal to the caller since the engine cannot run without one.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use solvle::wordlists::{ANSWERS, loader::words_from_slice};
///
/// let corpus = words_from_slice(ANSWERS);
/// assert_eq!(corpus.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
