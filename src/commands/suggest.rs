//! One-shot suggestion command
//!
//! Takes the whole guess history as `word=marks` specs (e.g. `crane=--G-Y`),
//! solves, and returns one page of ranked candidates.

use crate::constraint::{ConstraintSet, aggregate};
use crate::core::{GuessFeedback, Word};
use crate::solver::Engine;

/// Words shown per page, as the assistant overlay paginates
pub const WORDS_PER_PAGE: usize = 10;

/// Configuration for a suggestion run
pub struct SuggestConfig {
    /// `word=marks` specs, oldest guess first
    pub specs: Vec<String>,
    /// Zero-based page of results to return
    pub page: usize,
    /// Page size
    pub per_page: usize,
}

impl SuggestConfig {
    #[must_use]
    pub const fn new(specs: Vec<String>) -> Self {
        Self {
            specs,
            page: 0,
            per_page: WORDS_PER_PAGE,
        }
    }
}

/// One page of ranked suggestions
pub struct SuggestResult {
    /// The requested page of candidate words, best first
    pub words: Vec<String>,
    /// Total surviving candidates across all pages
    pub total: usize,
    /// Zero-based page actually returned (clamped to the last page)
    pub page: usize,
    /// Page size used
    pub per_page: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// The aggregated constraints, for verbose display
    pub constraints: ConstraintSet,
}

/// Parse `word=marks` history specs into feedback values
///
/// # Errors
///
/// Returns a message naming the offending spec if the word or marks are
/// invalid.
pub fn parse_history(specs: &[String]) -> Result<Vec<GuessFeedback>, String> {
    specs
        .iter()
        .map(|spec| {
            let (word_part, marks) = spec
                .split_once('=')
                .ok_or_else(|| format!("Expected word=marks, got '{spec}'"))?;
            let word =
                Word::new(word_part).map_err(|e| format!("Invalid guess in '{spec}': {e}"))?;
            GuessFeedback::from_marks(&word, marks)
                .ok_or_else(|| format!("Invalid marks in '{spec}': use G, Y and - (five of them)"))
        })
        .collect()
}

/// Run the solver over the given history and page the result
///
/// An empty word list is a legitimate outcome (nothing matches the
/// feedback), not an error.
///
/// # Errors
///
/// Returns an error only for unparseable history specs.
pub fn run_suggest(config: &SuggestConfig, engine: &Engine) -> Result<SuggestResult, String> {
    let history = parse_history(&config.specs)?;
    let constraints = aggregate(&history);
    let ranked = engine.solve(&history);

    let per_page = config.per_page.max(1);
    let total = ranked.len();
    let total_pages = total.div_ceil(per_page);
    let page = config.page.min(total_pages.saturating_sub(1));

    let words = ranked
        .iter()
        .skip(page * per_page)
        .take(per_page)
        .map(|w| w.text().to_string())
        .collect();

    Ok(SuggestResult {
        words,
        total,
        page,
        per_page,
        total_pages,
        constraints,
    })
}
