//! Command implementations

pub mod simple;
pub mod simulate;
pub mod suggest;

pub use simple::run_simple;
pub use simulate::{GameOutcome, SimulateConfig, SimulationStats, run_simulation};
pub use suggest::{SuggestConfig, SuggestResult, WORDS_PER_PAGE, parse_history, run_suggest};
