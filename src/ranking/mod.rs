//! Candidate ranking
//!
//! Orders surviving candidates by how much their undetermined letters are
//! likely to reveal, using per-position letter frequencies precomputed from
//! the corpus.

mod frequencies;
mod ranker;

pub use frequencies::PositionFrequencies;
pub use ranker::rank;
