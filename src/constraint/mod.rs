//! Constraint model
//!
//! Turns accumulated tile feedback into one normalized [`ConstraintSet`]
//! (aggregation) and evaluates candidate words against it (matching).

mod aggregate;
mod matcher;
mod set;

pub use aggregate::aggregate;
pub use matcher::matches;
pub use set::{ConstraintSet, LetterSet, PositionSet};
