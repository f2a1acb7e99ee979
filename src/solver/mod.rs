//! Solver facade
//!
//! The single entry point the outside world calls: feedback history in,
//! ranked candidate list out.

mod engine;

pub use engine::Engine;
