//! Evaluation module for Connect Four
//!
//! Contains:
//! - Window masks for every line of four cells
//! - The `tally^4` heuristic used at search leaves

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{window_score, WINDOWS, WINDOW_COUNT};
