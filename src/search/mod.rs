//! Search module for Connect Four
//!
//! Contains:
//! - Negamax with alpha-beta pruning over the live board

pub mod alphabeta;

pub use alphabeta::{SearchResult, Searcher, INF};
