//! Game rules for Connect Four
//!
//! Legality and win detection live on the bit planes themselves
//! ([`crate::board::Bitboard`]); this module holds the slower, cell-by-cell
//! lookup of the winning line used for display.

pub mod win;

pub use win::find_winning_line;
