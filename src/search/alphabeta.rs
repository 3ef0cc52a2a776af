//! Negamax search with alpha-beta pruning
//!
//! The search explores futures on the caller's board itself rather than on
//! copies. Every stone it drops is owned by a [`ScratchMove`] guard whose
//! `Drop` takes the stone back, so the board is restored on every way out of
//! a frame: normal return, beta cut-off, or unwinding.
//!
//! # Example
//!
//! ```
//! use connect4::board::{Board, Player};
//! use connect4::search::Searcher;
//!
//! let mut board = Board::from_moves("3").unwrap();
//! let mut searcher = Searcher::new();
//!
//! let result = searcher.search(&mut board, Player::Two, 4);
//! assert!(result.best_move.is_some());
//! // The board is handed back untouched
//! assert_eq!(board, Board::from_moves("3").unwrap());
//! ```

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Player, BOARD_WIDTH};
use crate::eval::evaluate;

/// Infinity score for alpha-beta bounds. `-INF` negates without overflow.
pub const INF: i32 = i32::MAX;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best column found, `None` if no column was playable at the root
    pub best_move: Option<usize>,
    /// Score of the best column from the searching player's point of view
    pub score: i32,
    /// Interior nodes expanded
    pub nodes: u64,
}

/// A stone dropped for exploration; dropping the guard takes it back.
struct ScratchMove<'a> {
    board: &'a mut Board,
}

impl<'a> ScratchMove<'a> {
    /// Drop the current player's stone into `col`, or `None` if the column
    /// can't take one.
    #[inline]
    fn place(board: &'a mut Board, col: usize) -> Option<Self> {
        board.place(col).ok()?;
        Some(Self { board })
    }
}

impl Deref for ScratchMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for ScratchMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for ScratchMove<'_> {
    fn drop(&mut self) {
        // Cannot fail: the guard exists only after a successful place
        let _ = self.board.undo_last_move();
    }
}

/// Depth-limited negamax searcher.
///
/// Holds only diagnostics; all position state lives in the board passed in.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run negamax to `depth` for `player` on `board`.
    ///
    /// The board is used as scratch space and is identical to its input
    /// state when this returns.
    pub fn search(&mut self, board: &mut Board, player: Player, depth: i32) -> SearchResult {
        self.nodes = 0;
        let (best_move, score) = self.negamax(board, depth, -INF, INF, player, 1);
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    /// Negamax with alpha-beta pruning.
    ///
    /// Leaves are always scored for `player`, the side that started the
    /// search; `sign` carries the polarity of the ply instead. Columns are
    /// scanned in ascending order and the first column reaching the best
    /// value is kept.
    fn negamax(
        &mut self,
        board: &mut Board,
        depth: i32,
        mut alpha: i32,
        beta: i32,
        player: Player,
        sign: i32,
    ) -> (Option<usize>, i32) {
        if depth <= 0 || board.test_win().is_over() {
            return (None, sign * evaluate(board, player));
        }

        self.nodes += 1;

        let mut best_column = None;
        let mut best_value = -INF;

        for col in 0..BOARD_WIDTH {
            let Some(mut child) = ScratchMove::place(board, col) else {
                continue;
            };
            let value = -self.negamax(&mut child, depth - 1, -beta, -alpha, player, -sign).1;
            drop(child);

            if value > best_value {
                best_value = value;
                best_column = Some(col);
            }

            alpha = alpha.max(value);

            // Beta cut-off
            if alpha >= beta {
                break;
            }
        }

        (best_column, best_value)
    }
}
