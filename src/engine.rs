//! Main AI engine: tactical shortcuts in front of the negamax search
//!
//! The engine picks a column in this order:
//!
//! 1. **Immediate win**: a column that completes four for the player
//! 2. **Block**: a column where the opponent would complete four next turn
//! 3. **Negamax**: alpha-beta search to the configured depth
//!
//! # Example
//!
//! ```
//! use connect4::{AIEngine, Board, Player};
//!
//! // Player 1 has three stacked in column 0
//! let mut board = Board::from_moves("01010").unwrap();
//!
//! let mut engine = AIEngine::with_depth(4);
//! let result = engine.get_move_with_stats(&mut board, Player::Two);
//! assert_eq!(result.best_move, Some(0));
//! ```

use std::time::Instant;

use log::{debug, info};

use crate::board::{Board, Player, BOARD_WIDTH};
use crate::search::Searcher;

/// Default search depth in plies
pub const MAX_SEARCH_DEPTH: i32 = 8;

/// Which rule produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Column completes four for the player
    ImmediateWin,
    /// Column denies the opponent an immediate four
    Block,
    /// Negamax search result
    Negamax,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Recommended column, `None` if the board is full
    pub best_move: Option<usize>,
    /// Search score; 0 for the shortcuts
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Interior nodes expanded
    pub nodes: u64,
}

/// Connect Four AI engine.
///
/// Stateless apart from its depth setting and the searcher's counters; the
/// board is passed in for each request.
#[derive(Debug)]
pub struct AIEngine {
    searcher: Searcher,
    max_depth: i32,
}

impl AIEngine {
    /// Create an engine searching to [`MAX_SEARCH_DEPTH`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(MAX_SEARCH_DEPTH)
    }

    /// Create an engine with a custom search depth.
    ///
    /// Depths below 1 are raised to 1, so a playable board always gets a
    /// column.
    ///
    /// ```
    /// use connect4::AIEngine;
    ///
    /// let engine = AIEngine::with_depth(6);
    /// assert_eq!(engine.max_depth(), 6);
    /// ```
    #[must_use]
    pub fn with_depth(max_depth: i32) -> Self {
        Self {
            searcher: Searcher::new(),
            max_depth: max_depth.max(1),
        }
    }

    #[must_use]
    pub fn max_depth(&self) -> i32 {
        self.max_depth
    }

    /// Best column for `player`, or `None` if nothing is playable.
    pub fn get_move(&mut self, board: &mut Board, player: Player) -> Option<usize> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Best column for `player` with search statistics.
    ///
    /// `board` is borrowed mutably as search scratch space and is restored
    /// before this returns.
    pub fn get_move_with_stats(&mut self, board: &mut Board, player: Player) -> MoveResult {
        let start = Instant::now();

        // 1. Win now if we can
        if let Some(col) = find_immediate_win(board, player) {
            debug!("player {} can win in 1 turn, column {}", player.number(), col);
            return MoveResult {
                best_move: Some(col),
                score: 0,
                search_type: SearchType::ImmediateWin,
                time_ms: start.elapsed().as_millis() as u64,
                nodes: 0,
            };
        }

        // 2. Occupy the opponent's winning cell
        if let Some(col) = find_immediate_win(board, player.opponent()) {
            debug!(
                "player {} could win in 1 turn, blocking column {}",
                player.opponent().number(),
                col
            );
            return MoveResult {
                best_move: Some(col),
                score: 0,
                search_type: SearchType::Block,
                time_ms: start.elapsed().as_millis() as u64,
                nodes: 0,
            };
        }

        // 3. Full search
        debug!(
            "searching best move for player {} to depth {}",
            player.number(),
            self.max_depth
        );
        let result = self.searcher.search(board, player, self.max_depth);
        let time_ms = start.elapsed().as_millis() as u64;

        info!(
            "negamax: column {:?} score {} nodes {} in {}ms",
            result.best_move, result.score, result.nodes, time_ms
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::Negamax,
            time_ms,
            nodes: result.nodes,
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// First playable column, left to right, where `player` completes four.
fn find_immediate_win(board: &Board, player: Player) -> Option<usize> {
    (0..BOARD_WIDTH).find(|&col| board.wins_with(player, col))
}

impl Board {
    /// Recommend a column for `player` at the default depth.
    ///
    /// Uses this board as search scratch space; it is restored before
    /// returning.
    pub fn find_best_move(&mut self, player: Player) -> Option<usize> {
        AIEngine::new().get_move(self, player)
    }
}
