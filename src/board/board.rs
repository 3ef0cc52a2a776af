//! Board structure with move history

use super::bitboard::Bitboard;
use super::{Cell, GameStatus, Player, Pos, BOARD_HEIGHT, BOARD_WIDTH, H1, TOTAL_CELLS};
use crate::error::{BoardError, BoardResult};

/// Game board: one bit plane per player plus per-column fill cursors.
///
/// The board is mutated in place for the whole session. Search uses the same
/// instance as scratch space and restores it before returning.
#[derive(Debug, Clone, Copy)]
pub struct Board {
    /// Occupancy per player, indexed by [`Player::index`]
    planes: [Bitboard; 2],
    /// Bit index of the lowest free cell in each column
    heights: [usize; BOARD_WIDTH],
    /// Columns played, in ply order; only the first `plies` entries are live
    moves: [u8; TOTAL_CELLS],
    /// Stones placed since the last reset
    plies: usize,
}

impl Board {
    pub fn new() -> Self {
        let mut board = Self {
            planes: [Bitboard::new(); 2],
            heights: [0; BOARD_WIDTH],
            moves: [0; TOTAL_CELLS],
            plies: 0,
        };
        board.reset();
        board
    }

    /// Replay a string of column digits, e.g. `"3344"`.
    pub fn from_moves(moves: &str) -> BoardResult<Self> {
        let mut board = Self::new();
        for (position, ch) in moves.chars().enumerate() {
            let col = ch
                .to_digit(10)
                .ok_or(BoardError::ParseMove { position, found: ch })?;
            board.place(col as usize)?;
        }
        Ok(board)
    }

    /// Empty the board without reallocating
    pub fn reset(&mut self) {
        self.plies = 0;
        self.planes = [Bitboard::new(); 2];
        for (col, height) in self.heights.iter_mut().enumerate() {
            *height = H1 * col;
        }
    }

    /// Get cell content. Row 0 is the bottom row.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> BoardResult<Cell> {
        if row >= BOARD_HEIGHT || col >= BOARD_WIDTH {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(self.cell(Pos::new(row as u8, col as u8)))
    }

    /// Get cell content for a position known to be on the board
    #[inline]
    pub fn cell(&self, pos: Pos) -> Cell {
        let bit = pos.to_bit();
        if self.planes[0].get(bit) {
            Cell::Player1
        } else if self.planes[1].get(bit) {
            Cell::Player2
        } else {
            Cell::Empty
        }
    }

    /// Drop the current player's stone into `col`
    pub fn place(&mut self, col: usize) -> BoardResult<()> {
        if col >= BOARD_WIDTH {
            return Err(BoardError::ColumnOutOfRange { column: col });
        }
        if !self.is_playable(col) {
            return Err(BoardError::ColumnFull { column: col });
        }
        self.planes[self.plies & 1].set(self.heights[col]);
        self.heights[col] += 1;
        self.moves[self.plies] = col as u8;
        self.plies += 1;
        Ok(())
    }

    /// Take back the last stone. Returns the column it was played in.
    pub fn undo_last_move(&mut self) -> BoardResult<usize> {
        if self.plies == 0 {
            return Err(BoardError::NoMoveToUndo);
        }
        self.plies -= 1;
        let col = self.moves[self.plies] as usize;
        self.heights[col] -= 1;
        self.planes[self.plies & 1].clear(self.heights[col]);
        Ok(col)
    }

    /// A stone can be dropped into `col` without overflowing into the guard row
    #[inline]
    pub fn is_playable(&self, col: usize) -> bool {
        col < BOARD_WIDTH && self.planes[self.plies & 1].with(self.heights[col]).is_legal()
    }

    /// Would `player` complete four by dropping a stone into `col`?
    ///
    /// Works on a hypothetical plane; the board is not touched.
    #[inline]
    pub fn wins_with(&self, player: Player, col: usize) -> bool {
        self.is_playable(col) && self.planes[player.index()].with(self.heights[col]).has_won()
    }

    /// Check for a winner or a full board
    pub fn test_win(&self) -> GameStatus {
        if self.planes[0].has_won() {
            GameStatus::Won(Player::One)
        } else if self.planes[1].has_won() {
            GameStatus::Won(Player::Two)
        } else if self.plies >= TOTAL_CELLS {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }

    /// Number of stones placed since the last reset
    #[inline]
    pub fn plies(&self) -> usize {
        self.plies
    }

    /// Player whose stone the next `place` drops
    #[inline]
    pub fn current_player(&self) -> Player {
        Player::for_ply(self.plies)
    }

    /// Bit plane of one player
    #[inline]
    pub fn plane(&self, player: Player) -> Bitboard {
        self.planes[player.index()]
    }

    /// Both bit planes, player 1 first
    #[inline]
    pub fn planes(&self) -> [Bitboard; 2] {
        self.planes
    }

    /// Bit index of the next free cell in `col`
    ///
    /// # Panics
    ///
    /// Panics if `col >= BOARD_WIDTH`.
    #[inline]
    pub fn height_cursor(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// Stones in `col`
    ///
    /// # Panics
    ///
    /// Panics if `col >= BOARD_WIDTH`.
    #[inline]
    pub fn column_height(&self, col: usize) -> usize {
        self.heights[col] - H1 * col
    }

    /// Columns played so far, oldest first
    #[inline]
    pub fn history(&self) -> &[u8] {
        &self.moves[..self.plies]
    }

    /// Position of the most recently placed stone
    pub fn last_move(&self) -> Option<Pos> {
        let col = *self.history().last()? as usize;
        let row = self.column_height(col) - 1;
        Some(Pos::new(row as u8, col as u8))
    }

    /// Iterate over playable columns in ascending order
    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..BOARD_WIDTH).filter(move |&col| self.is_playable(col))
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.plies == 0
    }
}

// Entries past `plies` in `moves` are stale and must not affect equality.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.planes == other.planes
            && self.heights == other.heights
            && self.history() == other.history()
    }
}

impl Eq for Board {}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
