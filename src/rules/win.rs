//! Winning-line lookup for display
//!
//! Win *detection* is the bit trick in [`Bitboard::has_won`]. This module
//! answers the follow-up question the front end asks once a win is known:
//! which 4 cells form the line, so they can be marked.
//!
//! [`Bitboard::has_won`]: crate::board::Bitboard::has_won

use crate::board::{Board, Pos, BOARD_HEIGHT, BOARD_WIDTH};
use crate::error::{BoardError, BoardResult};

/// Row steps of the sweeps through the last stone, in scan order:
/// falling diagonal, horizontal, rising diagonal. Column step is always +1.
const SWEEPS: [i32; 3] = [-1, 0, 1];

/// Find the 4 cells of the winning line through the last-placed stone.
///
/// Scan order: vertical first, then the falling diagonal, the horizontal
/// and the rising diagonal. Only the first axis holding a run of four is
/// reported, even if the last stone completed more than one line.
pub fn find_winning_line(board: &Board) -> BoardResult<[Pos; 4]> {
    let last = board.last_move().ok_or(BoardError::MarkersRequestedWithoutWin)?;
    let owner = board.cell(last);
    let (y, x) = (i32::from(last.row), i32::from(last.col));

    let same = |row: i32, col: i32| -> bool {
        Pos::is_valid(row, col) && board.cell(Pos::new(row as u8, col as u8)) == owner
    };

    // Vertical: the last stone is always on top of its column
    if y >= 3 && (1..=3).all(|i| same(y - i, x)) {
        return Ok(line(y - 3, x, 1, 0));
    }

    for dy in SWEEPS {
        let mut run = 0;

        let mut dx = 1;
        while same(y + dx * dy, x + dx) {
            run += 1;
            dx += 1;
        }

        dx = -1;
        while same(y + dx * dy, x + dx) {
            run += 1;
            dx -= 1;
        }

        if run >= 3 {
            // `dx` stopped one step past the leftmost matching cell
            let start = dx + 1;
            return Ok(line(y + start * dy, x + start, dy, 1));
        }
    }

    Err(BoardError::MarkersRequestedWithoutWin)
}

/// 4 positions from (row, col) stepping (dr, dc)
fn line(row: i32, col: i32, dr: i32, dc: i32) -> [Pos; 4] {
    std::array::from_fn(|i| {
        let i = i as i32;
        let (r, c) = (row + dr * i, col + dc * i);
        debug_assert!(r >= 0 && r < BOARD_HEIGHT as i32 && c >= 0 && c < BOARD_WIDTH as i32);
        Pos::new(r as u8, c as u8)
    })
}

impl Board {
    /// Cells of the winning line, valid right after [`Board::test_win`]
    /// reported a win.
    ///
    /// Fails with [`BoardError::MarkersRequestedWithoutWin`] when the last
    /// stone is not part of a line of four.
    pub fn get_markers(&self) -> BoardResult<[Pos; 4]> {
        find_winning_line(self)
    }
}
