//! Board representation for Connect Four

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::{Bitboard, Direction};
pub use board::Board;

/// Number of columns
pub const BOARD_WIDTH: usize = 7;
/// Number of playable rows
pub const BOARD_HEIGHT: usize = 6;
/// Bits per column: playable rows plus the guard bit
pub const H1: usize = BOARD_HEIGHT + 1;
/// Stride of the rising diagonal
pub const H2: usize = BOARD_HEIGHT + 2;
/// Playable cells (42)
pub const TOTAL_CELLS: usize = BOARD_WIDTH * BOARD_HEIGHT;
/// Semantic bits per plane, guard bits included (49)
pub const PLANE_BITS: usize = H1 * BOARD_WIDTH;

/// The two sides. `One` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index of this player's bit plane
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Player number as shown to humans (1 or 2)
    #[inline]
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Player whose stone lands on the given ply
    #[inline]
    pub fn for_ply(ply: usize) -> Player {
        if ply & 1 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }
}

/// Content of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// Owner of the cell, if any
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::One),
            Cell::Player2 => Some(Player::Two),
        }
    }
}

/// Outcome of [`Board::test_win`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Neither side has four and free cells remain
    Ongoing,
    /// The given player has four in a line
    Won(Player),
    /// All cells filled without a line of four
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// Position on the board, row 0 is the bottom row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < BOARD_HEIGHT && (col as usize) < BOARD_WIDTH);
        Self { row, col }
    }

    /// Bit index inside a plane: `row + col * (height + 1)`
    #[inline]
    pub fn to_bit(self) -> usize {
        self.row as usize + self.col as usize * H1
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_HEIGHT as i32 && col >= 0 && col < BOARD_WIDTH as i32
    }
}
