//! Bitboard implementation for branch-free legality and win checks
//!
//! Bit layout of one plane (numbers are bit indices):
//!
//! ```text
//!   6 13 20 27 34 41 48   guard row
//! +---------------------+
//! | 5 12 19 26 33 40 47 | top row
//! | 4 11 18 25 32 39 46 |
//! | 3 10 17 24 31 38 45 |
//! | 2  9 16 23 30 37 44 |
//! | 1  8 15 22 29 36 43 |
//! | 0  7 14 21 28 35 42 | bottom row
//! +---------------------+
//! ```
//!
//! The guard bit above each column stays zero in every legal plane. It keeps
//! a shifted run from one column from lining up with the next column, and it
//! makes "column full" a single mask test.

use super::{BOARD_HEIGHT, H1, H2, PLANE_BITS};

/// One full column of bits, guard included
const COLUMN: u64 = (1u64 << H1) - 1;
/// Every semantic bit of a plane
const ALL: u64 = (1u64 << PLANE_BITS) - 1;
/// Bottom cell of every column
pub const BOTTOM: u64 = ALL / COLUMN;
/// Guard bit of every column
pub const TOP: u64 = BOTTOM << BOARD_HEIGHT;

/// Line directions and their shift strides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Vertical,
    Horizontal,
    /// Rising to the right (`/`)
    DiagonalUp,
    /// Falling to the right (`\`)
    DiagonalDown,
}

impl Direction {
    /// Bit distance between neighbouring cells along this direction
    #[inline]
    pub const fn stride(self) -> usize {
        match self {
            Direction::Vertical => 1,
            Direction::Horizontal => H1,
            Direction::DiagonalUp => H2,
            Direction::DiagonalDown => BOARD_HEIGHT,
        }
    }
}

/// Occupancy of one player as a packed `u64`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Set a bit
    #[inline]
    pub fn set(&mut self, bit: usize) {
        self.0 |= 1u64 << bit;
    }

    /// Clear a bit
    #[inline]
    pub fn clear(&mut self, bit: usize) {
        self.0 &= !(1u64 << bit);
    }

    /// Check if bit is set
    #[inline]
    pub fn get(self, bit: usize) -> bool {
        (self.0 >> bit) & 1 == 1
    }

    /// Copy of this plane with one more bit set
    #[inline]
    pub fn with(self, bit: usize) -> Self {
        Self(self.0 | (1u64 << bit))
    }

    /// True iff no guard bit is set, i.e. no column overflowed
    #[inline]
    pub fn is_legal(self) -> bool {
        self.0 & TOP == 0
    }

    /// Adjacent pairs along `dir`: bit `i` is set iff `i` and `i + stride` are
    #[inline]
    fn pairs(self, dir: Direction) -> u64 {
        self.0 & (self.0 >> dir.stride())
    }

    /// Starting bits of every line of four, all directions OR-ed together.
    ///
    /// Each direction needs two shifted ANDs: the first marks pairs, the
    /// second looks for a pair followed by another pair two cells on.
    #[inline]
    pub fn fours(self) -> u64 {
        let diag_down = self.pairs(Direction::DiagonalDown);
        let hori = self.pairs(Direction::Horizontal);
        let diag_up = self.pairs(Direction::DiagonalUp);
        let vert = self.pairs(Direction::Vertical);
        (diag_down & (diag_down >> (2 * Direction::DiagonalDown.stride())))
            | (hori & (hori >> (2 * Direction::Horizontal.stride())))
            | (diag_up & (diag_up >> (2 * Direction::DiagonalUp.stride())))
            | (vert & (vert >> (2 * Direction::Vertical.stride())))
    }

    /// True iff the plane holds four in a line
    #[inline]
    pub fn has_won(self) -> bool {
        self.fours() != 0
    }
}
