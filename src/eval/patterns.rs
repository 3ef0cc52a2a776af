//! Window masks for Connect Four evaluation
//!
//! A window is any 4 cells in a straight line that fit on the grid. Each one
//! is stored as a plane mask, so scoring a window is an AND and a popcount.

use crate::board::{BOARD_HEIGHT, BOARD_WIDTH, H1};

/// Vertical windows: 3 start rows × 7 columns
const VERTICAL: usize = (BOARD_HEIGHT - 3) * BOARD_WIDTH;
/// Horizontal windows: 6 rows × 4 start columns
const HORIZONTAL: usize = BOARD_HEIGHT * (BOARD_WIDTH - 3);
/// Windows per diagonal direction: 3 × 4
const DIAGONAL: usize = (BOARD_HEIGHT - 3) * (BOARD_WIDTH - 3);

/// Total number of 4-cell windows on the board (69)
pub const WINDOW_COUNT: usize = VERTICAL + HORIZONTAL + 2 * DIAGONAL;

/// Every 4-cell window as a bit mask
pub const WINDOWS: [u64; WINDOW_COUNT] = build_windows();

/// Mask of 4 cells starting at (row, col), stepping (dr, dc)
const fn line(row: usize, col: usize, dr: isize, dc: isize) -> u64 {
    let mut mask = 0u64;
    let mut i = 0;
    while i < 4 {
        let r = row as isize + dr * i;
        let c = col as isize + dc * i;
        mask |= 1u64 << (r as usize + c as usize * H1);
        i += 1;
    }
    mask
}

const fn build_windows() -> [u64; WINDOW_COUNT] {
    let mut windows = [0u64; WINDOW_COUNT];
    let mut n = 0;
    let mut row = 0;
    while row < BOARD_HEIGHT {
        let mut col = 0;
        while col < BOARD_WIDTH {
            let fits_up = row + 3 < BOARD_HEIGHT;
            let fits_right = col + 3 < BOARD_WIDTH;
            let fits_down = row >= 3;
            if fits_up {
                windows[n] = line(row, col, 1, 0);
                n += 1;
            }
            if fits_right {
                windows[n] = line(row, col, 0, 1);
                n += 1;
            }
            if fits_up && fits_right {
                windows[n] = line(row, col, 1, 1);
                n += 1;
            }
            if fits_down && fits_right {
                windows[n] = line(row, col, -1, 1);
                n += 1;
            }
            col += 1;
        }
        row += 1;
    }
    windows
}

/// Score of an unblocked window holding `tally` friendly stones
#[inline]
pub const fn window_score(tally: u32) -> i32 {
    let t = tally as i32;
    t * t * t * t
}
