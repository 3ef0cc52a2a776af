//! Heuristic evaluation function for Connect Four positions
//!
//! Every 4-cell window that holds none of the opponent's stones scores
//! `tally^4`, where `tally` is the number of the player's own stones in it.
//! Windows with 3 or 4 own stones dominate, which pulls the search toward
//! building open lines.

use crate::board::{Board, Player};

use super::patterns::{window_score, WINDOWS};

/// Evaluate the board from the perspective of `player` only.
///
/// The result is never negative: it does not subtract the opponent's view.
/// Comparing the two sides is the job of the search's sign.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let own = board.plane(player).bits();
    let opp = board.plane(player.opponent()).bits();

    WINDOWS
        .iter()
        .filter(|&&window| opp & window == 0)
        .map(|&window| window_score((own & window).count_ones()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Player::One), 0);
        assert_eq!(evaluate(&board, Player::Two), 0);
    }

    #[test]
    fn test_single_corner_stone() {
        // (0,0) lies in 3 windows: vertical, horizontal, rising diagonal
        let board = Board::from_moves("0").unwrap();
        assert_eq!(evaluate(&board, Player::One), 3);
    }

    #[test]
    fn test_center_beats_corner() {
        let center = Board::from_moves("3").unwrap();
        let corner = Board::from_moves("0").unwrap();
        assert!(evaluate(&center, Player::One) > evaluate(&corner, Player::One));
    }

    #[test]
    fn test_opponent_blocks_windows() {
        // P2 on (0,1) kills every window through it for P1
        let board = Board::from_moves("01").unwrap();
        // P1 keeps the vertical window and the rising diagonal
        assert_eq!(evaluate(&board, Player::One), 2);
    }

    #[test]
    fn test_three_in_window_weighs_heavily() {
        // P1: (0,0) (0,1) (0,2); P2 stacked above in columns 0 and 1
        let board = Board::from_moves("00112").unwrap();
        let score = evaluate(&board, Player::One);
        // Horizontal (0,0)..(0,3) holds three: 81 on its own
        assert_eq!(score, 101);
    }

    #[test]
    fn test_evaluate_is_one_sided() {
        // P2 sits above P1 in column 3; each side counts only its own windows
        let board = Board::from_moves("33").unwrap();
        assert_eq!(evaluate(&board, Player::One), 6);
        assert_eq!(evaluate(&board, Player::Two), 9);
    }
}
