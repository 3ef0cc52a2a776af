//! Integration tests against the public API

use connect4::board::BOARD_HEIGHT;
use connect4::{
    AIEngine, Board, BoardError, Cell, GameStatus, Player, Pos, SearchType, BOARD_WIDTH,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Cell-by-cell four-in-a-row scan
fn naive_winner(board: &Board) -> Option<Player> {
    const DIRS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];
    for row in 0..BOARD_HEIGHT as i32 {
        for col in 0..BOARD_WIDTH as i32 {
            let Some(player) = board.at(row as usize, col as usize).unwrap().player() else {
                continue;
            };
            for (dr, dc) in DIRS {
                let four = (1..4).all(|i| {
                    let (r, c) = (row + dr * i, col + dc * i);
                    Pos::is_valid(r, c)
                        && board.at(r as usize, c as usize).unwrap().player() == Some(player)
                });
                if four {
                    return Some(player);
                }
            }
        }
    }
    None
}

/// Drop random stones until the game ends; returns the columns played
fn random_playout(board: &mut Board, rng: &mut StdRng) -> Vec<usize> {
    let mut played = Vec::new();
    while !board.test_win().is_over() {
        let columns: Vec<usize> = board.playable_columns().collect();
        let col = columns[rng.random_range(0..columns.len())];
        board.place(col).unwrap();
        played.push(col);
    }
    played
}

#[test]
fn vertical_win_scenario() {
    let mut board = Board::new();
    for (ply, col) in [0, 1, 0, 1, 0, 1].into_iter().enumerate() {
        assert_eq!(board.current_player(), Player::for_ply(ply));
        board.place(col).unwrap();
        assert_eq!(board.test_win(), GameStatus::Ongoing);
    }
    board.place(0).unwrap();

    assert_eq!(board.test_win(), GameStatus::Won(Player::One));
    assert_eq!(board.at(3, 0), Ok(Cell::Player1));
    assert_eq!(board.at(2, 1), Ok(Cell::Player2));
    assert_eq!(
        board.get_markers(),
        Ok([Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0), Pos::new(3, 0)])
    );
}

#[test]
fn bitboard_win_check_agrees_with_cell_scan() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let mut board = Board::new();
        random_playout(&mut board, &mut rng);

        // Play stops at the first four, so at most one side has one
        match board.test_win() {
            GameStatus::Won(player) => {
                assert_eq!(naive_winner(&board), Some(player));
                assert!(board.get_markers().is_ok());
            }
            GameStatus::Draw => {
                assert_eq!(naive_winner(&board), None);
                assert!(board.playable_columns().next().is_none());
            }
            GameStatus::Ongoing => unreachable!(),
        }
    }
}

#[test]
fn random_playout_undo_restores_empty_board() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let mut board = Board::new();
        let played = random_playout(&mut board, &mut rng);
        assert_eq!(board.plies(), played.len());

        for &col in played.iter().rev() {
            assert_eq!(board.undo_last_move(), Ok(col));
        }
        assert_eq!(board, Board::new());
        assert_eq!(board.undo_last_move(), Err(BoardError::NoMoveToUndo));
    }
}

#[test]
fn engine_leaves_random_positions_untouched() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut engine = AIEngine::with_depth(3);

    for _ in 0..30 {
        let mut board = Board::new();
        let plies = rng.random_range(0..20);
        for _ in 0..plies {
            if board.test_win().is_over() {
                break;
            }
            let columns: Vec<usize> = board.playable_columns().collect();
            board.place(columns[rng.random_range(0..columns.len())]).unwrap();
        }
        if board.test_win().is_over() {
            continue;
        }

        let before = board;
        let player = board.current_player();
        let result = engine.get_move_with_stats(&mut board, player);
        assert_eq!(board, before);

        let col = result.best_move.unwrap();
        assert!(board.is_playable(col));
    }
}

#[test]
fn engine_self_play_finishes_with_legal_moves() {
    let mut board = Board::new();
    let mut engine = AIEngine::with_depth(4);

    while !board.test_win().is_over() {
        let player = board.current_player();
        let col = engine.get_move(&mut board, player).unwrap();
        board.place(col).unwrap();
    }
    assert!(board.plies() <= 42);
}

#[test]
fn engine_takes_win_then_blocks() {
    let mut engine = AIEngine::with_depth(2);

    // Player 1 owns row 0 at columns 1..=3; column 0 and 4 both finish it
    let mut board = Board::from_moves("1122336").unwrap();
    let result = engine.get_move_with_stats(&mut board, Player::Two);
    assert_eq!(result.search_type, SearchType::Block);
    assert_eq!(result.best_move, Some(0));

    let result = engine.get_move_with_stats(&mut board, Player::One);
    assert_eq!(result.search_type, SearchType::ImmediateWin);
    assert_eq!(result.best_move, Some(0));
}

#[test]
fn engine_is_deterministic() {
    let mut board = Board::from_moves("3324").unwrap();
    let mut engine = AIEngine::with_depth(6);
    let first = engine.get_move_with_stats(&mut board, Player::One);
    let second = engine.get_move_with_stats(&mut board, Player::One);
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.score, second.score);
    assert_eq!(first.nodes, second.nodes);
}

#[test]
fn misuse_is_rejected_without_side_effects() {
    let mut board = Board::from_moves("000000").unwrap();
    let before = board;

    assert_eq!(board.place(0), Err(BoardError::ColumnFull { column: 0 }));
    assert_eq!(
        board.place(BOARD_WIDTH),
        Err(BoardError::ColumnOutOfRange { column: BOARD_WIDTH })
    );
    assert_eq!(board.at(6, 0), Err(BoardError::OutOfRange { row: 6, col: 0 }));
    assert_eq!(board.get_markers(), Err(BoardError::MarkersRequestedWithoutWin));
    assert_eq!(board, before);
}
