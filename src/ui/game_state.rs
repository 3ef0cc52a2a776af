//! Game state management for the Connect Four GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::engine::MAX_SEARCH_DEPTH;
use crate::{AIEngine, Board, GameStatus, MoveResult, Player, Pos};

/// Phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the current player's move
    Start,
    /// The engine is searching; input is ignored
    Working,
    /// Someone won or the board is full
    End,
}

/// Engine computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub phase: GamePhase,
    /// Result of the last finished game, `Ongoing` while playing
    pub outcome: GameStatus,
    /// Cells of the winning line, set when a player wins
    pub markers: Option<[Pos; 4]>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,

    ai_depth: i32,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_depth(MAX_SEARCH_DEPTH)
    }

    /// Session whose engine searches to `ai_depth`
    pub fn with_depth(ai_depth: i32) -> Self {
        Self {
            board: Board::new(),
            phase: GamePhase::Start,
            outcome: GameStatus::Ongoing,
            markers: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            ai_depth,
        }
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.phase = GamePhase::Start;
        self.outcome = GameStatus::Ongoing;
        self.markers = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    /// Player whose stone drops next
    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    /// Check if the engine is currently searching
    pub fn is_working(&self) -> bool {
        self.phase == GamePhase::Working
    }

    /// Drop the current player's stone into `col` (mouse input)
    pub fn try_place_stone(&mut self, col: usize) -> Result<(), String> {
        match self.phase {
            GamePhase::Working => return Err("Engine is thinking".to_string()),
            GamePhase::End => return Err("Game is over".to_string()),
            GamePhase::Start => {}
        }

        if let Err(err) = self.board.place(col) {
            warn!("rejected move: {}", err);
            return Err(err.to_string());
        }

        self.message = None;
        self.conclude_move();
        Ok(())
    }

    /// Take back the last stone (`Z`). Leaves the game-over state.
    pub fn undo(&mut self) {
        if self.is_working() {
            return;
        }

        match self.board.undo_last_move() {
            Ok(col) => {
                info!("undo: column {}", col);
                self.phase = GamePhase::Start;
                self.outcome = GameStatus::Ongoing;
                self.markers = None;
                self.message = None;
            }
            Err(err) => warn!("undo ignored: {}", err),
        }
    }

    /// Let the engine move for the current player, or restart after game
    /// over (`X`).
    pub fn solve_or_restart(&mut self) {
        match self.phase {
            GamePhase::Working => {}
            GamePhase::End => self.reset(),
            GamePhase::Start => self.start_ai_thinking(),
        }
    }

    /// Start the engine on a snapshot of the board
    fn start_ai_thinking(&mut self) {
        let mut snapshot = self.board;
        let player = self.current_player();
        let depth = self.ai_depth;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_depth(depth);
            let result = engine.get_move_with_stats(&mut snapshot, player);
            let _ = tx.send(result);
        });

        self.phase = GamePhase::Working;
        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if the engine has finished searching
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    warn!("engine thread exited without a result");
                    self.ai_state = AiState::Idle;
                    self.phase = GamePhase::Start;
                    self.message = Some("Engine error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        self.phase = GamePhase::Start;

        match result.best_move {
            Some(col) => match self.board.place(col) {
                Ok(()) => self.conclude_move(),
                Err(err) => {
                    warn!("engine move rejected: {}", err);
                    self.message = Some(err.to_string());
                }
            },
            None => self.message = Some("No playable column".to_string()),
        }

        self.last_ai_result = Some(result);
    }

    /// Get engine thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Move to `End` if the stone just placed finished the game
    fn conclude_move(&mut self) {
        let status = self.board.test_win();
        if !status.is_over() {
            return;
        }

        self.outcome = status;
        self.phase = GamePhase::End;
        self.markers = match status {
            GameStatus::Won(_) => self.board.get_markers().ok(),
            _ => None,
        };
        info!("game over: {:?}", status);
    }

    /// Text shown under the board
    pub fn status_text(&self) -> String {
        let player = self.current_player().number();
        match (self.phase, self.outcome) {
            (GamePhase::End, GameStatus::Won(winner)) => format!(
                "Player {} won.\nPress Z to undo, X to restart.",
                winner.number()
            ),
            (GamePhase::End, _) => "Draw.\nPress X to restart.".to_string(),
            (GamePhase::Working, _) => {
                format!("Finding the best move for player {}...", player)
            }
            (GamePhase::Start, _) => {
                format!("Player {} turn.\nPress Z to undo, X to solve.", player)
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Poll until the engine thread reports back
    fn wait_for_engine(state: &mut GameState) {
        while state.is_working() {
            state.check_ai_result();
            thread::sleep(Duration::from_millis(1));
        }
    }

    fn play(state: &mut GameState, moves: &str) {
        for ch in moves.chars() {
            let col = ch.to_digit(10).unwrap() as usize;
            state.try_place_stone(col).unwrap();
        }
    }

    #[test]
    fn test_place_alternates_players() {
        let mut state = GameState::new();
        assert_eq!(state.current_player(), Player::One);
        state.try_place_stone(3).unwrap();
        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.phase, GamePhase::Start);
    }

    #[test]
    fn test_full_column_rejected() {
        let mut state = GameState::new();
        play(&mut state, "000000");
        assert!(state.try_place_stone(0).is_err());
        assert_eq!(state.board.plies(), 6);
    }

    #[test]
    fn test_win_ends_game_with_markers() {
        let mut state = GameState::new();
        play(&mut state, "0101010");
        assert_eq!(state.phase, GamePhase::End);
        assert_eq!(state.outcome, GameStatus::Won(Player::One));
        assert_eq!(
            state.markers,
            Some([Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0), Pos::new(3, 0)])
        );
        assert!(state.try_place_stone(2).is_err());
        assert!(state.status_text().starts_with("Player 1 won."));
    }

    #[test]
    fn test_undo_leaves_end_state() {
        let mut state = GameState::new();
        play(&mut state, "0101010");
        state.undo();
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.markers, None);
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.board.plies(), 6);
    }

    #[test]
    fn test_undo_on_empty_board_is_ignored() {
        let mut state = GameState::new();
        state.undo();
        assert!(state.board.is_board_empty());
        assert_eq!(state.phase, GamePhase::Start);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = GameState::new();
        play(&mut state, "0101010");
        state.solve_or_restart();
        assert_eq!(state.phase, GamePhase::Start);
        assert!(state.board.is_board_empty());
        assert_eq!(state.outcome, GameStatus::Ongoing);
    }

    #[test]
    fn test_engine_move_is_applied() {
        let mut state = GameState::with_depth(2);
        play(&mut state, "01010");
        state.solve_or_restart();
        assert!(state.is_working());
        assert!(state.ai_thinking_elapsed().is_some());
        // Input is ignored while the engine works
        assert!(state.try_place_stone(6).is_err());
        state.undo();
        assert_eq!(state.board.plies(), 5);

        wait_for_engine(&mut state);
        // Player 2 blocks column 0
        assert_eq!(state.board.history(), &[0, 1, 0, 1, 0, 0]);
        assert_eq!(state.phase, GamePhase::Start);
        assert!(state.last_ai_result.is_some());
        assert_eq!(state.ai_thinking_elapsed(), None);
    }

    #[test]
    fn test_engine_winning_move_ends_game() {
        let mut state = GameState::with_depth(2);
        play(&mut state, "010101");
        state.solve_or_restart();
        wait_for_engine(&mut state);
        assert_eq!(state.phase, GamePhase::End);
        assert_eq!(state.outcome, GameStatus::Won(Player::One));
        assert!(state.markers.is_some());
    }
}
