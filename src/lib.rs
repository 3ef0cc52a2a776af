//! Connect Four engine
//!
//! A compact Connect Four engine on a 7-column, 6-row board:
//! - Two bitboards, one per player, with a guard bit above every column
//! - Branch-free four-in-a-row detection with shifts and masks
//! - Window-count heuristic evaluation
//! - Negamax search with alpha-beta pruning to a fixed depth
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and move history
//! - [`rules`]: Winning-line lookup for display
//! - [`eval`]: Position evaluation
//! - [`search`]: Negamax with alpha-beta pruning
//! - [`engine`]: Main AI engine with tactical shortcuts
//! - [`ui`]: Desktop front end
//!
//! # Quick Start
//!
//! ```
//! use connect4::{AIEngine, Board, GameStatus};
//!
//! let mut board = Board::new();
//! board.place(3).unwrap();
//!
//! // Engine answers for the side to move
//! let mut engine = AIEngine::with_depth(4);
//! let player = board.current_player();
//! if let Some(col) = engine.get_move(&mut board, player) {
//!     board.place(col).unwrap();
//!     println!("AI plays column {}", col);
//! }
//! assert_eq!(board.test_win(), GameStatus::Ongoing);
//! ```
//!
//! # Search Priority
//!
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Negamax search, default depth 8

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, GameStatus, Player, Pos, BOARD_HEIGHT, BOARD_WIDTH};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{BoardError, BoardResult};
