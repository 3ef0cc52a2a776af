//! GUI module for the Connect Four game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::Connect4App;
pub use game_state::{AiState, GamePhase, GameState};
pub use theme::{WINDOW_HEIGHT, WINDOW_WIDTH};
