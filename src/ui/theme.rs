//! Theme constants for the Connect Four GUI

use egui::Color32;

use crate::board::{BOARD_HEIGHT, BOARD_WIDTH};

// Board
pub const BOARD_BG: Color32 = Color32::from_rgb(255, 255, 0);
pub const EMPTY_CELL: Color32 = Color32::WHITE;

// Stones
pub const PLAYER_ONE_STONE: Color32 = Color32::from_rgb(255, 0, 0);
pub const PLAYER_TWO_STONE: Color32 = Color32::BLACK;

// Winning line markers
pub const WIN_MARKER: Color32 = Color32::WHITE;

pub fn hover_column() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

// Status line
pub const TEXT_PRIMARY: Color32 = Color32::BLACK;
pub const TEXT_SIZE: f32 = 16.0;

// Sizes
pub const CELL_SIZE: f32 = 64.0;
/// Stone diameter relative to its cell
pub const STONE_SCALE: f32 = 0.9;
/// Marker diameter relative to its cell
pub const MARKER_SCALE: f32 = 0.5;
/// Status line area: two lines of text plus padding
pub const STATUS_HEIGHT: f32 = TEXT_SIZE * 3.0;

pub const WINDOW_WIDTH: f32 = CELL_SIZE * BOARD_WIDTH as f32;
pub const WINDOW_HEIGHT: f32 = CELL_SIZE * BOARD_HEIGHT as f32 + STATUS_HEIGHT;
