//! Board rendering for the Connect Four GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Vec2};

use crate::board::{Cell, BOARD_HEIGHT, BOARD_WIDTH};
use crate::{Board, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked column if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        markers: Option<&[Pos; 4]>,
        accept_input: bool,
    ) -> Option<usize> {
        let available = ui.available_size();

        // Square cells that fit the available area
        self.cell_size = (available.x / BOARD_WIDTH as f32)
            .min(available.y / BOARD_HEIGHT as f32)
            .max(1.0);

        let (response, painter) = ui.allocate_painter(
            Vec2::new(
                self.cell_size * BOARD_WIDTH as f32,
                self.cell_size * BOARD_HEIGHT as f32,
            ),
            Sense::click(),
        );
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(0), BOARD_BG);

        let hovered = response
            .hover_pos()
            .and_then(|pointer| self.screen_to_column(pointer));

        if accept_input {
            if let Some(col) = hovered.filter(|&col| board.is_playable(col)) {
                self.draw_column_hover(&painter, col);
            }
        }

        self.draw_stones(&painter, board);

        if let Some(cells) = markers {
            self.draw_markers(&painter, cells);
        }

        if accept_input && response.clicked() {
            hovered
        } else {
            None
        }
    }

    fn draw_column_hover(&self, painter: &Painter, col: usize) {
        let min = Pos2::new(
            self.board_rect.min.x + col as f32 * self.cell_size,
            self.board_rect.min.y,
        );
        let rect = Rect::from_min_size(min, Vec2::new(self.cell_size, self.board_rect.height()));
        painter.rect_filled(rect, CornerRadius::same(0), hover_column());
    }

    /// Draw every cell; empty cells are white holes
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        let radius = self.cell_size * STONE_SCALE / 2.0;

        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                let pos = Pos::new(row as u8, col as u8);
                let color = match board.cell(pos) {
                    Cell::Empty => EMPTY_CELL,
                    Cell::Player1 => PLAYER_ONE_STONE,
                    Cell::Player2 => PLAYER_TWO_STONE,
                };
                painter.circle_filled(self.board_to_screen(pos), radius, color);
            }
        }
    }

    /// Draw the winning line markers
    fn draw_markers(&self, painter: &Painter, cells: &[Pos; 4]) {
        let radius = self.cell_size * MARKER_SCALE / 2.0;
        for &pos in cells {
            painter.circle_filled(self.board_to_screen(pos), radius, WIN_MARKER);
        }
    }

    /// Center of a cell on screen. Row 0 is drawn at the bottom.
    fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let flipped = (BOARD_HEIGHT - 1 - pos.row as usize) as f32;
        Pos2::new(
            self.board_rect.min.x + (pos.col as f32 + 0.5) * self.cell_size,
            self.board_rect.min.y + (flipped + 0.5) * self.cell_size,
        )
    }

    /// Column under a screen point
    fn screen_to_column(&self, screen: Pos2) -> Option<usize> {
        if !self.board_rect.contains(screen) {
            return None;
        }
        let col = ((screen.x - self.board_rect.min.x) / self.cell_size) as usize;
        (col < BOARD_WIDTH).then_some(col)
    }
}
