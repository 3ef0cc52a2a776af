//! Main application for the Connect Four GUI

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, Frame, RichText, TopBottomPanel, ViewportCommand};

use super::board_view::BoardView;
use super::game_state::{GamePhase, GameState};
use super::theme::*;

const TITLE: &str = "Connect Four Game";
const FPS_UPDATE_INTERVAL: Duration = Duration::from_secs(1);

/// Frame-rate counter shown in the window title
struct FpsCounter {
    frames: u32,
    busy: Duration,
    next_update: Instant,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frames: 0,
            busy: Duration::ZERO,
            next_update: Instant::now() + FPS_UPDATE_INTERVAL,
        }
    }

    /// Record one frame; returns a new title once per interval
    fn record(&mut self, frame_time: Duration) -> Option<String> {
        self.frames += 1;
        self.busy += frame_time;

        let now = Instant::now();
        if now < self.next_update {
            return None;
        }

        let interval = FPS_UPDATE_INTERVAL + (now - self.next_update);
        let fps = f64::from(self.frames) / interval.as_secs_f64();
        let ms = self.busy.as_secs_f64() * 1e3 / f64::from(self.frames);

        self.frames = 0;
        self.busy = Duration::ZERO;
        self.next_update = now + FPS_UPDATE_INTERVAL;

        Some(format!("{} {:.3} FPS {:.3} ms", TITLE, fps, ms))
    }
}

/// Main Connect Four application
pub struct Connect4App {
    state: GameState,
    board_view: BoardView,
    fps: FpsCounter,
}

impl Default for Connect4App {
    fn default() -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
            fps: FpsCounter::new(),
        }
    }
}

impl Connect4App {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the status line under the board
    fn render_status(&self, ctx: &Context) {
        TopBottomPanel::bottom("status")
            .exact_height(STATUS_HEIGHT)
            .frame(Frame::new().fill(BOARD_BG).inner_margin(4.0))
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(self.state.status_text())
                        .size(TEXT_SIZE)
                        .monospace()
                        .color(TEXT_PRIMARY),
                );
                if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                    ui.label(
                        RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                            .size(TEXT_SIZE * 0.75)
                            .color(TEXT_PRIMARY),
                    );
                } else if let Some(msg) = &self.state.message {
                    ui.label(RichText::new(msg).size(TEXT_SIZE * 0.75).color(TEXT_PRIMARY));
                }
            });
    }

    /// Render the board and drop a stone on click
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                let accept_input = self.state.phase == GamePhase::Start;
                let clicked = self.board_view.show(
                    ui,
                    &self.state.board,
                    self.state.markers.as_ref(),
                    accept_input,
                );

                if let Some(col) = clicked {
                    if let Err(msg) = self.state.try_place_stone(col) {
                        self.state.message = Some(msg);
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (close, undo, solve) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Z),
                i.key_pressed(egui::Key::X),
            )
        });

        if close {
            ctx.send_viewport_cmd(ViewportCommand::Close);
            return;
        }

        // Everything else waits for the engine
        if self.state.is_working() {
            return;
        }

        if undo {
            self.state.undo();
        } else if solve {
            self.state.solve_or_restart();
        }
    }
}

impl eframe::App for Connect4App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let start = Instant::now();

        self.handle_input(ctx);

        // Check engine result
        self.state.check_ai_result();

        self.render_status(ctx);
        self.render_board(ctx);

        if let Some(title) = self.fps.record(start.elapsed()) {
            ctx.send_viewport_cmd(ViewportCommand::Title(title));
        }

        // Keep frames flowing for the counter and the engine poll
        ctx.request_repaint();
    }
}
