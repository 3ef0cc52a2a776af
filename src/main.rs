//! Connect Four GUI
//!
//! Play on a 7×6 board against another person or let the engine move.

use connect4::ui::{Connect4App, WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_resizable(false)
            .with_title("Connect Four Game"),
        vsync: true,
        ..Default::default()
    };

    eframe::run_native(
        "Connect Four",
        options,
        Box::new(|cc| Ok(Box::new(Connect4App::new(cc)))),
    )
}
