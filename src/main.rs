use std::error::Error;

mod app;
mod config;
mod game;
mod ui;
pub use config::{DRIFT_TICK_MS, HEIGHT_MARGIN, INPUT_POLL_MS, MIN_BOARD_DIM};
pub use game::{Board, Cell, Dimension, Direction, Game, GridError, Point};

fn main() -> Result<(), Box<dyn Error>> {
    app::run()
}
