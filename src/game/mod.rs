pub mod board;
pub mod grid;
pub mod state;

pub use board::{Board, Cell};
pub use grid::{from_point, to_point, Dimension, Direction, GridError, Point};
pub use state::{random_spot, Game};
