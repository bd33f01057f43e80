use rand::Rng;

use crate::game::board::{Board, Cell};
use crate::game::grid::{Dimension, Direction, GridError, Point};

/// One movable entity on a walled board. Exactly one cell carries the entity
/// at any time; the cell it vacates is restored to its terrain.
pub struct Game {
    pub board: Board,
    position: Point,
    facing: Option<Direction>,
}

impl Game {
    /// Walk setup: the entity starts at the dimension-derived center.
    pub fn new(bounds: Dimension) -> Result<Self, GridError> {
        Self::at(bounds, bounds.center())
    }

    /// Drift setup: the marker starts on a random open cell.
    pub fn with_random_spot(bounds: Dimension, rng: &mut impl Rng) -> Result<Self, GridError> {
        let spot = random_spot(bounds, rng);
        Self::at(bounds, spot)
    }

    fn at(bounds: Dimension, position: Point) -> Result<Self, GridError> {
        let mut board = Board::new(bounds);
        board.set(position, Cell::Entity(None))?;
        Ok(Self {
            board,
            position,
            facing: None,
        })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn facing(&self) -> Option<Direction> {
        self.facing
    }

    /// Move the entity one cell and turn its glyph. Walls are deliberately
    /// not collision-checked; only a step off the grid itself is refused,
    /// in which case the entity turns in place and `Ok(false)` comes back.
    pub fn step(&mut self, dir: Direction) -> Result<bool, GridError> {
        self.facing = Some(dir);
        let target = self.position.stepped(dir);
        if !self.board.bounds.contains(target) {
            self.board.set(self.position, Cell::Entity(self.facing))?;
            return Ok(false);
        }
        self.board.restore(self.position)?;
        self.board.set(target, Cell::Entity(self.facing))?;
        self.position = target;
        Ok(true)
    }

    /// Teleport the marker to a fresh random open cell.
    pub fn drift(&mut self, rng: &mut impl Rng) -> Result<(), GridError> {
        let next = random_spot(self.board.bounds, rng);
        self.board.restore(self.position)?;
        self.board.set(next, Cell::Entity(self.facing))?;
        self.position = next;
        Ok(())
    }
}

/// Uniform position strictly inside the border ring. Needs a board of at
/// least 3x3 cells, which the startup probe guarantees.
pub fn random_spot(bounds: Dimension, rng: &mut impl Rng) -> Point {
    let x = rng.gen_range(1..bounds.width as i32 - 1);
    let y = rng.gen_range(1..bounds.height as i32 - 1);
    Point::new(x, y)
}
