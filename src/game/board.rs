use crate::game::grid::{from_point, Dimension, Direction, GridError, Point};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Wall,
    Space,
    Entity(Option<Direction>),
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Space => ' ',
            // An entity that has never moved shows the resting body.
            Cell::Entity(facing) => facing.map_or('A', Direction::glyph),
        }
    }
}

#[derive(Clone)]
pub struct Board {
    pub bounds: Dimension,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(bounds: Dimension) -> Self {
        let cells = (0..bounds.area())
            .map(|i| {
                // First/last column or first/last row of the flat buffer.
                if i % bounds.width == 0
                    || i / bounds.width == 0
                    || i % bounds.width == bounds.width - 1
                    || i / bounds.width == bounds.height - 1
                {
                    Cell::Wall
                } else {
                    Cell::Space
                }
            })
            .collect();
        Self { bounds, cells }
    }

    pub fn get(&self, p: Point) -> Result<Cell, GridError> {
        Ok(self.cells[from_point(p, self.bounds)?])
    }

    pub fn set(&mut self, p: Point, value: Cell) -> Result<(), GridError> {
        let idx = from_point(p, self.bounds)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Put a vacated cell back to its terrain: Wall on the border ring, Space inside.
    pub fn restore(&mut self, p: Point) -> Result<(), GridError> {
        let terrain = if self.bounds.on_border(p) {
            Cell::Wall
        } else {
            Cell::Space
        };
        self.set(p, terrain)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
