use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Dimension {
    pub width: usize,
    pub height: usize,
}

impl Dimension {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    pub fn on_border(&self, p: Point) -> bool {
        p.x == 0 || p.y == 0 || p.x == self.width as i32 - 1 || p.y == self.height as i32 - 1
    }

    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn stepped(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Direction::Up => 'A',
            Direction::Down => 'v',
            Direction::Right => '>',
            Direction::Left => '<',
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GridError {
    IndexOutOfBounds { index: usize, area: usize },
    PointOutOfBounds { x: i32, y: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::IndexOutOfBounds { index, area } => {
                write!(f, "linear index {index} out of bounds (board holds {area} cells)")
            }
            GridError::PointOutOfBounds { x, y } => {
                write!(f, "point ({x}, {y}) out of bounds")
            }
        }
    }
}

impl Error for GridError {}

/// Unfold a linear buffer index into board coordinates.
pub fn to_point(index: usize, bounds: Dimension) -> Result<Point, GridError> {
    if index >= bounds.area() {
        return Err(GridError::IndexOutOfBounds {
            index,
            area: bounds.area(),
        });
    }
    Ok(Point::new(
        (index % bounds.width) as i32,
        (index / bounds.width) as i32,
    ))
}

/// Fold board coordinates back into a linear buffer index.
pub fn from_point(p: Point, bounds: Dimension) -> Result<usize, GridError> {
    if !bounds.contains(p) {
        return Err(GridError::PointOutOfBounds { x: p.x, y: p.y });
    }
    Ok(p.y as usize * bounds.width + p.x as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_point_round_trip() {
        for bounds in [Dimension::new(5, 4), Dimension::new(3, 3), Dimension::new(80, 22)] {
            for i in 0..bounds.area() {
                let p = to_point(i, bounds).unwrap();
                assert!(bounds.contains(p));
                assert_eq!(from_point(p, bounds).unwrap(), i);
            }
        }
    }

    #[test]
    fn to_point_rejects_index_past_the_buffer() {
        let bounds = Dimension::new(5, 4);
        assert_eq!(
            to_point(20, bounds),
            Err(GridError::IndexOutOfBounds { index: 20, area: 20 })
        );
    }

    #[test]
    fn from_point_rejects_coordinates_off_the_grid() {
        let bounds = Dimension::new(5, 4);
        for p in [
            Point::new(-1, 2),
            Point::new(2, -1),
            Point::new(5, 0),
            Point::new(0, 4),
        ] {
            assert_eq!(from_point(p, bounds), Err(GridError::PointOutOfBounds { x: p.x, y: p.y }));
        }
    }

    #[test]
    fn deltas_match_screen_directions() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (-1, 0));
    }

    #[test]
    fn border_predicate_covers_exactly_the_perimeter() {
        let bounds = Dimension::new(5, 4);
        let border: Vec<usize> = (0..bounds.area())
            .filter(|&i| bounds.on_border(to_point(i, bounds).unwrap()))
            .collect();
        assert_eq!(border, vec![0, 1, 2, 3, 4, 5, 9, 10, 14, 15, 16, 17, 18, 19]);
    }

    #[test]
    fn center_lands_inside_reasonable_boards() {
        let bounds = Dimension::new(9, 7);
        let c = bounds.center();
        assert_eq!(c, Point::new(4, 3));
        assert!(!bounds.on_border(c));
    }
}
