use std::fmt;

use super::direction::Direction;

/// A grid coordinate. Row 0 is the top line of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn euclidean_distance(self, other: Self) -> f64 {
        let dr = self.row.abs_diff(other.row) as f64;
        let dc = self.col.abs_diff(other.col) as f64;
        dr.hypot(dc)
    }

    /// Step one cell in `direction`, staying inside a `(height, width)` box.
    pub fn step(self, direction: Direction, bounds: (usize, usize)) -> Option<Self> {
        let (height, width) = bounds;
        match direction {
            Direction::Up if self.row > 0 => Some(Self::new(self.row - 1, self.col)),
            Direction::Down if self.row + 1 < height => Some(Self::new(self.row + 1, self.col)),
            Direction::Left if self.col > 0 => Some(Self::new(self.row, self.col - 1)),
            Direction::Right if self.col + 1 < width => Some(Self::new(self.row, self.col + 1)),
            _ => None,
        }
    }

    /// In-bounds axis neighbors in up, down, left, right order.
    pub fn neighbors(self, bounds: (usize, usize)) -> impl Iterator<Item = (Self, Direction)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(dir, bounds).map(|cell| (cell, dir)))
    }

    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
