use std::path::Path;

use super::{cell::Cell, terrain::Terrain};
use crate::error::{GridError, Marker, Result};

/// Read-only rectangular grid with exactly one start and one goal.
///
/// Nothing mutates a `Grid` after [`Grid::load`]; renderers work on their
/// own copies of the symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Terrain>,
    width: usize,
    height: usize,
    start: Cell,
    goal: Cell,
}

impl Grid {
    /// Parse grid text: one row per line using `0`, `X`, `S` and `E`.
    ///
    /// Blank lines are skipped and each line is trimmed, so trailing
    /// whitespace and CRLF endings are harmless.
    pub fn load(text: &str) -> Result<Self> {
        let mut tiles = Vec::new();
        let mut width = None;
        let mut height = 0;
        let mut starts = Vec::new();
        let mut goals = Vec::new();

        for (line_idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let found = line.chars().count();
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(GridError::MalformedGrid {
                    line: line_idx + 1,
                    expected,
                    found,
                });
            }

            for (col, symbol) in line.chars().enumerate() {
                let terrain =
                    Terrain::from_char(symbol).ok_or(GridError::UnknownSymbol {
                        line: line_idx + 1,
                        column: col + 1,
                        symbol,
                    })?;

                match terrain {
                    Terrain::Start => starts.push(Cell::new(height, col)),
                    Terrain::Goal => goals.push(Cell::new(height, col)),
                    _ => {}
                }
                tiles.push(terrain);
            }
            height += 1;
        }

        let width = width.ok_or(GridError::EmptyGrid)?;
        let start = single_marker(&starts, Marker::Start)?;
        let goal = single_marker(&goals, Marker::Goal)?;

        log::debug!("{height}x{width} grid: {start} -> {goal}");

        Ok(Self {
            tiles,
            width,
            height,
            start,
            goal,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading grid from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::load(&text)
    }

    pub fn rows(&self) -> usize {
        self.height
    }

    pub fn cols(&self) -> usize {
        self.width
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    pub fn get(&self, cell: Cell) -> Option<Terrain> {
        self.in_bounds(cell)
            .then(|| self.tiles[cell.to_index(self.width)])
    }

    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(Terrain::is_walkable)
    }

    /// Walkable axis neighbors of `cell` in up, down, left, right order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neighbors(self.bounds())
            .map(|(next, _)| next)
            .filter(|next| self.is_walkable(*next))
    }

    pub fn manhattan(&self, a: Cell, b: Cell) -> usize {
        a.manhattan_distance(b)
    }

    pub fn euclidean(&self, a: Cell, b: Cell) -> f64 {
        a.euclidean_distance(b)
    }

    /// Number of `0` cells, not counting the start and goal markers.
    pub fn walkable_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|&&t| t == Terrain::Walkable)
            .count()
    }
}

fn single_marker(found: &[Cell], marker: Marker) -> Result<Cell> {
    match found {
        [only] => Ok(*only),
        _ => Err(GridError::MissingMarker {
            marker,
            count: found.len(),
        }),
    }
}
