mod cell;
mod direction;
mod heuristic;
mod map;
mod terrain;

pub use cell::Cell;
pub use direction::Direction;
pub use heuristic::Heuristic;
pub use map::Grid;
pub use terrain::Terrain;
