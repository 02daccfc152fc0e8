//! Grid pathfinding with four interchangeable search strategies.
//!
//! A [`grid::Grid`] is loaded once from text and shared read-only. Each
//! [`algorithms::Search`] run owns its frontier, visited set, cost map and
//! parent map, and produces a [`algorithms::SearchResult`] that the
//! [`report`] module turns into annotated grids, tables and CSV.

pub mod algorithms;
pub mod error;
pub mod grid;
pub mod report;

pub use error::{GridError, Result};
