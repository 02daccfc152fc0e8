mod astar;
mod bfs;
mod dijkstra;
pub mod engine;
mod frontier;
mod greedy;
mod reconstruct;
mod result;
pub mod traits;
mod variant;

pub use astar::AStar;
pub use bfs::BFS;
pub use dijkstra::Dijkstra;
pub use engine::{Search, SearchState};
pub use frontier::Frontier;
pub use greedy::Greedy;
pub use reconstruct::reconstruct;
pub use result::{Cost, SearchResult};
pub use traits::{PopPolicy, RevisitRule, SearchStrategy};
pub use variant::Algorithm;
