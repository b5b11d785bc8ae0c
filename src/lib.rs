//! **spanning_mazes** generates perfect mazes by growing a random spanning tree over a
//! rectangular grid.
//!
//! How the tree grows, and so how the maze looks, is picked with a `PopPolicy`: a stack gives
//! long twisty passages, a queue gives passages radiating out from one point and random sits
//! between the two.
//!
//! ```
//! use spanning_mazes::{frontier::PopPolicy, generators, maze, units::{Height, Width}};
//!
//! let mut rng = generators::seeded_rng(42);
//! let m = maze::random_maze(Width(8), Height(6), PopPolicy::Stack, &mut rng).unwrap();
//! assert_eq!(m.links_count(), 8 * 6 - 1);
//! ```

pub mod cells;
pub mod edges;
pub mod errors;
pub mod frontier;
pub mod generators;
pub mod grid;
pub mod maze;
pub mod units;
mod utils;
