//! Pathfinding over grids with directional movement permissions.
//!
//! This crate searches the navigation grids of `tilenav-core`:
//!
//! - **A\*** shortest-path search ([`AstarSearch`], [`astar_path`])
//! - **BFS** unweighted distance maps ([`bfs_map`])
//! - a world-position façade tying both to a [`Locator`](tilenav_core::Locator)
//!   ([`Pathfinder`])
//!
//! Movement is axis-aligned with unit step cost. Whether a step from one
//! cell to the next is allowed depends on the *source* cell's exit flags and
//! the *target* cell's navigability, so adjacency may be one-way.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`AstarPather`] : [`Pather`] | A* |

mod astar;
mod bfs;
mod distance;
mod finder;
mod navgrid;
mod nodes;
mod path;
mod traits;

pub use astar::{AstarSearch, SearchState, astar_path};
pub use bfs::{DistanceMap, bfs_map};
pub use distance::manhattan;
pub use finder::{PathError, Pathfinder};
pub use nodes::{PathNode, SearchNode, SearchNodes, UNREACHABLE};
pub use path::Path;
pub use traits::{AstarPather, Pather};
