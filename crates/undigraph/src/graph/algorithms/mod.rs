//! Graph traversal and analysis algorithms.
//!
//! Everything here runs on one breadth-first [`walk`] that admits neighbors
//! in ascending order, which makes every result deterministic:
//! - [`bfs`], [`bfs_levels`], [`dfs`], [`traverse`]: visitation orders
//! - [`shortest_path`], [`distance`]: minimum-edge paths with parent tracking
//! - [`connected_components`], [`component_of`], [`is_connected`]
//! - [`has_cycle`], [`find_cycle`]: cycle detection with parent exclusion

mod components;
mod cycle;
mod path;
mod traversal;

pub use components::{component_of, connected_components, is_connected};
pub use cycle::{find_cycle, has_cycle};
pub use path::{distance, shortest_path};
pub use traversal::{bfs, bfs_levels, dfs, traverse, walk, Visitor};
