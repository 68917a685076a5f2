//! Incremental graph search over a [`pathgrid_core::Grid`].
//!
//! A [`SearchEngine`] advances exactly one unit of work per
//! [`step`](SearchEngine::step) call and paints its progress onto the grid
//! as annotation states, so a renderer can show the search unfold at
//! whatever cadence the host chooses. Four algorithms are available:
//!
//! - **Breadth-first**: FIFO frontier, shortest path on a uniform grid
//! - **Depth-first**: commits to one neighbour at a time and backtracks
//!   through the parent chain
//! - **Dijkstra**: best-first with a zero heuristic
//! - **A\***: best-first with the Manhattan heuristic
//!
//! Search nodes live in an index-addressed [`NodeArena`]; a node's parent
//! chain is its path back to the start.

mod astar;
mod bfs;
mod dfs;
mod distance;
mod engine;
mod frontier;
mod heap;
mod node;

#[cfg(test)]
mod testutil;

pub use distance::{Heuristic, manhattan};
pub use engine::{Algorithm, DEFAULT_ORDER, SearchEngine, SearchStatus};
pub use heap::MinHeap;
pub use node::{Chain, NodeArena, NodeId, SearchNode};
