//! **pathgrid-core**: the grid and cell-state model shared by every
//! pathgrid crate.
//!
//! A [`Grid`] owns one [`CellState`] per position together with the
//! designated start and goal markers. Editor edits go through
//! [`Grid::place`], which keeps at most one start and one goal on the board;
//! search engines only ever write the transient annotation states and reset
//! them with [`Grid::clear_annotations`].

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod run;
mod placement;

pub use cell::CellState;
pub use error::{Action, Error, Result};
pub use geom::{Point, Range};
pub use grid::Grid;
pub use run::RunState;
