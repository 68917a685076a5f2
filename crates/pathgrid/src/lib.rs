//! **pathgrid**: watch a graph search explore a grid one step at a time.
//!
//! A [`Pathfinder`] session owns the board, the active search engine and
//! the run state. The host paints walls and markers through
//! [`Pathfinder::place_cell`], then drives the search with
//! [`play`](Pathfinder::play) and repeated [`step`](Pathfinder::step) calls
//! at whatever cadence it likes (see [`Speed`]), reading
//! [`Pathfinder::grid`] after each tick to render.
//!
//! ```
//! use pathgrid::{Algorithm, CellState, Pathfinder, Point, RunState};
//!
//! let mut pf = Pathfinder::with_size(3, 3, Algorithm::BreadthFirst);
//! pf.place_cell(Point::new(0, 0), CellState::Start).unwrap();
//! pf.place_cell(Point::new(2, 2), CellState::Goal).unwrap();
//! pf.play().unwrap();
//! while pf.step().unwrap() == RunState::Started {}
//! assert_eq!(pf.found_path().map(|p| p.len() - 1), Some(4));
//! ```

pub mod config;
pub mod session;
pub mod speed;

pub use config::Config;
pub use pathgrid_core::{Action, CellState, Error, Grid, Point, Range, Result, RunState};
pub use pathgrid_maze::MazeGen;
pub use pathgrid_paths::{Algorithm, SearchEngine, SearchStatus};
pub use session::Pathfinder;
pub use speed::Speed;
