//! The [`Pathfinder`] session: one board, one search engine and the run
//! state that decides which of the two may change.
//!
//! ```text
//!            play               step → Found/Exhausted
//!   None ──────────► Started ─────────────────────────► Finished
//!    ▲               │    ▲                                 │
//!    │         pause │    │ play                            │ play (resets first)
//!    │               ▼    │                                 │
//!    │              Paused ─────────────────────────────────┘
//!    │                      step → Found/Exhausted
//!    └──────────── stop (from anywhere)
//! ```
//!
//! Board edits are only accepted in `None` and `Finished`.

use pathgrid_core::{Action, CellState, Error, Grid, Point, Result, RunState};
use pathgrid_maze::MazeGen;
use pathgrid_paths::{Algorithm, SearchEngine, SearchStatus};
use rand::Rng;

use crate::config::Config;
use crate::speed::Speed;

/// An interactive pathfinding session.
///
/// The host owns the clock. It calls [`play`](Pathfinder::play) once and
/// then [`step`](Pathfinder::step) every [`Speed::interval`], rendering
/// [`grid`](Pathfinder::grid) in between, until the returned state is no
/// longer [`RunState::Started`].
#[derive(Debug, Clone)]
pub struct Pathfinder {
    grid: Grid,
    engine: SearchEngine,
    run_state: RunState,
    config: Config,
}

impl Pathfinder {
    /// A session with an all-empty board sized from `config`.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.width, config.height),
            engine: SearchEngine::new(config.algorithm),
            run_state: RunState::None,
            config,
        })
    }

    /// A session with default settings apart from size and algorithm.
    /// Dimensions below one are raised to one.
    pub fn with_size(width: i32, height: i32, algorithm: Algorithm) -> Self {
        let config = Config {
            width: width.max(1),
            height: height.max(1),
            algorithm,
            ..Config::default()
        };
        Self {
            grid: Grid::new(config.width, config.height),
            engine: SearchEngine::new(algorithm),
            run_state: RunState::None,
            config,
        }
    }

    /// The board as of the last edit or step.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn status(&self) -> SearchStatus {
        self.engine.status()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.engine.algorithm()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn speed(&self) -> Speed {
        self.config.speed
    }

    /// Change the step cadence. Allowed in any state.
    pub fn set_speed(&mut self, speed: Speed) {
        self.config.speed = speed;
    }

    /// Positions from start to goal once the search has found the goal.
    pub fn found_path(&self) -> Option<Vec<Point>> {
        self.engine.found_path()
    }

    /// Nodes expanded by the current search.
    pub fn expanded(&self) -> usize {
        self.engine.expanded()
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    fn reject(&self, action: Action) -> Error {
        log::debug!("rejected {action} while {}", self.run_state);
        Error::InvalidTransition {
            from: self.run_state,
            action,
        }
    }

    fn transition(&mut self, to: RunState) -> RunState {
        if self.run_state != to {
            log::debug!("run state {} -> {to}", self.run_state);
            self.run_state = to;
        }
        to
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Paint `state` at `p`. Only `Empty`, `Wall`, `Start` and `Goal` can
    /// be painted, and only while no search is in progress.
    ///
    /// Editing a finished board discards the finished search first, so the
    /// edit lands on a clean board and the state returns to `None`.
    pub fn place_cell(&mut self, p: Point, state: CellState) -> Result<()> {
        if !self.run_state.is_editable() {
            return Err(self.reject(Action::Edit));
        }
        if !state.is_placeable() {
            return Err(Error::NotPlaceable(state));
        }
        self.grid.get(p)?;
        if self.run_state == RunState::Finished {
            self.engine.reset(&mut self.grid);
            self.transition(RunState::None);
        }
        self.grid.place(p, state)
    }

    /// Empty the whole board and drop both markers.
    pub fn reset_board(&mut self) -> Result<RunState> {
        if self.run_state.is_running() {
            return Err(self.reject(Action::ResetBoard));
        }
        self.engine.reset(&mut self.grid);
        self.grid.fill(CellState::Empty);
        log::debug!("board reset");
        Ok(self.transition(RunState::None))
    }

    /// Replace the board with a random maze. Start and goal are dropped.
    /// Returns the number of open cells.
    pub fn generate_maze<R: Rng>(&mut self, rng: R) -> Result<usize> {
        if self.run_state.is_running() {
            return Err(self.reject(Action::GenerateMaze));
        }
        self.engine.reset(&mut self.grid);
        let open = MazeGen::with_rng(rng).carve(&mut self.grid)?;
        self.transition(RunState::None);
        Ok(open)
    }

    /// Swap the search algorithm. Any search in progress is discarded.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<RunState> {
        if self.run_state.is_running() {
            return Err(self.reject(Action::SetAlgorithm));
        }
        self.engine.set_algorithm(algorithm, &mut self.grid);
        self.config.algorithm = algorithm;
        Ok(self.transition(RunState::None))
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Start or resume the search. Playing a finished search starts over
    /// from a clean board. Fails with [`Error::Unready`] until both start
    /// and goal are placed.
    pub fn play(&mut self) -> Result<RunState> {
        if self.grid.endpoints().is_none() {
            return Err(Error::Unready);
        }
        if self.run_state == RunState::Finished {
            self.engine.reset(&mut self.grid);
        }
        Ok(self.transition(RunState::Started))
    }

    /// Freeze a running search, keeping its frontier and visited set.
    pub fn pause(&mut self) -> Result<RunState> {
        match self.run_state {
            RunState::Started => Ok(self.transition(RunState::Paused)),
            RunState::Paused => Ok(RunState::Paused),
            _ => Err(self.reject(Action::Pause)),
        }
    }

    /// Continue a paused search where it left off.
    pub fn resume(&mut self) -> Result<RunState> {
        match self.run_state {
            RunState::Paused => Ok(self.transition(RunState::Started)),
            _ => Err(self.reject(Action::Resume)),
        }
    }

    /// Abandon the search and wipe its annotations. Always succeeds.
    pub fn stop(&mut self) -> RunState {
        self.engine.reset(&mut self.grid);
        self.transition(RunState::None)
    }

    /// Advance the search by one unit of work.
    ///
    /// Valid while `Started` or `Paused`; stepping a paused search leaves
    /// it paused. Moves to `Finished` once the goal is found or the
    /// frontier runs dry.
    pub fn step(&mut self) -> Result<RunState> {
        if !matches!(self.run_state, RunState::Started | RunState::Paused) {
            return Err(self.reject(Action::Step));
        }
        let status = self.engine.step(&mut self.grid)?;
        if status.is_finished() {
            return Ok(self.transition(RunState::Finished));
        }
        Ok(self.run_state)
    }
}

impl Default for Pathfinder {
    fn default() -> Self {
        let config = Config::default();
        Self {
            grid: Grid::new(config.width, config.height),
            engine: SearchEngine::new(config.algorithm),
            run_state: RunState::None,
            config,
        }
    }
}
