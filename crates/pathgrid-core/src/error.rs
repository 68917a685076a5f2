//! Error taxonomy shared by the grid, the search engine and the session.

use std::fmt;

use crate::geom::Point;
use crate::run::RunState;

/// Convenience alias used throughout pathgrid.
pub type Result<T> = std::result::Result<T, Error>;

/// A driver or editor request, recorded in [`Error::InvalidTransition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pause,
    Resume,
    Step,
    Edit,
    ResetBoard,
    GenerateMaze,
    SetAlgorithm,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Pause => "pause",
            Action::Resume => "resume",
            Action::Step => "step",
            Action::Edit => "edit",
            Action::ResetBoard => "reset board",
            Action::GenerateMaze => "generate maze",
            Action::SetAlgorithm => "set algorithm",
        };
        f.write_str(name)
    }
}

/// Errors reported by pathgrid operations.
///
/// None of these are fatal: every failing call leaves the grid and the
/// engine exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A position outside `0 <= x < width, 0 <= y < height`.
    #[error("position {0} is outside the grid")]
    OutOfBounds(Point),
    /// The search was driven before both markers were placed.
    #[error("place start and goal first")]
    Unready,
    /// The request is not accepted in the current run state.
    #[error("cannot {action} while {from}")]
    InvalidTransition { from: RunState, action: Action },
    /// Only empty, wall, start and goal can be painted by the editor.
    #[error("cell state {0} cannot be placed by the editor")]
    NotPlaceable(crate::cell::CellState),
    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),
    #[error("unknown speed label {0:?}")]
    UnknownSpeed(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(Error::Unready.to_string(), "place start and goal first");
        assert_eq!(
            Error::OutOfBounds(Point::new(7, -1)).to_string(),
            "position (7, -1) is outside the grid"
        );
        let e = Error::InvalidTransition {
            from: RunState::Started,
            action: Action::Edit,
        };
        assert_eq!(e.to_string(), "cannot edit while started");
        assert_eq!(
            Error::UnknownSpeed("10x".into()).to_string(),
            "unknown speed label \"10x\""
        );
    }
}
