//! The play/pause/stop lifecycle consumed by the external driver.

use std::fmt;

/// Run state of a pathfinding session.
///
/// `None → Started ⇄ Paused → Finished`. A driver keeps calling `step()`
/// only while the state is [`RunState::Started`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    #[default]
    None,
    Started,
    Paused,
    Finished,
}

impl RunState {
    /// Whether a driver should keep ticking.
    #[inline]
    pub fn is_running(self) -> bool {
        self == RunState::Started
    }

    /// Whether editor input is accepted. Edits are locked out while a
    /// search is in progress, paused or not.
    #[inline]
    pub fn is_editable(self) -> bool {
        matches!(self, RunState::None | RunState::Finished)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunState::None => "idle",
            RunState::Started => "started",
            RunState::Paused => "paused",
            RunState::Finished => "finished",
        })
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn uses_variant_names() {
        let json = serde_json::to_string(&RunState::Paused).unwrap();
        assert_eq!(json, "\"Paused\"");
        assert_eq!(
            serde_json::from_str::<RunState>(&json).unwrap(),
            RunState::Paused
        );
    }
}
