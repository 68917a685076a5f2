//! Editor placement protocol.
//!
//! At most one start and one goal exist at any time. Moving a marker
//! restores the state it covered, and dropping one marker onto the other
//! transfers the evicted marker's saved background instead of losing it.

use crate::cell::CellState;
use crate::error::{Error, Result};
use crate::geom::Point;
use crate::grid::Grid;

impl Grid {
    /// Paint `state` at `p` on behalf of the editor.
    ///
    /// Only `Empty`, `Wall`, `Start` and `Goal` are accepted. Painting a cell
    /// with the state it already holds is a no-op.
    pub fn place(&mut self, p: Point, state: CellState) -> Result<()> {
        if !state.is_placeable() {
            return Err(Error::NotPlaceable(state));
        }
        let current = self.get(p)?;
        if current == state {
            return Ok(());
        }
        log::trace!("place {state} at {p} over {current}");
        // Search trails are transient, so a marker never saves one as its
        // background.
        let under = if current.is_annotation() {
            CellState::Empty
        } else {
            current
        };

        match state {
            CellState::Start => {
                if let Some(old) = self.start {
                    self.set(old, self.start_under)?;
                }
                self.start_under = if current == CellState::Goal {
                    self.goal = None;
                    std::mem::take(&mut self.goal_under)
                } else {
                    under
                };
                self.start = Some(p);
            }
            CellState::Goal => {
                if let Some(old) = self.goal {
                    self.set(old, self.goal_under)?;
                }
                self.goal_under = if current == CellState::Start {
                    self.start = None;
                    std::mem::take(&mut self.start_under)
                } else {
                    under
                };
                self.goal = Some(p);
            }
            _ => {
                if self.start == Some(p) {
                    self.start = None;
                    self.start_under = CellState::Empty;
                }
                if self.goal == Some(p) {
                    self.goal = None;
                    self.goal_under = CellState::Empty;
                }
            }
        }

        self.set(p, state)
    }
}
