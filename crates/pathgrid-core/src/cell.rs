//! The [`CellState`] type, the semantic state of one grid position.

use std::fmt;

/// What a grid position currently holds.
///
/// `Empty`, `Wall`, `Start` and `Goal` are painted by the editor. The other
/// states are annotations written by a running search and wiped by
/// [`Grid::clear_annotations`](crate::Grid::clear_annotations). The engine
/// assigns no colors; mapping states to colors is up to the renderer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Start,
    Goal,
    Wall,
    /// An ancestor of the node currently being expanded.
    Path,
    /// The node currently being expanded.
    PathSearching,
    /// Expanded and done with.
    Searched,
    /// Waiting in the frontier.
    Queued,
    /// Part of the reconstructed start→goal path.
    Found,
}

impl CellState {
    /// Every state, in declaration order.
    pub const ALL: [CellState; 9] = [
        CellState::Empty,
        CellState::Start,
        CellState::Goal,
        CellState::Wall,
        CellState::Path,
        CellState::PathSearching,
        CellState::Searched,
        CellState::Queued,
        CellState::Found,
    ];

    /// Transient states produced by a search.
    #[inline]
    pub const fn is_annotation(self) -> bool {
        matches!(
            self,
            CellState::Path
                | CellState::PathSearching
                | CellState::Searched
                | CellState::Queued
                | CellState::Found
        )
    }

    /// States the editor is allowed to paint.
    #[inline]
    pub const fn is_placeable(self) -> bool {
        matches!(
            self,
            CellState::Empty | CellState::Wall | CellState::Start | CellState::Goal
        )
    }

    /// Single-character rendering used by the grid's `Display` impl.
    pub const fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Start => 'S',
            CellState::Goal => 'G',
            CellState::Wall => '#',
            CellState::Path => 'p',
            CellState::PathSearching => '@',
            CellState::Searched => 'x',
            CellState::Queued => 'q',
            CellState::Found => '*',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CellState::Empty => "empty",
            CellState::Start => "start",
            CellState::Goal => "goal",
            CellState::Wall => "wall",
            CellState::Path => "path",
            CellState::PathSearching => "path-searching",
            CellState::Searched => "searched",
            CellState::Queued => "queued",
            CellState::Found => "found",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_and_search_states_are_disjoint() {
        for s in CellState::ALL {
            assert!(!(s.is_annotation() && s.is_placeable()), "{s}");
        }
        assert_eq!(CellState::ALL.iter().filter(|s| s.is_placeable()).count(), 4);
    }

    #[test]
    fn glyphs_are_unique() {
        let mut glyphs: Vec<char> = CellState::ALL.iter().map(|s| s.glyph()).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), CellState::ALL.len());
    }
}
