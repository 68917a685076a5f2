//! The [`Grid`] type: a `width × height` board of [`CellState`]s plus the
//! start and goal markers.

use std::fmt;

use crate::cell::CellState;
use crate::error::{Error, Result};
use crate::geom::{Point, Range};

/// A 2D board of [`CellState`]s stored row-major in a flat buffer.
///
/// Besides the cells, the grid records where the start and goal markers sit
/// and which state each marker covered when it was placed, so that moving a
/// marker restores the background it was painted over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    width: i32,
    height: i32,
    pub(crate) start: Option<Point>,
    pub(crate) goal: Option<Point>,
    /// State of the start cell before the start marker was placed on it.
    pub(crate) start_under: CellState,
    /// State of the goal cell before the goal marker was placed on it.
    pub(crate) goal_under: CellState,
}

impl Grid {
    /// Create a new grid filled with [`CellState::Empty`]. Negative
    /// dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![CellState::Empty; (width as usize) * (height as usize)],
            width,
            height,
            start: None,
            goal: None,
            start_under: CellState::Empty,
            goal_under: CellState::Empty,
        }
    }

    /// Build a grid from rows of glyphs (see [`CellState::glyph`]).
    ///
    /// `S` and `G` set the markers; any unrecognised character is an empty
    /// cell. Rows shorter than the first one are padded with empty cells.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let mut grid = Grid::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(width as usize).enumerate() {
                let p = Point::new(x as i32, y as i32);
                let state = CellState::ALL
                    .into_iter()
                    .find(|s| s.glyph() == ch)
                    .unwrap_or(CellState::Empty);
                let i = grid.cell_index(p);
                grid.cells[i] = state;
                match state {
                    CellState::Start => grid.start = Some(p),
                    CellState::Goal => grid.goal = Some(p),
                    _ => {}
                }
            }
        }
        grid
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The range covered by the grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` satisfies `0 <= x < width, 0 <= y < height`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Flat row-major index of `p`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| self.cell_index(p))
    }

    /// Inverse of [`index`](Grid::index).
    #[inline]
    pub fn point(&self, i: usize) -> Point {
        let w = self.width.max(1) as usize;
        Point::new((i % w) as i32, (i / w) as i32)
    }

    #[inline]
    fn cell_index(&self, p: Point) -> usize {
        (p.y as usize) * (self.width as usize) + (p.x as usize)
    }

    /// Read the state at `p`.
    pub fn get(&self, p: Point) -> Result<CellState> {
        self.at(p).ok_or(Error::OutOfBounds(p))
    }

    /// Read the state at `p`, or `None` when out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellState> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Overwrite the state at `p`.
    ///
    /// This is a raw write: it does not maintain the start/goal markers.
    /// Editor edits go through [`place`](Grid::place) instead.
    pub fn set(&mut self, p: Point, state: CellState) -> Result<()> {
        let i = self.index(p).ok_or(Error::OutOfBounds(p))?;
        self.cells[i] = state;
        Ok(())
    }

    /// Set every cell to `state`.
    ///
    /// The markers no longer sit on the board afterwards, so they are
    /// cleared along with their saved backgrounds.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
        self.clear_markers();
    }

    /// Forget the start and goal markers and the states they covered. The
    /// cells themselves are left untouched.
    pub fn clear_markers(&mut self) {
        self.start = None;
        self.goal = None;
        self.start_under = CellState::Empty;
        self.goal_under = CellState::Empty;
    }

    /// Reset every search annotation to `Empty`, keeping walls, and
    /// re-stamp the markers at their recorded positions.
    ///
    /// Idempotent, and safe to call when either marker is absent.
    pub fn clear_annotations(&mut self) {
        for c in self.cells.iter_mut() {
            if !matches!(c, CellState::Wall | CellState::Start | CellState::Goal) {
                *c = CellState::Empty;
            }
        }
        self.restamp_markers();
    }

    /// Write `Start` and `Goal` back at their recorded positions.
    pub fn restamp_markers(&mut self) {
        if let Some(i) = self.start.and_then(|p| self.index(p)) {
            self.cells[i] = CellState::Start;
        }
        if let Some(i) = self.goal.and_then(|p| self.index(p)) {
            self.cells[i] = CellState::Goal;
        }
    }

    /// Position of the start marker, if placed.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the goal marker, if placed.
    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Both markers, or `None` unless both are placed.
    #[inline]
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        Some((self.start?, self.goal?))
    }

    /// Count how many cells hold `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Iterate over `(Point, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.point(i), c))
    }

    /// The cells as a row-major slice.
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.width as usize) {
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
