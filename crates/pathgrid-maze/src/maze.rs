//! Randomized growing-tree maze generation.
//!
//! The maze lives on a lattice of cells whose coordinates are both even.
//! Lattice cells are joined two steps at a time: opening a lattice cell
//! also knocks down the single wall cell between it and one already-open
//! lattice neighbour, so the open cells always form a spanning tree. That
//! is a perfect maze, with exactly one simple path between any two open cells.

use pathgrid_core::{CellState, Grid, Point, Result};
use rand::Rng;

/// Two-cell jumps between lattice neighbours, in the same order as
/// [`Point::neighbors_4`].
const LATTICE_STEPS: [Point; 4] = [
    Point::new(2, 0),
    Point::new(0, 2),
    Point::new(-2, 0),
    Point::new(0, -2),
];

/// Maze generator driven by a caller-supplied random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Replace the contents of `grid` with a freshly carved maze.
    ///
    /// Every cell starts as a wall and the start and goal markers are
    /// dropped, since old placements no longer mean anything. Carving
    /// starts from a random lattice cell; each round pops a uniformly random
    /// candidate from the frontier, links it to one of its already-carved
    /// lattice neighbours at random, and adds its unseen lattice neighbours
    /// to the frontier. Stops when the frontier is empty.
    ///
    /// Returns the number of open cells.
    pub fn carve(&mut self, grid: &mut Grid) -> Result<usize> {
        grid.fill(CellState::Wall);
        if grid.is_empty() {
            return Ok(0);
        }

        let lattice_w = (grid.width() + 1) / 2;
        let lattice_h = (grid.height() + 1) / 2;
        let origin = Point::new(
            2 * self.rng.random_range(0..lattice_w),
            2 * self.rng.random_range(0..lattice_h),
        );

        // `seen` covers carved cells and frontier candidates alike.
        let mut carved = vec![false; grid.len()];
        let mut seen = vec![false; grid.len()];
        let mut next: Vec<Point> = Vec::new();

        Self::commit(grid, origin, &mut carved, &mut seen, &mut next)?;

        let mut links: Vec<Point> = Vec::with_capacity(4);
        while !next.is_empty() {
            let candidate = next.swap_remove(self.rng.random_range(0..next.len()));

            links.clear();
            links.extend(LATTICE_STEPS.iter().map(|&d| candidate + d).filter(|&q| {
                grid.index(q).is_some_and(|i| carved[i])
            }));
            // Every candidate was discovered from a carved cell, so there is
            // always at least one link.
            if !links.is_empty() {
                let to = links[self.rng.random_range(0..links.len())];
                grid.set(candidate.midpoint(to), CellState::Empty)?;
            }

            Self::commit(grid, candidate, &mut carved, &mut seen, &mut next)?;
        }

        let open = grid.count(CellState::Empty);
        log::debug!(
            "carved a {}x{} maze from {origin}: {open} open cells",
            grid.width(),
            grid.height()
        );
        Ok(open)
    }

    /// Open `p`, mark it carved and queue its unseen lattice neighbours.
    fn commit(
        grid: &mut Grid,
        p: Point,
        carved: &mut [bool],
        seen: &mut [bool],
        next: &mut Vec<Point>,
    ) -> Result<()> {
        grid.set(p, CellState::Empty)?;
        if let Some(i) = grid.index(p) {
            carved[i] = true;
            seen[i] = true;
        }
        for d in LATTICE_STEPS {
            let q = p + d;
            if let Some(i) = grid.index(q) {
                if !seen[i] {
                    seen[i] = true;
                    next.push(q);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn maze(width: i32, height: i32, seed: u64) -> (Grid, usize) {
        let mut grid = Grid::new(width, height);
        let mut mg = MazeGen::with_rng(StdRng::seed_from_u64(seed));
        let open = mg.carve(&mut grid).unwrap();
        (grid, open)
    }

    fn is_open(grid: &Grid, p: Point) -> bool {
        grid.at(p) == Some(CellState::Empty)
    }

    /// Open cells reachable from `from` by orthogonal steps.
    fn flood(grid: &Grid, from: Point) -> usize {
        let mut seen = vec![false; grid.len()];
        let mut queue = VecDeque::from([from]);
        let mut n = 0;
        while let Some(p) = queue.pop_front() {
            let Some(i) = grid.index(p) else { continue };
            if seen[i] || !is_open(grid, p) {
                continue;
            }
            seen[i] = true;
            n += 1;
            queue.extend(p.neighbors_4());
        }
        n
    }

    /// Number of orthogonally adjacent open pairs.
    fn open_edges(grid: &Grid) -> usize {
        grid.bounds()
            .iter()
            .filter(|&p| is_open(grid, p))
            .map(|p| {
                [p.shift(1, 0), p.shift(0, 1)]
                    .into_iter()
                    .filter(|&q| is_open(grid, q))
                    .count()
            })
            .sum()
    }

    #[test]
    fn mazes_are_connected_and_acyclic() {
        for (w, h) in [(15, 11), (10, 8), (21, 21), (1, 9), (2, 2), (1, 1)] {
            for seed in 0..5 {
                let (grid, open) = maze(w, h, seed);
                assert_eq!(open, grid.count(CellState::Empty));
                assert!(open > 0);
                assert_eq!(flood(&grid, Point::ZERO), open, "{w}x{h} seed {seed}");
                assert_eq!(open_edges(&grid), open - 1, "{w}x{h} seed {seed}");
            }
        }
    }

    #[test]
    fn every_lattice_cell_is_open() {
        let (grid, _) = maze(13, 9, 7);
        for p in grid.bounds() {
            let lattice = p.x % 2 == 0 && p.y % 2 == 0;
            let off_lattice = p.x % 2 == 1 && p.y % 2 == 1;
            if lattice {
                assert!(is_open(&grid, p), "{p}");
            }
            if off_lattice {
                assert_eq!(grid.at(p), Some(CellState::Wall), "{p}");
            }
        }
    }

    #[test]
    fn drops_markers_and_annotations() {
        let mut grid = Grid::from_rows(&["S..q", "x..G", "....", "@..."]);
        let mut mg = MazeGen::with_rng(StdRng::seed_from_u64(1));
        mg.carve(&mut grid).unwrap();
        assert_eq!(grid.endpoints(), None);
        assert!(grid
            .cells()
            .iter()
            .all(|&c| c == CellState::Empty || c == CellState::Wall));
    }

    #[test]
    fn same_seed_same_maze() {
        let (a, _) = maze(17, 13, 42);
        let (b, _) = maze(17, 13, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_grid_has_nothing_to_carve() {
        let (_, open) = maze(0, 5, 3);
        assert_eq!(open, 0);
    }
}
