use pathgrid_core::{CellState, Grid, Result};

use crate::engine::{Search, SearchStatus, outcome};
use crate::node::NodeId;

impl Search {
    /// One depth-first move: advance into the first open neighbour of the
    /// current node, or backtrack to its parent when there is none.
    ///
    /// Positions join the visited set as soon as they are entered, so the
    /// walk never steps onto its own trail.
    pub(crate) fn step_depth_first(
        &mut self,
        grid: &mut Grid,
        root: &mut Option<NodeId>,
    ) -> Result<SearchStatus> {
        let Some(cur) = self.current else {
            let Some(root) = root.take() else {
                return Ok(SearchStatus::Exhausted);
            };
            self.mark_visited(grid, self.nodes[root].pos);
            return self.enter(grid, root).map(outcome);
        };

        let pos = self.nodes[cur].pos;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        self.collect_open(grid, pos, &mut nbuf);
        let next = nbuf.first().copied();
        self.nbuf = nbuf;

        if let Some(np) = next {
            let child = self.nodes.push_child(cur, np);
            self.mark_visited(grid, np);
            return self.enter(grid, child).map(outcome);
        }

        // Dead end: retire this node and fall back to its parent.
        grid.set(pos, CellState::Searched)?;
        let status = match self.nodes[cur].parent {
            Some(parent) => {
                self.current = Some(parent);
                self.paint_chain(grid, parent, CellState::PathSearching, CellState::Path)?;
                SearchStatus::Running
            }
            None => {
                self.current = None;
                SearchStatus::Exhausted
            }
        };
        grid.restamp_markers();
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pathgrid_core::{CellState, Grid, Point};

    use crate::engine::{Algorithm, SearchEngine, SearchStatus};
    use crate::testutil::{hops, run};

    #[test]
    fn commits_to_first_neighbour_in_order() {
        let mut grid = Grid::from_rows(&["S..", "...", "..G"]);
        let mut engine = SearchEngine::new(Algorithm::DepthFirst);
        engine.step(&mut grid).unwrap();
        let mut trail = Vec::new();
        loop {
            let status = engine.step(&mut grid).unwrap();
            trail.push(engine.current().unwrap());
            if status.is_finished() {
                assert_eq!(status, SearchStatus::Found);
                break;
            }
        }
        // Right along the top row, then down the last column.
        let expected = [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)];
        let expected: Vec<Point> = expected.iter().map(|&(x, y)| Point::new(x, y)).collect();
        assert_eq!(trail, expected);
        assert_eq!(hops(&engine), Some(4));
    }

    #[test]
    fn backtracks_out_of_a_dead_end() {
        // +x first leads into the pocket at (2, 2); the goal is back to the left.
        let rows = ["S.#", "..#", "G.."];
        let (status, engine, grid) = run(Algorithm::DepthFirst, &rows);
        assert_eq!(status, SearchStatus::Found);
        assert_eq!(grid.at(Point::new(2, 2)), Some(CellState::Searched));
        assert_eq!(grid.at(Point::new(0, 2)), Some(CellState::Goal));
        let path = engine.found_path().unwrap();
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(0, 2)));
        assert_eq!(hops(&engine), Some(4));
    }

    #[test]
    fn unwinds_to_the_root_when_walled_in() {
        let mut grid = Grid::from_rows(&["S.#", "###", "#G#"]);
        let mut engine = SearchEngine::new(Algorithm::DepthFirst);
        assert_eq!(engine.finish(&mut grid), Ok(SearchStatus::Exhausted));
        assert_eq!(grid.to_string(), "Sx#\n###\n#G#\n");
        assert_eq!(engine.current(), None);
    }

    #[test]
    fn terminates_and_visits_each_open_cell_once() {
        let rows = [
            "S.....#...",
            ".####.#.#.",
            ".#....#.#.",
            ".#.####.#.",
            ".#......#.",
            ".######.##",
            "........#G",
        ];
        let (status, engine, grid) = run(Algorithm::DepthFirst, &rows);
        assert_eq!(status, SearchStatus::Exhausted);

        let positions: Vec<Point> = engine.nodes().iter().map(|(_, n)| n.pos).collect();
        let unique: HashSet<Point> = positions.iter().copied().collect();
        assert_eq!(unique.len(), positions.len());

        let open = grid.len() - grid.count(CellState::Wall);
        assert!(engine.expanded() <= open);
        assert_eq!(engine.expanded(), positions.len());
    }
}
