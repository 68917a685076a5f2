use std::collections::VecDeque;

use pathgrid_core::{CellState, Grid, Result};

use crate::engine::{Search, SearchStatus, UNSEEN, outcome};
use crate::node::NodeId;

impl Search {
    /// One breadth-first expansion: retire the previous node, pop the
    /// oldest frontier node and queue its unseen neighbours.
    pub(crate) fn step_breadth_first(
        &mut self,
        grid: &mut Grid,
        queue: &mut VecDeque<NodeId>,
    ) -> Result<SearchStatus> {
        self.promote_current(grid)?;

        let Some(id) = queue.pop_front() else {
            return Ok(SearchStatus::Exhausted);
        };
        if self.enter(grid, id)? {
            return Ok(outcome(true));
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        self.collect_open(grid, self.nodes[id].pos, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            // Already queued, current, or expanded.
            if self.best_cost[ni] != UNSEEN {
                continue;
            }
            let child = self.nodes.push_child(id, np);
            self.best_cost[ni] = self.nodes[child].cost;
            queue.push_back(child);
            grid.set(np, CellState::Queued)?;
        }

        self.nbuf = nbuf;
        grid.restamp_markers();
        Ok(SearchStatus::Running)
    }
}

#[cfg(test)]
mod tests {
    use pathgrid_core::{CellState, Grid, Point};

    use crate::engine::{Algorithm, SearchEngine, SearchStatus};
    use crate::testutil::{hops, reference_distance, run};

    #[test]
    fn three_by_three_open_grid() {
        let mut grid = Grid::from_rows(&["S..", "...", "..G"]);
        let mut engine = SearchEngine::new(Algorithm::BreadthFirst);
        // Seeding step, then at most nine expansions.
        assert_eq!(engine.step(&mut grid), Ok(SearchStatus::Running));
        let mut status = SearchStatus::Running;
        for _ in 0..9 {
            status = engine.step(&mut grid).unwrap();
            if status.is_finished() {
                break;
            }
        }
        assert_eq!(status, SearchStatus::Found);
        assert_eq!(hops(&engine), Some(4));
        assert_eq!(grid.at(Point::new(0, 0)), Some(CellState::Start));
        assert_eq!(grid.at(Point::new(2, 2)), Some(CellState::Goal));
    }

    #[test]
    fn expansion_order_is_level_by_level() {
        let mut grid = Grid::from_rows(&["S..", "...", "..G"]);
        let mut engine = SearchEngine::new(Algorithm::BreadthFirst);
        engine.step(&mut grid).unwrap();
        let mut order = Vec::new();
        while !engine.step(&mut grid).unwrap().is_finished() {
            order.push(engine.current().unwrap());
        }
        let expected = [(0, 0), (1, 0), (0, 1), (2, 0), (1, 1), (0, 2), (2, 1), (1, 2)];
        let expected: Vec<Point> = expected.iter().map(|&(x, y)| Point::new(x, y)).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn queued_and_searched_annotations() {
        let mut grid = Grid::from_rows(&["S..", "...", "..G"]);
        let mut engine = SearchEngine::new(Algorithm::BreadthFirst);
        engine.step(&mut grid).unwrap();
        engine.step(&mut grid).unwrap();
        assert_eq!(grid.to_string(), "Sq.\nq..\n..G\n");
        engine.step(&mut grid).unwrap();
        // Start retired, (1,0) expanding with its new neighbours queued.
        assert_eq!(grid.to_string(), "S@q\nqq.\n..G\n");
        assert_eq!(engine.visited_len(), 1);
    }

    #[test]
    fn matches_reference_distance_around_a_wall() {
        let rows = ["S....", ".###.", "...#.", ".#...", "...#G"];
        let (status, engine, grid) = run(Algorithm::BreadthFirst, &rows);
        assert_eq!(status, SearchStatus::Found);
        assert_eq!(hops(&engine), reference_distance(&grid));
        assert_eq!(hops(&engine), Some(8));
    }

    #[test]
    fn routes_through_the_only_gap() {
        let rows = ["S....", ".....", "###.#", ".....", "....G"];
        let (status, engine, _) = run(Algorithm::BreadthFirst, &rows);
        assert_eq!(status, SearchStatus::Found);
        let path = engine.found_path().unwrap();
        assert!(path.contains(&Point::new(3, 2)));
        assert_eq!(path.len() - 1, 8);
    }
}
