use pathgrid_core::{CellState, Grid, Result};

use crate::distance::Heuristic;
use crate::engine::{Search, SearchStatus, outcome};
use crate::heap::MinHeap;
use crate::node::NodeId;

impl Search {
    /// One best-first expansion ordered by `cost + heuristic`.
    ///
    /// A position is pushed again only when reached more cheaply than
    /// before; the superseded entries are skipped on extraction, as is
    /// anything already visited.
    pub(crate) fn step_best_first(
        &mut self,
        grid: &mut Grid,
        heap: &mut MinHeap<NodeId>,
        heuristic: Heuristic,
    ) -> Result<SearchStatus> {
        self.promote_current(grid)?;

        let id = loop {
            let Some((_, id)) = heap.extract_min() else {
                return Ok(SearchStatus::Exhausted);
            };
            let node = self.nodes[id];
            let Some(i) = grid.index(node.pos) else {
                continue;
            };
            if !self.visited[i] && node.cost <= self.best_cost[i] {
                break id;
            }
            log::trace!("skip stale frontier entry at {}", node.pos);
        };

        if self.enter(grid, id)? {
            return Ok(outcome(true));
        }

        let cost = self.nodes[id].cost + 1;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        self.collect_open(grid, self.nodes[id].pos, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if cost >= self.best_cost[ni] {
                continue;
            }
            self.best_cost[ni] = cost;
            let child = self.nodes.push_child(id, np);
            heap.insert(cost + heuristic.estimate(np, self.goal), child);
            grid.set(np, CellState::Queued)?;
        }

        self.nbuf = nbuf;
        grid.restamp_markers();
        Ok(SearchStatus::Running)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pathgrid_core::{Grid, Point};

    use crate::engine::{Algorithm, SearchEngine, SearchStatus};
    use crate::testutil::{hops, reference_distance, run};

    const MAZES: [&[&str]; 4] = [
        &["S....", ".###.", "...#.", ".#...", "...#G"],
        &["S....", ".....", "###.#", ".....", "....G"],
        &["S.#.....", ".##.###.", "....#...", ".##...#.", "..#.#.#G"],
        &[".......", ".#####.", ".#G..#.", ".#.#.#.", ".#.#...", ".S.####"],
    ];

    #[test]
    fn best_first_matches_breadth_first_length() {
        for rows in MAZES {
            let (_, bfs, grid) = run(Algorithm::BreadthFirst, rows);
            let expected = reference_distance(&grid);
            assert!(expected.is_some());
            assert_eq!(hops(&bfs), expected);
            for alg in [Algorithm::AStar, Algorithm::Dijkstra] {
                let (status, engine, _) = run(alg, rows);
                assert_eq!(status, SearchStatus::Found, "{alg}");
                assert_eq!(hops(&engine), expected, "{alg} on {rows:?}");
            }
        }
    }

    #[test]
    fn never_expands_a_visited_position() {
        for rows in MAZES {
            let mut grid = Grid::from_rows(rows);
            let mut engine = SearchEngine::new(Algorithm::AStar);
            let mut seen = HashSet::new();
            loop {
                let status = engine.step(&mut grid).unwrap();
                if let Some(p) = engine.current() {
                    if status == SearchStatus::Running || status == SearchStatus::Found {
                        seen.insert(p);
                    }
                }
                if status.is_finished() {
                    break;
                }
            }
            assert_eq!(seen.len(), engine.expanded());
        }
    }

    #[test]
    fn astar_expands_no_more_than_dijkstra() {
        for rows in MAZES {
            let (_, astar, _) = run(Algorithm::AStar, rows);
            let (_, dijkstra, _) = run(Algorithm::Dijkstra, rows);
            assert!(astar.expanded() <= dijkstra.expanded(), "{rows:?}");
        }
    }

    #[test]
    fn heuristic_steers_away_from_the_wrong_direction() {
        let rows = ["......S..G"];
        let (status, astar, _) = run(Algorithm::AStar, &rows);
        assert_eq!(status, SearchStatus::Found);
        assert_eq!(astar.expanded(), 4);
        assert_eq!(astar.found_path().unwrap().last(), Some(&Point::new(9, 0)));

        let (_, dijkstra, _) = run(Algorithm::Dijkstra, &rows);
        assert!(dijkstra.expanded() > astar.expanded());
    }
}
