//! Helpers shared by the stepper tests.

use std::collections::VecDeque;

use pathgrid_core::{CellState, Grid};

use crate::engine::{Algorithm, SearchEngine, SearchStatus};

/// Run `algorithm` to completion on a grid built from `rows`.
pub(crate) fn run(algorithm: Algorithm, rows: &[&str]) -> (SearchStatus, SearchEngine, Grid) {
    let mut grid = Grid::from_rows(rows);
    let mut engine = SearchEngine::new(algorithm);
    let status = engine.finish(&mut grid).unwrap();
    (status, engine, grid)
}

/// Hop count of the path the engine found.
pub(crate) fn hops(engine: &SearchEngine) -> Option<usize> {
    engine.found_path().map(|p| p.len() - 1)
}

/// Brute-force shortest hop count from start to goal, walls only.
pub(crate) fn reference_distance(grid: &Grid) -> Option<usize> {
    let (start, goal) = grid.endpoints()?;
    let mut dist = vec![usize::MAX; grid.len()];
    let mut queue = VecDeque::from([start]);
    dist[grid.index(start)?] = 0;
    while let Some(p) = queue.pop_front() {
        let d = dist[grid.index(p)?];
        if p == goal {
            return Some(d);
        }
        for n in p.neighbors_4() {
            match (grid.at(n), grid.index(n)) {
                (Some(state), Some(i)) if state != CellState::Wall && dist[i] == usize::MAX => {
                    dist[i] = d + 1;
                    queue.push_back(n);
                }
                _ => {}
            }
        }
    }
    None
}
