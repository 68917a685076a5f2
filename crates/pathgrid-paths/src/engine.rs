use std::fmt;
use std::str::FromStr;

use pathgrid_core::{CellState, Error, Grid, Point, Result};

use crate::frontier::Frontier;
use crate::node::{NodeArena, NodeId};

/// Neighbour order tried by every stepper: +x, +y, −x, −y.
pub const DEFAULT_ORDER: [Point; 4] = [
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(0, -1),
];

/// `best_cost` value of a position that never entered the frontier.
pub(crate) const UNSEEN: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The search algorithm driven by a [`SearchEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Algorithm {
    #[default]
    BreadthFirst,
    DepthFirst,
    /// Best-first with a zero heuristic.
    Dijkstra,
    /// Best-first with the Manhattan heuristic.
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Name accepted by [`FromStr`] and used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "breadth-first",
            Algorithm::DepthFirst => "depth-first",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "a-star",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breadth-first" | "bfs" => Ok(Algorithm::BreadthFirst),
            "depth-first" | "dfs" => Ok(Algorithm::DepthFirst),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "a-star" | "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Lifecycle of one search: `Uninitialized → Running → {Found | Exhausted}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchStatus {
    #[default]
    Uninitialized,
    Running,
    Found,
    Exhausted,
}

impl SearchStatus {
    /// Whether the search reached a terminal state.
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, SearchStatus::Found | SearchStatus::Exhausted)
    }
}

// ---------------------------------------------------------------------------
// Search: state shared by all steppers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub(crate) struct Search {
    pub(crate) nodes: NodeArena,
    /// Expanded positions, indexed by `Grid::index`.
    pub(crate) visited: Vec<bool>,
    /// Lowest cost at which each position entered the frontier.
    pub(crate) best_cost: Vec<i32>,
    pub(crate) current: Option<NodeId>,
    pub(crate) found: Option<NodeId>,
    pub(crate) goal: Point,
    pub(crate) order: [Point; 4],
    pub(crate) expanded: usize,
    pub(crate) nbuf: Vec<Point>,
}

impl Search {
    fn new(order: [Point; 4]) -> Self {
        Self {
            nodes: NodeArena::new(),
            visited: Vec::new(),
            best_cost: Vec::new(),
            current: None,
            found: None,
            goal: Point::ZERO,
            order,
            expanded: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.visited.clear();
        self.best_cost.clear();
        self.current = None;
        self.found = None;
        self.expanded = 0;
    }

    /// Size the bookkeeping for `grid` and create the root node.
    fn begin(&mut self, grid: &Grid, start: Point, goal: Point) -> NodeId {
        self.clear();
        self.visited.resize(grid.len(), false);
        self.best_cost.resize(grid.len(), UNSEEN);
        self.goal = goal;
        if let Some(i) = grid.index(start) {
            self.best_cost[i] = 0;
        }
        self.nodes.push(start, None, 0)
    }

    #[inline]
    pub(crate) fn is_visited(&self, grid: &Grid, p: Point) -> bool {
        grid.index(p).is_some_and(|i| self.visited[i])
    }

    #[inline]
    pub(crate) fn mark_visited(&mut self, grid: &Grid, p: Point) {
        if let Some(i) = grid.index(p) {
            self.visited[i] = true;
        }
    }

    /// Fill `buf` with the in-bounds, non-wall, unvisited neighbours of
    /// `pos`, in the configured order.
    pub(crate) fn collect_open(&self, grid: &Grid, pos: Point, buf: &mut Vec<Point>) {
        buf.clear();
        for d in self.order {
            let n = pos + d;
            match grid.at(n) {
                Some(CellState::Wall) | None => {}
                Some(_) if self.is_visited(grid, n) => {}
                Some(_) => buf.push(n),
            }
        }
    }

    /// Paint `id` with `head` and all of its ancestors with `rest`.
    pub(crate) fn paint_chain(
        &self,
        grid: &mut Grid,
        id: NodeId,
        head: CellState,
        rest: CellState,
    ) -> Result<()> {
        for (nid, node) in self.nodes.chain(id) {
            grid.set(node.pos, if nid == id { head } else { rest })?;
        }
        Ok(())
    }

    /// Retire the previous current node: its whole chain becomes
    /// `Searched` and it joins the visited set.
    pub(crate) fn promote_current(&mut self, grid: &mut Grid) -> Result<()> {
        if let Some(id) = self.current.take() {
            self.paint_chain(grid, id, CellState::Searched, CellState::Searched)?;
            self.mark_visited(grid, self.nodes[id].pos);
            grid.restamp_markers();
        }
        Ok(())
    }

    /// Make `id` the current node and paint its trail. Returns whether it
    /// sits on the goal, in which case the trail is painted `Found`.
    pub(crate) fn enter(&mut self, grid: &mut Grid, id: NodeId) -> Result<bool> {
        self.current = Some(id);
        self.expanded += 1;
        let found = self.nodes[id].pos == self.goal;
        if found {
            self.found = Some(id);
            self.paint_chain(grid, id, CellState::Found, CellState::Found)?;
        } else {
            self.paint_chain(grid, id, CellState::PathSearching, CellState::Path)?;
        }
        grid.restamp_markers();
        Ok(found)
    }
}

#[inline]
pub(crate) fn outcome(found: bool) -> SearchStatus {
    if found {
        SearchStatus::Found
    } else {
        SearchStatus::Running
    }
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// One algorithm's run state over a grid, advanced one expansion at a time.
///
/// The engine never owns the grid: the host passes it into every
/// [`step`](SearchEngine::step) and must not edit it while a search is in
/// progress.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    algorithm: Algorithm,
    frontier: Frontier,
    search: Search,
    status: SearchStatus,
}

impl SearchEngine {
    /// Create an engine using [`DEFAULT_ORDER`].
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_order(algorithm, DEFAULT_ORDER)
    }

    /// Create an engine that tries neighbours in `order` (unit offsets).
    pub fn with_order(algorithm: Algorithm, order: [Point; 4]) -> Self {
        Self {
            algorithm,
            frontier: Frontier::for_algorithm(algorithm),
            search: Search::new(order),
            status: SearchStatus::Uninitialized,
        }
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Number of nodes that became the current node so far.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.search.expanded
    }

    /// Number of nodes waiting in the frontier.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Number of positions in the visited set.
    pub fn visited_len(&self) -> usize {
        self.search.visited.iter().filter(|&&v| v).count()
    }

    /// Position of the node being expanded.
    pub fn current(&self) -> Option<Point> {
        self.search.current.map(|id| self.search.nodes[id].pos)
    }

    /// The search tree built so far.
    #[inline]
    pub fn nodes(&self) -> &NodeArena {
        &self.search.nodes
    }

    /// Positions from start to goal once the goal was reached.
    pub fn found_path(&self) -> Option<Vec<Point>> {
        self.search.found.map(|id| self.search.nodes.path(id))
    }

    /// Advance the search by one unit of work.
    ///
    /// The first call only seeds the frontier with the start node. Each
    /// later call expands a single node. Once the search is `Found` or
    /// `Exhausted`, further calls change nothing until [`reset`].
    ///
    /// Fails with [`Error::Unready`], leaving everything untouched, when the
    /// grid lacks a start or goal.
    ///
    /// [`reset`]: SearchEngine::reset
    pub fn step(&mut self, grid: &mut Grid) -> Result<SearchStatus> {
        let Some((start, goal)) = grid.endpoints() else {
            log::debug!("{} step ignored: start or goal missing", self.algorithm);
            return Err(Error::Unready);
        };

        match self.status {
            SearchStatus::Uninitialized => {
                let root = self.search.begin(grid, start, goal);
                self.frontier.seed(root, start, goal);
                self.status = SearchStatus::Running;
                log::debug!("{} search from {start} to {goal}", self.algorithm);
                return Ok(self.status);
            }
            SearchStatus::Found | SearchStatus::Exhausted => {
                log::trace!("{} step after finish ignored", self.algorithm);
                return Ok(self.status);
            }
            SearchStatus::Running => {}
        }

        let status = match &mut self.frontier {
            Frontier::Queue(queue) => self.search.step_breadth_first(grid, queue)?,
            Frontier::Chain { root } => self.search.step_depth_first(grid, root)?,
            Frontier::Heap { heap, heuristic } => {
                self.search.step_best_first(grid, heap, *heuristic)?
            }
        };
        self.status = status;

        match status {
            SearchStatus::Found => log::info!(
                "{} found a path of {} steps after {} expansions",
                self.algorithm,
                self.found_path().map_or(0, |p| p.len().saturating_sub(1)),
                self.search.expanded
            ),
            SearchStatus::Exhausted => log::info!(
                "{} exhausted the frontier after {} expansions",
                self.algorithm,
                self.search.expanded
            ),
            _ => log::trace!(
                "{} step: current {:?}, frontier {}",
                self.algorithm,
                self.current(),
                self.frontier.len()
            ),
        }
        Ok(status)
    }

    /// Step until the search finishes.
    pub fn finish(&mut self, grid: &mut Grid) -> Result<SearchStatus> {
        loop {
            let status = self.step(grid)?;
            if status.is_finished() {
                return Ok(status);
            }
        }
    }

    /// Drop the frontier, visited set and current node and wipe the
    /// search annotations from `grid`.
    pub fn reset(&mut self, grid: &mut Grid) {
        self.frontier.clear();
        self.search.clear();
        self.status = SearchStatus::Uninitialized;
        grid.clear_annotations();
        log::debug!("{} search reset", self.algorithm);
    }

    /// Switch algorithm. Implies a [`reset`](SearchEngine::reset).
    pub fn set_algorithm(&mut self, algorithm: Algorithm, grid: &mut Grid) {
        self.algorithm = algorithm;
        self.frontier = Frontier::for_algorithm(algorithm);
        self.reset(grid);
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_uses_kebab_case_names() {
        for alg in Algorithm::ALL {
            let json = serde_json::to_string(&alg).unwrap();
            assert_eq!(json, format!("\"{}\"", alg.name()));
        }
    }
}
