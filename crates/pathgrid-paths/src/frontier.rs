use std::collections::VecDeque;

use pathgrid_core::Point;

use crate::distance::Heuristic;
use crate::engine::Algorithm;
use crate::heap::MinHeap;
use crate::node::NodeId;

/// Discovered-but-unexpanded nodes, one container shape per algorithm.
#[derive(Debug, Clone)]
pub(crate) enum Frontier {
    /// FIFO queue for breadth-first search.
    Queue(VecDeque<NodeId>),
    /// Depth-first search keeps no container: the current node's parent
    /// chain is the stack. Only the root waits here before the first
    /// expansion.
    Chain { root: Option<NodeId> },
    /// Min-heap keyed by `cost + heuristic` for the best-first variants.
    Heap {
        heap: MinHeap<NodeId>,
        heuristic: Heuristic,
    },
}

impl Frontier {
    pub(crate) fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::BreadthFirst => Frontier::Queue(VecDeque::new()),
            Algorithm::DepthFirst => Frontier::Chain { root: None },
            Algorithm::Dijkstra => Frontier::Heap {
                heap: MinHeap::new(),
                heuristic: Heuristic::Zero,
            },
            Algorithm::AStar => Frontier::Heap {
                heap: MinHeap::new(),
                heuristic: Heuristic::Manhattan,
            },
        }
    }

    /// Make `root` the only waiting node.
    pub(crate) fn seed(&mut self, root: NodeId, start: Point, goal: Point) {
        self.clear();
        match self {
            Frontier::Queue(queue) => queue.push_back(root),
            Frontier::Chain { root: slot } => *slot = Some(root),
            Frontier::Heap { heap, heuristic } => heap.insert(heuristic.estimate(start, goal), root),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Frontier::Queue(queue) => queue.len(),
            Frontier::Chain { root } => usize::from(root.is_some()),
            Frontier::Heap { heap, .. } => heap.len(),
        }
    }

    pub(crate) fn clear(&mut self) {
        match self {
            Frontier::Queue(queue) => queue.clear(),
            Frontier::Chain { root } => *root = None,
            Frontier::Heap { heap, .. } => heap.clear(),
        }
    }
}
