use pathgrid_core::Point;

/// Index of a [`SearchNode`] inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One node of the search tree. Immutable once pushed: reaching a position
/// again creates a new node instead of re-parenting an old one, so parent
/// chains never form cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub pos: Point,
    pub parent: Option<NodeId>,
    /// Number of steps from the root.
    pub cost: i32,
}

/// Append-only storage for the search tree.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its id.
    pub fn push(&mut self, pos: Point, parent: Option<NodeId>, cost: i32) -> NodeId {
        self.nodes.push(SearchNode { pos, parent, cost });
        NodeId(self.nodes.len() - 1)
    }

    /// Add a child of `parent` one step further from the root.
    pub fn push_child(&mut self, parent: NodeId, pos: Point) -> NodeId {
        let cost = self[parent].cost + 1;
        self.push(pos, Some(parent), cost)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// All nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Walk from `id` up to the root, yielding `id` first.
    pub fn chain(&self, id: NodeId) -> Chain<'_> {
        Chain {
            arena: self,
            next: Some(id),
        }
    }

    /// Positions from the root down to `id`.
    pub fn path(&self, id: NodeId) -> Vec<Point> {
        let mut path: Vec<Point> = self.chain(id).map(|(_, n)| n.pos).collect();
        path.reverse();
        path
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = SearchNode;

    #[inline]
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}

/// Iterator over a node and its ancestors. See [`NodeArena::chain`].
pub struct Chain<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = (NodeId, &'a SearchNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.arena.get(id)?;
        self.next = node.parent;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_runs_root_to_leaf() {
        let mut arena = NodeArena::new();
        let root = arena.push(Point::new(0, 0), None, 0);
        let a = arena.push_child(root, Point::new(1, 0));
        let b = arena.push_child(a, Point::new(1, 1));
        let sibling = arena.push_child(root, Point::new(0, 1));

        assert_eq!(arena[b].cost, 2);
        assert_eq!(
            arena.path(b),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]
        );
        assert_eq!(arena.chain(sibling).count(), 2);
        assert_eq!(arena.path(root), vec![Point::new(0, 0)]);
        assert_eq!(arena.len(), 4);
    }
}
