use pathgrid_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Estimate of the remaining cost used to order a best-first frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Always zero: uniform-cost search.
    Zero,
    /// [`manhattan`] distance, admissible on a 4-connected grid.
    Manhattan,
}

impl Heuristic {
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> i32 {
        match self {
            Heuristic::Zero => 0,
            Heuristic::Manhattan => manhattan(from, to),
        }
    }
}
