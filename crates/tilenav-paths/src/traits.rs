use tilenav_core::Point;

/// Minimal pathfinding interface: neighbor enumeration.
///
/// Every step between a point and one of its neighbors costs 1.
pub trait Pather {
    /// Append the points reachable from `p` in one step into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with an admissible heuristic, as needed by A*.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the number of steps from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}
