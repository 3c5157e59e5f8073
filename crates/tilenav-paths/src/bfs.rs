use std::collections::VecDeque;

use tilenav_core::{Point, Range};

use crate::nodes::{PathNode, UNREACHABLE};
use crate::traits::Pather;

/// Step distances from a set of sources, as computed by [`bfs_map`].
#[derive(Debug, Clone)]
pub struct DistanceMap {
    rng: Range,
    dist: Vec<i32>,
    reached: Vec<PathNode>,
}

impl DistanceMap {
    /// The distance at `p`.
    ///
    /// Returns [`UNREACHABLE`] if `p` is outside the range or was not reached.
    pub fn at(&self, p: Point) -> i32 {
        match self.rng.index_of(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Whether `p` was reached.
    pub fn is_reachable(&self, p: Point) -> bool {
        self.at(p) != UNREACHABLE
    }

    /// Every reached node, in visiting order (sources first).
    pub fn reached(&self) -> &[PathNode] {
        &self.reached
    }
}

/// Compute a multi-source breadth-first search distance map.
///
/// Each step has cost 1 and follows the same one-way adjacency as A*.
/// Expansion stops when the distance exceeds `max_dist`. Sources outside
/// `bounds` are ignored.
pub fn bfs_map<P: Pather>(
    pather: &P,
    bounds: Range,
    sources: &[Point],
    max_dist: i32,
) -> DistanceMap {
    let mut map = DistanceMap {
        rng: bounds,
        dist: vec![UNREACHABLE; bounds.len()],
        reached: Vec::new(),
    };
    let mut queue: VecDeque<usize> = VecDeque::new();

    for &src in sources {
        if let Some(si) = bounds.index_of(src) {
            if map.dist[si] != UNREACHABLE {
                continue;
            }
            map.dist[si] = 0;
            queue.push_back(si);
            map.reached.push(PathNode { pos: src, cost: 0 });
        }
    }

    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = queue.pop_front() {
        let current_dist = map.dist[ci];
        let cp = bounds.point_at(ci);

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = bounds.index_of(np) else {
                continue;
            };
            if map.dist[ni] != UNREACHABLE {
                continue;
            }
            let nd = current_dist + 1;
            if nd > max_dist {
                continue;
            }
            map.dist[ni] = nd;
            queue.push_back(ni);
            map.reached.push(PathNode { pos: np, cost: nd });
        }
    }

    log::debug!(
        "bfs: {} sources reached {} cells",
        sources.len(),
        map.reached.len()
    );
    map
}
