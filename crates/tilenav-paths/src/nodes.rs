use tilenav_core::{Point, Range};

/// Sentinel cost meaning "not reached yet" (+∞).
pub const UNREACHABLE: i32 = i32::MAX;

/// A position with an associated cost, returned from BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Per-cell search state for one A* run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    /// Best known cost from the start.
    pub g: i32,
    /// `g` plus the heuristic estimate to the goal.
    pub f: i32,
    /// Predecessor on the best known path.
    pub parent: Option<Point>,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: None,
        }
    }
}

// ---------------------------------------------------------------------------
// SearchNodes
// ---------------------------------------------------------------------------

/// Search state for every cell of a rectangle, addressed by flat index.
///
/// A fresh `SearchNodes` is allocated for each search, so costs and parent
/// links never carry over from one query to the next.
#[derive(Debug, Clone)]
pub struct SearchNodes {
    rng: Range,
    nodes: Vec<SearchNode>,
}

impl SearchNodes {
    /// Create unvisited nodes for the given rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            nodes: vec![SearchNode::default(); rng.len()],
        }
    }

    /// The rectangle being covered.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node for `p`, or `None` if out of range.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&SearchNode> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index_of(p)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng.point_at(idx)
    }

    #[inline]
    pub(crate) fn at(&self, idx: usize) -> &SearchNode {
        &self.nodes[idx]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, idx: usize) -> &mut SearchNode {
        &mut self.nodes[idx]
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
