//! Path reconstruction from a goal's parent chain.

use std::ops::Deref;

use tilenav_core::Point;

use crate::nodes::SearchNodes;

/// An ordered route from start to goal, both inclusive.
///
/// An empty path means no route was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path(Vec<Point>);

impl Path {
    /// The empty path ("no route").
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Rebuild the route ending at `goal` by following parent links.
    ///
    /// The walk collects goal → start and is then reversed.
    ///
    /// # Panics
    ///
    /// Panics if the chain is longer than the number of nodes, which can
    /// only happen if parent links form a cycle.
    pub fn from_parents(nodes: &SearchNodes, goal: Point) -> Self {
        let mut points = Vec::new();
        let mut cur = Some(goal);
        while let Some(p) = cur {
            assert!(
                points.len() < nodes.len(),
                "parent chain from {goal} exceeds {} nodes",
                nodes.len()
            );
            points.push(p);
            cur = nodes.get(p).and_then(|n| n.parent);
        }
        points.reverse();
        Self(points)
    }

    /// Number of edges walked (one less than the number of cells).
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// First cell of the route.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.0.first().copied()
    }

    /// Last cell of the route.
    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.0.last().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Point> {
        self.0
    }
}

impl Deref for Path {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.0
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilenav_core::Range;

    fn link(nodes: &mut SearchNodes, p: Point, g: i32, parent: Option<Point>) {
        let i = nodes.idx(p).unwrap();
        let n = nodes.at_mut(i);
        n.g = g;
        n.parent = parent;
    }

    #[test]
    fn builds_start_first() {
        let mut nodes = SearchNodes::new(Range::new(0, 0, 3, 1));
        link(&mut nodes, Point::new(0, 0), 0, None);
        link(&mut nodes, Point::new(1, 0), 1, Some(Point::new(0, 0)));
        link(&mut nodes, Point::new(2, 0), 2, Some(Point::new(1, 0)));

        let path = Path::from_parents(&nodes, Point::new(2, 0));
        assert_eq!(
            path.as_slice(),
            &[Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
        assert_eq!(path.steps(), 2);
        assert_eq!(path.start(), Some(Point::new(0, 0)));
        assert_eq!(path.goal(), Some(Point::new(2, 0)));
    }

    #[test]
    fn single_cell_chain() {
        let nodes = SearchNodes::new(Range::new(0, 0, 2, 2));
        let path = Path::from_parents(&nodes, Point::new(1, 1));
        assert_eq!(path.len(), 1);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    #[should_panic(expected = "parent chain")]
    fn cyclic_chain_is_fatal() {
        let mut nodes = SearchNodes::new(Range::new(0, 0, 2, 1));
        link(&mut nodes, Point::new(0, 0), 1, Some(Point::new(1, 0)));
        link(&mut nodes, Point::new(1, 0), 1, Some(Point::new(0, 0)));
        Path::from_parents(&nodes, Point::new(0, 0));
    }

    #[test]
    fn empty_path() {
        let path = Path::empty();
        assert!(path.is_empty());
        assert_eq!(path.steps(), 0);
        assert_eq!(path.start(), None);
        assert_eq!(path, Path::default());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_serializes_as_point_list() {
        let path = Path::from(vec![Point::new(0, 0), Point::new(1, 0)]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"[{"x":0,"y":0},{"x":1,"y":0}]"#);
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
