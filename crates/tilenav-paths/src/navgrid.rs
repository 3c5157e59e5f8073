//! [`Pather`] implementation for [`NavGrid`].

use tilenav_core::{NavGrid, Point};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather};

// Cells off the grid have no neighbors, so a search over a wider range
// simply never reaches them.
impl Pather for NavGrid {
    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        if self.contains(p) {
            self.neighbors_of(p, buf);
        }
    }
}

impl AstarPather for NavGrid {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilenav_core::NavCell;

    #[test]
    fn off_grid_cells_have_no_neighbors() {
        let g = NavGrid::filled(2, 2, NavCell::open());
        let mut buf = Vec::new();
        g.neighbors(Point::new(-1, 0), &mut buf);
        g.neighbors(Point::new(2, 1), &mut buf);
        assert!(buf.is_empty());
        g.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(0, 1)]);
    }
}
