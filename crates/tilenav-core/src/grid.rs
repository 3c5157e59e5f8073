//! The navigation grid: a dense 2D array of [`NavCell`]s.
//!
//! [`NavGrid`] is plain owned data. It is built once per scene snapshot and
//! then borrowed immutably by searches, so no search can observe a change
//! mid-flight.

use std::fmt;

use crate::cell::{Dir, NavCell};
use crate::geom::{Point, Range};

/// A `width × height` grid of navigation cells without holes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid", into = "RawGrid")
)]
pub struct NavGrid {
    cells: Vec<NavCell>,
    bounds: Range,
}

impl NavGrid {
    /// Create a new grid filled with blocked cells.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, NavCell::blocked())
    }

    /// Create a new grid with every cell set to `cell`.
    pub fn filled(width: i32, height: i32, cell: NavCell) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![cell; bounds.len()],
            bounds,
        }
    }

    /// Create a new grid using a function of each point.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> NavCell) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: bounds.iter().map(&mut f).collect(),
            bounds,
        }
    }

    /// Create a grid from row-major cells.
    pub fn from_cells(width: i32, height: i32, cells: Vec<NavCell>) -> Result<Self, GridError> {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        if cells.len() != bounds.len() {
            return Err(GridError::SizeMismatch {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self { cells, bounds })
    }

    /// Returns the bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The cell at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid. Callers are expected to
    /// bounds-check first; an out-of-range access is a bug, not a miss.
    #[inline]
    pub fn cell_at(&self, p: Point) -> NavCell {
        match self.bounds.index_of(p) {
            Some(i) => self.cells[i],
            None => panic!("cell {p} outside grid {}", self.bounds),
        }
    }

    /// The cell at column `col`, row `row`. Panics when out of range.
    #[inline]
    pub fn cell_at_xy(&self, col: i32, row: i32) -> NavCell {
        self.cell_at(Point::new(col, row))
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<NavCell> {
        self.bounds.index_of(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid.
    pub fn set(&mut self, p: Point, cell: NavCell) {
        match self.bounds.index_of(p) {
            Some(i) => self.cells[i] = cell,
            None => panic!("cell {p} outside grid {}", self.bounds),
        }
    }

    /// Append the cells reachable from `p` in one step into `buf`.
    ///
    /// Directions are tried in the order Left, Right, Up, Down. A neighbor is
    /// kept when the cell at `p` permits leaving in that direction, the
    /// neighbor lies inside the grid, and the neighbor is navigable. The
    /// neighbor's own exits play no part, so adjacency may be one-way.
    pub fn neighbors_of(&self, p: Point, buf: &mut Vec<Point>) {
        let source = self.cell_at(p);
        for dir in Dir::ALL {
            if !source.can_exit(dir) {
                continue;
            }
            let n = p + dir.offset();
            let Some(i) = self.bounds.index_of(n) else {
                continue;
            };
            if self.cells[i].navigable {
                buf.push(n);
            }
        }
    }

    /// Number of navigable cells.
    pub fn count_navigable(&self) -> usize {
        self.cells.iter().filter(|c| c.navigable).count()
    }

    /// Row-major iterator over `(Point, NavCell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, NavCell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

/// Errors that can occur when building a grid from raw cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The cell count does not equal `width * height`.
    SizeMismatch { width: i32, height: i32, cells: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                width,
                height,
                cells,
            } => {
                let expected = i64::from(*width) * i64::from(*height);
                write!(f, "grid: {width}x{height} needs {expected} cells, got {cells}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawGrid {
    width: i32,
    height: i32,
    cells: Vec<NavCell>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for NavGrid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        NavGrid::from_cells(raw.width, raw.height, raw.cells)
    }
}

#[cfg(feature = "serde")]
impl From<NavGrid> for RawGrid {
    fn from(g: NavGrid) -> Self {
        RawGrid {
            width: g.width(),
            height: g.height(),
            cells: g.cells,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = NavGrid::new(3, 2);
        g.set(Point::new(2, 1), NavCell::open());
        let json = serde_json::to_string(&g).unwrap();
        let back: NavGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn grid_rejects_wrong_cell_count() {
        let json = r#"{"width":2,"height":2,"cells":[]}"#;
        assert!(serde_json::from_str::<NavGrid>(json).is_err());
    }

    #[test]
    fn grid_rejects_huge_dimensions() {
        let json = r#"{"width":70000,"height":70000,"cells":[]}"#;
        let err = serde_json::from_str::<NavGrid>(json).unwrap_err();
        assert!(err.to_string().contains("needs 4900000000 cells"));
    }
}
