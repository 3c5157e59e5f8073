//! World-position pathfinding over a grid snapshot.

use std::fmt;

use tilenav_core::{Locator, LocatorConfig, LocatorError, NavGrid, Point, WorldPoint};

use crate::astar::AstarSearch;
use crate::bfs::{DistanceMap, bfs_map};
use crate::path::Path;

/// Finds routes between world positions on a borrowed [`NavGrid`].
///
/// The grid is borrowed immutably for the lifetime of the finder, so it
/// cannot change while a search runs. Each call allocates its own search
/// state; one finder per thread over a shared grid is fine.
#[derive(Debug, Clone, Copy)]
pub struct Pathfinder<'a> {
    grid: &'a NavGrid,
    locator: Locator,
}

impl<'a> Pathfinder<'a> {
    /// Create a finder placing `grid` in the world according to `config`.
    pub fn new(grid: &'a NavGrid, config: LocatorConfig) -> Result<Self, LocatorError> {
        let locator = Locator::new(config, grid.bounds())?;
        Ok(Self { grid, locator })
    }

    pub fn grid(&self) -> &'a NavGrid {
        self.grid
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Shortest route from the cell under `start` to the cell under `goal`.
    ///
    /// Returns an error if either position lies outside the grid. A goal that
    /// cannot be reached is not an error: the result is an empty path.
    pub fn find_path(&self, start: WorldPoint, goal: WorldPoint) -> Result<Path, PathError> {
        let from = self
            .locator
            .locate(start)
            .ok_or(PathError::StartUnresolved(start))?;
        let to = self
            .locator
            .locate(goal)
            .ok_or(PathError::GoalUnresolved(goal))?;
        self.find_cell_path(from, to)
    }

    /// Like [`find_path`](Self::find_path), but unresolved positions also
    /// yield an empty path.
    pub fn find_path_or_empty(&self, start: WorldPoint, goal: WorldPoint) -> Path {
        match self.find_path(start, goal) {
            Ok(path) => path,
            Err(err) => {
                log::debug!("pathfinder: {err}");
                Path::empty()
            }
        }
    }

    /// Shortest route between two cells.
    pub fn find_cell_path(&self, start: Point, goal: Point) -> Result<Path, PathError> {
        let bounds = self.grid.bounds();
        if !bounds.contains(start) {
            return Err(PathError::OutOfBounds(start));
        }
        let mut search =
            AstarSearch::new(self.grid, bounds, start, goal).ok_or(PathError::OutOfBounds(goal))?;
        search.run();
        Ok(search.path())
    }

    /// Step distances from the cell under `pos` to every cell reachable
    /// within `max_dist` steps.
    pub fn reachable_from(&self, pos: WorldPoint, max_dist: i32) -> Result<DistanceMap, PathError> {
        let from = self
            .locator
            .locate(pos)
            .ok_or(PathError::StartUnresolved(pos))?;
        Ok(bfs_map(self.grid, self.grid.bounds(), &[from], max_dist))
    }
}

/// Precondition failures of a path query.
///
/// Search exhaustion is not an error; it is reported as an empty [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathError {
    /// The start position is not over any grid cell.
    StartUnresolved(WorldPoint),
    /// The goal position is not over any grid cell.
    GoalUnresolved(WorldPoint),
    /// A cell coordinate lies outside the grid.
    OutOfBounds(Point),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartUnresolved(p) => write!(f, "start position {p} is outside the grid"),
            Self::GoalUnresolved(p) => write!(f, "goal position {p} is outside the grid"),
            Self::OutOfBounds(p) => write!(f, "cell {p} is outside the grid"),
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;
    use tilenav_core::Scene;

    const LAYOUT: &str = "
        ....#
        .##.#
        ..>..
    ";

    fn grid() -> NavGrid {
        Scene::parse(&LAYOUT.replace(' ', "")).unwrap().to_grid()
    }

    fn center(x: i32, y: i32) -> WorldPoint {
        WorldPoint::new(x as f32 + 0.5, -(y as f32) - 0.5)
    }

    #[test]
    fn world_positions_resolve_to_cells() {
        let g = grid();
        let finder = Pathfinder::new(&g, LocatorConfig::default()).unwrap();
        let path = finder.find_path(center(0, 0), center(3, 1)).unwrap();
        assert_eq!(path.start(), Some(Point::new(0, 0)));
        assert_eq!(path.goal(), Some(Point::new(3, 1)));
        assert_eq!(path.steps(), 4);
    }

    #[test]
    fn one_way_tile_only_forward() {
        let g = grid();
        let finder = Pathfinder::new(&g, LocatorConfig::default()).unwrap();
        // Row 2: "..>.." -- (2, 2) only exits right.
        let forward = finder.find_cell_path(Point::new(2, 2), Point::new(4, 2)).unwrap();
        assert_eq!(forward.steps(), 2);
        let back = finder.find_cell_path(Point::new(2, 2), Point::new(1, 2)).unwrap();
        // Going left means leaving (2, 2) right first, then around via row 0.
        assert_eq!(back.as_slice()[1], Point::new(3, 2));
        assert_eq!(back.steps(), 9);
    }

    #[test]
    fn unresolved_positions_are_errors() {
        let g = grid();
        let finder = Pathfinder::new(&g, LocatorConfig::default()).unwrap();
        let outside = WorldPoint::new(-3.0, 1.0);
        assert_eq!(
            finder.find_path(outside, center(0, 0)),
            Err(PathError::StartUnresolved(outside))
        );
        assert_eq!(
            finder.find_path(center(0, 0), outside),
            Err(PathError::GoalUnresolved(outside))
        );
        assert!(finder.find_path_or_empty(outside, center(0, 0)).is_empty());
    }

    #[test]
    fn exhausted_search_is_ok_and_empty() {
        let g = grid();
        let finder = Pathfinder::new(&g, LocatorConfig::default()).unwrap();
        let path = finder.find_path(center(0, 0), center(4, 0)).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn same_cell_gives_single_cell_path() {
        let g = grid();
        let finder = Pathfinder::new(&g, LocatorConfig::default()).unwrap();
        let a = WorldPoint::new(1.2, -0.2);
        let b = WorldPoint::new(1.8, -0.9);
        let path = finder.find_path(a, b).unwrap();
        assert_eq!(path.as_slice(), &[Point::new(1, 0)]);
    }

    #[test]
    fn cell_path_bounds_checked() {
        let g = grid();
        let finder = Pathfinder::new(&g, LocatorConfig::default()).unwrap();
        assert_eq!(
            finder.find_cell_path(Point::new(5, 0), Point::new(0, 0)),
            Err(PathError::OutOfBounds(Point::new(5, 0)))
        );
        assert_eq!(
            finder.find_cell_path(Point::new(0, 0), Point::new(0, 3)),
            Err(PathError::OutOfBounds(Point::new(0, 3)))
        );
    }

    #[test]
    fn scaled_grid() {
        let g = grid();
        let cfg = LocatorConfig::default()
            .with_origin(WorldPoint::new(-5.0, 5.0))
            .with_cell_size(2.0);
        let finder = Pathfinder::new(&g, cfg).unwrap();
        let start = finder.locator().cell_center(Point::new(0, 2));
        let goal = finder.locator().cell_center(Point::new(4, 2));
        let path = finder.find_path(start, goal).unwrap();
        assert_eq!(path.steps(), 4);
    }

    #[test]
    fn reachable_from_position() {
        let g = grid();
        let finder = Pathfinder::new(&g, LocatorConfig::default()).unwrap();
        let map = finder.reachable_from(center(0, 0), i32::MAX).unwrap();
        assert!(map.is_reachable(Point::new(4, 2)));
        assert!(!map.is_reachable(Point::new(4, 0)));
        assert_eq!(map.at(Point::new(3, 0)), 3);
        assert!(finder.reachable_from(WorldPoint::new(100.0, 0.0), 3).is_err());
    }

    #[test]
    fn bad_config_is_rejected() {
        let g = grid();
        let cfg = LocatorConfig::default().with_cell_size(-1.0);
        assert!(Pathfinder::new(&g, cfg).is_err());
    }
}
