//! World-position to grid-cell lookup.
//!
//! The grid is a uniform lattice anchored in the scene, so a position is
//! resolved by floor-dividing its offset from the grid's top-left corner by
//! the cell size. World `y` grows up while rows grow down.
//!
//! Each cell owns the world square `[left, right) × (bottom, top]`. A
//! position lying exactly on an edge shared by two cells therefore always
//! resolves to the same one: the cell to its right and below it.

use std::fmt;

use crate::geom::{Point, Range, WorldPoint};

/// Placement of the grid in world space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocatorConfig {
    /// World position of the top-left corner of cell (0, 0).
    pub origin: WorldPoint,
    /// Side length of one square cell in world units.
    pub cell_size: f32,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            origin: WorldPoint::new(0.0, 0.0),
            cell_size: 1.0,
        }
    }
}

impl LocatorConfig {
    /// Set the origin (builder).
    pub fn with_origin(mut self, origin: WorldPoint) -> Self {
        self.origin = origin;
        self
    }

    /// Set the cell size (builder).
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }
}

/// Resolves world positions to cells of a grid with the given bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Locator {
    config: LocatorConfig,
    bounds: Range,
}

impl Locator {
    /// Create a locator for a grid covering `bounds`.
    pub fn new(config: LocatorConfig, bounds: Range) -> Result<Self, LocatorError> {
        if !config.cell_size.is_finite() || config.cell_size <= 0.0 {
            return Err(LocatorError::InvalidCellSize(config.cell_size));
        }
        if !config.origin.is_finite() {
            return Err(LocatorError::InvalidOrigin(config.origin));
        }
        Ok(Self { config, bounds })
    }

    /// The configuration in use.
    pub fn config(&self) -> LocatorConfig {
        self.config
    }

    /// The grid bounds positions are resolved against.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// The cell containing `pos`, or `None` if `pos` is outside the grid.
    pub fn locate(&self, pos: WorldPoint) -> Option<Point> {
        if !pos.is_finite() {
            log::debug!("locator: non-finite position {pos}");
            return None;
        }
        let size = f64::from(self.config.cell_size);
        let col = ((f64::from(pos.x) - f64::from(self.config.origin.x)) / size).floor();
        let row = ((f64::from(self.config.origin.y) - f64::from(pos.y)) / size).floor();
        let min = self.bounds.min;
        let max = self.bounds.max;
        if col < f64::from(min.x)
            || col >= f64::from(max.x)
            || row < f64::from(min.y)
            || row >= f64::from(max.y)
        {
            log::debug!("locator: {pos} is outside grid {}", self.bounds);
            return None;
        }
        Some(Point::new(col as i32, row as i32))
    }

    /// World position of the center of cell `p`.
    pub fn cell_center(&self, p: Point) -> WorldPoint {
        let size = self.config.cell_size;
        WorldPoint::new(
            self.config.origin.x + (p.x as f32 + 0.5) * size,
            self.config.origin.y - (p.y as f32 + 0.5) * size,
        )
    }
}

/// Errors that can occur when configuring a locator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocatorError {
    /// Cell size is zero, negative or not finite.
    InvalidCellSize(f32),
    /// Origin has a non-finite coordinate.
    InvalidOrigin(WorldPoint),
}

impl fmt::Display for LocatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellSize(s) => write!(f, "locator: invalid cell size {s}"),
            Self::InvalidOrigin(p) => write!(f, "locator: invalid origin {p}"),
        }
    }
}

impl std::error::Error for LocatorError {}
