//! **tilenav-core**: navigation grid types.
//!
//! This crate provides the data side of *tilenav*: cell geometry, tiles with
//! directional exit permissions, the dense [`NavGrid`] built from a scene
//! layout, and the [`Locator`] that maps world positions onto grid cells.
//! Search algorithms live in `tilenav-paths`.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod locator;
pub mod scene;

pub use cell::{Dir, Exits, NavCell};
pub use geom::{Point, Range, WorldPoint};
pub use grid::{GridError, NavGrid};
pub use locator::{Locator, LocatorConfig, LocatorError};
pub use scene::{Scene, SceneError};
