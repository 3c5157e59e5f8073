//! Tile layouts built from text.
//!
//! A [`Scene`] parses an ASCII layout, one character per tile, into a
//! [`NavGrid`]. Lines are separated by `'\n'` and must all have the same
//! width. The default legend is:
//!
//! | char | tile |
//! |---|---|
//! | `.` | navigable, all exits |
//! | `#` | not navigable |
//! | `<` `>` `^` `v` | navigable, exit in that direction only |
//! | `-` | navigable, exits left and right |
//! | `\|` | navigable, exits up and down |
//! | `o` | navigable, no exits |

use std::fmt;

use crate::cell::{Exits, NavCell};
use crate::geom::Point;
use crate::grid::NavGrid;

/// Map a character of the default legend to its tile.
pub fn default_legend(ch: char) -> Option<NavCell> {
    let open = NavCell::open();
    let cell = match ch {
        '.' => open,
        '#' => NavCell::blocked(),
        '<' => open.with_exits(Exits::LEFT),
        '>' => open.with_exits(Exits::RIGHT),
        '^' => open.with_exits(Exits::UP),
        'v' => open.with_exits(Exits::DOWN),
        '-' => open.with_exits(Exits::HORIZONTAL),
        '|' => open.with_exits(Exits::VERTICAL),
        'o' => open.with_exits(Exits::NONE),
        _ => return None,
    };
    Some(cell)
}

/// A parsed tile layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    content: String,
    size: Point,
    cells: Vec<NavCell>,
}

impl Scene {
    /// Parse a layout using [`default_legend`].
    pub fn parse(s: &str) -> Result<Self, SceneError> {
        Self::parse_with(s, default_legend)
    }

    /// Parse a layout using a custom legend.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. Characters the legend maps to `None` are
    /// rejected.
    pub fn parse_with(
        s: &str,
        legend: impl Fn(char) -> Option<NavCell>,
    ) -> Result<Self, SceneError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SceneError::Empty);
        }
        let mut cells = Vec::with_capacity(s.len());
        let mut width: Option<i32> = None;
        let mut height = 0;

        for (y, line) in s.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut x: i32 = 0;
            for ch in line.chars() {
                let pos = Point::new(x, y as i32);
                let cell = legend(ch).ok_or(SceneError::UnknownTile { ch, pos })?;
                cells.push(cell);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(SceneError::InconsistentWidth {
                        line: y as i32,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let size = Point::new(width.unwrap_or(0), height);
        log::debug!("scene: parsed {}x{} layout", size.x, size.y);
        Ok(Self {
            content: s.to_string(),
            size,
            cells,
        })
    }

    /// Return the layout's textual content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Return the (width, height) size of the layout in tiles.
    pub fn size(&self) -> Point {
        self.size
    }

    /// Build a fresh navigation grid from the layout.
    pub fn to_grid(&self) -> NavGrid {
        let w = self.size.x;
        NavGrid::from_fn(w, self.size.y, |p| self.cells[(p.y * w + p.x) as usize])
    }
}

impl std::str::FromStr for Scene {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, SceneError> {
        Self::parse(s)
    }
}

/// Errors that can occur when parsing a scene layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The layout contains no tiles.
    Empty,
    /// A line is wider or narrower than the first one.
    InconsistentWidth { line: i32, expected: i32, found: i32 },
    /// A character the legend does not know.
    UnknownTile { ch: char, pos: Point },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("scene: empty layout"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(f, "scene: line {line} has width {found}, expected {expected}"),
            Self::UnknownTile { ch, pos } => {
                write!(f, "scene: unknown tile \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for SceneError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Dir;

    #[test]
    fn test_parse_size_and_cells() {
        let scene = Scene::parse("..#\n>.v").unwrap();
        assert_eq!(scene.size(), Point::new(3, 2));
        let g = scene.to_grid();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.cell_at_xy(0, 0), NavCell::open());
        assert!(!g.cell_at_xy(2, 0).navigable);
        let conveyor = g.cell_at_xy(0, 1);
        assert!(conveyor.navigable);
        assert!(conveyor.can_exit(Dir::Right));
        assert!(!conveyor.can_exit(Dir::Left));
        assert!(g.cell_at_xy(2, 1).can_exit_down());
    }

    #[test]
    fn test_parse_trims_outer_whitespace() {
        let scene = Scene::parse("\n  \n...\n...\n\n").unwrap();
        assert_eq!(scene.size(), Point::new(3, 2));
        assert_eq!(scene.content(), "...\n...");

        // Indentation inside the layout is not trimmed.
        let err = Scene::parse("...\n ..").unwrap_err();
        assert_eq!(
            err,
            SceneError::UnknownTile {
                ch: ' ',
                pos: Point::new(0, 1)
            }
        );
    }

    #[test]
    fn test_parse_inconsistent_width() {
        let err = Scene::parse("...\n..").unwrap_err();
        assert_eq!(
            err,
            SceneError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_parse_unknown_tile() {
        let err = Scene::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            SceneError::UnknownTile {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Scene::parse("  \n ").unwrap_err(), SceneError::Empty);
    }

    #[test]
    fn test_parse_with_custom_legend() {
        let scene = Scene::parse_with("AB", |ch| match ch {
            'A' => Some(NavCell::open()),
            'B' => Some(NavCell::blocked()),
            _ => None,
        })
        .unwrap();
        let g = scene.to_grid();
        assert!(g.cell_at_xy(0, 0).navigable);
        assert!(!g.cell_at_xy(1, 0).navigable);
    }

    #[test]
    fn test_from_str() {
        let scene: Scene = "-|o".parse().unwrap();
        let g = scene.to_grid();
        assert_eq!(g.cell_at_xy(0, 0).exits, Exits::HORIZONTAL);
        assert_eq!(g.cell_at_xy(1, 0).exits, Exits::VERTICAL);
        assert!(g.cell_at_xy(2, 0).exits.is_empty());
        assert!(g.cell_at_xy(2, 0).navigable);
    }

    #[test]
    fn test_crlf_lines() {
        let scene = Scene::parse("..\r\n..").unwrap();
        assert_eq!(scene.size(), Point::new(2, 2));
    }
}
