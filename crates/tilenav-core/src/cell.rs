//! The [`NavCell`] type: navigability plus directional exit permissions.

use std::fmt;
use std::ops::{BitAnd, BitOr};

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the four axis-aligned movement directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

impl Dir {
    /// All directions, in neighbor enumeration order.
    pub const ALL: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

    /// Unit step in cell coordinates (`Up` decreases the row).
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Dir::Left => Point::new(-1, 0),
            Dir::Right => Point::new(1, 0),
            Dir::Up => Point::new(0, -1),
            Dir::Down => Point::new(0, 1),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
        }
    }

    /// The exit permission bit for this direction.
    #[inline]
    pub const fn exit(self) -> Exits {
        match self {
            Dir::Left => Exits::LEFT,
            Dir::Right => Exits::RIGHT,
            Dir::Up => Exits::UP,
            Dir::Down => Exits::DOWN,
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Dir::Left => "left",
            Dir::Right => "right",
            Dir::Up => "up",
            Dir::Down => "down",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Exits
// ---------------------------------------------------------------------------

/// Bitmask of the directions a cell may be departed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exits(pub u8);

impl Exits {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const UP: Self = Self(1 << 2);
    pub const DOWN: Self = Self(1 << 3);
    pub const HORIZONTAL: Self = Self(Self::LEFT.0 | Self::RIGHT.0);
    pub const VERTICAL: Self = Self(Self::UP.0 | Self::DOWN.0);
    pub const ALL: Self = Self(Self::HORIZONTAL.0 | Self::VERTICAL.0);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether departing in `dir` is permitted.
    #[inline]
    pub const fn allows(self, dir: Dir) -> bool {
        self.contains(dir.exit())
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Exits {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Exits {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl From<Dir> for Exits {
    fn from(dir: Dir) -> Self {
        dir.exit()
    }
}

// ---------------------------------------------------------------------------
// NavCell
// ---------------------------------------------------------------------------

/// One grid tile.
///
/// `navigable` gates whether the tile may be *entered*; `exits` gates which
/// directions it may be *departed* in. The two are independent: a tile that
/// allows leaving to the right says nothing about entering from the right.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavCell {
    pub navigable: bool,
    pub exits: Exits,
}

impl NavCell {
    /// Navigable, with every exit permitted.
    #[inline]
    pub const fn open() -> Self {
        Self {
            navigable: true,
            exits: Exits::ALL,
        }
    }

    /// Non-navigable, with no exits.
    #[inline]
    pub const fn blocked() -> Self {
        Self {
            navigable: false,
            exits: Exits::NONE,
        }
    }

    /// Set navigability (builder).
    #[inline]
    pub const fn with_navigable(mut self, navigable: bool) -> Self {
        self.navigable = navigable;
        self
    }

    /// Set the exit mask (builder).
    #[inline]
    pub const fn with_exits(mut self, exits: Exits) -> Self {
        self.exits = exits;
        self
    }

    #[inline]
    pub const fn can_exit(self, dir: Dir) -> bool {
        self.exits.allows(dir)
    }

    #[inline]
    pub const fn can_exit_left(self) -> bool {
        self.can_exit(Dir::Left)
    }

    #[inline]
    pub const fn can_exit_right(self) -> bool {
        self.can_exit(Dir::Right)
    }

    #[inline]
    pub const fn can_exit_up(self) -> bool {
        self.can_exit(Dir::Up)
    }

    #[inline]
    pub const fn can_exit_down(self) -> bool {
        self.can_exit(Dir::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exits_mask_ops() {
        let m = Exits::LEFT | Exits::UP;
        assert!(m.allows(Dir::Left));
        assert!(m.allows(Dir::Up));
        assert!(!m.allows(Dir::Right));
        assert_eq!(m & Exits::LEFT, Exits::LEFT);
        assert!(Exits::ALL.contains(Exits::VERTICAL));
        assert!(Exits::NONE.is_empty());
    }

    #[test]
    fn dir_offsets_cancel_with_opposite() {
        for d in Dir::ALL {
            assert_eq!(d.offset() + d.opposite().offset(), Point::ZERO);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn cell_builder() {
        let c = NavCell::blocked()
            .with_navigable(true)
            .with_exits(Exits::RIGHT);
        assert!(c.navigable);
        assert!(c.can_exit_right());
        assert!(!c.can_exit_left());
        assert!(!c.can_exit_up());
        assert!(!c.can_exit_down());
        assert_eq!(NavCell::default(), NavCell::blocked());
    }
}
