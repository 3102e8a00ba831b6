//! Grid positions and rectangles.
//!
//! `x` is the column and `y` the row of a height map; `y` grows towards the
//! south, so "north" of a cell is the row above it.

use std::fmt;

/// An immutable grid position. `x` is the column, `y` the row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate `(dx, dy)` away, or `None` if it is not representable.
    #[inline]
    pub fn checked_shift(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cells `min.x <= x < max.x`, `min.y <= y < max.y`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub min: Coord,
    pub max: Coord,
}

impl Range {
    /// Rectangle from its inclusive top-left and exclusive bottom-right
    /// corners.
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Coord::new(x0, y0),
            max: Coord::new(x1, y1),
        }
    }

    #[inline]
    pub fn contains(self, p: Coord) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Every cell, row by row.
    pub fn iter(self) -> impl Iterator<Item = Coord> {
        (self.min.y..self.max.y)
            .flat_map(move |y| (self.min.x..self.max.x).map(move |x| Coord::new(x, y)))
    }
}
