use std::fmt;

use crate::geom::Coord;

/// Errors that can occur when building or querying a [`TerrainMap`].
///
/// [`TerrainMap`]: crate::TerrainMap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    /// The map has no rows or no columns.
    Empty,
    /// A row does not have the same number of entries as the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The map has more columns or rows than fit in an `i32` coordinate.
    TooLarge { width: usize, depth: usize },
    /// A coordinate lies outside the map.
    OutOfBounds(Coord),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "terrain map has no cells"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "terrain map row {row} has {found} entries, expected {expected}"
            ),
            Self::TooLarge { width, depth } => write!(
                f,
                "terrain map of {width}x{depth} cells exceeds the coordinate range"
            ),
            Self::OutOfBounds(p) => write!(f, "coordinate {p} is outside the terrain map"),
        }
    }
}

impl std::error::Error for TerrainError {}
