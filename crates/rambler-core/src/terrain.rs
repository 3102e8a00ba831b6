//! Integer elevation grid.
//!
//! [`TerrainMap`] is a rectangular grid of elevations indexed by
//! [`Coord`] (`x` = column, `y` = row). The backing store is a flat,
//! row-major `Vec<i32>`; a map is plain owned data, so a search can borrow
//! it read-only and several searches can share it across threads.

use crate::error::TerrainError;
use crate::geom::{Coord, Range};

/// A rectangular height map, `width` columns by `depth` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainMap {
    cells: Vec<i32>,
    width: i32,
    depth: i32,
}

impl TerrainMap {
    /// Create a flat map of elevation 0.
    pub fn new(width: i32, depth: i32) -> Result<Self, TerrainError> {
        Self::flat(width, depth, 0)
    }

    /// Create a map where every cell has the same elevation.
    pub fn flat(width: i32, depth: i32, elevation: i32) -> Result<Self, TerrainError> {
        if width <= 0 || depth <= 0 {
            return Err(TerrainError::Empty);
        }
        Ok(Self {
            cells: vec![elevation; (width as usize) * (depth as usize)],
            width,
            depth,
        })
    }

    /// Build a map from rows of elevations (`rows[y][x]`).
    ///
    /// Every row must have as many entries as the first one.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, TerrainError> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        if expected == 0 {
            return Err(TerrainError::Empty);
        }
        let (width, depth) = dimensions(expected, rows.len())?;
        let mut cells = Vec::with_capacity(expected * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != expected {
                return Err(TerrainError::RaggedRow {
                    row,
                    expected,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self {
            cells,
            width,
            depth,
        })
    }

    /// Number of columns (x-extent).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows (y-extent).
    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// The range `[0, width) x [0, depth)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.depth)
    }

    /// Whether `p` lies on the map.
    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Coord) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + p.x as usize)
    }

    /// Elevation at `p`, or `None` if out of bounds.
    #[inline]
    pub fn elevation(&self, p: Coord) -> Option<i32> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the elevation at `p`.
    pub fn set_elevation(&mut self, p: Coord, elevation: i32) -> Result<(), TerrainError> {
        let i = self.index(p).ok_or(TerrainError::OutOfBounds(p))?;
        self.cells[i] = elevation;
        Ok(())
    }

    /// Rows of elevations, top (y = 0) to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, i32> {
        self.cells.chunks(self.width as usize)
    }

    /// Iterate over `(Coord, elevation)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, i32)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}

/// Column and row counts as `i32`, or `TooLarge` if either does not fit.
fn dimensions(width: usize, depth: usize) -> Result<(i32, i32), TerrainError> {
    match (i32::try_from(width), i32::try_from(depth)) {
        (Ok(w), Ok(d)) => Ok((w, d)),
        _ => Err(TerrainError::TooLarge { width, depth }),
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TerrainMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TerrainMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<i32>>::deserialize(deserializer)?;
        TerrainMap::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn map_serializes_as_rows() {
        let m = TerrainMap::from_rows(&[[0, 1], [2, 3]]).unwrap();
        assert_eq!(serde_json::to_string(&m).unwrap(), "[[0,1],[2,3]]");
        let back: TerrainMap = serde_json::from_str("[[0,1],[2,3]]").unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn ragged_json_rejected() {
        let err = serde_json::from_str::<TerrainMap>("[[0,1],[2]]").unwrap_err();
        assert!(err.to_string().contains("row 1 has 1 entries"));
    }
}
