//! **rambler-core** — value types for route planning over height maps.
//!
//! This crate provides the plain data the search layer works on: grid
//! coordinates, half-open rectangles for bounds checks, and the elevation
//! grid itself. Nothing here knows about searching.

pub mod error;
pub mod geom;
pub mod terrain;

pub use error::TerrainError;
pub use geom::{Coord, Range};
pub use terrain::TerrainMap;
