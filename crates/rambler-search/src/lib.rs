//! Search-problem definition for walking over height maps.
//!
//! This crate describes *what* a best-first (A\*-style) engine searches over,
//! not *how* it searches: a [`TerrainState`] knows its successors, its
//! per-move cost, its goal test and its remaining-cost estimate. The engine
//! owns the frontier, the closed list and path reconstruction.
//!
//! - **Successors**: the up-to-four orthogonal neighbors in north, south,
//!   west, east order ([`cardinal_neighbors`]).
//! - **Move cost**: `1` on flat or downhill moves, `1 + climb` uphill
//!   ([`move_cost`]).
//! - **Estimates**: one of the [`Estimator`] strategies, evaluated by the
//!   free function [`estimate`].
//!
//! # Capability trait
//!
//! | Trait | Provides |
//! |---|---|
//! | [`SearchContext`] | goal, map and estimator to every state operation |
//!
//! [`RamblersSearch`] is the ready-made context.

mod context;
mod distance;
mod estimate;
mod neighbors;
mod state;

pub use context::{RamblersSearch, SearchContext};
pub use distance::{euclidean, manhattan};
pub use estimate::{Estimator, estimate};
pub use neighbors::cardinal_neighbors;
pub use rambler_core::{Coord, Range, TerrainError, TerrainMap};
pub use state::{TerrainState, move_cost};
