use std::fmt;

use rambler_core::{Coord, TerrainError};

use crate::context::SearchContext;
use crate::estimate::estimate;
use crate::neighbors::cardinal_neighbors;

/// Cost of one step from elevation `from` to elevation `to`.
///
/// Flat and downhill steps cost 1 however far down they go; uphill steps
/// cost 1 plus the climb, saturating at `i32::MAX`.
#[inline]
pub fn move_cost(from: i32, to: i32) -> i32 {
    if to <= from {
        1
    } else {
        to.saturating_sub(from).saturating_add(1)
    }
}

/// One node of the search space: a cell, the cost of the step that reached
/// it and the estimated cost still to go.
///
/// Identity for the engine's open/closed bookkeeping is the position alone
/// (see [`TerrainState::same_state`]); `==` compares every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainState {
    position: Coord,
    elevation: i32,
    local_cost: i32,
    estimate: i32,
}

impl TerrainState {
    /// Assemble a state from its parts.
    pub const fn new(position: Coord, elevation: i32, local_cost: i32, estimate: i32) -> Self {
        Self {
            position,
            elevation,
            local_cost,
            estimate,
        }
    }

    /// The state a search starting at `start` begins from.
    pub fn initial<C: SearchContext + ?Sized>(ctx: &C, start: Coord) -> Result<Self, TerrainError> {
        let map = ctx.map();
        let elevation = map
            .elevation(start)
            .ok_or(TerrainError::OutOfBounds(start))?;
        let est = estimate(ctx.estimator(), start, ctx.goal(), map);
        Ok(Self::new(start, elevation, 0, est))
    }

    #[inline]
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Elevation of the cell, cached at construction.
    #[inline]
    pub fn elevation(&self) -> i32 {
        self.elevation
    }

    /// Cost of the single step from the predecessor into this state (0 for
    /// a start state). The engine adds it to the predecessor's path cost;
    /// the state does not keep a running total.
    #[inline]
    pub fn local_cost(&self) -> i32 {
        self.local_cost
    }

    /// Estimated remaining cost to the goal, fixed at construction.
    #[inline]
    pub fn estimate(&self) -> i32 {
        self.estimate
    }

    /// Whether this state sits exactly on the goal.
    pub fn goal_predicate<C: SearchContext + ?Sized>(&self, ctx: &C) -> bool {
        self.position == ctx.goal()
    }

    /// Whether both states are the same cell, regardless of cost.
    #[inline]
    pub fn same_state(&self, other: &TerrainState) -> bool {
        self.position == other.position
    }

    /// States one orthogonal step away, in north, south, west, east order.
    ///
    /// Off-map directions are skipped before the map is read.
    pub fn successors<C: SearchContext + ?Sized>(&self, ctx: &C) -> Vec<TerrainState> {
        let map = ctx.map();
        let goal = ctx.goal();
        let estimator = ctx.estimator();

        let succs: Vec<TerrainState> = cardinal_neighbors(self.position, map.bounds())
            .filter_map(|p| {
                let elevation = map.elevation(p)?;
                Some(TerrainState::new(
                    p,
                    elevation,
                    move_cost(self.elevation, elevation),
                    estimate(estimator, p, goal, map),
                ))
            })
            .collect();

        log::trace!("expanded {}: {} successors", self, succs.len());
        succs
    }
}

/// Prints `(x, y) height h`: column first, then row.
impl fmt::Display for TerrainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} height {}", self.position, self.elevation)
    }
}
