use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use rambler_core::{Coord, TerrainMap};

use crate::distance::{euclidean, manhattan};

/// Remaining-cost estimation strategy.
///
/// Selected by name (see [`Estimator::from_name`]); unknown names select
/// [`Estimator::Manhattan`] rather than failing.
///
/// Estimates are not clamped. `HeightDiff` ignores distance entirely and is
/// negative whenever the goal lies below the current cell, so it gives the
/// engine little guidance on descending routes; callers that rely on a
/// non-negative estimate should not select it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Estimator {
    /// Straight-line distance, rounded.
    Euclidean,
    /// `elevation(goal) - elevation(position)`, not clamped.
    HeightDiff,
    /// Manhattan distance plus an ELU-shaped height difference.
    SuperAdvanced,
    /// `|dx| + |dy|`.
    #[default]
    #[cfg_attr(feature = "serde", serde(other))]
    Manhattan,
}

impl Estimator {
    /// Every strategy, in declaration order.
    pub const ALL: [Estimator; 4] = [
        Estimator::Euclidean,
        Estimator::HeightDiff,
        Estimator::SuperAdvanced,
        Estimator::Manhattan,
    ];

    /// Select a strategy by its key: `"euclidean"`, `"heightDiff"`,
    /// `"superAdvanced"` or `"manhattan"`. Matching is exact; anything else
    /// falls back to `Manhattan`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "euclidean" => Self::Euclidean,
            "heightDiff" => Self::HeightDiff,
            "superAdvanced" => Self::SuperAdvanced,
            "manhattan" => Self::Manhattan,
            other => {
                log::debug!("unknown estimation method {other:?}, using manhattan");
                Self::Manhattan
            }
        }
    }

    /// The key this strategy is selected by.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::HeightDiff => "heightDiff",
            Self::SuperAdvanced => "superAdvanced",
            Self::Manhattan => "manhattan",
        }
    }

    /// Evaluate this strategy. See [`estimate`].
    #[inline]
    pub fn estimate(self, from: Coord, goal: Coord, map: &TerrainMap) -> i32 {
        estimate(self, from, goal, map)
    }
}

impl From<&str> for Estimator {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl FromStr for Estimator {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Estimated cost of walking from `from` to `goal` on `map`.
///
/// Pure: the same inputs always give the same value. Strategies that read
/// elevations fall back to Manhattan distance if either coordinate is off
/// the map.
pub fn estimate(estimator: Estimator, from: Coord, goal: Coord, map: &TerrainMap) -> i32 {
    match estimator {
        Estimator::Euclidean => euclidean(from, goal),
        Estimator::HeightDiff => match height_diff(map, from, goal) {
            Some(diff) => diff,
            None => manhattan(from, goal),
        },
        Estimator::SuperAdvanced => {
            let distance = manhattan(from, goal);
            match height_diff(map, from, goal) {
                Some(diff) => distance.saturating_add(elu(diff)),
                None => distance,
            }
        }
        Estimator::Manhattan => manhattan(from, goal),
    }
}

/// `elevation(goal) - elevation(from)`, saturating at the `i32` limits.
fn height_diff(map: &TerrainMap, from: Coord, goal: Coord) -> Option<i32> {
    match (map.elevation(goal), map.elevation(from)) {
        (Some(g), Some(f)) => Some(g.saturating_sub(f)),
        _ => {
            log::warn!("height lookup off the map ({from} -> {goal}), using manhattan");
            None
        }
    }
}

/// Identity for climbs; `exp(d) - 1` rounded for descents, which is never
/// below -1.
fn elu(diff: i32) -> i32 {
    if diff >= 0 {
        diff
    } else {
        (f64::from(diff).exp() - 1.0).round() as i32
    }
}
