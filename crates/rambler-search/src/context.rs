use rambler_core::{Coord, TerrainError, TerrainMap};

use crate::estimate::Estimator;
use crate::state::TerrainState;

/// What every [`TerrainState`] operation needs from the search that owns it.
pub trait SearchContext {
    /// The cell the search is trying to reach.
    fn goal(&self) -> Coord;

    /// The height map being searched. Read-only for the whole search.
    fn map(&self) -> &TerrainMap;

    /// The remaining-cost estimation strategy.
    fn estimator(&self) -> Estimator;
}

/// A walk across a height map towards a fixed goal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RamblersSearch {
    map: TerrainMap,
    goal: Coord,
    estimator: Estimator,
}

impl RamblersSearch {
    /// Set up a search towards `goal`. The goal must lie on the map.
    pub fn new(
        map: TerrainMap,
        goal: Coord,
        estimator: impl Into<Estimator>,
    ) -> Result<Self, TerrainError> {
        if !map.contains(goal) {
            return Err(TerrainError::OutOfBounds(goal));
        }
        Ok(Self {
            map,
            goal,
            estimator: estimator.into(),
        })
    }

    /// The state a search starting at `start` begins from: zero cost and
    /// an estimate under this search's strategy.
    pub fn start_state(&self, start: Coord) -> Result<TerrainState, TerrainError> {
        TerrainState::initial(self, start)
    }

    /// Switch estimation strategy for states built from now on.
    pub fn set_estimator(&mut self, estimator: impl Into<Estimator>) {
        self.estimator = estimator.into();
    }
}

impl SearchContext for RamblersSearch {
    #[inline]
    fn goal(&self) -> Coord {
        self.goal
    }

    #[inline]
    fn map(&self) -> &TerrainMap {
        &self.map
    }

    #[inline]
    fn estimator(&self) -> Estimator {
        self.estimator
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RamblersSearch {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            map: TerrainMap,
            goal: Coord,
            #[serde(default)]
            estimator: Estimator,
        }

        let raw = Raw::deserialize(deserializer)?;
        RamblersSearch::new(raw.map, raw.goal, raw.estimator).map_err(serde::de::Error::custom)
    }
}
