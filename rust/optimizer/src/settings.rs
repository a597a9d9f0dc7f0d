// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Optimization settings

use serde::{Deserialize, Serialize};

/// Controls for zone grouping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationSettings {
    /// Maximum center-to-center distance for two backings to share a
    /// zone, inches. Must be finite and >= 0; negative values are
    /// rejected, not clamped.
    pub grouping_distance: f64,
    /// Order zone members largest-first for cutting (reduces offcuts)
    pub minimize_waste: bool,
    /// Use the grid spatial index for neighbor search instead of the
    /// plain pair scan. Same zones either way; faster on large sets.
    pub optimize_for_speed: bool,
    /// Keep placements that need structural support in their own
    /// zones rather than merged with ordinary blocking
    pub maintain_structural: bool,
    /// Allow mixing backing materials within one zone
    pub allow_combining: bool,
}

impl OptimizationSettings {
    pub const DEFAULT_GROUPING_DISTANCE: f64 = 24.0;

    pub fn with_grouping_distance(grouping_distance: f64) -> Self {
        Self {
            grouping_distance,
            ..Self::default()
        }
    }
}

impl Default for OptimizationSettings {
    fn default() -> Self {
        Self {
            grouping_distance: Self::DEFAULT_GROUPING_DISTANCE,
            minimize_waste: false,
            optimize_for_speed: false,
            maintain_structural: true,
            allow_combining: false,
        }
    }
}
