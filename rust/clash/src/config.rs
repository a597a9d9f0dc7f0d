// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clash rule configuration

use serde::{Deserialize, Serialize};

/// Tunable constants for the clash rules.
///
/// Defaults encode the code requirements the rules enforce; projects
/// with stricter specs override individual fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClashConfig {
    /// Required clear distance on a door's swing side, inches
    /// (36 matches accessibility clearance)
    pub door_clearance: f64,
    /// Minimum spacing margin between same-material backings, inches
    pub min_spacing: f64,
    /// Bottom of the door-swing height band, AFF inches
    pub swing_height_min: f64,
    /// Top of the door-swing height band, AFF inches (standard
    /// 6'-8" door leaf)
    pub swing_height_max: f64,
}

impl Default for ClashConfig {
    fn default() -> Self {
        Self {
            door_clearance: 36.0,
            min_spacing: 6.0,
            swing_height_min: 0.0,
            swing_height_max: 80.0,
        }
    }
}
