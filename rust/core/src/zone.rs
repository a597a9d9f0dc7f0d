// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Installation zones produced by placement optimization

use crate::placement::{BackingPlacement, BackingType};
use backing_geometry::{Point2D, Rect};
use serde::{Deserialize, Serialize};

/// A cluster of backings grouped for combined cutting/installation.
///
/// Zones partition the optimizer's input: every input placement
/// appears in exactly one zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackingZone {
    pub id: String,
    /// Member placements, carrying `zone_id` and `optimized = true`
    pub backings: Vec<BackingPlacement>,
    /// Minimum bounding rect covering all member footprints
    pub bounds: Rect,
    /// Centroid of `bounds`
    pub center: Point2D,
    /// Sum of member footprint areas (not the bounds area), sq in
    pub total_area: f64,
    pub material_type: BackingType,
}

impl BackingZone {
    /// Material that would be wasted cutting the zone from one sheet:
    /// bounds area minus the sum of member areas.
    pub fn waste_area(&self) -> f64 {
        self.bounds.area() - self.total_area
    }

    pub fn member_ids(&self) -> impl Iterator<Item = &str> {
        self.backings.iter().map(|b| b.id.as_str())
    }
}
