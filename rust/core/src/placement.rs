// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Backing placements: blocking installed in a wall to support a fixture

use backing_geometry::{Point2D, Rect};
use serde::{Deserialize, Serialize};

/// Lumber/material code of a backing piece.
///
/// Wire names match the drawing editor's JSON (`"2x4"`, `"steel_plate"`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BackingType {
    #[serde(rename = "2x4")]
    TwoByFour,
    #[serde(rename = "2x6")]
    TwoBySix,
    #[serde(rename = "2x8")]
    TwoByEight,
    #[serde(rename = "2x10")]
    TwoByTen,
    #[serde(rename = "3/4_plywood")]
    PlywoodThreeQuarter,
    #[serde(rename = "steel_plate")]
    SteelPlate,
}

impl BackingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackingType::TwoByFour => "2x4",
            BackingType::TwoBySix => "2x6",
            BackingType::TwoByEight => "2x8",
            BackingType::TwoByTen => "2x10",
            BackingType::PlywoodThreeQuarter => "3/4_plywood",
            BackingType::SteelPlate => "steel_plate",
        }
    }
}

/// Physical size of a backing piece, inches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
}

/// Placement location. `x`/`y` are plan coordinates of the lower-left
/// footprint corner; `z` is mounting height above finished floor (AFF).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Where a placement came from and whether a human signed off on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlacementStatus {
    AiGenerated,
    UserModified,
    Approved,
}

/// A single piece of required blocking.
///
/// Invariant: width, height, thickness > 0 and z >= 0. Violations are
/// surfaced per-item by the clash detector rather than rejected up
/// front (see [`BackingPlacement::geometry_fault`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackingPlacement {
    /// Unique id, stable across recomputation
    pub id: String,
    pub backing_type: BackingType,
    pub dimensions: Dimensions,
    pub location: Location,
    /// The fixture this backing supports (TV, grab bar, ...)
    pub component_id: String,
    pub status: PlacementStatus,
    /// Set by the optimizer on its output copies
    #[serde(default)]
    pub optimized: bool,
    /// Zone reference once grouped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
}

impl BackingPlacement {
    /// Plan-view footprint rect from `location.x/y` and
    /// `dimensions.width/height`.
    pub fn footprint(&self) -> Rect {
        Rect::new(
            self.location.x,
            self.location.y,
            self.dimensions.width,
            self.dimensions.height,
        )
    }

    pub fn center(&self) -> Point2D {
        self.footprint().center()
    }

    /// Vertical extent on the wall: `z` up to `z + height`, AFF inches.
    pub fn vertical_extent(&self) -> (f64, f64) {
        (self.location.z, self.location.z + self.dimensions.height)
    }

    /// Longest plan dimension; what the material span table limits.
    pub fn span(&self) -> f64 {
        self.dimensions.width.max(self.dimensions.height)
    }

    /// Checks the geometric invariants, returning a description of the
    /// first violation found. Detection passes skip faulted items and
    /// report them as error clashes instead of aborting.
    pub fn geometry_fault(&self) -> Option<String> {
        let d = &self.dimensions;
        if !(d.width.is_finite() && d.height.is_finite() && d.thickness.is_finite()) {
            return Some("non-finite dimensions".into());
        }
        if d.width <= 0.0 || d.height <= 0.0 || d.thickness <= 0.0 {
            return Some(format!(
                "non-positive dimensions {}x{}x{}",
                d.width, d.height, d.thickness
            ));
        }
        let l = &self.location;
        if !(l.x.is_finite() && l.y.is_finite() && l.z.is_finite()) {
            return Some("non-finite location".into());
        }
        if l.z < 0.0 {
            return Some(format!("mounting height {} below finished floor", l.z));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_placement(id: &str, x: f64, y: f64) -> BackingPlacement {
        BackingPlacement {
            id: id.into(),
            backing_type: BackingType::TwoBySix,
            dimensions: Dimensions {
                width: 16.0,
                height: 16.0,
                thickness: 1.5,
            },
            location: Location { x, y, z: 48.0 },
            component_id: "tv-mount-1".into(),
            status: PlacementStatus::AiGenerated,
            optimized: false,
            zone_id: None,
        }
    }

    #[test]
    fn test_footprint_from_location_and_dimensions() {
        let p = sample_placement("b1", 10.0, 20.0);
        let r = p.footprint();
        assert_eq!(r.x, 10.0);
        assert_eq!(r.y, 20.0);
        assert_eq!(r.width, 16.0);
        assert_eq!(r.height, 16.0);
    }

    #[test]
    fn test_geometry_fault_detection() {
        let ok = sample_placement("b1", 0.0, 0.0);
        assert!(ok.geometry_fault().is_none());

        let mut nan = sample_placement("b2", 0.0, 0.0);
        nan.dimensions.width = f64::NAN;
        assert!(nan.geometry_fault().is_some());

        let mut negative = sample_placement("b3", 0.0, 0.0);
        negative.dimensions.height = -4.0;
        assert!(negative.geometry_fault().is_some());

        let mut below_floor = sample_placement("b4", 0.0, 0.0);
        below_floor.location.z = -1.0;
        assert!(below_floor.geometry_fault().is_some());
    }

    #[test]
    fn test_backing_type_wire_names() {
        let json = serde_json::to_string(&BackingType::TwoByFour).unwrap();
        assert_eq!(json, "\"2x4\"");
        let back: BackingType = serde_json::from_str("\"3/4_plywood\"").unwrap();
        assert_eq!(back, BackingType::PlywoodThreeQuarter);
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&PlacementStatus::AiGenerated).unwrap();
        assert_eq!(json, "\"ai_generated\"");
    }
}
