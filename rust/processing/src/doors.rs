// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door and opening detection from wall data
//!
//! Two sources feed the result: openings explicitly recorded on wall
//! segments, and openings inferred from gaps between collinear wall
//! segments (a doorway digitized as two wall pieces). Both are
//! filtered to the configured width band.

use backing_core::{Opening, OpeningType, WallSegment};
use backing_geometry::Point2D;
use serde::{Deserialize, Serialize};

/// Door detection parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorDetectionSettings {
    /// Narrowest opening treated as a door, inches
    pub min_width: f64,
    /// Widest opening treated as a door, inches
    pub max_width: f64,
    /// Keep recorded swing directions. When off, swings are stripped
    /// and clearance checks claim both sides of the wall.
    pub detect_swing_direction: bool,
    /// Also report window openings
    pub include_windows: bool,
}

impl Default for DoorDetectionSettings {
    fn default() -> Self {
        Self {
            min_width: 24.0,
            max_width: 48.0,
            detect_swing_direction: true,
            include_windows: false,
        }
    }
}

/// A detected opening, tied to its host wall.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoorOpening {
    pub wall_id: String,
    pub opening: Opening,
    /// True when reconstructed from a gap between wall segments
    /// rather than recorded on the wall
    pub inferred: bool,
}

/// Standard door leaf height assumed for inferred openings, inches.
const INFERRED_DOOR_HEIGHT: f64 = 80.0;

/// Collinearity tolerance for the gap scan, inches.
const COLLINEAR_TOLERANCE: f64 = 3.0;

/// Detects door (and optionally window) openings across the wall set.
///
/// Output order is deterministic: explicit openings in wall order,
/// then inferred openings in wall-pair order. The orchestration layer
/// runs the two halves as separate micro-steps.
pub fn detect_doors(walls: &[WallSegment], settings: &DoorDetectionSettings) -> Vec<DoorOpening> {
    let mut doors = explicit_openings(walls, settings);
    doors.extend(inferred_openings(walls, settings));
    doors
}

/// Openings explicitly recorded on the walls, filtered to the width
/// band.
pub fn explicit_openings(
    walls: &[WallSegment],
    settings: &DoorDetectionSettings,
) -> Vec<DoorOpening> {
    let mut doors = Vec::new();

    for wall in walls {
        for opening in &wall.openings {
            if opening.width < settings.min_width || opening.width > settings.max_width {
                continue;
            }
            match opening.opening_type {
                OpeningType::Door => {}
                OpeningType::Window if settings.include_windows => {}
                OpeningType::Window => continue,
            }

            let mut opening = opening.clone();
            if !settings.detect_swing_direction {
                opening.swing = None;
            }
            doors.push(DoorOpening {
                wall_id: wall.id.clone(),
                opening,
                inferred: false,
            });
        }
    }

    doors
}

/// Openings inferred from gaps between collinear wall segments.
pub fn inferred_openings(
    walls: &[WallSegment],
    settings: &DoorDetectionSettings,
) -> Vec<DoorOpening> {
    let mut doors = Vec::new();

    for i in 0..walls.len() {
        for j in i + 1..walls.len() {
            if let Some(opening) = opening_from_gap(&walls[i], &walls[j], settings) {
                doors.push(DoorOpening {
                    wall_id: walls[i].id.clone(),
                    opening,
                    inferred: true,
                });
            }
        }
    }

    doors
}

/// A doorway digitized as two wall pieces leaves a gap between
/// collinear segments; a gap within the door width band is treated as
/// an unrecorded door.
fn opening_from_gap(
    a: &WallSegment,
    b: &WallSegment,
    settings: &DoorDetectionSettings,
) -> Option<Opening> {
    if a.is_horizontal() != b.is_horizontal() {
        return None;
    }

    // Project onto the shared axis; the cross-axis positions must
    // agree for the segments to be collinear
    let (a_lo, a_hi, a_cross) = axis_interval(a);
    let (b_lo, b_hi, b_cross) = axis_interval(b);
    if (a_cross - b_cross).abs() > COLLINEAR_TOLERANCE {
        return None;
    }

    let (gap, gap_lo, gap_hi) = if b_lo >= a_hi {
        (b_lo - a_hi, a_hi, b_lo)
    } else if a_lo >= b_hi {
        (a_lo - b_hi, b_hi, a_lo)
    } else {
        return None; // Segments overlap along the axis
    };

    if gap < settings.min_width || gap > settings.max_width {
        return None;
    }

    let mid_axis = (gap_lo + gap_hi) / 2.0;
    let mid_cross = (a_cross + b_cross) / 2.0;
    let position = if a.is_horizontal() {
        Point2D::new(mid_axis, mid_cross)
    } else {
        Point2D::new(mid_cross, mid_axis)
    };

    Some(Opening {
        position,
        width: gap,
        height: INFERRED_DOOR_HEIGHT,
        opening_type: OpeningType::Door,
        sill_height: 0.0,
        // Nothing in the wall data says which way an inferred door
        // swings
        swing: None,
    })
}

/// (low, high, cross-axis position) of a segment along its major axis.
fn axis_interval(wall: &WallSegment) -> (f64, f64, f64) {
    if wall.is_horizontal() {
        (
            wall.start.x.min(wall.end.x),
            wall.start.x.max(wall.end.x),
            (wall.start.y + wall.end.y) / 2.0,
        )
    } else {
        (
            wall.start.y.min(wall.end.y),
            wall.start.y.max(wall.end.y),
            (wall.start.x + wall.end.x) / 2.0,
        )
    }
}
