// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door clearance rule
//!
//! Each door opening carries a protected zone on its swing side: the
//! opening footprint expanded by the required clearance. A backing
//! whose footprint enters that zone while mounted inside the
//! door-swing height band is flagged: advisory for the clearance
//! zone, blocking if it sits in the door leaf itself. An opening with
//! no recorded swing direction claims clearance on both sides.

use crate::resolution::clearance_resolution;
use crate::rules::RuleContext;
use backing_core::{
    BackingPlacement, Clash, ClashType, Opening, OpeningType, Severity, SwingDirection,
    WallSegment,
};
use backing_geometry::Rect;

pub fn check(ctx: &RuleContext) -> Vec<Clash> {
    let mut clashes = Vec::new();

    for wall in ctx.walls {
        for opening in &wall.openings {
            if opening.opening_type != OpeningType::Door {
                continue;
            }

            let leaf = wall.opening_rect(opening);
            let zone = clearance_zone(wall, opening, ctx.config.door_clearance);

            for backing in &ctx.backings {
                if !intrudes_at_swing_height(backing, ctx) {
                    continue;
                }

                let footprint = backing.footprint();
                if footprint.overlaps(&leaf) {
                    clashes.push(
                        Clash::new(
                            ClashType::DoorClearance,
                            Severity::Error,
                            vec![backing.id.clone(), wall.id.clone()],
                        )
                        .with_resolution(format!(
                            "backing {} sits inside the door leaf; relocate it outside the opening",
                            backing.id
                        )),
                    );
                } else if footprint.overlaps(&zone) {
                    clashes.push(
                        Clash::new(
                            ClashType::DoorClearance,
                            Severity::Warning,
                            vec![backing.id.clone(), wall.id.clone()],
                        )
                        .with_resolution(clearance_resolution(&zone, &footprint, &backing.id)),
                    );
                }
            }
        }
    }

    clashes
}

/// The protected rect: the opening footprint grown by `clearance`
/// perpendicular to the wall, on the swing side (or both when the
/// swing is unknown).
pub fn clearance_zone(wall: &WallSegment, opening: &Opening, clearance: f64) -> Rect {
    let base = wall.opening_rect(opening);

    // Unit normal pointing to the left of the wall axis (start -> end)
    let dx = wall.end.x - wall.start.x;
    let dy = wall.end.y - wall.start.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return base.expand(clearance);
    }
    let (nx, ny) = (-dy / len, dx / len);

    match opening.swing {
        Some(SwingDirection::Left) => grow_toward(&base, nx, ny, clearance),
        Some(SwingDirection::Right) => grow_toward(&base, -nx, -ny, clearance),
        None => grow_toward(&grow_toward(&base, nx, ny, clearance), -nx, -ny, clearance),
    }
}

/// Grows a rect by `amount` in the direction of `(nx, ny)` only.
fn grow_toward(rect: &Rect, nx: f64, ny: f64, amount: f64) -> Rect {
    let mut out = *rect;
    if nx > 1e-9 {
        out.width += nx * amount;
    } else if nx < -1e-9 {
        out.x += nx * amount;
        out.width -= nx * amount;
    }
    if ny > 1e-9 {
        out.height += ny * amount;
    } else if ny < -1e-9 {
        out.y += ny * amount;
        out.height -= ny * amount;
    }
    out
}

/// Mounted where the door leaf sweeps?
fn intrudes_at_swing_height(backing: &BackingPlacement, ctx: &RuleContext) -> bool {
    let (bottom, top) = backing.vertical_extent();
    bottom < ctx.config.swing_height_max && top > ctx.config.swing_height_min
}
