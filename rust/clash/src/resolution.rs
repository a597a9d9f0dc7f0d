// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Human-readable resolution suggestions
//!
//! Overlap resolutions are computed geometrically: the minimum
//! translation vector that eliminates the overlap, rendered as a
//! relocation instruction. Distances are rounded to 0.1 in for
//! display only; the underlying math stays full precision.

use backing_geometry::{separation_axis, separation_vector, Axis, Rect, Vector2};

/// Renders a translation vector as a plan-direction instruction.
pub fn describe_shift(v: &Vector2<f64>) -> String {
    let (distance, direction) = match separation_axis(v) {
        Axis::X => (v.x.abs(), if v.x >= 0.0 { "right" } else { "left" }),
        Axis::Y => (v.y.abs(), if v.y >= 0.0 { "up" } else { "down" }),
    };
    format!("{:.1} in {}", distance, direction)
}

/// Suggestion for an overlap: push the later-placed backing out along
/// the axis of least penetration.
pub fn overlap_resolution(first: &Rect, second: &Rect, second_id: &str) -> Option<String> {
    let shift = separation_vector(first, second)?;
    Some(format!(
        "relocate backing {} {}",
        second_id,
        describe_shift(&shift)
    ))
}

/// Suggestion for a clearance intrusion: move the backing out of the
/// protected zone.
pub fn clearance_resolution(zone: &Rect, footprint: &Rect, backing_id: &str) -> String {
    match separation_vector(zone, footprint) {
        Some(shift) => format!(
            "relocate backing {} {} to clear the door swing",
            backing_id,
            describe_shift(&shift)
        ),
        None => format!("relocate backing {} clear of the door swing", backing_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_shift_rounds_for_display() {
        let v = Vector2::new(2.04, 0.0);
        assert_eq!(describe_shift(&v), "2.0 in right");
        let v = Vector2::new(0.0, -3.96);
        assert_eq!(describe_shift(&v), "4.0 in down");
    }

    #[test]
    fn test_overlap_resolution_names_the_moved_backing() {
        let a = Rect::new(0.0, 0.0, 16.0, 16.0);
        let b = Rect::new(14.0, 0.0, 16.0, 16.0);
        let text = overlap_resolution(&a, &b, "b2").unwrap();
        assert_eq!(text, "relocate backing b2 2.0 in right");
    }

    #[test]
    fn test_no_resolution_without_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 0.0, 10.0, 10.0);
        assert!(overlap_resolution(&a, &b, "b2").is_none());
    }
}
