// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Minimum translation vectors for overlapping rectangles
//!
//! Given two overlapping axis-aligned rects, computes the smallest
//! translation that moves the second rect fully out of the first.
//! Clash resolution uses this to suggest a concrete relocation instead
//! of a canned "move the backing" message.

use crate::primitives::Rect;
use nalgebra::Vector2;

/// Axis along which a separation pushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Computes the minimum translation vector that moves `b` out of `a`.
///
/// Returns `None` when the interiors do not intersect (nothing to
/// resolve). Otherwise the vector pushes `b` along the axis of least
/// penetration, away from `a`'s center.
pub fn separation_vector(a: &Rect, b: &Rect) -> Option<Vector2<f64>> {
    if !a.overlaps(b) {
        return None;
    }

    // Penetration depth on each axis
    let pen_x = (a.right() - b.x).min(b.right() - a.x);
    let pen_y = (a.top() - b.y).min(b.top() - a.y);

    let a_center = a.center();
    let b_center = b.center();

    if pen_x <= pen_y {
        let sign = if b_center.x >= a_center.x { 1.0 } else { -1.0 };
        Some(Vector2::new(sign * pen_x, 0.0))
    } else {
        let sign = if b_center.y >= a_center.y { 1.0 } else { -1.0 };
        Some(Vector2::new(0.0, sign * pen_y))
    }
}

/// The dominant axis of a separation vector.
pub fn separation_axis(v: &Vector2<f64>) -> Axis {
    if v.x.abs() >= v.y.abs() {
        Axis::X
    } else {
        Axis::Y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_disjoint_rects_need_no_separation() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert!(separation_vector(&a, &b).is_none());
    }

    #[test]
    fn test_pushes_along_axis_of_least_penetration() {
        let a = Rect::new(0.0, 0.0, 16.0, 16.0);
        // Shallow horizontal intrusion from the right
        let b = Rect::new(14.0, 2.0, 16.0, 16.0);

        let v = separation_vector(&a, &b).unwrap();
        assert_relative_eq!(v.x, 2.0);
        assert_relative_eq!(v.y, 0.0);
        assert_eq!(separation_axis(&v), Axis::X);

        // Applying the vector eliminates the overlap
        let moved = Rect::new(b.x + v.x, b.y + v.y, b.width, b.height);
        assert!(!a.overlaps(&moved));
    }

    #[test]
    fn test_pushes_left_when_intruder_sits_left() {
        let a = Rect::new(0.0, 0.0, 16.0, 16.0);
        let b = Rect::new(-14.0, 0.0, 16.0, 16.0);

        let v = separation_vector(&a, &b).unwrap();
        assert!(v.x < 0.0);
        let moved = Rect::new(b.x + v.x, b.y + v.y, b.width, b.height);
        assert!(!a.overlaps(&moved));
    }

    #[test]
    fn test_identical_rects_separate() {
        let a = Rect::new(10.0, 10.0, 16.0, 16.0);
        let v = separation_vector(&a, &a).unwrap();
        // Full-width push on one axis
        assert_relative_eq!(v.norm(), 16.0);
        let moved = Rect::new(a.x + v.x, a.y + v.y, a.width, a.height);
        assert!(!a.overlaps(&moved));
    }
}
