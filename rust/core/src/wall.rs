// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall segments and their openings

use backing_geometry::{Point2D, Rect};
use serde::{Deserialize, Serialize};

/// Wall classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WallType {
    Exterior,
    Interior,
    Partition,
    Structural,
}

/// Opening classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OpeningType {
    Door,
    Window,
}

/// Which side of the wall a door leaf swings toward, relative to the
/// wall axis (start -> end).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SwingDirection {
    Left,
    Right,
}

/// A door or window opening hosted by a wall segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Opening {
    /// Plan location of the opening center
    pub position: Point2D,
    /// Clear width along the wall axis, inches
    pub width: f64,
    /// Clear height, inches
    pub height: f64,
    pub opening_type: OpeningType,
    /// Bottom of the opening, AFF inches (0 for doors)
    #[serde(default)]
    pub sill_height: f64,
    /// Unknown swing claims clearance on both sides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swing: Option<SwingDirection>,
}

/// A straight wall segment on the drawing plane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WallSegment {
    pub id: String,
    pub start: Point2D,
    pub end: Point2D,
    /// Wall thickness, inches
    pub thickness: f64,
    pub wall_type: WallType,
    #[serde(default)]
    pub openings: Vec<Opening>,
}

impl WallSegment {
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// True when the segment runs closer to the x axis than the y axis.
    pub fn is_horizontal(&self) -> bool {
        (self.end.x - self.start.x).abs() >= (self.end.y - self.start.y).abs()
    }

    /// Plan footprint of the wall band. Walls are treated as
    /// axis-aligned: the endpoint bounding box widened to `thickness`
    /// across the minor axis.
    pub fn band_rect(&self) -> Rect {
        let min_x = self.start.x.min(self.end.x);
        let min_y = self.start.y.min(self.end.y);
        let dx = (self.end.x - self.start.x).abs();
        let dy = (self.end.y - self.start.y).abs();

        if self.is_horizontal() {
            Rect::new(min_x, min_y - self.thickness / 2.0, dx, self.thickness.max(dy))
        } else {
            Rect::new(min_x - self.thickness / 2.0, min_y, self.thickness.max(dx), dy)
        }
    }

    /// Plan footprint of an opening in this wall: `width` along the
    /// wall axis, wall thickness across it.
    pub fn opening_rect(&self, opening: &Opening) -> Rect {
        if self.is_horizontal() {
            Rect::from_center(opening.position, opening.width, self.thickness)
        } else {
            Rect::from_center(opening.position, self.thickness, opening.width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_wall() -> WallSegment {
        WallSegment {
            id: "w1".into(),
            start: Point2D::new(0.0, 0.0),
            end: Point2D::new(200.0, 0.0),
            thickness: 4.5,
            wall_type: WallType::Interior,
            openings: vec![],
        }
    }

    #[test]
    fn test_band_rect_spans_thickness() {
        let wall = horizontal_wall();
        let band = wall.band_rect();
        assert_eq!(band.width, 200.0);
        assert_eq!(band.height, 4.5);
        assert_eq!(band.center().y, 0.0);
    }

    #[test]
    fn test_opening_rect_oriented_along_wall() {
        let wall = horizontal_wall();
        let opening = Opening {
            position: Point2D::new(100.0, 0.0),
            width: 32.0,
            height: 80.0,
            opening_type: OpeningType::Door,
            sill_height: 0.0,
            swing: None,
        };
        let rect = wall.opening_rect(&opening);
        assert_eq!(rect.width, 32.0);
        assert_eq!(rect.height, 4.5);
        assert_eq!(rect.center().x, 100.0);

        let vertical = WallSegment {
            start: Point2D::new(0.0, 0.0),
            end: Point2D::new(0.0, 200.0),
            ..wall
        };
        let rect = vertical.opening_rect(&opening);
        assert_eq!(rect.width, 4.5);
        assert_eq!(rect.height, 32.0);
    }
}
