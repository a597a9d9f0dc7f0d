// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structural support rule
//!
//! Table-driven: each material carries an allowable span and a
//! requires-structural flag (see `backing_core::material`). A backing
//! that needs structural support is satisfied by any structural wall
//! whose band intersects its footprint; otherwise it is a blocking
//! clash. No load physics here.

use crate::rules::RuleContext;
use backing_core::{Clash, ClashType, Severity, WallType};

pub fn check(ctx: &RuleContext) -> Vec<Clash> {
    let structural_bands: Vec<_> = ctx
        .walls
        .iter()
        .filter(|w| w.wall_type == WallType::Structural)
        .map(|w| w.band_rect())
        .collect();

    let mut clashes = Vec::new();

    for backing in &ctx.backings {
        let spec = backing.backing_type.material_spec();
        let needs_structural = spec.requires_structural || backing.span() > spec.max_span;
        if !needs_structural {
            continue;
        }

        let footprint = backing.footprint();
        let supported = structural_bands.iter().any(|band| band.overlaps(&footprint));
        if supported {
            continue;
        }

        let reason = if spec.requires_structural {
            format!(
                "{} backing must land on a structural wall",
                backing.backing_type.as_str()
            )
        } else {
            format!(
                "span {:.1} in exceeds the {:.0} in limit for {} without structural support",
                backing.span(),
                spec.max_span,
                backing.backing_type.as_str()
            )
        };

        clashes.push(
            Clash::new(ClashType::Structural, Severity::Error, vec![backing.id.clone()])
                .with_resolution(reason),
        );
    }

    clashes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClashConfig;
    use backing_core::{
        BackingPlacement, BackingType, Dimensions, Location, PlacementStatus, WallSegment,
    };
    use backing_geometry::Point2D;

    fn placement(id: &str, backing_type: BackingType, width: f64) -> BackingPlacement {
        BackingPlacement {
            id: id.into(),
            backing_type,
            dimensions: Dimensions {
                width,
                height: 16.0,
                thickness: 1.5,
            },
            location: Location {
                x: 10.0,
                y: -1.0,
                z: 48.0,
            },
            component_id: "cabinet-3".into(),
            status: PlacementStatus::AiGenerated,
            optimized: false,
            zone_id: None,
        }
    }

    fn wall(wall_type: WallType) -> WallSegment {
        WallSegment {
            id: "w1".into(),
            start: Point2D::new(0.0, 0.0),
            end: Point2D::new(200.0, 0.0),
            thickness: 6.0,
            wall_type,
            openings: vec![],
        }
    }

    #[test]
    fn test_steel_without_structural_wall_errors() {
        let backing = placement("b1", BackingType::SteelPlate, 12.0);
        let interior = wall(WallType::Interior);
        let config = ClashConfig::default();
        let ctx = RuleContext {
            backings: vec![&backing],
            walls: std::slice::from_ref(&interior),
            config: &config,
        };

        let clashes = check(&ctx);
        assert_eq!(clashes.len(), 1);
        assert_eq!(clashes[0].clash_type, ClashType::Structural);
        assert_eq!(clashes[0].severity, Severity::Error);
        assert_eq!(clashes[0].items, vec!["b1".to_string()]);
    }

    #[test]
    fn test_structural_wall_satisfies_steel() {
        let backing = placement("b1", BackingType::SteelPlate, 12.0);
        let structural = wall(WallType::Structural);
        let config = ClashConfig::default();
        let ctx = RuleContext {
            backings: vec![&backing],
            walls: std::slice::from_ref(&structural),
            config: &config,
        };
        assert!(check(&ctx).is_empty());
    }

    #[test]
    fn test_overspanned_lumber_errors() {
        // 2x4 limit is 24 in
        let backing = placement("b1", BackingType::TwoByFour, 30.0);
        let config = ClashConfig::default();
        let ctx = RuleContext {
            backings: vec![&backing],
            walls: &[],
            config: &config,
        };

        let clashes = check(&ctx);
        assert_eq!(clashes.len(), 1);
        assert!(clashes[0].resolution.as_ref().unwrap().contains("span"));
    }

    #[test]
    fn test_short_span_lumber_is_fine() {
        let backing = placement("b1", BackingType::TwoByFour, 16.0);
        let config = ClashConfig::default();
        let ctx = RuleContext {
            backings: vec![&backing],
            walls: &[],
            config: &config,
        };
        assert!(check(&ctx).is_empty());
    }
}
