// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spacing rule
//!
//! Same-material backings that nearly touch should either be spaced
//! out or combined into one piece. The rule fires when footprints
//! expanded by the minimum-spacing margin overlap while the raw
//! footprints do not; actual overlaps belong to the overlap rule.

use crate::rules::RuleContext;
use backing_core::{Clash, ClashType, Severity};

pub fn check(ctx: &RuleContext) -> Vec<Clash> {
    let margin = ctx.config.min_spacing;
    let footprints: Vec<_> = ctx.backings.iter().map(|b| b.footprint()).collect();
    let mut clashes = Vec::new();

    for i in 0..ctx.backings.len() {
        for j in i + 1..ctx.backings.len() {
            if ctx.backings[i].backing_type != ctx.backings[j].backing_type {
                continue;
            }
            if footprints[i].overlaps(&footprints[j]) {
                continue;
            }
            if footprints[i].expand(margin).overlaps(&footprints[j].expand(margin)) {
                clashes.push(
                    Clash::new(
                        ClashType::Spacing,
                        Severity::Warning,
                        vec![ctx.backings[i].id.clone(), ctx.backings[j].id.clone()],
                    )
                    .with_resolution(format!(
                        "space backings {} and {} at least {:.1} in apart or combine them",
                        ctx.backings[i].id,
                        ctx.backings[j].id,
                        2.0 * margin
                    )),
                );
            }
        }
    }

    clashes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClashConfig;
    use backing_core::{BackingPlacement, BackingType, Dimensions, Location, PlacementStatus};

    fn placement(id: &str, backing_type: BackingType, x: f64) -> BackingPlacement {
        BackingPlacement {
            id: id.into(),
            backing_type,
            dimensions: Dimensions {
                width: 16.0,
                height: 16.0,
                thickness: 1.5,
            },
            location: Location { x, y: 0.0, z: 48.0 },
            component_id: "c1".into(),
            status: PlacementStatus::Approved,
            optimized: false,
            zone_id: None,
        }
    }

    #[test]
    fn test_close_same_material_pair_warns() {
        // 4 in gap, 6 in margin on each side
        let a = placement("b1", BackingType::TwoByFour, 0.0);
        let b = placement("b2", BackingType::TwoByFour, 20.0);
        let config = ClashConfig::default();
        let ctx = RuleContext {
            backings: vec![&a, &b],
            walls: &[],
            config: &config,
        };

        let clashes = check(&ctx);
        assert_eq!(clashes.len(), 1);
        assert_eq!(clashes[0].clash_type, ClashType::Spacing);
        assert_eq!(clashes[0].severity, Severity::Warning);
    }

    #[test]
    fn test_different_materials_do_not_pair() {
        let a = placement("b1", BackingType::TwoByFour, 0.0);
        let b = placement("b2", BackingType::TwoBySix, 20.0);
        let config = ClashConfig::default();
        let ctx = RuleContext {
            backings: vec![&a, &b],
            walls: &[],
            config: &config,
        };
        assert!(check(&ctx).is_empty());
    }

    #[test]
    fn test_overlapping_pair_left_to_overlap_rule() {
        let a = placement("b1", BackingType::TwoByFour, 0.0);
        let b = placement("b2", BackingType::TwoByFour, 8.0);
        let config = ClashConfig::default();
        let ctx = RuleContext {
            backings: vec![&a, &b],
            walls: &[],
            config: &config,
        };
        assert!(check(&ctx).is_empty());
    }

    #[test]
    fn test_distant_pair_is_fine() {
        let a = placement("b1", BackingType::TwoByFour, 0.0);
        let b = placement("b2", BackingType::TwoByFour, 100.0);
        let config = ClashConfig::default();
        let ctx = RuleContext {
            backings: vec![&a, &b],
            walls: &[],
            config: &config,
        };
        assert!(check(&ctx).is_empty());
    }
}
