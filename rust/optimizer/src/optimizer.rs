// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-link clustering of placements into zones

use crate::grid::SpatialGrid;
use crate::settings::OptimizationSettings;
use crate::union_find::UnionFind;
use backing_core::{BackingPlacement, BackingType, BackingZone, Error, Result};
use backing_geometry::Point2D;
use rustc_hash::FxHashMap;

/// Groups backings into zones using the default settings with the
/// given grouping distance.
pub fn optimize_backings(
    backings: &[BackingPlacement],
    grouping_distance: f64,
) -> Result<Vec<BackingZone>> {
    optimize_backings_with_settings(
        backings,
        &OptimizationSettings::with_grouping_distance(grouping_distance),
    )
}

/// Groups backings into zones.
///
/// Two backings share a zone when a chain of pairs connects them, each
/// pair within `grouping_distance` center-to-center and material-
/// compatible. Zone ids are assigned in the order components are
/// discovered while walking the input, so output is deterministic for
/// a given input ordering and settings.
pub fn optimize_backings_with_settings(
    backings: &[BackingPlacement],
    settings: &OptimizationSettings,
) -> Result<Vec<BackingZone>> {
    let distance = settings.grouping_distance;
    if !distance.is_finite() || distance < 0.0 {
        return Err(Error::InvalidGroupingDistance(distance));
    }
    if backings.is_empty() {
        return Ok(Vec::new());
    }

    let centers: Vec<Point2D> = backings.iter().map(|b| b.center()).collect();

    // Step 1: Connect compatible neighbors
    let mut components = UnionFind::new(backings.len());
    if settings.optimize_for_speed {
        let mut grid = SpatialGrid::new(distance);
        for (i, center) in centers.iter().enumerate() {
            grid.insert(i, center);
        }
        for i in 0..backings.len() {
            for j in grid.find_within(&centers, &centers[i], distance) {
                if j > i && compatible(&backings[i], &backings[j], settings) {
                    components.union(i, j);
                }
            }
        }
    } else {
        for i in 0..backings.len() {
            for j in i + 1..backings.len() {
                if centers[i].distance_to(&centers[j]) <= distance
                    && compatible(&backings[i], &backings[j], settings)
                {
                    components.union(i, j);
                }
            }
        }
    }

    // Step 2: Collect members per component, zones numbered in
    // discovery order over the input
    let mut zone_of_root: FxHashMap<usize, usize> = FxHashMap::default();
    let mut zone_members: Vec<Vec<usize>> = Vec::new();
    for i in 0..backings.len() {
        let root = components.find(i);
        let zone_index = *zone_of_root.entry(root).or_insert_with(|| {
            zone_members.push(Vec::new());
            zone_members.len() - 1
        });
        zone_members[zone_index].push(i);
    }

    // Step 3: Assemble zones
    let zones = zone_members
        .into_iter()
        .enumerate()
        .map(|(n, members)| assemble_zone(n, members, backings, settings))
        .collect();

    Ok(zones)
}

/// Materials may combine only when the settings allow it; placements
/// needing structural support stay in their own zones when
/// `maintain_structural` is set.
fn compatible(
    a: &BackingPlacement,
    b: &BackingPlacement,
    settings: &OptimizationSettings,
) -> bool {
    if !settings.allow_combining && a.backing_type != b.backing_type {
        return false;
    }
    if settings.maintain_structural {
        let a_structural = a.backing_type.material_spec().requires_structural;
        let b_structural = b.backing_type.material_spec().requires_structural;
        if a_structural != b_structural {
            return false;
        }
    }
    true
}

fn assemble_zone(
    zone_index: usize,
    member_indices: Vec<usize>,
    backings: &[BackingPlacement],
    settings: &OptimizationSettings,
) -> BackingZone {
    let id = format!("zone-{}", zone_index + 1);

    let mut members: Vec<BackingPlacement> = member_indices
        .iter()
        .map(|&i| {
            let mut copy = backings[i].clone();
            copy.zone_id = Some(id.clone());
            copy.optimized = true;
            copy
        })
        .collect();

    if settings.minimize_waste {
        // Largest-first cutting order; stable so equal areas keep
        // input order
        members.sort_by(|a, b| {
            b.footprint()
                .area()
                .partial_cmp(&a.footprint().area())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    let mut bounds = members[0].footprint();
    let mut total_area = 0.0;
    for member in &members {
        let footprint = member.footprint();
        bounds = bounds.union(&footprint);
        total_area += footprint.area();
    }

    BackingZone {
        id,
        center: bounds.center(),
        bounds,
        total_area,
        material_type: zone_material(&members),
        backings: members,
    }
}

/// The shared material, or the most common one when combining is
/// allowed (first-seen wins ties).
fn zone_material(members: &[BackingPlacement]) -> BackingType {
    let mut counts: Vec<(BackingType, usize)> = Vec::new();
    for member in members {
        match counts.iter_mut().find(|(t, _)| *t == member.backing_type) {
            Some((_, n)) => *n += 1,
            None => counts.push((member.backing_type, 1)),
        }
    }
    counts
        .iter()
        .max_by_key(|(_, n)| *n)
        .map(|(t, _)| *t)
        .expect("zone has at least one member")
}

#[cfg(test)]
mod tests {
    use super::*;
    use backing_core::{Dimensions, Location, PlacementStatus};

    fn placement(id: &str, backing_type: BackingType, x: f64, y: f64) -> BackingPlacement {
        BackingPlacement {
            id: id.into(),
            backing_type,
            dimensions: Dimensions {
                width: 16.0,
                height: 16.0,
                thickness: 1.5,
            },
            location: Location { x, y, z: 48.0 },
            component_id: "c1".into(),
            status: PlacementStatus::AiGenerated,
            optimized: false,
            zone_id: None,
        }
    }

    #[test]
    fn test_negative_distance_rejected() {
        let backings = vec![placement("b1", BackingType::TwoByFour, 0.0, 0.0)];
        assert!(matches!(
            optimize_backings(&backings, -1.0),
            Err(Error::InvalidGroupingDistance(_))
        ));
        assert!(matches!(
            optimize_backings(&backings, f64::NAN),
            Err(Error::InvalidGroupingDistance(_))
        ));
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert!(optimize_backings(&[], 24.0).unwrap().is_empty());
    }

    #[test]
    fn test_materials_do_not_combine_by_default() {
        let backings = vec![
            placement("b1", BackingType::TwoByFour, 0.0, 0.0),
            placement("b2", BackingType::TwoBySix, 10.0, 0.0),
        ];
        let zones = optimize_backings(&backings, 24.0).unwrap();
        assert_eq!(zones.len(), 2);

        let mut settings = OptimizationSettings::with_grouping_distance(24.0);
        settings.allow_combining = true;
        let zones = optimize_backings_with_settings(&backings, &settings).unwrap();
        assert_eq!(zones.len(), 1);
        // Majority/first-seen material labels the combined zone
        assert_eq!(zones[0].material_type, BackingType::TwoByFour);
    }

    #[test]
    fn test_structural_materials_stay_separate_when_combining() {
        let backings = vec![
            placement("b1", BackingType::TwoByFour, 0.0, 0.0),
            placement("b2", BackingType::SteelPlate, 10.0, 0.0),
        ];
        let mut settings = OptimizationSettings::with_grouping_distance(24.0);
        settings.allow_combining = true;
        let zones = optimize_backings_with_settings(&backings, &settings).unwrap();
        assert_eq!(zones.len(), 2);

        settings.maintain_structural = false;
        let zones = optimize_backings_with_settings(&backings, &settings).unwrap();
        assert_eq!(zones.len(), 1);
    }

    #[test]
    fn test_fast_path_matches_pair_scan() {
        let backings: Vec<_> = (0..20)
            .map(|i| {
                placement(
                    &format!("b{}", i),
                    BackingType::TwoByFour,
                    (i as f64) * 13.0,
                    ((i % 3) as f64) * 9.0,
                )
            })
            .collect();

        let plain = optimize_backings(&backings, 24.0).unwrap();
        let mut settings = OptimizationSettings::with_grouping_distance(24.0);
        settings.optimize_for_speed = true;
        let fast = optimize_backings_with_settings(&backings, &settings).unwrap();

        assert_eq!(plain, fast);
    }

    #[test]
    fn test_zone_metrics() {
        let backings = vec![
            placement("b1", BackingType::TwoByFour, 0.0, 0.0),
            placement("b2", BackingType::TwoByFour, 20.0, 0.0),
        ];
        let zones = optimize_backings(&backings, 24.0).unwrap();
        assert_eq!(zones.len(), 1);

        let zone = &zones[0];
        // Bounds cover 0..36 x 0..16; member area is two 16x16 pieces
        assert_eq!(zone.bounds.width, 36.0);
        assert_eq!(zone.bounds.height, 16.0);
        assert_eq!(zone.total_area, 512.0);
        assert_eq!(zone.waste_area(), 36.0 * 16.0 - 512.0);
        assert_eq!(zone.center.x, 18.0);
        assert!(zone.backings.iter().all(|b| b.optimized));
        assert!(zone
            .backings
            .iter()
            .all(|b| b.zone_id.as_deref() == Some("zone-1")));
    }

    #[test]
    fn test_minimize_waste_orders_largest_first() {
        let mut small = placement("small", BackingType::TwoByFour, 0.0, 0.0);
        small.dimensions.width = 8.0;
        let large = placement("large", BackingType::TwoByFour, 10.0, 0.0);

        let mut settings = OptimizationSettings::with_grouping_distance(24.0);
        settings.minimize_waste = true;
        let zones = optimize_backings_with_settings(&[small, large], &settings).unwrap();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].backings[0].id, "large");
    }
}
