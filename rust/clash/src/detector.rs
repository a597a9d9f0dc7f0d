// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clash detection entry point

use crate::config::ClashConfig;
use crate::rules::{clearance, overlap, spacing, structural, RuleContext};
use backing_core::{BackingPlacement, Clash, ClashType, Severity, WallSegment};

/// Runs all clash rules with default configuration.
pub fn detect_clashes(backings: &[BackingPlacement], walls: &[WallSegment]) -> Vec<Clash> {
    detect_clashes_with_config(backings, walls, &ClashConfig::default())
}

/// Runs all clash rules and unions their results.
///
/// Detection is total: malformed placements (NaN or non-positive
/// dimensions, negative mounting height) are excluded from the rule
/// passes and surfaced as error clashes referencing the offending id,
/// so one bad record never aborts feedback for the whole drawing.
/// Rules run in a fixed order and each is internally deterministic,
/// so identical inputs yield identical clash lists.
pub fn detect_clashes_with_config(
    backings: &[BackingPlacement],
    walls: &[WallSegment],
    config: &ClashConfig,
) -> Vec<Clash> {
    let mut pass = ClashPass::new(backings, walls, config);
    while pass.run_step() {}
    pass.finish()
}

/// A clash pass broken into discrete rule steps.
///
/// The orchestration layer drives the steps one at a time so it can
/// report progress and honor cancellation between rules; calling
/// [`detect_clashes_with_config`] runs them all at once. Geometry
/// screening happens at construction, so faulted items are already
/// reported before the first step runs.
pub struct ClashPass<'a> {
    ctx: RuleContext<'a>,
    clashes: Vec<Clash>,
    next_step: usize,
}

impl<'a> ClashPass<'a> {
    pub const STEPS: usize = 4;

    pub fn new(
        backings: &'a [BackingPlacement],
        walls: &'a [WallSegment],
        config: &'a ClashConfig,
    ) -> Self {
        let mut clashes = Vec::new();
        let mut valid: Vec<&BackingPlacement> = Vec::with_capacity(backings.len());

        // Screen geometry, reporting faulted items instead of failing
        for backing in backings {
            match backing.geometry_fault() {
                Some(fault) => clashes.push(
                    Clash::new(
                        ClashType::Structural,
                        Severity::Error,
                        vec![backing.id.clone()],
                    )
                    .with_resolution(format!("invalid geometry: {}", fault)),
                ),
                None => valid.push(backing),
            }
        }

        Self {
            ctx: RuleContext {
                backings: valid,
                walls,
                config,
            },
            clashes,
            next_step: 0,
        }
    }

    /// Runs the next rule. Returns `false` once all rules have run.
    pub fn run_step(&mut self) -> bool {
        let found = match self.next_step {
            0 => overlap::check(&self.ctx),
            1 => clearance::check(&self.ctx),
            2 => spacing::check(&self.ctx),
            3 => structural::check(&self.ctx),
            _ => return false,
        };
        self.clashes.extend(found);
        self.next_step += 1;
        self.next_step < Self::STEPS
    }

    pub fn completed_steps(&self) -> usize {
        self.next_step.min(Self::STEPS)
    }

    pub fn finish(self) -> Vec<Clash> {
        self.clashes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backing_core::{BackingType, Dimensions, Location, PlacementStatus};

    fn placement(id: &str, x: f64) -> BackingPlacement {
        BackingPlacement {
            id: id.into(),
            backing_type: BackingType::TwoBySix,
            dimensions: Dimensions {
                width: 16.0,
                height: 16.0,
                thickness: 1.5,
            },
            location: Location { x, y: 0.0, z: 48.0 },
            component_id: "c1".into(),
            status: PlacementStatus::AiGenerated,
            optimized: false,
            zone_id: None,
        }
    }

    #[test]
    fn test_malformed_item_reported_not_fatal() {
        let good_a = placement("b1", 0.0);
        let good_b = placement("b2", 0.0);
        let mut bad = placement("b3", 500.0);
        bad.dimensions.width = f64::NAN;

        let clashes = detect_clashes(&[good_a, good_b, bad], &[]);

        // The bad record becomes a structural error; the good pair is
        // still analyzed
        let fault = clashes
            .iter()
            .find(|c| c.items == vec!["b3".to_string()])
            .expect("fault clash for b3");
        assert_eq!(fault.clash_type, ClashType::Structural);
        assert_eq!(fault.severity, Severity::Error);

        assert!(clashes
            .iter()
            .any(|c| c.clash_type == ClashType::BackingOverlap));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let backings = vec![placement("b1", 0.0), placement("b2", 0.0)];
        let snapshot = backings.clone();
        let _ = detect_clashes(&backings, &[]);
        assert_eq!(backings, snapshot);
    }
}
