// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Independent clash rules
//!
//! Each rule is a pure function over the shared [`RuleContext`] and
//! returns its own clash list; the detector unions them in a fixed
//! order so output ordering stays deterministic.

pub mod clearance;
pub mod overlap;
pub mod spacing;
pub mod structural;

use crate::config::ClashConfig;
use backing_core::{BackingPlacement, WallSegment};

/// Inputs shared by all rules. `backings` holds only items that passed
/// geometry screening; malformed items were already reported.
pub struct RuleContext<'a> {
    pub backings: Vec<&'a BackingPlacement>,
    pub walls: &'a [WallSegment],
    pub config: &'a ClashConfig,
}
