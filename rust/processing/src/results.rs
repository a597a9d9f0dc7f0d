// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Detection result aggregation
//!
//! Each stage produces one tagged [`DetectionUpdate`]; the caller
//! folds updates into a [`DetectionResults`] envelope. Merging is
//! deliberately simple: different tags combine, the same tag replaces
//! the prior value wholesale. There is no delta merge: a stage
//! always reports its complete output.

use backing_core::{BackingZone, Clash, WallSegment};
use serde::{Deserialize, Serialize};

use crate::doors::DoorOpening;

/// One stage's complete output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DetectionUpdate {
    Walls { walls: Vec<WallSegment> },
    Doors { doors: Vec<DoorOpening> },
    Conflicts { conflicts: Vec<Clash> },
    Optimization { optimized_backings: Vec<BackingZone> },
}

/// Everything detection has produced for a drawing so far.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DetectionResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walls: Option<Vec<WallSegment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doors: Option<Vec<DoorOpening>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicts: Option<Vec<Clash>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization: Option<Vec<BackingZone>>,
}

impl DetectionResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one stage output in: last write wins per tag.
    pub fn apply(&mut self, update: DetectionUpdate) {
        match update {
            DetectionUpdate::Walls { walls } => self.walls = Some(walls),
            DetectionUpdate::Doors { doors } => self.doors = Some(doors),
            DetectionUpdate::Conflicts { conflicts } => self.conflicts = Some(conflicts),
            DetectionUpdate::Optimization { optimized_backings } => {
                self.optimization = Some(optimized_backings)
            }
        }
    }

    /// Shallow union with another envelope; `other`'s populated slots
    /// replace this one's.
    pub fn merge(&mut self, other: DetectionResults) {
        if let Some(walls) = other.walls {
            self.walls = Some(walls);
        }
        if let Some(doors) = other.doors {
            self.doors = Some(doors);
        }
        if let Some(conflicts) = other.conflicts {
            self.conflicts = Some(conflicts);
        }
        if let Some(optimization) = other.optimization {
            self.optimization = Some(optimization);
        }
    }

    /// Error-severity clashes block "ready for install"; warnings are
    /// advisory and dismissible.
    pub fn blocks_signoff(&self) -> bool {
        self.conflicts
            .as_deref()
            .map(|clashes| clashes.iter().any(Clash::is_blocking))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_none()
            && self.doors.is_none()
            && self.conflicts.is_none()
            && self.optimization.is_none()
    }
}
