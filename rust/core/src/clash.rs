// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Detected conflicts between placed elements
//!
//! Clashes are recomputed on every analysis pass and never persisted
//! by the engine; ids are derived from the rule and the items involved
//! so identical inputs always produce identical clashes.

use serde::{Deserialize, Serialize};

/// Which rule produced a clash.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClashType {
    BackingOverlap,
    DoorClearance,
    Spacing,
    Structural,
}

impl ClashType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClashType::BackingOverlap => "backing_overlap",
            ClashType::DoorClearance => "door_clearance",
            ClashType::Spacing => "spacing",
            ClashType::Structural => "structural",
        }
    }
}

/// Whether a conflict blocks sign-off or is advisory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// One detected conflict.
///
/// Invariant: `items` is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Clash {
    pub id: String,
    pub clash_type: ClashType,
    pub severity: Severity,
    /// Ids of the elements involved
    pub items: Vec<String>,
    /// Human-readable fix suggestion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl Clash {
    pub fn new(clash_type: ClashType, severity: Severity, items: Vec<String>) -> Self {
        debug_assert!(!items.is_empty());
        let id = format!("{}:{}", clash_type.as_str(), items.join("+"));
        Self {
            id,
            clash_type,
            severity,
            items,
            resolution: None,
        }
    }

    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Error
    }
}
