// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Material rule table
//!
//! Maps each backing material to its load class, maximum unsupported
//! span, and whether it must land on a structural wall. This is a
//! lookup table, not an engineering calculation; the numbers encode
//! shop practice, not beam formulas.

use crate::placement::BackingType;
use serde::{Deserialize, Serialize};

/// Load category a material is rated for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum LoadClass {
    Light,
    Medium,
    Heavy,
}

/// One row of the material rule table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MaterialSpec {
    pub load_class: LoadClass,
    /// Maximum plan span (inches) allowed without structural support
    pub max_span: f64,
    /// Heavy fixtures must always land on a structural wall
    pub requires_structural: bool,
}

impl BackingType {
    /// Rule-table lookup for this material.
    pub fn material_spec(&self) -> MaterialSpec {
        match self {
            BackingType::TwoByFour => MaterialSpec {
                load_class: LoadClass::Light,
                max_span: 24.0,
                requires_structural: false,
            },
            BackingType::TwoBySix => MaterialSpec {
                load_class: LoadClass::Light,
                max_span: 32.0,
                requires_structural: false,
            },
            BackingType::TwoByEight => MaterialSpec {
                load_class: LoadClass::Medium,
                max_span: 40.0,
                requires_structural: false,
            },
            BackingType::TwoByTen => MaterialSpec {
                load_class: LoadClass::Medium,
                max_span: 48.0,
                requires_structural: false,
            },
            BackingType::PlywoodThreeQuarter => MaterialSpec {
                load_class: LoadClass::Light,
                max_span: 48.0,
                requires_structural: false,
            },
            BackingType::SteelPlate => MaterialSpec {
                load_class: LoadClass::Heavy,
                max_span: 16.0,
                requires_structural: true,
            },
        }
    }
}
