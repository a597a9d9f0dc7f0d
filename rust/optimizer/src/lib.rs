// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Backing-Engine Placement Optimizer
//!
//! Groups nearby backings of compatible material into installation
//! zones so the shop can cut and install them together instead of as
//! scattered singles. Clustering is single-link: two backings connect
//! when their footprint centers are within the grouping distance and
//! their materials are compatible; connected components become zones.
//!
//! The output is a partition (every input placement lands in exactly
//! one zone) and is deterministic for a given input ordering and
//! settings. Inputs are never mutated; zones carry copies with
//! `zone_id` and `optimized` filled in.

pub mod grid;
pub mod optimizer;
pub mod settings;
pub mod union_find;

pub use optimizer::{optimize_backings, optimize_backings_with_settings};
pub use settings::OptimizationSettings;
