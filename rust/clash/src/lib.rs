// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Backing-Engine Clash Rule Evaluator
//!
//! Detects conflicts between backing placements, wall openings, and
//! other backings. Four independent rules are evaluated and their
//! results unioned:
//!
//! 1. **Backing overlap**: intersecting plan footprints (always an
//!    error)
//! 2. **Door clearance**: backings intruding into the code-mandated
//!    clearance zone on a door's swing side
//! 3. **Spacing**: same-material backings closer than the minimum
//!    spacing margin
//! 4. **Structural**: materials placed beyond their allowable span
//!    without a structural wall underneath
//!
//! Detection is best-effort and total: a malformed placement is
//! skipped and reported as an error clash for that id, never aborting
//! the pass. Identical inputs always produce identical clash lists.

pub mod config;
pub mod detector;
pub mod resolution;
pub mod rules;

pub use config::ClashConfig;
pub use detector::{detect_clashes, detect_clashes_with_config, ClashPass};
