// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Backing-Engine Core Model
//!
//! Shared data model for the backing clash detection and placement
//! optimization engine.
//!
//! ## Overview
//!
//! A drawing editor supplies [`BackingPlacement`]s (pieces of wall
//! blocking that support fixtures) and [`WallSegment`]s (with their
//! door/window [`Opening`]s). The analysis crates consume these as
//! plain values and produce [`Clash`]es and [`BackingZone`]s:
//!
//! - **Placements** are read-only for clash detection; optimization
//!   returns copies with `zone_id`/`optimized` filled in. The engine
//!   never mutates caller data or caches results between calls.
//! - **Clashes** are ephemeral: recomputed on every analysis pass and
//!   never persisted here. `error` severity blocks sign-off,
//!   `warning` is advisory.
//! - **Zones** partition the input placement set: every placement
//!   lands in exactly one zone.
//!
//! Material behavior (load class, allowable span, structural-wall
//! requirements) is table-driven via [`MaterialSpec`], a lookup rather
//! than a physics model.
//!
//! All coordinates are floating-point inches in the drawing plane;
//! `z` is height above finished floor (AFF).

pub mod clash;
pub mod error;
pub mod material;
pub mod placement;
pub mod wall;
pub mod zone;

pub use clash::{Clash, ClashType, Severity};
pub use error::{Error, Result};
pub use material::{LoadClass, MaterialSpec};
pub use placement::{BackingPlacement, BackingType, Dimensions, Location, PlacementStatus};
pub use wall::{Opening, OpeningType, SwingDirection, WallSegment, WallType};
pub use zone::BackingZone;
