// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Backing-Engine Detection Pipeline
//!
//! Orchestrates the analysis stages over a drawing and aggregates
//! their outputs:
//!
//! 1. Wall detection (a black-box collaborator behind [`WallDetector`])
//! 2. Door/opening detection from wall data
//! 3. Clash detection
//! 4. Placement optimization
//!
//! Stages are invoked independently (door detection needs wall
//! output; clash detection and optimization need only backings) and
//! each streams [`AnalysisEvent`]s (monotonic 0-100 progress per
//! stage) to the caller's sink. Cancellation is cooperative via
//! [`CancellationToken`], checked between micro-steps; a cancelled
//! stage commits nothing. A failing detector puts the orchestrator in
//! a terminal `Failed` state with the message; the caller re-invokes
//! explicitly, there is no automatic retry.
//!
//! The stage functions themselves are thin async wrappers around pure
//! synchronous computation, so callers' interfaces stay non-blocking
//! without the engine picking an executor.

pub mod doors;
pub mod pipeline;
pub mod progress;
pub mod results;

pub use doors::{detect_doors, DoorDetectionSettings, DoorOpening};
pub use pipeline::{DetectionOrchestrator, PipelineConfig, PipelineState, WallDetector};
pub use progress::{AnalysisEvent, AnalysisStage, CancellationToken, EventSink};
pub use results::{DetectionResults, DetectionUpdate};
