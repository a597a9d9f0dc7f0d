// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Detection orchestration
//!
//! Drives the analysis stages over a drawing. Stages are independent
//! entry points sharing one pattern: emit a started event, alternate
//! compute micro-steps with progress events and cancellation checks,
//! then either complete (advancing the stage state) or fail
//! (terminal `Failed` state, no retry). A cancelled stage returns
//! `Error::Cancelled` and leaves the state where it was; nothing is
//! committed.

use crate::doors::{explicit_openings, inferred_openings, DoorDetectionSettings, DoorOpening};
use crate::progress::{AnalysisEvent, AnalysisStage, CancellationToken, EventSink};
use backing_clash::{ClashConfig, ClashPass};
use backing_core::{BackingPlacement, BackingZone, Clash, Error, Result, WallSegment};
use backing_optimizer::{optimize_backings_with_settings, OptimizationSettings};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Wall extraction is a black-box collaborator (typically image
/// based); the pipeline only consumes its output shape.
pub trait WallDetector {
    fn detect_walls(&self) -> Result<Vec<WallSegment>>;
}

/// Per-stage settings bundled for the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub clash: ClashConfig,
    pub doors: DoorDetectionSettings,
    pub optimization: OptimizationSettings,
}

/// Where the drawing's analysis currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineState {
    Idle,
    WallsDetected,
    OpeningsDetected,
    ClashesDetected,
    Optimized,
    /// Terminal until the caller re-invokes a stage
    Failed {
        stage: AnalysisStage,
        message: String,
    },
}

/// Sequences detection stages and surfaces progress/cancellation.
///
/// Holds no drawing data between calls: every stage receives its full
/// input snapshot and returns a fresh result, so repeated invocation
/// with the same inputs is idempotent.
pub struct DetectionOrchestrator {
    config: PipelineConfig,
    state: PipelineState,
}

impl DetectionOrchestrator {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            state: PipelineState::Idle,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(PipelineConfig::default())
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = PipelineState::Idle;
    }

    /// Stage 1: wall detection via the collaborator.
    pub async fn detect_walls(
        &mut self,
        detector: &dyn WallDetector,
        events: EventSink<'_>,
        cancel: &CancellationToken,
    ) -> Result<Vec<WallSegment>> {
        let stage = AnalysisStage::WallDetection;
        cancel.check()?;
        events(AnalysisEvent::StageStarted { stage });
        events(AnalysisEvent::Progress { stage, percent: 0 });
        yield_now().await;
        cancel.check()?;

        let walls = match detector.detect_walls() {
            Ok(walls) => walls,
            Err(e) => return Err(self.fail(stage, e.to_string(), events)),
        };

        tracing::info!(walls = walls.len(), "Wall detection complete");
        events(AnalysisEvent::Progress {
            stage,
            percent: 100,
        });
        events(AnalysisEvent::StageCompleted { stage });
        self.state = PipelineState::WallsDetected;
        Ok(walls)
    }

    /// Stage 2: door/opening detection over previously detected walls.
    pub async fn detect_doors(
        &mut self,
        walls: &[WallSegment],
        events: EventSink<'_>,
        cancel: &CancellationToken,
    ) -> Result<Vec<DoorOpening>> {
        let stage = AnalysisStage::DoorDetection;
        cancel.check()?;
        events(AnalysisEvent::StageStarted { stage });
        events(AnalysisEvent::Progress { stage, percent: 0 });
        yield_now().await;
        cancel.check()?;

        // Micro-step 1: openings recorded on the walls
        let mut doors = explicit_openings(walls, &self.config.doors);
        events(AnalysisEvent::Progress { stage, percent: 50 });
        yield_now().await;
        cancel.check()?;

        // Micro-step 2: openings inferred from wall gaps
        doors.extend(inferred_openings(walls, &self.config.doors));

        tracing::info!(
            doors = doors.len(),
            inferred = doors.iter().filter(|d| d.inferred).count(),
            "Door detection complete"
        );
        events(AnalysisEvent::Progress {
            stage,
            percent: 100,
        });
        events(AnalysisEvent::StageCompleted { stage });
        self.state = PipelineState::OpeningsDetected;
        Ok(doors)
    }

    /// Stage 3: clash detection, one rule per micro-step.
    pub async fn detect_clashes(
        &mut self,
        backings: &[BackingPlacement],
        walls: &[WallSegment],
        events: EventSink<'_>,
        cancel: &CancellationToken,
    ) -> Result<Vec<Clash>> {
        let stage = AnalysisStage::ClashDetection;
        cancel.check()?;
        events(AnalysisEvent::StageStarted { stage });
        events(AnalysisEvent::Progress { stage, percent: 0 });

        let mut pass = ClashPass::new(backings, walls, &self.config.clash);
        loop {
            yield_now().await;
            cancel.check()?;
            let more = pass.run_step();
            let percent = (pass.completed_steps() * 100 / ClashPass::STEPS) as u8;
            events(AnalysisEvent::Progress { stage, percent });
            if !more {
                break;
            }
        }

        let clashes = pass.finish();
        tracing::info!(
            backings = backings.len(),
            clashes = clashes.len(),
            blocking = clashes.iter().filter(|c| c.is_blocking()).count(),
            "Clash detection complete"
        );
        events(AnalysisEvent::StageCompleted { stage });
        self.state = PipelineState::ClashesDetected;
        Ok(clashes)
    }

    /// Stage 4: placement optimization.
    pub async fn optimize(
        &mut self,
        backings: &[BackingPlacement],
        events: EventSink<'_>,
        cancel: &CancellationToken,
    ) -> Result<Vec<BackingZone>> {
        let stage = AnalysisStage::Optimization;
        cancel.check()?;
        events(AnalysisEvent::StageStarted { stage });
        events(AnalysisEvent::Progress { stage, percent: 0 });
        yield_now().await;
        cancel.check()?;

        let zones = match optimize_backings_with_settings(backings, &self.config.optimization) {
            Ok(zones) => zones,
            Err(e) => return Err(self.fail(stage, e.to_string(), events)),
        };

        tracing::info!(
            backings = backings.len(),
            zones = zones.len(),
            "Optimization complete"
        );
        events(AnalysisEvent::Progress {
            stage,
            percent: 100,
        });
        events(AnalysisEvent::StageCompleted { stage });
        self.state = PipelineState::Optimized;
        Ok(zones)
    }

    fn fail(&mut self, stage: AnalysisStage, message: String, events: EventSink<'_>) -> Error {
        tracing::warn!(stage = stage.as_str(), message = %message, "Stage failed");
        events(AnalysisEvent::StageFailed {
            stage,
            message: message.clone(),
        });
        self.state = PipelineState::Failed {
            stage,
            message: message.clone(),
        };
        Error::StageFailed {
            stage: stage.as_str().to_string(),
            message,
        }
    }
}

/// Parks exactly once so the caller's executor can interleave other
/// work between micro-steps.
fn yield_now() -> impl Future<Output = ()> {
    struct YieldNow {
        yielded: bool,
    }

    impl Future for YieldNow {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.yielded {
                Poll::Ready(())
            } else {
                self.yielded = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    YieldNow { yielded: false }
}
