// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Progress events and cooperative cancellation

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The analysis stages a drawing moves through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    WallDetection,
    DoorDetection,
    ClashDetection,
    Optimization,
}

impl AnalysisStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStage::WallDetection => "wall_detection",
            AnalysisStage::DoorDetection => "door_detection",
            AnalysisStage::ClashDetection => "clash_detection",
            AnalysisStage::Optimization => "optimization",
        }
    }
}

/// One progress notification from a running stage.
///
/// `Progress.percent` is 0-100 and monotonically non-decreasing
/// within a stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalysisEvent {
    StageStarted { stage: AnalysisStage },
    Progress { stage: AnalysisStage, percent: u8 },
    StageCompleted { stage: AnalysisStage },
    StageFailed { stage: AnalysisStage, message: String },
}

/// Where stage events are delivered. The sink is called between
/// micro-steps, never concurrently.
pub type EventSink<'a> = &'a mut dyn FnMut(AnalysisEvent);

/// Cooperative cancellation handle.
///
/// Cloning shares the flag: the caller keeps one clone and hands the
/// other to a stage. Stages poll it at micro-step boundaries only,
/// never preemptively, and return
/// `backing_core::Error::Cancelled` without committing anything.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Errors out of the current stage if cancellation was requested.
    pub fn check(&self) -> backing_core::Result<()> {
        if self.is_cancelled() {
            Err(backing_core::Error::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_shared_between_clones() {
        let token = CancellationToken::new();
        let stage_side = token.clone();
        assert!(stage_side.check().is_ok());

        token.cancel();
        assert!(stage_side.is_cancelled());
        assert!(matches!(
            stage_side.check(),
            Err(backing_core::Error::Cancelled)
        ));
    }

    #[test]
    fn test_event_wire_format() {
        let event = AnalysisEvent::Progress {
            stage: AnalysisStage::ClashDetection,
            percent: 50,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            "{\"event\":\"progress\",\"stage\":\"clash_detection\",\"percent\":50}"
        );
    }
}
