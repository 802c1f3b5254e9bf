//! Recoverable-fault reporting.
//!
//! The engine never fails a frame: every fault is recovered locally
//! (skip the stage, clamp the value, freeze the transform) and surfaced
//! through a [`FaultSink`] with enough context to reproduce. Reporting is
//! latched at call sites — a condition is reported when it appears, not
//! once per frame while it persists.

use std::fmt;

use crate::stack::CameraId;
use crate::stage::StageKind;

/// A recoverable fault observed during a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fault {
    /// A modifier stage produced a non-finite transform and was skipped.
    NonFiniteStage {
        /// Camera owning the pipeline.
        camera: CameraId,
        /// Zero-based position of the stage in its pipeline.
        stage: usize,
        /// Capability tag of the offending stage.
        kind: StageKind,
    },
    /// A rig's anchor transform is non-finite; the last valid anchor is
    /// used instead.
    NonFiniteAnchor {
        /// Camera whose anchor is invalid.
        camera: CameraId,
    },
    /// A blend profile carried a negative or non-finite duration,
    /// clamped to zero (instant cut).
    InvalidBlendDuration {
        /// Camera being blended into.
        camera: CameraId,
        /// The configured duration as supplied.
        duration: f32,
    },
    /// The host supplied a negative or non-finite delta time, clamped
    /// to zero.
    NegativeDeltaTime {
        /// The delta time as supplied.
        delta_time: f32,
    },
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteStage {
                camera,
                stage,
                kind,
            } => write!(
                f,
                "{camera}: stage {stage} ({kind:?}) produced a non-finite \
                 transform; skipped"
            ),
            Self::NonFiniteAnchor { camera } => {
                write!(f, "{camera}: non-finite anchor; using last valid")
            }
            Self::InvalidBlendDuration { camera, duration } => write!(
                f,
                "{camera}: invalid blend duration {duration}; clamped to 0"
            ),
            Self::NegativeDeltaTime { delta_time } => {
                write!(f, "invalid delta time {delta_time}; clamped to 0")
            }
        }
    }
}

/// Receiver for recoverable-fault events.
pub trait FaultSink {
    /// Record one fault occurrence.
    fn report(&mut self, fault: &Fault);
}

/// Default sink: logs each fault at `warn` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFaultSink;

impl FaultSink for LogFaultSink {
    fn report(&mut self, fault: &Fault) {
        log::warn!("{fault}");
    }
}

/// Sink that retains every fault in memory. Useful for tests and for
/// hosts that surface faults in their own tooling.
#[derive(Debug, Default)]
pub struct CollectingFaultSink {
    /// Faults in the order reported.
    pub faults: Vec<Fault>,
}

impl FaultSink for CollectingFaultSink {
    fn report(&mut self, fault: &Fault) {
        self.faults.push(*fault);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_retains_order() {
        let mut sink = CollectingFaultSink::default();
        sink.report(&Fault::NegativeDeltaTime { delta_time: -1.0 });
        sink.report(&Fault::NegativeDeltaTime { delta_time: -2.0 });
        assert_eq!(sink.faults.len(), 2);
        assert_eq!(
            sink.faults[1],
            Fault::NegativeDeltaTime { delta_time: -2.0 }
        );
    }

    #[test]
    fn test_fault_display_mentions_context() {
        let fault = Fault::NegativeDeltaTime { delta_time: -0.5 };
        let text = fault.to_string();
        assert!(text.contains("-0.5"));
    }
}
