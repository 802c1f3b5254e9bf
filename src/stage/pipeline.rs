//! Ordered stage evaluation with non-finite isolation.

use super::CameraStage;
use crate::context::FrameContext;
use crate::diagnostics::{Fault, FaultSink};
use crate::stack::CameraId;
use crate::transform::CameraTransform;

struct StageSlot {
    stage: Box<dyn CameraStage>,
    /// Latched while the stage's last output was non-finite, so the
    /// fault is reported on entry rather than every frame.
    faulted: bool,
}

/// An ordered chain of modifier stages owned by one camera.
///
/// Evaluation threads the transform through every stage in list order. A
/// stage producing a non-finite transform contributes nothing that frame:
/// the prior valid transform continues down the chain and a fault is
/// reported once per occurrence.
#[derive(Default)]
pub struct ModifierPipeline {
    stages: Vec<StageSlot>,
}

impl ModifierPipeline {
    /// Empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage; evaluation order is append order.
    pub fn push(&mut self, stage: impl CameraStage + 'static) {
        self.stages.push(StageSlot {
            stage: Box::new(stage),
            faulted: false,
        });
    }

    /// Number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Evaluate all stages in order from the anchor transform.
    pub(crate) fn evaluate(
        &mut self,
        anchor: CameraTransform,
        ctx: &FrameContext,
        camera: CameraId,
        sink: &mut dyn FaultSink,
    ) -> CameraTransform {
        let mut current = anchor;
        for (ordinal, slot) in self.stages.iter_mut().enumerate() {
            let candidate = slot.stage.update(current, ctx);
            if candidate.is_finite() {
                current = candidate;
                slot.faulted = false;
            } else if !slot.faulted {
                slot.faulted = true;
                sink.report(&Fault::NonFiniteStage {
                    camera,
                    stage: ordinal,
                    kind: slot.stage.kind(),
                });
            }
        }
        current
    }

    /// Reset every stage's internal state and fault latches.
    pub fn reset(&mut self) {
        for slot in &mut self.stages {
            slot.stage.reset();
            slot.faulted = false;
        }
    }
}

impl std::fmt::Debug for ModifierPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> =
            self.stages.iter().map(|s| s.stage.name()).collect();
        f.debug_struct("ModifierPipeline").field("stages", &names).finish()
    }
}
