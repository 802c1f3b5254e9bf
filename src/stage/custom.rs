//! Host-defined stage wrapping an arbitrary function.

use super::{CameraStage, StageKind};
use crate::context::FrameContext;
use crate::transform::CameraTransform;

type StageFn =
    Box<dyn FnMut(&CameraTransform, &FrameContext) -> CameraTransform>;

/// A named stage evaluating a host-supplied function.
///
/// This is the open-extension point: anything from a one-off offset to an
/// external transform proposer (e.g. an inference-assisted framing
/// function treated as opaque) plugs in here. Determinism is the
/// closure's responsibility — it must derive its output from its captured
/// state and the context only.
pub struct CustomStage {
    name: &'static str,
    update: StageFn,
}

impl CustomStage {
    /// Stage evaluating `update` each frame.
    pub fn new(
        name: &'static str,
        update: impl FnMut(&CameraTransform, &FrameContext) -> CameraTransform
            + 'static,
    ) -> Self {
        Self {
            name,
            update: Box::new(update),
        }
    }
}

impl CameraStage for CustomStage {
    fn kind(&self) -> StageKind {
        StageKind::Custom
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn update(
        &mut self,
        current: CameraTransform,
        ctx: &FrameContext,
    ) -> CameraTransform {
        (self.update)(&current, ctx)
    }
}

impl std::fmt::Debug for CustomStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomStage").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn test_custom_stage_applies_function() {
        let mut stage = CustomStage::new("raise", |current, _ctx| {
            CameraTransform {
                position: current.position + Vec3::Y,
                ..*current
            }
        });
        let out = stage.update(CameraTransform::IDENTITY, &FrameContext::new(0.016));
        assert_eq!(out.position, Vec3::Y);
        assert_eq!(stage.name(), "raise");
        assert_eq!(stage.kind(), StageKind::Custom);
    }

    #[test]
    fn test_custom_stage_may_carry_state() {
        let mut count = 0u32;
        let mut stage = CustomStage::new("counter", move |current, _ctx| {
            count += 1;
            CameraTransform {
                position: Vec3::X * count as f32,
                ..*current
            }
        });
        let ctx = FrameContext::new(0.016);
        let _ = stage.update(CameraTransform::IDENTITY, &ctx);
        let second = stage.update(CameraTransform::IDENTITY, &ctx);
        assert_eq!(second.position, Vec3::X * 2.0);
    }
}
