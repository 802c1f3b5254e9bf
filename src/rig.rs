//! A camera rig: one logical camera and its modifier pipeline.

use crate::blend::BlendProfile;
use crate::context::FrameContext;
use crate::diagnostics::{Fault, FaultSink};
use crate::stack::CameraId;
use crate::stage::{CameraStage, ModifierPipeline};
use crate::transform::CameraTransform;

type ActivationFn = Box<dyn Fn(&FrameContext) -> bool>;

/// One logical camera: an anchor transform, a priority, a blend-in
/// profile, an activation gate, and an exclusively-owned modifier
/// pipeline.
///
/// Rigs have no identity of their own; the [`CameraStack`] assigns a
/// [`CameraId`] at registration. The blend profile describes how this
/// camera is blended *into* when it becomes active.
///
/// [`CameraStack`]: crate::stack::CameraStack
pub struct CameraRig {
    anchor: CameraTransform,
    last_valid_anchor: CameraTransform,
    anchor_faulted: bool,
    priority: i32,
    blend: BlendProfile,
    enabled: bool,
    predicate: Option<ActivationFn>,
    pipeline: ModifierPipeline,
}

impl CameraRig {
    /// Rig at the identity anchor with priority 0, enabled, default blend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            anchor: CameraTransform::IDENTITY,
            last_valid_anchor: CameraTransform::IDENTITY,
            anchor_faulted: false,
            priority: 0,
            blend: BlendProfile::default(),
            enabled: true,
            predicate: None,
            pipeline: ModifierPipeline::new(),
        }
    }

    /// Set the selection priority (higher wins).
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the anchor transform the pipeline starts from each frame.
    #[must_use]
    pub fn with_anchor(mut self, anchor: CameraTransform) -> Self {
        self.set_anchor(anchor);
        self
    }

    /// Set the profile used when this camera is blended into.
    #[must_use]
    pub fn with_blend(mut self, blend: BlendProfile) -> Self {
        self.blend = blend;
        self
    }

    /// Append a modifier stage; evaluation order is append order.
    #[must_use]
    pub fn with_stage(mut self, stage: impl CameraStage + 'static) -> Self {
        self.pipeline.push(stage);
        self
    }

    /// Gate eligibility on a predicate over the frame context.
    #[must_use]
    pub fn with_activation(
        mut self,
        predicate: impl Fn(&FrameContext) -> bool + 'static,
    ) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Start disabled; [`set_enabled`](Self::set_enabled) re-enables.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Update the anchor transform.
    pub fn set_anchor(&mut self, anchor: CameraTransform) {
        self.anchor = anchor;
    }

    /// Enable or disable this rig.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Replace the blend-in profile.
    pub fn set_blend(&mut self, blend: BlendProfile) {
        self.blend = blend;
    }

    /// Current anchor transform.
    #[must_use]
    pub fn anchor(&self) -> CameraTransform {
        self.anchor
    }

    /// Selection priority.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The profile used when this camera is blended into.
    #[must_use]
    pub fn blend(&self) -> &BlendProfile {
        &self.blend
    }

    /// Whether the rig is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The modifier pipeline, for adding or resetting stages.
    pub fn pipeline_mut(&mut self) -> &mut ModifierPipeline {
        &mut self.pipeline
    }

    /// Number of stages in the pipeline.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.pipeline.len()
    }

    /// Whether this rig may be selected under the given context.
    #[must_use]
    pub fn is_eligible(&self, ctx: &FrameContext) -> bool {
        self.enabled && self.predicate.as_ref().map_or(true, |p| p(ctx))
    }

    /// Run the pipeline from the anchor for one frame.
    ///
    /// A non-finite anchor falls back to the last valid one with a
    /// latched fault; the pipeline itself isolates non-finite stages.
    pub(crate) fn evaluate(
        &mut self,
        ctx: &FrameContext,
        camera: CameraId,
        sink: &mut dyn FaultSink,
    ) -> CameraTransform {
        let anchor = if self.anchor.is_finite() {
            self.anchor_faulted = false;
            self.last_valid_anchor = self.anchor;
            self.anchor
        } else {
            if !self.anchor_faulted {
                self.anchor_faulted = true;
                sink.report(&Fault::NonFiniteAnchor { camera });
            }
            self.last_valid_anchor
        };
        self.pipeline.evaluate(anchor, ctx, camera, sink)
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CameraRig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraRig")
            .field("priority", &self.priority)
            .field("enabled", &self.enabled)
            .field("gated", &self.predicate.is_some())
            .field("stages", &self.pipeline.len())
            .field("blend", &self.blend)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::diagnostics::CollectingFaultSink;
    use crate::stage::CustomStage;

    #[test]
    fn test_eligibility_gates() {
        let ctx = FrameContext::new(0.016);
        assert!(CameraRig::new().is_eligible(&ctx));
        assert!(!CameraRig::new().disabled().is_eligible(&ctx));

        let gated =
            CameraRig::new().with_activation(|ctx| ctx.delta_time > 0.1);
        assert!(!gated.is_eligible(&ctx));
        assert!(gated.is_eligible(&FrameContext::new(0.2)));
    }

    #[test]
    fn test_disabled_wins_over_predicate() {
        let rig = CameraRig::new().with_activation(|_| true).disabled();
        assert!(!rig.is_eligible(&FrameContext::new(0.016)));
    }

    #[test]
    fn test_evaluate_starts_from_anchor() {
        let anchor = CameraTransform::new(Vec3::splat(3.0), Quat::IDENTITY);
        let mut rig = CameraRig::new().with_anchor(anchor).with_stage(
            CustomStage::new("nudge", |c, _| CameraTransform {
                position: c.position + Vec3::X,
                ..*c
            }),
        );
        let mut sink = CollectingFaultSink::default();
        let out = rig.evaluate(
            &FrameContext::new(0.016),
            CameraId::for_tests(1),
            &mut sink,
        );
        assert_eq!(out.position, Vec3::new(4.0, 3.0, 3.0));
    }

    #[test]
    fn test_non_finite_anchor_falls_back_with_one_fault() {
        let good = CameraTransform::new(Vec3::ONE, Quat::IDENTITY);
        let mut rig = CameraRig::new().with_anchor(good);
        let mut sink = CollectingFaultSink::default();
        let ctx = FrameContext::new(0.016);
        let id = CameraId::for_tests(1);

        let _ = rig.evaluate(&ctx, id, &mut sink);
        rig.set_anchor(CameraTransform::new(
            Vec3::splat(f32::NAN),
            Quat::IDENTITY,
        ));
        let first = rig.evaluate(&ctx, id, &mut sink);
        let second = rig.evaluate(&ctx, id, &mut sink);

        assert_eq!(first.position, Vec3::ONE);
        assert_eq!(second.position, Vec3::ONE);
        assert_eq!(sink.faults.len(), 1);
        assert_eq!(sink.faults[0], Fault::NonFiniteAnchor { camera: id });
    }
}
