//! Ordered transform-mutating stages forming a camera's modifier pipeline.
//!
//! Each stage consumes the current transform candidate and produces a new
//! one; a [`ModifierPipeline`] threads the transform through its stages in
//! fixed order. Stages carry their own internal state (spring velocity,
//! noise phase) but stay deterministic: identical state, delta time, and
//! context always yield identical output.

mod aim;
mod custom;
mod damping;
mod follow;
mod frame;
mod noise;
mod pipeline;

pub use aim::AimStage;
pub use custom::CustomStage;
pub use damping::{Damper, SpringDamper};
pub use follow::{FollowSpace, FollowStage};
pub use frame::FrameStage;
pub use noise::NoiseStage;
pub use pipeline::ModifierPipeline;

use crate::context::FrameContext;
use crate::transform::CameraTransform;

/// Capability tag identifying what a stage does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    /// Positions the camera relative to a follow target.
    Follow,
    /// Orients the camera toward an aim target.
    Aim,
    /// Reframes laterally to hold a target at a screen offset.
    Frame,
    /// Adds procedural shake on top of the composed transform.
    Noise,
    /// Host-defined behavior.
    Custom,
}

/// One ordered step in a camera's modifier pipeline.
///
/// Implementations own their internal state exclusively; the pipeline
/// never shares a stage between cameras. `update` must not read wall-clock
/// time or ambient randomness — everything time- or chance-dependent comes
/// in through the context or was fixed at construction (seeds).
pub trait CameraStage {
    /// Capability tag for diagnostics and introspection.
    fn kind(&self) -> StageKind;

    /// Short name for debugging/logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Produce the next transform candidate from the current one.
    fn update(
        &mut self,
        current: CameraTransform,
        ctx: &FrameContext,
    ) -> CameraTransform;

    /// Clear internal state (spring velocities, accumulated phase).
    fn reset(&mut self) {}
}
