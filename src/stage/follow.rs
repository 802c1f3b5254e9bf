//! Positional follow stage.

use glam::Vec3;

use super::damping::SpringDamper;
use super::{CameraStage, StageKind};
use crate::context::FrameContext;
use crate::transform::CameraTransform;

/// Which frame the follow offset is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowSpace {
    /// Keep a fixed offset in world space.
    World,
    /// Keep a fixed offset in the follow target's local space.
    #[default]
    Local,
}

/// Keeps the camera at an offset from the follow target, smoothed by a
/// critically-damped spring.
///
/// Without a follow target in the context the stage passes the transform
/// through unchanged.
#[derive(Debug, Clone)]
pub struct FollowStage {
    /// Desired offset from the target.
    pub offset: Vec3,
    /// Frame the offset is expressed in.
    pub space: FollowSpace,
    damper: SpringDamper,
}

impl FollowStage {
    /// Follow at `offset` in the given space with the default spring.
    #[must_use]
    pub fn new(offset: Vec3, space: FollowSpace) -> Self {
        Self {
            offset,
            space,
            damper: SpringDamper::default(),
        }
    }

    /// Set the spring's natural frequency; zero or less snaps hard.
    #[must_use]
    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.damper = SpringDamper::new(frequency);
        self
    }
}

impl CameraStage for FollowStage {
    fn kind(&self) -> StageKind {
        StageKind::Follow
    }

    fn name(&self) -> &'static str {
        "follow"
    }

    fn update(
        &mut self,
        current: CameraTransform,
        ctx: &FrameContext,
    ) -> CameraTransform {
        let Some(target) = ctx.follow else {
            return current;
        };

        let desired = target.position
            + match self.space {
                FollowSpace::World => self.offset,
                FollowSpace::Local => target.rotation * self.offset,
            };
        let position =
            self.damper.damp(current.position, desired, ctx.delta_time);

        CameraTransform {
            position,
            ..current
        }
    }

    fn reset(&mut self) {
        self.damper.reset();
    }
}
