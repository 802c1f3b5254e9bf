//! Framing stage: lateral reframing to hold the follow target at a
//! normalized screen offset.

use glam::{Vec2, Vec3};

use super::damping::SpringDamper;
use super::{CameraStage, StageKind};
use crate::context::FrameContext;
use crate::transform::CameraTransform;

/// Translates the camera in its own view plane so the follow target sits
/// at a normalized screen offset, without changing orientation.
///
/// Works in camera-local space: the target's lateral displacement from
/// its expected on-screen position becomes a damped positional
/// correction. A target at or behind the camera plane passes through
/// unchanged.
#[derive(Debug, Clone)]
pub struct FrameStage {
    /// Where on screen the target should sit (±1 reaches the edges).
    pub screen_offset: Vec2,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    damper: SpringDamper,
}

impl FrameStage {
    /// Center-framing with the default spring.
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen_offset: Vec2::ZERO,
            aspect: 16.0 / 9.0,
            damper: SpringDamper::default(),
        }
    }

    /// Hold the target at a normalized screen offset.
    #[must_use]
    pub fn with_screen_offset(mut self, offset: Vec2, aspect: f32) -> Self {
        self.screen_offset = offset;
        self.aspect = aspect;
        self
    }

    /// Set the spring's natural frequency; zero or less snaps hard.
    #[must_use]
    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.damper = SpringDamper::new(frequency);
        self
    }
}

impl Default for FrameStage {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraStage for FrameStage {
    fn kind(&self) -> StageKind {
        StageKind::Frame
    }

    fn name(&self) -> &'static str {
        "frame"
    }

    fn update(
        &mut self,
        current: CameraTransform,
        ctx: &FrameContext,
    ) -> CameraTransform {
        let Some(target) = ctx.follow else {
            return current;
        };

        let local =
            current.rotation.inverse() * (target.position - current.position);
        let depth = -local.z;
        if depth <= f32::EPSILON {
            return current;
        }

        // Expected lateral position of the target in camera space for the
        // requested screen offset at this depth.
        let tan_half = (current.fov_y.to_radians() * 0.5).tan();
        let expected = Vec2::new(
            self.screen_offset.x * tan_half * self.aspect * depth,
            self.screen_offset.y * tan_half * depth,
        );

        // Moving the camera by the residual in its view plane moves the
        // target to the expected spot.
        let correction = Vec2::new(local.x, local.y) - expected;
        let desired = current.position
            + current.rotation * Vec3::new(correction.x, correction.y, 0.0);
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
