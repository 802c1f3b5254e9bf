//! Aim stage: orients the camera toward the aim target.

use glam::{Quat, Vec2, Vec3};

use super::damping::Damper;
use super::{CameraStage, StageKind};
use crate::context::FrameContext;
use crate::transform::{look_rotation, CameraTransform};

/// Rotates the camera to look at the aim target, optionally holding it at
/// a normalized screen offset instead of dead center.
///
/// The screen offset is in NDC-like units: ±1 reaches the viewport edge
/// horizontally/vertically. Rotation is smoothed with an exponential
/// damper; a zero damp time hard-locks onto the target.
#[derive(Debug, Clone)]
pub struct AimStage {
    /// Where on screen the target should sit.
    pub screen_offset: Vec2,
    /// Viewport aspect ratio (width / height) for the horizontal offset.
    pub aspect: f32,
    /// Approximate up direction for the look rotation.
    pub up: Vec3,
    damper: Damper,
}

impl AimStage {
    /// Centered aim with the default damper.
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen_offset: Vec2::ZERO,
            aspect: 16.0 / 9.0,
            up: Vec3::Y,
            damper: Damper::default(),
        }
    }

    /// Aim that snaps to the target with no smoothing.
    #[must_use]
    pub fn hard_lock() -> Self {
        Self {
            damper: Damper::hard(),
            ..Self::new()
        }
    }

    /// Hold the target at a normalized screen offset.
    #[must_use]
    pub fn with_screen_offset(mut self, offset: Vec2, aspect: f32) -> Self {
        self.screen_offset = offset;
        self.aspect = aspect;
        self
    }

    /// Set the rotational damp time in seconds; zero hard-locks.
    #[must_use]
    pub fn with_damp_time(mut self, damp_time: f32) -> Self {
        self.damper = Damper::new(damp_time);
        self
    }

    /// Rotation placing the target at the configured screen offset.
    fn desired_rotation(
        &self,
        current: &CameraTransform,
        target: Vec3,
    ) -> Option<Quat> {
        let dir = (target - current.position).try_normalize()?;
        let centered = look_rotation(dir, self.up);

        if self.screen_offset == Vec2::ZERO {
            return Some(centered);
        }

        // Angular offsets that move the on-center target to the requested
        // normalized screen position (vertical fov; horizontal scaled by
        // aspect).
        let tan_half = (current.fov_y.to_radians() * 0.5).tan();
        let yaw = (self.screen_offset.x * tan_half * self.aspect).atan();
        let pitch = -(self.screen_offset.y * tan_half).atan();
        Some(
            (centered
                * Quat::from_rotation_y(yaw)
                * Quat::from_rotation_x(pitch))
            .normalize(),
        )
    }
}

impl Default for AimStage {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraStage for AimStage {
    fn kind(&self) -> StageKind {
        StageKind::Aim
    }

    fn name(&self) -> &'static str {
        "aim"
    }

    fn update(
        &mut self,
        current: CameraTransform,
        ctx: &FrameContext,
    ) -> CameraTransform {
        let Some(target) = ctx.aim else {
            return current;
        };
        let Some(desired) = self.desired_rotation(&current, target.position)
        else {
            return current;
        };

        let response = self.damper.response(ctx.delta_time);
        let rotation = current.rotation.slerp(desired, response).normalize();

        CameraTransform {
            rotation,
            ..current
        }
    }
}
