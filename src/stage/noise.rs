//! Procedural shake stage with deterministic seeded phase.

use glam::{EulerRot, Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{CameraStage, StageKind};
use crate::context::FrameContext;
use crate::transform::{CameraTransform, TransformDelta};

/// Sinusoidal camera shake applied in the camera's local frame.
///
/// Six oscillators (three translation axes, pitch/yaw/roll) share one
/// frequency but carry independent phase offsets drawn once from a seeded
/// generator, so the channels never move in lockstep. Time advances only
/// by the context's delta time: identical delta-time sequences reproduce
/// identical shakes.
#[derive(Debug, Clone)]
pub struct NoiseStage {
    /// Positional amplitude per local axis, in world units.
    pub translation_amplitude: Vec3,
    /// Rotational amplitude (pitch, yaw, roll) in radians.
    pub rotation_amplitude: Vec3,
    /// Oscillation frequency in Hz.
    pub frequency: f32,
    time: f32,
    phase: [f32; 6],
}

impl NoiseStage {
    /// Shake with seeded per-channel phase offsets.
    #[must_use]
    pub fn new(
        seed: u64,
        translation_amplitude: Vec3,
        rotation_amplitude: Vec3,
        frequency: f32,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut phase = [0.0f32; 6];
        for slot in &mut phase {
            *slot = rng.random_range(0.0..std::f32::consts::TAU);
        }
        Self {
            translation_amplitude,
            rotation_amplitude,
            frequency,
            time: 0.0,
            phase,
        }
    }

    fn channel(&self, index: usize) -> f32 {
        (std::f32::consts::TAU * self.frequency * self.time
            + self.phase[index])
            .sin()
    }
}

impl CameraStage for NoiseStage {
    fn kind(&self) -> StageKind {
        StageKind::Noise
    }

    fn name(&self) -> &'static str {
        "noise"
    }

    fn update(
        &mut self,
        current: CameraTransform,
        ctx: &FrameContext,
    ) -> CameraTransform {
        self.time += ctx.delta_time;

        let translation = self.translation_amplitude
            * Vec3::new(self.channel(0), self.channel(1), self.channel(2));
        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            self.rotation_amplitude.y * self.channel(4),
            self.rotation_amplitude.x * self.channel(3),
            self.rotation_amplitude.z * self.channel(5),
        );

        current.compose(&TransformDelta {
            translation,
            rotation,
            fov_offset: 0.0,
        })
    }

    fn reset(&mut self) {
        self.time = 0.0;
    }
}
