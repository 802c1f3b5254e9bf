//! Smoothing primitives shared by the follow, aim, and frame stages.

use glam::Vec3;

/// Residual-based exponential damper.
///
/// After `damp_time` seconds, only `residual` of the input delta remains.
/// A `damp_time` of zero or less disables smoothing and passes input
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damper {
    /// Seconds until only `residual` of a step input remains.
    pub damp_time: f32,
    /// Fraction of the input left after `damp_time` seconds.
    pub residual: f32,
}

impl Damper {
    /// Damper with the given damp time and a 1% residual.
    #[must_use]
    pub fn new(damp_time: f32) -> Self {
        Self {
            damp_time,
            residual: 0.01,
        }
    }

    /// Damper that passes input through unchanged.
    #[must_use]
    pub fn hard() -> Self {
        Self::new(0.0)
    }

    /// Fraction of the remaining delta consumed this step.
    ///
    /// Frame-rate independent: two 8 ms steps advance as far as one 16 ms
    /// step.
    #[must_use]
    pub fn response(&self, delta_time: f32) -> f32 {
        if self.damp_time <= 0.0 {
            return 1.0;
        }
        if delta_time <= 0.0 {
            return 0.0;
        }
        1.0 - (self.residual.ln() * delta_time / self.damp_time).exp()
    }

    /// Move a scalar toward its target.
    #[must_use]
    pub fn damp_f32(&self, current: f32, target: f32, delta_time: f32) -> f32 {
        current + (target - current) * self.response(delta_time)
    }

    /// Move a vector toward its target.
    #[must_use]
    pub fn damp_vec3(
        &self,
        current: Vec3,
        target: Vec3,
        delta_time: f32,
    ) -> Vec3 {
        current + (target - current) * self.response(delta_time)
    }
}

impl Default for Damper {
    fn default() -> Self {
        Self::new(0.2)
    }
}

/// Exact critically-damped spring toward a moving target.
///
/// Closed-form integration keeps it stable at any delta time, unlike an
/// Euler-stepped spring. Carries velocity state between frames; a
/// frequency of zero or less snaps to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringDamper {
    /// Natural frequency in Hz; higher is stiffer.
    pub frequency: f32,
    velocity: Vec3,
}

impl SpringDamper {
    /// Spring with the given natural frequency and zero initial velocity.
    #[must_use]
    pub fn new(frequency: f32) -> Self {
        Self {
            frequency,
            velocity: Vec3::ZERO,
        }
    }

    /// Current velocity state.
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Advance toward `target`, updating velocity state.
    pub fn damp(
        &mut self,
        current: Vec3,
        target: Vec3,
        delta_time: f32,
    ) -> Vec3 {
        if self.frequency <= 0.0 {
            self.velocity = Vec3::ZERO;
            return target;
        }
        if delta_time <= 0.0 {
            return current;
        }

        let omega = self.frequency * std::f32::consts::TAU;
        let exp = (-omega * delta_time).exp();
        let j0 = current - target;
        let j1 = self.velocity + j0 * omega;
        let position = target + (j0 + j1 * delta_time) * exp;
        self.velocity = (self.velocity - j1 * omega * delta_time) * exp;
        position
    }

    /// Zero the velocity state.
    pub fn reset(&mut self) {
        self.velocity = Vec3::ZERO;
    }
}

impl Default for SpringDamper {
    fn default() -> Self {
        Self::new(2.0)
    }
}
