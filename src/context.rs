//! Per-frame input supplied by the host.
//!
//! Everything a camera stage may read — elapsed time, follow/aim targets —
//! arrives through [`FrameContext`]. Stages never touch ambient globals,
//! wall clocks, or entropy sources; that keeps every frame replayable.

use glam::{Quat, Vec3};

/// World-space pose of an external target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPose {
    /// Target position.
    pub position: Vec3,
    /// Target orientation.
    pub rotation: Quat,
}

impl TargetPose {
    /// Pose at a position with identity orientation.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Host-supplied input for one engine tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Seconds elapsed since the previous tick. Must be ≥ 0; the driver
    /// clamps negative or non-finite values to 0 and reports a fault.
    pub delta_time: f32,
    /// Pose followed by Follow/Frame stages, if any.
    pub follow: Option<TargetPose>,
    /// Pose aimed at by Aim stages, if any.
    pub aim: Option<TargetPose>,
}

impl FrameContext {
    /// Context with only a time step.
    #[must_use]
    pub fn new(delta_time: f32) -> Self {
        Self {
            delta_time,
            follow: None,
            aim: None,
        }
    }

    /// Attach a follow target.
    #[must_use]
    pub fn with_follow(mut self, pose: TargetPose) -> Self {
        self.follow = Some(pose);
        self
    }

    /// Attach an aim target.
    #[must_use]
    pub fn with_aim(mut self, pose: TargetPose) -> Self {
        self.aim = Some(pose);
        self
    }
}

impl Default for FrameContext {
    fn default() -> Self {
        Self::new(0.0)
    }
}
