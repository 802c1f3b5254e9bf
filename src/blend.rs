//! Timed blending between camera transforms.
//!
//! The machine has two states: idle (the active camera's transform flows
//! straight through) and blending (a frozen source snapshot interpolates
//! toward the incoming camera's live transform). Interruption collapses
//! to "current interpolated value + new target" — there is never more
//! than one source/target pair, no matter how many changes piled up.

use crate::easing::BlendCurve;
use crate::stack::CameraId;
use crate::transform::{CameraTransform, LensSpace};

/// How a camera is blended into when it becomes active.
///
/// Held by the incoming camera: the camera being blended-into controls
/// how it is blended-into.
#[derive(Debug, Clone)]
pub struct BlendProfile {
    /// Blend duration in seconds; zero (or less, after clamping) cuts.
    pub duration: f32,
    /// Curve remapping elapsed fraction to blend weight.
    pub curve: BlendCurve,
    /// Space in which fov/lens values blend.
    pub lens_space: LensSpace,
}

impl BlendProfile {
    /// Timed blend with the default ease-out curve.
    #[must_use]
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Instantaneous cut.
    #[must_use]
    pub fn cut() -> Self {
        Self {
            duration: 0.0,
            curve: BlendCurve::Linear,
            lens_space: LensSpace::Linear,
        }
    }

    /// Replace the curve.
    #[must_use]
    pub fn with_curve(mut self, curve: BlendCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Blend fov/lens values in log space.
    #[must_use]
    pub fn with_log_lens(mut self) -> Self {
        self.lens_space = LensSpace::Logarithmic;
        self
    }
}

impl Default for BlendProfile {
    /// One-second ease-out, the classic view-target blend feel.
    fn default() -> Self {
        Self {
            duration: 1.0,
            curve: BlendCurve::DEFAULT,
            lens_space: LensSpace::Linear,
        }
    }
}

/// An in-flight blend.
#[derive(Debug, Clone)]
struct ActiveBlend {
    /// Frozen at blend start; never re-queried from the outgoing camera.
    source: CameraTransform,
    /// Camera being blended into.
    target: CameraId,
    /// Camera being blended away from, ticked for state continuity.
    from: Option<CameraId>,
    elapsed: f32,
    duration: f32,
    curve: BlendCurve,
    lens_space: LensSpace,
    /// How many interruptions preceded this blend. Diagnostics only.
    interruptions: u32,
}

/// The blend state machine.
///
/// Idle when no blend is in flight; [`advance`](Self::advance) then
/// passes the incoming transform straight through.
#[derive(Debug, Default)]
pub struct BlendRunner {
    active: Option<ActiveBlend>,
}

impl BlendRunner {
    /// Runner in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Whether a blend is in flight.
    #[must_use]
    pub fn is_blending(&self) -> bool {
        self.active.is_some()
    }

    /// The camera currently being blended into.
    #[must_use]
    pub fn target(&self) -> Option<CameraId> {
        self.active.as_ref().map(|a| a.target)
    }

    /// The camera being blended away from, if it still exists.
    #[must_use]
    pub fn outgoing(&self) -> Option<CameraId> {
        self.active.as_ref().and_then(|a| a.from)
    }

    /// Elapsed fraction of the current blend.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        self.active
            .as_ref()
            .map(|a| (a.elapsed / a.duration).clamp(0.0, 1.0))
    }

    /// Interruptions preceding the current blend (0 when idle or fresh).
    #[must_use]
    pub fn interruptions(&self) -> u32 {
        self.active.as_ref().map_or(0, |a| a.interruptions)
    }

    /// The frozen source snapshot of the current blend.
    #[must_use]
    pub fn source(&self) -> Option<CameraTransform> {
        self.active.as_ref().map(|a| a.source)
    }

    /// Start a blend from `source` toward `target`.
    ///
    /// `duration` must be positive and finite — the driver validates and
    /// cuts otherwise. Starting over an in-flight blend is the
    /// interruption path: the caller passes the currently interpolated
    /// value as the new source and the depth counter carries over.
    pub fn begin(
        &mut self,
        source: CameraTransform,
        target: CameraId,
        from: Option<CameraId>,
        profile: &BlendProfile,
    ) {
        let interruptions =
            self.active.as_ref().map_or(0, |a| a.interruptions + 1);
        self.active = Some(ActiveBlend {
            source,
            target,
            from,
            elapsed: 0.0,
            duration: profile.duration,
            curve: profile.curve.clone(),
            lens_space: profile.lens_space,
            interruptions,
        });
    }

    /// Drop any in-flight blend and return to idle.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Advance by `delta_time` and mix the incoming transform.
    ///
    /// Completion is exact: once elapsed reaches the duration the
    /// incoming transform is returned untouched and the machine goes
    /// idle.
    pub fn advance(
        &mut self,
        incoming: &CameraTransform,
        delta_time: f32,
    ) -> CameraTransform {
        let Some(active) = &mut self.active else {
            return *incoming;
        };

        active.elapsed += delta_time;
        if active.elapsed >= active.duration {
            self.active = None;
            return *incoming;
        }

        active.source.interpolate_eased(
            incoming,
            active.elapsed / active.duration,
            &active.curve,
            active.lens_space,
        )
    }
}
