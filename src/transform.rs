//! Pure math for camera view transforms.
//!
//! [`CameraTransform`] is the value type the whole engine trades in: one is
//! produced per camera per frame and never mutated afterwards. Composition
//! and interpolation are pure functions with no hidden state.

use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Smallest field of view the engine will produce, in degrees.
pub const FOV_MIN: f32 = 0.1;
/// Largest field of view the engine will produce, in degrees.
pub const FOV_MAX: f32 = 179.9;

/// How field-of-view and lens values are blended.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LensSpace {
    /// Blend in value space.
    #[default]
    Linear,
    /// Blend in log space for perceptual smoothness across large ratios.
    Logarithmic,
}

/// Optional lens parameters carried alongside the view transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensState {
    /// Focus distance in world units.
    pub focal_distance: f32,
    /// Aperture (f-stop-like value, smaller is wider).
    pub aperture: f32,
}

/// A camera's resolved view state for one frame.
///
/// Rotation is a unit quaternion; the camera looks down its local −Z axis
/// with +Y up. Field of view is vertical, in degrees, within
/// ([`FOV_MIN`], [`FOV_MAX`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation (unit quaternion).
    pub rotation: Quat,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    /// Optional lens extras (focus distance, aperture).
    pub lens: Option<LensState>,
}

impl CameraTransform {
    /// Identity transform: origin, no rotation, 90° field of view.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        fov_y: 90.0,
        lens: None,
    };

    /// Transform at a position with the given orientation and default lens.
    #[must_use]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Self::IDENTITY
        }
    }

    /// Replace the vertical field of view, clamped to the valid range.
    #[must_use]
    pub fn with_fov(mut self, fov_y: f32) -> Self {
        self.fov_y = fov_y.clamp(FOV_MIN, FOV_MAX);
        self
    }

    /// Attach lens extras.
    #[must_use]
    pub fn with_lens(mut self, lens: LensState) -> Self {
        self.lens = Some(lens);
        self
    }

    /// World-space forward direction (local −Z).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// World-space up direction (local +Y).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Apply a relative offset expressed in this transform's local frame.
    #[must_use]
    pub fn compose(&self, delta: &TransformDelta) -> Self {
        Self {
            position: self.position + self.rotation * delta.translation,
            rotation: (self.rotation * delta.rotation).normalize(),
            fov_y: (self.fov_y + delta.fov_offset).clamp(FOV_MIN, FOV_MAX),
            lens: self.lens,
        }
    }

    /// Blend toward `other` by `weight`, clamped to [0.0, 1.0].
    ///
    /// Position and lens values interpolate per component (linearly or in
    /// log space per `lens_space`); rotation uses shortest-arc spherical
    /// interpolation. Weight 0 returns exactly `self` and weight 1 exactly
    /// `other`, bit for bit.
    #[must_use]
    pub fn interpolate(
        &self,
        other: &Self,
        weight: f32,
        lens_space: LensSpace,
    ) -> Self {
        let w = if weight.is_nan() { 0.0 } else { weight.clamp(0.0, 1.0) };
        if w <= 0.0 {
            return *self;
        }
        if w >= 1.0 {
            return *other;
        }

        let lens = match (self.lens, other.lens) {
            (Some(a), Some(b)) => Some(LensState {
                focal_distance: blend_scalar(
                    a.focal_distance,
                    b.focal_distance,
                    w,
                    lens_space,
                ),
                aperture: blend_scalar(a.aperture, b.aperture, w, lens_space),
            }),
            // Mixed endpoints cannot blend; the source's lens holds until
            // weight 1 so the boundary law stays exact.
            _ => self.lens,
        };

        Self {
            position: self.position.lerp(other.position, w),
            rotation: self.rotation.slerp(other.rotation, w).normalize(),
            fov_y: blend_scalar(self.fov_y, other.fov_y, w, lens_space),
            lens,
        }
    }

    /// Blend toward `other` with the raw time fraction remapped through
    /// a curve first.
    ///
    /// Equivalent to `interpolate(other, curve.evaluate(t), lens_space)`.
    #[must_use]
    pub fn interpolate_eased(
        &self,
        other: &Self,
        t: f32,
        curve: &crate::easing::BlendCurve,
        lens_space: LensSpace,
    ) -> Self {
        self.interpolate(other, curve.evaluate(t), lens_space)
    }

    /// Whether every component is finite and the field of view valid.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.rotation.is_finite()
            && self.fov_y.is_finite()
            && self.fov_y > 0.0
            && self.fov_y < 180.0
            && self.lens.map_or(true, |l| {
                l.focal_distance.is_finite() && l.aperture.is_finite()
            })
    }
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A relative offset applied in a base transform's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformDelta {
    /// Translation in the base's local axes.
    pub translation: Vec3,
    /// Rotation applied after the base rotation.
    pub rotation: Quat,
    /// Additive field-of-view offset in degrees.
    pub fov_offset: f32,
}

impl TransformDelta {
    /// The no-op offset.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        fov_offset: 0.0,
    };

    /// Pure translation offset.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }
}

impl Default for TransformDelta {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotation that points a camera's local −Z axis along `forward` with
/// `up` as the approximate up direction.
///
/// Degenerate inputs (zero forward, forward parallel to up) fall back to
/// an arbitrary but stable orthonormal basis.
#[must_use]
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let Some(f) = forward.try_normalize() else {
        return Quat::IDENTITY;
    };
    let z = -f;
    let x = match up.cross(z).try_normalize() {
        Some(x) => x,
        None => z.any_orthonormal_vector(),
    };
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}

fn blend_scalar(a: f32, b: f32, w: f32, space: LensSpace) -> f32 {
    match space {
        LensSpace::Linear => a + (b - a) * w,
        LensSpace::Logarithmic => {
            // Log blending needs strictly positive endpoints.
            let a = a.max(f32::MIN_POSITIVE);
            let b = b.max(f32::MIN_POSITIVE);
            (a.ln() + (b.ln() - a.ln()) * w).exp()
        }
    }
}
