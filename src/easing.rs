//! Blend-weight remapping curves for camera transitions.
//!
//! A curve maps normalized elapsed time (0.0 to 1.0) to a blend weight.
//! All variants clamp their input; evaluation is pure and allocation-free.

use std::sync::Arc;

/// Shared sampled curve function for user-pluggable easing.
pub type CurveFn = Arc<dyn Fn(f32) -> f32 + Send + Sync>;

/// Blend curve variants for camera transitions.
#[derive(Clone)]
pub enum BlendCurve {
    /// Linear interpolation (no easing).
    Linear,
    /// Slow start, fast end: `t^exponent`.
    EaseIn {
        /// Curve steepness; 2.0 is quadratic.
        exponent: f32,
    },
    /// Fast start, slow end: `1 - (1-t)^exponent`.
    EaseOut {
        /// Curve steepness; 2.0 is quadratic.
        exponent: f32,
    },
    /// Ease-in for the first half, ease-out for the second.
    EaseInOut {
        /// Curve steepness applied to both halves.
        exponent: f32,
    },
    /// User-supplied curve, evaluated by sampling the provided function.
    Custom {
        /// Label used in Debug output and logs.
        name: &'static str,
        /// The sampled function; output is clamped to [0.0, 1.0].
        curve: CurveFn,
    },
}

impl BlendCurve {
    /// Default curve: ease-out with exponent 1.5.
    pub const DEFAULT: BlendCurve = BlendCurve::EaseOut { exponent: 1.5 };

    /// Build a custom curve from any sampled function.
    pub fn custom(
        name: &'static str,
        curve: impl Fn(f32) -> f32 + Send + Sync + 'static,
    ) -> Self {
        Self::Custom {
            name,
            curve: Arc::new(curve),
        }
    }

    /// Evaluate the curve at normalized time `t`.
    ///
    /// Input is clamped to [0.0, 1.0]. Output is a blend weight, also in
    /// [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn { exponent } => t.powf(*exponent),
            Self::EaseOut { exponent } => 1.0 - (1.0 - t).powf(*exponent),
            Self::EaseInOut { exponent } => {
                if t < 0.5 {
                    0.5 * (2.0 * t).powf(*exponent)
                } else {
                    1.0 - 0.5 * (2.0 * (1.0 - t)).powf(*exponent)
                }
            }
            Self::Custom { curve, .. } => curve(t).clamp(0.0, 1.0),
        }
    }

    /// Short name for debugging/logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn { .. } => "ease_in",
            Self::EaseOut { .. } => "ease_out",
            Self::EaseInOut { .. } => "ease_in_out",
            Self::Custom { name, .. } => name,
        }
    }
}

impl Default for BlendCurve {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Debug for BlendCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => f.write_str("Linear"),
            Self::EaseIn { exponent } => {
                f.debug_struct("EaseIn").field("exponent", exponent).finish()
            }
            Self::EaseOut { exponent } => f
                .debug_struct("EaseOut")
                .field("exponent", exponent)
                .finish(),
            Self::EaseInOut { exponent } => f
                .debug_struct("EaseInOut")
                .field("exponent", exponent)
                .finish(),
            Self::Custom { name, .. } => {
                f.debug_struct("Custom").field("name", name).finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = BlendCurve::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_input_clamping() {
        let linear = BlendCurve::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let ease = BlendCurve::DEFAULT;
        assert_eq!(ease.evaluate(-0.5), 0.0);
        assert!((ease.evaluate(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ease_out_shape() {
        // Ease-out makes early progress: value at t=0.25 exceeds 0.25.
        let ease = BlendCurve::EaseOut { exponent: 1.5 };
        let quarter = ease.evaluate(0.25);
        assert!(
            quarter > 0.25,
            "ease-out should exceed 0.25 at t=0.25, got {quarter}"
        );
    }

    #[test]
    fn test_ease_in_shape() {
        let ease = BlendCurve::EaseIn { exponent: 2.0 };
        assert_eq!(ease.evaluate(0.5), 0.25);
        assert!(ease.evaluate(0.25) < 0.25);
    }

    #[test]
    fn test_ease_in_out_symmetry() {
        let ease = BlendCurve::EaseInOut { exponent: 2.0 };
        assert_eq!(ease.evaluate(0.5), 0.5);
        let low = ease.evaluate(0.25);
        let high = ease.evaluate(0.75);
        assert!((low + high - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_custom_curve_sampled_and_clamped() {
        let overshoot = BlendCurve::custom("overshoot", |t| t * 1.5);
        assert_eq!(overshoot.name(), "overshoot");
        assert_eq!(overshoot.evaluate(0.5), 0.75);
        // Output beyond 1.0 is clamped.
        assert_eq!(overshoot.evaluate(0.9), 1.0);
    }

    #[test]
    fn test_default_is_ease_out() {
        assert_eq!(BlendCurve::default().name(), "ease_out");
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let ease = BlendCurve::EaseInOut { exponent: 3.0 };
        assert_eq!(ease.evaluate(0.37).to_bits(), ease.evaluate(0.37).to_bits());
    }
}
