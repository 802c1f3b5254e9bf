//! Serializable engine tunables with TOML preset support.
//!
//! All sub-structs use `#[serde(default)]` so partial TOML files (e.g.
//! only overriding `[default_blend]`) work correctly. Options are plain
//! data; conversion to runtime types happens through explicit `to_*`
//! methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::blend::BlendProfile;
use crate::easing::BlendCurve;
use crate::error::CamrigError;
use crate::transform::LensSpace;

/// Named blend curve kinds expressible in configuration.
///
/// Custom sampled curves are runtime-only and have no TOML form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// Constant-rate blend.
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow finish.
    #[default]
    EaseOut,
    /// Slow at both ends.
    EaseInOut,
}

/// Blend transition parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BlendOptions {
    /// Blend duration in seconds.
    pub duration: f32,
    /// Curve family.
    pub curve: CurveKind,
    /// Curve steepness for the ease variants.
    pub exponent: f32,
    /// Space in which fov/lens values blend.
    pub lens_space: LensSpace,
}

impl BlendOptions {
    /// Build the runtime profile these options describe.
    #[must_use]
    pub fn to_profile(&self) -> BlendProfile {
        let curve = match self.curve {
            CurveKind::Linear => BlendCurve::Linear,
            CurveKind::EaseIn => BlendCurve::EaseIn {
                exponent: self.exponent,
            },
            CurveKind::EaseOut => BlendCurve::EaseOut {
                exponent: self.exponent,
            },
            CurveKind::EaseInOut => BlendCurve::EaseInOut {
                exponent: self.exponent,
            },
        };
        BlendProfile {
            duration: self.duration,
            curve,
            lens_space: self.lens_space,
        }
    }
}

impl Default for BlendOptions {
    fn default() -> Self {
        Self {
            duration: 1.0,
            curve: CurveKind::EaseOut,
            exponent: 1.5,
            lens_space: LensSpace::Linear,
        }
    }
}

/// Top-level options container.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default,
)]
#[serde(default)]
pub struct DirectorOptions {
    /// Blend parameters for rigs built from configuration; hosts apply
    /// them with `CameraRig::with_blend(options.default_blend.to_profile())`.
    pub default_blend: BlendOptions,
}

impl DirectorOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CamrigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| CamrigError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CamrigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CamrigError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
