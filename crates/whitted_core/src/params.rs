//! Render parameters.
//!
//! [`RenderParams`] carries the feature toggles and numeric knobs the tracer
//! reads on every call. It is immutable for the duration of a render and is
//! threaded through explicitly rather than held in global state.

use std::path::Path;

use thiserror::Error;

use crate::Color;

/// Depth past which validation logs a warning.
const DEEP_RECURSION_WARNING: u32 = 64;

/// Errors that can occur while loading render parameters.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid render parameter `{field}`: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Feature toggles and numeric settings for one render.
///
/// Every field has a default, so a JSON document only needs to name the
/// settings it changes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Cast shadow rays towards each light
    pub shadows: bool,
    /// Evaluate the Lambertian term
    pub diffuse: bool,
    /// Evaluate the Phong highlight
    pub specular: bool,
    /// Add the ambient term
    pub ambient: bool,
    /// Blend reflection and transmission by the Fresnel factor
    pub fresnel: bool,
    /// Trace one ray per color channel through dispersive materials
    pub dispersion: bool,
    /// Offset applied to secondary ray origins along their direction
    pub ray_epsilon: f32,
    /// Recursion depth at which tracing stops and returns black
    pub max_depth: u32,
    /// Radiance returned by rays that leave the scene
    pub background: Color,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            shadows: true,
            diffuse: true,
            specular: true,
            ambient: true,
            fresnel: true,
            dispersion: false,
            ray_epsilon: 1e-4,
            max_depth: 8,
            background: Color::ZERO,
        }
    }
}

impl RenderParams {
    /// Parameters with every shading feature switched off.
    ///
    /// Handy as a base when only one term should contribute.
    pub fn disabled() -> Self {
        Self {
            shadows: false,
            diffuse: false,
            specular: false,
            ambient: false,
            fresnel: false,
            dispersion: false,
            ..Default::default()
        }
    }

    /// Parse and validate parameters from a JSON string.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let params: RenderParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Load and validate parameters from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let params = Self::from_json_str(&contents)?;
        log::info!("Loaded render parameters from {}", path.display());
        Ok(params)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the numeric settings.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.ray_epsilon.is_finite() || self.ray_epsilon < 0.0 {
            return Err(ConfigError::Invalid {
                field: "ray_epsilon",
                message: format!("must be a finite, non-negative number (got {})", self.ray_epsilon),
            });
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid {
                field: "max_depth",
                message: "must be at least 1 or no ray is ever traced".to_string(),
            });
        }
        if !self.background.is_finite() {
            return Err(ConfigError::Invalid {
                field: "background",
                message: format!("must be finite (got {:?})", self.background),
            });
        }
        if self.max_depth > DEEP_RECURSION_WARNING {
            log::warn!(
                "max_depth {} is unusually deep; transmissive scenes may exhaust the stack",
                self.max_depth
            );
        }
        Ok(())
    }
}
