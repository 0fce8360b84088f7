//! Whitted Core - lights, materials and render parameters.
//!
//! This crate provides the scene-side building blocks the tracer reads
//! during a render:
//!
//! - **Lights**: the [`Light`] capability trait with [`PointLight`] and [`SpotLight`]
//! - **Materials**: [`Material`] implementations producing a [`MaterialSample`] per hit
//! - **Parameters**: [`RenderParams`] feature toggles, loadable from JSON
//!
//! # Example
//!
//! ```ignore
//! use whitted_core::RenderParams;
//!
//! let params = RenderParams::load("render.json")?;
//! println!("max depth {}, epsilon {}", params.max_depth, params.ray_epsilon);
//! ```

pub mod light;
pub mod material;
pub mod params;

/// RGB radiance / reflectance triple.
pub type Color = whitted_math::Vec3;

// Re-export commonly used types
pub use light::{Light, PointLight, SpotLight};
pub use material::{Checkerboard, Material, MaterialSample, PhongMaterial};
pub use params::{ConfigError, ConfigResult, RenderParams};
