//! Whitted Renderer - recursive CPU ray tracing
//!
//! A Whitted-style tracer: local Phong shading with shadow rays, plus
//! recursively traced mirror reflection and refraction through dielectrics
//! (optionally Fresnel-weighted and dispersive).
//!
//! ```ignore
//! let data = RenderData::new(RenderParams::default(), &scene);
//! let radiance = trace_recursive(&data, &ray, 0);
//! ```

mod hittable;
mod plane;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod tracer;
mod triangle;

pub use hittable::{Hittable, HittableList, Intersection};
pub use plane::Plane;
pub use renderer::trace_rays;
pub use scene::{RenderContext, RenderData, Scene};
pub use shading::{evaluate_phong, visible};
pub use sphere::{intersect_sphere, Sphere};
pub use tracer::{
    evaluate_reflection, evaluate_transmission, fresnel_schlick, handle_transmissive_material,
    handle_transmissive_material_single_ior, reflection_ray, trace_recursive, transmission_ray,
};
pub use triangle::Triangle;

/// Re-export the shared math and scene-side types
pub use whitted_core::{
    Checkerboard, Color, Light, Material, MaterialSample, PhongMaterial, PointLight, RenderParams,
    SpotLight,
};
pub use whitted_math::{Interval, Ray, Vec3};
