//! Surface materials.
//!
//! A [`Material`] is evaluated at every hit to produce a [`MaterialSample`]:
//! the Phong coefficients plus the weights the tracer uses to spawn
//! reflection and transmission rays.

use crate::Color;
use whitted_math::Vec3;

/// Reflectance coefficients of a surface at one hit point.
///
/// Samples are computed fresh per hit and have no identity of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialSample {
    /// Ambient reflectance
    pub k_a: Color,
    /// Diffuse (Lambertian) reflectance
    pub k_d: Color,
    /// Specular reflectance of the Phong lobe
    pub k_s: Color,
    /// Phong specular exponent
    pub n: f32,
    /// Weight of the mirror reflection ray
    pub k_r: Color,
    /// Weight of the transmission ray
    pub k_t: Color,
    /// Index of refraction per color channel, relative to the outside medium
    pub eta_of_channel: Vec3,
    /// Light emitted by the surface itself
    pub emission: Color,
}

impl Default for MaterialSample {
    fn default() -> Self {
        Self {
            k_a: Color::ZERO,
            k_d: Color::ZERO,
            k_s: Color::ZERO,
            n: 1.0,
            k_r: Color::ZERO,
            k_t: Color::ZERO,
            eta_of_channel: Vec3::ONE,
            emission: Color::ZERO,
        }
    }
}

impl MaterialSample {
    /// True if the tracer should spawn a reflection ray.
    pub fn is_reflective(&self) -> bool {
        self.k_r.max_element() > 0.0
    }

    /// True if the tracer should spawn transmission rays.
    pub fn is_transmissive(&self) -> bool {
        self.k_t.max_element() > 0.0
    }
}

/// Trait for anything that can describe a surface at a hit point.
pub trait Material: Send + Sync {
    /// Sample the material at world position `p` with surface coordinates `(u, v)`.
    fn sample(&self, p: Vec3, u: f32, v: f32) -> MaterialSample;
}

/// Spatially constant Phong material.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhongMaterial {
    sample: MaterialSample,
}

impl PhongMaterial {
    /// Create a material that always returns `sample`.
    pub fn new(sample: MaterialSample) -> Self {
        Self { sample }
    }

    /// Plain diffuse surface with a small ambient term.
    pub fn diffuse(color: Color) -> Self {
        Self::new(MaterialSample {
            k_a: 0.05 * color,
            k_d: color,
            ..Default::default()
        })
    }

    /// Perfect mirror tinted by `color`.
    pub fn mirror(color: Color) -> Self {
        Self::new(MaterialSample {
            k_r: color,
            ..Default::default()
        })
    }

    /// Clear dielectric with the same index of refraction in every channel.
    pub fn glass(eta: f32) -> Self {
        Self::new(MaterialSample {
            k_t: Color::ONE,
            eta_of_channel: Vec3::splat(eta),
            ..Default::default()
        })
    }

    /// Add a Phong highlight.
    pub fn with_specular(mut self, k_s: Color, n: f32) -> Self {
        self.sample.k_s = k_s;
        self.sample.n = n;
        self
    }

    /// Set the reflection weight.
    pub fn with_reflection(mut self, k_r: Color) -> Self {
        self.sample.k_r = k_r;
        self
    }

    /// Set per-channel indices of refraction, for dispersive glass.
    pub fn with_eta_of_channel(mut self, eta_of_channel: Vec3) -> Self {
        self.sample.eta_of_channel = eta_of_channel;
        self
    }

    /// Make the surface emissive.
    pub fn with_emission(mut self, emission: Color) -> Self {
        self.sample.emission = emission;
        self
    }
}

impl Material for PhongMaterial {
    fn sample(&self, _p: Vec3, _u: f32, _v: f32) -> MaterialSample {
        self.sample
    }
}

/// 3D checkerboard alternating between two samples.
///
/// Cells are axis-aligned cubes of side `scale` in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkerboard {
    pub even: MaterialSample,
    pub odd: MaterialSample,
    pub scale: f32,
}

impl Checkerboard {
    pub fn new(even: MaterialSample, odd: MaterialSample, scale: f32) -> Self {
        Self { even, odd, scale }
    }
}

impl Material for Checkerboard {
    fn sample(&self, p: Vec3, _u: f32, _v: f32) -> MaterialSample {
        let cell = (p / self.scale).floor();
        let parity = (cell.x as i64 + cell.y as i64 + cell.z as i64).rem_euclid(2);
        if parity == 0 {
            self.even
        } else {
            self.odd
        }
    }
}
