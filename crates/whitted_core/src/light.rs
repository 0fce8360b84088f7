//! Light sources.
//!
//! Lights are owned by the scene for the whole render and only read by the
//! tracer. Each one exposes a position, a total radiant power and an
//! emission profile giving the radiant intensity sent along a direction.

use crate::Color;
use whitted_math::{debug_assert_unit, Vec3};

/// A light source the shading evaluator can query.
pub trait Light: Send + Sync {
    /// World-space position of the light.
    fn position(&self) -> Vec3;

    /// Total radiant power (RGB).
    fn power(&self) -> Color;

    /// Radiant intensity arriving along the unit direction `omega`.
    ///
    /// `omega` points from the shaded point back towards the light, the same
    /// vector shading uses as its light direction.
    fn emission(&self, omega: Vec3) -> Color;
}

/// Isotropic point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub power: Color,
}

impl PointLight {
    pub fn new(position: Vec3, power: Color) -> Self {
        Self { position, power }
    }
}

impl Light for PointLight {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn power(&self) -> Color {
        self.power
    }

    /// Same intensity in every direction: the light's power.
    fn emission(&self, omega: Vec3) -> Color {
        debug_assert_unit!(omega);
        self.power
    }
}

/// Spotlight with a cosine-power falloff around its axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub power: Color,
    /// Unit axis the spot points along
    pub direction: Vec3,
    /// Exponent of the cosine lobe, larger is tighter
    pub falloff: f32,
}

impl SpotLight {
    /// Create a spotlight. `direction` must be unit length.
    pub fn new(position: Vec3, power: Color, direction: Vec3, falloff: f32) -> Self {
        debug_assert_unit!(direction);
        Self {
            position,
            power,
            direction,
            falloff,
        }
    }
}

impl Light for SpotLight {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn power(&self) -> Color {
        self.power
    }

    /// `power * (falloff + 2) * max(0, direction · -omega)^falloff`
    ///
    /// The `falloff + 2` factor keeps the lobe's total output tied to
    /// `power` as the exponent changes. Directions behind the spot get
    /// nothing, including when `falloff` is zero.
    fn emission(&self, omega: Vec3) -> Color {
        debug_assert_unit!(omega);

        let cos_angle = self.direction.dot(-omega);
        if cos_angle <= 0.0 {
            return Color::ZERO;
        }
        self.power * (self.falloff + 2.0) * cos_angle.powf(self.falloff)
    }
}
