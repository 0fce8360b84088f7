use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// Every routine that consumes a ray expects `direction` to be unit length;
/// the constructor does not normalize.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray starting `epsilon` along `direction` from `point`.
    ///
    /// Secondary rays use this to step off the surface they were spawned
    /// from so they don't immediately re-hit it.
    #[inline]
    pub fn offset(point: Vec3, direction: Vec3, epsilon: f32) -> Self {
        Self::new(point + epsilon * direction, direction)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::Z,
        }
    }
}
