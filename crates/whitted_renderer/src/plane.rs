//! Infinite plane primitive.

use crate::{
    hittable::{Hittable, Intersection},
    Ray,
};
use whitted_core::Material;
use whitted_math::{debug_assert_unit, Interval, Vec3};

/// An infinite plane through `point` with unit `normal`.
pub struct Plane<M: Material> {
    point: Vec3,
    normal: Vec3,
    /// Tangent frame for surface coordinates
    tangent: Vec3,
    bitangent: Vec3,
    material: M,
}

impl<M: Material> Plane<M> {
    /// Create a plane. `normal` must be unit length.
    pub fn new(point: Vec3, normal: Vec3, material: M) -> Self {
        debug_assert_unit!(normal);
        let (tangent, bitangent) = normal.any_orthonormal_pair();
        Self {
            point,
            normal,
            tangent,
            bitangent,
            material,
        }
    }
}

impl<M: Material + 'static> Hittable for Plane<M> {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        let denom = self.normal.dot(ray.direction());

        // Ray is parallel to the plane
        if denom.abs() < 1e-8 {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if !ray_t.surrounds(t) {
            return None;
        }

        let local = ray.at(t) - self.point;
        let uv = (local.dot(self.tangent), local.dot(self.bitangent));
        Some(Intersection::new(ray, t, self.normal, &self.material, uv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_core::{Color, PhongMaterial};

    fn floor() -> Plane<PhongMaterial> {
        Plane::new(Vec3::ZERO, Vec3::Y, PhongMaterial::diffuse(Color::ONE))
    }

    #[test]
    fn test_plane_hit_from_above() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(1.0, 2.0, 0.0), -Vec3::Y);
        let hit = plane.hit(&ray, Interval::from_min(0.001)).unwrap();

        assert!((hit.t - 2.0).abs() < 1e-6);
        assert!(hit.front_face);
        assert_eq!(hit.normal, Vec3::Y);
        assert!((hit.p - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_plane_hit_from_below_flips_normal() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y);
        let hit = plane.hit(&ray, Interval::from_min(0.001)).unwrap();

        assert!(!hit.front_face);
        assert_eq!(hit.normal, -Vec3::Y);
    }

    #[test]
    fn test_plane_parallel_and_behind() {
        let parallel = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(floor().hit(&parallel, Interval::from_min(0.001)).is_none());

        let away = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        assert!(floor().hit(&away, Interval::from_min(0.001)).is_none());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not unit length")]
    fn test_plane_rejects_unnormalized_normal() {
        Plane::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), PhongMaterial::diffuse(Color::ONE));
    }
}
