//! Sphere primitive and the standalone ray-sphere test.

use crate::{
    hittable::{Hittable, Intersection},
    Ray,
};
use std::f32::consts::PI;
use whitted_core::Material;
use whitted_math::{debug_assert_unit, Interval, Vec3};

/// Nearest forward hit of a ray with a sphere.
///
/// Solves `a t² + b t + c = 0` and returns the smaller root when it is
/// non-negative. Only the near root is considered: a ray starting inside
/// the sphere (near root behind the origin) reports no hit even though the
/// far root lies ahead.
///
/// `ray_direction` must be unit length.
pub fn intersect_sphere(
    ray_origin: Vec3,
    ray_direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    debug_assert_unit!(ray_direction);

    let oc = ray_origin - center;
    let a = ray_direction.dot(ray_direction);
    let b = 2.0 * oc.dot(ray_direction);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t < 0.0 {
        return None;
    }
    Some(t)
}

/// A sphere primitive.
pub struct Sphere<M: Material> {
    center: Vec3,
    radius: f32,
    material: M,
}

impl<M: Material> Sphere<M> {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: M) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Far root of the ray-sphere quadratic, where a ray leaves the sphere.
    /// Assumes a unit-length direction.
    fn exit_distance(&self, ray: &Ray) -> Option<f32> {
        let oc = self.center - ray.origin();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - c;
        if discriminant < 0.0 {
            return None;
        }
        Some(h + discriminant.sqrt())
    }

    /// Get the UV coordinates for a point on the unit sphere.
    fn get_sphere_uv(p: Vec3) -> (f32, f32) {
        // theta: angle down from +Y
        // phi: angle around Y axis from +X
        let theta = (-p.y).acos();
        let phi = (-p.z).atan2(p.x) + PI;

        (phi / (2.0 * PI), theta / PI)
    }
}

impl<M: Material + 'static> Hittable for Sphere<M> {
    /// Unlike [`intersect_sphere`], falls back to the far root so rays
    /// travelling inside a transmissive sphere find their exit.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        let root = match intersect_sphere(ray.origin(), ray.direction(), self.center, self.radius) {
            Some(t) if ray_t.surrounds(t) => t,
            _ => self.exit_distance(ray).filter(|&t| ray_t.surrounds(t))?,
        };

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(Intersection::new(
            ray,
            root,
            outward_normal,
            &self.material,
            Self::get_sphere_uv(outward_normal),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use whitted_core::{Color, PhongMaterial};

    fn random_unit(rng: &mut StdRng) -> Vec3 {
        loop {
            let v = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let len_sq = v.length_squared();
            if len_sq > 1e-4 && len_sq <= 1.0 {
                return v / len_sq.sqrt();
            }
        }
    }

    #[test]
    fn test_intersect_sphere_head_on() {
        let t = intersect_sphere(Vec3::ZERO, -Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0).unwrap();
        assert!((t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_intersect_sphere_hits_surface_from_outside() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let center = Vec3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            let radius = rng.gen_range(0.1..3.0);
            // Start outside the sphere and aim somewhere on it
            let origin = center + random_unit(&mut rng) * rng.gen_range(radius * 1.5..radius * 10.0);
            let target = center + random_unit(&mut rng) * radius * 0.5;
            let direction = (target - origin).normalize();

            let t = intersect_sphere(origin, direction, center, radius)
                .expect("ray aimed at the sphere should hit");
            let p = origin + t * direction;
            assert!(((p - center).length() - radius).abs() < 1e-3 * radius.max(1.0));
        }
    }

    #[test]
    fn test_intersect_sphere_misses_when_line_passes_by() {
        // Line passes 2 units from the center of a unit sphere
        let origin = Vec3::new(2.0, 0.0, 5.0);
        assert!(intersect_sphere(origin, -Vec3::Z, Vec3::ZERO, 1.0).is_none());

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let direction = random_unit(&mut rng);
            // Offset the origin perpendicular to the direction by more than the radius
            let side = direction.any_orthonormal_vector();
            let origin = side * rng.gen_range(1.1..5.0) - direction * rng.gen_range(0.0..5.0);
            assert!(intersect_sphere(origin, direction, Vec3::ZERO, 1.0).is_none());
        }
    }

    #[test]
    fn test_intersect_sphere_from_inside_reports_no_hit() {
        // Near root lies behind the origin; the far root is not consulted
        assert!(intersect_sphere(Vec3::ZERO, Vec3::X, Vec3::ZERO, 1.0).is_none());
        assert!(intersect_sphere(Vec3::new(0.2, 0.1, 0.0), -Vec3::Y, Vec3::ZERO, 2.0).is_none());
    }

    #[test]
    fn test_intersect_sphere_behind_origin() {
        assert!(intersect_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            PhongMaterial::diffuse(Color::splat(0.5)),
        );

        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let hit = sphere.hit(&ray, Interval::from_min(0.001)).unwrap();

        assert!((hit.t - 0.5).abs() < 0.001); // Should hit at t=0.5
        assert!(hit.front_face);
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_from_inside_finds_exit() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, PhongMaterial::glass(1.5));

        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let hit = sphere.hit(&ray, Interval::from_min(0.001)).unwrap();

        assert!((hit.t - 1.0).abs() < 1e-5);
        assert!(!hit.front_face);
        // Normal flipped to face back along the ray
        assert!((hit.normal + Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_skips_near_root_below_range() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, PhongMaterial::glass(1.5));

        // Entry at t = 3 lies before the range; the exit at t = 5 is taken
        let ray = Ray::new(Vec3::new(0.0, 0.0, 4.0), -Vec3::Z);
        let hit = sphere.hit(&ray, Interval::from_min(4.0)).unwrap();

        assert!((hit.t - 5.0).abs() < 1e-5);
        assert!(!hit.front_face);

        // Both roots past the range maximum
        assert!(sphere.hit(&ray, Interval::new(0.001, 2.0)).is_none());
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            PhongMaterial::diffuse(Color::splat(0.5)),
        );

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(sphere.hit(&ray, Interval::from_min(0.001)).is_none());
    }
}
