//! Hittable trait and Intersection for ray-object queries.

use crate::Ray;
use whitted_core::{Material, MaterialSample};
use whitted_math::{Interval, Vec3};

/// Record of a ray-object intersection.
///
/// Owned by the caller for the duration of one trace step.
#[derive(Clone)]
pub struct Intersection<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
    /// Surface coordinates
    pub u: f32,
    pub v: f32,
    /// Distance along the ray
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> Intersection<'a> {
    /// Build an intersection at `ray.at(t)` from the surface's outward normal.
    ///
    /// The stored normal is flipped when needed so it faces against the ray,
    /// and `front_face` records which side was hit.
    pub fn new(
        ray: &Ray,
        t: f32,
        outward_normal: Vec3,
        material: &'a dyn Material,
        (u, v): (f32, f32),
    ) -> Self {
        // If the ray and normal point in the same direction, we're inside
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p: ray.at(t),
            normal,
            material,
            u,
            v,
            t,
            front_face,
        }
    }

    /// Evaluate the material at this hit.
    pub fn sample(&self) -> MaterialSample {
        self.material.sample(self.p, self.u, self.v)
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with parameter strictly inside `ray_t`, if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>>;
}

/// A list of hittable objects, searched linearly for the closest hit.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        let mut closest: Option<Intersection<'_>> = None;

        for object in &self.objects {
            let max = closest.as_ref().map_or(ray_t.max, |hit| hit.t);
            if let Some(hit) = object.hit(ray, ray_t.with_max(max)) {
                closest = Some(hit);
            }
        }

        closest
    }
}
