//! Scene container and the per-render data handed to the tracer.

use crate::hittable::{Hittable, HittableList, Intersection};
use crate::Ray;
use whitted_core::{Light, RenderParams};
use whitted_math::Interval;

/// Lights and primitives of one scene.
///
/// Owns its lights for the whole render; the tracer only borrows it.
#[derive(Default)]
pub struct Scene {
    pub lights: Vec<Box<dyn Light>>,
    objects: HittableList,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_light(&mut self, light: impl Light + 'static) {
        self.lights.push(Box::new(light));
    }

    pub fn add_object(&mut self, object: impl Hittable + 'static) {
        self.objects.add(Box::new(object));
    }

    /// Number of primitives in the scene.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Closest hit in front of the ray origin.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        self.objects.hit(ray, Interval::from_min(0.0))
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        self.objects.hit(ray, ray_t)
    }
}

/// Parameters plus the scene being rendered.
pub struct RenderContext<'a> {
    pub params: RenderParams,
    scene: &'a Scene,
}

impl<'a> RenderContext<'a> {
    pub fn new(params: RenderParams, scene: &'a Scene) -> Self {
        Self { params, scene }
    }

    pub fn get_active_scene(&self) -> &'a Scene {
        self.scene
    }
}

/// Everything the trace functions read. Immutable for the whole render.
pub struct RenderData<'a> {
    pub context: RenderContext<'a>,
}

impl<'a> RenderData<'a> {
    pub fn new(params: RenderParams, scene: &'a Scene) -> Self {
        Self {
            context: RenderContext::new(params, scene),
        }
    }
}
