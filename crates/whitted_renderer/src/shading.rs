//! Local illumination: shadow queries and the Phong model.

use crate::{Hittable, Ray, RenderData};
use whitted_core::{Color, MaterialSample};
use whitted_math::{debug_assert_unit, reflect, Interval, Vec3};

/// True if nothing in the active scene blocks the segment from `p` to `light_pos`.
///
/// The shadow ray starts `ray_epsilon` off `p` and only hits closer than
/// the light count as occluders.
pub fn visible(data: &RenderData, light_pos: Vec3, p: Vec3) -> bool {
    let epsilon = data.context.params.ray_epsilon;
    let to_light = light_pos - p;
    let distance = to_light.length();
    if distance <= epsilon {
        return true;
    }

    let direction = to_light / distance;
    let shadow_ray = Ray::offset(p, direction, epsilon);
    let segment = Interval::new(0.0, distance - epsilon);

    data.context
        .get_active_scene()
        .hit(&shadow_ray, segment)
        .is_none()
}

/// Local Phong radiance at `p` summed over all lights of the active scene.
///
/// `n` is the unit surface normal and `v` the unit direction from `p` towards
/// the viewer. Each light contributes
///
/// ```text
/// IL * (diffuse + specular) + k_a * power / d²
/// IL = emission(L) * visibility * [N·L > 0] / d²
/// ```
///
/// The ambient term uses the light's raw power, not its emission profile.
/// Disabled features contribute zero.
pub fn evaluate_phong(
    data: &RenderData,
    mat: &MaterialSample,
    p: Vec3,
    n: Vec3,
    v: Vec3,
) -> Color {
    debug_assert_unit!(n);
    debug_assert_unit!(v);

    let params = &data.context.params;
    let mut contribution = Color::ZERO;

    for light in &data.context.get_active_scene().lights {
        let light_pos = light.position();
        let to_light = light_pos - p;
        let distance_squared = to_light.length_squared();
        if distance_squared <= 0.0 {
            // Light sits on the shaded point, no defined direction
            continue;
        }

        let light_dir = to_light / distance_squared.sqrt();
        let cos_theta = n.dot(light_dir);

        let visibility = if params.shadows && !visible(data, light_pos, p) {
            0.0
        } else {
            1.0
        };

        let diffuse = if params.diffuse {
            mat.k_d * cos_theta.max(0.0)
        } else {
            Color::ZERO
        };

        let specular = if params.specular {
            let cos_psi = v.dot(reflect(-light_dir, n));
            mat.k_s * cos_psi.max(0.0).powf(mat.n)
        } else {
            Color::ZERO
        };

        let angle_gate = if cos_theta > 0.0 { 1.0 } else { 0.0 };
        let incident = light.emission(light_dir) * visibility * angle_gate / distance_squared;

        let ambient = if params.ambient { mat.k_a } else { Color::ZERO };

        contribution += incident * (diffuse + specular) + ambient * light.power() / distance_squared;
    }

    contribution
}
