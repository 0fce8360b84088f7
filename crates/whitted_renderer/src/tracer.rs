//! Recursive Whitted tracing.
//!
//! [`trace_recursive`] is the single entry point for every ray, primary or
//! secondary. It owns the depth cutoff; the reflection and transmission
//! helpers only build the bounce ray and hand it back with `depth + 1`.

use crate::{Ray, RenderData};
use whitted_core::{Color, RenderParams};
use whitted_math::{debug_assert_unit, mirror, refract, Vec3};

use crate::shading::evaluate_phong;

/// Radiance arriving along `ray`, recursing through mirrors and dielectrics.
///
/// Returns black once `depth` reaches `max_depth`, and the configured
/// background for rays that leave the scene.
pub fn trace_recursive(data: &RenderData, ray: &Ray, depth: u32) -> Color {
    trace_channel(data, ray, depth, None)
}

/// Core of [`trace_recursive`].
///
/// `channel` is set once dispersion has split a ray by color. Every bounce
/// below that point refracts with the index of that channel only, so a
/// dispersed ray never splits again.
fn trace_channel(data: &RenderData, ray: &Ray, depth: u32, channel: Option<usize>) -> Color {
    debug_assert_unit!(ray.direction());

    let params = &data.context.params;
    if depth >= params.max_depth {
        log::trace!("Ray terminated at depth {}", depth);
        return Color::ZERO;
    }

    let Some(hit) = data.context.get_active_scene().intersect(ray) else {
        return params.background;
    };

    let mat = hit.sample();
    let p = hit.p;
    // Hit normals face against the ray, i.e. towards the viewer
    let n = hit.normal;
    let v = -ray.direction();

    let mut radiance = mat.emission + evaluate_phong(data, &mat, p, n, v);

    if mat.is_reflective() {
        radiance += mat.k_r * reflect_channel(data, depth, p, n, v, channel);
    }

    if mat.is_transmissive() {
        // Leaving the material inverts the relative index
        let eta_of_channel = if hit.front_face {
            mat.eta_of_channel
        } else {
            mat.eta_of_channel.recip()
        };
        radiance += mat.k_t * transmissive_channel(data, depth, p, n, v, eta_of_channel, channel);
    }

    radiance
}

/// Mirror ray for view direction `v` at `p`, stepped `ray_epsilon` off the surface.
pub fn reflection_ray(params: &RenderParams, p: Vec3, n: Vec3, v: Vec3) -> Ray {
    debug_assert_unit!(n);
    debug_assert_unit!(v);

    Ray::offset(p, mirror(v, n), params.ray_epsilon)
}

/// Refracted ray entering a medium of relative index `eta`.
///
/// `n` faces the viewer. Returns `None` on total internal reflection.
pub fn transmission_ray(params: &RenderParams, p: Vec3, n: Vec3, v: Vec3, eta: f32) -> Option<Ray> {
    debug_assert_unit!(n);
    debug_assert_unit!(v);

    refract(-v, n, 1.0 / eta).map(|direction| Ray::offset(p, direction, params.ray_epsilon))
}

/// Radiance arriving from the mirror direction. Not attenuated here.
pub fn evaluate_reflection(data: &RenderData, depth: u32, p: Vec3, n: Vec3, v: Vec3) -> Color {
    reflect_channel(data, depth, p, n, v, None)
}

fn reflect_channel(
    data: &RenderData,
    depth: u32,
    p: Vec3,
    n: Vec3,
    v: Vec3,
    channel: Option<usize>,
) -> Color {
    let ray = reflection_ray(&data.context.params, p, n, v);
    trace_channel(data, &ray, depth + 1, channel)
}

/// Radiance arriving through the surface for relative index `eta`.
///
/// Under total internal reflection all light comes from the mirror direction.
pub fn evaluate_transmission(
    data: &RenderData,
    depth: u32,
    p: Vec3,
    n: Vec3,
    v: Vec3,
    eta: f32,
) -> Color {
    transmit_channel(data, depth, p, n, v, eta, None)
}

fn transmit_channel(
    data: &RenderData,
    depth: u32,
    p: Vec3,
    n: Vec3,
    v: Vec3,
    eta: f32,
    channel: Option<usize>,
) -> Color {
    match transmission_ray(&data.context.params, p, n, v, eta) {
        Some(ray) => trace_channel(data, &ray, depth + 1, channel),
        None => reflect_channel(data, depth, p, n, v, channel),
    }
}

/// Schlick's approximation of the Fresnel reflectance.
///
/// `cos_i` is the cosine between the normal and the view direction, `eta`
/// the relative index of the medium being entered. Leaving a denser medium
/// uses the transmitted angle, and returns 1 past the critical angle.
pub fn fresnel_schlick(cos_i: f32, eta: f32) -> f32 {
    let cos_i = cos_i.clamp(0.0, 1.0);

    let cosine = if eta < 1.0 {
        let sin_t_squared = (1.0 - cos_i * cos_i) / (eta * eta);
        if sin_t_squared >= 1.0 {
            return 1.0;
        }
        (1.0 - sin_t_squared).sqrt()
    } else {
        cos_i
    };

    let r0 = ((1.0 - eta) / (1.0 + eta)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

/// Transmission through a dielectric with a single index of refraction.
///
/// With `fresnel` enabled the result blends reflection and transmission by
/// the Fresnel reflectance; otherwise it is plain transmission.
pub fn handle_transmissive_material_single_ior(
    data: &RenderData,
    depth: u32,
    p: Vec3,
    n: Vec3,
    v: Vec3,
    eta: f32,
) -> Color {
    single_ior_channel(data, depth, p, n, v, eta, None)
}

fn single_ior_channel(
    data: &RenderData,
    depth: u32,
    p: Vec3,
    n: Vec3,
    v: Vec3,
    eta: f32,
    channel: Option<usize>,
) -> Color {
    if !data.context.params.fresnel {
        return transmit_channel(data, depth, p, n, v, eta, channel);
    }

    let reflectance = fresnel_schlick(n.dot(v), eta);
    if reflectance >= 1.0 {
        return reflect_channel(data, depth, p, n, v, channel);
    }

    reflectance * reflect_channel(data, depth, p, n, v, channel)
        + (1.0 - reflectance) * transmit_channel(data, depth, p, n, v, eta, channel)
}

/// Transmission with per-channel indices of refraction.
///
/// With `dispersion` enabled and differing indices, each color channel is
/// traced separately with its own index and keeps only its own channel of
/// the result. Otherwise a single ray uses the mean index.
pub fn handle_transmissive_material(
    data: &RenderData,
    depth: u32,
    p: Vec3,
    n: Vec3,
    v: Vec3,
    eta_of_channel: Vec3,
) -> Color {
    transmissive_channel(data, depth, p, n, v, eta_of_channel, None)
}

fn transmissive_channel(
    data: &RenderData,
    depth: u32,
    p: Vec3,
    n: Vec3,
    v: Vec3,
    eta_of_channel: Vec3,
    channel: Option<usize>,
) -> Color {
    // Already split: stay on this channel's index
    if let Some(c) = channel {
        return single_ior_channel(data, depth, p, n, v, eta_of_channel[c], channel);
    }

    let uniform = eta_of_channel.x == eta_of_channel.y && eta_of_channel.x == eta_of_channel.z;

    if data.context.params.dispersion && !uniform {
        let split =
            |c: usize| single_ior_channel(data, depth, p, n, v, eta_of_channel[c], Some(c))[c];
        return Color::new(split(0), split(1), split(2));
    }

    let eta = (eta_of_channel.x + eta_of_channel.y + eta_of_channel.z) / 3.0;
    single_ior_channel(data, depth, p, n, v, eta, None)
}
