//! Unit-vector helpers shared by geometry and shading.

use crate::Vec3;

/// Tolerance for unit-length checks on directions and normals.
pub const UNIT_EPSILON: f32 = 1e-4;

/// True if `v` has length 1 within [`UNIT_EPSILON`].
#[inline]
pub fn is_unit(v: Vec3) -> bool {
    (v.length() - 1.0).abs() < UNIT_EPSILON
}

/// Reflect an incident vector `v` about the normal `n`.
///
/// `v` travels towards the surface. Returns `v - 2 (v·n) n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Mirror an outgoing vector `v` (pointing away from the surface) about `n`.
///
/// Returns `2 (n·v) n - v`, the direction light must arrive from to leave
/// along `v` by perfect specular reflection.
#[inline]
pub fn mirror(v: Vec3, n: Vec3) -> Vec3 {
    2.0 * n.dot(v) * n - v
}

/// Refract the unit incident vector `i` through a surface with unit normal `n`.
///
/// `n` must face against `i` (`n·i <= 0`) and `ratio` is `eta_incident /
/// eta_transmitted`. Returns `None` on total internal reflection.
#[inline]
pub fn refract(i: Vec3, n: Vec3, ratio: f32) -> Option<Vec3> {
    let cos_i = -n.dot(i);
    let k = 1.0 - ratio * ratio * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }
    Some((ratio * i + (ratio * cos_i - k.sqrt()) * n).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

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
    fn test_is_unit() {
        assert!(is_unit(Vec3::X));
        assert!(is_unit(Vec3::new(1.0, 1.0, 1.0).normalize()));
        assert!(!is_unit(Vec3::ZERO));
        assert!(!is_unit(Vec3::new(0.0, 1.01, 0.0)));
    }

    #[test]
    fn test_reflect_and_mirror_agree() {
        let n = Vec3::Y;
        let incoming = Vec3::new(1.0, -1.0, 0.0).normalize();

        assert!((reflect(incoming, n) - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-6);
        // Mirroring the outgoing view direction lands on the reversed incident direction
        let view = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((mirror(view, n) + incoming).length() < 1e-6);
    }

    #[test]
    fn test_mirror_preserves_length_and_angle() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let n = random_unit(&mut rng);
            let v = random_unit(&mut rng);
            let r = mirror(v, n);
            assert!(is_unit(r));
            assert!((r.dot(n) - v.dot(n)).abs() < 1e-5);
        }
    }

    #[test]
    fn test_refract_straight_through_at_normal_incidence() {
        let t = refract(-Vec3::Y, Vec3::Y, 1.0 / 1.5).unwrap();
        assert!((t - -Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_refract_obeys_snell() {
        let ratio = 1.0 / 1.33;
        let i = Vec3::new(1.0, -1.0, 0.0).normalize();
        let t = refract(i, Vec3::Y, ratio).unwrap();

        let sin_i = i.cross(Vec3::Y).length();
        let sin_t = t.cross(Vec3::Y).length();
        assert!((sin_i * ratio - sin_t).abs() < 1e-5);
        assert!(t.y < 0.0);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Leaving glass at a grazing angle
        let i = Vec3::new(0.9, -0.1, 0.0).normalize();
        assert!(refract(i, Vec3::Y, 1.5).is_none());
    }
}
