// Re-export glam for convenience
pub use glam::*;

// Whitted math types
mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{is_unit, mirror, reflect, refract, UNIT_EPSILON};

/// Debug-assert that a vector is unit length within [`UNIT_EPSILON`].
///
/// Directions and normals handed to geometry and shading routines are
/// required to be normalized by the caller; this checks that precondition
/// in debug builds and compiles to nothing observable in release.
#[macro_export]
macro_rules! debug_assert_unit {
    ($v:expr) => {{
        let v: $crate::Vec3 = $v;
        debug_assert!(
            $crate::is_unit(v),
            "`{}` is not unit length: {:?} (length {})",
            stringify!($v),
            v,
            v.length()
        );
    }};
}
