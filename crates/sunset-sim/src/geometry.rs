//! Ray and overlap tests used by combat and player collision.

use glam::Vec3;

use sunset_core::constants::{MAP_MAX_X, MAP_MAX_Z, MAP_MIN_X, MAP_MIN_Z, PARALLEL_EPSILON};
use sunset_core::types::Aabb;

/// Slab test of a ray against an axis-aligned box.
///
/// Returns the entry distance along `dir`, or `None` on a miss.
/// A ray starting inside the box reports `Some(0.0)`.
pub fn ray_aabb_intersect(origin: Vec3, dir: Vec3, bounds: &Aabb) -> Option<f32> {
    let mut tmin = 0.0f32;
    let mut tmax = f32::MAX;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        let lo = bounds.min[axis];
        let hi = bounds.max[axis];

        if d.abs() < PARALLEL_EPSILON {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let mut t1 = (lo - o) * inv;
        let mut t2 = (hi - o) * inv;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }

        tmin = tmin.max(t1);
        tmax = tmax.min(t2);
        if tmax < tmin {
            return None;
        }
    }

    (tmin >= 0.0).then_some(tmin)
}

/// Proximity test of a ray against a sphere around `center`.
///
/// `dir` must be unit length. Only the closest approach is checked, so the
/// target behaves like a capsule along the ray; range limits are the caller's.
pub fn ray_sphere_proximity_hit(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let t = (center - origin).dot(dir);
    if t <= 0.0 {
        return None;
    }
    let closest = origin + dir * t;
    (closest.distance_squared(center) <= radius * radius).then_some(t)
}

/// Whether a sphere touches an axis-aligned box.
pub fn sphere_aabb_overlap(center: Vec3, radius: f32, bounds: &Aabb) -> bool {
    bounds.closest_point(center).distance_squared(center) <= radius * radius
}

/// Clamp a point into the arena on X and Z. Y is left alone.
pub fn clamp_to_map(p: Vec3) -> Vec3 {
    Vec3::new(
        p.x.clamp(MAP_MIN_X, MAP_MAX_X),
        p.y,
        p.z.clamp(MAP_MIN_Z, MAP_MAX_Z),
    )
}

/// Whether a point lies inside the arena on X and Z.
pub fn inside_map(p: Vec3) -> bool {
    (MAP_MIN_X..=MAP_MAX_X).contains(&p.x) && (MAP_MIN_Z..=MAP_MAX_Z).contains(&p.z)
}
