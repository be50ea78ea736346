//! Cubic Bezier patrol paths for enemies.
//!
//! Each enemy walks a randomized curve to a random destination 10-20 units
//! away, then picks a fresh curve from wherever it ended up. All points are
//! kept inside the arena; clamping a control point can bend the curve, which
//! is accepted.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use sunset_core::components::BezierPath;
use sunset_core::constants::*;
use sunset_core::types::{heading_of, horizontal};

use crate::geometry::clamp_to_map;

/// Generate a new path starting at `start`.
pub fn generate(start: Vec3, rng: &mut impl Rng) -> BezierPath {
    let bearing = rng.gen_range(0.0..TAU);
    let distance = rng.gen_range(PATH_MIN_DISTANCE..=PATH_MAX_DISTANCE);

    let destination = clamp_to_map(
        start + distance * Vec3::new(bearing.cos(), 0.0, bearing.sin()),
    );

    let along = horizontal(destination - start).normalize_or_zero();
    let side = Vec3::new(-along.z, 0.0, along.x);

    let control1 = clamp_to_map(
        start
            + along * (PATH_CONTROL1_ALONG * distance)
            + side * (PATH_CONTROL_SIDEWAYS * distance),
    );
    let control2 = clamp_to_map(
        start + along * (PATH_CONTROL2_ALONG * distance)
            - side * (PATH_CONTROL_SIDEWAYS * distance),
    );

    let total_arc_length =
        start.distance(control1) + control1.distance(control2) + control2.distance(destination);

    BezierPath {
        start,
        control1,
        control2,
        destination,
        progress: 0.0,
        total_arc_length,
    }
}

/// Point on the curve at parameter `t` (clamped to [0, 1]).
pub fn evaluate(path: &BezierPath, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    path.start * (u * u * u)
        + path.control1 * (3.0 * u * u * t)
        + path.control2 * (3.0 * u * t * t)
        + path.destination * (t * t * t)
}

/// Move `progress` forward by `speed * dt` units of estimated arc length.
pub fn advance(path: &mut BezierPath, speed: f32, dt: f32) {
    if path.total_arc_length <= f32::EPSILON {
        path.progress = 1.0;
        return;
    }
    path.progress = (path.progress + speed * dt / path.total_arc_length).min(1.0);
}

/// Heading along the curve at the current progress.
///
/// Looks slightly ahead on the curve; at the end of the path it faces the
/// destination instead. Returns `previous` when the displacement is too short.
pub fn facing(path: &BezierPath, position: Vec3, previous: f32) -> f32 {
    let target = if path.is_finished() {
        path.destination
    } else {
        evaluate(path, (path.progress + PATH_FACING_LOOKAHEAD).min(1.0))
    };

    let delta = horizontal(target - position);
    if delta.length() <= DIRECTION_EPSILON {
        previous
    } else {
        heading_of(delta)
    }
}

/// Step a walker along its path for one tick, starting a new path when the
/// current one is finished.
///
/// Returns the new position and heading.
pub fn step(
    path: &mut BezierPath,
    position: Vec3,
    heading: f32,
    speed: f32,
    dt: f32,
    rng: &mut impl Rng,
) -> (Vec3, f32) {
    if path.is_finished() {
        *path = generate(position, rng);
    }

    advance(path, speed, dt);
    let next = clamp_to_map(evaluate(path, path.progress));
    let heading = facing(path, next, heading);
    (next, heading)
}
