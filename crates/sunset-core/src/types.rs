//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::DIRECTION_EPSILON;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each simulated frame).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` reaching `half_extents` along each axis.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Point inside the box closest to `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }
}

/// Model-space bounding box of a mesh, as reported by the asset loader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for ModelBounds {
    fn default() -> Self {
        Self {
            min: Vec3::new(-1.0, 0.0, -1.0),
            max: Vec3::new(1.0, 6.0, 1.0),
        }
    }
}

impl ModelBounds {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// A half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    /// Returns `None` when the direction is too short to normalize.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let length = direction.length();
        if length <= DIRECTION_EPSILON {
            return None;
        }
        Some(Self {
            origin,
            direction: direction / length,
        })
    }

    /// Point at parametric distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Heading (radians about +Y) of a horizontal vector: 0 faces -Z, PI/2 faces +X.
pub fn heading_of(v: Vec3) -> f32 {
    v.x.atan2(-v.z)
}

/// Unit forward vector for a heading.
pub fn forward_from_heading(heading: f32) -> Vec3 {
    Vec3::new(heading.sin(), 0.0, -heading.cos())
}

/// Unit right vector for a heading.
pub fn right_from_heading(heading: f32) -> Vec3 {
    Vec3::new(heading.cos(), 0.0, heading.sin())
}

/// `v` with its vertical component removed.
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
