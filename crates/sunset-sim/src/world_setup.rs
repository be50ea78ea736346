//! Spawn factories for the arena: player placement, box layout and wave rings.

use std::f32::consts::TAU;

use glam::Vec3;

use sunset_core::components::{Obstacle, Player};
use sunset_core::constants::*;
use sunset_core::types::ModelBounds;

use crate::geometry::clamp_to_map;

/// Place the player so its model is centered on the origin and rests on the ground.
pub fn spawn_player(bounds: &ModelBounds) -> Player {
    let center = bounds.center();
    let position = Vec3::new(
        -center.x * PLAYER_SCALE,
        GROUND_Y - bounds.min.y * PLAYER_SCALE,
        -center.z * PLAYER_SCALE,
    );
    Player::new(position, center)
}

/// The fixed box and barrel layout, relative to the player's spawn point.
pub fn default_obstacles(player_position: Vec3) -> Vec<Obstacle> {
    let crate_small = Vec3::splat(0.4);
    let crate_large = Vec3::splat(BOX_DEFAULT_SCALE);
    let barrel = Vec3::new(0.3, 0.6, 0.3);

    // (x offset, z offset, yaw, scale)
    let layout = [
        // Corners
        (7.0, 7.0, 0.0, crate_small),
        (-7.0, 7.0, 0.5, crate_large),
        (7.0, -7.0, 1.0, barrel),
        (-7.0, -7.0, 1.5, crate_small),
        // Near the axes
        (8.0, 2.0, 0.0, crate_large),
        (-8.0, -2.0, 0.0, crate_small),
        (2.0, 8.0, 0.0, barrel),
        (-2.0, -8.0, 0.0, crate_large),
        // Inner ring
        (6.0, 3.0, 0.8, crate_small),
        (-6.0, -3.0, 1.2, barrel),
        (3.0, 6.0, 0.3, crate_small),
        (-3.0, -6.0, 0.7, crate_large),
    ];

    layout
        .into_iter()
        .map(|(dx, dz, yaw, scale)| {
            let position = Vec3::new(
                player_position.x + dx,
                BOX_SPAWN_Y,
                player_position.z + dz,
            );
            Obstacle::new(position, yaw, scale)
        })
        .collect()
}

/// `count` spawn points evenly spaced on a ring around `center`, at enemy
/// ground height and clamped into the arena.
pub fn ring_spawn_points(center: Vec3, radius: f32, count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32;
            clamp_to_map(Vec3::new(
                center.x + radius * angle.cos(),
                ENEMY_SPAWN_Y,
                center.z + radius * angle.sin(),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_spawn_rests_on_ground() {
        let bounds = ModelBounds {
            min: Vec3::new(-1.0, 0.0, -1.0),
            max: Vec3::new(3.0, 6.0, 1.0),
        };
        let player = spawn_player(&bounds);
        assert!((player.position.x - -0.3).abs() < 1e-6);
        assert!(player.position.z.abs() < 1e-6);
        assert!((player.position.y - GROUND_Y).abs() < 1e-6);
        assert_eq!(player.model_center, Vec3::new(1.0, 3.0, 0.0));
    }

    #[test]
    fn test_default_layout() {
        let boxes = default_obstacles(Vec3::ZERO);
        assert_eq!(boxes.len(), 12);
        assert!(boxes.iter().all(|b| b.position.y == BOX_SPAWN_Y));
        assert_eq!(boxes[2].scale, Vec3::new(0.3, 0.6, 0.3));
        assert_eq!(boxes[8].rotation_y, 0.8);
    }

    #[test]
    fn test_ring_points() {
        let points = ring_spawn_points(Vec3::ZERO, 8.0, 4);
        assert_eq!(points.len(), 4);
        for p in &points {
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - 8.0).abs() < 1e-4);
            assert_eq!(p.y, ENEMY_SPAWN_Y);
        }
        assert!((points[0].x - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_ring_points_clamped_near_wall() {
        let points = ring_spawn_points(Vec3::new(22.0, 0.0, 0.0), 8.0, 6);
        assert!(points.iter().all(|p| p.x <= MAP_MAX_X));
        assert_eq!(points[0].x, MAP_MAX_X);
    }
}
