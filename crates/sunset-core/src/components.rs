//! Entity data for the player, enemies, boxes and waves.
//!
//! These are mostly plain data. Methods are limited to the invariants
//! each entity owns (health floor, completion latch, derived vectors);
//! movement, combat and spawning live in the simulation systems.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{CameraMode, MovementState};
use crate::types::{forward_from_heading, right_from_heading, Aabb};

/// Directional input flags for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub running: bool,
}

impl MovementInput {
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Orbit camera parameters for third-person view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThirdPersonCamera {
    pub distance: f32,
    /// Height of the look-at point above the player.
    pub height: f32,
    pub angle_horizontal: f32,
    pub angle_vertical: f32,
}

impl Default for ThirdPersonCamera {
    fn default() -> Self {
        Self {
            distance: CAMERA_DEFAULT_DISTANCE,
            height: CAMERA_DEFAULT_HEIGHT,
            angle_horizontal: 0.0,
            angle_vertical: CAMERA_DEFAULT_VERTICAL_ANGLE,
        }
    }
}

/// Look angles for first-person view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FirstPersonCamera {
    pub yaw: f32,
    pub pitch: f32,
}

/// The player-controlled character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
    /// Facing angle about +Y (radians).
    pub rotation_y: f32,
    pub forward: Vec3,
    pub right: Vec3,
    /// Center of the player mesh in model space.
    pub model_center: Vec3,

    pub movement_state: MovementState,
    pub walk_speed: f32,
    pub run_speed: f32,
    pub current_speed: f32,
    pub input: MovementInput,

    pub health: f32,
    pub max_health: f32,

    // --- Weapon ---
    pub magazine_ammo: u32,
    pub magazine_size: u32,
    /// Seconds until the next shot is allowed.
    pub shoot_cooldown: f32,
    pub shoot_cooldown_time: f32,
    /// Seconds until the running reload completes.
    pub reload_time: f32,
    pub reload_time_total: f32,
    pub is_reloading: bool,

    // --- Camera ---
    pub camera_mode: CameraMode,
    pub third_person: ThirdPersonCamera,
    pub first_person: FirstPersonCamera,
}

impl Player {
    pub fn new(position: Vec3, model_center: Vec3) -> Self {
        Self {
            position,
            rotation_y: 0.0,
            forward: forward_from_heading(0.0),
            right: right_from_heading(0.0),
            model_center,
            movement_state: MovementState::Idle,
            walk_speed: PLAYER_WALK_SPEED,
            run_speed: PLAYER_RUN_SPEED,
            current_speed: 0.0,
            input: MovementInput::default(),
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            magazine_ammo: MAGAZINE_SIZE,
            magazine_size: MAGAZINE_SIZE,
            shoot_cooldown: 0.0,
            shoot_cooldown_time: SHOOT_COOLDOWN_SECS,
            reload_time: 0.0,
            reload_time_total: RELOAD_SECS,
            is_reloading: false,
            camera_mode: CameraMode::default(),
            third_person: ThirdPersonCamera::default(),
            first_person: FirstPersonCamera::default(),
        }
    }

    /// Recompute `forward` and `right` from `rotation_y`.
    pub fn refresh_direction_vectors(&mut self) {
        self.forward = forward_from_heading(self.rotation_y);
        self.right = right_from_heading(self.rotation_y);
    }

    /// Subtract `amount`, flooring at zero. No effect once dead.
    pub fn take_damage(&mut self, amount: f32) {
        if self.is_dead() {
            return;
        }
        self.health = (self.health - amount).max(0.0);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn restore_health(&mut self) {
        self.health = self.max_health;
    }
}

/// Cubic Bezier patrol path. `progress` is the curve parameter in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierPath {
    pub start: Vec3,
    pub control1: Vec3,
    pub control2: Vec3,
    pub destination: Vec3,
    pub progress: f32,
    /// Sum of the control polygon's chord lengths.
    pub total_arc_length: f32,
}

impl BezierPath {
    /// A finished zero-length path at `position`; the next update replaces it.
    pub fn stationary(position: Vec3) -> Self {
        Self {
            start: position,
            control1: position,
            control2: position,
            destination: position,
            progress: 1.0,
            total_arc_length: 0.0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Transient line drawn from an enemy to whatever its last attack hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RaycastLine {
    pub start: Vec3,
    pub end: Vec3,
    /// Simulation time (seconds) at which the ray was cast.
    pub timestamp: f32,
    pub active: bool,
}

/// A hostile wandering the arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub position: Vec3,
    pub spawn_position: Vec3,
    pub rotation_y: f32,
    pub forward: Vec3,
    pub right: Vec3,
    pub health: f32,
    pub max_health: f32,
    pub walk_speed: f32,
    pub wave_id: u32,
    /// Seconds until the next automatic attack.
    pub attack_cooldown: f32,
    pub path: BezierPath,
    pub raycast: RaycastLine,
}

impl Enemy {
    pub fn new(spawn: Vec3, wave_id: u32, max_health: f32, walk_speed: f32) -> Self {
        Self {
            position: spawn,
            spawn_position: spawn,
            rotation_y: 0.0,
            forward: forward_from_heading(0.0),
            right: right_from_heading(0.0),
            health: max_health,
            max_health,
            walk_speed,
            wave_id,
            attack_cooldown: ENEMY_ATTACK_INTERVAL_SECS,
            path: BezierPath::stationary(spawn),
            raycast: RaycastLine::default(),
        }
    }

    pub fn refresh_direction_vectors(&mut self) {
        self.forward = forward_from_heading(self.rotation_y);
        self.right = right_from_heading(self.rotation_y);
    }

    /// Subtract `amount`, flooring at zero. No effect once dead.
    pub fn take_damage(&mut self, amount: f32) {
        if self.is_dead() {
            return;
        }
        self.health = (self.health - amount).max(0.0);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }
}

/// A static box or barrel. Never moves after placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub position: Vec3,
    pub rotation_y: f32,
    pub scale: Vec3,
}

impl Obstacle {
    pub fn new(position: Vec3, rotation_y: f32, scale: Vec3) -> Self {
        Self {
            position,
            rotation_y,
            scale,
        }
    }

    /// Conservative world AABB of the rotated unit cube.
    ///
    /// The horizontal half-extent is the scale's XZ diagonal so any yaw fits inside.
    pub fn bounds(&self) -> Aabb {
        let horizontal = (self.scale.x * self.scale.x + self.scale.z * self.scale.z).sqrt();
        Aabb::from_center(
            self.position,
            Vec3::new(horizontal, self.scale.y, horizontal),
        )
    }
}

/// A batch of enemies spawned together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wave {
    pub wave_id: u32,
    /// Stable indices into the enemy vector.
    pub enemy_indices: Vec<usize>,
    pub is_active: bool,
    pub is_complete: bool,
}

impl Wave {
    pub fn new(wave_id: u32) -> Self {
        Self {
            wave_id,
            enemy_indices: Vec::new(),
            is_active: true,
            is_complete: false,
        }
    }

    /// Latch completion once every member is dead. Missing indices count as dead.
    pub fn check_completion(&mut self, enemies: &[Enemy]) -> bool {
        if self.is_complete {
            return true;
        }

        let all_dead = self
            .enemy_indices
            .iter()
            .all(|&idx| enemies.get(idx).map_or(true, Enemy::is_dead));

        if all_dead {
            self.is_complete = true;
            self.is_active = false;
        }
        all_dead
    }
}
