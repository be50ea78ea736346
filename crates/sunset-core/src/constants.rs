//! Simulation constants and tuning parameters.

use std::f32::consts::PI;

// --- Frame timing ---

/// Largest frame delta the simulation accepts (seconds). Longer stalls are clamped.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Target host frame rate (Hz).
pub const TARGET_FRAME_RATE: u32 = 60;

// --- World bounds ---

/// Map bounds, mirrored from the ground-plane mesh extent.
pub const MAP_MIN_X: f32 = -25.0;
pub const MAP_MAX_X: f32 = 25.0;
pub const MAP_MIN_Z: f32 = -25.0;
pub const MAP_MAX_Z: f32 = 25.0;

/// Height of the ground plane.
pub const GROUND_Y: f32 = -1.1;

// --- Numeric thresholds ---

/// Vectors shorter than this are treated as zero-length.
pub const DIRECTION_EPSILON: f32 = 0.001;

/// Ray direction components below this are treated as parallel to a slab.
pub const PARALLEL_EPSILON: f32 = 1e-6;

// --- Player ---

pub const PLAYER_MAX_HEALTH: f32 = 100.0;
pub const PLAYER_WALK_SPEED: f32 = 2.0;
pub const PLAYER_RUN_SPEED: f32 = 5.0;

/// Uniform render scale of the player model.
pub const PLAYER_SCALE: f32 = 0.3;

/// Collision sphere radius used for player movement against boxes.
pub const PLAYER_COLLISION_RADIUS: f32 = 0.3;

pub const MAGAZINE_SIZE: u32 = 6;

/// Seconds between shots.
pub const SHOOT_COOLDOWN_SECS: f32 = 0.5;

/// Seconds to refill the magazine.
pub const RELOAD_SECS: f32 = 2.0;

// --- Camera ---

pub const CAMERA_DEFAULT_DISTANCE: f32 = 3.0;
pub const CAMERA_DEFAULT_HEIGHT: f32 = 1.5;
pub const CAMERA_DEFAULT_VERTICAL_ANGLE: f32 = 0.3;
pub const CAMERA_MIN_DISTANCE: f32 = 1.0;
pub const CAMERA_MAX_DISTANCE: f32 = 20.0;

/// Distance change per scroll unit.
pub const CAMERA_ZOOM_STEP: f32 = 0.1;

/// Radians per pixel of mouse movement.
pub const CAMERA_SENSITIVITY: f32 = 0.003;

/// Third-person vertical angle limits (radians).
pub const CAMERA_MIN_VERTICAL_ANGLE: f32 = -0.15;
pub const CAMERA_MAX_VERTICAL_ANGLE: f32 = PI / 3.0;

/// First-person pitch limit (radians, symmetric).
pub const FIRST_PERSON_MAX_PITCH: f32 = PI / 2.0 - 0.01;

/// Eye height above the player position in first-person mode.
pub const FIRST_PERSON_EYE_HEIGHT: f32 = 0.5;

// --- Enemies ---

pub const ENEMY_BASE_HEALTH: f32 = 100.0;
pub const ENEMY_BASE_SPEED: f32 = 1.5;

/// Uniform render scale of the enemy cube.
pub const ENEMY_SCALE: f32 = 0.3;

/// Enemy center height: the scaled unit cube rests on the ground.
pub const ENEMY_SPAWN_Y: f32 = GROUND_Y + ENEMY_SCALE;

// --- Patrol paths ---

pub const PATH_MIN_DISTANCE: f32 = 10.0;
pub const PATH_MAX_DISTANCE: f32 = 20.0;

/// Fractions of the path distance at which the control points sit along the chord.
pub const PATH_CONTROL1_ALONG: f32 = 0.33;
pub const PATH_CONTROL2_ALONG: f32 = 0.67;

/// Sideways offset of the control points, as a fraction of the path distance.
pub const PATH_CONTROL_SIDEWAYS: f32 = 0.3;

/// Parameter lookahead used to derive facing from the curve.
pub const PATH_FACING_LOOKAHEAD: f32 = 0.01;

// --- Combat ---

/// Hit radius of players and enemies for ray tests.
pub const ENTITY_HIT_RADIUS: f32 = 0.3;

/// Range of player shots.
pub const PLAYER_SHOT_RANGE: f32 = 100.0;

/// Range of enemy attacks.
pub const ENEMY_ATTACK_RANGE: f32 = 15.0;

/// Damage an enemy takes per hit, whoever fired.
pub const ENEMY_HIT_DAMAGE: f32 = 34.0;

/// Damage the player takes per enemy hit.
pub const PLAYER_HIT_DAMAGE: f32 = 10.0;

/// Seconds an enemy raycast line stays visible.
pub const ENEMY_RAYCAST_DURATION: f32 = 3.0;

/// Default seconds between automatic enemy attacks.
pub const ENEMY_ATTACK_INTERVAL_SECS: f32 = 3.0;

// --- Boxes ---

/// Default box scale.
pub const BOX_DEFAULT_SCALE: f32 = 0.5;

/// Box center height above the ground.
pub const BOX_SPAWN_Y: f32 = GROUND_Y + 0.25;

// --- Waves ---

pub const MAX_WAVES: u32 = 5;

/// Seconds between a wave being cleared and the next one spawning.
pub const WAVE_CLEAR_DELAY_SECS: f32 = 3.0;

pub const WAVE_BASE_ENEMIES: u32 = 4;
pub const WAVE_ENEMIES_PER_LEVEL: u32 = 2;
pub const WAVE_HEALTH_STEP: f32 = 0.5;
pub const WAVE_SPEED_STEP: f32 = 0.2;

/// Radius of the spawn circle around the player.
pub const WAVE_SPAWN_RADIUS: f32 = 8.0;
