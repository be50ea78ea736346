//! Game state snapshot: the complete visible state handed to the renderer each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub director: DirectorView,
    pub player: PlayerView,
    pub camera: CameraView,
    /// Living enemies only.
    pub enemies: Vec<EnemyView>,
    pub boxes: Vec<TransformView>,
    pub waves: Vec<WaveView>,
    pub raycast_lines: Vec<RaycastLineView>,
    pub events: Vec<GameEvent>,
}

/// World transform plus render tag for one drawable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformView {
    pub position: Vec3,
    /// Rotation about +Y (radians).
    pub yaw: f32,
    pub scale: Vec3,
    pub kind: ObjectKind,
}

/// Player state for the model and the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub transform: TransformView,
    pub forward: Vec3,
    pub movement_state: MovementState,
    pub health: f32,
    pub max_health: f32,
    pub magazine_ammo: u32,
    pub magazine_size: u32,
    pub is_reloading: bool,
    /// 0.0 when a reload starts, 1.0 when it completes.
    pub reload_progress: f32,
}

/// Camera placement; the renderer builds its view matrix from this.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub mode: CameraMode,
    pub position: Vec3,
    pub look_at: Vec3,
    pub distance: f32,
}

/// A living enemy with its health bar data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    /// Stable index into the enemy storage.
    pub index: usize,
    pub wave_id: u32,
    pub transform: TransformView,
    pub forward: Vec3,
    pub health: f32,
    pub max_health: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub wave_id: u32,
    pub enemy_count: usize,
    pub alive: usize,
    pub is_active: bool,
    pub is_complete: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DirectorView {
    pub phase: DirectorPhase,
    pub current_wave: u32,
    pub max_waves: u32,
    /// Seconds since the current wave was cleared.
    pub clear_timer: f32,
}

/// Active enemy attack line.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RaycastLineView {
    pub enemy_index: usize,
    pub start: Vec3,
    pub end: Vec3,
    pub kind: ObjectKind,
    /// Seconds until the line disappears.
    pub remaining_secs: f32,
}
