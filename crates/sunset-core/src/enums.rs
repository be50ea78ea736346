//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Player locomotion state, derived from the directional input each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementState {
    #[default]
    Idle,
    Walking,
    Running,
}

/// Which camera drives aiming and the movement basis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMode {
    FirstPerson,
    #[default]
    ThirdPerson,
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Player health reached zero.
    GameOver,
    /// Every wave was cleared.
    Victory,
}

/// Wave director state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectorPhase {
    #[default]
    NotStarted,
    WaveInProgress,
    /// Current wave cleared; next wave spawns after the clear delay.
    WaveCleared,
    AllWavesComplete,
}

/// Render tag selecting the shading path of a drawable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    #[default]
    Plane,
    Player,
    Enemy,
    Box,
    EnemyRaycastLine,
}

impl ObjectKind {
    /// Integer id understood by the shaders.
    pub fn shader_id(self) -> i32 {
        match self {
            ObjectKind::Plane => 0,
            ObjectKind::Player => 1,
            ObjectKind::Enemy => 2,
            ObjectKind::Box => 10,
            ObjectKind::EnemyRaycastLine => 11,
        }
    }
}

/// Who cast a ray. An enemy is never a candidate target of its own ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shooter {
    Player,
    Enemy(usize),
}

/// Classification of a resolved ray. Distances are along the ray from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RaycastOutcome {
    Miss,
    /// A box occluded the ray before any target.
    Blocked { distance: f32 },
    Player { distance: f32 },
    Enemy { index: usize, distance: f32 },
}

impl RaycastOutcome {
    /// Distance to whatever stopped the ray, if anything did.
    pub fn distance(&self) -> Option<f32> {
        match *self {
            RaycastOutcome::Miss => None,
            RaycastOutcome::Blocked { distance }
            | RaycastOutcome::Player { distance }
            | RaycastOutcome::Enemy { distance, .. } => Some(distance),
        }
    }
}
