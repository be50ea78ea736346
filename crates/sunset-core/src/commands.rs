//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::components::MovementInput;
use crate::enums::CameraMode;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement & camera ---
    /// Replace the held directional/run flags.
    SetMovement { input: MovementInput },
    /// Mouse movement in screen pixels.
    Look { dx: f32, dy: f32 },
    /// Scroll wheel offset; positive zooms in.
    Zoom { offset: f32 },
    /// Absolute first-person look angles (radians).
    AimAt { yaw: f32, pitch: f32 },
    SetCameraMode { mode: CameraMode },

    // --- Weapon ---
    /// Shoot along the current aim ray if the weapon is ready.
    Fire,
    /// Start refilling the magazine.
    Reload,
    /// Cast a ray from the player's position along its facing, bypassing the weapon.
    PlayerRaycast,

    // --- Enemy actions ---
    /// Make one enemy attack the player right now.
    EnemyAttack { enemy_index: usize },

    // --- Simulation control ---
    /// Place the player and boxes and spawn the first wave.
    StartGame,
    /// Return to the main menu with a fresh world.
    Restart,
    Pause,
    Resume,
}
