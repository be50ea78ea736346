//! Events emitted by the simulation for rendering, audio and HUD feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{RaycastOutcome, Shooter};

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave entered the arena.
    WaveSpawned {
        wave_number: u32,
        wave_id: u32,
        enemy_count: usize,
    },
    /// Every enemy of a wave is dead.
    WaveCleared { wave_number: u32, wave_id: u32 },
    /// The final wave was cleared.
    AllWavesComplete,
    /// The player's weapon discharged.
    ShotFired { ammo_remaining: u32 },
    /// Fire was requested while empty, cooling down or reloading.
    DryFire,
    /// A ray was resolved against the world.
    RaycastResolved {
        shooter: Shooter,
        start: Vec3,
        end: Vec3,
        outcome: RaycastOutcome,
    },
    EnemyKilled { index: usize, wave_id: u32 },
    PlayerDamaged { amount: f32, health: f32 },
    PlayerKilled,
    ReloadStarted,
    ReloadComplete,
}
