//! Scripted player used by the headless binary.
//!
//! Reads the latest snapshot and answers with the commands a simple bot
//! would issue: start the game, look at the closest enemy, shoot, reload.

use sunset_core::commands::PlayerCommand;
use sunset_core::enums::{CameraMode, GamePhase, RaycastOutcome, Shooter};
use sunset_core::events::GameEvent;
use sunset_core::state::{EnemyView, GameStateSnapshot};
use sunset_core::types::heading_of;
use sunset_core::Vec3;

/// Frames between fire attempts.
const FIRE_INTERVAL_FRAMES: u64 = 30;

/// Frames a target is ignored after a shot at it was stopped by a box.
const BLOCKED_TARGET_FRAMES: u64 = 90;

/// Yaw and pitch that point a first-person camera at `from` toward `to`.
///
/// Returns `None` when the points coincide.
pub fn aim_angles(from: Vec3, to: Vec3) -> Option<(f32, f32)> {
    let delta = to - from;
    let flat = (delta.x * delta.x + delta.z * delta.z).sqrt();
    if flat < f32::EPSILON && delta.y.abs() < f32::EPSILON {
        return None;
    }
    Some((heading_of(delta), delta.y.atan2(flat)))
}

#[derive(Debug, Default)]
pub struct Autopilot {
    frame: u64,
    target: Option<usize>,
    /// Enemy index and the frame until which it is skipped.
    blocked: Option<(usize, u64)>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enemy currently being aimed at.
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Commands for the next frame given the latest snapshot.
    pub fn next_commands(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        self.frame += 1;
        let mut commands = Vec::new();

        match snapshot.phase {
            GamePhase::MainMenu => {
                commands.push(PlayerCommand::StartGame);
                return commands;
            }
            GamePhase::Active => {}
            _ => return commands,
        }

        self.note_blocked_shots(snapshot);

        if snapshot.camera.mode != CameraMode::FirstPerson {
            commands.push(PlayerCommand::SetCameraMode {
                mode: CameraMode::FirstPerson,
            });
            return commands;
        }

        let player = &snapshot.player;
        if player.magazine_ammo == 0 {
            if !player.is_reloading {
                commands.push(PlayerCommand::Reload);
            }
            return commands;
        }

        self.target = self.pick_target(snapshot);
        let Some(index) = self.target else {
            return commands;
        };
        let Some(enemy) = snapshot.enemies.iter().find(|e| e.index == index) else {
            return commands;
        };

        if let Some((yaw, pitch)) = aim_angles(snapshot.camera.position, enemy.transform.position) {
            commands.push(PlayerCommand::AimAt { yaw, pitch });
            if self.frame % FIRE_INTERVAL_FRAMES == 0 {
                commands.push(PlayerCommand::Fire);
            }
        }
        commands
    }

    fn pick_target(&self, snapshot: &GameStateSnapshot) -> Option<usize> {
        let eye = snapshot.camera.position;
        let skipped = match self.blocked {
            Some((index, until)) if self.frame < until => Some(index),
            _ => None,
        };

        let by_distance = |a: &&EnemyView, b: &&EnemyView| {
            let da = a.transform.position.distance_squared(eye);
            let db = b.transform.position.distance_squared(eye);
            da.total_cmp(&db)
        };

        snapshot
            .enemies
            .iter()
            .filter(|e| Some(e.index) != skipped)
            .min_by(by_distance)
            .or_else(|| snapshot.enemies.iter().min_by(by_distance))
            .map(|e| e.index)
    }

    fn note_blocked_shots(&mut self, snapshot: &GameStateSnapshot) {
        let Some(target) = self.target else {
            return;
        };
        let blocked = snapshot.events.iter().any(|event| {
            matches!(
                event,
                GameEvent::RaycastResolved {
                    shooter: Shooter::Player,
                    outcome: RaycastOutcome::Blocked { .. } | RaycastOutcome::Miss,
                    ..
                }
            )
        });
        if blocked {
            log::debug!("Shot at enemy {target} stopped; picking another target");
            self.blocked = Some((target, self.frame + BLOCKED_TARGET_FRAMES));
        }
    }
}
