//! Snapshot system: reads the simulation state and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the state.

use glam::Vec3;

use sunset_core::constants::{ENEMY_RAYCAST_DURATION, ENEMY_SCALE, PLAYER_SCALE};
use sunset_core::enums::{GamePhase, ObjectKind};
use sunset_core::events::GameEvent;
use sunset_core::state::*;
use sunset_core::types::SimTime;

use super::player_movement;
use super::wave_director::WaveDirector;
use super::weapon;
use crate::state::SimulationState;

/// Build a complete GameStateSnapshot from the current state.
pub fn build_snapshot(
    state: &SimulationState,
    director: &WaveDirector,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        director: director.view(),
        player: build_player(state),
        camera: build_camera(state),
        enemies: build_enemies(state),
        boxes: build_boxes(state),
        waves: build_waves(state),
        raycast_lines: build_raycast_lines(state, time.elapsed_secs),
        events,
    }
}

fn build_player(state: &SimulationState) -> PlayerView {
    let player = &state.player;
    PlayerView {
        transform: TransformView {
            position: player.position,
            yaw: player.rotation_y,
            scale: Vec3::splat(PLAYER_SCALE),
            kind: ObjectKind::Player,
        },
        forward: player.forward,
        movement_state: player.movement_state,
        health: player.health,
        max_health: player.max_health,
        magazine_ammo: player.magazine_ammo,
        magazine_size: player.magazine_size,
        is_reloading: player.is_reloading,
        reload_progress: weapon::reload_progress(player),
    }
}

fn build_camera(state: &SimulationState) -> CameraView {
    let player = &state.player;
    let (position, look_at) = player_movement::view(player);
    CameraView {
        mode: player.camera_mode,
        position,
        look_at,
        distance: player.third_person.distance,
    }
}

fn build_enemies(state: &SimulationState) -> Vec<EnemyView> {
    state
        .living_enemies()
        .map(|(index, enemy)| EnemyView {
            index,
            wave_id: enemy.wave_id,
            transform: TransformView {
                position: enemy.position,
                yaw: enemy.rotation_y,
                scale: Vec3::splat(ENEMY_SCALE),
                kind: ObjectKind::Enemy,
            },
            forward: enemy.forward,
            health: enemy.health,
            max_health: enemy.max_health,
        })
        .collect()
}

fn build_boxes(state: &SimulationState) -> Vec<TransformView> {
    state
        .obstacles
        .iter()
        .map(|obstacle| TransformView {
            position: obstacle.position,
            yaw: obstacle.rotation_y,
            scale: obstacle.scale,
            kind: ObjectKind::Box,
        })
        .collect()
}

fn build_waves(state: &SimulationState) -> Vec<WaveView> {
    state
        .waves
        .iter()
        .map(|wave| WaveView {
            wave_id: wave.wave_id,
            enemy_count: wave.enemy_indices.len(),
            alive: wave
                .enemy_indices
                .iter()
                .filter(|&&i| state.enemies.get(i).is_some_and(|e| !e.is_dead()))
                .count(),
            is_active: wave.is_active,
            is_complete: wave.is_complete,
        })
        .collect()
}

fn build_raycast_lines(state: &SimulationState, now: f32) -> Vec<RaycastLineView> {
    state
        .enemies
        .iter()
        .enumerate()
        .filter(|(_, enemy)| enemy.raycast.active)
        .map(|(enemy_index, enemy)| RaycastLineView {
            enemy_index,
            start: enemy.raycast.start,
            end: enemy.raycast.end,
            kind: ObjectKind::EnemyRaycastLine,
            remaining_secs: (ENEMY_RAYCAST_DURATION - (now - enemy.raycast.timestamp)).max(0.0),
        })
        .collect()
}
