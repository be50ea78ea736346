//! Wave director: spawns escalating enemy waves and detects when they are cleared.
//!
//! ```text
//! NotStarted -> WaveInProgress -> WaveCleared(timer) -> WaveInProgress ...
//!                                                    -> AllWavesComplete
//! ```

use glam::Vec3;
use log::info;

use sunset_core::components::{Enemy, Wave};
use sunset_core::constants::*;
use sunset_core::enums::DirectorPhase;
use sunset_core::events::GameEvent;
use sunset_core::state::DirectorView;

use crate::state::SimulationState;
use crate::world_setup::ring_spawn_points;

/// Session bookkeeping for wave progression.
#[derive(Debug, Clone)]
pub struct WaveDirector {
    pub phase: DirectorPhase,
    /// 1-based number of the latest spawned wave; 0 before the first.
    pub current_wave: u32,
    pub max_waves: u32,
    next_wave_id: u32,
    wave_cleared: bool,
    clear_timer: f32,
    clear_delay: f32,
    /// Initial attack cooldown given to every spawned enemy.
    attack_interval: f32,
}

impl WaveDirector {
    pub fn new(max_waves: u32, clear_delay: f32) -> Self {
        Self {
            phase: DirectorPhase::NotStarted,
            current_wave: 0,
            max_waves,
            next_wave_id: 0,
            wave_cleared: false,
            clear_timer: 0.0,
            clear_delay,
            attack_interval: ENEMY_ATTACK_INTERVAL_SECS,
        }
    }

    /// Use `secs` as the first attack cooldown of enemies spawned from now on.
    pub fn with_attack_interval(mut self, secs: f32) -> Self {
        self.attack_interval = secs;
        self
    }

    /// Enemy count, health multiplier and speed multiplier for a 1-based wave number.
    pub fn wave_parameters(wave_number: u32) -> (u32, f32, f32) {
        let level = wave_number.saturating_sub(1);
        let count = WAVE_BASE_ENEMIES + level * WAVE_ENEMIES_PER_LEVEL;
        let health_mul = 1.0 + level as f32 * WAVE_HEALTH_STEP;
        let speed_mul = 1.0 + level as f32 * WAVE_SPEED_STEP;
        (count, health_mul, speed_mul)
    }

    /// Spawn one enemy per position as a new wave and return its id.
    pub fn spawn_wave(
        &mut self,
        state: &mut SimulationState,
        positions: &[Vec3],
        health_mul: f32,
        speed_mul: f32,
        events: &mut Vec<GameEvent>,
    ) -> u32 {
        let wave_id = self.next_wave_id;
        self.next_wave_id += 1;

        let mut wave = Wave::new(wave_id);
        for &position in positions {
            wave.enemy_indices.push(state.enemies.len());
            let mut enemy = Enemy::new(
                position,
                wave_id,
                ENEMY_BASE_HEALTH * health_mul,
                ENEMY_BASE_SPEED * speed_mul,
            );
            enemy.attack_cooldown = self.attack_interval;
            state.enemies.push(enemy);
        }

        info!(
            "Wave {} spawned (id {}): {} enemies, health x{:.1}, speed x{:.1}",
            self.current_wave,
            wave_id,
            positions.len(),
            health_mul,
            speed_mul
        );
        events.push(GameEvent::WaveSpawned {
            wave_number: self.current_wave,
            wave_id,
            enemy_count: positions.len(),
        });
        state.waves.push(wave);
        wave_id
    }

    /// Start the next wave around the player. Does nothing once every wave has spawned.
    pub fn spawn_next_wave(
        &mut self,
        state: &mut SimulationState,
        events: &mut Vec<GameEvent>,
    ) -> Option<u32> {
        if self.current_wave >= self.max_waves {
            return None;
        }

        self.current_wave += 1;
        self.wave_cleared = false;
        self.clear_timer = 0.0;
        self.phase = DirectorPhase::WaveInProgress;
        state.player.restore_health();

        let (count, health_mul, speed_mul) = Self::wave_parameters(self.current_wave);
        let positions = ring_spawn_points(state.player.position, WAVE_SPAWN_RADIUS, count as usize);
        Some(self.spawn_wave(state, &positions, health_mul, speed_mul, events))
    }

    /// Advance the clear countdown and check the newest wave for completion.
    pub fn update(&mut self, state: &mut SimulationState, dt: f32, events: &mut Vec<GameEvent>) {
        if self.wave_cleared {
            self.clear_timer += dt;
            if self.clear_timer >= self.clear_delay {
                self.spawn_next_wave(state, events);
            }
        }

        let SimulationState { waves, enemies, .. } = state;
        let Some(wave) = waves
            .iter_mut()
            .rev()
            .find(|w| w.is_active && !w.is_complete)
        else {
            return;
        };
        if !wave.check_completion(enemies) {
            return;
        }

        let wave_id = wave.wave_id;
        events.push(GameEvent::WaveCleared {
            wave_number: self.current_wave,
            wave_id,
        });

        if self.current_wave >= self.max_waves {
            info!("Final wave {} cleared", self.current_wave);
            self.phase = DirectorPhase::AllWavesComplete;
            events.push(GameEvent::AllWavesComplete);
        } else {
            info!(
                "Wave {} cleared; next wave in {:.1}s",
                self.current_wave, self.clear_delay
            );
            self.phase = DirectorPhase::WaveCleared;
            self.wave_cleared = true;
            self.clear_timer = 0.0;
        }
    }

    pub fn view(&self) -> DirectorView {
        DirectorView {
            phase: self.phase,
            current_wave: self.current_wave,
            max_waves: self.max_waves,
            clear_timer: self.clear_timer,
        }
    }
}

/// Whether wave `wave_id` exists and is complete.
pub fn is_wave_complete(state: &SimulationState, wave_id: u32) -> bool {
    state
        .waves
        .iter()
        .any(|w| w.wave_id == wave_id && w.is_complete)
}

pub fn active_wave_ids(state: &SimulationState) -> Vec<u32> {
    state
        .waves
        .iter()
        .filter(|w| w.is_active)
        .map(|w| w.wave_id)
        .collect()
}

pub fn complete_wave_ids(state: &SimulationState) -> Vec<u32> {
    state
        .waves
        .iter()
        .filter(|w| w.is_complete)
        .map(|w| w.wave_id)
        .collect()
}
