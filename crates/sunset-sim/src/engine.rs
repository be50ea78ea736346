//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the arena state, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no window or renderer dependency), enabling deterministic testing.

use std::collections::VecDeque;

use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sunset_core::commands::PlayerCommand;
use sunset_core::constants::{MAX_FRAME_DT, PLAYER_SHOT_RANGE};
use sunset_core::enums::{DirectorPhase, GamePhase, RaycastOutcome, Shooter};
use sunset_core::events::GameEvent;
use sunset_core::state::GameStateSnapshot;
use sunset_core::types::SimTime;

use crate::config::SimConfig;
use crate::state::SimulationState;
use crate::systems;
use crate::systems::combat::ShotReport;
use crate::systems::wave_director::WaveDirector;

/// The simulation engine. Owns the world state and all session bookkeeping.
pub struct SimulationEngine {
    config: SimConfig,
    state: SimulationState,
    director: WaveDirector,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let state = Self::fresh_state(&config);
        Self {
            director: Self::fresh_director(&config),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            state,
            time: SimTime::default(),
            phase: GamePhase::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt` seconds and return the resulting snapshot.
    ///
    /// `dt` is clamped to `[0, MAX_FRAME_DT]`.
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };

        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.state,
            &self.director,
            &self.time,
            self.phase,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the world state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn director(&self) -> &WaveDirector {
        &self.director
    }

    /// Mutable world access for test setups.
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    fn fresh_state(config: &SimConfig) -> SimulationState {
        let mut state = SimulationState::new(&config.player_model_bounds);
        systems::player_movement::set_camera_mode(&mut state.player, config.camera_mode);
        state
    }

    fn fresh_director(config: &SimConfig) -> WaveDirector {
        WaveDirector::new(config.max_waves, config.wave_clear_delay_secs)
            .with_attack_interval(config.enemy_attack_interval_secs)
    }

    /// Reset everything to the state of a freshly constructed engine.
    fn reset(&mut self) {
        self.state = Self::fresh_state(&self.config);
        self.director = Self::fresh_director(&self.config);
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.time = SimTime::default();
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::MainMenu {
                    self.reset();
                    self.phase = GamePhase::Active;
                    info!("Game started (seed {})", self.config.seed);
                    self.director.spawn_next_wave(&mut self.state, &mut self.events);
                }
            }
            PlayerCommand::Restart => {
                self.reset();
                self.phase = GamePhase::MainMenu;
                info!("Game reset to main menu");
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            // Everything below acts on the arena and only applies mid-game.
            _ if self.phase != GamePhase::Active => {}
            PlayerCommand::SetMovement { input } => {
                self.state.player.input = input;
            }
            PlayerCommand::Look { dx, dy } => {
                systems::player_movement::look(&mut self.state.player, dx, dy);
            }
            PlayerCommand::Zoom { offset } => {
                systems::player_movement::zoom(&mut self.state.player, offset);
            }
            PlayerCommand::AimAt { yaw, pitch } => {
                systems::player_movement::aim_at(&mut self.state.player, yaw, pitch);
            }
            PlayerCommand::SetCameraMode { mode } => {
                systems::player_movement::set_camera_mode(&mut self.state.player, mode);
            }
            PlayerCommand::Fire => match systems::weapon::try_fire(&mut self.state.player) {
                Some(ray) => {
                    self.events.push(GameEvent::ShotFired {
                        ammo_remaining: self.state.player.magazine_ammo,
                    });
                    let report = systems::combat::resolve_shot(
                        &mut self.state,
                        &ray,
                        PLAYER_SHOT_RANGE,
                        Shooter::Player,
                    );
                    self.record_shot(report);
                }
                None => self.events.push(GameEvent::DryFire),
            },
            PlayerCommand::Reload => {
                if systems::weapon::start_reload(&mut self.state.player) {
                    self.events.push(GameEvent::ReloadStarted);
                }
            }
            PlayerCommand::PlayerRaycast => {
                if let Some(report) = systems::combat::player_raycast(&mut self.state) {
                    self.record_shot(report);
                }
            }
            PlayerCommand::EnemyAttack { enemy_index } => {
                match systems::combat::enemy_attack(
                    &mut self.state,
                    enemy_index,
                    self.time.elapsed_secs,
                ) {
                    Ok(report) => self.record_shot(report),
                    Err(err) => warn!("Enemy attack rejected: {err}"),
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        let now = self.time.elapsed_secs;

        // 1. Player movement
        systems::player_movement::run(&mut self.state, dt);
        // 2. Weapon cooldown and reload
        if systems::weapon::update_timers(&mut self.state.player, dt) {
            self.events.push(GameEvent::ReloadComplete);
        }
        // 3. Enemy patrol movement
        systems::enemy_movement::run(&mut self.state, &mut self.rng, dt);
        // 4. Enemy attacks
        if self.config.enemy_auto_attack {
            let reports = systems::combat::auto_attack(
                &mut self.state,
                dt,
                now,
                self.config.enemy_attack_interval_secs,
            );
            for report in reports {
                self.record_shot(report);
            }
        }
        // 5. Wave bookkeeping
        self.director.update(&mut self.state, dt, &mut self.events);
        // 6. Attack line expiry
        systems::combat::expire_raycast_lines(&mut self.state, now);
        // 7. Win/lose
        self.check_outcome();
    }

    fn check_outcome(&mut self) {
        if self.state.player.is_dead() {
            info!("Player killed at t={:.1}s; game over", self.time.elapsed_secs);
            self.phase = GamePhase::GameOver;
        } else if self.director.phase == DirectorPhase::AllWavesComplete {
            info!("All {} waves cleared; victory", self.director.max_waves);
            self.phase = GamePhase::Victory;
        }
    }

    /// Turn a resolved shot into events.
    fn record_shot(&mut self, report: ShotReport) {
        self.events.push(GameEvent::RaycastResolved {
            shooter: report.shooter,
            start: report.start,
            end: report.end,
            outcome: report.outcome,
        });
        if report.damage <= 0.0 {
            return;
        }

        match report.outcome {
            RaycastOutcome::Enemy { index, .. } if report.killed => {
                if let Some(enemy) = self.state.enemies.get(index) {
                    self.events.push(GameEvent::EnemyKilled {
                        index,
                        wave_id: enemy.wave_id,
                    });
                }
            }
            RaycastOutcome::Player { .. } => {
                self.events.push(GameEvent::PlayerDamaged {
                    amount: report.damage,
                    health: self.state.player.health,
                });
                if report.killed {
                    self.events.push(GameEvent::PlayerKilled);
                }
            }
            _ => {}
        }
    }
}
