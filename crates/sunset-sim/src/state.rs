//! Mutable world state owned by the engine and handed to each system.

use sunset_core::components::{Enemy, Obstacle, Player, Wave};
use sunset_core::types::ModelBounds;

use crate::world_setup;

/// Everything that changes while the game runs, except the director bookkeeping.
///
/// Enemies are never removed: dead ones stay in place so wave membership
/// indices remain valid.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub obstacles: Vec<Obstacle>,
    pub waves: Vec<Wave>,
}

impl SimulationState {
    /// A fresh arena: the player at its spawn point and the default box layout.
    pub fn new(bounds: &ModelBounds) -> Self {
        let player = world_setup::spawn_player(bounds);
        let obstacles = world_setup::default_obstacles(player.position);
        Self {
            player,
            enemies: Vec::new(),
            obstacles,
            waves: Vec::new(),
        }
    }

    pub fn living_enemies(&self) -> impl Iterator<Item = (usize, &Enemy)> {
        self.enemies.iter().enumerate().filter(|(_, e)| !e.is_dead())
    }
}
