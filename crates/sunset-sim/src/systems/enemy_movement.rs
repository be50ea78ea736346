//! Enemy patrol movement along Bezier paths.
//!
//! Enemies ignore boxes while walking; boxes only matter for line of sight.

use rand::Rng;

use crate::bezier;
use crate::state::SimulationState;

/// Move every living enemy one tick along its path.
pub fn run(state: &mut SimulationState, rng: &mut impl Rng, dt: f32) {
    for enemy in state.enemies.iter_mut().filter(|e| !e.is_dead()) {
        let (position, heading) = bezier::step(
            &mut enemy.path,
            enemy.position,
            enemy.rotation_y,
            enemy.walk_speed,
            dt,
            rng,
        );
        enemy.position = position;
        enemy.rotation_y = heading;
        enemy.refresh_direction_vectors();
    }
}
