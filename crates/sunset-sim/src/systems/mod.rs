//! Systems that operate on the simulation state each tick.
//!
//! Systems are free functions that take `&mut SimulationState` (or `&SimulationState`
//! for read-only). They do not own state; the wave director is the one stateful
//! exception and lives in the engine.

pub mod combat;
pub mod enemy_movement;
pub mod player_movement;
pub mod snapshot;
pub mod wave_director;
pub mod weapon;
