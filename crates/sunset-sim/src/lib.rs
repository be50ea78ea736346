//! Simulation engine for SUNSET.
//!
//! Owns the arena state (player, enemies, boxes, waves), runs the
//! systems each frame, and produces GameStateSnapshots for the renderer.

pub mod bezier;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod state;
pub mod systems;
pub mod world_setup;

pub use config::{ConfigError, SimConfig};
pub use engine::SimulationEngine;
pub use sunset_core as core;
