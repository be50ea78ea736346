//! SUNSET host application.
//!
//! This crate runs the simulation engine on its own frame-loop thread and
//! exposes a small handle for sending commands and reading snapshots.
//! The `sunset` binary drives it with a scripted autopilot.

pub mod autopilot;
pub mod game_loop;
pub mod logging;
pub mod state;

pub use sunset_core as core;
