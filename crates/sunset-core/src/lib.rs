//! Core types and definitions for the SUNSET simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity data, commands, state snapshots, events, errors and constants.
//! It has no dependency on any runtime, window or rendering framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use glam::Vec3;

#[cfg(test)]
mod tests;
