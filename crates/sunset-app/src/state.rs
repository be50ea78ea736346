//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use thiserror::Error;

use sunset_core::commands::PlayerCommand;
use sunset_core::state::GameStateSnapshot;
use sunset_sim::SimConfig;

use crate::game_loop;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotRunning,
    #[error("game loop thread has stopped")]
    LoopStopped,
    #[error("shared state lock poisoned")]
    Poisoned,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(_: PoisonError<T>) -> Self {
        AppError::Poisoned
    }
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` holds what does not exist before `start_simulation`
/// - `Arc<Mutex<...>>` holds the latest snapshot (shared with the game loop thread)
pub struct AppState {
    /// `None` before `start_simulation` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.loop_thread
            .lock()
            .map(|handle| handle.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Spawn the game loop thread with `config`.
    pub fn start_simulation(&self, config: SimConfig) -> Result<(), AppError> {
        let mut thread = self.loop_thread.lock()?;
        if thread.as_ref().is_some_and(|h| !h.is_finished()) {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) = game_loop::spawn_game_loop(config, self.latest_snapshot.clone())?;
        *self.command_tx.lock()? = Some(cmd_tx);
        *thread = Some(handle);
        Ok(())
    }

    /// Forward a player command to the simulation.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        let tx = self.command_tx.lock()?;
        match tx.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .map_err(|_| AppError::LoopStopped),
            None => Err(AppError::NotRunning),
        }
    }

    /// Latest snapshot, if the loop has ticked at least once.
    pub fn get_snapshot(&self) -> Result<Option<GameStateSnapshot>, AppError> {
        Ok(self.latest_snapshot.lock()?.clone())
    }

    /// Take the latest snapshot, leaving the slot empty.
    ///
    /// The returned snapshot carries every event since the previous take.
    pub fn take_snapshot(&self) -> Result<Option<GameStateSnapshot>, AppError> {
        Ok(self.latest_snapshot.lock()?.take())
    }

    /// Stop the game loop and wait for its thread to exit.
    pub fn shutdown(&self) -> Result<(), AppError> {
        if let Some(tx) = self.command_tx.lock()?.take() {
            // The loop may already be gone; joining below is what matters.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        if let Some(handle) = self.loop_thread.lock()?.take() {
            handle.join().map_err(|_| AppError::LoopStopped)?;
        }
        Ok(())
    }
}
