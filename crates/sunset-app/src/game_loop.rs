//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses threads.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for polling by the host.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use sunset_core::constants::{MAX_FRAME_DT, TARGET_FRAME_RATE};
use sunset_core::state::GameStateSnapshot;
use sunset_sim::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FRAME_RATE as u64);

/// Most events carried over between snapshots nobody has taken yet.
const MAX_PENDING_EVENTS: usize = 1024;

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use, and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("sunset-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// Seconds elapsed since `last`, clamped to one maximum frame.
fn frame_delta(last: Instant, now: Instant) -> f32 {
    now.saturating_duration_since(last)
        .as_secs_f32()
        .min(MAX_FRAME_DT)
}

/// Store `snapshot` as the latest one.
///
/// Events of a snapshot that was never taken are carried into the new one,
/// oldest first, so a host polling slower than the loop still sees them.
fn publish(slot: &mut Option<GameStateSnapshot>, mut snapshot: GameStateSnapshot) {
    if let Some(previous) = slot.take() {
        let mut events = previous.events;
        events.append(&mut snapshot.events);
        if events.len() > MAX_PENDING_EVENTS {
            let excess = events.len() - MAX_PENDING_EVENTS;
            debug!("Dropping {excess} untaken snapshot events");
            events.drain(..excess);
        }
        snapshot.events = events;
    }
    *slot = Some(snapshot);
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    info!("Game loop started (seed {})", config.seed);
    let mut engine = SimulationEngine::new(config);
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!("Game loop stopped at tick {}", engine.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame of wall-clock time (engine handles pause semantics internally)
        let now = Instant::now();
        let dt = frame_delta(last_frame, now);
        last_frame = now;
        let snapshot = engine.tick(dt);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            publish(&mut lock, snapshot);
        }

        // 4. Sleep until next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind; reset to avoid catch-up spiral
            debug!("Game loop fell behind by {:?}", now - next_frame_time);
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunset_core::commands::PlayerCommand;
    use sunset_core::enums::GamePhase;
    use sunset_core::events::GameEvent;

    fn snapshot_with(tick: u64, events: Vec<GameEvent>) -> GameStateSnapshot {
        let mut snapshot = GameStateSnapshot {
            events,
            ..Default::default()
        };
        snapshot.time.tick = tick;
        snapshot
    }

    #[test]
    fn test_publish_carries_untaken_events() {
        let mut slot = None;
        publish(&mut slot, snapshot_with(1, vec![GameEvent::ReloadStarted]));
        publish(&mut slot, snapshot_with(2, Vec::new()));
        publish(&mut slot, snapshot_with(3, vec![GameEvent::ReloadComplete]));

        let taken = slot.take().unwrap();
        assert_eq!(taken.time.tick, 3);
        assert_eq!(
            taken.events,
            vec![GameEvent::ReloadStarted, GameEvent::ReloadComplete]
        );

        publish(&mut slot, snapshot_with(4, vec![GameEvent::DryFire]));
        assert_eq!(slot.unwrap().events, vec![GameEvent::DryFire]);
    }

    #[test]
    fn test_publish_caps_pending_events() {
        let mut slot = None;
        for tick in 0..(MAX_PENDING_EVENTS as u64 + 10) {
            publish(
                &mut slot,
                snapshot_with(tick, vec![GameEvent::ShotFired { ammo_remaining: 0 }]),
            );
        }
        let events = slot.unwrap().events;
        assert_eq!(events.len(), MAX_PENDING_EVENTS);
    }

    #[test]
    fn test_loop_forwards_commands_until_shutdown() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone()).unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();

        let mut seen = None;
        for _ in 0..100 {
            std::thread::sleep(Duration::from_millis(10));
            seen = latest.lock().unwrap().as_ref().map(|s| s.phase);
            if seen == Some(GamePhase::Paused) {
                break;
            }
        }
        assert_eq!(seen, Some(GamePhase::Paused));

        // The sender stays alive: only the Shutdown command ends the loop.
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
        assert!(tx
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::Resume))
            .is_err());
    }

    #[test]
    fn test_frame_delta_clamped() {
        let start = Instant::now();
        let late = start + Duration::from_secs(2);
        assert_eq!(frame_delta(start, late), MAX_FRAME_DT);

        let soon = start + Duration::from_millis(16);
        assert!((frame_delta(start, soon) - 0.016).abs() < 1e-6);

        // Clock readings out of order count as no time.
        assert_eq!(frame_delta(late, start), 0.0);
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);

        for _ in 0..50 {
            engine.tick(1.0 / 60.0);
        }

        let snapshot = engine.tick(1.0 / 60.0);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_loop_publishes_and_stops_on_disconnect() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone()).unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();

        let mut phase = None;
        for _ in 0..100 {
            std::thread::sleep(Duration::from_millis(10));
            phase = latest.lock().unwrap().as_ref().map(|s| s.phase);
            if phase == Some(GamePhase::Active) {
                break;
            }
        }
        assert_eq!(phase, Some(GamePhase::Active));

        drop(tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }
}
