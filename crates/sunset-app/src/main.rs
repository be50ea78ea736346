//! sunset: runs the arena headless with the autopilot at the controls.
//!
//! Usage:
//!   sunset [--config config.json] [--duration 60] [--verbose] [--dump-json]

use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use sunset_app::autopilot::Autopilot;
use sunset_app::game_loop::FRAME_DURATION;
use sunset_app::logging;
use sunset_app::state::AppState;
use sunset_core::enums::GamePhase;
use sunset_core::events::GameEvent;
use sunset_core::state::GameStateSnapshot;
use sunset_sim::SimConfig;

/// Third-person wave shooter simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with simulation settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wall-clock seconds to run before stopping
    #[arg(short, long, default_value_t = 60.0)]
    duration: f32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    dump_json: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    SimConfig::from_json_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    let app = AppState::new();
    app.start_simulation(config)?;

    let mut pilot = Autopilot::new();
    let mut kills = 0usize;
    let run_for = Duration::try_from_secs_f32(args.duration)
        .with_context(|| format!("invalid duration {}", args.duration))?;
    let deadline = Instant::now() + run_for;
    let mut last: Option<GameStateSnapshot> = None;

    while Instant::now() < deadline {
        std::thread::sleep(FRAME_DURATION);
        // Taking empties the slot, so each event is seen exactly once.
        let Some(snapshot) = app.take_snapshot()? else {
            continue;
        };

        kills += snapshot
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyKilled { .. }))
            .count();

        if matches!(snapshot.phase, GamePhase::GameOver | GamePhase::Victory) {
            last = Some(snapshot);
            break;
        }
        for command in pilot.next_commands(&snapshot) {
            app.send_command(command)?;
        }
        last = Some(snapshot);
    }

    app.shutdown()?;

    match &last {
        Some(snapshot) => {
            info!(
                "Finished in {:?} at t={:.1}s: wave {}/{}, {} kills, health {:.0}",
                snapshot.phase,
                snapshot.time.elapsed_secs,
                snapshot.director.current_wave,
                snapshot.director.max_waves,
                kills,
                snapshot.player.health,
            );
            if args.dump_json {
                println!("{}", serde_json::to_string_pretty(snapshot)?);
            }
        }
        None => info!("Simulation produced no snapshot"),
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(err) = run(&args) {
        error!("{err:#}");
        process::exit(1);
    }
}
