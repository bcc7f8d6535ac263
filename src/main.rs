//! Chroma Arena headless runner
//!
//! Runs the simulation without any rendering surface, paced at the fixed
//! tick rate, and logs duels and despawns as they happen.
//!
//! Usage: `chroma-arena [seed] [max_ticks] [--fast]`
//!
//! `--fast` drops the 60 Hz pacing and runs ticks back to back. The run
//! stops after the current tick once the tick budget is spent or at most
//! one orb survives.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use chroma_arena::ArenaConfig;
use chroma_arena::consts::TICK_HZ;
use chroma_arena::sim::{ArenaState, TickInput, tick};

fn main() {
    env_logger::init();

    let mut fast = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--fast" {
            fast = true;
        } else {
            positional.push(arg);
        }
    }

    let seed: u64 = positional
        .first()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    let max_ticks: u64 = positional
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(60_000);

    let config = ArenaConfig::default();
    let mut state = ArenaState::new(config, seed);
    log::info!(
        "arena {}x{} seeded with {} orbs (seed {})",
        state.config.bounds.x,
        state.config.bounds.y,
        state.orbs.len(),
        seed
    );

    let tick_duration = Duration::from_secs_f32(1.0 / TICK_HZ as f32);
    let input = TickInput::default();

    while state.ticks < max_ticks && state.orbs.len() > 1 {
        let started = Instant::now();
        tick(&mut state, &input);

        if !fast {
            if let Some(rest) = tick_duration.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    log::info!("run ended after {} ticks", state.ticks);
    for orb in &state.orbs {
        log::info!(
            "survivor: orb {} ({:?}) counter {} at ({:.0}, {:.0})",
            orb.id,
            orb.color,
            orb.counter,
            orb.pos.x,
            orb.pos.y
        );
    }
}
