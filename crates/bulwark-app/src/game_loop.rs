//! Game loop thread: drives the simulation engine at 10Hz with measured time.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via an `mpsc` channel and are queued on the
//! engine, which applies them at the start of the next tick. Each tick gets
//! the wall-clock time actually elapsed since the previous one; the engine
//! sub-steps large deltas itself.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::{debug, info};

use bulwark_core::state::GameStateSnapshot;
use bulwark_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, LoopHandle};

/// Loop frequency.
pub const TICK_RATE: u32 = 10;

/// Nominal wall-clock duration of one loop iteration.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<LoopHandle> {
    let (command_tx, command_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("bulwark-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(config);
            run_game_loop(engine, command_rx, &latest_snapshot);
        })?;

    Ok(LoopHandle { command_tx, thread })
}

/// Queue every pending command. Returns false once the loop should stop.
fn drain_commands(
    engine: &mut SimulationEngine,
    command_rx: &mpsc::Receiver<GameLoopCommand>,
) -> bool {
    loop {
        match command_rx.try_recv() {
            Ok(GameLoopCommand::Player(command)) => {
                debug!("Queued {:?}", command);
                engine.queue_command(command);
            }
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    command_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(engine.snapshot());
    }

    let mut last_tick = Instant::now();
    let mut next_tick_time = last_tick + TICK_DURATION;

    loop {
        if !drain_commands(&mut engine, &command_rx) {
            break;
        }

        let now = Instant::now();
        let dt = now.duration_since(last_tick);
        last_tick = now;
        let snapshot = engine.tick(dt.as_secs_f64());

        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; the measured dt already covers the gap.
            next_tick_time = now;
        }
    }

    info!(
        "Game loop stopped at t={:.1}s, wave {}",
        engine.time().elapsed_secs,
        engine.snapshot().wave.wave_number
    );
}
