//! Command bridge between a frontend and the game loop thread.
//!
//! A frontend starts the loop once, then sends `PlayerCommand`s and polls
//! the latest snapshot. None of these calls block on the simulation.

use log::info;

use bulwark_core::commands::PlayerCommand;
use bulwark_core::state::GameStateSnapshot;
use bulwark_sim::engine::SimConfig;

use crate::error::AppError;
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation on its own thread.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), AppError> {
    let mut game_loop = state
        .game_loop
        .lock()
        .map_err(|_| AppError::LockPoisoned("game loop"))?;

    if game_loop.is_some() {
        return Err(AppError::AlreadyRunning);
    }

    let seed = config.seed;
    *game_loop = Some(game_loop::spawn_game_loop(
        config,
        state.latest_snapshot.clone(),
    )?);
    info!("Simulation started (seed {})", seed);
    Ok(())
}

/// Forward a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    let game_loop = state
        .game_loop
        .lock()
        .map_err(|_| AppError::LockPoisoned("game loop"))?;

    match game_loop.as_ref() {
        Some(handle) => handle
            .command_tx
            .send(GameLoopCommand::Player(command))
            .map_err(|_| AppError::LoopStopped),
        None => Err(AppError::NotStarted),
    }
}

/// The latest published snapshot, if the loop has produced one.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, AppError> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|_| AppError::LockPoisoned("snapshot"))?;
    Ok(lock.clone())
}

/// Stop the loop and wait for its thread to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let handle = state
        .game_loop
        .lock()
        .map_err(|_| AppError::LockPoisoned("game loop"))?
        .take()
        .ok_or(AppError::NotStarted)?;

    // A loop that already exited has dropped its receiver; joining is enough.
    let _ = handle.command_tx.send(GameLoopCommand::Shutdown);
    handle
        .thread
        .join()
        .map_err(|_| AppError::LoopStopped)?;
    info!("Simulation stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_for_snapshot(
        state: &AppState,
        accept: impl Fn(&GameStateSnapshot) -> bool,
    ) -> GameStateSnapshot {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(snapshot) = get_snapshot(state).unwrap() {
                if accept(&snapshot) {
                    return snapshot;
                }
            }
            assert!(Instant::now() < deadline, "timed out waiting for snapshot");
            std::thread::sleep(Duration::from_millis(20));
        }
    }

    #[test]
    fn test_commands_require_running_loop() {
        let state = AppState::new();
        assert!(matches!(
            send_command(&state, PlayerCommand::Pause),
            Err(AppError::NotStarted)
        ));
        assert!(matches!(stop_simulation(&state), Err(AppError::NotStarted)));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_twice_rejected() {
        let state = AppState::new();
        start_simulation(&state, SimConfig::default()).unwrap();
        assert!(matches!(
            start_simulation(&state, SimConfig::default()),
            Err(AppError::AlreadyRunning)
        ));
        stop_simulation(&state).unwrap();
    }

    #[test]
    fn test_pause_round_trip_through_loop() {
        let state = AppState::new();
        start_simulation(&state, SimConfig::default()).unwrap();

        send_command(&state, PlayerCommand::Pause).unwrap();
        let paused = wait_for_snapshot(&state, |s| s.paused);

        std::thread::sleep(Duration::from_millis(250));
        let later = get_snapshot(&state).unwrap().unwrap();
        assert_eq!(later.time, paused.time);

        send_command(&state, PlayerCommand::Resume).unwrap();
        wait_for_snapshot(&state, |s| !s.paused && s.time.tick > paused.time.tick);

        stop_simulation(&state).unwrap();
        assert!(matches!(
            send_command(&state, PlayerCommand::Resume),
            Err(AppError::NotStarted)
        ));
    }
}
