//! Application state shared between the command bridge and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use bulwark_core::commands::PlayerCommand;
use bulwark_core::state::GameStateSnapshot;

/// Commands sent from the bridge to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running game loop.
pub struct LoopHandle {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub thread: JoinHandle<()>,
}

/// Shared application state.
///
/// `mpsc::Sender` is not `Sync`, so the running loop sits behind a `Mutex`.
/// The latest snapshot is an `Arc` shared with the loop thread, which
/// replaces it after every tick.
pub struct AppState {
    /// `None` until `start_simulation`, and again after shutdown.
    pub game_loop: Mutex<Option<LoopHandle>>,
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            game_loop: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
