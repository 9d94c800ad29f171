//! Errors surfaced by the command bridge.

use std::fmt;
use std::io;

/// Why the bridge could not service a request.
#[derive(Debug)]
pub enum AppError {
    /// `start_simulation` was called while a loop is already running.
    AlreadyRunning,
    /// A command or query arrived before `start_simulation`.
    NotStarted,
    /// The game loop thread has exited and dropped its receiver.
    LoopStopped,
    /// A shared lock was poisoned by a panicking thread.
    LockPoisoned(&'static str),
    /// The game loop thread could not be spawned.
    Spawn(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::AlreadyRunning => f.write_str("Simulation already running"),
            AppError::NotStarted => f.write_str("Simulation not started"),
            AppError::LoopStopped => f.write_str("Game loop has stopped"),
            AppError::LockPoisoned(what) => write!(f, "Lock poisoned: {}", what),
            AppError::Spawn(err) => write!(f, "Failed to spawn game loop thread: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Spawn(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Spawn(err)
    }
}
