//! BULWARK headless driver.
//!
//! Wires the simulation engine to a real-time game loop thread and exposes
//! a small command bridge that a frontend (or the stdin driver in `main.rs`)
//! talks to.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod ipc;
pub mod logging;
pub mod state;

pub use bulwark_core as core;
