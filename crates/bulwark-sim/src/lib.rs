//! Simulation engine for BULWARK.
//!
//! Owns the entity store and the rest of the session state, runs the
//! systems for each sub-step, and produces GameStateSnapshots for the
//! caller. Headless and deterministic under a seed.

pub mod economy;
pub mod engine;
pub mod orders;
pub mod score;
pub mod store;
pub mod systems;
pub mod telemetry;
pub mod world;
pub mod world_setup;

pub use bulwark_core as core;
pub use engine::{SimConfig, SimulationEngine};
