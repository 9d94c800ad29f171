//! Systems that advance the simulation world each sub-step.
//!
//! Systems are plain functions over `&mut World`. They run in a fixed order
//! (see [`crate::engine`]) because that order decides combat outcomes.

pub mod aircraft;
pub mod cleanup;
pub mod impact;
pub mod jets;
pub mod missile_flight;
pub mod snapshot;
pub mod wave_director;
