//! Core types and definitions for the BULWARK simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geo math, components, commands, errors, state snapshots, events,
//! tuning and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod geo;
pub mod state;
pub mod types;
