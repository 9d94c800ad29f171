//! Player commands sent to the simulation, and their results.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Construction ---
    /// Build a structure at the given coordinates.
    Build {
        kind: StructureKind,
        lat: f64,
        lon: f64,
    },
    /// Restore a structure to full health.
    Repair { structure_id: StructureId },
    /// Tear down a structure for a partial refund.
    Demolish { structure_id: StructureId },

    // --- Weapons ---
    /// Fire one missile from a silo at a hostile in range.
    LaunchMissile { silo_id: StructureId },
    /// Put a jet in the air from an airfield.
    DeployJet { airfield_id: StructureId },
    /// Bring a jet back to its airfield.
    RecallJet { jet_id: JetId },

    // --- Economy ---
    /// Harvest cash from a resource node.
    CollectResource { node_id: NodeId, amount: u32 },

    // --- Simulation control ---
    /// Set the speed multiplier applied to every tick.
    SetSpeed { factor: f64 },
    Pause,
    Resume,
}

/// What a silo launch achieved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result")]
pub enum LaunchOutcome {
    Hit { target: SiloTarget },
    Miss { target: SiloTarget },
    /// Nothing in range; no missile was spent.
    NoTarget,
}

/// A hostile a silo can shoot at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiloTarget {
    Missile(MissileId),
    Aircraft(AircraftId),
}

/// Successful result of a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommandOutcome {
    Built { structure_id: StructureId },
    Repaired { structure_id: StructureId, cost: f64 },
    Demolished { structure_id: StructureId, refund: f64 },
    Launched { silo_id: StructureId, outcome: LaunchOutcome },
    JetDeployed { jet_id: JetId, relaunched: bool },
    JetRecalled { jet_id: JetId },
    Collected { node_id: NodeId, amount: u32 },
    SpeedSet { factor: f64 },
    Paused,
    Resumed,
}
