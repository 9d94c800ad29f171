//! Typed failures for player commands.
//!
//! Every variant is recoverable: a rejected command leaves the simulation
//! untouched and the session carries on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::types::StructureId;

/// Why a build location was refused.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutOfRangeReason {
    /// Farther from HQ than the construction radius.
    BeyondBuildRadius { distance_km: f64, max_km: f64 },
    /// Closer to an existing structure than the minimum spacing.
    TooCloseToStructure {
        neighbor: StructureId,
        distance_km: f64,
        min_km: f64,
    },
}

/// A command that could not be carried out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "error")]
pub enum CommandError {
    InsufficientFunds { needed: f64, available: f64 },
    OutOfRange { reason: OutOfRangeReason },
    NotFound { entity: EntityKind, id: u64 },
    CapacityExceeded { airfield: StructureId, capacity: usize },
    NoAmmunition { silo: StructureId },
}

impl CommandError {
    pub fn not_found(entity: EntityKind, id: u64) -> Self {
        CommandError::NotFound { entity, id }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InsufficientFunds { needed, available } => {
                write!(
                    f,
                    "Insufficient funds: need ${:.0}, have ${:.0}",
                    needed,
                    available.floor()
                )
            }
            CommandError::OutOfRange {
                reason: OutOfRangeReason::BeyondBuildRadius {
                    distance_km,
                    max_km,
                },
            } => write!(
                f,
                "Location is {:.1}km from HQ, outside the {:.0}km construction zone",
                distance_km, max_km
            ),
            CommandError::OutOfRange {
                reason:
                    OutOfRangeReason::TooCloseToStructure {
                        neighbor,
                        distance_km,
                        min_km,
                    },
            } => write!(
                f,
                "Too close to structure {} ({:.1}km, minimum {:.0}km)",
                neighbor, distance_km, min_km
            ),
            CommandError::NotFound { entity, id } => write!(f, "No {} with id #{}", entity, id),
            CommandError::CapacityExceeded { airfield, capacity } => {
                write!(f, "Airfield {} already hosts {} jets", airfield, capacity)
            }
            CommandError::NoAmmunition { silo } => {
                write!(f, "Missile Silo {} has no missiles left", silo)
            }
        }
    }
}

impl std::error::Error for CommandError {}
