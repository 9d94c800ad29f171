//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of player structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    MissileSilo,
    SamSite,
    Airfield,
    RadarStation,
    ResourceDepot,
}

impl StructureKind {
    pub const ALL: [StructureKind; 5] = [
        StructureKind::MissileSilo,
        StructureKind::SamSite,
        StructureKind::Airfield,
        StructureKind::RadarStation,
        StructureKind::ResourceDepot,
    ];

    /// Kinds bombers go after when there is nothing on the map yet.
    pub const DEFAULT_BOMBER_TARGETS: [StructureKind; 3] = [
        StructureKind::MissileSilo,
        StructureKind::Airfield,
        StructureKind::ResourceDepot,
    ];
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StructureKind::MissileSilo => "Missile Silo",
            StructureKind::SamSite => "SAM Site",
            StructureKind::Airfield => "Airfield",
            StructureKind::RadarStation => "Radar Station",
            StructureKind::ResourceDepot => "Resource Depot",
        };
        f.write_str(name)
    }
}

/// Jet flight status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JetStatus {
    /// Airborne, patrolling and burning fuel.
    #[default]
    Deployed,
    /// Parked at its home airfield.
    Grounded,
    /// Fuel exhausted; removed at cleanup.
    OutOfFuel,
}

/// Entity category, used when reporting lookups that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Structure,
    MissileSilo,
    Airfield,
    Jet,
    Missile,
    Aircraft,
    ResourceNode,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Structure => "structure",
            EntityKind::MissileSilo => "missile silo",
            EntityKind::Airfield => "airfield",
            EntityKind::Jet => "jet",
            EntityKind::Missile => "missile",
            EntityKind::Aircraft => "aircraft",
            EntityKind::ResourceNode => "resource node",
        };
        f.write_str(name)
    }
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Danger,
}
