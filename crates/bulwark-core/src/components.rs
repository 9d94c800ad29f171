//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in systems, not components.
//! A structure entity is `(Structure, GeoPoint, Health)`, a bomber is
//! `(EnemyAircraft, GeoPoint, Health)`, a jet is `(Jet, GeoPoint)`, a
//! resource node is `(ResourceNode, GeoPoint)` and an incoming missile is
//! `(IncomingMissile,)` since its position is derived from its progress.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::*;

/// Hit points of a structure or bomber.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// A player-built structure. Kind-specific state lives in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub id: StructureId,
    /// Simulation time at which it was built (seconds).
    pub created_at: f64,
    pub payload: StructurePayload,
}

/// Per-kind structure state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum StructurePayload {
    MissileSilo { missiles_remaining: u32 },
    SamSite { intercept_count: u32 },
    Airfield,
    RadarStation,
    ResourceDepot,
}

impl StructurePayload {
    /// Payload for a freshly built structure.
    pub fn fresh(kind: StructureKind, silo_missiles: u32) -> Self {
        match kind {
            StructureKind::MissileSilo => StructurePayload::MissileSilo {
                missiles_remaining: silo_missiles,
            },
            StructureKind::SamSite => StructurePayload::SamSite { intercept_count: 0 },
            StructureKind::Airfield => StructurePayload::Airfield,
            StructureKind::RadarStation => StructurePayload::RadarStation,
            StructureKind::ResourceDepot => StructurePayload::ResourceDepot,
        }
    }

    pub fn kind(&self) -> StructureKind {
        match self {
            StructurePayload::MissileSilo { .. } => StructureKind::MissileSilo,
            StructurePayload::SamSite { .. } => StructureKind::SamSite,
            StructurePayload::Airfield => StructureKind::Airfield,
            StructurePayload::RadarStation => StructureKind::RadarStation,
            StructurePayload::ResourceDepot => StructureKind::ResourceDepot,
        }
    }
}

/// An enemy missile flying a straight line from launch point to aim point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomingMissile {
    pub id: MissileId,
    pub start: GeoPoint,
    pub target: GeoPoint,
    pub launched_at: f64,
    /// Flight progress, 0.0 at launch and 1.0 at impact.
    pub progress: f64,
    /// Progress per second.
    pub speed: f64,
    pub damage: f64,
}

impl IncomingMissile {
    /// Current position, interpolated between launch and aim point.
    pub fn position(&self) -> GeoPoint {
        self.start.lerp(&self.target, self.progress.clamp(0.0, 1.0))
    }
}

/// An enemy bomber hunting one kind of structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyAircraft {
    pub id: AircraftId,
    pub target_kind: StructureKind,
    /// Structure currently under attack, if any.
    #[serde(default)]
    pub attacking: Option<StructureId>,
}

/// A friendly fighter jet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Jet {
    pub id: JetId,
    pub missiles_remaining: u32,
    /// Remaining fuel, 0..=100.
    pub fuel: f64,
    pub home_airfield: StructureId,
    pub status: JetStatus,
}

/// A collectible resource deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceNode {
    pub id: NodeId,
    pub resources_remaining: u32,
}
