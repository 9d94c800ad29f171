//! Game state snapshot handed to the frontend after each tick.

use serde::{Deserialize, Serialize};

use crate::components::StructurePayload;
use crate::enums::*;
use crate::events::{Alert, SimEvent};
use crate::types::*;

/// Complete game state returned after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub paused: bool,
    pub speed: f64,
    /// Exact cash balance.
    pub cash: f64,
    /// Cash rounded down to whole units for display.
    pub cash_display: u64,
    pub hq: GeoPoint,
    pub wave: WaveView,
    pub structures: Vec<StructureView>,
    pub jets: Vec<JetView>,
    pub missiles: Vec<MissileView>,
    pub aircraft: Vec<AircraftView>,
    pub resource_nodes: Vec<ResourceNodeView>,
    pub score: ScoreView,
    /// Events since the previous snapshot was taken.
    pub events: Vec<SimEvent>,
    /// Rolling alert log, oldest first.
    pub alerts: Vec<Alert>,
}

/// A structure on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructureView {
    pub id: StructureId,
    pub kind: StructureKind,
    pub location: GeoPoint,
    pub health: f64,
    pub max_health: f64,
    pub created_at: f64,
    pub payload: StructurePayload,
}

impl StructureView {
    /// Remaining silo missiles, if this is a silo.
    pub fn missiles_remaining(&self) -> Option<u32> {
        match self.payload {
            StructurePayload::MissileSilo { missiles_remaining } => Some(missiles_remaining),
            _ => None,
        }
    }

    /// Lifetime intercepts, if this is a SAM site.
    pub fn intercept_count(&self) -> Option<u32> {
        match self.payload {
            StructurePayload::SamSite { intercept_count } => Some(intercept_count),
            _ => None,
        }
    }
}

/// A friendly jet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JetView {
    pub id: JetId,
    pub location: GeoPoint,
    pub missiles_remaining: u32,
    pub fuel: f64,
    pub home_airfield: StructureId,
    pub status: JetStatus,
}

/// An incoming missile with its derived position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissileView {
    pub id: MissileId,
    pub start: GeoPoint,
    pub target: GeoPoint,
    pub position: GeoPoint,
    pub progress: f64,
    pub speed: f64,
    pub damage: f64,
    pub launched_at: f64,
    /// Bearing from HQ to the missile (radians, 0 = North).
    pub bearing: f64,
    /// Range from HQ to the missile (km).
    pub range_km: f64,
    /// Seconds until impact at the current speed.
    pub eta_secs: Option<f64>,
}

/// An enemy bomber.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftView {
    pub id: AircraftId,
    pub location: GeoPoint,
    pub target_kind: StructureKind,
    pub attacking: Option<StructureId>,
    pub health: f64,
}

/// A collectible resource node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceNodeView {
    pub id: NodeId,
    pub location: GeoPoint,
    pub resources_remaining: u32,
}

/// Wave escalation status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveView {
    pub wave_number: u32,
    pub last_spawn_at: f64,
    pub next_wave_in_secs: f64,
}

/// Cumulative counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u64,
    pub missiles_intercepted: u32,
    pub missiles_impacted: u32,
    pub structures_destroyed: u32,
    pub aircraft_shot_down: u32,
    pub silo_kills: u32,
    pub waves_survived: u32,
}
