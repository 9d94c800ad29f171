//! Events emitted by the simulation for UI and log feedback.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::commands::SiloTarget;
use crate::enums::*;
use crate::types::*;

/// Something noteworthy that happened during a tick or command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    WaveIncoming {
        wave: u32,
        missiles: u32,
        bombers: u32,
    },
    MissileIntercepted {
        missile: MissileId,
        sam: StructureId,
    },
    MissileImpact {
        missile: MissileId,
        location: GeoPoint,
        structures_hit: u32,
    },
    StructureDamaged {
        structure: StructureId,
        kind: StructureKind,
        damage: f64,
        remaining: f64,
    },
    StructureDestroyed {
        structure: StructureId,
        kind: StructureKind,
    },
    BomberAttack {
        aircraft: AircraftId,
        structure: StructureId,
        kind: StructureKind,
    },
    AircraftShotDown {
        aircraft: AircraftId,
        jet: JetId,
    },
    JetOutOfFuel {
        jet: JetId,
    },
    StructureBuilt {
        structure: StructureId,
        kind: StructureKind,
    },
    StructureRepaired {
        structure: StructureId,
        kind: StructureKind,
        cost: f64,
    },
    StructureDemolished {
        structure: StructureId,
        kind: StructureKind,
        refund: f64,
    },
    JetDeployed {
        jet: JetId,
        airfield: StructureId,
    },
    JetRecalled {
        jet: JetId,
        airfield: StructureId,
    },
    SiloLaunch {
        silo: StructureId,
        target: SiloTarget,
        hit: bool,
    },
    ResourceCollected {
        node: NodeId,
        amount: u32,
        depleted: bool,
    },
}

impl SimEvent {
    /// Severity used for the alert log.
    pub fn level(&self) -> AlertLevel {
        match self {
            SimEvent::WaveIncoming { .. }
            | SimEvent::MissileImpact { .. }
            | SimEvent::StructureDestroyed { .. } => AlertLevel::Danger,
            SimEvent::StructureDamaged { .. }
            | SimEvent::BomberAttack { .. }
            | SimEvent::JetOutOfFuel { .. }
            | SimEvent::StructureDemolished { .. } => AlertLevel::Warning,
            SimEvent::MissileIntercepted { .. }
            | SimEvent::AircraftShotDown { .. }
            | SimEvent::StructureBuilt { .. }
            | SimEvent::StructureRepaired { .. }
            | SimEvent::JetDeployed { .. }
            | SimEvent::ResourceCollected { .. } => AlertLevel::Success,
            SimEvent::SiloLaunch { hit, .. } => {
                if *hit {
                    AlertLevel::Success
                } else {
                    AlertLevel::Warning
                }
            }
            SimEvent::JetRecalled { .. } => AlertLevel::Info,
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::WaveIncoming {
                wave,
                missiles,
                bombers,
            } => write!(
                f,
                "Wave {} incoming! {} missiles, {} bombers",
                wave, missiles, bombers
            ),
            SimEvent::MissileIntercepted { missile, sam } => {
                write!(f, "SAM Site {} intercepted enemy missile {}", sam, missile)
            }
            SimEvent::MissileImpact {
                missile,
                structures_hit,
                ..
            } => write!(
                f,
                "Enemy missile {} impact, {} structures in blast",
                missile, structures_hit
            ),
            SimEvent::StructureDamaged {
                structure,
                kind,
                damage,
                remaining,
            } => write!(
                f,
                "{} {} took {:.1} damage ({:.1} left)",
                kind, structure, damage, remaining
            ),
            SimEvent::StructureDestroyed { structure, kind } => {
                write!(f, "{} {} destroyed!", kind, structure)
            }
            SimEvent::BomberAttack {
                aircraft,
                structure,
                kind,
            } => write!(
                f,
                "Enemy bomber {} attacking {} {}!",
                aircraft, kind, structure
            ),
            SimEvent::AircraftShotDown { aircraft, jet } => {
                write!(f, "Jet {} shot down enemy bomber {}", jet, aircraft)
            }
            SimEvent::JetOutOfFuel { jet } => write!(f, "Jet {} ran out of fuel", jet),
            SimEvent::StructureBuilt { structure, kind } => {
                write!(f, "Built {} {}", kind, structure)
            }
            SimEvent::StructureRepaired {
                structure,
                kind,
                cost,
            } => write!(f, "Repaired {} {} (${:.0})", kind, structure, cost),
            SimEvent::StructureDemolished {
                structure,
                kind,
                refund,
            } => write!(
                f,
                "Demolished {} {} (refund ${:.0})",
                kind, structure, refund
            ),
            SimEvent::JetDeployed { jet, airfield } => {
                write!(f, "Jet {} deployed from Airfield {}", jet, airfield)
            }
            SimEvent::JetRecalled { jet, airfield } => {
                write!(f, "Jet {} landed at Airfield {}", jet, airfield)
            }
            SimEvent::SiloLaunch { silo, target, hit } => {
                let target = match target {
                    SiloTarget::Missile(id) => format!("enemy missile {}", id),
                    SiloTarget::Aircraft(id) => format!("enemy bomber {}", id),
                };
                let result = if *hit { "destroyed" } else { "missed" };
                write!(f, "Missile Silo {} fired at {}: {}", silo, target, result)
            }
            SimEvent::ResourceCollected {
                node,
                amount,
                depleted,
            } => {
                write!(f, "Collected ${} from resource node {}", amount, node)?;
                if *depleted {
                    f.write_str(" (depleted)")?;
                }
                Ok(())
            }
        }
    }
}

/// Entry in the rolling alert log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
