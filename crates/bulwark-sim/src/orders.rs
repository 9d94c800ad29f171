//! Player command handlers.
//!
//! Each handler validates everything before it mutates anything, so a
//! rejected command leaves the world exactly as it found it and records no
//! events.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::commands::{LaunchOutcome, SiloTarget};
use bulwark_core::components::{Jet, StructurePayload};
use bulwark_core::enums::*;
use bulwark_core::errors::{CommandError, OutOfRangeReason};
use bulwark_core::events::SimEvent;
use bulwark_core::state::StructureView;
use bulwark_core::types::*;

use crate::world::World;

/// Clamp a probability into what `gen_bool` accepts.
fn chance(p: f64) -> f64 {
    if p.is_finite() {
        p.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn find_structure(
    world: &World,
    id: StructureId,
    kind: Option<StructureKind>,
) -> Result<StructureView, CommandError> {
    let entity = match kind {
        Some(StructureKind::MissileSilo) => EntityKind::MissileSilo,
        Some(StructureKind::Airfield) => EntityKind::Airfield,
        _ => EntityKind::Structure,
    };
    world
        .store
        .structure(id)
        .filter(|s| s.health > 0.0)
        .filter(|s| kind.map_or(true, |k| s.kind == k))
        .ok_or_else(|| CommandError::not_found(entity, id.0))
}

/// Check that `location` is a legal build site.
pub fn check_build_site(world: &World, location: GeoPoint) -> Result<(), CommandError> {
    let max_km = world.tuning.max_build_radius_km;
    let distance_km = world.hq.distance_km(&location);
    if !(distance_km <= max_km) {
        return Err(CommandError::OutOfRange {
            reason: OutOfRangeReason::BeyondBuildRadius {
                distance_km,
                max_km,
            },
        });
    }

    let min_km = world.tuning.min_structure_spacing_km;
    let crowding = world
        .store
        .structures()
        .into_iter()
        .filter(|s| s.health > 0.0)
        .map(|s| (s.id, location.distance_km(&s.location)))
        .filter(|(_, d)| *d < min_km)
        .min_by(|a, b| a.1.total_cmp(&b.1));
    if let Some((neighbor, distance_km)) = crowding {
        return Err(CommandError::OutOfRange {
            reason: OutOfRangeReason::TooCloseToStructure {
                neighbor,
                distance_km,
                min_km,
            },
        });
    }
    Ok(())
}

pub fn build(
    world: &mut World,
    kind: StructureKind,
    location: GeoPoint,
) -> Result<StructureId, CommandError> {
    check_build_site(world, location)?;

    let spec = world.tuning.structures.get(kind);
    world.economy.spend(spec.cost)?;

    let payload = StructurePayload::fresh(kind, world.tuning.silo_starting_missiles);
    let id = world
        .store
        .add_structure(payload, location, spec.max_health, world.now());
    world.record(SimEvent::StructureBuilt {
        structure: id,
        kind,
    });
    Ok(id)
}

/// Restore a structure to full health. Returns what it cost.
pub fn repair(world: &mut World, id: StructureId) -> Result<f64, CommandError> {
    let structure = find_structure(world, id, None)?;
    let missing = structure.max_health - structure.health;
    if missing <= 0.0 {
        return Ok(0.0);
    }

    let cost = missing * world.tuning.repair_cost_per_hp;
    world.economy.spend(cost)?;
    world.store.restore_structure(id);
    world.record(SimEvent::StructureRepaired {
        structure: id,
        kind: structure.kind,
        cost,
    });
    Ok(cost)
}

/// Tear down a structure. Returns the refund.
pub fn demolish(world: &mut World, id: StructureId) -> Result<f64, CommandError> {
    let structure = find_structure(world, id, None)?;
    let cost = world.tuning.structures.get(structure.kind).cost;
    let refund = (cost * world.tuning.demolish_refund_fraction).floor();

    world.store.remove_structure(id);
    world.economy.credit(refund);
    world.record(SimEvent::StructureDemolished {
        structure: id,
        kind: structure.kind,
        refund,
    });
    Ok(refund)
}

/// Hostiles a silo can reach: every bomber, plus missiles aimed near it.
pub fn silo_targets(world: &World, silo: &StructureView) -> Vec<SiloTarget> {
    let range_km = world.tuning.silo_targeting_range_km;
    let bombers = world
        .store
        .enemy_aircraft()
        .into_iter()
        .filter(|a| a.health > 0.0)
        .map(|a| SiloTarget::Aircraft(a.id));
    let missiles = world
        .store
        .missiles()
        .into_iter()
        .filter(|m| silo.location.distance_km(&m.target) < range_km)
        .map(|m| SiloTarget::Missile(m.id));
    bombers.chain(missiles).collect()
}

pub fn launch_missile(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    silo_id: StructureId,
) -> Result<LaunchOutcome, CommandError> {
    let silo = find_structure(world, silo_id, Some(StructureKind::MissileSilo))?;
    if silo.missiles_remaining() == Some(0) {
        return Err(CommandError::NoAmmunition { silo: silo_id });
    }

    let candidates = silo_targets(world, &silo);
    if candidates.is_empty() {
        log::debug!("Missile Silo {silo_id} has no target in range");
        return Ok(LaunchOutcome::NoTarget);
    }

    world.store.update_structure_payload(silo_id, |payload| {
        if let StructurePayload::MissileSilo { missiles_remaining } = payload {
            *missiles_remaining = missiles_remaining.saturating_sub(1);
        }
    });

    let target = candidates[rng.gen_range(0..candidates.len())];
    let hit = rng.gen_bool(chance(world.tuning.silo_hit_probability));
    if hit {
        match target {
            SiloTarget::Missile(id) => {
                world.store.remove_missile(id);
            }
            SiloTarget::Aircraft(id) => {
                world.store.remove_aircraft(id);
            }
        }
        world.score.silo_kills += 1;
        world.score.add_points(world.tuning.silo_kill_score);
    }

    world.record(SimEvent::SiloLaunch {
        silo: silo_id,
        target,
        hit,
    });
    Ok(if hit {
        LaunchOutcome::Hit { target }
    } else {
        LaunchOutcome::Miss { target }
    })
}

/// Put a jet in the air. Returns its id and whether it was a relaunch.
pub fn deploy_jet(
    world: &mut World,
    airfield_id: StructureId,
) -> Result<(JetId, bool), CommandError> {
    let airfield = find_structure(world, airfield_id, Some(StructureKind::Airfield))?;
    let homed = world.store.jets_at_airfield(airfield_id);

    if let Some(parked) = homed.iter().find(|j| j.status == JetStatus::Grounded) {
        world.store.update_jet(parked.id, |jet, _| {
            jet.status = JetStatus::Deployed;
        });
        world.record(SimEvent::JetDeployed {
            jet: parked.id,
            airfield: airfield_id,
        });
        return Ok((parked.id, true));
    }

    let capacity = world.tuning.jet_capacity_per_airfield;
    if homed.len() >= capacity {
        return Err(CommandError::CapacityExceeded {
            airfield: airfield_id,
            capacity,
        });
    }

    world.economy.spend(world.tuning.jet_cost)?;
    let jet = Jet {
        id: JetId(0),
        missiles_remaining: world.tuning.jet_starting_missiles,
        fuel: world.tuning.jet_max_fuel,
        home_airfield: airfield_id,
        status: JetStatus::Deployed,
    };
    let id = world.store.add_jet(jet, airfield.location);
    world.record(SimEvent::JetDeployed {
        jet: id,
        airfield: airfield_id,
    });
    Ok((id, false))
}

/// Land a jet at its home airfield, refuelled and rearmed.
pub fn recall_jet(world: &mut World, jet_id: JetId) -> Result<(), CommandError> {
    let jet = world
        .store
        .jet(jet_id)
        .filter(|j| j.status != JetStatus::OutOfFuel)
        .ok_or_else(|| CommandError::not_found(EntityKind::Jet, jet_id.0))?;
    let airfield = find_structure(world, jet.home_airfield, Some(StructureKind::Airfield))?;

    let fuel = world.tuning.jet_max_fuel;
    let missiles = world.tuning.jet_starting_missiles;
    world.store.update_jet(jet_id, |state, location| {
        *location = airfield.location;
        state.status = JetStatus::Grounded;
        state.fuel = fuel;
        state.missiles_remaining = missiles;
    });
    world.record(SimEvent::JetRecalled {
        jet: jet_id,
        airfield: airfield.id,
    });
    Ok(())
}

/// Harvest cash from a node. Returns the amount credited.
pub fn collect_resource(
    world: &mut World,
    node_id: NodeId,
    amount: u32,
) -> Result<u32, CommandError> {
    if world.store.resource_node(node_id).is_none() {
        return Err(CommandError::not_found(
            EntityKind::ResourceNode,
            node_id.0,
        ));
    }
    if amount == 0 {
        return Ok(0);
    }

    let Some((taken, depleted)) = world.store.harvest_node(node_id, amount) else {
        return Err(CommandError::not_found(
            EntityKind::ResourceNode,
            node_id.0,
        ));
    };
    world.economy.credit(f64::from(taken));
    world.record(SimEvent::ResourceCollected {
        node: node_id,
        amount: taken,
        depleted,
    });
    Ok(taken)
}
