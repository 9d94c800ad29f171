//! Entity spawn factories.
//!
//! Resource nodes are placed once when a session starts. Missiles and
//! bombers are created here on behalf of the wave director.

use std::f64::consts::TAU;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::components::*;
use bulwark_core::enums::*;
use bulwark_core::geo;
use bulwark_core::types::*;

use crate::store::EntityStore;
use crate::world::World;

/// Uniform sample from `[lo, hi]`, or `lo` if the range is empty.
pub(crate) fn uniform(rng: &mut ChaCha8Rng, lo: f64, hi: f64) -> f64 {
    if lo.is_finite() && hi.is_finite() && hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}

/// Uniform sample from `[-spread, spread]`.
fn symmetric(rng: &mut ChaCha8Rng, spread: f64) -> f64 {
    uniform(rng, -spread.abs(), spread.abs())
}

/// Scatter the starting resource nodes around HQ.
pub fn spawn_resource_nodes(world: &mut World, rng: &mut ChaCha8Rng) {
    let (min_km, max_km) = world.tuning.resource_node_range_km;
    let (min_amount, max_amount) = world.tuning.resource_node_amount;

    for _ in 0..world.tuning.resource_node_count {
        let bearing = rng.gen_range(0.0..TAU);
        let range = uniform(rng, min_km, max_km);
        let location = geo::destination(world.hq, bearing, range);
        let amount = if max_amount > min_amount {
            rng.gen_range(min_amount..=max_amount)
        } else {
            min_amount
        };
        world.store.add_resource_node(location, amount);
    }
}

/// Launch one incoming missile scaled to `wave`.
pub fn spawn_missile(world: &mut World, rng: &mut ChaCha8Rng, wave: u32) -> MissileId {
    let tuning = &world.tuning;
    let hq = world.hq;

    let bearing = rng.gen_range(0.0..TAU);
    let (min_km, max_km) = tuning.missile_launch_range_km;
    let range = uniform(rng, min_km, max_km);
    let start = geo::destination(hq, bearing, range);

    let jitter = tuning.missile_target_jitter_deg;
    let target = hq.offset(symmetric(rng, jitter), symmetric(rng, jitter));

    let wave = f64::from(wave);
    let missile = IncomingMissile {
        id: MissileId(0),
        start,
        target,
        launched_at: world.time.elapsed_secs,
        progress: 0.0,
        speed: tuning.missile_base_speed + wave * tuning.missile_speed_growth,
        damage: tuning.missile_base_damage + wave * tuning.missile_damage_growth,
    };
    world.store.add_missile(missile)
}

/// Send one bomber after a random kind of structure.
pub fn spawn_bomber(world: &mut World, rng: &mut ChaCha8Rng) -> AircraftId {
    let target_kind = pick_bomber_target(&world.store, rng);
    let offset = world.tuning.bomber_spawn_offset_deg;
    let location = world
        .hq
        .offset(symmetric(rng, offset), symmetric(rng, offset));

    world.store.add_aircraft(
        EnemyAircraft {
            id: AircraftId(0),
            target_kind,
            attacking: None,
        },
        location,
        world.tuning.bomber_health,
    )
}

/// Uniform choice among the kinds currently standing, or the default
/// bomber targets when the map is empty.
pub fn pick_bomber_target(store: &EntityStore, rng: &mut ChaCha8Rng) -> StructureKind {
    let present = store.kinds_present();
    let choices: &[StructureKind] = if present.is_empty() {
        &StructureKind::DEFAULT_BOMBER_TARGETS
    } else {
        &present
    };
    choices[rng.gen_range(0..choices.len())]
}
