//! Snapshot system: builds a complete GameStateSnapshot from the world.
//!
//! This system is read-only. It never modifies the world.

use bulwark_core::components::IncomingMissile;
use bulwark_core::events::SimEvent;
use bulwark_core::state::*;
use bulwark_core::types::GeoPoint;

use crate::world::World;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    paused: bool,
    speed: f64,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    let now = world.now();

    GameStateSnapshot {
        time: world.time,
        paused,
        speed,
        cash: world.economy.cash(),
        cash_display: world.economy.display_cash(),
        hq: world.hq,
        wave: WaveView {
            wave_number: world.waves.wave_number,
            last_spawn_at: world.waves.last_spawn_at,
            next_wave_in_secs: world
                .waves
                .next_wave_in(now, world.tuning.wave_interval_secs),
        },
        structures: world.store.structures(),
        jets: world.store.jets(),
        missiles: build_missiles(world),
        aircraft: world.store.enemy_aircraft(),
        resource_nodes: world.store.resource_nodes(),
        score: world.score.view(),
        events,
        alerts: world.telemetry.alerts().cloned().collect(),
    }
}

/// Missile views with positions and HQ-relative bearing and range.
fn build_missiles(world: &World) -> Vec<MissileView> {
    world
        .store
        .missiles()
        .iter()
        .map(|missile| missile_view(missile, &world.hq))
        .collect()
}

fn missile_view(missile: &IncomingMissile, hq: &GeoPoint) -> MissileView {
    let position = missile.position();
    let eta_secs = if missile.speed > 0.0 {
        Some((1.0 - missile.progress).max(0.0) / missile.speed)
    } else {
        None
    };

    MissileView {
        id: missile.id,
        start: missile.start,
        target: missile.target,
        position,
        progress: missile.progress,
        speed: missile.speed,
        damage: missile.damage,
        launched_at: missile.launched_at,
        bearing: hq.bearing_to(&position),
        range_km: hq.distance_km(&position),
        eta_secs,
    }
}
