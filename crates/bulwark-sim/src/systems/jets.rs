//! Jet patrol, fuel burn and air-to-air engagement.
//!
//! Deployed jets wander around their patrol point, burn fuel, and shoot down
//! every bomber in range while they still carry missiles. Engagements always
//! succeed. A jet that runs dry is marked `OutOfFuel` and purged at cleanup.

use rand_chacha::ChaCha8Rng;

use bulwark_core::enums::JetStatus;
use bulwark_core::events::SimEvent;

use crate::world::World;
use crate::world_setup::uniform;

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, dt: f64) {
    let drift = (world.tuning.jet_patrol_drift_deg_per_sec * dt).abs();
    let burn = (world.tuning.jet_fuel_burn_per_sec * dt).max(0.0);
    let range_km = world.tuning.jet_engagement_range_km;

    for jet in world.store.jets() {
        if jet.status != JetStatus::Deployed {
            continue;
        }

        let dlat = uniform(rng, -drift, drift);
        let dlon = uniform(rng, -drift, drift);
        let mut location = jet.location;
        let mut fuel = jet.fuel;
        world.store.update_jet(jet.id, |state, position| {
            *position = position.offset(dlat, dlon);
            state.fuel = (state.fuel - burn).max(0.0);
            location = *position;
            fuel = state.fuel;
        });

        let mut missiles = jet.missiles_remaining;
        for bomber in world.store.enemy_aircraft() {
            if missiles == 0 {
                break;
            }
            if bomber.health <= 0.0 || location.distance_km(&bomber.location) >= range_km {
                continue;
            }
            world.store.update_aircraft(bomber.id, |_, _, health| {
                health.current = 0.0;
            });
            missiles -= 1;
            world.score.aircraft_shot_down += 1;
            world.score.add_points(world.tuning.jet_kill_score);
            world.record(SimEvent::AircraftShotDown {
                aircraft: bomber.id,
                jet: jet.id,
            });
        }

        let out_of_fuel = fuel <= 0.0;
        world.store.update_jet(jet.id, |state, _| {
            state.missiles_remaining = missiles;
            if out_of_fuel {
                state.status = JetStatus::OutOfFuel;
            }
        });
        if out_of_fuel {
            world.record(SimEvent::JetOutOfFuel { jet: jet.id });
        }
    }
}
