//! Missile flight and SAM interception.
//!
//! Every missile advances by `speed × dt`, then each SAM site covering its
//! aim point (id ascending) gets one roll. The first success kills it.
//! SAM coverage is measured from the aim point, not the missile's current
//! position.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::components::StructurePayload;
use bulwark_core::enums::StructureKind;
use bulwark_core::events::SimEvent;
use bulwark_core::types::{GeoPoint, StructureId};

use crate::world::World;

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, dt: f64) {
    let range_km = world.tuning.sam_intercept_range_km;
    let chance = world
        .tuning
        .per_step_chance(world.tuning.sam_intercept_probability, dt);

    let sams: Vec<(StructureId, GeoPoint)> = world
        .store
        .structures_of_kind(StructureKind::SamSite)
        .into_iter()
        .filter(|s| s.health > 0.0)
        .map(|s| (s.id, s.location))
        .collect();

    for missile in world.store.missiles() {
        let advanced = missile.progress + missile.speed * dt;
        if world
            .store
            .set_missile_progress(missile.id, advanced)
            .is_none()
        {
            continue;
        }

        let interceptor = sams
            .iter()
            .filter(|(_, location)| location.distance_km(&missile.target) < range_km)
            .find(|_| rng.gen_bool(chance))
            .map(|(id, _)| *id);

        let Some(sam) = interceptor else {
            continue;
        };

        world.store.remove_missile(missile.id);
        world.store.update_structure_payload(sam, |payload| {
            if let StructurePayload::SamSite { intercept_count } = payload {
                *intercept_count += 1;
            }
        });
        world.score.missiles_intercepted += 1;
        world.score.add_points(world.tuning.sam_intercept_score);
        world.record(SimEvent::MissileIntercepted {
            missile: missile.id,
            sam,
        });
    }
}
