//! Enemy bomber movement and attack.
//!
//! A bomber homes on the nearest live structure of its target kind. Outside
//! attack range it closes a fraction of the gap; inside it bombs the target
//! instead of moving. With no such structure standing it holds position.

use bulwark_core::events::SimEvent;

use crate::world::World;

/// Fraction of the remaining gap closed in `dt` seconds, given the fraction
/// closed per reference interval.
pub fn step_fraction(per_interval: f64, dt: f64, interval: f64) -> f64 {
    if !(per_interval > 0.0) || !(interval > 0.0) || !(dt > 0.0) {
        return 0.0;
    }
    if per_interval >= 1.0 {
        return 1.0;
    }
    1.0 - (1.0 - per_interval).powf(dt / interval)
}

pub fn run(world: &mut World, dt: f64) {
    let fraction = step_fraction(
        world.tuning.bomber_step_fraction,
        dt,
        world.tuning.reference_interval_secs,
    );
    let attack_range_km = world.tuning.bomber_attack_range_km;
    let damage = (world.tuning.bomber_damage_per_sec * dt).max(0.0);

    for bomber in world.store.enemy_aircraft() {
        if bomber.health <= 0.0 {
            continue;
        }

        let Some((target, distance)) = world
            .store
            .nearest_structure_of_kind(bomber.location, bomber.target_kind)
        else {
            world.store.update_aircraft(bomber.id, |aircraft, _, _| {
                aircraft.attacking = None;
            });
            continue;
        };

        if distance > attack_range_km {
            world.store.update_aircraft(bomber.id, |aircraft, location, _| {
                *location = location.step_toward(&target.location, fraction);
                aircraft.attacking = None;
            });
            continue;
        }

        if bomber.attacking != Some(target.id) {
            world.store.update_aircraft(bomber.id, |aircraft, _, _| {
                aircraft.attacking = Some(target.id);
            });
            world.record(SimEvent::BomberAttack {
                aircraft: bomber.id,
                structure: target.id,
                kind: target.kind,
            });
        }
        world.damage_structure(target.id, damage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_fraction_matches_reference_interval() {
        assert!((step_fraction(0.1, 3.0, 3.0) - 0.1).abs() < 1e-12);

        // Thirty small steps leave the same remaining gap as one big one.
        let f = step_fraction(0.1, 0.1, 3.0);
        let remaining = (1.0 - f).powi(30);
        assert!((remaining - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_step_fraction_degenerate_inputs() {
        assert_eq!(step_fraction(0.0, 0.1, 3.0), 0.0);
        assert_eq!(step_fraction(0.1, 0.0, 3.0), 0.0);
        assert_eq!(step_fraction(1.5, 0.1, 3.0), 1.0);
        assert_eq!(step_fraction(f64::NAN, 0.1, 3.0), 0.0);
    }
}
