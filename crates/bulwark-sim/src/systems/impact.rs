//! Missile impact: blast damage with linear falloff.

use bulwark_core::events::SimEvent;

use crate::world::World;

/// Damage dealt at `distance_km` from ground zero.
///
/// Full damage at the center, falling linearly to zero at the radius.
/// Anything at or beyond the radius takes nothing.
pub fn blast_damage(damage: f64, distance_km: f64, radius_km: f64) -> f64 {
    if radius_km <= 0.0 || !(distance_km < radius_km) {
        return 0.0;
    }
    damage * (1.0 - distance_km.max(0.0) / radius_km)
}

/// Detonate every missile that reached its aim point and survived interception.
pub fn run(world: &mut World) {
    let radius_km = world.tuning.blast_radius_km;

    for missile in world.store.missiles() {
        if missile.progress < 1.0 {
            continue;
        }
        world.store.remove_missile(missile.id);
        world.score.missiles_impacted += 1;

        let hits = world.store.structures_within(missile.target, radius_km);
        world.record(SimEvent::MissileImpact {
            missile: missile.id,
            location: missile.target,
            structures_hit: hits.len() as u32,
        });

        for (structure, distance) in hits {
            let damage = blast_damage(missile.damage, distance, radius_km);
            let Some(report) = world.damage_structure(structure.id, damage) else {
                continue;
            };
            if !report.destroyed {
                world.record(SimEvent::StructureDamaged {
                    structure: structure.id,
                    kind: report.kind,
                    damage: report.dealt,
                    remaining: report.remaining,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blast_full_at_center() {
        assert_eq!(blast_damage(40.0, 0.0, 8.0), 40.0);
    }

    #[test]
    fn test_blast_zero_at_and_beyond_radius() {
        assert_eq!(blast_damage(40.0, 8.0, 8.0), 0.0);
        assert_eq!(blast_damage(40.0, 12.5, 8.0), 0.0);
        assert_eq!(blast_damage(40.0, f64::NAN, 8.0), 0.0);
        assert_eq!(blast_damage(40.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_blast_linear_between() {
        assert_eq!(blast_damage(40.0, 4.0, 8.0), 20.0);
        assert_eq!(blast_damage(40.0, 2.0, 8.0), 30.0);
        assert_eq!(blast_damage(40.0, 6.0, 8.0), 10.0);

        // Equal steps in distance give equal steps in damage.
        let a = blast_damage(35.0, 1.0, 8.0) - blast_damage(35.0, 2.0, 8.0);
        let b = blast_damage(35.0, 5.0, 8.0) - blast_damage(35.0, 6.0, 8.0);
        assert!((a - b).abs() < 1e-12);
    }
}
