//! Cleanup system: removes everything destroyed during this sub-step.

use log::debug;

use crate::store::Purged;
use crate::world::World;

/// Purge zero-health structures and bombers and jets that ran out of fuel.
pub fn run(world: &mut World) -> Purged {
    let purged = world.store.purge_dead();
    if !purged.is_empty() {
        debug!(
            "Cleanup removed {} structures, {} aircraft, {} jets",
            purged.structures.len(),
            purged.aircraft.len(),
            purged.jets.len()
        );
    }
    purged
}
