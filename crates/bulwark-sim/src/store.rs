//! Entity store: every live entity of the simulation, kept in a hecs world.
//!
//! Entities are addressed by their public ids, never by hecs handles, so an
//! id stays meaningful in logs after its entity is gone. Ids are assigned
//! per kind starting at 1 and are never reused. List accessors return views
//! sorted by id so iteration order is stable.

use std::collections::HashMap;

use hecs::{Entity, World};

use bulwark_core::components::*;
use bulwark_core::enums::*;
use bulwark_core::state::*;
use bulwark_core::types::*;

/// Index key: one per live entity, across every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum EntityKey {
    Structure(StructureId),
    Jet(JetId),
    Missile(MissileId),
    Aircraft(AircraftId),
    Node(NodeId),
}

/// Components that carry the public id of their entity.
trait Keyed: hecs::Component {
    type Id: Copy;

    fn entity_key(id: Self::Id) -> EntityKey;
}

impl Keyed for Structure {
    type Id = StructureId;

    fn entity_key(id: StructureId) -> EntityKey {
        EntityKey::Structure(id)
    }
}

impl Keyed for Jet {
    type Id = JetId;

    fn entity_key(id: JetId) -> EntityKey {
        EntityKey::Jet(id)
    }
}

impl Keyed for IncomingMissile {
    type Id = MissileId;

    fn entity_key(id: MissileId) -> EntityKey {
        EntityKey::Missile(id)
    }
}

impl Keyed for EnemyAircraft {
    type Id = AircraftId;

    fn entity_key(id: AircraftId) -> EntityKey {
        EntityKey::Aircraft(id)
    }
}

impl Keyed for ResourceNode {
    type Id = NodeId;

    fn entity_key(id: NodeId) -> EntityKey {
        EntityKey::Node(id)
    }
}

/// Result of applying damage to a structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageReport {
    pub kind: StructureKind,
    /// Health actually removed (never more than what was left).
    pub dealt: f64,
    pub remaining: f64,
    /// True only on the hit that took the structure to zero.
    pub destroyed: bool,
}

/// Entities removed by [`EntityStore::purge_dead`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Purged {
    pub structures: Vec<StructureView>,
    pub aircraft: Vec<AircraftId>,
    pub jets: Vec<JetId>,
}

impl Purged {
    pub fn is_empty(&self) -> bool {
        self.structures.is_empty() && self.aircraft.is_empty() && self.jets.is_empty()
    }
}

/// Next id to hand out for each entity kind.
#[derive(Debug, Default)]
struct IdCounters {
    structure: u64,
    jet: u64,
    missile: u64,
    aircraft: u64,
    node: u64,
}

fn next(counter: &mut u64) -> u64 {
    *counter += 1;
    *counter
}

/// Owns all simulation entities.
pub struct EntityStore {
    world: World,
    ids: IdCounters,
    /// Public id to hecs handle, kept in step with every spawn and despawn.
    index: HashMap<EntityKey, Entity>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            ids: IdCounters::default(),
            index: HashMap::new(),
        }
    }

    /// Total number of live entities of every kind.
    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entity_of<C: Keyed>(&self, id: C::Id) -> Option<Entity> {
        self.index.get(&C::entity_key(id)).copied()
    }

    fn despawn<C: Keyed>(&mut self, id: C::Id) -> bool {
        match self.index.remove(&C::entity_key(id)) {
            Some(entity) => self.world.despawn(entity).is_ok(),
            None => false,
        }
    }

    // --- Structures ---

    /// Spawn a structure at full health and return its new id.
    pub fn add_structure(
        &mut self,
        payload: StructurePayload,
        location: GeoPoint,
        max_health: f64,
        created_at: f64,
    ) -> StructureId {
        let id = StructureId(next(&mut self.ids.structure));
        let max = max_health.max(0.0);
        let entity = self.world.spawn((
            Structure {
                id,
                created_at,
                payload,
            },
            location,
            Health { current: max, max },
        ));
        self.index.insert(EntityKey::Structure(id), entity);
        id
    }

    /// Remove a structure, returning its final state.
    pub fn remove_structure(&mut self, id: StructureId) -> Option<StructureView> {
        let view = self.structure(id)?;
        self.despawn::<Structure>(id);
        Some(view)
    }

    pub fn structure(&self, id: StructureId) -> Option<StructureView> {
        let entity = self.entity_of::<Structure>(id)?;
        let mut query = self
            .world
            .query_one::<(&Structure, &GeoPoint, &Health)>(entity)
            .ok()?;
        let view = query
            .get()
            .map(|(structure, location, health)| structure_view(structure, location, health));
        view
    }

    /// All structures, including any destroyed this tick but not yet purged.
    pub fn structures(&self) -> Vec<StructureView> {
        let mut views: Vec<StructureView> = self
            .world
            .query::<(&Structure, &GeoPoint, &Health)>()
            .iter()
            .map(|(_, (structure, location, health))| structure_view(structure, location, health))
            .collect();
        views.sort_by_key(|v| v.id);
        views
    }

    pub fn structures_of_kind(&self, kind: StructureKind) -> Vec<StructureView> {
        let mut views = self.structures();
        views.retain(|v| v.kind == kind);
        views
    }

    /// Live structures of one kind.
    pub fn count_of_kind(&self, kind: StructureKind) -> usize {
        self.world
            .query::<(&Structure, &Health)>()
            .iter()
            .filter(|(_, (structure, health))| {
                structure.payload.kind() == kind && health.current > 0.0
            })
            .count()
    }

    /// Distinct kinds among live structures, in declaration order.
    pub fn kinds_present(&self) -> Vec<StructureKind> {
        StructureKind::ALL
            .into_iter()
            .filter(|&kind| self.count_of_kind(kind) > 0)
            .collect()
    }

    /// Closest live structure of `kind`. Ties go to the lower id.
    pub fn nearest_structure_of_kind(
        &self,
        point: GeoPoint,
        kind: StructureKind,
    ) -> Option<(StructureView, f64)> {
        let mut best: Option<(StructureView, f64)> = None;
        for view in self.structures_of_kind(kind) {
            if view.health <= 0.0 {
                continue;
            }
            let distance = point.distance_km(&view.location);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ if distance.is_nan() => {}
                _ => best = Some((view, distance)),
            }
        }
        best
    }

    /// Live structures strictly closer than `radius_km` to `point`, with their distances.
    pub fn structures_within(&self, point: GeoPoint, radius_km: f64) -> Vec<(StructureView, f64)> {
        self.structures()
            .into_iter()
            .filter(|v| v.health > 0.0)
            .map(|v| {
                let distance = point.distance_km(&v.location);
                (v, distance)
            })
            .filter(|(_, distance)| *distance < radius_km)
            .collect()
    }

    /// Subtract health from a live structure, flooring at zero.
    ///
    /// Returns `None` if the structure is missing or already at zero.
    pub fn damage_structure(&mut self, id: StructureId, amount: f64) -> Option<DamageReport> {
        let entity = self.entity_of::<Structure>(id)?;
        let (structure, health) = self
            .world
            .query_one_mut::<(&Structure, &mut Health)>(entity)
            .ok()?;
        if health.current <= 0.0 {
            return None;
        }

        let amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
        let before = health.current;
        health.current = (before - amount).max(0.0).min(health.max);

        Some(DamageReport {
            kind: structure.payload.kind(),
            dealt: before - health.current,
            remaining: health.current,
            destroyed: health.current <= 0.0,
        })
    }

    /// Bring a structure back to full health. Returns the health restored.
    pub fn restore_structure(&mut self, id: StructureId) -> Option<f64> {
        let entity = self.entity_of::<Structure>(id)?;
        let health = self.world.query_one_mut::<&mut Health>(entity).ok()?;
        let restored = (health.max - health.current).max(0.0);
        health.current = health.max;
        Some(restored)
    }

    /// Edit the kind-specific state of a structure in place.
    pub fn update_structure_payload(
        &mut self,
        id: StructureId,
        update: impl FnOnce(&mut StructurePayload),
    ) -> bool {
        let Some(entity) = self.entity_of::<Structure>(id) else {
            return false;
        };
        match self.world.query_one_mut::<&mut Structure>(entity) {
            Ok(structure) => {
                update(&mut structure.payload);
                true
            }
            Err(_) => false,
        }
    }

    // --- Jets ---

    /// Spawn a jet. The id on `jet` is replaced by a freshly assigned one.
    pub fn add_jet(&mut self, mut jet: Jet, location: GeoPoint) -> JetId {
        jet.id = JetId(next(&mut self.ids.jet));
        let id = jet.id;
        let entity = self.world.spawn((jet, location));
        self.index.insert(EntityKey::Jet(id), entity);
        id
    }

    pub fn remove_jet(&mut self, id: JetId) -> Option<JetView> {
        let view = self.jet(id)?;
        self.despawn::<Jet>(id);
        Some(view)
    }

    pub fn jet(&self, id: JetId) -> Option<JetView> {
        let entity = self.entity_of::<Jet>(id)?;
        let mut query = self.world.query_one::<(&Jet, &GeoPoint)>(entity).ok()?;
        let view = query.get().map(|(jet, location)| jet_view(jet, location));
        view
    }

    pub fn jets(&self) -> Vec<JetView> {
        let mut views: Vec<JetView> = self
            .world
            .query::<(&Jet, &GeoPoint)>()
            .iter()
            .map(|(_, (jet, location))| jet_view(jet, location))
            .collect();
        views.sort_by_key(|v| v.id);
        views
    }

    /// Every jet homed at an airfield, whatever its status.
    pub fn jets_at_airfield(&self, airfield: StructureId) -> Vec<JetView> {
        let mut views = self.jets();
        views.retain(|v| v.home_airfield == airfield);
        views
    }

    pub fn update_jet(&mut self, id: JetId, update: impl FnOnce(&mut Jet, &mut GeoPoint)) -> bool {
        let Some(entity) = self.entity_of::<Jet>(id) else {
            return false;
        };
        match self.world.query_one_mut::<(&mut Jet, &mut GeoPoint)>(entity) {
            Ok((jet, location)) => {
                update(jet, location);
                true
            }
            Err(_) => false,
        }
    }

    // --- Incoming missiles ---

    /// Spawn a missile. The id on `missile` is replaced by a freshly assigned one.
    pub fn add_missile(&mut self, mut missile: IncomingMissile) -> MissileId {
        missile.id = MissileId(next(&mut self.ids.missile));
        let id = missile.id;
        let entity = self.world.spawn((missile,));
        self.index.insert(EntityKey::Missile(id), entity);
        id
    }

    pub fn remove_missile(&mut self, id: MissileId) -> Option<IncomingMissile> {
        let missile = self.missile(id)?;
        self.despawn::<IncomingMissile>(id);
        Some(missile)
    }

    pub fn missile(&self, id: MissileId) -> Option<IncomingMissile> {
        let entity = self.entity_of::<IncomingMissile>(id)?;
        let mut query = self.world.query_one::<&IncomingMissile>(entity).ok()?;
        let missile = query.get().copied();
        missile
    }

    pub fn missiles(&self) -> Vec<IncomingMissile> {
        let mut missiles: Vec<IncomingMissile> = self
            .world
            .query::<&IncomingMissile>()
            .iter()
            .map(|(_, missile)| *missile)
            .collect();
        missiles.sort_by_key(|m| m.id);
        missiles
    }

    /// Move a missile's progress forward. Progress never decreases and caps at 1.
    pub fn set_missile_progress(&mut self, id: MissileId, progress: f64) -> Option<f64> {
        let entity = self.entity_of::<IncomingMissile>(id)?;
        let missile = self
            .world
            .query_one_mut::<&mut IncomingMissile>(entity)
            .ok()?;
        if progress > missile.progress {
            missile.progress = progress.min(1.0);
        }
        Some(missile.progress)
    }

    // --- Enemy aircraft ---

    /// Spawn a bomber. The id on `aircraft` is replaced by a freshly assigned one.
    pub fn add_aircraft(
        &mut self,
        mut aircraft: EnemyAircraft,
        location: GeoPoint,
        health: f64,
    ) -> AircraftId {
        aircraft.id = AircraftId(next(&mut self.ids.aircraft));
        let id = aircraft.id;
        let entity = self.world.spawn((
            aircraft,
            location,
            Health {
                current: health,
                max: health,
            },
        ));
        self.index.insert(EntityKey::Aircraft(id), entity);
        id
    }

    pub fn remove_aircraft(&mut self, id: AircraftId) -> Option<AircraftView> {
        let view = self.aircraft(id)?;
        self.despawn::<EnemyAircraft>(id);
        Some(view)
    }

    pub fn aircraft(&self, id: AircraftId) -> Option<AircraftView> {
        let entity = self.entity_of::<EnemyAircraft>(id)?;
        let mut query = self
            .world
            .query_one::<(&EnemyAircraft, &GeoPoint, &Health)>(entity)
            .ok()?;
        let view = query
            .get()
            .map(|(aircraft, location, health)| aircraft_view(aircraft, location, health));
        view
    }

    pub fn enemy_aircraft(&self) -> Vec<AircraftView> {
        let mut views: Vec<AircraftView> = self
            .world
            .query::<(&EnemyAircraft, &GeoPoint, &Health)>()
            .iter()
            .map(|(_, (aircraft, location, health))| aircraft_view(aircraft, location, health))
            .collect();
        views.sort_by_key(|v| v.id);
        views
    }

    pub fn update_aircraft(
        &mut self,
        id: AircraftId,
        update: impl FnOnce(&mut EnemyAircraft, &mut GeoPoint, &mut Health),
    ) -> bool {
        let Some(entity) = self.entity_of::<EnemyAircraft>(id) else {
            return false;
        };
        match self
            .world
            .query_one_mut::<(&mut EnemyAircraft, &mut GeoPoint, &mut Health)>(entity)
        {
            Ok((aircraft, location, health)) => {
                update(aircraft, location, health);
                true
            }
            Err(_) => false,
        }
    }

    // --- Resource nodes ---

    pub fn add_resource_node(&mut self, location: GeoPoint, resources: u32) -> NodeId {
        let id = NodeId(next(&mut self.ids.node));
        let entity = self.world.spawn((
            ResourceNode {
                id,
                resources_remaining: resources,
            },
            location,
        ));
        self.index.insert(EntityKey::Node(id), entity);
        id
    }

    pub fn remove_resource_node(&mut self, id: NodeId) -> Option<ResourceNodeView> {
        let view = self.resource_node(id)?;
        self.despawn::<ResourceNode>(id);
        Some(view)
    }

    pub fn resource_node(&self, id: NodeId) -> Option<ResourceNodeView> {
        let entity = self.entity_of::<ResourceNode>(id)?;
        let mut query = self.world.query_one::<(&ResourceNode, &GeoPoint)>(entity).ok()?;
        let view = query.get().map(|(node, location)| node_view(node, location));
        view
    }

    pub fn resource_nodes(&self) -> Vec<ResourceNodeView> {
        let mut views: Vec<ResourceNodeView> = self
            .world
            .query::<(&ResourceNode, &GeoPoint)>()
            .iter()
            .map(|(_, (node, location))| node_view(node, location))
            .collect();
        views.sort_by_key(|v| v.id);
        views
    }

    /// Take up to `amount` from a node, removing it once empty.
    ///
    /// Returns the amount taken and whether the node is now depleted.
    pub fn harvest_node(&mut self, id: NodeId, amount: u32) -> Option<(u32, bool)> {
        let entity = self.entity_of::<ResourceNode>(id)?;
        let node = self.world.query_one_mut::<&mut ResourceNode>(entity).ok()?;
        let taken = amount.min(node.resources_remaining);
        node.resources_remaining -= taken;
        let depleted = node.resources_remaining == 0;
        if depleted {
            self.despawn::<ResourceNode>(id);
        }
        Some((taken, depleted))
    }

    // --- Cleanup ---

    /// Remove zero-health structures and aircraft, and jets that ran dry.
    pub fn purge_dead(&mut self) -> Purged {
        let mut doomed: Vec<Entity> = Vec::new();
        let mut purged = Purged::default();

        for (entity, (structure, location, health)) in self
            .world
            .query::<(&Structure, &GeoPoint, &Health)>()
            .iter()
        {
            if health.current <= 0.0 {
                purged
                    .structures
                    .push(structure_view(structure, location, health));
                doomed.push(entity);
            }
        }

        for (entity, (aircraft, health)) in self.world.query::<(&EnemyAircraft, &Health)>().iter() {
            if health.current <= 0.0 {
                purged.aircraft.push(aircraft.id);
                doomed.push(entity);
            }
        }

        for (entity, jet) in self.world.query::<&Jet>().iter() {
            if jet.status == JetStatus::OutOfFuel {
                purged.jets.push(jet.id);
                doomed.push(entity);
            }
        }

        for entity in doomed {
            let _ = self.world.despawn(entity);
        }

        purged.structures.sort_by_key(|v| v.id);
        purged.aircraft.sort();
        purged.jets.sort();

        for view in &purged.structures {
            self.index.remove(&EntityKey::Structure(view.id));
        }
        for id in &purged.aircraft {
            self.index.remove(&EntityKey::Aircraft(*id));
        }
        for id in &purged.jets {
            self.index.remove(&EntityKey::Jet(*id));
        }
        purged
    }
}

fn structure_view(structure: &Structure, location: &GeoPoint, health: &Health) -> StructureView {
    StructureView {
        id: structure.id,
        kind: structure.payload.kind(),
        location: *location,
        health: health.current,
        max_health: health.max,
        created_at: structure.created_at,
        payload: structure.payload,
    }
}

fn jet_view(jet: &Jet, location: &GeoPoint) -> JetView {
    JetView {
        id: jet.id,
        location: *location,
        missiles_remaining: jet.missiles_remaining,
        fuel: jet.fuel,
        home_airfield: jet.home_airfield,
        status: jet.status,
    }
}

fn aircraft_view(aircraft: &EnemyAircraft, location: &GeoPoint, health: &Health) -> AircraftView {
    AircraftView {
        id: aircraft.id,
        location: *location,
        target_kind: aircraft.target_kind,
        attacking: aircraft.attacking,
        health: health.current,
    }
}

fn node_view(node: &ResourceNode, location: &GeoPoint) -> ResourceNodeView {
    ResourceNodeView {
        id: node.id,
        location: *location,
        resources_remaining: node.resources_remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HQ: GeoPoint = GeoPoint {
        lat: 19.0760,
        lon: 72.8777,
    };

    fn sam() -> StructurePayload {
        StructurePayload::SamSite { intercept_count: 0 }
    }

    fn test_jet(home: StructureId) -> Jet {
        Jet {
            id: JetId(0),
            missiles_remaining: 6,
            fuel: 100.0,
            home_airfield: home,
            status: JetStatus::Deployed,
        }
    }

    #[test]
    fn test_ids_monotonic_and_not_reused() {
        let mut store = EntityStore::new();
        let a = store.add_structure(sam(), HQ, 100.0, 0.0);
        let b = store.add_structure(sam(), HQ.offset(0.1, 0.0), 100.0, 0.0);
        assert_eq!(a, StructureId(1));
        assert_eq!(b, StructureId(2));

        store.remove_structure(b);
        let c = store.add_structure(sam(), HQ.offset(0.2, 0.0), 100.0, 0.0);
        assert_eq!(c, StructureId(3), "removed ids must not be reused");

        // Counters are per kind.
        let node = store.add_resource_node(HQ, 300);
        assert_eq!(node, NodeId(1));
    }

    #[test]
    fn test_structures_sorted_by_id() {
        let mut store = EntityStore::new();
        for i in 0..5 {
            store.add_structure(
                StructurePayload::RadarStation,
                HQ.offset(0.05 * i as f64, 0.0),
                75.0,
                0.0,
            );
        }
        // Despawning shuffles hecs storage; views must stay ordered.
        store.remove_structure(StructureId(2));
        let ids: Vec<u64> = store.structures().iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_id_lookups_survive_despawn_churn() {
        let mut store = EntityStore::new();
        let bombers: Vec<AircraftId> = (0..200)
            .map(|i| {
                store.add_aircraft(
                    EnemyAircraft {
                        id: AircraftId(0),
                        target_kind: StructureKind::Airfield,
                        attacking: None,
                    },
                    HQ.offset(0.001 * i as f64, 0.0),
                    100.0,
                )
            })
            .collect();

        // Shoot down every third bomber, remove every fifth outright.
        for (i, id) in bombers.iter().enumerate() {
            if i % 3 == 0 {
                store.update_aircraft(*id, |_, _, health| health.current = 0.0);
            } else if i % 5 == 0 {
                store.remove_aircraft(*id);
            }
        }
        let purged = store.purge_dead();
        assert_eq!(purged.aircraft.len(), 67);

        for (i, id) in bombers.iter().enumerate() {
            let gone = i % 3 == 0 || i % 5 == 0;
            let view = store.aircraft(*id);
            assert_eq!(view.is_none(), gone, "bomber {} lookup", id);
            if let Some(view) = view {
                assert_eq!(view.id, *id);
                assert_eq!(view.location, HQ.offset(0.001 * i as f64, 0.0));
            }
            assert_eq!(
                store.update_aircraft(*id, |aircraft, _, _| aircraft.attacking = None),
                !gone
            );
        }
        assert!(store.remove_aircraft(bombers[0]).is_none());

        // A depleted node drops out of the index too.
        let node = store.add_resource_node(HQ, 10);
        assert_eq!(store.harvest_node(node, 10), Some((10, true)));
        assert!(store.resource_node(node).is_none());
        assert_eq!(store.harvest_node(node, 1), None);
    }

    #[test]
    fn test_nearest_of_kind_ignores_other_kinds_and_dead() {
        let mut store = EntityStore::new();
        let far = store.add_structure(sam(), HQ.offset(0.2, 0.0), 100.0, 0.0);
        let _radar = store.add_structure(StructurePayload::RadarStation, HQ, 75.0, 0.0);
        let near = store.add_structure(sam(), HQ.offset(0.05, 0.0), 100.0, 0.0);

        let (found, _) = store
            .nearest_structure_of_kind(HQ, StructureKind::SamSite)
            .unwrap();
        assert_eq!(found.id, near);

        store.damage_structure(near, 1000.0);
        let (found, _) = store
            .nearest_structure_of_kind(HQ, StructureKind::SamSite)
            .unwrap();
        assert_eq!(found.id, far, "zero-health structures are not targets");

        assert!(store
            .nearest_structure_of_kind(HQ, StructureKind::Airfield)
            .is_none());
    }

    #[test]
    fn test_nearest_tie_breaks_on_lower_id() {
        let mut store = EntityStore::new();
        let first = store.add_structure(sam(), HQ.offset(0.1, 0.0), 100.0, 0.0);
        let _second = store.add_structure(sam(), HQ.offset(0.1, 0.0), 100.0, 0.0);
        let (found, _) = store
            .nearest_structure_of_kind(HQ, StructureKind::SamSite)
            .unwrap();
        assert_eq!(found.id, first);
    }

    #[test]
    fn test_structures_within_is_strict() {
        let mut store = EntityStore::new();
        let inside = store.add_structure(sam(), HQ, 100.0, 0.0);
        let edge_point = bulwark_core::geo::destination(HQ, 0.0, 8.0);
        let _edge = store.add_structure(sam(), edge_point, 100.0, 0.0);

        let radius = HQ.distance_km(&edge_point);
        let hits = store.structures_within(HQ, radius);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0.id, inside);
    }

    #[test]
    fn test_damage_floors_at_zero_and_reports_destruction_once() {
        let mut store = EntityStore::new();
        let id = store.add_structure(StructurePayload::RadarStation, HQ, 75.0, 0.0);

        let report = store.damage_structure(id, 50.0).unwrap();
        assert_eq!(report.remaining, 25.0);
        assert!(!report.destroyed);

        let report = store.damage_structure(id, 50.0).unwrap();
        assert_eq!(report.remaining, 0.0);
        assert_eq!(report.dealt, 25.0);
        assert!(report.destroyed);

        assert!(store.damage_structure(id, 10.0).is_none());
        assert_eq!(store.structure(id).unwrap().health, 0.0);
    }

    #[test]
    fn test_damage_ignores_bad_amounts() {
        let mut store = EntityStore::new();
        let id = store.add_structure(sam(), HQ, 100.0, 0.0);
        store.damage_structure(id, -40.0);
        store.damage_structure(id, f64::NAN);
        assert_eq!(store.structure(id).unwrap().health, 100.0);
    }

    #[test]
    fn test_restore_structure() {
        let mut store = EntityStore::new();
        let id = store.add_structure(sam(), HQ, 100.0, 0.0);
        store.damage_structure(id, 35.0);
        assert_eq!(store.restore_structure(id), Some(35.0));
        assert_eq!(store.structure(id).unwrap().health, 100.0);
    }

    #[test]
    fn test_missile_progress_monotonic_and_capped() {
        let mut store = EntityStore::new();
        let id = store.add_missile(IncomingMissile {
            id: MissileId(0),
            start: HQ.offset(2.0, 2.0),
            target: HQ,
            launched_at: 0.0,
            progress: 0.0,
            speed: 0.1,
            damage: 30.0,
        });
        assert_eq!(id, MissileId(1));

        assert_eq!(store.set_missile_progress(id, 0.5), Some(0.5));
        assert_eq!(store.set_missile_progress(id, 0.3), Some(0.5));
        assert_eq!(store.set_missile_progress(id, 1.7), Some(1.0));
    }

    #[test]
    fn test_jets_at_airfield() {
        let mut store = EntityStore::new();
        let a = store.add_structure(StructurePayload::Airfield, HQ, 200.0, 0.0);
        let b = store.add_structure(StructurePayload::Airfield, HQ.offset(0.1, 0.0), 200.0, 0.0);
        store.add_jet(test_jet(a), HQ);
        store.add_jet(test_jet(b), HQ);
        store.add_jet(test_jet(a), HQ);

        let ids: Vec<JetId> = store.jets_at_airfield(a).iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![JetId(1), JetId(3)]);
    }

    #[test]
    fn test_harvest_node_removes_when_depleted() {
        let mut store = EntityStore::new();
        let id = store.add_resource_node(HQ, 250);
        assert_eq!(store.harvest_node(id, 100), Some((100, false)));
        assert_eq!(store.resource_node(id).unwrap().resources_remaining, 150);
        assert_eq!(store.harvest_node(id, 500), Some((150, true)));
        assert!(store.resource_node(id).is_none());
        assert!(store.harvest_node(id, 1).is_none());
    }

    #[test]
    fn test_purge_dead() {
        let mut store = EntityStore::new();
        let airfield = store.add_structure(StructurePayload::Airfield, HQ, 200.0, 0.0);
        let doomed = store.add_structure(sam(), HQ.offset(0.1, 0.0), 100.0, 0.0);
        store.damage_structure(doomed, 100.0);

        let bomber = store.add_aircraft(
            EnemyAircraft {
                id: AircraftId(0),
                target_kind: StructureKind::Airfield,
                attacking: None,
            },
            HQ.offset(1.0, 1.0),
            100.0,
        );
        store.update_aircraft(bomber, |_, _, health| health.current = 0.0);

        let dry = store.add_jet(test_jet(airfield), HQ);
        let flying = store.add_jet(test_jet(airfield), HQ);
        store.update_jet(dry, |jet, _| jet.status = JetStatus::OutOfFuel);

        let purged = store.purge_dead();
        assert_eq!(purged.structures.len(), 1);
        assert_eq!(purged.structures[0].id, doomed);
        assert_eq!(purged.aircraft, vec![bomber]);
        assert_eq!(purged.jets, vec![dry]);

        assert!(store.structure(doomed).is_none());
        assert!(store.structure(airfield).is_some());
        assert!(store.jet(flying).is_some());
        assert!(store.purge_dead().is_empty());
    }
}
