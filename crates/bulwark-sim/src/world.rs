//! The `World` aggregate: all mutable session state in one place.
//!
//! Owned by the engine and handed to systems and command handlers by
//! reference. Nothing in the crate keeps state outside of it except the RNG.

use bulwark_core::config::Tuning;
use bulwark_core::events::SimEvent;
use bulwark_core::types::{GeoPoint, SimTime, StructureId};

use crate::economy::Economy;
use crate::score::ScoreState;
use crate::store::{DamageReport, EntityStore};
use crate::systems::wave_director::WaveState;
use crate::telemetry::Telemetry;

pub struct World {
    pub store: EntityStore,
    pub economy: Economy,
    pub waves: WaveState,
    pub score: ScoreState,
    pub telemetry: Telemetry,
    pub time: SimTime,
    pub hq: GeoPoint,
    pub tuning: Tuning,
}

impl World {
    pub fn new(hq: GeoPoint, starting_cash: f64, tuning: Tuning) -> Self {
        Self {
            store: EntityStore::new(),
            economy: Economy::new(starting_cash, &tuning),
            waves: WaveState::default(),
            score: ScoreState::default(),
            telemetry: Telemetry::new(tuning.alert_log_capacity),
            time: SimTime::default(),
            hq,
            tuning,
        }
    }

    /// Current simulation time in seconds.
    pub fn now(&self) -> f64 {
        self.time.elapsed_secs
    }

    pub fn record(&mut self, event: SimEvent) {
        self.telemetry.record(event, self.time.tick);
    }

    /// Damage a structure, counting and announcing it if this destroys it.
    pub fn damage_structure(&mut self, id: StructureId, amount: f64) -> Option<DamageReport> {
        let report = self.store.damage_structure(id, amount)?;
        if report.destroyed {
            self.score.structures_destroyed += 1;
            self.record(SimEvent::StructureDestroyed {
                structure: id,
                kind: report.kind,
            });
        }
        Some(report)
    }
}
