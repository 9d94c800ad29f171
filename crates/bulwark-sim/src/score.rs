//! Running score and combat counters.

use bulwark_core::state::ScoreView;

/// Cumulative counters tracked by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u64,
    pub missiles_intercepted: u32,
    pub missiles_impacted: u32,
    pub structures_destroyed: u32,
    pub aircraft_shot_down: u32,
    pub silo_kills: u32,
    pub waves_survived: u32,
}

impl ScoreState {
    pub fn add_points(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            missiles_intercepted: self.missiles_intercepted,
            missiles_impacted: self.missiles_impacted,
            structures_destroyed: self.structures_destroyed,
            aircraft_shot_down: self.aircraft_shot_down,
            silo_kills: self.silo_kills,
            waves_survived: self.waves_survived,
        }
    }
}
