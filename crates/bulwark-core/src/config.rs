//! Tunable gameplay parameters.
//!
//! Defaults come from [`crate::constants`]. Every field is `#[serde(default)]`
//! so a config file only needs to name what it overrides.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::StructureKind;

/// Cost and durability of one structure kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructureSpec {
    pub cost: f64,
    pub max_health: f64,
}

/// Specs for every structure kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureCatalog {
    pub missile_silo: StructureSpec,
    pub sam_site: StructureSpec,
    pub airfield: StructureSpec,
    pub radar_station: StructureSpec,
    pub resource_depot: StructureSpec,
}

impl Default for StructureCatalog {
    fn default() -> Self {
        Self {
            missile_silo: StructureSpec {
                cost: MISSILE_SILO_COST,
                max_health: MISSILE_SILO_HEALTH,
            },
            sam_site: StructureSpec {
                cost: SAM_SITE_COST,
                max_health: SAM_SITE_HEALTH,
            },
            airfield: StructureSpec {
                cost: AIRFIELD_COST,
                max_health: AIRFIELD_HEALTH,
            },
            radar_station: StructureSpec {
                cost: RADAR_STATION_COST,
                max_health: RADAR_STATION_HEALTH,
            },
            resource_depot: StructureSpec {
                cost: RESOURCE_DEPOT_COST,
                max_health: RESOURCE_DEPOT_HEALTH,
            },
        }
    }
}

impl StructureCatalog {
    pub fn get(&self, kind: StructureKind) -> StructureSpec {
        match kind {
            StructureKind::MissileSilo => self.missile_silo,
            StructureKind::SamSite => self.sam_site,
            StructureKind::Airfield => self.airfield,
            StructureKind::RadarStation => self.radar_station,
            StructureKind::ResourceDepot => self.resource_depot,
        }
    }
}

/// All gameplay tuning in one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub structures: StructureCatalog,
    pub max_build_radius_km: f64,
    pub min_structure_spacing_km: f64,
    pub repair_cost_per_hp: f64,
    pub demolish_refund_fraction: f64,
    pub silo_starting_missiles: u32,

    pub base_income_per_sec: f64,
    pub depot_income_bonus: f64,

    pub wave_interval_secs: f64,
    pub max_missiles_per_wave: u32,
    pub bomber_first_wave: u32,
    pub max_bombers_per_wave: u32,

    pub missile_base_speed: f64,
    pub missile_speed_growth: f64,
    pub missile_base_damage: f64,
    pub missile_damage_growth: f64,
    pub missile_launch_range_km: (f64, f64),
    pub missile_target_jitter_deg: f64,
    pub blast_radius_km: f64,

    pub sam_intercept_range_km: f64,
    /// Chance per SAM per reference interval; scaled by `dt` each tick.
    pub sam_intercept_probability: f64,
    pub sam_intercept_score: u64,

    pub bomber_spawn_offset_deg: f64,
    pub bomber_health: f64,
    pub bomber_step_fraction: f64,
    pub bomber_attack_range_km: f64,
    pub bomber_damage_per_sec: f64,

    pub jet_cost: f64,
    pub jet_capacity_per_airfield: usize,
    pub jet_starting_missiles: u32,
    pub jet_max_fuel: f64,
    pub jet_fuel_burn_per_sec: f64,
    pub jet_patrol_drift_deg_per_sec: f64,
    pub jet_engagement_range_km: f64,
    pub jet_kill_score: u64,

    pub silo_targeting_range_km: f64,
    pub silo_hit_probability: f64,
    pub silo_kill_score: u64,

    pub resource_node_count: usize,
    pub resource_node_range_km: (f64, f64),
    pub resource_node_amount: (u32, u32),

    pub reference_interval_secs: f64,
    pub max_substep_secs: f64,
    pub speed_range: (f64, f64),
    pub alert_log_capacity: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            structures: StructureCatalog::default(),
            max_build_radius_km: MAX_BUILD_RADIUS_KM,
            min_structure_spacing_km: MIN_STRUCTURE_SPACING_KM,
            repair_cost_per_hp: REPAIR_COST_PER_HP,
            demolish_refund_fraction: DEMOLISH_REFUND_FRACTION,
            silo_starting_missiles: SILO_STARTING_MISSILES,

            base_income_per_sec: BASE_INCOME_PER_SEC,
            depot_income_bonus: DEPOT_INCOME_BONUS,

            wave_interval_secs: WAVE_INTERVAL_SECS,
            max_missiles_per_wave: MAX_MISSILES_PER_WAVE,
            bomber_first_wave: BOMBER_FIRST_WAVE,
            max_bombers_per_wave: MAX_BOMBERS_PER_WAVE,

            missile_base_speed: MISSILE_BASE_SPEED,
            missile_speed_growth: MISSILE_SPEED_GROWTH,
            missile_base_damage: MISSILE_BASE_DAMAGE,
            missile_damage_growth: MISSILE_DAMAGE_GROWTH,
            missile_launch_range_km: (MISSILE_LAUNCH_RANGE_MIN_KM, MISSILE_LAUNCH_RANGE_MAX_KM),
            missile_target_jitter_deg: MISSILE_TARGET_JITTER_DEG,
            blast_radius_km: BLAST_RADIUS_KM,

            sam_intercept_range_km: SAM_INTERCEPT_RANGE_KM,
            sam_intercept_probability: SAM_INTERCEPT_PROBABILITY,
            sam_intercept_score: SAM_INTERCEPT_SCORE,

            bomber_spawn_offset_deg: BOMBER_SPAWN_OFFSET_DEG,
            bomber_health: BOMBER_HEALTH,
            bomber_step_fraction: BOMBER_STEP_FRACTION,
            bomber_attack_range_km: BOMBER_ATTACK_RANGE_KM,
            bomber_damage_per_sec: BOMBER_DAMAGE_PER_SEC,

            jet_cost: JET_COST,
            jet_capacity_per_airfield: JET_CAPACITY_PER_AIRFIELD,
            jet_starting_missiles: JET_STARTING_MISSILES,
            jet_max_fuel: JET_MAX_FUEL,
            jet_fuel_burn_per_sec: JET_FUEL_BURN_PER_SEC,
            jet_patrol_drift_deg_per_sec: JET_PATROL_DRIFT_DEG_PER_SEC,
            jet_engagement_range_km: JET_ENGAGEMENT_RANGE_KM,
            jet_kill_score: JET_KILL_SCORE,

            silo_targeting_range_km: SILO_TARGETING_RANGE_KM,
            silo_hit_probability: SILO_HIT_PROBABILITY,
            silo_kill_score: SILO_KILL_SCORE,

            resource_node_count: RESOURCE_NODE_COUNT,
            resource_node_range_km: (RESOURCE_NODE_RANGE_MIN_KM, RESOURCE_NODE_RANGE_MAX_KM),
            resource_node_amount: (RESOURCE_NODE_MIN_AMOUNT, RESOURCE_NODE_MAX_AMOUNT),

            reference_interval_secs: REFERENCE_INTERVAL_SECS,
            max_substep_secs: MAX_SUBSTEP_SECS,
            speed_range: (MIN_SPEED, MAX_SPEED),
            alert_log_capacity: ALERT_LOG_CAPACITY,
        }
    }
}

impl Tuning {
    /// Convert a chance-per-reference-interval into a chance for a `dt`-second step,
    /// so the per-second rate is the same at any tick rate.
    pub fn per_step_chance(&self, chance_per_interval: f64, dt: f64) -> f64 {
        if !chance_per_interval.is_finite() || chance_per_interval <= 0.0 {
            return 0.0;
        }
        let p = chance_per_interval.min(1.0);
        if p >= 1.0 {
            return 1.0;
        }
        let exponent = dt.max(0.0) / self.reference_interval_secs;
        let chance = 1.0 - (1.0 - p).powf(exponent);
        if chance.is_finite() {
            chance.clamp(0.0, 1.0)
        } else {
            p
        }
    }

    /// Speed multiplier clamped into the allowed band.
    pub fn clamp_speed(&self, factor: f64) -> f64 {
        let (min, max) = self.speed_range;
        factor.max(min).min(max)
    }
}
