//! Simulation constants and tuning defaults.
//!
//! Rates tuned as amounts per 3-second refresh are expressed
//! here per second, derived from [`REFERENCE_INTERVAL_SECS`].

/// Interval the per-opportunity rates below are tuned against (seconds).
pub const REFERENCE_INTERVAL_SECS: f64 = 3.0;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// --- Base ---

/// Default HQ latitude (decimal degrees).
pub const DEFAULT_HQ_LAT: f64 = 19.0760;

/// Default HQ longitude (decimal degrees).
pub const DEFAULT_HQ_LON: f64 = 72.8777;

/// Cash available at the start of a session.
pub const STARTING_CASH: f64 = 2000.0;

/// Structures must be built within this distance of HQ (km).
pub const MAX_BUILD_RADIUS_KM: f64 = 50.0;

/// Minimum spacing between two structures (km).
pub const MIN_STRUCTURE_SPACING_KM: f64 = 2.0;

// --- Structures ---

pub const MISSILE_SILO_COST: f64 = 400.0;
pub const MISSILE_SILO_HEALTH: f64 = 150.0;
pub const SAM_SITE_COST: f64 = 600.0;
pub const SAM_SITE_HEALTH: f64 = 100.0;
pub const AIRFIELD_COST: f64 = 800.0;
pub const AIRFIELD_HEALTH: f64 = 200.0;
pub const RADAR_STATION_COST: f64 = 300.0;
pub const RADAR_STATION_HEALTH: f64 = 75.0;
pub const RESOURCE_DEPOT_COST: f64 = 500.0;
pub const RESOURCE_DEPOT_HEALTH: f64 = 120.0;

/// Cash per missing hit point when repairing.
pub const REPAIR_COST_PER_HP: f64 = 2.0;

/// Fraction of the build cost returned on demolition.
pub const DEMOLISH_REFUND_FRACTION: f64 = 0.5;

// --- Economy ---

/// Passive income per second before depot bonuses.
pub const BASE_INCOME_PER_SEC: f64 = 25.0 / REFERENCE_INTERVAL_SECS;

/// Income bonus per resource depot (fraction of base).
pub const DEPOT_INCOME_BONUS: f64 = 0.25;

// --- Waves ---

/// Seconds between wave escalations.
pub const WAVE_INTERVAL_SECS: f64 = 30.0;

/// Upper bound on missiles per wave.
pub const MAX_MISSILES_PER_WAVE: u32 = 5;

/// First wave that brings bombers.
pub const BOMBER_FIRST_WAVE: u32 = 3;

/// Upper bound on bombers per wave.
pub const MAX_BOMBERS_PER_WAVE: u32 = 3;

// --- Incoming missiles ---

/// Flight progress per second at wave 0.
pub const MISSILE_BASE_SPEED: f64 = 0.05 / REFERENCE_INTERVAL_SECS;

/// Additional flight progress per second per wave.
pub const MISSILE_SPEED_GROWTH: f64 = 0.005 / REFERENCE_INTERVAL_SECS;

/// Warhead damage at wave 0.
pub const MISSILE_BASE_DAMAGE: f64 = 20.0;

/// Additional warhead damage per wave.
pub const MISSILE_DAMAGE_GROWTH: f64 = 5.0;

/// Launch distance band from HQ (km).
pub const MISSILE_LAUNCH_RANGE_MIN_KM: f64 = 150.0;
pub const MISSILE_LAUNCH_RANGE_MAX_KM: f64 = 450.0;

/// Aim-point jitter around HQ on each axis (degrees).
pub const MISSILE_TARGET_JITTER_DEG: f64 = 0.3;

/// Blast radius on impact (km). Damage falls off linearly to zero at the edge.
pub const BLAST_RADIUS_KM: f64 = 8.0;

// --- SAM ---

/// SAM sites engage missiles whose aim point lies within this range (km).
pub const SAM_INTERCEPT_RANGE_KM: f64 = 20.0;

/// Kill chance per SAM per reference interval.
pub const SAM_INTERCEPT_PROBABILITY: f64 = 0.6;

pub const SAM_INTERCEPT_SCORE: u64 = 25;

// --- Bombers ---

/// Spawn offset from HQ on each axis (degrees).
pub const BOMBER_SPAWN_OFFSET_DEG: f64 = 2.0;

pub const BOMBER_HEALTH: f64 = 100.0;

/// Fraction of the remaining distance covered per reference interval.
pub const BOMBER_STEP_FRACTION: f64 = 0.1;

/// Bombers attack instead of moving once this close to their target (km).
pub const BOMBER_ATTACK_RANGE_KM: f64 = 1.0;

/// Damage dealt per second while attacking.
pub const BOMBER_DAMAGE_PER_SEC: f64 = 30.0 / REFERENCE_INTERVAL_SECS;

// --- Jets ---

pub const JET_COST: f64 = 200.0;

/// Jets homed at one airfield, grounded ones included.
pub const JET_CAPACITY_PER_AIRFIELD: usize = 3;

pub const JET_STARTING_MISSILES: u32 = 6;

pub const JET_MAX_FUEL: f64 = 100.0;

pub const JET_FUEL_BURN_PER_SEC: f64 = 1.0 / REFERENCE_INTERVAL_SECS;

/// Maximum random patrol drift per axis per second (degrees).
pub const JET_PATROL_DRIFT_DEG_PER_SEC: f64 = 0.05 / REFERENCE_INTERVAL_SECS;

pub const JET_ENGAGEMENT_RANGE_KM: f64 = 5.0;

pub const JET_KILL_SCORE: u64 = 100;

// --- Silo launches ---

/// Silos can target missiles aimed within this range of the silo (km).
pub const SILO_TARGETING_RANGE_KM: f64 = 50.0;

pub const SILO_HIT_PROBABILITY: f64 = 0.8;

pub const SILO_KILL_SCORE: u64 = 50;

pub const SILO_STARTING_MISSILES: u32 = 8;

// --- Resource nodes ---

pub const RESOURCE_NODE_COUNT: usize = 5;
pub const RESOURCE_NODE_RANGE_MIN_KM: f64 = 10.0;
pub const RESOURCE_NODE_RANGE_MAX_KM: f64 = 40.0;
pub const RESOURCE_NODE_MIN_AMOUNT: u32 = 200;
pub const RESOURCE_NODE_MAX_AMOUNT: u32 = 500;

// --- Clock ---

/// Largest sub-step the clock will integrate in one go (seconds).
pub const MAX_SUBSTEP_SECS: f64 = 0.1;

pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 3.0;

// --- Telemetry ---

/// Alerts retained in the rolling log.
pub const ALERT_LOG_CAPACITY: usize = 50;
