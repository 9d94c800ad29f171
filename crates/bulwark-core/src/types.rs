//! Fundamental geographic and simulation types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another point in kilometers.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        crate::geo::distance_km(*self, *other)
    }

    /// Initial bearing to another point in radians (0 = North, clockwise).
    pub fn bearing_to(&self, other: &GeoPoint) -> f64 {
        crate::geo::initial_bearing(*self, *other)
    }

    /// Linear interpolation in degree space. `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * t,
            lon: self.lon + (other.lon - self.lon) * t,
        }
    }

    /// Move `fraction` of the remaining degree-space vector toward `target`.
    pub fn step_toward(&self, target: &GeoPoint, fraction: f64) -> GeoPoint {
        self.lerp(target, fraction.clamp(0.0, 1.0))
    }

    /// Offset by raw degree deltas.
    pub fn offset(&self, dlat: f64, dlon: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + dlat,
            lon: self.lon + dlon,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of sub-steps executed so far.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one sub-step of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a player structure.
    StructureId
);
entity_id!(
    /// Identifier of a friendly fighter jet.
    JetId
);
entity_id!(
    /// Identifier of an incoming enemy missile.
    MissileId
);
entity_id!(
    /// Identifier of an enemy bomber.
    AircraftId
);
entity_id!(
    /// Identifier of a collectible resource node.
    NodeId
);
