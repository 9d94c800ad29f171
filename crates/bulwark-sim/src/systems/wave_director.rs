//! Wave director: escalates the attack on a fixed interval.
//!
//! The only source of hostile entities. Each wave brings `min(wave, cap)`
//! missiles and, from the bomber wave on, a handful of bombers. Missiles are
//! always spawned before bombers.

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use bulwark_core::events::SimEvent;

use crate::world::World;
use crate::world_setup;

/// Escalation state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveState {
    /// Current wave, starting at 1.
    pub wave_number: u32,
    /// Simulation time of the last escalation (seconds).
    pub last_spawn_at: f64,
}

impl Default for WaveState {
    fn default() -> Self {
        Self {
            wave_number: 1,
            last_spawn_at: 0.0,
        }
    }
}

impl WaveState {
    /// Seconds until the next escalation, never negative.
    pub fn next_wave_in(&self, now: f64, interval: f64) -> f64 {
        (self.last_spawn_at + interval - now).max(0.0)
    }
}

/// Missiles in a given wave.
pub fn missiles_for_wave(wave: u32, cap: u32) -> u32 {
    wave.min(cap)
}

/// Bombers in a given wave.
pub fn bombers_for_wave(wave: u32, first_wave: u32, cap: u32) -> u32 {
    if wave >= first_wave {
        (wave - first_wave + 1).min(cap)
    } else {
        0
    }
}

/// Escalate if the interval has elapsed. Returns true when a wave fired.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng) -> bool {
    let now = world.now();
    if now - world.waves.last_spawn_at <= world.tuning.wave_interval_secs {
        return false;
    }

    world.waves.wave_number = world.waves.wave_number.saturating_add(1);
    world.waves.last_spawn_at = now;
    world.score.waves_survived += 1;

    let wave = world.waves.wave_number;
    let missiles = missiles_for_wave(wave, world.tuning.max_missiles_per_wave);
    let bombers = bombers_for_wave(
        wave,
        world.tuning.bomber_first_wave,
        world.tuning.max_bombers_per_wave,
    );

    for _ in 0..missiles {
        world_setup::spawn_missile(world, rng, wave);
    }
    for _ in 0..bombers {
        world_setup::spawn_bomber(world, rng);
    }

    world.record(SimEvent::WaveIncoming {
        wave,
        missiles,
        bombers,
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missile_count_caps_at_five() {
        let counts: Vec<u32> = (1..=7).map(|w| missiles_for_wave(w, 5)).collect();
        assert_eq!(counts, vec![1, 2, 3, 4, 5, 5, 5]);
    }

    #[test]
    fn test_bomber_count_from_wave_three() {
        let counts: Vec<u32> = (1..=7).map(|w| bombers_for_wave(w, 3, 3)).collect();
        assert_eq!(counts, vec![0, 0, 1, 2, 3, 3, 3]);
    }

    #[test]
    fn test_next_wave_in() {
        let state = WaveState {
            wave_number: 2,
            last_spawn_at: 30.1,
        };
        assert!((state.next_wave_in(40.1, 30.0) - 20.0).abs() < 1e-9);
        assert_eq!(state.next_wave_in(100.0, 30.0), 0.0);
    }
}
